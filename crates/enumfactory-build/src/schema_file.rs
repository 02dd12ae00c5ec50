use enumfactory_schema::prelude::*;

///
/// SchemaFile
///
/// Top-level JSON document read by the build script.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    #[serde(default)]
    pub enums: Vec<EnumDef>,

    #[serde(default)]
    pub tables: Vec<TableSpec>,
}

///
/// TableSpec
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    pub name: String,
    pub owner: String,

    /// Rust type of the slot values; label tables default to `&'static str`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,

    #[serde(default)]
    pub source: SourceSpec,

    #[serde(default)]
    pub rows: Vec<MemberDecl>,
}

///
/// SourceSpec
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSpec {
    #[default]
    Payload,

    Label {
        #[serde(default)]
        case: LabelCase,
    },

    Extract {
        path: String,
    },
}
