//! Build-script code generation for enumfactory.
//!
//! Reads a JSON schema file, runs the same synthesizer and emitter as the
//! attribute macros, and writes the resulting Rust items into `OUT_DIR` for
//! the consuming crate to `include!`.

mod error;
mod macros;
mod schema_file;

pub use error::BuildError;
pub use schema_file::{SchemaFile, SourceSpec, TableSpec};

use enumfactory_schema::{
    emit::{EnumTokens, RowTokens, TableSource, TableTokens},
    prelude::*,
    validate::naming::validate_ident,
};
use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, format_ident, quote};
use std::{
    collections::{BTreeMap, BTreeSet},
    env, fs,
    path::{Path, PathBuf},
};
use syn::Type;
use tracing::debug;

/// Generate Rust source for a JSON schema document.
pub fn generate(json: &str) -> Result<String, BuildError> {
    let file: SchemaFile = serde_json::from_str(json)?;
    let tokens = Generator::new(&file)?.generate()?;

    Ok(tokens.to_string())
}

/// Generate Rust source for the JSON schema file at `path`.
pub fn generate_file(path: impl AsRef<Path>) -> Result<String, BuildError> {
    let json = fs::read_to_string(path)?;

    generate(&json)
}

///
/// BuildConfig
///
/// Where the schema is read from and where the generated file is written.
///

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub schema: PathBuf,
    pub out_file: String,
    pub rerun_if_changed: bool,
}

impl BuildConfig {
    pub const DEFAULT_OUT_FILE: &'static str = "enumfactory.rs";

    pub fn new(schema: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            out_file: Self::DEFAULT_OUT_FILE.to_string(),
            rerun_if_changed: true,
        }
    }

    #[must_use]
    pub fn out_file(mut self, out_file: impl Into<String>) -> Self {
        self.out_file = out_file.into();
        self
    }

    #[must_use]
    pub const fn rerun_if_changed(mut self, enabled: bool) -> Self {
        self.rerun_if_changed = enabled;
        self
    }

    /// Generate into Cargo's `OUT_DIR`.
    pub fn run(&self) -> Result<PathBuf, BuildError> {
        let out_dir = env::var("OUT_DIR")?;

        if self.rerun_if_changed {
            println!("cargo:rerun-if-changed={}", self.schema.display());
        }

        self.write_to(out_dir)
    }

    /// Generate into `out_dir`, returning the written file's path.
    pub fn write_to(&self, out_dir: impl AsRef<Path>) -> Result<PathBuf, BuildError> {
        let output = generate_file(&self.schema)?;
        let path = out_dir.as_ref().join(&self.out_file);

        fs::write(&path, output)?;
        debug!(
            schema = %self.schema.display(),
            out = %path.display(),
            "wrote generated enumerations"
        );

        Ok(path)
    }
}

///
/// Generator
///

struct Generator<'a> {
    file: &'a SchemaFile,
    enums: BTreeMap<&'a str, Enumeration>,
}

impl<'a> Generator<'a> {
    fn new(file: &'a SchemaFile) -> Result<Self, BuildError> {
        let mut enums = BTreeMap::new();

        for def in &file.enums {
            check_type_name(&def.name)?;
            let enumeration = def.synthesize()?;
            if enums.insert(def.name.as_str(), enumeration).is_some() {
                return Err(BuildError::DuplicateEnum(def.name.clone()));
            }
        }

        Ok(Self { file, enums })
    }

    fn generate(&self) -> Result<TokenStream, BuildError> {
        let mut tokens = quote!();

        // declaration order, so the output is stable
        for def in &self.file.enums {
            if let Some(enumeration) = self.enums.get(def.name.as_str()) {
                tokens.extend(EnumTokens::new(enumeration).into_token_stream());
            }
        }

        let mut tables = BTreeSet::new();
        for spec in &self.file.tables {
            if !tables.insert(spec.name.as_str()) {
                return Err(BuildError::DuplicateTable(spec.name.clone()));
            }
            if self.enums.contains_key(spec.name.as_str()) {
                return Err(BuildError::NameClash(spec.name.clone()));
            }
            check_type_name(&spec.name)?;
            tokens.extend(self.table(spec)?.into_token_stream());
        }

        Ok(tokens)
    }

    fn table(&self, spec: &TableSpec) -> Result<TableTokens, BuildError> {
        let owner = self
            .enums
            .get(spec.owner.as_str())
            .ok_or_else(|| BuildError::UnknownOwner {
                table: spec.name.clone(),
                owner: spec.owner.clone(),
            })?;

        let source = match &spec.source {
            SourceSpec::Payload => TableSource::Payload,
            SourceSpec::Label { case } => TableSource::Label(*case),
            SourceSpec::Extract { path } => TableSource::Extract(parse("extract path", path)?),
        };
        let ty = match (&spec.ty, source.default_ty()) {
            (Some(ty), _) => parse::<Type>("type", ty)?,
            (None, Some(ty)) => ty,
            (None, None) => {
                return Err(BuildError::Parse {
                    what: "type",
                    input: String::new(),
                    source: syn::Error::new(
                        Span::call_site(),
                        format!("table '{}' needs a `ty`", spec.name),
                    ),
                });
            }
        };

        // resolves every row against the owner before anything is emitted
        let mut rows = Vec::with_capacity(spec.rows.len());
        try_build_table(owner, &spec.name, &spec.rows, |name, payload| {
            rows.push(RowTokens {
                member: name.to_string(),
                span: Span::call_site(),
                value: source.row_value(&spec.name, name, payload)?,
            });
            Ok(())
        })?;

        Ok(TableTokens {
            ident: format_ident!("{}", spec.name),
            vis: quote!(pub),
            attrs: quote!(),
            owner: format_ident!("{}", owner.name()).into(),
            ty,
            rows,
        })
    }
}

// generated type names are emitted as identifiers too
fn check_type_name(name: &str) -> Result<(), SchemaError> {
    validate_ident(name).map_err(|reason| SchemaError::InvalidName {
        enum_name: name.to_string(),
        name: name.to_string(),
        reason,
    })
}

fn parse<T: syn::parse::Parse>(what: &'static str, input: &str) -> Result<T, BuildError> {
    syn::parse_str(input).map_err(|source| BuildError::Parse {
        what,
        input: input.to_string(),
        source,
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{File, Item};

    const STATUS: &str = r#"{
        "enums": [
            { "name": "HttpStatus",
              "members": [
                { "name": "Ok", "value": 200 },
                { "name": "NotFound", "value": 404 },
                { "name": "Error", "value": 500 }
              ] }
        ],
        "tables": [
            { "name": "HttpStatusText", "owner": "HttpStatus", "ty": "&'static str",
              "rows": [
                { "member": "Ok", "payload": ["OK"] },
                { "member": "NotFound", "payload": ["Not Found"] }
              ] },
            { "name": "HttpStatusSlug", "owner": "HttpStatus",
              "source": { "kind": "label", "case": "kebab" },
              "rows": [ { "member": "NotFound" } ] }
        ]
    }"#;

    fn parse_output(output: &str) -> File {
        syn::parse_file(output).expect("generated source should parse")
    }

    #[test]
    fn generates_enums_then_tables() {
        let file = parse_output(&generate(STATUS).unwrap());
        let names: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(e) => Some(e.ident.to_string()),
                Item::Struct(s) => Some(s.ident.to_string()),
                _ => None,
            })
            .collect();

        assert_eq!(names, ["HttpStatus", "HttpStatusText", "HttpStatusSlug"]);
    }

    #[test]
    fn output_carries_totals_and_rows() {
        let output = generate(STATUS).unwrap();

        assert!(output.contains("TOTAL : usize = 501"), "{output}");
        assert!(output.contains("\"Not Found\""), "{output}");
        assert!(output.contains("\"not-found\""), "{output}");
    }

    #[test]
    fn unknown_members_fail_at_build_time() {
        let json = r#"{
            "enums": [ { "name": "Axis", "members": [ {"name": "X"}, {"name": "Y"}, {"name": "Z"} ] } ],
            "tables": [ { "name": "AxisLabel", "owner": "Axis",
                          "source": { "kind": "label" },
                          "rows": [ {"member": "X"}, {"member": "Y"}, {"member": "W"} ] } ]
        }"#;
        let err = generate(json).unwrap_err();

        assert!(
            matches!(
                err,
                BuildError::Schema(SchemaError::UnknownMember { ref name, .. }) if name == "W"
            ),
            "{err}"
        );
    }

    #[test]
    fn duplicate_names_fail_at_build_time() {
        let json = r#"{ "enums": [ { "name": "Letters",
            "members": [ {"name": "A"}, {"name": "B"}, {"name": "A"} ] } ] }"#;

        assert!(matches!(
            generate(json),
            Err(BuildError::Schema(SchemaError::DuplicateName { .. }))
        ));
    }

    #[test]
    fn tables_need_a_known_owner() {
        let json = r#"{ "tables": [ { "name": "Orphan", "owner": "Missing", "ty": "u8" } ] }"#;

        assert!(matches!(
            generate(json),
            Err(BuildError::UnknownOwner { ref owner, .. }) if owner == "Missing"
        ));
    }

    #[test]
    fn repeated_declarations_are_rejected() {
        let json = r#"{ "enums": [
            { "name": "A", "members": [ {"name": "X"} ] },
            { "name": "A", "members": [ {"name": "Y"} ] } ] }"#;
        assert!(matches!(generate(json), Err(BuildError::DuplicateEnum(name)) if name == "A"));

        let json = r#"{ "enums": [ { "name": "A", "members": [ {"name": "X"} ] } ],
            "tables": [
                { "name": "T", "owner": "A", "source": {"kind": "label"} },
                { "name": "T", "owner": "A", "source": {"kind": "label"} } ] }"#;
        assert!(matches!(generate(json), Err(BuildError::DuplicateTable(name)) if name == "T"));
    }

    #[test]
    fn bad_type_strings_are_reported() {
        let json = r#"{ "enums": [ { "name": "A", "members": [ {"name": "X"} ] } ],
            "tables": [ { "name": "T", "owner": "A", "ty": "not a type" } ] }"#;

        assert!(matches!(
            generate(json),
            Err(BuildError::Parse { what: "type", .. })
        ));
    }

    #[test]
    fn type_names_must_be_identifiers() {
        let json = r#"{ "enums": [ { "name": "Http Status", "members": [ {"name": "Ok"} ] } ] }"#;

        assert!(matches!(
            generate(json),
            Err(BuildError::Schema(SchemaError::InvalidName { .. }))
        ));
    }

    #[test]
    fn tables_cannot_reuse_an_enumeration_name() {
        let json = r#"{ "enums": [ { "name": "Axis", "members": [ {"name": "X"} ] } ],
            "tables": [ { "name": "Axis", "owner": "Axis", "source": {"kind": "label"} } ] }"#;

        assert!(matches!(generate(json), Err(BuildError::NameClash(name)) if name == "Axis"));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let json = r#"{ "enums": [ { "name": "HttpStatus",
            "members": [ {"name": "Ok", "vaule": 200}, {"name": "NotFound", "value": 404} ] } ] }"#;
        assert!(matches!(generate(json), Err(BuildError::Json(_))));

        let json = r#"{ "enums": [ { "name": "HttpStatus", "duplicate": "last_write_wins",
            "members": [ {"name": "Ok"} ] } ] }"#;
        assert!(matches!(generate(json), Err(BuildError::Json(_))));

        let json = r#"{ "enums": [ { "name": "A", "members": [ {"name": "X"} ] } ],
            "tables": [ { "name": "T", "owner": "A", "source": {"kind": "label"},
                          "rows": [ {"member": "X", "paylod": [1]} ] } ] }"#;
        assert!(matches!(generate(json), Err(BuildError::Json(_))));
    }

    #[test]
    fn schema_files_compare_by_content() {
        let a: SchemaFile = serde_json::from_str(STATUS).unwrap();
        let mut b: SchemaFile = serde_json::from_str(STATUS).unwrap();
        assert_eq!(a, b);

        b.enums[0].members[1].value = Some(405);
        assert_ne!(a, b);
        assert_eq!(a.tables[0].rows[0].name, "Ok");
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(generate("{ \"enums\": 3 }"), Err(BuildError::Json(_))));
    }

    #[test]
    fn last_write_wins_is_read_from_the_file() {
        let json = r#"{ "enums": [ { "name": "Alias", "duplicates": "last_write_wins",
            "members": [ {"name": "Old", "value": 1}, {"name": "New", "value": 1} ] } ] }"#;
        let file = parse_output(&generate(json).unwrap());

        let Some(Item::Enum(item)) = file.items.first() else {
            panic!("first item should be the enum");
        };
        assert!(item.variants.iter().all(|v| v.discriminant.is_none()));
    }

    #[test]
    fn config_writes_into_the_out_dir() {
        let dir = env::temp_dir().join(format!("enumfactory-build-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let schema = dir.join("schema.json");
        fs::write(&schema, STATUS).unwrap();

        let path = BuildConfig::new(&schema)
            .out_file("status.rs")
            .write_to(&dir)
            .unwrap();

        assert_eq!(path, dir.join("status.rs"));
        parse_output(&fs::read_to_string(&path).unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }
}
