use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Generation-time failure. Every variant is fatal to the generation step.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SchemaError {
    #[error("duplicate member name '{name}' in enumeration '{enum_name}'")]
    DuplicateName { enum_name: String, name: String },

    #[error("member '{name}' appears more than once in table '{table}'")]
    DuplicateRow { table: String, name: String },

    #[error(
        "enumeration '{enum_name}' assigns value {value} to both '{first}' and '{second}'"
    )]
    DuplicateValue {
        enum_name: String,
        value: i64,
        first: String,
        second: String,
    },

    #[error("enumeration '{enum_name}' declares no members")]
    EmptyMemberList { enum_name: String },

    #[error("invalid member name '{name}' in '{enum_name}': {reason}")]
    InvalidName {
        enum_name: String,
        name: String,
        reason: String,
    },

    #[error("member '{name}' of enumeration '{enum_name}' has negative value {value}")]
    NegativeValue {
        enum_name: String,
        name: String,
        value: i64,
    },

    #[error("row '{name}' of table '{table}' needs exactly one payload value, found {found}")]
    PayloadArity {
        table: String,
        name: String,
        found: usize,
    },

    #[error(
        "member '{name}' of enumeration '{enum_name}' needs {needed} table slots, the limit is {max}"
    )]
    TotalTooLarge {
        enum_name: String,
        name: String,
        needed: u128,
        max: usize,
    },

    #[error("unknown member '{name}' in table '{table}' for enumeration '{enum_name}'")]
    UnknownMember {
        table: String,
        enum_name: String,
        name: String,
    },
}

impl SchemaError {
    /// Name of the member or row the error points at, if any.
    #[must_use]
    pub fn member(&self) -> Option<&str> {
        match self {
            Self::DuplicateName { name, .. }
            | Self::DuplicateRow { name, .. }
            | Self::InvalidName { name, .. }
            | Self::NegativeValue { name, .. }
            | Self::PayloadArity { name, .. }
            | Self::TotalTooLarge { name, .. }
            | Self::UnknownMember { name, .. } => Some(name),
            Self::DuplicateValue { second, .. } => Some(second),
            Self::EmptyMemberList { .. } => None,
        }
    }
}
