use enumfactory_schema::SchemaError;
use std::{env::VarError, io};
use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum BuildError {
    #[error("enumeration '{0}' is declared more than once")]
    DuplicateEnum(String),

    #[error("table '{0}' is declared more than once")]
    DuplicateTable(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("schema file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("table '{0}' has the same name as an enumeration")]
    NameClash(String),

    #[error("OUT_DIR is not available: {0}")]
    OutDir(#[from] VarError),

    #[error("cannot parse {what} '{input}': {source}")]
    Parse {
        what: &'static str,
        input: String,
        source: syn::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("table '{table}' refers to unknown enumeration '{owner}'")]
    UnknownOwner { table: String, owner: String },
}
