//! Generation model for enumfactory.
//!
//! A member list goes in, an [`Enumeration`](node::Enumeration) and any number
//! of [`MetadataTable`](node::MetadataTable)s come out. The proc-macro and the
//! build-script generator both run the same synthesizer and the same emitter,
//! so both paths agree on value assignment, `total`/`count` and absent slots.

pub mod access;
pub mod emit;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Upper bound on `total`; every table reserves `total` slots.
pub const MAX_TOTAL: usize = 1 << 16;

/// Maximum length of a member or type name.
pub const MAX_NAME_LEN: usize = 128;

pub use error::SchemaError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        access::{is_valid, safe_get, to_label},
        error::SchemaError,
        node::*,
        types::{DuplicateValuePolicy, LabelCase, Value},
    };
    pub use serde::{Deserialize, Serialize};
}
