//! ## Crate layout
//! - `core`: runtime traits and tables that generated code implements.
//! - `schema`: the generation model: synthesizer, validation and emitter.
//! - `build` (feature `build`): JSON schema codegen for `build.rs`.
//! - `enumeration` / `table`: attribute macros.
//!
//! ```ignore
//! use enumfactory::prelude::*;
//!
//! #[enumeration(member(ident = "Ok", value = 200), member(ident = "NotFound", value = 404))]
//! pub struct HttpStatus;
//!
//! assert_eq!(HttpStatus::TOTAL, 405);
//! assert_eq!(HttpStatus::to_label(404), Some("NotFound"));
//! assert!(!HttpStatus::is_valid(201));
//! ```

#[cfg(feature = "build")]
pub use enumfactory_build as build;
pub use enumfactory_core as core;
pub use enumfactory_schema as schema;

// generated code names its runtime through `::enumfactory`
extern crate self as enumfactory;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use enumfactory_derive::{enumeration, table};

//
// Free functions
//

pub use enumfactory_core::{is_valid, safe_get, to_label};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        core::{EnumKind, Member, MetaTable, TableKind},
        enumeration, is_valid, safe_get, table, to_label,
    };
}

///
/// TESTS
///
