//! Attribute macros for declaring enumerations and their metadata tables.

use darling::Error as DarlingError;
use proc_macro::TokenStream;

mod helper;
mod node;

/// Turn a unit struct into a synthesized enumeration.
///
/// ```ignore
/// #[enumeration(member(ident = "Ok", value = 200), member(ident = "NotFound", value = 404))]
/// pub struct HttpStatus;
/// ```
#[proc_macro_attribute]
pub fn enumeration(args: TokenStream, input: TokenStream) -> TokenStream {
    node::enumeration::expand(args.into(), input.into())
        .unwrap_or_else(DarlingError::write_errors)
        .into()
}

/// Turn a unit struct into a metadata table over an enumeration.
///
/// ```ignore
/// #[table(owner = "Level", ty = "u8", row(member = "Low", value = 0))]
/// pub struct LevelScore;
/// ```
#[proc_macro_attribute]
pub fn table(args: TokenStream, input: TokenStream) -> TokenStream {
    node::table::expand(args.into(), input.into())
        .unwrap_or_else(DarlingError::write_errors)
        .into()
}

///
/// Prelude
///

mod prelude {
    pub use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
    pub use enumfactory_schema::{
        emit::{EnumTokens, RowTokens, TableSource, TableTokens},
        prelude::*,
    };
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, quote};
    pub use syn::{DeriveInput, Ident, Path, Type};
}
