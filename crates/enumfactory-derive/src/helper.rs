use crate::prelude::*;
use syn::{Data, DataStruct, Fields, Lit};

///
/// LitIdent
///
/// An identifier written as a string literal. Keeps the literal's span so
/// errors point at the name as written.
///

#[derive(Clone, Debug)]
pub struct LitIdent(pub Ident);

impl FromMeta for LitIdent {
    fn from_value(value: &Lit) -> darling::Result<Self> {
        match value {
            Lit::Str(s) => s.parse::<Ident>().map(Self).map_err(DarlingError::from),
            _ => Err(DarlingError::unexpected_lit_type(value)),
        }
    }
}

/// Parse the annotated item, which must be a plain unit struct.
pub fn parse_unit_struct(item: TokenStream, macro_name: &str) -> Result<DeriveInput, DarlingError> {
    let input: DeriveInput = syn::parse2(item)?;

    let is_unit = matches!(
        input.data,
        Data::Struct(DataStruct {
            fields: Fields::Unit,
            ..
        })
    );
    if !is_unit {
        return Err(DarlingError::custom(format!(
            "#[{macro_name}] must be placed on a unit struct, e.g. `pub struct {};`",
            input.ident
        ))
        .with_span(&input.ident));
    }

    if !input.generics.params.is_empty() {
        return Err(
            DarlingError::custom(format!("#[{macro_name}] does not support generics"))
                .with_span(&input.generics),
        );
    }

    Ok(input)
}

/// Attach a schema error to the last ident it names, falling back to `fallback`.
pub fn schema_error(err: &SchemaError, idents: &[&Ident], fallback: &Ident) -> DarlingError {
    let span = err
        .member()
        .and_then(|name| idents.iter().rev().find(|ident| **ident == name))
        .copied()
        .unwrap_or(fallback);

    DarlingError::custom(err.to_string()).with_span(span)
}

/// Outer attributes of the annotated item, forwarded onto the generated type.
pub fn forwarded_attrs(input: &DeriveInput) -> TokenStream {
    let attrs = &input.attrs;

    quote!(#(#attrs)*)
}
