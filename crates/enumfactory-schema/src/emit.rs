//! Token emission for synthesized enumerations and tables.
//!
//! Generated code reaches the runtime through `::enumfactory::core`, and holds
//! every table in a `const` item.

use crate::prelude::*;
use proc_macro2::{Literal, Span, TokenStream};
use quote::{ToTokens, format_ident, quote, quote_spanned};
use syn::{Ident, Path, Type, parse_quote};

fn runtime() -> TokenStream {
    quote!(::enumfactory::core)
}

///
/// EnumTokens
///
/// Emits the enum type, its `TOTAL`/`COUNT` constants, the label table and
/// the `EnumKind` implementation.
///

pub struct EnumTokens<'a> {
    pub enumeration: &'a Enumeration,
    pub ident: Ident,
    pub vis: TokenStream,
    pub attrs: TokenStream,
}

impl<'a> EnumTokens<'a> {
    #[must_use]
    pub fn new(enumeration: &'a Enumeration) -> Self {
        Self {
            enumeration,
            ident: format_ident!("{}", enumeration.name()),
            vis: quote!(pub),
            attrs: quote!(),
        }
    }

    #[must_use]
    pub fn with_ident(mut self, ident: Ident) -> Self {
        self.ident = ident;
        self
    }

    #[must_use]
    pub fn with_vis(mut self, vis: impl ToTokens) -> Self {
        self.vis = vis.into_token_stream();
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl ToTokens) -> Self {
        self.attrs = attrs.into_token_stream();
        self
    }

    fn type_part(&self, variants: &[Ident], values: &[Literal]) -> TokenStream {
        let Self {
            ident, vis, attrs, ..
        } = self;

        // rust rejects repeated discriminants, so shared values drop them
        let (repr, body) = if self.enumeration.has_shared_values() {
            (quote!(), quote!(#(#variants),*))
        } else {
            (quote!(#[repr(i64)]), quote!(#(#variants = #values),*))
        };

        quote! {
            #attrs
            #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
            #[allow(non_camel_case_types)]
            #repr
            #vis enum #ident {
                #body
            }
        }
    }

    fn inherent_part(&self, variants: &[Ident], values: &[Literal], names: &[&str]) -> TokenStream {
        let rt = runtime();
        let e = self.enumeration;
        let ident = &self.ident;
        let total = Literal::usize_unsuffixed(e.total());
        let count = Literal::usize_unsuffixed(e.count());

        let mut label_writes = Vec::new();
        let mut arm_values = Vec::new();
        let mut arm_variants = Vec::new();
        for (value, label) in e.labels().iter() {
            let slot = Literal::i64_unsuffixed(value);
            label_writes.push(quote!(slots[#slot] = ::core::option::Option::Some(#label);));

            // from_value resolves shared values to the last-declared member
            if let Some(member) = e.member_at(value) {
                arm_values.push(Literal::i64_unsuffixed(value));
                arm_variants.push(format_ident!("{}", member.name));
            }
        }

        quote! {
            impl #ident {
                /// One past the largest assigned value.
                pub const TOTAL: usize = #total;

                /// Number of declared members.
                pub const COUNT: usize = #count;

                const LABEL_SLOTS: [::core::option::Option<&'static str>; #total] = {
                    let mut slots = [::core::option::Option::None; #total];
                    #(#label_writes)*
                    slots
                };

                #[must_use]
                pub const fn value(self) -> i64 {
                    match self {
                        #(Self::#variants => #values,)*
                    }
                }

                #[must_use]
                pub const fn from_value(value: i64) -> ::core::option::Option<Self> {
                    match value {
                        #(#arm_values => ::core::option::Option::Some(Self::#arm_variants),)*
                        _ => ::core::option::Option::None,
                    }
                }

                #[must_use]
                pub const fn name(self) -> &'static str {
                    match self {
                        #(Self::#variants => #names,)*
                    }
                }

                #[must_use]
                pub const fn is_valid(value: i64) -> bool {
                    <Self as #rt::EnumKind>::LABELS.contains(value)
                }

                #[must_use]
                pub const fn to_label(value: i64) -> ::core::option::Option<&'static str> {
                    match <Self as #rt::EnumKind>::LABELS.get(value) {
                        ::core::option::Option::Some(label) => ::core::option::Option::Some(*label),
                        ::core::option::Option::None => ::core::option::Option::None,
                    }
                }

                #[must_use]
                pub const fn slot_of(name: &str) -> ::core::option::Option<usize> {
                    #rt::find_slot(<Self as #rt::EnumKind>::ENTRIES, name)
                }
            }
        }
    }

    fn trait_part(&self, variants: &[Ident], values: &[Literal], names: &[&str]) -> TokenStream {
        let rt = runtime();
        let ident = &self.ident;
        let name = self.enumeration.name();

        quote! {
            impl #rt::EnumKind for #ident {
                const NAME: &'static str = #name;
                const TOTAL: usize = Self::TOTAL;
                const COUNT: usize = Self::COUNT;
                const MEMBERS: &'static [Self] = &[#(Self::#variants),*];
                const ENTRIES: &'static [#rt::Member] = &[#(#rt::Member::new(#names, #values)),*];
                const LABELS: #rt::MetaTable<&'static str, Self> =
                    #rt::MetaTable::new(&Self::LABEL_SLOTS);

                fn value(self) -> i64 {
                    #ident::value(self)
                }

                fn from_value(value: i64) -> ::core::option::Option<Self> {
                    #ident::from_value(value)
                }

                fn name(self) -> &'static str {
                    #ident::name(self)
                }
            }

            impl ::core::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(<Self as #rt::EnumKind>::label(*self))
                }
            }

            impl ::core::convert::From<#ident> for i64 {
                fn from(member: #ident) -> Self {
                    member.value()
                }
            }
        }
    }
}

impl ToTokens for EnumTokens<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let members = self.enumeration.members();
        let variants: Vec<Ident> = members
            .iter()
            .map(|m| format_ident!("{}", m.name))
            .collect();
        let values: Vec<Literal> = members
            .iter()
            .map(|m| Literal::i64_unsuffixed(m.value))
            .collect();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();

        tokens.extend(self.type_part(&variants, &values));
        tokens.extend(self.inherent_part(&variants, &values, &names));
        tokens.extend(self.trait_part(&variants, &values, &names));
    }
}

///
/// TableSource
///
/// Generation-time extractor: how a row becomes the value stored in its slot.
///

#[derive(Clone, Debug)]
pub enum TableSource {
    /// The row's single payload literal.
    Payload,

    /// The member name formatted by a case rule, as `&'static str`.
    Label(LabelCase),

    /// A `const fn(&'static str, payload...) -> T` called with the member name
    /// and the row's payload.
    Extract(Path),
}

impl TableSource {
    /// Value type implied by the source, if it fixes one.
    #[must_use]
    pub fn default_ty(&self) -> Option<Type> {
        match self {
            Self::Label(_) => Some(parse_quote!(&'static str)),
            Self::Payload | Self::Extract(_) => None,
        }
    }

    pub fn row_value(
        &self,
        table: &str,
        name: &str,
        payload: &[Value],
    ) -> Result<TokenStream, SchemaError> {
        match self {
            Self::Payload => match payload {
                [value] => Ok(value.to_token_stream()),
                _ => Err(SchemaError::PayloadArity {
                    table: table.to_string(),
                    name: name.to_string(),
                    found: payload.len(),
                }),
            },
            Self::Label(case) => {
                let label = case.apply(name);
                Ok(quote!(#label))
            }
            Self::Extract(path) => Ok(quote!(#path(#name #(, #payload)*))),
        }
    }
}

///
/// RowTokens
///

pub struct RowTokens {
    pub member: String,
    pub span: Span,
    pub value: TokenStream,
}

///
/// TableTokens
///
/// Emits a table type implementing `TableKind`. Rows are resolved against
/// the owner's entries during const evaluation; a row naming an unknown member
/// fails the build.
///

pub struct TableTokens {
    pub ident: Ident,
    pub vis: TokenStream,
    pub attrs: TokenStream,
    pub owner: Path,
    pub ty: Type,
    pub rows: Vec<RowTokens>,
}

impl ToTokens for TableTokens {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let rt = runtime();
        let Self {
            ident,
            vis,
            attrs,
            owner,
            ty,
            rows,
        } = self;
        let name = ident.to_string();
        let kind = quote!(<#owner as #rt::EnumKind>);

        let writes = rows.iter().map(|row| {
            let member = &row.member;
            let value = &row.value;
            let msg = format!("unknown member `{member}` for table `{name}`");

            quote_spanned! {row.span=>
                slots[match #rt::find_slot(#kind::ENTRIES, #member) {
                    ::core::option::Option::Some(slot) => slot,
                    ::core::option::Option::None => ::core::panic!(#msg),
                }] = ::core::option::Option::Some(#value);
            }
        });

        tokens.extend(quote! {
            #attrs
            #vis struct #ident;

            impl #ident {
                const SLOTS: [::core::option::Option<#ty>; #kind::TOTAL] = {
                    let mut slots = [const { ::core::option::Option::None }; #kind::TOTAL];
                    #(#writes)*
                    slots
                };

                #[must_use]
                pub const fn get(value: i64) -> ::core::option::Option<&'static #ty> {
                    <Self as #rt::TableKind>::TABLE.get(value)
                }

                #[must_use]
                pub fn get_member(member: #owner) -> ::core::option::Option<&'static #ty> {
                    <Self as #rt::TableKind>::get_member(member)
                }
            }

            impl #rt::TableKind for #ident {
                type Owner = #owner;
                type Value = #ty;

                const NAME: &'static str = #name;
                const TABLE: #rt::MetaTable<#ty, #owner> = #rt::MetaTable::new(&Self::SLOTS);
            }
        });
    }
}

///
/// TESTS
///
