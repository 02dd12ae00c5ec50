use convert_case::{Case, Casing};
use darling::FromMeta;
use derive_more::Display;
use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use syn::{Expr, ExprUnary, Lit, UnOp};

///
/// Value
///
/// A literal payload carried alongside a member declaration.
///

#[derive(Clone, Debug, Deserialize, Display, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    #[display("{_0:?}")]
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl FromMeta for Value {
    fn from_expr(expr: &Expr) -> darling::Result<Self> {
        match expr {
            Expr::Lit(lit) => Self::from_value(&lit.lit),
            Expr::Group(group) => Self::from_expr(&group.expr),

            // `value = -1` arrives as a unary negation around the literal
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(_),
                expr,
                ..
            }) => match Self::from_expr(expr)? {
                Self::Int(v) => Ok(Self::Int(-v)),
                Self::Float(v) => Ok(Self::Float(-v)),
                _ => Err(darling::Error::custom("only numbers can be negated").with_span(expr)),
            },

            _ => Err(darling::Error::unexpected_expr_type(expr)),
        }
    }

    fn from_value(lit: &Lit) -> darling::Result<Self> {
        match lit {
            Lit::Bool(b) => Ok(Self::Bool(b.value)),
            Lit::Int(i) => Ok(Self::Int(i.base10_parse()?)),
            Lit::Float(f) => Ok(Self::Float(f.base10_parse()?)),
            Lit::Str(s) => Ok(Self::Text(s.value())),
            _ => Err(darling::Error::unexpected_lit_type(lit)),
        }
    }
}

impl ToTokens for Value {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let q = match self {
            Self::Bool(v) => quote!(#v),
            Self::Int(v) if *v < 0 => {
                let lit = Literal::u64_unsuffixed(v.unsigned_abs());
                quote!(-#lit)
            }
            Self::Int(v) => Literal::i64_unsuffixed(*v).into_token_stream(),
            Self::Float(v) if *v < 0.0 => {
                let lit = Literal::f64_unsuffixed(-v);
                quote!(-#lit)
            }
            Self::Float(v) => Literal::f64_unsuffixed(*v).into_token_stream(),
            Self::Text(v) => quote!(#v),
        };

        tokens.extend(q);
    }
}

///
/// DuplicateValuePolicy
///
/// What to do when two members end up with the same assigned value.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateValuePolicy {
    /// Fail generation with `SchemaError::DuplicateValue`.
    #[default]
    #[display("reject")]
    Reject,

    /// Keep the last-declared member's label in the shared slot.
    #[display("last_write_wins")]
    LastWriteWins,
}

impl FromStr for DuplicateValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "last_write_wins" => Ok(Self::LastWriteWins),
            _ => Err(format!("unknown duplicate value policy '{s}'")),
        }
    }
}

impl FromMeta for DuplicateValuePolicy {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }
}

///
/// LabelCase
///
/// Formatting rule applied to a member name when it becomes a label.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum LabelCase {
    #[display("camel")]
    Camel,
    #[display("kebab")]
    Kebab,
    #[display("lower")]
    Lower,
    #[display("snake")]
    Snake,
    #[display("title")]
    Title,
    #[display("upper")]
    Upper,
    #[default]
    #[display("verbatim")]
    Verbatim,
}

impl LabelCase {
    /// Format a member name.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => name.to_case(Case::Camel),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::Lower => name.to_lowercase(),
            Self::Snake => name.to_case(Case::Snake),
            Self::Title => name.to_case(Case::Title),
            Self::Upper => name.to_uppercase(),
            Self::Verbatim => name.to_string(),
        }
    }
}

impl FromStr for LabelCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(Self::Camel),
            "kebab" => Ok(Self::Kebab),
            "lower" => Ok(Self::Lower),
            "snake" => Ok(Self::Snake),
            "title" => Ok(Self::Title),
            "upper" => Ok(Self::Upper),
            "verbatim" => Ok(Self::Verbatim),
            _ => Err(format!("unknown label case '{s}'")),
        }
    }
}

impl FromMeta for LabelCase {
    fn from_string(s: &str) -> Result<Self, darling::Error> {
        s.parse::<Self>()
            .map_err(|_| darling::Error::unknown_value(s))
    }
}

///
/// TESTS
///
