use crate::{
    helper::{LitIdent, forwarded_attrs, parse_unit_struct, schema_error},
    prelude::*,
};
use std::collections::HashSet;
use syn::{Expr, Meta, Token, punctuated::Punctuated};

///
/// TableArgs
///

#[derive(Debug, FromMeta)]
pub struct TableArgs {
    pub owner: Path,

    #[darling(default)]
    pub ty: Option<Type>,

    #[darling(default)]
    pub case: Option<LabelCase>,

    #[darling(default)]
    pub extract: Option<Path>,

    #[darling(multiple, rename = "row")]
    pub rows: Vec<RowArg>,
}

impl TableArgs {
    fn source(&self, table: &Ident) -> Result<TableSource, DarlingError> {
        match (&self.case, &self.extract) {
            (Some(_), Some(extract)) => Err(DarlingError::custom(
                "`case` and `extract` cannot be combined on one table",
            )
            .with_span(extract)),
            (Some(case), None) => Ok(TableSource::Label(*case)),
            (None, Some(extract)) => Ok(TableSource::Extract(extract.clone())),
            (None, None) if self.ty.is_some() => Ok(TableSource::Payload),
            (None, None) => Err(DarlingError::custom(
                "table needs `ty` for payload rows, or `case` for a label table",
            )
            .with_span(table)),
        }
    }

    fn value_ty(&self, source: &TableSource, table: &Ident) -> Result<Type, DarlingError> {
        self.ty
            .clone()
            .or_else(|| source.default_ty())
            .ok_or_else(|| {
                DarlingError::custom("`extract` tables need an explicit `ty`").with_span(table)
            })
    }

    fn check_rows(&self, table: &Ident) -> Result<(), DarlingError> {
        let mut errors = DarlingError::accumulator();
        let mut seen = HashSet::new();

        for row in &self.rows {
            let member = &row.member.0;
            if !seen.insert(member.to_string()) {
                let err = SchemaError::DuplicateRow {
                    table: table.to_string(),
                    name: member.to_string(),
                };
                errors.push(DarlingError::custom(err.to_string()).with_span(member));
            }
        }

        errors.finish()
    }
}

///
/// RowArg
///

#[derive(Debug, FromMeta)]
pub struct RowArg {
    pub member: LitIdent,

    #[darling(default)]
    pub value: Option<Value>,

    #[darling(default)]
    pub args: Option<Payload>,
}

impl RowArg {
    fn payload(&self) -> Vec<Value> {
        self.value
            .iter()
            .chain(self.args.iter().flat_map(|args| args.0.iter()))
            .cloned()
            .collect()
    }
}

///
/// Payload
///
/// `args(1, "two", -3.0)`: a list of literals, optionally negated.
///

#[derive(Debug, Default)]
pub struct Payload(pub Vec<Value>);

impl FromMeta for Payload {
    fn from_meta(item: &Meta) -> darling::Result<Self> {
        let Meta::List(list) = item else {
            return Err(DarlingError::unsupported_format("expected `args(...)`").with_span(item));
        };
        let exprs = list.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?;

        let mut errors = DarlingError::accumulator();
        let values = exprs
            .iter()
            .filter_map(|expr| errors.handle(Value::from_expr(expr)))
            .collect();

        errors.finish_with(Self(values))
    }
}

pub fn expand(args: TokenStream, item: TokenStream) -> Result<TokenStream, DarlingError> {
    let attr_args = NestedMeta::parse_meta_list(args)?;
    let node = TableArgs::from_list(&attr_args)?;
    let input = parse_unit_struct(item, "table")?;
    let table = &input.ident;

    node.check_rows(table)?;
    let source = node.source(table)?;
    let ty = node.value_ty(&source, table)?;

    let mut errors = DarlingError::accumulator();
    let name = table.to_string();
    let rows = node
        .rows
        .iter()
        .filter_map(|row| {
            let ident = &row.member.0;
            let member = ident.to_string();
            let value = source
                .row_value(&name, &member, &row.payload())
                .map_err(|err| schema_error(&err, &[ident], table));

            errors.handle(value).map(|value| RowTokens {
                member,
                span: ident.span(),
                value,
            })
        })
        .collect();
    errors.finish()?;

    let tokens = TableTokens {
        ident: table.clone(),
        vis: input.vis.to_token_stream(),
        attrs: forwarded_attrs(&input),
        owner: node.owner,
        ty,
        rows,
    };

    Ok(tokens.into_token_stream())
}

///
/// TESTS
///
