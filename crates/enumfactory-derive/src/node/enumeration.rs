use crate::{
    helper::{LitIdent, forwarded_attrs, parse_unit_struct, schema_error},
    prelude::*,
};

///
/// EnumerationArgs
///

#[derive(Debug, FromMeta)]
pub struct EnumerationArgs {
    #[darling(multiple, rename = "member")]
    pub members: Vec<MemberArg>,

    #[darling(default)]
    pub duplicates: DuplicateValuePolicy,

    #[darling(default)]
    pub max_total: Option<usize>,
}

impl EnumerationArgs {
    fn config(&self) -> SynthConfig {
        let mut config = SynthConfig {
            duplicate_values: self.duplicates,
            ..SynthConfig::default()
        };
        if let Some(max_total) = self.max_total {
            config.max_total = max_total;
        }

        config
    }

    fn member_decls(&self) -> Result<Vec<MemberDecl>, DarlingError> {
        let mut errors = DarlingError::accumulator();

        let decls = self
            .members
            .iter()
            .filter_map(|member| errors.handle(member.decl()))
            .collect();

        errors.finish_with(decls)
    }
}

///
/// MemberArg
///

#[derive(Debug, FromMeta)]
pub struct MemberArg {
    pub ident: LitIdent,

    #[darling(default)]
    pub value: Option<Value>,
}

impl MemberArg {
    fn decl(&self) -> Result<MemberDecl, DarlingError> {
        let ident = &self.ident.0;
        let decl = MemberDecl::new(ident.to_string());

        match &self.value {
            None => Ok(decl),
            Some(value) => value.as_int().map(|v| decl.with_value(v)).ok_or_else(|| {
                DarlingError::custom(format!("member value must be an integer, found {value}"))
                    .with_span(ident)
            }),
        }
    }
}

pub fn expand(args: TokenStream, item: TokenStream) -> Result<TokenStream, DarlingError> {
    let attr_args = NestedMeta::parse_meta_list(args)?;
    let node = EnumerationArgs::from_list(&attr_args)?;
    let input = parse_unit_struct(item, "enumeration")?;

    let decls = node.member_decls()?;
    let name = input.ident.to_string();
    let enumeration = synthesize_with(&name, &decls, &node.config()).map_err(|err| {
        let idents: Vec<&Ident> = node.members.iter().map(|m| &m.ident.0).collect();

        schema_error(&err, &idents, &input.ident)
    })?;

    let tokens = EnumTokens::new(&enumeration)
        .with_ident(input.ident.clone())
        .with_vis(&input.vis)
        .with_attrs(forwarded_attrs(&input));

    Ok(tokens.into_token_stream())
}

///
/// TESTS
///
