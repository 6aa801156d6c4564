//! Attribute parsing for the QueryItem derive macro.
//!
//! This module parses the `#[query]` / `#[query(...)]` field attributes.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[query(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAttr {
    /// Skip this field from matching.
    pub skip: bool,
    /// Compare text case-sensitively.
    pub exact: bool,
    /// Custom field name for queries (default: field name).
    pub rename: Option<String>,
}

impl Parse for QueryAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = QueryAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => attr.skip = true,
                Meta::Path(p) if p.is_ident("exact") => attr.exact = true,

                // rename = "custom_name"
                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        if s.value().is_empty() {
                            return Err(Error::new(s.span(), "rename must not be empty"));
                        }
                        attr.rename = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown query attribute. Expected: skip, exact, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extract the query attribute from a field's attributes.
///
/// Returns `None` when the field carries no `#[query]` attribute at all,
/// which leaves it out of matching.
pub fn parse_query_attrs(attrs: &[Attribute]) -> Result<Option<QueryAttr>> {
    for attr in attrs {
        if attr.path().is_ident("query") {
            return match &attr.meta {
                Meta::Path(_) => Ok(Some(QueryAttr::default())),
                Meta::List(_) => attr.parse_args::<QueryAttr>().map(Some),
                Meta::NameValue(nv) => Err(Error::new(
                    nv.span(),
                    "expected #[query] or #[query(...)]",
                )),
            };
        }
    }
    Ok(None)
}
