//! Implementation of the `#[derive(QueryItem)]` macro.
//!
//! This macro generates implementations of the `QueryItem` and
//! `TryQueryItem` traits and field name constants for query building.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_query_attrs;

/// Main implementation of the QueryItem derive macro.
pub fn query_item_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "QueryItem can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "QueryItem can only be derived for structs",
            ))
        }
    };

    let mut match_arms: Vec<TokenStream> = Vec::new();
    let mut try_match_arms: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut seen_consts: HashSet<String> = HashSet::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let query_attr = match parse_query_attrs(&field.attrs)? {
            Some(attr) if !attr.skip => attr,
            _ => continue,
        };

        let query_name = query_attr
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        // Names compare ignoring ASCII case, so two of them may not fold together
        if !seen.insert(query_name.to_ascii_lowercase()) {
            return Err(Error::new(
                field.span(),
                format!("duplicate query field name '{}'", query_name),
            ));
        }

        let const_str = to_screaming_snake_case(&query_name);
        if syn::parse_str::<syn::Ident>(&const_str).is_err() {
            return Err(Error::new(
                field.span(),
                format!("query field name '{}' cannot be used as a constant", query_name),
            ));
        }
        if !seen_consts.insert(const_str.clone()) {
            return Err(Error::new(
                field.span(),
                format!(
                    "query field name '{}' collides with another field's constant {}",
                    query_name, const_str
                ),
            ));
        }
        let const_name = format_ident!("{}", const_str);
        field_constants.push(quote! {
            /// Field name constant for queries.
            pub const #const_name: &'static str = #query_name;
        });

        let case = if query_attr.exact {
            quote! { ::querylist::Case::Sensitive }
        } else {
            quote! { ::querylist::Case::Insensitive }
        };

        match_arms.push(quote! {
            if ::querylist::field_name_eq(#query_name, field) {
                return ::querylist::FieldMatch::match_text(&self.#field_name, value, #case);
            }
        });
        try_match_arms.push(quote! {
            if ::querylist::field_name_eq(#query_name, field) {
                return ::querylist::FieldMatch::try_match_text(&self.#field_name, value, #case);
            }
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::querylist::QueryItem for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn match_field_value(&self, field: &str, value: &str) -> bool {
                #(#match_arms)*
                false
            }
        }

        impl #impl_generics ::querylist::TryQueryItem for #struct_name #ty_generics #where_clause {
            type Error = ::querylist::QueryError;

            #[allow(unused_variables)]
            fn try_match_field_value(
                &self,
                field: &str,
                value: &str,
            ) -> ::core::result::Result<bool, ::querylist::QueryError> {
                #(#try_match_arms)*
                ::core::result::Result::Ok(false)
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
