//! Proc macros for QueryList.
//!
//! # Derive Macros
//!
//! - [`QueryItem`] - Generate the field/value match capability from struct
//!   field annotations

mod query_item;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `QueryItem` and `TryQueryItem` for a struct.
///
/// Only fields annotated with `#[query]` take part in matching. Field names
/// are compared ignoring ASCII case, and each field compares itself against
/// the query value through `querylist::FieldMatch`.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[query]` | Field is queryable under its own name |
/// | `rename = "..."` | Use a custom name for queries |
/// | `exact` | Compare text case-sensitively (default ignores ASCII case) |
/// | `skip` | Exclude this field from queries |
///
/// # Generated Code
///
/// 1. Field name constants (e.g., `Student::COURSE`)
/// 2. `QueryItem::match_field_value()`: unknown fields and unreadable values
///    do not match
/// 3. `TryQueryItem::try_match_field_value()` with `Error = QueryError`:
///    unknown fields give `Ok(false)`, unreadable values give
///    `Err(QueryError::InvalidValue)`
///
/// # Example
///
/// ```
/// use querylist::{Enrolled, QueryList};
/// use querylist_macros::QueryItem;
///
/// #[derive(QueryItem)]
/// struct Student {
///     #[query]
///     name: String,
///
///     #[query]
///     course: String,
///
///     #[query(rename = "yearStarted")]
///     year_started: i32,
///
///     #[query(skip)]
///     internal_id: u64,
/// }
///
/// impl Enrolled for Student {
///     fn year_started(&self) -> i32 {
///         self.year_started
///     }
/// }
///
/// let list = QueryList::new(vec![
///     Student { name: "Ann".into(), course: "Java".into(), year_started: 2020, internal_id: 1 },
///     Student { name: "Bob".into(), course: "Python".into(), year_started: 2021, internal_id: 2 },
/// ]);
///
/// let matches = list.get_matches(Student::YEAR_STARTED, "2021");
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name, "Bob");
/// ```
#[proc_macro_derive(QueryItem, attributes(query))]
pub fn query_item_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    query_item::query_item_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
