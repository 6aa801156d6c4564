//! QueryList - filter typed collections by field/value matching.
//!
//! The crate is built around one capability, [`QueryItem`]: an item that can
//! say whether a named field matches a textual value. On top of it:
//!
//! - [`QueryList`], an ordered collection of [`Enrolled`] records fixed at
//!   construction, with an instance filter bound to its own items
//! - free filters ([`get_matches`] and friends) with their own type
//!   parameters, operating on any sequence of items
//! - a general view of filter results through [`Upcast`], so a slice of a
//!   concrete type can be filtered into references of a more general type
//! - [`FieldMatch`] helpers and `#[derive(QueryItem)]` (feature `macros`) for
//!   implementing the capability field by field
//!
//! # Quick Start
//!
//! ```rust
//! use querylist::{
//!     field_name_eq, get_matches_as, Case, Enrolled, FieldMatch, QueryItem, QueryList,
//! };
//!
//! struct Student {
//!     course: String,
//!     year_started: i32,
//! }
//!
//! impl QueryItem for Student {
//!     fn match_field_value(&self, field: &str, value: &str) -> bool {
//!         if field_name_eq("course", field) {
//!             self.course.match_text(value, Case::Insensitive)
//!         } else if field_name_eq("yearStarted", field) {
//!             self.year_started.match_text(value, Case::Sensitive)
//!         } else {
//!             false
//!         }
//!     }
//! }
//!
//! impl Enrolled for Student {
//!     fn year_started(&self) -> i32 {
//!         self.year_started
//!     }
//! }
//!
//! let students = vec![
//!     Student { course: "Java".into(), year_started: 2020 },
//!     Student { course: "Python".into(), year_started: 2021 },
//!     Student { course: "Python".into(), year_started: 2022 },
//! ];
//!
//! // Instance filter, typed by the collection.
//! let list = QueryList::new(students);
//! let python = list.get_matches("Course", "python");
//! assert_eq!(python.len(), 2);
//!
//! // Free filter, viewing the results through a more general type.
//! let from_2021: Vec<&dyn QueryItem> = get_matches_as(list.items(), "YearStarted", "2021");
//! assert_eq!(from_2021.len(), 1);
//! ```
//!
//! # Filter Semantics
//!
//! Every filter is a single linear pass over its input:
//!
//! - results are a subsequence of the input, in input order
//! - an item is included if and only if its match check returns `true`
//! - the input is never modified
//! - empty input, or no matching item, gives an empty `Vec`, not an error
//!
//! Match checks that can fail implement [`TryQueryItem`]; the `try_` filters
//! stop at the first failure and hand it back unchanged.
//!
//! # Derive
//!
//! `#[derive(QueryItem)]` lives in the `querylist-macros` crate and is
//! re-exported here as `querylist::QueryItem` with the `macros` feature:
//!
//! ```
//! use querylist::{Enrolled, QueryList};
//! use querylist_macros::QueryItem;
//!
//! #[derive(QueryItem)]
//! struct Student {
//!     #[query]
//!     course: String,
//!     #[query(rename = "yearStarted")]
//!     year_started: i32,
//! }
//!
//! impl Enrolled for Student {
//!     fn year_started(&self) -> i32 {
//!         self.year_started
//!     }
//! }
//!
//! assert_eq!(Student::YEAR_STARTED, "yearStarted");
//!
//! let list = QueryList::new(vec![Student { course: "Rust".into(), year_started: 2024 }]);
//! assert!(list.any_match(Student::YEAR_STARTED, "2024"));
//! ```

mod error;
mod field;
mod filter;
mod list;
mod traits;

// Re-export public API
pub use error::{QueryError, Result};
pub use field::{field_name_eq, Case, FieldMatch};
pub use filter::{get_matches, get_matches_as, get_matches_into, try_get_matches};
pub use list::QueryList;
pub use traits::{Enrolled, QueryItem, TryQueryItem, Upcast};

#[cfg(feature = "macros")]
pub use querylist_macros::QueryItem;
