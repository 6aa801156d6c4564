//! Free-standing filters over any sequence of items.
//!
//! These functions carry their own type parameters and do not depend on a
//! [`QueryList`](crate::QueryList) instance. They accept anything iterable,
//! which makes them the place to obtain a general view of the results:
//!
//! ```
//! use querylist::{get_matches, get_matches_as, QueryItem};
//!
//! struct Student { course: &'static str }
//!
//! impl QueryItem for Student {
//!     fn match_field_value(&self, field: &str, value: &str) -> bool {
//!         field == "course" && self.course == value
//!     }
//! }
//!
//! let students = vec![
//!     Student { course: "Java" },
//!     Student { course: "Python" },
//! ];
//!
//! // Concrete view.
//! let matches: Vec<&Student> = get_matches(&students, "course", "Python");
//! assert_eq!(matches.len(), 1);
//!
//! // General view of the same elements.
//! let general: Vec<&dyn QueryItem> = get_matches_as(&students, "course", "Python");
//! assert_eq!(general.len(), 1);
//! ```
//!
//! Every form is a single in-order pass. The input is never modified, results
//! keep the relative order of the input, and zero matches is an empty `Vec`.

use crate::traits::{QueryItem, TryQueryItem, Upcast};

/// Returns the items whose `field` matches `value`, in input order.
///
/// Slices and `Vec`s passed by reference yield references; iterators of
/// trait objects yield trait objects.
pub fn get_matches<I>(items: I, field: &str, value: &str) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: QueryItem,
{
    items
        .into_iter()
        .filter(|item| item.match_field_value(field, value))
        .collect()
}

/// Returns matching items viewed through the general type `U`.
///
/// Each element is upcast one at a time and matched through the general
/// view, so `U`'s own [`QueryItem`] behavior decides. The returned references
/// point at the original elements.
pub fn get_matches_as<'a, U, T>(items: &'a [T], field: &str, value: &str) -> Vec<&'a U>
where
    T: Upcast<U>,
    U: QueryItem + ?Sized,
{
    items
        .iter()
        .map(<T as Upcast<U>>::upcast)
        .filter(|item| item.match_field_value(field, value))
        .collect()
}

/// Returns owned copies of the matching items, converted into `U`.
///
/// Useful when the general type is an enum wrapping the concrete kinds.
pub fn get_matches_into<T, U>(items: &[T], field: &str, value: &str) -> Vec<U>
where
    T: QueryItem + Clone + Into<U>,
{
    items
        .iter()
        .filter(|item| item.match_field_value(field, value))
        .cloned()
        .map(Into::into)
        .collect()
}

/// Fallible form of [`get_matches`].
///
/// Stops at the first failing match check and returns its error unchanged.
pub fn try_get_matches<I, E>(items: I, field: &str, value: &str) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    I::Item: TryQueryItem<Error = E>,
{
    let mut matches = Vec::new();
    for item in items {
        if item.try_match_field_value(field, value)? {
            matches.push(item);
        }
    }
    Ok(matches)
}
