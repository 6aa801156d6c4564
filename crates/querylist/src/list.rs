//! The queryable collection.
//!
//! [`QueryList`] holds a fixed, ordered sequence of items and filters it by
//! field/value. It never adds, removes, reorders, or mutates its items after
//! construction.

use std::any::{type_name, Any};
use std::slice;

use crate::error::{QueryError, Result};
use crate::filter;
use crate::traits::{Enrolled, TryQueryItem};

/// An ordered collection of [`Enrolled`] records, fixed at construction.
///
/// Elements must be both matchable and enrolled. A type that only implements
/// [`QueryItem`](crate::QueryItem) can still go through the free filters
/// ([`get_matches`](crate::get_matches) and friends), but it cannot be
/// collected:
///
/// ```compile_fail
/// use querylist::{QueryItem, QueryList};
///
/// struct Employee { dept: &'static str }
///
/// impl QueryItem for Employee {
///     fn match_field_value(&self, field: &str, value: &str) -> bool {
///         field == "dept" && self.dept == value
///     }
/// }
///
/// let list = QueryList::new(vec![Employee { dept: "IT" }]);
/// ```
///
/// Items can be owned values or shared handles: a `QueryList<&Student>` or
/// `QueryList<Arc<Student>>` borrows or shares the caller's records instead
/// of owning them.
///
/// Filtering only needs `&self`, so a `QueryList` whose items are `Sync` can
/// be read from several threads at once. Nothing here synchronizes the items
/// themselves; interior mutability inside an item is the caller's concern.
///
/// # Example
///
/// ```
/// use querylist::{Enrolled, QueryItem, QueryList};
///
/// struct Student { course: &'static str }
///
/// impl QueryItem for Student {
///     fn match_field_value(&self, field: &str, value: &str) -> bool {
///         field.eq_ignore_ascii_case("course") && self.course.eq_ignore_ascii_case(value)
///     }
/// }
///
/// impl Enrolled for Student {
///     fn year_started(&self) -> i32 { 2021 }
/// }
///
/// let list = QueryList::new(vec![
///     Student { course: "Java" },
///     Student { course: "Python" },
///     Student { course: "Python" },
/// ]);
///
/// let matches = list.get_matches("Course", "Python");
/// assert_eq!(matches.len(), 2);
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryList<T: Enrolled> {
    items: Vec<T>,
}

impl<T: Enrolled> QueryList<T> {
    /// Creates a collection over `items`. An empty `Vec` is fine.
    pub fn new(items: Vec<T>) -> Self {
        QueryList { items }
    }

    /// Returns the items whose `field` matches `value`, in stored order.
    pub fn get_matches(&self, field: &str, value: &str) -> Vec<&T> {
        filter::get_matches(&self.items, field, value)
    }

    /// Counts the matching items.
    pub fn count_matches(&self, field: &str, value: &str) -> usize {
        self.items
            .iter()
            .filter(|item| item.match_field_value(field, value))
            .count()
    }

    /// Returns `true` if any item matches.
    pub fn any_match(&self, field: &str, value: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.match_field_value(field, value))
    }

    /// Returns the first matching item.
    pub fn first_match(&self, field: &str, value: &str) -> Option<&T> {
        self.items
            .iter()
            .find(|item| item.match_field_value(field, value))
    }

    /// Returns the stored items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the stored items in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the collection, returning its items.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Enrolled + TryQueryItem> QueryList<T> {
    /// Fallible form of [`get_matches`](QueryList::get_matches).
    ///
    /// Returns the first match-check error unchanged.
    pub fn try_get_matches(
        &self,
        field: &str,
        value: &str,
    ) -> std::result::Result<Vec<&T>, <T as TryQueryItem>::Error> {
        filter::try_get_matches(&self.items, field, value)
    }
}

impl<T: Enrolled + Any> QueryList<T> {
    /// Builds a collection from type-erased values, checking each one.
    ///
    /// Every element must be a `T`. The first element that is not fails the
    /// whole construction with [`QueryError::CapabilityViolation`], so a
    /// collection that exists always holds only items of its type.
    pub fn try_from_any(values: Vec<Box<dyn Any>>) -> Result<Self> {
        let items = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .downcast::<T>()
                    .map(|item| *item)
                    .map_err(|_| QueryError::CapabilityViolation {
                        index,
                        type_name: type_name::<T>(),
                    })
            })
            .collect::<Result<Vec<T>>>()?;
        Ok(QueryList::new(items))
    }
}

impl<T: Enrolled> Default for QueryList<T> {
    fn default() -> Self {
        QueryList { items: Vec::new() }
    }
}

impl<T: Enrolled> From<Vec<T>> for QueryList<T> {
    fn from(items: Vec<T>) -> Self {
        QueryList::new(items)
    }
}

impl<T: Enrolled> FromIterator<T> for QueryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        QueryList::new(iter.into_iter().collect())
    }
}

impl<'a, T: Enrolled> IntoIterator for &'a QueryList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Enrolled> IntoIterator for QueryList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
