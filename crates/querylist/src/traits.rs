//! The item capability consumed by every filter in this crate.
//!
//! [`QueryItem`] is the only thing a collection needs from its elements. It is
//! typically derived with `#[derive(QueryItem)]` from `querylist-macros`, but
//! is just as easy to implement by hand.

use std::rc::Rc;
use std::sync::Arc;

/// Trait for items that can answer a field/value match query.
///
/// How the comparison is done (exact, case-insensitive, numeric) is entirely
/// up to the implementor and may differ per type.
///
/// # Manual Implementation
///
/// ```
/// use querylist::QueryItem;
///
/// struct Student {
///     course: String,
///     year_started: i32,
/// }
///
/// impl QueryItem for Student {
///     fn match_field_value(&self, field: &str, value: &str) -> bool {
///         match field.to_ascii_uppercase().as_str() {
///             "COURSE" => self.course.eq_ignore_ascii_case(value),
///             "YEARSTARTED" => value.parse() == Ok(self.year_started),
///             _ => false,
///         }
///     }
/// }
///
/// let s = Student { course: "Python".into(), year_started: 2021 };
/// assert!(s.match_field_value("course", "python"));
/// assert!(s.match_field_value("YearStarted", "2021"));
/// assert!(!s.match_field_value("name", "2021"));
/// ```
pub trait QueryItem {
    /// Returns `true` if this item's `field` matches `value`.
    ///
    /// Must not have side effects. Unknown fields should return `false`.
    fn match_field_value(&self, field: &str, value: &str) -> bool;
}

/// Fallible form of [`QueryItem`].
///
/// Use this when the match check itself can fail, e.g. when the query value
/// has to be parsed. Filters built on this trait return the first error
/// unchanged and never swallow it.
pub trait TryQueryItem {
    /// The error produced by a failed match check.
    type Error;

    /// Returns whether `field` matches `value`, or why that could not be decided.
    fn try_match_field_value(&self, field: &str, value: &str) -> Result<bool, Self::Error>;
}

/// A record that belongs to a collection: a matchable item with a start year.
///
/// This is the bound [`QueryList`](crate::QueryList) places on its items. The
/// free filters in this crate only ask for [`QueryItem`], so any matchable
/// value can be filtered, but only enrolled records can be collected.
///
/// ```
/// use querylist::{Enrolled, QueryItem, QueryList};
///
/// struct Student { course: &'static str, year_started: i32 }
///
/// impl QueryItem for Student {
///     fn match_field_value(&self, field: &str, value: &str) -> bool {
///         field.eq_ignore_ascii_case("course") && self.course.eq_ignore_ascii_case(value)
///     }
/// }
///
/// impl Enrolled for Student {
///     fn year_started(&self) -> i32 { self.year_started }
/// }
///
/// let list = QueryList::new(vec![Student { course: "Python", year_started: 2021 }]);
/// assert_eq!(list.get_matches("course", "python")[0].year_started(), 2021);
/// ```
pub trait Enrolled: QueryItem {
    /// Returns the year this record started.
    fn year_started(&self) -> i32;
}

/// A concrete item viewed as a more general item type.
///
/// This is the one-element-at-a-time substitution: a `&Student` can be seen
/// as a `&dyn Enrolled`, but a `[Student]` is never a `[dyn Enrolled]`.
/// Every [`QueryItem`] upcasts to `dyn QueryItem` and every [`Enrolled`] to
/// `dyn Enrolled`; implement this trait for your own general capability
/// traits.
///
/// ```
/// use querylist::{QueryItem, Upcast};
///
/// trait Graded: QueryItem {
///     fn grade(&self) -> u8;
/// }
///
/// struct Student { grade: u8 }
///
/// impl QueryItem for Student {
///     fn match_field_value(&self, field: &str, value: &str) -> bool {
///         field == "grade" && value.parse() == Ok(self.grade)
///     }
/// }
///
/// impl Graded for Student {
///     fn grade(&self) -> u8 { self.grade }
/// }
///
/// impl Upcast<dyn Graded> for Student {
///     fn upcast(&self) -> &(dyn Graded + 'static) { self }
/// }
///
/// let s = Student { grade: 4 };
/// let general: &dyn Graded = s.upcast();
/// assert_eq!(general.grade(), 4);
/// ```
pub trait Upcast<U: ?Sized> {
    /// Returns this item as a reference to the general type.
    fn upcast(&self) -> &U;
}

impl<'x, T: QueryItem + 'x> Upcast<dyn QueryItem + 'x> for T {
    fn upcast(&self) -> &(dyn QueryItem + 'x) {
        self
    }
}

impl<'x, T: Enrolled + 'x> Upcast<dyn Enrolled + 'x> for T {
    fn upcast(&self) -> &(dyn Enrolled + 'x) {
        self
    }
}

macro_rules! forward_item_impls {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: QueryItem + ?Sized> QueryItem for $ptr {
                fn match_field_value(&self, field: &str, value: &str) -> bool {
                    (**self).match_field_value(field, value)
                }
            }

            impl<T: TryQueryItem + ?Sized> TryQueryItem for $ptr {
                type Error = T::Error;

                fn try_match_field_value(
                    &self,
                    field: &str,
                    value: &str,
                ) -> Result<bool, Self::Error> {
                    (**self).try_match_field_value(field, value)
                }
            }

            impl<T: Enrolled + ?Sized> Enrolled for $ptr {
                fn year_started(&self) -> i32 {
                    (**self).year_started()
                }
            }
        )*
    };
}

forward_item_impls!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;

    struct Course {
        name: String,
    }

    impl QueryItem for Course {
        fn match_field_value(&self, field: &str, value: &str) -> bool {
            field == "name" && self.name == value
        }
    }

    impl TryQueryItem for Course {
        type Error = String;

        fn try_match_field_value(&self, field: &str, value: &str) -> Result<bool, String> {
            match field {
                "name" => Ok(self.name == value),
                other => Err(format!("no field {other}")),
            }
        }
    }

    fn python() -> Course {
        Course {
            name: "Python".to_string(),
        }
    }

    #[test]
    fn manual_impl() {
        let c = python();
        assert!(c.match_field_value("name", "Python"));
        assert!(!c.match_field_value("name", "Java"));
        assert!(!c.match_field_value("title", "Python"));
    }

    #[test]
    fn pointer_impls_forward() {
        let c = python();
        let boxed: Box<Course> = Box::new(python());
        let rc = Rc::new(python());
        let arc = Arc::new(python());

        assert!((&c).match_field_value("name", "Python"));
        assert!(boxed.match_field_value("name", "Python"));
        assert!(rc.match_field_value("name", "Python"));
        assert!(arc.match_field_value("name", "Python"));
    }

    #[test]
    fn boxed_trait_object_is_an_item() {
        let item: Box<dyn QueryItem> = Box::new(python());
        assert!(item.match_field_value("name", "Python"));
    }

    #[test]
    fn try_impl_forwards_errors() {
        let c = python();
        assert_eq!((&c).try_match_field_value("name", "Python"), Ok(true));
        assert_eq!(
            Arc::new(python()).try_match_field_value("year", "2021"),
            Err("no field year".to_string())
        );
    }

    impl Enrolled for Course {
        fn year_started(&self) -> i32 {
            2019
        }
    }

    #[test]
    fn enrolled_forwards_through_pointers() {
        let c = python();
        let shared: Rc<dyn Enrolled> = Rc::new(python());
        assert_eq!((&c).year_started(), 2019);
        assert_eq!(Box::new(python()).year_started(), 2019);
        assert_eq!(shared.year_started(), 2019);
    }

    #[test]
    fn upcast_to_dyn_enrolled() {
        let c = python();
        let general: &dyn Enrolled = c.upcast();
        assert_eq!(general.year_started(), 2019);
        assert!(general.match_field_value("name", "Python"));
        assert!(std::ptr::addr_eq(general, &c));
    }

    #[test]
    fn upcast_to_dyn_query_item_keeps_identity() {
        let c = python();
        let general: &dyn QueryItem = c.upcast();
        assert!(general.match_field_value("name", "Python"));
        assert!(std::ptr::addr_eq(general, &c));
    }
}
