//! Field value matching against textual query values.
//!
//! Query values always arrive as text. [`FieldMatch`] decides how a typed
//! field compares against that text: strings compare directly, numbers and
//! booleans parse the query value first. The derive macro builds on this,
//! and hand-written [`QueryItem`](crate::QueryItem) impls can too.

use crate::error::{QueryError, Result};

/// Case handling for textual comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// Compare byte for byte.
    Sensitive,
    /// Compare ignoring ASCII case.
    #[default]
    Insensitive,
}

impl Case {
    /// Compares two strings under this case mode.
    pub fn equals(self, a: &str, b: &str) -> bool {
        match self {
            Case::Sensitive => a == b,
            Case::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }
}

/// Compares a field name against a requested one, ignoring ASCII case.
///
/// ```
/// assert!(querylist::field_name_eq("yearStarted", "YEARSTARTED"));
/// assert!(!querylist::field_name_eq("year", "yearStarted"));
/// ```
pub fn field_name_eq(actual: &str, requested: &str) -> bool {
    actual.eq_ignore_ascii_case(requested)
}

/// A field type that can be compared against a textual query value.
pub trait FieldMatch {
    /// Returns whether this field equals `value`.
    ///
    /// Fails with [`QueryError::InvalidValue`] if `value` cannot be read as
    /// this field's type.
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool>;

    /// Like [`try_match_text`](FieldMatch::try_match_text), but a value that
    /// cannot be read as this field's type simply does not match.
    fn match_text(&self, value: &str, case: Case) -> bool {
        self.try_match_text(value, case).unwrap_or(false)
    }
}

impl FieldMatch for str {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        Ok(case.equals(self, value))
    }
}

impl FieldMatch for String {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        self.as_str().try_match_text(value, case)
    }
}

impl FieldMatch for char {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(match case {
                Case::Sensitive => *self == c,
                Case::Insensitive => self.eq_ignore_ascii_case(&c),
            }),
            _ => Err(QueryError::invalid_value(value, "char")),
        }
    }
}

impl FieldMatch for bool {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        let parsed = if case.equals("true", value) {
            true
        } else if case.equals("false", value) {
            false
        } else {
            return Err(QueryError::invalid_value(value, "bool"));
        };
        Ok(*self == parsed)
    }
}

// Numbers ignore the case mode; surrounding whitespace in the query is not trimmed.
macro_rules! impl_field_match_parse {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldMatch for $ty {
                fn try_match_text(&self, value: &str, _case: Case) -> Result<bool> {
                    value
                        .parse::<$ty>()
                        .map(|parsed| *self == parsed)
                        .map_err(|_| QueryError::invalid_value(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_field_match_parse!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: FieldMatch + ?Sized> FieldMatch for &T {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        (**self).try_match_text(value, case)
    }
}

impl<T: FieldMatch + ?Sized> FieldMatch for Box<T> {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        (**self).try_match_text(value, case)
    }
}

/// An absent value never matches.
impl<T: FieldMatch> FieldMatch for Option<T> {
    fn try_match_text(&self, value: &str, case: Case) -> Result<bool> {
        match self {
            Some(inner) => inner.try_match_text(value, case),
            None => Ok(false),
        }
    }
}
