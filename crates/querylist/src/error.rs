//! Error types for the querylist crate.

use thiserror::Error;

/// Errors that can occur when building collections or matching field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// An element handed to a runtime-checked constructor is not of the
    /// collection's item type.
    #[error("element {index} is not a {type_name}")]
    CapabilityViolation {
        index: usize,
        type_name: &'static str,
    },

    /// A query value cannot be read as the type of the field it targets.
    #[error("invalid value '{value}': expected {expected}")]
    InvalidValue {
        value: String,
        expected: &'static str,
    },
}

impl QueryError {
    pub(crate) fn invalid_value(value: &str, expected: &'static str) -> Self {
        QueryError::InvalidValue {
            value: value.to_string(),
            expected,
        }
    }
}

/// Result type for querylist operations.
pub type Result<T> = std::result::Result<T, QueryError>;
