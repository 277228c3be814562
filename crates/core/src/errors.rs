use serde::Serialize;
use thiserror::Error;

use crate::domain::product::IdKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Invalid page number. Must be between 1 and {total_pages}.")]
    OutOfRange { page: i64, total_pages: usize },
    #[error("cannot coerce `{value}` to a {expected} product id")]
    TypeCoercionFailure { value: String, expected: IdKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    OutOfRange,
    TypeCoercionFailure,
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::TypeCoercionFailure { .. } => ErrorKind::TypeCoercionFailure,
        }
    }
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidInput => "invalid_input",
            Self::OutOfRange => "out_of_range",
            Self::TypeCoercionFailure => "type_coercion_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::product::IdKind;
    use crate::errors::{EngineError, ErrorKind};

    #[test]
    fn out_of_range_message_names_valid_bounds() {
        let error = EngineError::OutOfRange { page: 0, total_pages: 3 };

        assert_eq!(error.kind(), ErrorKind::OutOfRange);
        assert_eq!(error.to_string(), "Invalid page number. Must be between 1 and 3.");
    }

    #[test]
    fn coercion_failure_is_diagnosable() {
        let error =
            EngineError::TypeCoercionFailure { value: "abc".to_string(), expected: IdKind::Integer };

        assert_eq!(error.kind().as_str(), "type_coercion_failure");
        assert!(error.to_string().contains("`abc`"));
        assert!(error.to_string().contains("integer"));
    }
}
