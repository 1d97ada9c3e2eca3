//! Error types for pdlog-security

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SecurityError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Separator must not be empty")]
    EmptySeparator,

    #[error("Invalid field name: {0:?}")]
    InvalidField(String),

    #[error("Redaction token must not contain the separator: {0:?}")]
    InvalidRedaction(String),

    #[error("Pair delimiter must not contain the separator: {0:?}")]
    InvalidDelimiter(String),
}
