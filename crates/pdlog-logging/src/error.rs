//! Error types for pdlog-logging

use pdlog_security::SecurityError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoggingError>;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid redaction config: {0}")]
    Config(#[from] SecurityError),
}
