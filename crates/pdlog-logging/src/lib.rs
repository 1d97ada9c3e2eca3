//! Redaction-aware logging for user data
//!
//! This crate provides:
//! - `RedactingFormatter`: redacts PII fields, then renders the fixed line template
//! - `UserDataLogger`: an explicit, non-propagating logger handle built on `tracing`
//!
//! # Usage
//!
//! ```ignore
//! let logger = pdlog_logging::get_logger()?;
//! logger.info("name:Bob;email:bob@x.com;");
//! // [USER] user_data INFO 2024-01-01 10:00:00,000: name:***;email:***;
//! ```

pub mod error;
pub mod formatter;
pub mod logger;
pub mod template;

pub use error::{LoggingError, Result};
pub use formatter::RedactingFormatter;
pub use logger::{UserDataLogger, UserDataLoggerBuilder, get_logger};
pub use template::{LINE_TEMPLATE, format_timestamp, render_line};
