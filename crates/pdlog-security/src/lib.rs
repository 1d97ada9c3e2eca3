//! Redaction of personally identifiable fields in log messages
//!
//! This crate provides:
//! - The static PII configuration (field set, token, separators)
//! - `filter_datum`, the pure field-value redaction function
//! - `FieldRedactor`, a validated, reusable redaction configuration

pub mod error;
pub mod redactor;

pub use error::{Result, SecurityError};
pub use redactor::{FieldRedactor, filter_datum};

/// Fields whose values never reach a log sink in clear text
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Token substituted for every redacted value
pub const REDACTION: &str = "***";

/// Delimits `field:value` pairs within a message
pub const SEPARATOR: &str = ";";

/// Sits between a field name and its value
pub const PAIR_DELIMITER: &str = ":";
