//! Core domain models for pdlog
//!
//! This crate contains:
//! - Rows handed over by a data source (ordered column/value pairs)
//! - Log records consumed by the redacting formatter

pub mod error;
pub mod record;
pub mod row;

pub use error::{CoreError, Result};
pub use record::{LogRecord, LogRecordBuilder};
pub use row::Row;
