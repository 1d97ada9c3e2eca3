//! Storage layer for pdlog
//!
//! This crate provides:
//! - SQLite database operations for the `users` table
//! - Schema migration on open
//! - Lazy row streaming as column/value pairs

pub mod db;
pub mod error;
pub mod models;

pub use db::Storage;
pub use error::{Result, StorageError};
pub use models::NewUser;
