//! Log record domain model

use time::OffsetDateTime;
use tracing::Level;

use crate::{CoreError, Result};

/// A single log call, alive only for the duration of its formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    user: String,
    level: Level,
    timestamp: OffsetDateTime,
    message: String,
}

impl LogRecord {
    pub fn builder() -> LogRecordBuilder {
        LogRecordBuilder::default()
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The formatter overwrites the message in place
    pub fn message_mut(&mut self) -> &mut String {
        &mut self.message
    }
}

#[derive(Debug, Default)]
pub struct LogRecordBuilder {
    user: Option<String>,
    level: Option<Level>,
    timestamp: Option<OffsetDateTime>,
    message: Option<String>,
}

impl LogRecordBuilder {
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Fails on the first attribute the output line needs but was never set.
    /// A missing timestamp defaults to now (UTC).
    pub fn build(self) -> Result<LogRecord> {
        Ok(LogRecord {
            user: self.user.ok_or(CoreError::MissingAttribute("user"))?,
            level: self.level.ok_or(CoreError::MissingAttribute("level"))?,
            timestamp: self.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
            message: self.message.ok_or(CoreError::MissingAttribute("message"))?,
        })
    }
}
