//! Redacting formatter
//!
//! Redacts the rendered message first, then hands it to the line template.
//! Works both on explicit `LogRecord`s and as a `tracing_subscriber` event
//! formatter.

use std::fmt;

use pdlog_core::LogRecord;
use pdlog_security::FieldRedactor;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::Result;
use crate::template::{LINE_TEMPLATE, render_line};

/// Formatter that strips PII field values before the line is rendered
#[derive(Debug, Clone)]
pub struct RedactingFormatter {
    redactor: FieldRedactor,
    user_tag: String,
}

impl RedactingFormatter {
    pub const REDACTION: &'static str = pdlog_security::REDACTION;
    pub const SEPARATOR: &'static str = pdlog_security::SEPARATOR;
    pub const FORMAT: &'static str = LINE_TEMPLATE;

    /// `user_tag` fills the `{user}` slot for events that carry no `user` field
    pub fn new<I, S>(fields: I, user_tag: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            redactor: FieldRedactor::new(fields, Self::REDACTION, Self::SEPARATOR)?,
            user_tag: user_tag.into(),
        })
    }

    pub fn fields(&self) -> &[String] {
        self.redactor.fields()
    }

    pub fn user_tag(&self) -> &str {
        &self.user_tag
    }

    /// Overwrite the record's message with its redacted form and render the line
    pub fn format(&self, record: &mut LogRecord) -> String {
        let redacted = self.redactor.redact(record.message());
        *record.message_mut() = redacted;

        render_line(
            record.user(),
            record.level(),
            record.timestamp(),
            record.message(),
        )
    }
}

impl<S, N> FormatEvent<S, N> for RedactingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let mut record = LogRecord::builder()
            .user(visitor.user.unwrap_or_else(|| self.user_tag.clone()))
            .level(*event.metadata().level())
            .message(visitor.message.unwrap_or_default())
            .build()
            .map_err(|_| fmt::Error)?;

        writeln!(writer, "{}", self.format(&mut record))
    }
}

/// Pulls the rendered message and optional `user` field off an event
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    user: Option<String>,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "user" => self.user = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            "user" => self.user = Some(format!("{value:?}")),
            _ => {}
        }
    }
}
