//! User-data logger
//!
//! The logger owns its own `tracing` dispatcher. Events are emitted with that
//! dispatcher scoped as the default, so they never reach the process-wide
//! subscriber.

use std::fmt;
use std::io;

use pdlog_security::PII_FIELDS;
use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::{RedactingFormatter, Result};

const TARGET: &str = "user_data";

/// Name used when none is configured
pub const DEFAULT_LOGGER_NAME: &str = "user_data";

/// Build the standard user-data logger: `PII_FIELDS`, INFO, standard output
pub fn get_logger() -> Result<UserDataLogger> {
    UserDataLogger::builder().build()
}

/// Handle to a configured, redacting logger. Construct once, pass by reference.
pub struct UserDataLogger {
    name: String,
    dispatch: Dispatch,
}

impl UserDataLogger {
    pub fn builder() -> UserDataLoggerBuilder<fn() -> io::Stdout> {
        UserDataLoggerBuilder {
            name: DEFAULT_LOGGER_NAME.to_string(),
            fields: PII_FIELDS.iter().map(|f| f.to_string()).collect(),
            writer: io::stdout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.scoped(|| tracing::info!(target: TARGET, "{message}"));
    }

    /// Log at INFO with an explicit user tag instead of the logger name
    pub fn info_as(&self, user: &str, message: impl fmt::Display) {
        self.scoped(|| tracing::info!(target: TARGET, user, "{message}"));
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.scoped(|| tracing::warn!(target: TARGET, "{message}"));
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.scoped(|| tracing::error!(target: TARGET, "{message}"));
    }

    /// Below the logger's level; never emitted
    pub fn debug(&self, message: impl fmt::Display) {
        self.scoped(|| tracing::debug!(target: TARGET, "{message}"));
    }

    fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl fmt::Debug for UserDataLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDataLogger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub struct UserDataLoggerBuilder<W> {
    name: String,
    fields: Vec<String>,
    writer: W,
}

impl<W> UserDataLoggerBuilder<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn writer<W2>(self, writer: W2) -> UserDataLoggerBuilder<W2>
    where
        W2: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        UserDataLoggerBuilder {
            name: self.name,
            fields: self.fields,
            writer,
        }
    }

    pub fn build(self) -> Result<UserDataLogger> {
        let formatter = RedactingFormatter::new(self.fields, self.name.clone())?;

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::INFO)
            .with_ansi(false)
            .with_writer(self.writer)
            .event_format(formatter)
            .finish();

        Ok(UserDataLogger {
            name: self.name,
            dispatch: Dispatch::new(subscriber),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logger_with_buffer() -> (UserDataLogger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = UserDataLogger::builder()
            .writer(buffer.clone())
            .build()
            .unwrap();
        (logger, buffer)
    }

    #[test]
    fn test_one_redacted_line_per_call() {
        let (logger, buffer) = logger_with_buffer();

        logger.info("name:Bob;email:bob@x.com;phone:555;ip:127.0.0.1;");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[USER] user_data INFO "));
        assert!(lines[0].ends_with(": name:***;email:***;phone:***;ip:127.0.0.1;"));
        assert!(!lines[0].contains("bob@x.com"));
    }

    #[test]
    fn test_info_as_overrides_user_tag() {
        let (logger, buffer) = logger_with_buffer();

        logger.info_as("admin", "ssn:000-00-0000;");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[USER] admin INFO "));
        assert!(lines[0].ends_with(": ssn:***;"));
    }

    #[test]
    fn test_debug_is_filtered() {
        let (logger, buffer) = logger_with_buffer();

        logger.debug("name:Bob;");
        logger.warn("password:pw;");
        logger.error("email:e@x.com;");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" WARN "));
        assert!(lines[1].contains(" ERROR "));
    }

    #[test]
    fn test_does_not_propagate_to_root() {
        let root = SharedBuffer::default();
        let root_subscriber = tracing_subscriber::fmt()
            .with_writer(root.clone())
            .with_ansi(false)
            .finish();
        let (logger, buffer) = logger_with_buffer();

        tracing::subscriber::with_default(root_subscriber, || {
            logger.info("name:Bob;");
            tracing::info!("root only");
        });

        assert_eq!(buffer.lines().len(), 1);
        let root_lines = root.lines();
        assert_eq!(root_lines.len(), 1);
        assert!(root_lines[0].contains("root only"));
        assert!(!root_lines[0].contains("name:"));
    }

    #[test]
    fn test_custom_name_and_fields() {
        let buffer = SharedBuffer::default();
        let logger = UserDataLogger::builder()
            .name("audit")
            .fields(["ip"])
            .writer(buffer.clone())
            .build()
            .unwrap();

        logger.info("name:Bob;ip:10.1.1.1;");

        assert_eq!(logger.name(), "audit");
        let lines = buffer.lines();
        assert!(lines[0].starts_with("[USER] audit INFO "));
        assert!(lines[0].ends_with(": name:Bob;ip:***;"));
    }

    #[test]
    fn test_get_logger_defaults() {
        let logger = get_logger().unwrap();
        assert_eq!(logger.name(), DEFAULT_LOGGER_NAME);
    }
}
