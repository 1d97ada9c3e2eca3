//! Output line template

use time::OffsetDateTime;
use time::macros::format_description;
use tracing::Level;

/// Shape of every emitted line
pub const LINE_TEMPLATE: &str = "[USER] {user} {level} {timestamp}: {message}";

/// `YYYY-MM-DD HH:MM:SS,mmm`
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]"
        ))
        .unwrap_or_else(|_| timestamp.to_string())
}

pub fn render_line(user: &str, level: Level, timestamp: OffsetDateTime, message: &str) -> String {
    format!(
        "[USER] {user} {level} {}: {message}",
        format_timestamp(timestamp)
    )
}
