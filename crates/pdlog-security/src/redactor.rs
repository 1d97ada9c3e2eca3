//! Field-value redaction for separator-delimited messages

use crate::{PAIR_DELIMITER, PII_FIELDS, REDACTION, Result, SEPARATOR, SecurityError};

/// Redact the value of each listed field in a `field:value;field:value;` message.
///
/// A value is the run between `<field>:` and the next `separator`. Fields that
/// do not appear leave the message untouched. Empty separators and empty field
/// names are ignored, so this never fails.
pub fn filter_datum<S: AsRef<str>>(
    fields: &[S],
    redaction: &str,
    message: &str,
    separator: &str,
) -> String {
    if separator.is_empty() {
        return message.to_string();
    }

    fields
        .iter()
        .map(AsRef::as_ref)
        .filter(|field| !field.is_empty())
        .fold(message.to_string(), |message, field| {
            redact_field(&message, field, PAIR_DELIMITER, separator, redaction)
        })
}

/// Replace every value span of a single field.
///
/// An occurrence without a following separator is left as-is, and so is one
/// whose value would cross a line break; scanning then resumes right after the
/// field boundary.
fn redact_field(
    message: &str,
    field: &str,
    delimiter: &str,
    separator: &str,
    redaction: &str,
) -> String {
    let boundary = format!("{field}{delimiter}");
    let mut output = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(found) = rest.find(&boundary) {
        let value_start = found + boundary.len();
        let Some(value_len) = rest[value_start..].find(separator) else {
            break;
        };

        output.push_str(&rest[..value_start]);
        if rest[value_start..value_start + value_len].contains('\n') {
            rest = &rest[value_start..];
            continue;
        }

        output.push_str(redaction);
        rest = &rest[value_start + value_len..];
    }

    output.push_str(rest);
    output
}

/// Validated redaction configuration, immutable once built
#[derive(Debug, Clone)]
pub struct FieldRedactor {
    fields: Vec<String>,
    redaction: String,
    separator: String,
    pair_delimiter: String,
}

impl FieldRedactor {
    pub fn new<I, S>(
        fields: I,
        redaction: impl Into<String>,
        separator: impl Into<String>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let redaction = redaction.into();
        let separator = separator.into();

        if separator.is_empty() {
            return Err(SecurityError::EmptySeparator);
        }
        if let Some(field) = fields
            .iter()
            .find(|f| f.is_empty() || f.contains(separator.as_str()))
        {
            return Err(SecurityError::InvalidField(field.clone()));
        }
        if redaction.contains(separator.as_str()) {
            return Err(SecurityError::InvalidRedaction(redaction));
        }

        Ok(Self {
            fields,
            redaction,
            separator,
            pair_delimiter: PAIR_DELIMITER.to_string(),
        })
    }

    /// Use a different delimiter between field names and values (default `:`)
    pub fn with_pair_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.contains(self.separator.as_str()) {
            return Err(SecurityError::InvalidDelimiter(delimiter));
        }
        self.pair_delimiter = delimiter;
        Ok(self)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn redaction(&self) -> &str {
        &self.redaction
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Redact all configured fields, in configuration order
    pub fn redact(&self, message: &str) -> String {
        self.fields.iter().fold(message.to_string(), |message, field| {
            redact_field(
                &message,
                field,
                &self.pair_delimiter,
                &self.separator,
                &self.redaction,
            )
        })
    }
}

impl Default for FieldRedactor {
    fn default() -> Self {
        Self {
            fields: PII_FIELDS.iter().map(|f| f.to_string()).collect(),
            redaction: REDACTION.to_string(),
            separator: SEPARATOR.to_string(),
            pair_delimiter: PAIR_DELIMITER.to_string(),
        }
    }
}
