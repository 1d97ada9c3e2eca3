use anyhow::Result;
use pdlog_security::{PII_FIELDS, filter_datum};
use std::io::BufRead;

pub fn handle(
    message: Option<String>,
    fields: Vec<String>,
    separator: &str,
    redaction: &str,
) -> Result<()> {
    let fields = if fields.is_empty() {
        PII_FIELDS.iter().map(|f| f.to_string()).collect()
    } else {
        fields
    };

    match message {
        Some(message) => println!("{}", filter_datum(&fields, redaction, &message, separator)),
        None => {
            for line in std::io::stdin().lock().lines() {
                println!("{}", filter_datum(&fields, redaction, &line?, separator));
            }
        }
    }

    Ok(())
}
