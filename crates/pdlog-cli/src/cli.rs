use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdlog")]
#[command(about = "Log personal data with PII fields redacted", long_about = None)]
#[command(version)]
pub struct Cli {
    /// SQLite database file (overrides config and PERSONAL_DATA_DB_NAME)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log every row of the users table through the redacting logger
    Dump,

    /// Redact a message (or each stdin line) and print it
    Redact {
        /// Message like "name:Bob;email:bob@x.com;" (reads stdin when omitted)
        message: Option<String>,

        /// Comma-separated fields to redact (default: name,email,phone,ssn,password)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Pair separator
        #[arg(long, default_value = ";")]
        separator: String,

        /// Replacement token
        #[arg(long, default_value = "***")]
        redaction: String,
    },

    /// Insert a user row
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        ssn: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        ip: Option<String>,

        /// e.g. 2019-11-14 06:16:24
        #[arg(long)]
        last_login: Option<String>,

        #[arg(long)]
        user_agent: Option<String>,
    },

    /// Show the config file location and effective settings
    Config,
}
