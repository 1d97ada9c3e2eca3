mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use pdlog_config::Config;

use crate::cli::Commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let mut config = Config::load()?;
    if let Some(db) = cli.db {
        config.database.path = Some(db);
    }

    // Diagnostics go to stderr; redacted user data goes to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.app_filter)),
        )
        .init();

    match cli.command {
        Commands::Dump => commands::dump::handle(&config).await,
        Commands::Redact {
            message,
            fields,
            separator,
            redaction,
        } => commands::redact::handle(message, fields, &separator, &redaction),
        Commands::Add {
            name,
            email,
            phone,
            ssn,
            password,
            ip,
            last_login,
            user_agent,
        } => {
            let user = pdlog_storage::NewUser {
                name,
                email,
                phone,
                ssn,
                password,
                ip,
                last_login,
                user_agent,
            };
            commands::add::handle(&config, user).await
        }
        Commands::Config => commands::show_config(&config),
    }
}
