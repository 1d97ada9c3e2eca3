pub mod add;
pub mod dump;
pub mod redact;

use anyhow::Result;
use pdlog_config::Config;
use pdlog_storage::Storage;

/// Open the database named by the config (or the default location)
pub async fn open_storage(config: &Config) -> Result<Storage> {
    Ok(Storage::new(config.database.path.clone()).await?)
}

pub fn show_config(config: &Config) -> Result<()> {
    println!("Config file: {}", Config::config_path().display());
    match &config.database.path {
        Some(path) => println!("Database: {}", path.display()),
        None => println!("Database: {}", Storage::default_db_path()?.display()),
    }
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
