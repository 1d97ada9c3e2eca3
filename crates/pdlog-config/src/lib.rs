use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides `database.path`
pub const DB_PATH_ENV: &str = "PERSONAL_DATA_DB_NAME";

/// Overrides `logging.logger_name`
pub const LOGGER_NAME_ENV: &str = "PDLOG_LOGGER_NAME";

/// Simple configuration for pdlog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file; the per-user data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Name of the user-data logger, shown as the `[USER]` tag
    #[serde(default = "default_logger_name")]
    pub logger_name: String,

    /// `EnvFilter` directive for process diagnostics on stderr
    #[serde(default = "default_app_filter")]
    pub app_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            logger_name: default_logger_name(),
            app_filter: default_app_filter(),
        }
    }
}

fn default_logger_name() -> String {
    "user_data".to_string()
}

fn default_app_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from default location or create default if not found,
    /// then apply environment overrides
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            config
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(DB_PATH_ENV).filter(|v| !v.is_empty()) {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(name) = lookup(LOGGER_NAME_ENV).filter(|v| !v.is_empty()) {
            self.logging.logger_name = name;
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "pdlog", "pdlog") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.pdlog/config.toml")
        }
    }
}
