//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct. Configuration is loaded from an
//! optional TOML file, then the `CLIENTELE_DATABASE` environment variable
//! may override the database path.
//!
//! # Example
//!
//! ```no_run
//! use clientele::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.logging.init();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides [`Config::database`].
pub const DATABASE_ENV: &str = "CLIENTELE_DATABASE";

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Path to the SQLite database file.
    ///
    /// Defaults to "customers.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_database_path() -> String {
    "customers.db".to_string()
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns an error if an existing file is unreadable or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(database) = std::env::var(DATABASE_ENV) {
            if !database.trim().is_empty() {
                self.database = database;
            }
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        self.logging.validate()
    }

    /// Database path, with `override_path` (the `--db` flag) taking priority.
    #[must_use]
    pub fn database_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path.map_or_else(|| PathBuf::from(&self.database), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.database, "customers.db");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn flag_overrides_configured_database() {
        let config = Config::default();
        assert_eq!(config.database_path(None), PathBuf::from("customers.db"));
        assert_eq!(
            config.database_path(Some(Path::new("/tmp/other.db"))),
            PathBuf::from("/tmp/other.db")
        );
    }

    #[test]
    fn blank_database_is_rejected() {
        let config = Config {
            database: "  ".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
