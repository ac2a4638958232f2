//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::{Config, DATABASE_ENV};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::hint(&format!("edit {} to point at your database", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(config: &Config, config_path: &Path, database: &Path) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config_file": config_path.display().to_string(),
            "config_file_exists": config_path.exists(),
            "database": database.display().to_string(),
            "logging": serde_json::to_value(&config.logging)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Config", config_path.display());
    if !config_path.exists() {
        output::note("(file not found, using defaults)");
    }
    output::field("Database", database.display());
    if std::env::var_os(DATABASE_ENV).is_some() {
        output::note(&format!("{DATABASE_ENV} is set"));
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}
