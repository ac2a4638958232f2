//! Path utilities for clientele.
//!
//! Per-user files live under `~/.clientele/`:
//! - `~/.clientele/config.toml` - main configuration
//!
//! The customer database defaults to `customers.db` in the working directory
//! unless the configuration or `--db` says otherwise.

use std::path::PathBuf;

/// Returns the clientele home directory (`~/.clientele/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".clientele")
}

/// Returns the default config file path (`~/.clientele/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_clientele_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".clientele"));
    }
}
