use std::fs;

use clientele::error::{ConfigError, Error};
use clientele::infrastructure::config::settings::Config;

#[test]
fn config_loads_database_and_logging() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
database = "/srv/shop/customers.db"

[logging]
level = "info"
format = "json"
"#,
    )
    .expect("write temp config");

    let config = Config::load(&path).expect("valid config");
    assert_eq!(config.database, "/srv/shop/customers.db");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_unknown_log_format() {
    let toml = r#"
[logging]
level = "info"
format = "xml"
"#;

    match Config::parse_toml(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.format",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid format error, got {err}"),
        Ok(config) => panic!(
            "Expected format to be rejected, got {}",
            config.logging.format
        ),
    }
}

#[test]
fn config_reports_toml_syntax_errors() {
    let result = Config::parse_toml("database = \n");
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = Config::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn unreadable_config_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}
