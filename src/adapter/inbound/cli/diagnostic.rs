//! Miette-based error diagnostics for CLI error presentation.
//!
//! Turns crate errors into reports with help text, and config parse errors
//! into reports that point at the offending spot in the TOML file.

use std::fmt::Display;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};

use crate::error::{ConfigError, Error};

/// Configuration parse error with source location context.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(clientele::config), help("see config.toml.example for the expected layout"))]
pub struct ConfigParseDiagnostic {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,
}

/// Any other failure, with an optional suggestion.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CommandDiagnostic {
    pub message: String,
    pub code: &'static str,
    pub help: Option<&'static str>,
}

impl CommandDiagnostic {
    fn new(code: &'static str, message: impl Into<String>, help: Option<&'static str>) -> Self {
        Self {
            message: message.into(),
            code,
            help,
        }
    }
}

impl Diagnostic for CommandDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help.map(|h| Box::new(h) as Box<dyn Display + 'a>)
    }
}

fn parse_diagnostic(err: &toml::de::Error, config_path: &Path) -> Option<ConfigParseDiagnostic> {
    let span = err.span()?;
    let content = std::fs::read_to_string(config_path).ok()?;
    Some(ConfigParseDiagnostic {
        message: err.message().to_string(),
        src: NamedSource::new(config_path.display().to_string(), content),
        span: (span.start, span.end.saturating_sub(span.start)).into(),
    })
}

/// Build a printable report for an error returned by a command.
#[must_use]
pub fn report(err: &Error, config_path: &Path) -> Report {
    match err {
        Error::Config(ConfigError::Parse(parse)) => match parse_diagnostic(parse, config_path) {
            Some(diagnostic) => Report::new(diagnostic),
            None => Report::new(CommandDiagnostic::new(
                "clientele::config",
                err.to_string(),
                None,
            )),
        },
        Error::Config(_) => Report::new(CommandDiagnostic::new(
            "clientele::config",
            err.to_string(),
            Some("run `clientele config show` to inspect the effective configuration"),
        )),
        Error::Validation(_) => Report::new(CommandDiagnostic::new(
            "clientele::validation",
            format!("Validation: {err}"),
            None,
        )),
        Error::MissingDatabase(_) => Report::new(CommandDiagnostic::new(
            "clientele::database",
            err.to_string(),
            Some("add a customer first (`clientele entry` or `clientele add`), or pass --db"),
        )),
        Error::Database(msg) | Error::Connection(msg) => Report::new(CommandDiagnostic::new(
            "clientele::database",
            format!("Database error: {msg}"),
            Some("check that the database path is writable and not a directory"),
        )),
        _ => Report::new(CommandDiagnostic::new("clientele::error", err.to_string(), None)),
    }
}
