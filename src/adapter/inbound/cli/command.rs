//! Command-line interface definitions.
//!
//! Defines the CLI structure for clientele using `clap`: the interactive
//! entry form and viewer, their scriptable counterparts, and configuration
//! helpers.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::CustomerForm;

/// Customer entry form and record viewer over a local SQLite file
#[derive(Parser, Debug)]
#[command(name = "clientele")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Path to the SQLite database file (overrides the configuration).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the clientele CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the customer entry form (interactive)
    #[command(alias = "form")]
    Entry,

    /// Add one customer from flags (non-interactive)
    Add(AddArgs),

    /// Show every stored customer, with manual refresh
    View(ViewArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `clientele config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
}

/// Arguments for the `add` subcommand.
///
/// Mirrors the entry form; blank optional fields are stored as NULL.
#[derive(Parser, Debug, Default)]
pub struct AddArgs {
    /// Customer name (required).
    #[arg(long, default_value = "")]
    pub name: String,

    /// Birthday as YYYY-MM-DD.
    #[arg(long, default_value = "")]
    pub birthday: String,

    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number (digits and ()-+ only).
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Postal address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Preferred contact method (Email, Phone, Mail).
    #[arg(long = "contact", default_value = "Email")]
    pub preferred_contact: String,
}

impl From<AddArgs> for CustomerForm {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            birthday: args.birthday,
            email: args.email,
            phone: args.phone,
            address: args.address,
            preferred_contact: args.preferred_contact,
        }
    }
}

/// Arguments for the `view` subcommand.
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Render the table once and exit instead of offering Refresh.
    #[arg(long)]
    pub once: bool,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
