use std::process::ExitCode;

use clap::Parser;
use clientele::adapter::inbound::cli::command::{Cli, ColorChoice};
use clientele::adapter::inbound::cli::output::{self, OutputConfig};
use clientele::adapter::inbound::cli::{diagnostic, dispatch};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config_path = cli.config.clone();
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if output::is_json() {
                output::error(&e.to_string());
            } else {
                eprintln!("{:?}", diagnostic::report(&e, &config_path));
            }
            ExitCode::FAILURE
        }
    }
}
