//! CLI module graph and command dispatch.

pub mod add;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod entry;
pub mod output;
pub mod paths;
pub mod table;
pub mod view;

use std::path::Path;

use tracing::debug;

use self::command::{Cli, Commands, ConfigCommand};
use crate::adapter::outbound::sqlite::{database::connection, SqliteCustomerStore};
use crate::application::CustomerService;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Open the customer database as a service.
///
/// The entry screens create the file on first use; the viewer does not.
pub fn open_service(path: &Path, create: bool) -> Result<CustomerService<SqliteCustomerStore>> {
    let pool = connection::open(path, create)?;
    Ok(CustomerService::new(SqliteCustomerStore::new(pool)))
}

/// Load configuration, start logging and run the selected command.
pub fn dispatch(cli: Cli) -> Result<()> {
    if let Commands::Config(ConfigCommand::Init(args)) = &cli.command {
        return config::execute_init(&cli.config, args.force);
    }

    let config = Config::load_or_default(&cli.config)?;
    config.logging.clone().with_verbosity(cli.verbose).init();

    let database = config.database_path(cli.db.as_deref());
    debug!(database = %database.display(), config = %cli.config.display(), "Resolved paths");

    match cli.command {
        Commands::Entry => {
            entry::ensure_interactive()?;
            entry::execute(&open_service(&database, true)?)
        }
        Commands::Add(args) => add::execute(&open_service(&database, true)?, &args.into()),
        Commands::View(args) => view::execute(&open_service(&database, false)?, args.once),
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(&config, &cli.config, &database)
        }
        Commands::Config(ConfigCommand::Init(_)) => Ok(()),
    }
}
