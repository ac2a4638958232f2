//! Read-only customer viewer.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Select};
use serde_json::json;
use tracing::debug;

use super::{output, table};
use crate::application::CustomerService;
use crate::error::Result;
use crate::port::CustomerStore;

const REFRESH: usize = 0;

fn render<S: CustomerStore>(service: &CustomerService<S>) -> Result<()> {
    let customers = service.all()?;
    debug!(rows = customers.len(), "Loaded customers");

    if output::is_json() {
        output::json_output(json!({
            "command": "view",
            "count": customers.len(),
            "customers": table::to_json(&customers)?,
        }));
        return Ok(());
    }

    output::section("Customers");
    if customers.is_empty() {
        output::note("No customers yet.");
    } else {
        output::table(&table::render(&customers));
        output::note(&format!("{} record(s)", customers.len()));
    }
    Ok(())
}

/// Show every customer. Unless `once` is set (or output is JSON or not a
/// terminal), offer Refresh until the operator quits.
pub fn execute<S: CustomerStore>(service: &CustomerService<S>, once: bool) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    render(service)?;

    if once || output::is_json() || !std::io::stdin().is_terminal() {
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .items(&["Refresh", "Quit"])
            .default(REFRESH)
            .interact()?;
        if choice != REFRESH {
            return Ok(());
        }
        render(service)?;
    }
}
