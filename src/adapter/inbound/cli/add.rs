//! Handler for the non-interactive `add` command.

use serde_json::json;

use super::output;
use crate::application::CustomerService;
use crate::domain::CustomerForm;
use crate::error::Result;
use crate::port::CustomerStore;

/// Validate and store one customer from command-line flags.
pub fn execute<S: CustomerStore>(service: &CustomerService<S>, form: &CustomerForm) -> Result<()> {
    let customer = service.submit(form)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "add",
            "status": "ok",
            "customer": serde_json::to_value(&customer)?,
        }));
        return Ok(());
    }

    output::success("Your information was submitted.");
    output::field("ID", customer.id);
    output::field("Name", &customer.name);
    if let Some(contact) = customer.preferred_contact {
        output::field("Preferred", contact);
    }
    output::field("Created", &customer.created_at);
    Ok(())
}
