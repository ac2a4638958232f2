//! Customer entry screen.
//!
//! An interactive form: the operator fills in the fields, then picks
//! Submit, Clear or Quit. A successful submit refreshes the "Recently
//! Submitted" table and clears the form; a rejected or failed submit keeps
//! the values so they can be corrected.

use std::io::IsTerminal;

use dialoguer::{theme::ColorfulTheme, Input, Select};

use super::{output, table};
use crate::application::CustomerService;
use crate::domain::{ContactMethod, Customer, CustomerForm};
use crate::error::{ConfigError, Error, Result};
use crate::port::CustomerStore;

/// Buttons under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Clear,
    Quit,
}

impl Action {
    const ALL: [Action; 3] = [Self::Submit, Self::Clear, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Clear => "Clear",
            Self::Quit => "Quit",
        }
    }
}

/// What happened after an [`Action`].
#[derive(Debug)]
pub enum Outcome {
    Submitted(Customer),
    /// Input failed validation; message is shown under "Validation".
    Rejected(String),
    /// The database refused the insert.
    Failed(String),
    Cleared,
    Quit,
}

/// Apply one action to the form.
///
/// Submit clears the form only when the insert succeeded.
pub fn apply<S: CustomerStore>(
    service: &CustomerService<S>,
    form: &mut CustomerForm,
    action: Action,
) -> Outcome {
    match action {
        Action::Submit => match service.submit(form) {
            Ok(customer) => {
                form.clear();
                Outcome::Submitted(customer)
            }
            Err(Error::Validation(e)) => Outcome::Rejected(e.to_string()),
            Err(Error::Database(msg) | Error::Connection(msg)) => Outcome::Failed(msg),
            Err(e) => Outcome::Failed(e.to_string()),
        },
        Action::Clear => {
            form.clear();
            Outcome::Cleared
        }
        Action::Quit => Outcome::Quit,
    }
}

fn show_recent<S: CustomerStore>(service: &CustomerService<S>) -> Result<()> {
    let recent = service.recent()?;
    output::section("Recently Submitted");
    if recent.is_empty() {
        output::note("No customers yet.");
    } else {
        output::lines(&table::render(&recent));
    }
    Ok(())
}

fn prompt_text(theme: &ColorfulTheme, label: &str, current: &str) -> Result<String> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_form(theme: &ColorfulTheme, form: &mut CustomerForm) -> Result<()> {
    output::section("Enter Your Information");

    form.name = prompt_text(theme, "Name *", &form.name)?;
    form.birthday = prompt_text(theme, "Birthday (YYYY-MM-DD)", &form.birthday)?;
    form.email = prompt_text(theme, "Email", &form.email)?;
    form.phone = prompt_text(theme, "Phone", &form.phone)?;
    form.address = prompt_text(theme, "Address", &form.address)?;

    let current = form
        .preferred_contact
        .parse::<ContactMethod>()
        .unwrap_or_default();
    let methods: Vec<&str> = ContactMethod::ALL.iter().map(|m| m.as_str()).collect();
    let picked = Select::with_theme(theme)
        .with_prompt("Preferred Contact *")
        .items(&methods)
        .default(current.index())
        .interact()?;
    form.preferred_contact = ContactMethod::ALL[picked].to_string();

    Ok(())
}

/// Refuse to start the form when it cannot be driven interactively.
///
/// Runs before the database is opened so a refused run leaves no file behind.
pub fn ensure_interactive() -> Result<()> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "json",
            reason: "`clientele entry` is interactive; use `clientele add` for scripted entry"
                .to_string(),
        }
        .into());
    }
    if !std::io::stdin().is_terminal() {
        return Err(Error::Prompt(
            "the entry form needs an interactive terminal; use `clientele add` instead"
                .to_string(),
        ));
    }

    Ok(())
}

/// Run the interactive entry form until the operator quits.
pub fn execute<S: CustomerStore>(service: &CustomerService<S>) -> Result<()> {
    ensure_interactive()?;

    output::header(env!("CARGO_PKG_VERSION"));
    show_recent(service)?;

    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut form = CustomerForm::default();

    loop {
        prompt_form(&theme, &mut form)?;

        let choice = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact()?;

        match apply(service, &mut form, Action::ALL[choice]) {
            Outcome::Submitted(customer) => {
                show_recent(service)?;
                output::success("Your information was submitted.");
                output::field("ID", customer.id);
            }
            Outcome::Rejected(message) => output::error(&format!("Validation: {message}")),
            Outcome::Failed(message) => output::error(&format!("Database error: {message}")),
            Outcome::Cleared => output::note("Form cleared."),
            Outcome::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::InMemoryCustomerStore;

    fn service() -> CustomerService<InMemoryCustomerStore> {
        CustomerService::new(InMemoryCustomerStore::new())
    }

    fn filled() -> CustomerForm {
        CustomerForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            preferred_contact: "Mail".into(),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn submit_success_clears_form() {
        let service = service();
        let mut form = filled();

        let outcome = apply(&service, &mut form, Action::Submit);

        assert!(matches!(outcome, Outcome::Submitted(ref c) if c.name == "Ada"));
        assert_eq!(form, CustomerForm::default());
        assert_eq!(service.recent().unwrap().len(), 1);
    }

    #[test]
    fn rejected_submit_keeps_values() {
        let service = service();
        let mut form = CustomerForm {
            birthday: "30/09/2001".into(),
            ..filled()
        };
        let before = form.clone();

        let outcome = apply(&service, &mut form, Action::Submit);

        assert!(
            matches!(outcome, Outcome::Rejected(ref m) if m == "Birthday must be YYYY-MM-DD (e.g., 2001-09-30).")
        );
        assert_eq!(form, before);
        assert!(service.recent().unwrap().is_empty());
    }

    #[test]
    fn database_failure_keeps_values() {
        let store = InMemoryCustomerStore::new();
        store.fail_next_insert("database is locked");
        let service = CustomerService::new(store);
        let mut form = filled();

        let outcome = apply(&service, &mut form, Action::Submit);

        assert!(matches!(outcome, Outcome::Failed(ref m) if m == "database is locked"));
        assert_eq!(form, filled());
    }

    #[test]
    fn clear_resets_contact_to_email() {
        let service = service();
        let mut form = filled();

        assert!(matches!(apply(&service, &mut form, Action::Clear), Outcome::Cleared));
        assert_eq!(form.preferred_contact, "Email");
        assert!(form.name.is_empty());
    }

    #[test]
    fn quit_leaves_form_alone() {
        let service = service();
        let mut form = filled();
        assert!(matches!(apply(&service, &mut form, Action::Quit), Outcome::Quit));
        assert_eq!(form, filled());
    }
}
