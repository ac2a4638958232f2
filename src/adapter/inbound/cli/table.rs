//! Customer table rendering shared by the entry form and the viewer.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::Customer;

#[derive(Tabled)]
struct CustomerRowView<'a> {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Birthday")]
    birthday: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Address")]
    address: &'a str,
    #[tabled(rename = "Preferred")]
    preferred: &'static str,
    #[tabled(rename = "Created")]
    created: &'a str,
}

impl<'a> From<&'a Customer> for CustomerRowView<'a> {
    fn from(c: &'a Customer) -> Self {
        Self {
            id: c.id,
            name: &c.name,
            birthday: c.birthday.as_deref().unwrap_or_default(),
            email: c.email.as_deref().unwrap_or_default(),
            phone: c.phone.as_deref().unwrap_or_default(),
            address: c.address.as_deref().unwrap_or_default(),
            preferred: c.preferred_contact.map(|m| m.as_str()).unwrap_or_default(),
            created: &c.created_at,
        }
    }
}

/// Render customers as a text table. NULL cells are left empty.
#[must_use]
pub fn render(customers: &[Customer]) -> String {
    Table::new(customers.iter().map(CustomerRowView::from))
        .with(Style::sharp())
        .to_string()
}

/// JSON array of customers.
///
/// # Errors
/// Returns an error if a record fails to serialize.
pub fn to_json(customers: &[Customer]) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(customers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactMethod;

    fn customer() -> Customer {
        Customer {
            id: 7,
            name: "Ada".into(),
            birthday: None,
            email: Some("ada@example.com".into()),
            phone: None,
            address: None,
            preferred_contact: Some(ContactMethod::Email),
            created_at: "2026-01-02 03:04:05".into(),
        }
    }

    #[test]
    fn render_has_headers_and_values() {
        let text = render(&[customer()]);
        for header in ["ID", "Name", "Birthday", "Email", "Phone", "Address", "Preferred", "Created"] {
            assert!(text.contains(header), "missing {header}");
        }
        assert!(text.contains("ada@example.com"));
        assert!(text.contains("2026-01-02 03:04:05"));
        assert!(!text.contains("None"));
    }

    #[test]
    fn json_uses_column_names_and_nulls() {
        let value = to_json(&[customer()]).unwrap();
        assert_eq!(value[0]["id"], 7);
        assert_eq!(value[0]["preferred_contact"], "Email");
        assert!(value[0]["birthday"].is_null());
    }
}
