//! Customer records and the entry form that produces them.
//!
//! A [`CustomerForm`] holds raw operator input exactly as typed. Calling
//! [`CustomerForm::validate`] trims every field, applies the form rules and
//! yields a [`NewCustomer`] ready for insertion. Stored rows come back as
//! [`Customer`].

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How a customer prefers to be contacted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Mail,
}

impl ContactMethod {
    /// Every method, in the order the form offers them.
    pub const ALL: [ContactMethod; 3] = [Self::Email, Self::Phone, Self::Mail];

    /// Name as stored in the `preferred_contact` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Mail => "Mail",
        }
    }

    /// Position in [`ContactMethod::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "mail" => Ok(Self::Mail),
            _ => Err(ValidationError::PreferredContact),
        }
    }
}

/// A stored customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: Option<ContactMethod>,
    pub created_at: String,
}

/// A validated customer ready to be inserted.
///
/// Optional fields left blank on the form are `None` and stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: ContactMethod,
}

/// Raw entry-form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub birthday: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub preferred_contact: String,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            birthday: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            preferred_contact: ContactMethod::default().to_string(),
        }
    }
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid pattern"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid pattern"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9+()\-\s]{7,}$").expect("valid pattern"))
}

/// Trimmed value, or `None` when blank.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_calendar_date(value: &str) -> bool {
    date_pattern().is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

impl CustomerForm {
    /// Check the form and build an insertable record.
    ///
    /// Rules run in field order and the first failure is returned.
    ///
    /// # Errors
    /// Returns the [`ValidationError`] for the first field that fails.
    pub fn validate(&self) -> Result<NewCustomer, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }

        let birthday = optional(&self.birthday);
        if let Some(birthday) = &birthday {
            if !is_calendar_date(birthday) {
                return Err(ValidationError::Birthday);
            }
        }

        let email = optional(&self.email);
        if let Some(email) = &email {
            if !email_pattern().is_match(email) {
                return Err(ValidationError::Email);
            }
        }

        let phone = optional(&self.phone);
        if let Some(phone) = &phone {
            if !phone_pattern().is_match(phone) {
                return Err(ValidationError::Phone);
            }
        }

        let preferred_contact: ContactMethod = self.preferred_contact.parse()?;

        Ok(NewCustomer {
            name: name.to_string(),
            birthday,
            email,
            phone,
            address: optional(&self.address),
            preferred_contact,
        })
    }

    /// Reset every field; preferred contact goes back to Email.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
