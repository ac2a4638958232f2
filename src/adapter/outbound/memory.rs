//! In-memory customer store.

use chrono::Utc;
use parking_lot::Mutex;

use crate::domain::{Customer, NewCustomer};
use crate::error::{Error, Result};
use crate::port::{CustomerStore, ListOrder};

#[derive(Default)]
struct State {
    rows: Vec<Customer>,
    next_id: i32,
    fail_next_insert: Option<String>,
}

/// Volatile [`CustomerStore`] that mirrors the SQLite semantics.
#[derive(Default)]
pub struct InMemoryCustomerStore {
    state: Mutex<State>,
}

impl InMemoryCustomerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert fail with a database error.
    pub fn fail_next_insert(&self, message: impl Into<String>) {
        self.state.lock().fail_next_insert = Some(message.into());
    }
}

impl CustomerStore for InMemoryCustomerStore {
    fn insert(&self, customer: &NewCustomer) -> Result<Customer> {
        let mut state = self.state.lock();
        if let Some(message) = state.fail_next_insert.take() {
            return Err(Error::Database(message));
        }

        state.next_id += 1;
        let row = Customer {
            id: state.next_id,
            name: customer.name.clone(),
            birthday: customer.birthday.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            preferred_contact: Some(customer.preferred_contact),
            created_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        state.rows.push(row.clone());
        Ok(row)
    }

    fn list(&self, order: ListOrder) -> Result<Vec<Customer>> {
        let mut rows = self.state.lock().rows.clone();
        match order {
            ListOrder::Oldest => rows.sort_by_key(|c| c.id),
            ListOrder::Newest => rows.sort_by_key(|c| std::cmp::Reverse(c.id)),
        }
        Ok(rows)
    }

    fn count(&self) -> Result<i64> {
        Ok(self.state.lock().rows.len() as i64)
    }
}
