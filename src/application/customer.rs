//! Customer entry and listing use cases.

use tracing::{debug, info, warn};

use crate::domain::{Customer, CustomerForm};
use crate::error::Result;
use crate::port::{CustomerStore, ListOrder};

/// Ties form validation to a [`CustomerStore`].
pub struct CustomerService<S> {
    store: S,
}

impl<S: CustomerStore> CustomerService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate the form and insert it.
    ///
    /// The store is not touched when validation fails.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::Validation`] for bad input, or a
    /// database error from the store.
    pub fn submit(&self, form: &CustomerForm) -> Result<Customer> {
        let customer = form.validate().map_err(|e| {
            debug!(reason = %e, "Form rejected");
            e
        })?;

        match self.store.insert(&customer) {
            Ok(stored) => {
                info!(id = stored.id, contact = %customer.preferred_contact, "Customer submitted");
                Ok(stored)
            }
            Err(e) => {
                warn!(error = %e, "Customer insert failed");
                Err(e)
            }
        }
    }

    /// Every customer, most recent first.
    pub fn recent(&self) -> Result<Vec<Customer>> {
        self.store.list(ListOrder::Newest)
    }

    /// Every customer, in insertion order.
    pub fn all(&self) -> Result<Vec<Customer>> {
        self.store.list(ListOrder::Oldest)
    }

    pub fn count(&self) -> Result<i64> {
        self.store.count()
    }
}
