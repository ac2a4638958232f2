//! Persistence port for customer records.

use crate::domain::{Customer, NewCustomer};
use crate::error::Result;

/// Row ordering for [`CustomerStore::list`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListOrder {
    /// Insertion order (ascending id).
    #[default]
    Oldest,
    /// Most recently submitted first (descending id).
    Newest,
}

/// Storage operations for customers.
pub trait CustomerStore: Send + Sync {
    /// Insert one customer and return the stored row.
    fn insert(&self, customer: &NewCustomer) -> Result<Customer>;

    /// List every customer in the given order.
    fn list(&self, order: ListOrder) -> Result<Vec<Customer>>;

    /// Number of stored customers.
    fn count(&self) -> Result<i64>;
}
