//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`CustomerStore`](crate::port::CustomerStore)
//! using Diesel ORM over a single local database file.

pub mod database;
pub mod store;

pub use store::SqliteCustomerStore;
