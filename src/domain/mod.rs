//! Storage-agnostic customer types and form validation.

pub mod customer;

pub use customer::{ContactMethod, Customer, CustomerForm, NewCustomer};
