//! Application services (use cases).

pub mod customer;

pub use customer::CustomerService;
