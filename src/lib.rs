//! Clientele - customer entry form and record viewer over a local SQLite file.
//!
//! # Architecture
//!
//! The crate is laid out as ports and adapters:
//!
//! - [`domain`] - Customer records, the entry form and its validation rules
//! - [`port`] - The [`port::CustomerStore`] persistence trait
//! - [`application`] - [`application::CustomerService`], which validates and stores
//! - [`adapter`] - SQLite and in-memory stores, and the terminal screens
//! - [`infrastructure`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use clientele::adapter::inbound::cli::open_service;
//! use clientele::domain::CustomerForm;
//!
//! let service = open_service(std::path::Path::new("customers.db"), true)?;
//! let form = CustomerForm {
//!     name: "Ada Lovelace".into(),
//!     email: "ada@example.com".into(),
//!     ..CustomerForm::default()
//! };
//! let stored = service.submit(&form)?;
//! println!("saved customer #{}", stored.id);
//! # Ok::<(), clientele::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
