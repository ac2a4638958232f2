//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────┐        ┌──────────────────┐
//!        │  CLI screens │ ─────▶ │ CustomerService  │
//!        └──────────────┘        └────────┬─────────┘
//!                                         │ CustomerStore
//!                        ┌────────────────┴──────────────┐
//!                        ▼                               ▼
//!                 ┌─────────────┐                 ┌─────────────┐
//!                 │   SQLite    │                 │  In-memory  │
//!                 └─────────────┘                 └─────────────┘
//! ```

pub mod outbound;

pub use outbound::store::{CustomerStore, ListOrder};
