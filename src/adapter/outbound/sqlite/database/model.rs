//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::customers;

/// Database row for a customer (insertable).
///
/// `id` and `created_at` are filled in by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow {
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: Option<String>,
}

/// Database row for a customer (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub birthday: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub preferred_contact: Option<String>,
    pub created_at: Option<String>,
}
