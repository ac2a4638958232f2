//! SQLite customer store implementation.
//!
//! Provides persistent storage for customer records using SQLite and Diesel ORM.

use diesel::prelude::*;

use super::database::connection::DbPool;
use super::database::model::{CustomerRow, NewCustomerRow};
use super::database::schema::customers;
use crate::domain::{ContactMethod, Customer, NewCustomer};
use crate::error::{Error, Result};
use crate::port::{CustomerStore, ListOrder};

/// SQLite-backed customer store.
pub struct SqliteCustomerStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteCustomerStore {
    /// Create a new SQLite customer store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(customer: &NewCustomer) -> NewCustomerRow {
        NewCustomerRow {
            name: customer.name.clone(),
            birthday: customer.birthday.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
            preferred_contact: Some(customer.preferred_contact.to_string()),
        }
    }

    fn from_row(row: CustomerRow) -> Result<Customer> {
        let preferred_contact = row
            .preferred_contact
            .as_deref()
            .map(str::parse::<ContactMethod>)
            .transpose()
            .map_err(|_| {
                Error::Database(format!(
                    "customer {} has unknown preferred_contact {:?}",
                    row.id, row.preferred_contact
                ))
            })?;

        Ok(Customer {
            id: row.id,
            name: row.name,
            birthday: row.birthday,
            email: row.email,
            phone: row.phone,
            address: row.address,
            preferred_contact,
            created_at: row.created_at.unwrap_or_default(),
        })
    }
}

impl CustomerStore for SqliteCustomerStore {
    fn insert(&self, customer: &NewCustomer) -> Result<Customer> {
        let row = Self::to_row(customer);
        let mut conn = self.pool.get()?;

        let stored = conn.immediate_transaction(|conn| {
            diesel::insert_into(customers::table)
                .values(&row)
                .execute(conn)?;

            customers::table
                .order(customers::id.desc())
                .select(CustomerRow::as_select())
                .first(conn)
        })?;

        Self::from_row(stored)
    }

    fn list(&self, order: ListOrder) -> Result<Vec<Customer>> {
        let mut conn = self.pool.get()?;

        let query = customers::table.select(CustomerRow::as_select());
        let rows: Vec<CustomerRow> = match order {
            ListOrder::Oldest => query.order(customers::id.asc()).load(&mut conn)?,
            ListOrder::Newest => query.order(customers::id.desc()).load(&mut conn)?,
        };

        rows.into_iter().map(Self::from_row).collect()
    }

    fn count(&self) -> Result<i64> {
        let mut conn = self.pool.get()?;
        let count = customers::table.count().get_result(&mut conn)?;
        Ok(count)
    }
}
