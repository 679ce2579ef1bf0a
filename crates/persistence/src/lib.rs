// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence layer for the AdoptNest adoption service.
//!
//! This crate implements the workflow engine's `Store` port on top of
//! Diesel and `SQLite`. In-memory databases back unit and integration
//! tests; a file-based database (with WAL enabled) backs the server.
//!
//! Each in-memory database gets a unique shared-cache name from an
//! atomic counter, so tests are isolated without time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

use adoptnest_core::{
    AdoptionFilter, BookingFilter, Page, PageRequest, PetFilter, Store, StoreError,
    SurrenderFilter,
};
use adoptnest_domain::{AdoptionRequest, Booking, Pet, PetStatus, Surrender};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The Diesel/SQLite implementation of the workflow engine's `Store`
/// port.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store backed by an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("adoptnest_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }
}

impl Store for SqliteStore {
    fn insert_pet(&mut self, pet: &Pet) -> Result<Pet, StoreError> {
        Ok(mutations::pets::insert_pet(&mut self.conn, pet)?)
    }

    fn find_pet(&mut self, pet_id: i64) -> Result<Option<Pet>, StoreError> {
        Ok(queries::pets::get_pet(&mut self.conn, pet_id)?)
    }

    fn list_pets(
        &mut self,
        filter: &PetFilter,
        page: &PageRequest,
    ) -> Result<Page<Pet>, StoreError> {
        Ok(queries::pets::list_pets(&mut self.conn, filter, page)?)
    }

    fn update_pet(&mut self, pet: &Pet) -> Result<Pet, StoreError> {
        Ok(mutations::pets::update_pet(&mut self.conn, pet)?)
    }

    fn delete_pet(&mut self, pet_id: i64) -> Result<(), StoreError> {
        Ok(mutations::pets::delete_pet(&mut self.conn, pet_id)?)
    }

    fn transition_pet_status(
        &mut self,
        pet_id: i64,
        allowed_from: &[PetStatus],
        to: PetStatus,
    ) -> Result<Pet, StoreError> {
        Ok(mutations::pets::transition_pet_status(
            &mut self.conn,
            pet_id,
            allowed_from,
            to,
        )?)
    }

    fn insert_adoption(&mut self, request: &AdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        Ok(mutations::adoptions::insert_adoption(&mut self.conn, request)?)
    }

    fn find_adoption(&mut self, request_id: i64) -> Result<Option<AdoptionRequest>, StoreError> {
        Ok(queries::adoptions::get_adoption(&mut self.conn, request_id)?)
    }

    fn list_adoptions(
        &mut self,
        filter: &AdoptionFilter,
    ) -> Result<Vec<AdoptionRequest>, StoreError> {
        Ok(queries::adoptions::list_adoptions(&mut self.conn, filter)?)
    }

    fn update_adoption(&mut self, request: &AdoptionRequest) -> Result<AdoptionRequest, StoreError> {
        Ok(mutations::adoptions::update_adoption(&mut self.conn, request)?)
    }

    fn insert_booking(&mut self, booking: &Booking) -> Result<Booking, StoreError> {
        Ok(mutations::bookings::insert_booking(&mut self.conn, booking)?)
    }

    fn find_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, StoreError> {
        Ok(queries::bookings::get_booking(&mut self.conn, booking_id)?)
    }

    fn list_bookings(&mut self, filter: &BookingFilter) -> Result<Vec<Booking>, StoreError> {
        Ok(queries::bookings::list_bookings(&mut self.conn, filter)?)
    }

    fn update_booking(&mut self, booking: &Booking) -> Result<Booking, StoreError> {
        Ok(mutations::bookings::update_booking(&mut self.conn, booking)?)
    }

    fn insert_surrender(&mut self, surrender: &Surrender) -> Result<Surrender, StoreError> {
        Ok(mutations::surrenders::insert_surrender(&mut self.conn, surrender)?)
    }

    fn find_surrender(&mut self, surrender_id: i64) -> Result<Option<Surrender>, StoreError> {
        Ok(queries::surrenders::get_surrender(&mut self.conn, surrender_id)?)
    }

    fn list_surrenders(&mut self, filter: &SurrenderFilter) -> Result<Vec<Surrender>, StoreError> {
        Ok(queries::surrenders::list_surrenders(&mut self.conn, filter)?)
    }

    fn update_surrender(&mut self, surrender: &Surrender) -> Result<Surrender, StoreError> {
        Ok(mutations::surrenders::update_surrender(&mut self.conn, surrender)?)
    }

    // The closure receives the whole store, not a bare connection, so it
    // can call the port methods. Transactions do not nest.
    fn transaction<T, F>(&mut self, f: F) -> Result<T, StoreError>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T, StoreError>,
    {
        self.conn
            .batch_execute("BEGIN IMMEDIATE")
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        match f(self) {
            Ok(value) => {
                self.conn
                    .batch_execute("COMMIT")
                    .map_err(|e| StoreError::Backend(e.to_string()))?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_error) = self.conn.batch_execute("ROLLBACK") {
                    warn!(error = %rollback_error, "Transaction rollback failed");
                }
                Err(e)
            }
        }
    }
}
