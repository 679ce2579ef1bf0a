// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The generic persistence port shared by all workflows.
//!
//! Workflows are written against this trait; concrete backends (the
//! Diesel/SQLite store, the in-memory test store) implement it. All
//! filters are plain data so backends can translate them into their own
//! query language.

use crate::paging::{Page, PageRequest};
use adoptnest_domain::{
    AdoptionRequest, AdoptionStatus, Booking, BookingStatus, Pet, PetStatus, PetType, Surrender,
    SurrenderStatus,
};
use thiserror::Error;

/// Errors surfaced by a `Store` backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend failed (connection, query, corrupt row).
    #[error("storage backend error: {0}")]
    Backend(String),
    /// The referenced record does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        /// The type of record that was not found.
        resource: &'static str,
        /// The requested identifier.
        id: i64,
    },
    /// A guarded update found the record in an unexpected state.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Filter predicates for pet listing.
///
/// `statuses: None` means the caller specified no status filter; the pet
/// registry substitutes its public default in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    /// Restrict to one species.
    pub pet_type: Option<PetType>,
    /// Restrict to one age bracket.
    pub age_group: Option<adoptnest_domain::AgeGroup>,
    /// Restrict to one location (case-insensitive exact match).
    pub location: Option<String>,
    /// Restrict to any of these statuses.
    pub statuses: Option<Vec<PetStatus>>,
    /// Restrict to featured (or explicitly non-featured) pets.
    pub featured: Option<bool>,
    /// Case-insensitive substring match on name, breed, or description.
    pub text_query: Option<String>,
}

/// Filter predicates for adoption request listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdoptionFilter {
    /// Restrict to one applicant (the record owner field).
    pub applicant_id: Option<i64>,
    /// Restrict to requests targeting one pet.
    pub pet_id: Option<i64>,
    /// Restrict to one status.
    pub status: Option<AdoptionStatus>,
}

/// Filter predicates for booking listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Restrict to one owner.
    pub user_id: Option<i64>,
    /// Restrict to one status.
    pub status: Option<BookingStatus>,
}

/// Filter predicates for surrender listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurrenderFilter {
    /// Restrict to one submitter.
    pub user_id: Option<i64>,
    /// Restrict to one status.
    pub status: Option<SurrenderStatus>,
}

/// The persistence port.
///
/// Every method is a single logical operation against the backend.
/// Multi-record atomicity (the adoption approval cascade) is expressed
/// through [`Store::transaction`].
pub trait Store {
    /// Inserts a pet and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_pet(&mut self, pet: &Pet) -> Result<Pet, StoreError>;

    /// Finds a pet by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_pet(&mut self, pet_id: i64) -> Result<Option<Pet>, StoreError>;

    /// Lists pets matching the filter, paginated.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_pets(&mut self, filter: &PetFilter, page: &PageRequest) -> Result<Page<Pet>, StoreError>;

    /// Replaces a persisted pet document.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the pet does not exist.
    fn update_pet(&mut self, pet: &Pet) -> Result<Pet, StoreError>;

    /// Deletes a pet by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the pet does not exist.
    fn delete_pet(&mut self, pet_id: i64) -> Result<(), StoreError>;

    /// Transitions a pet's status with an optimistic row guard.
    ///
    /// The update succeeds only if the pet's current status is in
    /// `allowed_from`; otherwise `Conflict` is returned and nothing is
    /// written. This is the guard that prevents two concurrent adoption
    /// approvals from both succeeding for the same pet.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the pet does not exist and `Conflict` if the
    /// guard fails.
    fn transition_pet_status(
        &mut self,
        pet_id: i64,
        allowed_from: &[PetStatus],
        to: PetStatus,
    ) -> Result<Pet, StoreError>;

    /// Inserts an adoption request and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_adoption(&mut self, request: &AdoptionRequest) -> Result<AdoptionRequest, StoreError>;

    /// Finds an adoption request by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_adoption(&mut self, request_id: i64) -> Result<Option<AdoptionRequest>, StoreError>;

    /// Lists adoption requests matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_adoptions(&mut self, filter: &AdoptionFilter)
    -> Result<Vec<AdoptionRequest>, StoreError>;

    /// Replaces a persisted adoption request.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the request does not exist.
    fn update_adoption(&mut self, request: &AdoptionRequest) -> Result<AdoptionRequest, StoreError>;

    /// Inserts a booking and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_booking(&mut self, booking: &Booking) -> Result<Booking, StoreError>;

    /// Finds a booking by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, StoreError>;

    /// Lists bookings matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_bookings(&mut self, filter: &BookingFilter) -> Result<Vec<Booking>, StoreError>;

    /// Replaces a persisted booking.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the booking does not exist.
    fn update_booking(&mut self, booking: &Booking) -> Result<Booking, StoreError>;

    /// Inserts a surrender and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn insert_surrender(&mut self, surrender: &Surrender) -> Result<Surrender, StoreError>;

    /// Finds a surrender by id. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_surrender(&mut self, surrender_id: i64) -> Result<Option<Surrender>, StoreError>;

    /// Lists surrenders matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn list_surrenders(&mut self, filter: &SurrenderFilter) -> Result<Vec<Surrender>, StoreError>;

    /// Replaces a persisted surrender.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the surrender does not exist.
    fn update_surrender(&mut self, surrender: &Surrender) -> Result<Surrender, StoreError>;

    /// Runs `f` atomically: either every write inside commits, or none
    /// do. Transactions do not nest.
    ///
    /// # Errors
    ///
    /// Propagates the closure's error after rolling back.
    fn transaction<T, F>(&mut self, f: F) -> Result<T, StoreError>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> Result<T, StoreError>;
}
