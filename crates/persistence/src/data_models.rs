// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs mapping table rows to domain types.
//!
//! Enum-like columns are stored as their canonical string form and
//! parsed back through the domain parsers; a value that fails to parse
//! surfaces as a `CorruptRow` error rather than a panic.

use diesel::prelude::*;

use crate::diesel_schema::{adoption_requests, bookings, pets, surrenders};
use crate::error::PersistenceError;
use adoptnest_domain::{
    AdoptionRequest, AdoptionStatus, AgeGroup, ApplicationDetails, Booking, BookingStatus, Pet,
    PetStatus, PetType, ServiceKind, Surrender, SurrenderStatus, parse_date,
};

/// Diesel Queryable struct for pet rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = pets)]
pub struct PetRow {
    pub pet_id: i64,
    pub name: String,
    pub pet_type: String,
    pub breed: Option<String>,
    pub age_group: String,
    pub location: String,
    pub description: Option<String>,
    pub image_ref: String,
    pub featured: i32,
    pub status: String,
    pub created_by: i64,
    pub created_at: String,
}

impl PetRow {
    /// Maps this row to the domain type.
    ///
    /// # Errors
    ///
    /// Returns `CorruptRow` if a stored enum value does not parse.
    pub fn into_domain(self) -> Result<Pet, PersistenceError> {
        Ok(Pet::with_id(
            self.pet_id,
            self.name,
            PetType::parse(&self.pet_type)?,
            self.breed,
            AgeGroup::parse(&self.age_group)?,
            self.location,
            self.description,
            self.image_ref,
            self.featured != 0,
            PetStatus::parse(&self.status)?,
            self.created_by,
        ))
    }
}

/// Diesel Queryable struct for adoption request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = adoption_requests)]
pub struct AdoptionRequestRow {
    pub request_id: i64,
    pub pet_id: i64,
    pub applicant_id: i64,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub reason: String,
    pub hours_alone: i32,
    pub status: String,
    pub created_at: String,
}

impl AdoptionRequestRow {
    /// Maps this row to the domain type.
    ///
    /// # Errors
    ///
    /// Returns `CorruptRow` if a stored value does not map back to the
    /// domain type.
    pub fn into_domain(self) -> Result<AdoptionRequest, PersistenceError> {
        let hours_alone: u8 = u8::try_from(self.hours_alone).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "hours_alone out of range: {}",
                self.hours_alone
            ))
        })?;
        Ok(AdoptionRequest::with_id(
            self.request_id,
            self.pet_id,
            self.applicant_id,
            ApplicationDetails {
                name: self.applicant_name,
                email: self.email,
                phone: self.phone,
                address: self.address,
                city: self.city,
                reason: self.reason,
                hours_alone,
            },
            AdoptionStatus::parse(&self.status)?,
        ))
    }
}

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
pub struct BookingRow {
    pub booking_id: i64,
    pub user_id: i64,
    pub pet_id: Option<i64>,
    pub pet_name: Option<String>,
    pub service: String,
    pub qty: i32,
    pub amount: i64,
    pub date: String,
    pub time_slot: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl BookingRow {
    /// Maps this row to the domain type.
    ///
    /// # Errors
    ///
    /// Returns `CorruptRow` if a stored value does not map back to the
    /// domain type.
    pub fn into_domain(self) -> Result<Booking, PersistenceError> {
        let qty: u32 = u32::try_from(self.qty).map_err(|_| {
            PersistenceError::CorruptRow(format!("qty out of range: {}", self.qty))
        })?;
        Ok(Booking {
            booking_id: Some(self.booking_id),
            user_id: self.user_id,
            pet_id: self.pet_id,
            pet_name: self.pet_name,
            service: ServiceKind::parse(&self.service)?,
            qty,
            amount: self.amount,
            date: parse_date(&self.date)?,
            time_slot: self.time_slot,
            notes: self.notes,
            status: BookingStatus::parse(&self.status)?,
        })
    }
}

/// Diesel Queryable struct for surrender rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = surrenders)]
pub struct SurrenderRow {
    pub surrender_id: i64,
    pub user_id: i64,
    pub pet_description: String,
    pub reason: String,
    pub status: String,
    pub created_at: String,
}

impl SurrenderRow {
    /// Maps this row to the domain type.
    ///
    /// # Errors
    ///
    /// Returns `CorruptRow` if the stored status does not parse.
    pub fn into_domain(self) -> Result<Surrender, PersistenceError> {
        Ok(Surrender::with_id(
            self.surrender_id,
            self.user_id,
            self.pet_description,
            self.reason,
            SurrenderStatus::parse(&self.status)?,
        ))
    }
}

/// Formats a date for storage in its ISO 8601 text form.
///
/// # Errors
///
/// Returns `SerializationError` if formatting fails.
pub fn format_date(date: time::Date) -> Result<String, PersistenceError> {
    date.format(&time::format_description::well_known::Iso8601::DATE)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}
