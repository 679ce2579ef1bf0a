// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Enum-like fields travel as their canonical strings and are parsed in
//! the handlers, so a bad value surfaces as a `validation_error` instead
//! of a deserialization failure. Response DTOs are distinct from domain
//! types and represent the API contract.

use adoptnest_core::Page;
use adoptnest_domain::{AdoptionRequest, Booking, Pet, Surrender};
use serde::{Deserialize, Serialize};

/// API request to create a new pet record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePetRequest {
    /// Display name.
    pub name: String,
    /// Species classification.
    pub pet_type: String,
    /// Breed, if known.
    #[serde(default)]
    pub breed: Option<String>,
    /// Age bracket.
    pub age_group: String,
    /// Shelter or foster location.
    pub location: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Pre-resolved image reference (URL). Required.
    pub image_ref: String,
    /// Whether this pet appears in the featured carousel.
    #[serde(default)]
    pub featured: bool,
    /// Initial status. Defaults to `Available` when absent.
    #[serde(default)]
    pub status: Option<String>,
}

/// API request to update a pet record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePetRequest {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New species classification.
    #[serde(default)]
    pub pet_type: Option<String>,
    /// New breed.
    #[serde(default)]
    pub breed: Option<String>,
    /// New age bracket.
    #[serde(default)]
    pub age_group: Option<String>,
    /// New location.
    #[serde(default)]
    pub location: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New image reference.
    #[serde(default)]
    pub image_ref: Option<String>,
    /// New featured flag.
    #[serde(default)]
    pub featured: Option<bool>,
    /// New status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Listing filter and pagination parameters for pets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPetsRequest {
    /// Restrict to one species.
    #[serde(default)]
    pub pet_type: Option<String>,
    /// Restrict to one age bracket.
    #[serde(default)]
    pub age_group: Option<String>,
    /// Restrict to one location (case-insensitive).
    #[serde(default)]
    pub location: Option<String>,
    /// Restrict to one status. When absent, adopted pets are hidden.
    #[serde(default)]
    pub status: Option<String>,
    /// Restrict to featured (or non-featured) pets.
    #[serde(default)]
    pub featured: Option<bool>,
    /// Case-insensitive substring match on name, breed, or description.
    #[serde(default)]
    pub q: Option<String>,
    /// 1-based page number. Defaults to 1.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size. Defaults to 20, clamped to 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// A pet record as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetResponse {
    /// The canonical identifier.
    pub pet_id: i64,
    /// Display name.
    pub name: String,
    /// Species classification.
    pub pet_type: String,
    /// Breed, if known.
    pub breed: Option<String>,
    /// Age bracket.
    pub age_group: String,
    /// Shelter or foster location.
    pub location: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Image reference (URL).
    pub image_ref: String,
    /// Whether this pet appears in the featured carousel.
    pub featured: bool,
    /// Availability status.
    pub status: String,
}

impl PetResponse {
    /// Builds the response DTO for a persisted pet.
    ///
    /// # Panics
    ///
    /// Never panics in practice: every pet returned by the workflow
    /// engine carries a persisted id.
    #[must_use]
    pub fn from_pet(pet: Pet) -> Self {
        Self {
            pet_id: pet.pet_id.unwrap_or_default(),
            name: pet.name,
            pet_type: pet.pet_type.as_str().to_string(),
            breed: pet.breed,
            age_group: pet.age_group.as_str().to_string(),
            location: pet.location,
            description: pet.description,
            image_ref: pet.image_ref,
            featured: pet.featured,
            status: pet.status.as_str().to_string(),
        }
    }
}

/// One page of the pet listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPetsResponse {
    /// The pets on this page.
    pub items: Vec<PetResponse>,
    /// Total number of matching pets across all pages.
    pub total: u64,
    /// The requested 1-based page number.
    pub page: u32,
    /// Total number of pages (at least 1).
    pub pages: u32,
}

impl ListPetsResponse {
    /// Builds the response DTO from a workflow page.
    #[must_use]
    pub fn from_page(page: Page<Pet>) -> Self {
        Self {
            items: page.items.into_iter().map(PetResponse::from_pet).collect(),
            total: page.total,
            page: page.page,
            pages: page.pages,
        }
    }
}

/// API request to submit an adoption request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAdoptionRequest {
    /// The pet to adopt.
    pub pet_id: i64,
    /// Applicant full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Why the applicant wants to adopt this pet.
    pub reason: String,
    /// Hours per day the pet would be left alone.
    pub hours_alone: u8,
}

/// API request to decide an adoption request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdoptionStatusRequest {
    /// The target status ("Approved", "Rejected", or "Cancelled").
    pub status: String,
}

/// An adoption request as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionResponse {
    /// The canonical identifier.
    pub request_id: i64,
    /// The pet this request targets.
    pub pet_id: i64,
    /// The applicant's user id.
    pub applicant_id: i64,
    /// Applicant full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Why the applicant wants to adopt this pet.
    pub reason: String,
    /// Hours per day the pet would be left alone.
    pub hours_alone: u8,
    /// Lifecycle status.
    pub status: String,
}

impl AdoptionResponse {
    /// Builds the response DTO for a persisted adoption request.
    #[must_use]
    pub fn from_request(request: AdoptionRequest) -> Self {
        Self {
            request_id: request.request_id.unwrap_or_default(),
            pet_id: request.pet_id,
            applicant_id: request.applicant_id,
            name: request.details.name,
            email: request.details.email,
            phone: request.details.phone,
            address: request.details.address,
            city: request.details.city,
            reason: request.details.reason,
            hours_alone: request.details.hours_alone,
            status: request.status.as_str().to_string(),
        }
    }
}

/// API request to create a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    /// Optional reference to a registered pet.
    #[serde(default)]
    pub pet_id: Option<i64>,
    /// The service being booked.
    pub service: String,
    /// Quantity (nights / days for per-unit services). Must be >= 1.
    pub qty: u32,
    /// Service date (ISO 8601).
    pub date: String,
    /// Requested time slot.
    pub time_slot: String,
    /// Optional notes for staff.
    #[serde(default)]
    pub notes: Option<String>,
}

/// API request to update a booking. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    /// New service date (ISO 8601).
    #[serde(default)]
    pub date: Option<String>,
    /// New time slot.
    #[serde(default)]
    pub time_slot: Option<String>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// New quantity.
    #[serde(default)]
    pub qty: Option<u32>,
    /// New service.
    #[serde(default)]
    pub service: Option<String>,
    /// New status (honored only for admin callers).
    #[serde(default)]
    pub status: Option<String>,
}

/// A booking as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    /// The canonical identifier.
    pub booking_id: i64,
    /// The booking owner's user id.
    pub user_id: i64,
    /// Optional reference to a registered pet.
    pub pet_id: Option<i64>,
    /// Denormalized pet name, resolved at creation.
    pub pet_name: Option<String>,
    /// The booked service.
    pub service: String,
    /// Quantity.
    pub qty: u32,
    /// Total cost in integral currency units, computed server-side.
    pub amount: i64,
    /// Service date (ISO 8601).
    pub date: String,
    /// Requested time slot.
    pub time_slot: String,
    /// Optional notes for staff.
    pub notes: Option<String>,
    /// Lifecycle status.
    pub status: String,
}

impl BookingResponse {
    /// Builds the response DTO for a persisted booking.
    #[must_use]
    pub fn from_booking(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id.unwrap_or_default(),
            user_id: booking.user_id,
            pet_id: booking.pet_id,
            pet_name: booking.pet_name,
            service: booking.service.as_str().to_string(),
            qty: booking.qty,
            amount: booking.amount,
            date: booking.date.to_string(),
            time_slot: booking.time_slot,
            notes: booking.notes,
            status: booking.status.as_str().to_string(),
        }
    }
}

/// API request to submit a surrender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitSurrenderRequest {
    /// Free-text description of the animal.
    pub pet_description: String,
    /// Why the owner is surrendering the animal.
    pub reason: String,
}

/// API request to decide a surrender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSurrenderStatusRequest {
    /// The target status ("Received" or "Rejected").
    pub status: String,
}

/// A surrender as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurrenderResponse {
    /// The canonical identifier.
    pub surrender_id: i64,
    /// The submitting user's id.
    pub user_id: i64,
    /// Free-text description of the animal.
    pub pet_description: String,
    /// Why the owner is surrendering the animal.
    pub reason: String,
    /// Lifecycle status.
    pub status: String,
}

impl SurrenderResponse {
    /// Builds the response DTO for a persisted surrender.
    #[must_use]
    pub fn from_surrender(surrender: Surrender) -> Self {
        Self {
            surrender_id: surrender.surrender_id.unwrap_or_default(),
            user_id: surrender.user_id,
            pet_description: surrender.pet_description,
            reason: surrender.reason,
            status: surrender.status.as_str().to_string(),
        }
    }
}

/// Confirmation message returned by deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// A success message.
    pub message: String,
}
