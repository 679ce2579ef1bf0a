// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are generic over the workflow engine's `Store` port, so the
//! same code path serves the SQLite store in production and the
//! in-memory store in tests. Each handler authorizes, parses wire
//! strings into domain types, delegates to the workflow engine, and
//! translates errors into the API contract.

use adoptnest_core::{
    AdoptionFilter, AdoptionSubmission, BookingChanges, BookingFilter, ImageStore, NewBooking,
    NewPet, Page, PageRequest, PetFilter, PetPatch, Store, SurrenderFilter, SurrenderSubmission,
    adoptions, bookings, pets, surrenders,
};
use adoptnest_domain::{
    Actor, AdoptionStatus, AgeGroup, ApplicationDetails, BookingStatus, Pet, PetStatus, PetType,
    ServiceKind, SurrenderStatus, parse_date,
};

use crate::auth::AuthorizationService;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AdoptionResponse, BookingResponse, CreateBookingRequest, CreatePetRequest, DeletedResponse,
    ListPetsRequest, ListPetsResponse, PetResponse, SubmitAdoptionRequest, SubmitSurrenderRequest,
    SurrenderResponse, UpdateAdoptionStatusRequest, UpdateBookingRequest, UpdatePetRequest,
    UpdateSurrenderStatusRequest,
};

/// Creates a pet record. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, a field fails
/// validation, or the store fails.
pub fn create_pet<S: Store>(
    store: &mut S,
    actor: &Actor,
    request: CreatePetRequest,
) -> Result<PetResponse, ApiError> {
    AuthorizationService::authorize_create_pet(actor)?;

    let pet_type: PetType = PetType::parse(&request.pet_type).map_err(translate_domain_error)?;
    let age_group: AgeGroup =
        AgeGroup::parse(&request.age_group).map_err(translate_domain_error)?;
    let status: Option<PetStatus> = request
        .status
        .as_deref()
        .map(PetStatus::parse)
        .transpose()
        .map_err(translate_domain_error)?;

    let new_pet: NewPet = NewPet {
        name: request.name,
        pet_type,
        breed: request.breed,
        age_group,
        location: request.location,
        description: request.description,
        image_ref: request.image_ref,
        featured: request.featured,
        status,
    };

    let pet: Pet = pets::create(store, actor.id, new_pet).map_err(translate_core_error)?;
    Ok(PetResponse::from_pet(pet))
}

/// Retrieves a pet by id. Open to all authenticated actors.
///
/// # Errors
///
/// Returns an error if the pet does not exist or the store fails.
pub fn get_pet<S: Store>(store: &mut S, pet_id: i64) -> Result<PetResponse, ApiError> {
    let pet: Pet = pets::get(store, pet_id).map_err(translate_core_error)?;
    Ok(PetResponse::from_pet(pet))
}

/// Lists pets matching the filter, paginated.
///
/// Without an explicit status filter, adopted pets are hidden. A page
/// past the end returns an empty page, never an error.
///
/// # Errors
///
/// Returns an error if a filter value fails to parse or the store
/// fails.
pub fn list_pets<S: Store>(
    store: &mut S,
    request: ListPetsRequest,
) -> Result<ListPetsResponse, ApiError> {
    let pet_type: Option<PetType> = request
        .pet_type
        .as_deref()
        .map(PetType::parse)
        .transpose()
        .map_err(translate_domain_error)?;
    let age_group: Option<AgeGroup> = request
        .age_group
        .as_deref()
        .map(AgeGroup::parse)
        .transpose()
        .map_err(translate_domain_error)?;
    let statuses: Option<Vec<PetStatus>> = request
        .status
        .as_deref()
        .map(PetStatus::parse)
        .transpose()
        .map_err(translate_domain_error)?
        .map(|status| vec![status]);

    let filter: PetFilter = PetFilter {
        pet_type,
        age_group,
        location: request.location,
        statuses,
        featured: request.featured,
        text_query: request.q,
    };
    let page: PageRequest = PageRequest::new(
        request.page.unwrap_or(1),
        request.limit.unwrap_or(adoptnest_core::DEFAULT_LIMIT),
    );

    let result: Page<Pet> = pets::list(store, filter, page).map_err(translate_core_error)?;
    Ok(ListPetsResponse::from_page(result))
}

/// Applies a merge-patch to a pet record. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the pet does not
/// exist, a field fails validation, or the store fails.
pub fn update_pet<S: Store>(
    store: &mut S,
    actor: &Actor,
    pet_id: i64,
    request: UpdatePetRequest,
) -> Result<PetResponse, ApiError> {
    AuthorizationService::authorize_update_pet(actor)?;

    let patch: PetPatch = PetPatch {
        name: request.name,
        pet_type: request
            .pet_type
            .as_deref()
            .map(PetType::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        breed: request.breed,
        age_group: request
            .age_group
            .as_deref()
            .map(AgeGroup::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        location: request.location,
        description: request.description,
        image_ref: request.image_ref,
        featured: request.featured,
        status: request
            .status
            .as_deref()
            .map(PetStatus::parse)
            .transpose()
            .map_err(translate_domain_error)?,
    };

    let pet: Pet = pets::update(store, pet_id, patch).map_err(translate_core_error)?;
    Ok(PetResponse::from_pet(pet))
}

/// Deletes a pet record. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the pet does not
/// exist, or the store fails.
pub fn delete_pet<S: Store>(
    store: &mut S,
    images: &dyn ImageStore,
    actor: &Actor,
    pet_id: i64,
) -> Result<DeletedResponse, ApiError> {
    AuthorizationService::authorize_delete_pet(actor)?;
    pets::delete(store, images, pet_id).map_err(translate_core_error)?;
    Ok(DeletedResponse {
        message: format!("Pet {pet_id} deleted"),
    })
}

/// Submits an adoption request owned by the actor.
///
/// # Errors
///
/// Returns an error if the pet does not exist, a field fails
/// validation, or the store fails.
pub fn submit_adoption<S: Store>(
    store: &mut S,
    actor: &Actor,
    request: SubmitAdoptionRequest,
) -> Result<AdoptionResponse, ApiError> {
    let submission: AdoptionSubmission = AdoptionSubmission {
        pet_id: request.pet_id,
        details: ApplicationDetails {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            city: request.city,
            reason: request.reason,
            hours_alone: request.hours_alone,
        },
    };
    let created = adoptions::submit(store, actor, submission).map_err(translate_core_error)?;
    Ok(AdoptionResponse::from_request(created))
}

/// Lists adoption requests visible to the actor, optionally filtered by
/// status.
///
/// # Errors
///
/// Returns an error if the status filter fails to parse or the store
/// fails.
pub fn list_adoptions<S: Store>(
    store: &mut S,
    actor: &Actor,
    status: Option<&str>,
) -> Result<Vec<AdoptionResponse>, ApiError> {
    let filter: AdoptionFilter = AdoptionFilter {
        status: status
            .map(AdoptionStatus::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        ..AdoptionFilter::default()
    };
    let requests = adoptions::list(store, actor, filter).map_err(translate_core_error)?;
    Ok(requests
        .into_iter()
        .map(AdoptionResponse::from_request)
        .collect())
}

/// Retrieves an adoption request by id, scoped to the actor.
///
/// # Errors
///
/// Returns an error if the request is absent or out of scope.
pub fn get_adoption<S: Store>(
    store: &mut S,
    actor: &Actor,
    request_id: i64,
) -> Result<AdoptionResponse, ApiError> {
    let request = adoptions::get(store, actor, request_id).map_err(translate_core_error)?;
    Ok(AdoptionResponse::from_request(request))
}

/// Decides an adoption request. Admin only.
///
/// Approval cascades the pet to `Adopted` atomically; a concurrent
/// approval for the same pet surfaces as a conflict.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the request is absent
/// or already terminal, the approval loses the pet guard, or the store
/// fails.
pub fn update_adoption_status<S: Store>(
    store: &mut S,
    actor: &Actor,
    request_id: i64,
    request: UpdateAdoptionStatusRequest,
) -> Result<AdoptionResponse, ApiError> {
    AuthorizationService::authorize_update_adoption_status(actor)?;
    let UpdateAdoptionStatusRequest { status } = request;
    let status: AdoptionStatus = AdoptionStatus::parse(&status).map_err(translate_domain_error)?;
    let updated =
        adoptions::update_status(store, request_id, status).map_err(translate_core_error)?;
    Ok(AdoptionResponse::from_request(updated))
}

/// Creates a booking owned by the actor.
///
/// The amount is computed server-side from the service catalog; caller
/// input never sets it.
///
/// # Errors
///
/// Returns an error if a field fails validation, a referenced pet does
/// not exist, or the store fails.
pub fn create_booking<S: Store>(
    store: &mut S,
    actor: &Actor,
    request: CreateBookingRequest,
) -> Result<BookingResponse, ApiError> {
    let new_booking: NewBooking = NewBooking {
        pet_id: request.pet_id,
        service: ServiceKind::parse(&request.service).map_err(translate_domain_error)?,
        qty: request.qty,
        date: parse_date(&request.date).map_err(translate_domain_error)?,
        time_slot: request.time_slot,
        notes: request.notes,
    };
    let created = bookings::create(store, actor, new_booking).map_err(translate_core_error)?;
    Ok(BookingResponse::from_booking(created))
}

/// Lists bookings visible to the actor, optionally filtered by status.
///
/// # Errors
///
/// Returns an error if the status filter fails to parse or the store
/// fails.
pub fn list_bookings<S: Store>(
    store: &mut S,
    actor: &Actor,
    status: Option<&str>,
) -> Result<Vec<BookingResponse>, ApiError> {
    let filter: BookingFilter = BookingFilter {
        status: status
            .map(BookingStatus::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        ..BookingFilter::default()
    };
    let results = bookings::list(store, actor, filter).map_err(translate_core_error)?;
    Ok(results
        .into_iter()
        .map(BookingResponse::from_booking)
        .collect())
}

/// Retrieves a booking by id, scoped to the actor.
///
/// # Errors
///
/// Returns an error if the booking is absent or out of scope.
pub fn get_booking<S: Store>(
    store: &mut S,
    actor: &Actor,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking = bookings::get(store, actor, booking_id).map_err(translate_core_error)?;
    Ok(BookingResponse::from_booking(booking))
}

/// Applies a merge-patch to a booking.
///
/// Owner edits force `Change Requested`; an admin's explicit status is
/// honored.
///
/// # Errors
///
/// Returns an error if the booking is absent, the actor is neither the
/// owner nor an admin, a field fails validation, or the store fails.
pub fn update_booking<S: Store>(
    store: &mut S,
    actor: &Actor,
    booking_id: i64,
    request: UpdateBookingRequest,
) -> Result<BookingResponse, ApiError> {
    let changes: BookingChanges = BookingChanges {
        date: request
            .date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(translate_domain_error)?,
        time_slot: request.time_slot,
        notes: request.notes,
        qty: request.qty,
        service: request
            .service
            .as_deref()
            .map(ServiceKind::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        status: request
            .status
            .as_deref()
            .map(BookingStatus::parse)
            .transpose()
            .map_err(translate_domain_error)?,
    };
    let updated =
        bookings::update(store, actor, booking_id, changes).map_err(translate_core_error)?;
    Ok(BookingResponse::from_booking(updated))
}

/// Cancels a booking. Tolerant of repeat cancellation.
///
/// # Errors
///
/// Returns an error if the booking is absent, the actor is neither the
/// owner nor an admin, or the store fails.
pub fn cancel_booking<S: Store>(
    store: &mut S,
    actor: &Actor,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let cancelled = bookings::cancel(store, actor, booking_id).map_err(translate_core_error)?;
    Ok(BookingResponse::from_booking(cancelled))
}

/// Submits a surrender owned by the actor.
///
/// # Errors
///
/// Returns an error if a field fails validation or the store fails.
pub fn submit_surrender<S: Store>(
    store: &mut S,
    actor: &Actor,
    request: SubmitSurrenderRequest,
) -> Result<SurrenderResponse, ApiError> {
    let submission: SurrenderSubmission = SurrenderSubmission {
        pet_description: request.pet_description,
        reason: request.reason,
    };
    let created = surrenders::submit(store, actor, submission).map_err(translate_core_error)?;
    Ok(SurrenderResponse::from_surrender(created))
}

/// Lists surrenders visible to the actor, optionally filtered by
/// status.
///
/// # Errors
///
/// Returns an error if the status filter fails to parse or the store
/// fails.
pub fn list_surrenders<S: Store>(
    store: &mut S,
    actor: &Actor,
    status: Option<&str>,
) -> Result<Vec<SurrenderResponse>, ApiError> {
    let filter: SurrenderFilter = SurrenderFilter {
        status: status
            .map(SurrenderStatus::parse)
            .transpose()
            .map_err(translate_domain_error)?,
        ..SurrenderFilter::default()
    };
    let results = surrenders::list(store, actor, filter).map_err(translate_core_error)?;
    Ok(results
        .into_iter()
        .map(SurrenderResponse::from_surrender)
        .collect())
}

/// Retrieves a surrender by id, scoped to the actor.
///
/// # Errors
///
/// Returns an error if the surrender is absent or out of scope.
pub fn get_surrender<S: Store>(
    store: &mut S,
    actor: &Actor,
    surrender_id: i64,
) -> Result<SurrenderResponse, ApiError> {
    let surrender = surrenders::get(store, actor, surrender_id).map_err(translate_core_error)?;
    Ok(SurrenderResponse::from_surrender(surrender))
}

/// Decides a surrender. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, the surrender is
/// absent or already terminal, or the store fails.
pub fn update_surrender_status<S: Store>(
    store: &mut S,
    actor: &Actor,
    surrender_id: i64,
    request: UpdateSurrenderStatusRequest,
) -> Result<SurrenderResponse, ApiError> {
    AuthorizationService::authorize_update_surrender_status(actor)?;
    let UpdateSurrenderStatusRequest { status } = request;
    let status: SurrenderStatus =
        SurrenderStatus::parse(&status).map_err(translate_domain_error)?;
    let updated =
        surrenders::update_status(store, surrender_id, status).map_err(translate_core_error)?;
    Ok(SurrenderResponse::from_surrender(updated))
}
