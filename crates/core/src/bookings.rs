// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking engine.
//!
//! The monetary amount of a booking is always recomputed server-side
//! from the service catalog and quantity; it is never trusted from
//! caller input. Owner edits force the booking back into
//! `Change Requested` so an admin has to re-confirm.

use crate::access;
use crate::error::CoreError;
use crate::store::{BookingFilter, Store};
use adoptnest_domain::{
    Actor, Booking, BookingStatus, Pet, ServiceKind, compute_amount, validate_quantity,
};
use time::Date;
use tracing::info;

/// Data for creating a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// Optional reference to a registered pet.
    pub pet_id: Option<i64>,
    /// The service being booked.
    pub service: ServiceKind,
    /// Quantity (nights / days for per-unit services). Must be >= 1.
    pub qty: u32,
    /// Service date.
    pub date: Date,
    /// Requested time slot.
    pub time_slot: String,
    /// Optional notes for staff.
    pub notes: Option<String>,
}

/// A merge-patch for a booking. Absent fields are left unchanged.
///
/// `status` is honored only for admin callers; a non-admin edit always
/// lands in `Change Requested` regardless of what was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingChanges {
    /// New service date.
    pub date: Option<Date>,
    /// New time slot.
    pub time_slot: Option<String>,
    /// New notes.
    pub notes: Option<String>,
    /// New quantity. Triggers repricing.
    pub qty: Option<u32>,
    /// New service. Triggers repricing.
    pub service: Option<ServiceKind>,
    /// New status (admin only).
    pub status: Option<BookingStatus>,
}

/// Creates a booking owned by the actor.
///
/// The amount is computed from the service catalog and quantity. When a
/// pet reference is given, the pet's name is denormalized onto the
/// booking for display; the reference must resolve.
///
/// # Errors
///
/// Returns `InvalidQuantity` for a zero quantity, `PetNotFound` if the
/// referenced pet does not exist, or a storage error.
pub fn create<S: Store>(
    store: &mut S,
    actor: &Actor,
    new_booking: NewBooking,
) -> Result<Booking, CoreError> {
    validate_quantity(new_booking.qty)?;

    let pet_name: Option<String> = match new_booking.pet_id {
        Some(pet_id) => {
            let pet: Pet = store
                .find_pet(pet_id)?
                .ok_or(CoreError::PetNotFound { pet_id })?;
            Some(pet.name)
        }
        None => None,
    };

    let amount: i64 = compute_amount(new_booking.service, new_booking.qty);
    let booking: Booking = Booking::new(
        actor.id,
        new_booking.pet_id,
        pet_name,
        new_booking.service,
        new_booking.qty,
        amount,
        new_booking.date,
        new_booking.time_slot,
        new_booking.notes,
    );

    let created: Booking = store.insert_booking(&booking)?;
    info!(
        booking_id = created.booking_id,
        user_id = created.user_id,
        service = created.service.as_str(),
        amount = created.amount,
        "Created booking"
    );
    Ok(created)
}

/// Lists bookings visible to the actor.
///
/// Users are narrowed to their own bookings; admins may filter by any
/// owner or see all.
///
/// # Errors
///
/// Returns a storage error if the backend fails.
pub fn list<S: Store>(
    store: &mut S,
    actor: &Actor,
    mut filter: BookingFilter,
) -> Result<Vec<Booking>, CoreError> {
    filter.user_id = access::scoped_owner(actor, filter.user_id);
    Ok(store.list_bookings(&filter)?)
}

/// Retrieves a booking by id, scoped to the actor.
///
/// # Errors
///
/// Returns `NotFound` if the booking is absent or out of scope.
pub fn get<S: Store>(store: &mut S, actor: &Actor, booking_id: i64) -> Result<Booking, CoreError> {
    store
        .find_booking(booking_id)?
        .filter(|booking| access::can_view(actor, booking.user_id))
        .ok_or(CoreError::NotFound {
            resource: "Booking",
            id: booking_id,
        })
}

/// Applies a merge-patch to a booking.
///
/// A service or quantity change reprices the booking from the catalog.
/// After the patch, an admin's explicit status (if any) is honored;
/// every non-admin edit forces `Change Requested`.
///
/// # Errors
///
/// Returns `NotFound` if the booking does not exist, `Forbidden` if the
/// actor neither owns it nor is an admin, `InvalidQuantity` for a zero
/// quantity, or a storage error.
pub fn update<S: Store>(
    store: &mut S,
    actor: &Actor,
    booking_id: i64,
    changes: BookingChanges,
) -> Result<Booking, CoreError> {
    let mut booking: Booking = store
        .find_booking(booking_id)?
        .ok_or(CoreError::NotFound {
            resource: "Booking",
            id: booking_id,
        })?;
    access::authorize_mutation(actor, booking.user_id, "update booking")?;

    if let Some(date) = changes.date {
        booking.date = date;
    }
    if let Some(time_slot) = changes.time_slot {
        booking.time_slot = time_slot;
    }
    if let Some(notes) = changes.notes {
        booking.notes = Some(notes);
    }

    let mut reprice: bool = false;
    if let Some(qty) = changes.qty {
        validate_quantity(qty)?;
        booking.qty = qty;
        reprice = true;
    }
    if let Some(service) = changes.service {
        booking.service = service;
        reprice = true;
    }
    if reprice {
        booking.amount = compute_amount(booking.service, booking.qty);
    }

    booking.status = if actor.is_admin() {
        changes.status.unwrap_or(booking.status)
    } else {
        BookingStatus::ChangeRequested
    };

    let updated: Booking = store.update_booking(&booking)?;
    info!(
        booking_id,
        status = updated.status.as_str(),
        amount = updated.amount,
        "Updated booking"
    );
    Ok(updated)
}

/// Cancels a booking.
///
/// Cancellation is tolerant: cancelling an already-cancelled booking
/// succeeds and leaves it cancelled.
///
/// # Errors
///
/// Returns `NotFound` if the booking does not exist, `Forbidden` if the
/// actor neither owns it nor is an admin, or a storage error.
pub fn cancel<S: Store>(
    store: &mut S,
    actor: &Actor,
    booking_id: i64,
) -> Result<Booking, CoreError> {
    let mut booking: Booking = store
        .find_booking(booking_id)?
        .ok_or(CoreError::NotFound {
            resource: "Booking",
            id: booking_id,
        })?;
    access::authorize_mutation(actor, booking.user_id, "cancel booking")?;

    booking.status = BookingStatus::Cancelled;
    let cancelled: Booking = store.update_booking(&booking)?;
    info!(booking_id, "Cancelled booking");
    Ok(cancelled)
}
