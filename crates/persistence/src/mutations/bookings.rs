// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.

use diesel::prelude::*;
use tracing::info;

use crate::data_models::format_date;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use adoptnest_domain::Booking;

/// Inserts a booking and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &Booking,
) -> Result<Booking, PersistenceError> {
    let date: String = format_date(booking.date)?;
    let qty: i32 = i32::try_from(booking.qty)
        .map_err(|_| PersistenceError::QueryFailed(format!("qty out of range: {}", booking.qty)))?;

    diesel::insert_into(bookings::table)
        .values((
            bookings::user_id.eq(booking.user_id),
            bookings::pet_id.eq(booking.pet_id),
            bookings::pet_name.eq(&booking.pet_name),
            bookings::service.eq(booking.service.as_str()),
            bookings::qty.eq(qty),
            bookings::amount.eq(booking.amount),
            bookings::date.eq(&date),
            bookings::time_slot.eq(&booking.time_slot),
            bookings::notes.eq(&booking.notes),
            bookings::status.eq(booking.status.as_str()),
        ))
        .execute(conn)?;

    let booking_id: i64 = get_last_insert_rowid(conn)?;
    info!(booking_id, "Booking created");

    let mut created: Booking = booking.clone();
    created.booking_id = Some(booking_id);
    Ok(created)
}

/// Replaces a persisted booking row.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the booking's id.
pub fn update_booking(
    conn: &mut SqliteConnection,
    booking: &Booking,
) -> Result<Booking, PersistenceError> {
    let booking_id: i64 = booking.booking_id.ok_or_else(|| {
        PersistenceError::QueryFailed(String::from(
            "cannot update a booking without a persisted id",
        ))
    })?;
    let date: String = format_date(booking.date)?;
    let qty: i32 = i32::try_from(booking.qty)
        .map_err(|_| PersistenceError::QueryFailed(format!("qty out of range: {}", booking.qty)))?;

    let updated: usize = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id))
        .set((
            bookings::pet_id.eq(booking.pet_id),
            bookings::pet_name.eq(&booking.pet_name),
            bookings::service.eq(booking.service.as_str()),
            bookings::qty.eq(qty),
            bookings::amount.eq(booking.amount),
            bookings::date.eq(&date),
            bookings::time_slot.eq(&booking.time_slot),
            bookings::notes.eq(&booking.notes),
            bookings::status.eq(booking.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound {
            resource: "Booking",
            id: booking_id,
        });
    }
    Ok(booking.clone())
}
