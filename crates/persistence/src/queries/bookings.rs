// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use adoptnest_core::BookingFilter;
use adoptnest_domain::Booking;

/// Retrieves a booking by id.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if the
/// booking is not found.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<Booking>, PersistenceError> {
    debug!("Looking up booking by id: {}", booking_id);

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists bookings matching the filter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_bookings(
    conn: &mut SqliteConnection,
    filter: &BookingFilter,
) -> Result<Vec<Booking>, PersistenceError> {
    let mut query: bookings::BoxedQuery<'static, Sqlite> = bookings::table.into_boxed();

    if let Some(user_id) = filter.user_id {
        query = query.filter(bookings::user_id.eq(user_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(bookings::status.eq(status.as_str()));
    }

    let rows: Vec<BookingRow> = query
        .order(bookings::booking_id.asc())
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(BookingRow::into_domain).collect()
}
