// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Adoption request queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::AdoptionRequestRow;
use crate::diesel_schema::adoption_requests;
use crate::error::PersistenceError;
use adoptnest_core::AdoptionFilter;
use adoptnest_domain::AdoptionRequest;

/// Retrieves an adoption request by id.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if the
/// request is not found.
pub fn get_adoption(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<AdoptionRequest>, PersistenceError> {
    debug!("Looking up adoption request by id: {}", request_id);

    let result: Result<AdoptionRequestRow, diesel::result::Error> = adoption_requests::table
        .filter(adoption_requests::request_id.eq(request_id))
        .select(AdoptionRequestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists adoption requests matching the filter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_adoptions(
    conn: &mut SqliteConnection,
    filter: &AdoptionFilter,
) -> Result<Vec<AdoptionRequest>, PersistenceError> {
    let mut query: adoption_requests::BoxedQuery<'static, Sqlite> =
        adoption_requests::table.into_boxed();

    if let Some(applicant_id) = filter.applicant_id {
        query = query.filter(adoption_requests::applicant_id.eq(applicant_id));
    }
    if let Some(pet_id) = filter.pet_id {
        query = query.filter(adoption_requests::pet_id.eq(pet_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(adoption_requests::status.eq(status.as_str()));
    }

    let rows: Vec<AdoptionRequestRow> = query
        .order(adoption_requests::request_id.asc())
        .select(AdoptionRequestRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(AdoptionRequestRow::into_domain)
        .collect()
}
