// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Adoption request mutations.

use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::adoption_requests;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use adoptnest_domain::AdoptionRequest;

/// Inserts an adoption request and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_adoption(
    conn: &mut SqliteConnection,
    request: &AdoptionRequest,
) -> Result<AdoptionRequest, PersistenceError> {
    diesel::insert_into(adoption_requests::table)
        .values((
            adoption_requests::pet_id.eq(request.pet_id),
            adoption_requests::applicant_id.eq(request.applicant_id),
            adoption_requests::applicant_name.eq(&request.details.name),
            adoption_requests::email.eq(&request.details.email),
            adoption_requests::phone.eq(&request.details.phone),
            adoption_requests::address.eq(&request.details.address),
            adoption_requests::city.eq(&request.details.city),
            adoption_requests::reason.eq(&request.details.reason),
            adoption_requests::hours_alone.eq(i32::from(request.details.hours_alone)),
            adoption_requests::status.eq(request.status.as_str()),
        ))
        .execute(conn)?;

    let request_id: i64 = get_last_insert_rowid(conn)?;
    info!(request_id, "Adoption request created");

    let mut created: AdoptionRequest = request.clone();
    created.request_id = Some(request_id);
    Ok(created)
}

/// Replaces a persisted adoption request row.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the request's id.
pub fn update_adoption(
    conn: &mut SqliteConnection,
    request: &AdoptionRequest,
) -> Result<AdoptionRequest, PersistenceError> {
    let request_id: i64 = request.request_id.ok_or_else(|| {
        PersistenceError::QueryFailed(String::from(
            "cannot update an adoption request without a persisted id",
        ))
    })?;

    let updated: usize = diesel::update(adoption_requests::table)
        .filter(adoption_requests::request_id.eq(request_id))
        .set((
            adoption_requests::applicant_name.eq(&request.details.name),
            adoption_requests::email.eq(&request.details.email),
            adoption_requests::phone.eq(&request.details.phone),
            adoption_requests::address.eq(&request.details.address),
            adoption_requests::city.eq(&request.details.city),
            adoption_requests::reason.eq(&request.details.reason),
            adoption_requests::hours_alone.eq(i32::from(request.details.hours_alone)),
            adoption_requests::status.eq(request.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound {
            resource: "Adoption request",
            id: request_id,
        });
    }
    Ok(request.clone())
}
