// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Surrender mutations.

use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::surrenders;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use adoptnest_domain::Surrender;

/// Inserts a surrender and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_surrender(
    conn: &mut SqliteConnection,
    surrender: &Surrender,
) -> Result<Surrender, PersistenceError> {
    diesel::insert_into(surrenders::table)
        .values((
            surrenders::user_id.eq(surrender.user_id),
            surrenders::pet_description.eq(&surrender.pet_description),
            surrenders::reason.eq(&surrender.reason),
            surrenders::status.eq(surrender.status.as_str()),
        ))
        .execute(conn)?;

    let surrender_id: i64 = get_last_insert_rowid(conn)?;
    info!(surrender_id, "Surrender created");

    let mut created: Surrender = surrender.clone();
    created.surrender_id = Some(surrender_id);
    Ok(created)
}

/// Replaces a persisted surrender row.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the surrender's id.
pub fn update_surrender(
    conn: &mut SqliteConnection,
    surrender: &Surrender,
) -> Result<Surrender, PersistenceError> {
    let surrender_id: i64 = surrender.surrender_id.ok_or_else(|| {
        PersistenceError::QueryFailed(String::from(
            "cannot update a surrender without a persisted id",
        ))
    })?;

    let updated: usize = diesel::update(surrenders::table)
        .filter(surrenders::surrender_id.eq(surrender_id))
        .set((
            surrenders::pet_description.eq(&surrender.pet_description),
            surrenders::reason.eq(&surrender.reason),
            surrenders::status.eq(surrender.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound {
            resource: "Surrender",
            id: surrender_id,
        });
    }
    Ok(surrender.clone())
}
