// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pet queries.
//!
//! Listing translates the plain-data filter into a boxed Diesel query so
//! the same predicate set backs both the count and the page slice. The
//! `LIKE` operator gives case-insensitive matching under SQLite's default
//! ASCII collation.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::PetRow;
use crate::diesel_schema::pets;
use crate::error::PersistenceError;
use adoptnest_core::{Page, PageRequest, PetFilter};
use adoptnest_domain::{Pet, PetStatus};

type BoxedPetQuery = pets::BoxedQuery<'static, Sqlite>;

fn apply_filter(filter: &PetFilter) -> BoxedPetQuery {
    let mut query: BoxedPetQuery = pets::table.into_boxed();

    if let Some(pet_type) = filter.pet_type {
        query = query.filter(pets::pet_type.eq(pet_type.as_str()));
    }
    if let Some(age_group) = filter.age_group {
        query = query.filter(pets::age_group.eq(age_group.as_str()));
    }
    if let Some(location) = &filter.location {
        query = query.filter(pets::location.like(location.clone()));
    }
    if let Some(statuses) = &filter.statuses {
        let names: Vec<&'static str> = statuses.iter().map(PetStatus::as_str).collect();
        query = query.filter(pets::status.eq_any(names));
    }
    if let Some(featured) = filter.featured {
        query = query.filter(pets::featured.eq(i32::from(featured)));
    }
    if let Some(text_query) = &filter.text_query {
        let pattern: String = format!("%{text_query}%");
        query = query.filter(
            pets::name
                .like(pattern.clone())
                .nullable()
                .or(pets::breed.like(pattern.clone()))
                .or(pets::description.like(pattern)),
        );
    }

    query
}

/// Retrieves a pet by id.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if the pet is
/// not found.
pub fn get_pet(
    conn: &mut SqliteConnection,
    pet_id: i64,
) -> Result<Option<Pet>, PersistenceError> {
    debug!("Looking up pet by id: {}", pet_id);

    let result: Result<PetRow, diesel::result::Error> = pets::table
        .filter(pets::pet_id.eq(pet_id))
        .select(PetRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists pets matching the filter, paginated.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_pets(
    conn: &mut SqliteConnection,
    filter: &PetFilter,
    page: &PageRequest,
) -> Result<Page<Pet>, PersistenceError> {
    let total: i64 = apply_filter(filter).count().get_result(conn)?;
    let total: u64 = u64::try_from(total).unwrap_or(0);

    let offset: i64 = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    let rows: Vec<PetRow> = apply_filter(filter)
        .order(pets::pet_id.asc())
        .offset(offset)
        .limit(i64::from(page.limit()))
        .select(PetRow::as_select())
        .load(conn)?;

    let items: Vec<Pet> = rows
        .into_iter()
        .map(PetRow::into_domain)
        .collect::<Result<Vec<Pet>, PersistenceError>>()?;

    Ok(Page::new(items, total, page))
}
