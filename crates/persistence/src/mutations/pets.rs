// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pet mutations.

use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::pets;
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite::get_last_insert_rowid;
use adoptnest_domain::{Pet, PetStatus};

/// Inserts a pet and returns it with its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_pet(conn: &mut SqliteConnection, pet: &Pet) -> Result<Pet, PersistenceError> {
    diesel::insert_into(pets::table)
        .values((
            pets::name.eq(&pet.name),
            pets::pet_type.eq(pet.pet_type.as_str()),
            pets::breed.eq(&pet.breed),
            pets::age_group.eq(pet.age_group.as_str()),
            pets::location.eq(&pet.location),
            pets::description.eq(&pet.description),
            pets::image_ref.eq(&pet.image_ref),
            pets::featured.eq(i32::from(pet.featured)),
            pets::status.eq(pet.status.as_str()),
            pets::created_by.eq(pet.created_by),
        ))
        .execute(conn)?;

    let pet_id: i64 = get_last_insert_rowid(conn)?;
    info!(pet_id, "Pet created");

    let mut created: Pet = pet.clone();
    created.pet_id = Some(pet_id);
    Ok(created)
}

/// Replaces a persisted pet row.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the pet's id.
pub fn update_pet(conn: &mut SqliteConnection, pet: &Pet) -> Result<Pet, PersistenceError> {
    let pet_id: i64 = pet.pet_id.ok_or_else(|| {
        PersistenceError::QueryFailed(String::from("cannot update a pet without a persisted id"))
    })?;

    let updated: usize = diesel::update(pets::table)
        .filter(pets::pet_id.eq(pet_id))
        .set((
            pets::name.eq(&pet.name),
            pets::pet_type.eq(pet.pet_type.as_str()),
            pets::breed.eq(&pet.breed),
            pets::age_group.eq(pet.age_group.as_str()),
            pets::location.eq(&pet.location),
            pets::description.eq(&pet.description),
            pets::image_ref.eq(&pet.image_ref),
            pets::featured.eq(i32::from(pet.featured)),
            pets::status.eq(pet.status.as_str()),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound {
            resource: "Pet",
            id: pet_id,
        });
    }
    Ok(pet.clone())
}

/// Deletes a pet by id.
///
/// # Errors
///
/// Returns `NotFound` if no row matches the id.
pub fn delete_pet(conn: &mut SqliteConnection, pet_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(pets::table)
        .filter(pets::pet_id.eq(pet_id))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound {
            resource: "Pet",
            id: pet_id,
        });
    }
    info!(pet_id, "Pet deleted");
    Ok(())
}

/// Transitions a pet's status with an optimistic row guard.
///
/// The `UPDATE` matches the row only while its status is still in
/// `allowed_from`, so a concurrent transition that got there first turns
/// this call into a conflict instead of a silent double-write.
///
/// # Errors
///
/// Returns `NotFound` if the pet does not exist and `Conflict` if the
/// guard fails.
pub fn transition_pet_status(
    conn: &mut SqliteConnection,
    pet_id: i64,
    allowed_from: &[PetStatus],
    to: PetStatus,
) -> Result<Pet, PersistenceError> {
    let allowed: Vec<&'static str> = allowed_from.iter().map(PetStatus::as_str).collect();
    let updated: usize = diesel::update(pets::table)
        .filter(pets::pet_id.eq(pet_id))
        .filter(pets::status.eq_any(allowed))
        .set(pets::status.eq(to.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return match queries::pets::get_pet(conn, pet_id)? {
            Some(pet) => Err(PersistenceError::Conflict(format!(
                "pet {pet_id} is {} and cannot move to {}",
                pet.status.as_str(),
                to.as_str()
            ))),
            None => Err(PersistenceError::NotFound {
                resource: "Pet",
                id: pet_id,
            }),
        };
    }

    info!(pet_id, status = to.as_str(), "Pet status transitioned");
    queries::pets::get_pet(conn, pet_id)?.ok_or(PersistenceError::NotFound {
        resource: "Pet",
        id: pet_id,
    })
}
