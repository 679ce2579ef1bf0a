// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The pet registry workflow.
//!
//! Pet records are created and edited by admin actions; the admin-only
//! requirement is enforced at the route boundary, not re-checked here.
//! The `Adopted` status is reachable only through the adoption workflow's
//! approval cascade.

use crate::error::CoreError;
use crate::images::ImageStore;
use crate::paging::{Page, PageRequest};
use crate::store::{PetFilter, Store, StoreError};
use adoptnest_domain::{
    AgeGroup, Pet, PetStatus, PetType, validate_image_ref, validate_pet_fields,
};
use tracing::{info, warn};

/// Data for creating a pet record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPet {
    /// Display name.
    pub name: String,
    /// Species classification.
    pub pet_type: PetType,
    /// Breed, if known.
    pub breed: Option<String>,
    /// Age bracket.
    pub age_group: AgeGroup,
    /// Shelter or foster location.
    pub location: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Pre-resolved image reference. Required.
    pub image_ref: String,
    /// Whether this pet appears in the featured carousel.
    pub featured: bool,
    /// Initial status. Defaults to `Available` when absent.
    pub status: Option<PetStatus>,
}

/// A merge-patch for a pet record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetPatch {
    /// New display name.
    pub name: Option<String>,
    /// New species classification.
    pub pet_type: Option<PetType>,
    /// New breed.
    pub breed: Option<String>,
    /// New age bracket.
    pub age_group: Option<AgeGroup>,
    /// New location.
    pub location: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New image reference.
    pub image_ref: Option<String>,
    /// New featured flag.
    pub featured: Option<bool>,
    /// New status.
    pub status: Option<PetStatus>,
}

/// Creates a pet record.
///
/// The status defaults to `Available` unless explicitly provided. The
/// caller must supply a resolved image reference; the registry never
/// fetches or validates image bytes.
///
/// Precondition: the route boundary has verified the actor is an admin.
///
/// # Errors
///
/// Returns `ImageRequired` if the image reference is absent, a per-field
/// validation error for other missing fields, or a storage error.
pub fn create<S: Store>(store: &mut S, created_by: i64, new_pet: NewPet) -> Result<Pet, CoreError> {
    validate_pet_fields(&new_pet.name, &new_pet.location, &new_pet.image_ref)?;

    let pet: Pet = Pet::new(
        new_pet.name,
        new_pet.pet_type,
        new_pet.breed,
        new_pet.age_group,
        new_pet.location,
        new_pet.description,
        new_pet.image_ref,
        new_pet.featured,
        new_pet.status.unwrap_or_default(),
        created_by,
    );

    let created: Pet = store.insert_pet(&pet)?;
    info!(pet_id = created.pet_id, created_by, "Created pet record");
    Ok(created)
}

/// Retrieves a pet by id.
///
/// # Errors
///
/// Returns `NotFound` if the pet does not exist.
pub fn get<S: Store>(store: &mut S, pet_id: i64) -> Result<Pet, CoreError> {
    store.find_pet(pet_id)?.ok_or(CoreError::NotFound {
        resource: "Pet",
        id: pet_id,
    })
}

/// Lists pets matching the filter, paginated.
///
/// When the caller specifies no status filter, the public default of
/// {`Available`, `Pending`} is substituted so adopted pets are hidden
/// from listing. A page past the end returns an empty page rather than
/// an error.
///
/// # Errors
///
/// Returns a storage error if the backend fails.
pub fn list<S: Store>(
    store: &mut S,
    mut filter: PetFilter,
    page: PageRequest,
) -> Result<Page<Pet>, CoreError> {
    if filter.statuses.is_none() {
        filter.statuses = Some(vec![PetStatus::Available, PetStatus::Pending]);
    }
    Ok(store.list_pets(&filter, &page)?)
}

/// Applies a merge-patch to a pet record.
///
/// Precondition: the route boundary has verified the actor is an admin.
///
/// # Errors
///
/// Returns `NotFound` if the pet does not exist, `ImageRequired` if the
/// patch blanks the image reference, or a storage error.
pub fn update<S: Store>(store: &mut S, pet_id: i64, patch: PetPatch) -> Result<Pet, CoreError> {
    let mut pet: Pet = get(store, pet_id)?;

    if let Some(name) = patch.name {
        pet.name = name;
    }
    if let Some(pet_type) = patch.pet_type {
        pet.pet_type = pet_type;
    }
    if let Some(breed) = patch.breed {
        pet.breed = Some(breed);
    }
    if let Some(age_group) = patch.age_group {
        pet.age_group = age_group;
    }
    if let Some(location) = patch.location {
        pet.location = location;
    }
    if let Some(description) = patch.description {
        pet.description = Some(description);
    }
    if let Some(image_ref) = patch.image_ref {
        validate_image_ref(&image_ref)?;
        pet.image_ref = image_ref;
    }
    if let Some(featured) = patch.featured {
        pet.featured = featured;
    }
    if let Some(status) = patch.status {
        pet.status = status;
    }

    Ok(store.update_pet(&pet)?)
}

/// Deletes a pet record.
///
/// As a side effect, deletion of the previously associated image is
/// requested from the image collaborator. That cleanup is best-effort:
/// a failure is logged and never fails the delete.
///
/// Precondition: the route boundary has verified the actor is an admin.
///
/// # Errors
///
/// Returns `NotFound` if the pet does not exist, or a storage error.
pub fn delete<S: Store>(
    store: &mut S,
    images: &dyn ImageStore,
    pet_id: i64,
) -> Result<(), CoreError> {
    let pet: Pet = get(store, pet_id)?;
    store.delete_pet(pet_id)?;

    if let Err(e) = images.delete_image(&pet.image_ref) {
        warn!(pet_id, error = %e, "Best-effort image cleanup failed");
    }

    info!(pet_id, "Deleted pet record");
    Ok(())
}

/// Marks a pet adopted with an optimistic status guard.
///
/// Internal operation invoked only by adoption request approval. Fails
/// if the pet is already `Adopted`, which is what rejects a second
/// approval for the same pet.
pub(crate) fn mark_adopted<S: Store>(store: &mut S, pet_id: i64) -> Result<Pet, StoreError> {
    store.transition_pet_status(
        pet_id,
        &[PetStatus::Available, PetStatus::Pending],
        PetStatus::Adopted,
    )
}
