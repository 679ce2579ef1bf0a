// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_new_pet, seed_pet};
use crate::error::CoreError;
use crate::images::NoopImageStore;
use crate::memory::MemoryStore;
use crate::paging::PageRequest;
use crate::pets::{self, NewPet, PetPatch};
use crate::store::PetFilter;
use adoptnest_domain::{DomainError, Pet, PetStatus, PetType};

#[test]
fn test_create_pet_defaults_to_available() {
    let mut store: MemoryStore = MemoryStore::new();
    let pet: Pet = pets::create(&mut store, 1, create_test_new_pet("Rex"))
        .expect("creating a pet should succeed");

    assert!(pet.pet_id.is_some());
    assert_eq!(pet.status, PetStatus::Available);
    assert_eq!(pet.created_by, 1);
}

#[test]
fn test_create_pet_honors_explicit_status() {
    let mut store: MemoryStore = MemoryStore::new();
    let mut new_pet: NewPet = create_test_new_pet("Rex");
    new_pet.status = Some(PetStatus::Pending);

    let pet: Pet = pets::create(&mut store, 1, new_pet).expect("creating a pet should succeed");
    assert_eq!(pet.status, PetStatus::Pending);
}

#[test]
fn test_create_pet_requires_image() {
    let mut store: MemoryStore = MemoryStore::new();
    let mut new_pet: NewPet = create_test_new_pet("Rex");
    new_pet.image_ref = String::from("   ");

    let result = pets::create(&mut store, 1, new_pet);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::ImageRequired))
    ));
}

#[test]
fn test_create_pet_requires_name() {
    let mut store: MemoryStore = MemoryStore::new();
    let mut new_pet: NewPet = create_test_new_pet("Rex");
    new_pet.name = String::new();

    let result = pets::create(&mut store, 1, new_pet);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::MissingField {
            field: "name"
        }))
    ));
}

#[test]
fn test_get_missing_pet_is_not_found() {
    let mut store: MemoryStore = MemoryStore::new();
    let result = pets::get(&mut store, 42);
    assert!(matches!(
        result,
        Err(CoreError::NotFound {
            resource: "Pet",
            id: 42
        })
    ));
}

#[test]
fn test_list_hides_adopted_pets_by_default() {
    let mut store: MemoryStore = MemoryStore::new();
    let rex: Pet = seed_pet(&mut store, "Rex");
    seed_pet(&mut store, "Milo");

    pets::update(
        &mut store,
        rex.pet_id.expect("seeded pet has an id"),
        PetPatch {
            status: Some(PetStatus::Adopted),
            ..PetPatch::default()
        },
    )
    .expect("updating a pet should succeed");

    let page = pets::list(&mut store, PetFilter::default(), PageRequest::default())
        .expect("listing pets should succeed");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Milo");
}

#[test]
fn test_list_explicit_status_filter_shows_adopted() {
    let mut store: MemoryStore = MemoryStore::new();
    let rex: Pet = seed_pet(&mut store, "Rex");
    pets::update(
        &mut store,
        rex.pet_id.expect("seeded pet has an id"),
        PetPatch {
            status: Some(PetStatus::Adopted),
            ..PetPatch::default()
        },
    )
    .expect("updating a pet should succeed");

    let filter: PetFilter = PetFilter {
        statuses: Some(vec![PetStatus::Adopted]),
        ..PetFilter::default()
    };
    let page = pets::list(&mut store, filter, PageRequest::default())
        .expect("listing pets should succeed");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Rex");
}

#[test]
fn test_list_filters_by_type_and_text() {
    let mut store: MemoryStore = MemoryStore::new();
    seed_pet(&mut store, "Rex");
    let mut cat: NewPet = create_test_new_pet("Whiskers");
    cat.pet_type = PetType::Cat;
    cat.breed = Some(String::from("Tabby"));
    pets::create(&mut store, 1, cat).expect("creating a pet should succeed");

    let by_type: PetFilter = PetFilter {
        pet_type: Some(PetType::Cat),
        ..PetFilter::default()
    };
    let page = pets::list(&mut store, by_type, PageRequest::default())
        .expect("listing pets should succeed");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Whiskers");

    let by_text: PetFilter = PetFilter {
        text_query: Some(String::from("tab")),
        ..PetFilter::default()
    };
    let page = pets::list(&mut store, by_text, PageRequest::default())
        .expect("listing pets should succeed");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Whiskers");
}

#[test]
fn test_list_filters_featured() {
    let mut store: MemoryStore = MemoryStore::new();
    seed_pet(&mut store, "Rex");
    let mut featured: NewPet = create_test_new_pet("Star");
    featured.featured = true;
    pets::create(&mut store, 1, featured).expect("creating a pet should succeed");

    let filter: PetFilter = PetFilter {
        featured: Some(true),
        ..PetFilter::default()
    };
    let page = pets::list(&mut store, filter, PageRequest::default())
        .expect("listing pets should succeed");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Star");
}

#[test]
fn test_update_merges_patch_fields() {
    let mut store: MemoryStore = MemoryStore::new();
    let pet: Pet = seed_pet(&mut store, "Rex");

    let updated: Pet = pets::update(
        &mut store,
        pet.pet_id.expect("seeded pet has an id"),
        PetPatch {
            location: Some(String::from("Shelbyville")),
            ..PetPatch::default()
        },
    )
    .expect("updating a pet should succeed");

    assert_eq!(updated.location, "Shelbyville");
    assert_eq!(updated.name, "Rex");
    assert_eq!(updated.image_ref, pet.image_ref);
}

#[test]
fn test_update_rejects_blank_image() {
    let mut store: MemoryStore = MemoryStore::new();
    let pet: Pet = seed_pet(&mut store, "Rex");

    let result = pets::update(
        &mut store,
        pet.pet_id.expect("seeded pet has an id"),
        PetPatch {
            image_ref: Some(String::from("")),
            ..PetPatch::default()
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::ImageRequired))
    ));
}

#[test]
fn test_delete_removes_pet() {
    let mut store: MemoryStore = MemoryStore::new();
    let pet: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = pet.pet_id.expect("seeded pet has an id");

    pets::delete(&mut store, &NoopImageStore, pet_id).expect("deleting a pet should succeed");
    let result = pets::get(&mut store, pet_id);
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn test_delete_missing_pet_is_not_found() {
    let mut store: MemoryStore = MemoryStore::new();
    let result = pets::delete(&mut store, &NoopImageStore, 7);
    assert!(matches!(
        result,
        Err(CoreError::NotFound {
            resource: "Pet",
            id: 7
        })
    ));
}
