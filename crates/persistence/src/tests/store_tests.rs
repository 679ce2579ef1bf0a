// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{
    create_test_adoption, create_test_booking, create_test_pet, create_test_store,
    create_test_surrender, seed_pet,
};
use crate::SqliteStore;
use adoptnest_core::{
    AdoptionFilter, BookingFilter, Page, PageRequest, PetFilter, Store, StoreError,
    SurrenderFilter,
};
use adoptnest_domain::{
    AdoptionRequest, AdoptionStatus, Booking, BookingStatus, Pet, PetStatus, PetType, ServiceKind,
    Surrender, SurrenderStatus,
};
use time::macros::date;

#[test]
fn test_insert_and_find_pet_round_trip() {
    let mut store: SqliteStore = create_test_store();
    let created: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = created.pet_id.expect("insert assigns an id");

    let found: Pet = store
        .find_pet(pet_id)
        .expect("find should succeed")
        .expect("pet should exist");
    assert_eq!(found, created);

    assert!(
        store
            .find_pet(pet_id + 100)
            .expect("find should succeed")
            .is_none()
    );
}

#[test]
fn test_update_pet_persists_changes() {
    let mut store: SqliteStore = create_test_store();
    let mut pet: Pet = seed_pet(&mut store, "Rex");
    pet.location = String::from("Shelbyville");
    pet.featured = true;

    store.update_pet(&pet).expect("update should succeed");

    let found: Pet = store
        .find_pet(pet.pet_id.expect("insert assigns an id"))
        .expect("find should succeed")
        .expect("pet should exist");
    assert_eq!(found.location, "Shelbyville");
    assert!(found.featured);
}

#[test]
fn test_update_missing_pet_is_not_found() {
    let mut store: SqliteStore = create_test_store();
    let mut pet: Pet = create_test_pet("Ghost");
    pet.pet_id = Some(404);

    let result = store.update_pet(&pet);
    assert!(matches!(
        result,
        Err(StoreError::NotFound {
            resource: "Pet",
            id: 404
        })
    ));
}

#[test]
fn test_delete_pet() {
    let mut store: SqliteStore = create_test_store();
    let pet: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = pet.pet_id.expect("insert assigns an id");

    store.delete_pet(pet_id).expect("delete should succeed");
    assert!(
        store
            .find_pet(pet_id)
            .expect("find should succeed")
            .is_none()
    );

    let result = store.delete_pet(pet_id);
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[test]
fn test_list_pets_filters() {
    let mut store: SqliteStore = create_test_store();
    seed_pet(&mut store, "Rex");

    let mut cat: Pet = create_test_pet("Whiskers");
    cat.pet_type = PetType::Cat;
    cat.breed = Some(String::from("Tabby"));
    cat.featured = true;
    store.insert_pet(&cat).expect("insert should succeed");

    let by_type: Page<Pet> = store
        .list_pets(
            &PetFilter {
                pet_type: Some(PetType::Cat),
                ..PetFilter::default()
            },
            &PageRequest::default(),
        )
        .expect("list should succeed");
    assert_eq!(by_type.total, 1);
    assert_eq!(by_type.items[0].name, "Whiskers");

    let by_text: Page<Pet> = store
        .list_pets(
            &PetFilter {
                text_query: Some(String::from("tab")),
                ..PetFilter::default()
            },
            &PageRequest::default(),
        )
        .expect("list should succeed");
    assert_eq!(by_text.total, 1);

    let by_location: Page<Pet> = store
        .list_pets(
            &PetFilter {
                location: Some(String::from("springfield")),
                ..PetFilter::default()
            },
            &PageRequest::default(),
        )
        .expect("list should succeed");
    assert_eq!(by_location.total, 2);

    let featured: Page<Pet> = store
        .list_pets(
            &PetFilter {
                featured: Some(true),
                ..PetFilter::default()
            },
            &PageRequest::default(),
        )
        .expect("list should succeed");
    assert_eq!(featured.total, 1);
    assert_eq!(featured.items[0].name, "Whiskers");
}

#[test]
fn test_list_pets_status_filter() {
    let mut store: SqliteStore = create_test_store();
    let mut adopted: Pet = create_test_pet("Adopted");
    adopted.status = PetStatus::Adopted;
    store.insert_pet(&adopted).expect("insert should succeed");
    seed_pet(&mut store, "Available");

    let open: Page<Pet> = store
        .list_pets(
            &PetFilter {
                statuses: Some(vec![PetStatus::Available, PetStatus::Pending]),
                ..PetFilter::default()
            },
            &PageRequest::default(),
        )
        .expect("list should succeed");
    assert_eq!(open.total, 1);
    assert_eq!(open.items[0].name, "Available");
}

#[test]
fn test_list_pets_pagination() {
    let mut store: SqliteStore = create_test_store();
    for i in 0..5 {
        seed_pet(&mut store, &format!("Pet {i}"));
    }

    let page: Page<Pet> = store
        .list_pets(&PetFilter::default(), &PageRequest::new(2, 2))
        .expect("list should succeed");
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.pages, 3);
    assert_eq!(page.items[0].name, "Pet 2");

    let past_end: Page<Pet> = store
        .list_pets(&PetFilter::default(), &PageRequest::new(1000, 20))
        .expect("list should succeed");
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 5);
    assert_eq!(past_end.pages, 1);
}

#[test]
fn test_transition_pet_status_guard() {
    let mut store: SqliteStore = create_test_store();
    let pet: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = pet.pet_id.expect("insert assigns an id");

    let adopted: Pet = store
        .transition_pet_status(
            pet_id,
            &[PetStatus::Available, PetStatus::Pending],
            PetStatus::Adopted,
        )
        .expect("first transition should succeed");
    assert_eq!(adopted.status, PetStatus::Adopted);

    let result = store.transition_pet_status(
        pet_id,
        &[PetStatus::Available, PetStatus::Pending],
        PetStatus::Adopted,
    );
    assert!(matches!(result, Err(StoreError::Conflict(_))));

    let result = store.transition_pet_status(
        pet_id + 100,
        &[PetStatus::Available],
        PetStatus::Adopted,
    );
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[test]
fn test_adoption_round_trip_and_filters() {
    let mut store: SqliteStore = create_test_store();
    let pet: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = pet.pet_id.expect("insert assigns an id");

    let created: AdoptionRequest = store
        .insert_adoption(&create_test_adoption(pet_id, 7))
        .expect("insert should succeed");
    store
        .insert_adoption(&create_test_adoption(pet_id, 8))
        .expect("insert should succeed");

    let found: AdoptionRequest = store
        .find_adoption(created.request_id.expect("insert assigns an id"))
        .expect("find should succeed")
        .expect("request should exist");
    assert_eq!(found, created);

    let by_applicant: Vec<AdoptionRequest> = store
        .list_adoptions(&AdoptionFilter {
            applicant_id: Some(7),
            ..AdoptionFilter::default()
        })
        .expect("list should succeed");
    assert_eq!(by_applicant.len(), 1);

    let mut updated: AdoptionRequest = created;
    updated.status = AdoptionStatus::Rejected;
    store
        .update_adoption(&updated)
        .expect("update should succeed");

    let rejected: Vec<AdoptionRequest> = store
        .list_adoptions(&AdoptionFilter {
            status: Some(AdoptionStatus::Rejected),
            ..AdoptionFilter::default()
        })
        .expect("list should succeed");
    assert_eq!(rejected.len(), 1);
}

#[test]
fn test_booking_round_trip_preserves_date_and_status() {
    let mut store: SqliteStore = create_test_store();
    let mut booking: Booking = create_test_booking(7, ServiceKind::Boarding, 3);
    booking.notes = Some(String::from("Allergic to chicken"));

    let created: Booking = store
        .insert_booking(&booking)
        .expect("insert should succeed");
    assert_eq!(created.amount, 3000);

    let mut updated: Booking = created.clone();
    updated.status = BookingStatus::ChangeRequested;
    updated.date = date!(2026 - 10 - 01);
    store.update_booking(&updated).expect("update should succeed");

    let found: Booking = store
        .find_booking(created.booking_id.expect("insert assigns an id"))
        .expect("find should succeed")
        .expect("booking should exist");
    assert_eq!(found.status, BookingStatus::ChangeRequested);
    assert_eq!(found.date, date!(2026 - 10 - 01));
    assert_eq!(found.notes.as_deref(), Some("Allergic to chicken"));

    let by_user: Vec<Booking> = store
        .list_bookings(&BookingFilter {
            user_id: Some(7),
            ..BookingFilter::default()
        })
        .expect("list should succeed");
    assert_eq!(by_user.len(), 1);
}

#[test]
fn test_surrender_round_trip() {
    let mut store: SqliteStore = create_test_store();
    let created: Surrender = store
        .insert_surrender(&create_test_surrender(7))
        .expect("insert should succeed");

    let mut updated: Surrender = created.clone();
    updated.status = SurrenderStatus::Received;
    store
        .update_surrender(&updated)
        .expect("update should succeed");

    let found: Surrender = store
        .find_surrender(created.surrender_id.expect("insert assigns an id"))
        .expect("find should succeed")
        .expect("surrender should exist");
    assert_eq!(found.status, SurrenderStatus::Received);

    let by_status: Vec<Surrender> = store
        .list_surrenders(&SurrenderFilter {
            status: Some(SurrenderStatus::Received),
            ..SurrenderFilter::default()
        })
        .expect("list should succeed");
    assert_eq!(by_status.len(), 1);
}

#[test]
fn test_transaction_rolls_back_on_error() {
    let mut store: SqliteStore = create_test_store();
    let pet: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = pet.pet_id.expect("insert assigns an id");

    let result: Result<(), StoreError> = store.transaction(|store| {
        store.transition_pet_status(pet_id, &[PetStatus::Available], PetStatus::Adopted)?;
        Err(StoreError::Conflict(String::from("forced failure")))
    });
    assert!(matches!(result, Err(StoreError::Conflict(_))));

    // The status change inside the failed transaction must not persist.
    let found: Pet = store
        .find_pet(pet_id)
        .expect("find should succeed")
        .expect("pet should exist");
    assert_eq!(found.status, PetStatus::Available);
}

#[test]
fn test_transaction_commits_on_success() {
    let mut store: SqliteStore = create_test_store();
    let pet: Pet = seed_pet(&mut store, "Rex");
    let pet_id: i64 = pet.pet_id.expect("insert assigns an id");

    store
        .transaction(|store| {
            store.transition_pet_status(pet_id, &[PetStatus::Available], PetStatus::Adopted)?;
            Ok(())
        })
        .expect("transaction should commit");

    let found: Pet = store
        .find_pet(pet_id)
        .expect("find should succeed")
        .expect("pet should exist");
    assert_eq!(found.status, PetStatus::Adopted);
}
