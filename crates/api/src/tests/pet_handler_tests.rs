// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adoptnest_core::{MemoryStore, NoopImageStore};
use adoptnest_domain::Actor;

use crate::handlers;
use crate::request_response::{ListPetsRequest, UpdatePetRequest};
use crate::tests::helpers::{create_admin, create_pet_request, create_user, seed_pet};

#[test]
fn test_create_pet_defaults_to_available() {
    let mut store = MemoryStore::new();
    let admin: Actor = create_admin();
    let response = handlers::create_pet(&mut store, &admin, create_pet_request("Rex"))
        .expect("pet creation should succeed");
    assert_eq!(response.name, "Rex");
    assert_eq!(response.status, "Available");
    assert!(response.pet_id > 0);
}

#[test]
fn test_create_pet_denied_for_user() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let err = handlers::create_pet(&mut store, &user, create_pet_request("Rex"))
        .expect_err("user should not create pets");
    assert_eq!(err.kind(), "forbidden");
}

#[test]
fn test_create_pet_rejects_unknown_pet_type() {
    let mut store = MemoryStore::new();
    let admin: Actor = create_admin();
    let mut request = create_pet_request("Rex");
    request.pet_type = String::from("Dragon");
    let err = handlers::create_pet(&mut store, &admin, request)
        .expect_err("unknown pet type should be rejected");
    assert_eq!(err.kind(), "validation_error");
}

#[test]
fn test_create_pet_rejects_blank_image() {
    let mut store = MemoryStore::new();
    let admin: Actor = create_admin();
    let mut request = create_pet_request("Rex");
    request.image_ref = String::from("   ");
    let err = handlers::create_pet(&mut store, &admin, request)
        .expect_err("blank image should be rejected");
    assert_eq!(err.kind(), "image_required");
}

#[test]
fn test_get_pet_returns_record() {
    let mut store = MemoryStore::new();
    let pet_id: i64 = seed_pet(&mut store, "Whiskers");
    let response = handlers::get_pet(&mut store, pet_id).expect("lookup should succeed");
    assert_eq!(response.name, "Whiskers");
}

#[test]
fn test_get_missing_pet_is_pet_not_found() {
    let mut store = MemoryStore::new();
    let err = handlers::get_pet(&mut store, 42).expect_err("missing pet should not resolve");
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn test_list_hides_adopted_by_default() {
    let mut store = MemoryStore::new();
    let admin: Actor = create_admin();
    seed_pet(&mut store, "Rex");
    let mut adopted = create_pet_request("Shadow");
    adopted.status = Some(String::from("Adopted"));
    handlers::create_pet(&mut store, &admin, adopted).expect("pet creation should succeed");

    let response = handlers::list_pets(&mut store, ListPetsRequest::default())
        .expect("listing should succeed");
    assert_eq!(response.total, 1);
    assert_eq!(response.items[0].name, "Rex");

    let adopted_only = handlers::list_pets(
        &mut store,
        ListPetsRequest {
            status: Some(String::from("Adopted")),
            ..ListPetsRequest::default()
        },
    )
    .expect("listing should succeed");
    assert_eq!(adopted_only.total, 1);
    assert_eq!(adopted_only.items[0].name, "Shadow");
}

#[test]
fn test_list_rejects_unknown_status_filter() {
    let mut store = MemoryStore::new();
    let err = handlers::list_pets(
        &mut store,
        ListPetsRequest {
            status: Some(String::from("Lost")),
            ..ListPetsRequest::default()
        },
    )
    .expect_err("unknown status should be rejected");
    assert_eq!(err.kind(), "validation_error");
}

#[test]
fn test_list_paginates_and_tolerates_past_end_pages() {
    let mut store = MemoryStore::new();
    for i in 0..5 {
        seed_pet(&mut store, &format!("Pet {i}"));
    }

    let page_two = handlers::list_pets(
        &mut store,
        ListPetsRequest {
            page: Some(2),
            limit: Some(2),
            ..ListPetsRequest::default()
        },
    )
    .expect("listing should succeed");
    assert_eq!(page_two.items.len(), 2);
    assert_eq!(page_two.items[0].name, "Pet 2");
    assert_eq!(page_two.total, 5);
    assert_eq!(page_two.pages, 3);

    let far_page = handlers::list_pets(
        &mut store,
        ListPetsRequest {
            page: Some(1000),
            ..ListPetsRequest::default()
        },
    )
    .expect("listing should succeed");
    assert!(far_page.items.is_empty());
    assert_eq!(far_page.page, 1000);
    assert_eq!(far_page.pages, 1);
}

#[test]
fn test_update_pet_merges_fields() {
    let mut store = MemoryStore::new();
    let admin: Actor = create_admin();
    let pet_id: i64 = seed_pet(&mut store, "Rex");
    let response = handlers::update_pet(
        &mut store,
        &admin,
        pet_id,
        UpdatePetRequest {
            location: Some(String::from("Shelbyville")),
            featured: Some(true),
            ..UpdatePetRequest::default()
        },
    )
    .expect("update should succeed");
    assert_eq!(response.location, "Shelbyville");
    assert!(response.featured);
    assert_eq!(response.name, "Rex");
}

#[test]
fn test_update_pet_denied_for_user() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let pet_id: i64 = seed_pet(&mut store, "Rex");
    let err = handlers::update_pet(
        &mut store,
        &user,
        pet_id,
        UpdatePetRequest {
            name: Some(String::from("Buddy")),
            ..UpdatePetRequest::default()
        },
    )
    .expect_err("user should not update pets");
    assert_eq!(err.kind(), "forbidden");
}

#[test]
fn test_delete_pet_removes_record() {
    let mut store = MemoryStore::new();
    let admin: Actor = create_admin();
    let images = NoopImageStore;
    let pet_id: i64 = seed_pet(&mut store, "Rex");

    let response = handlers::delete_pet(&mut store, &images, &admin, pet_id)
        .expect("deletion should succeed");
    assert!(response.message.contains(&pet_id.to_string()));

    let err = handlers::get_pet(&mut store, pet_id).expect_err("deleted pet should be gone");
    assert_eq!(err.kind(), "not_found");
}
