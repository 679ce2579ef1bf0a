// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adoptnest_core::MemoryStore;
use adoptnest_domain::Actor;

use crate::handlers;
use crate::request_response::UpdateBookingRequest;
use crate::tests::helpers::{booking_request, create_admin, create_user, seed_pet};

#[test]
fn test_create_booking_computes_flat_fee_amount() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let response = handlers::create_booking(&mut store, &user, booking_request("Grooming", 5))
        .expect("booking creation should succeed");
    assert_eq!(response.amount, 1200);
    assert_eq!(response.status, "Pending");
    assert_eq!(response.user_id, 7);
    assert_eq!(response.date, "2026-09-15");
}

#[test]
fn test_create_booking_prices_boarding_per_unit() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let response = handlers::create_booking(&mut store, &user, booking_request("Boarding", 3))
        .expect("booking creation should succeed");
    assert_eq!(response.amount, 3000);
}

#[test]
fn test_create_booking_resolves_pet_name() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let pet_id: i64 = seed_pet(&mut store, "Rex");
    let mut request = booking_request("Veterinary", 1);
    request.pet_id = Some(pet_id);
    let response = handlers::create_booking(&mut store, &user, request)
        .expect("booking creation should succeed");
    assert_eq!(response.pet_name.as_deref(), Some("Rex"));
}

#[test]
fn test_create_booking_rejects_unknown_service() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let err = handlers::create_booking(&mut store, &user, booking_request("Massage", 1))
        .expect_err("unknown service should be rejected");
    assert_eq!(err.kind(), "validation_error");
}

#[test]
fn test_create_booking_rejects_unparseable_date() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let mut request = booking_request("Grooming", 1);
    request.date = String::from("next tuesday");
    let err = handlers::create_booking(&mut store, &user, request)
        .expect_err("bad date should be rejected");
    assert_eq!(err.kind(), "validation_error");
}

#[test]
fn test_create_booking_rejects_zero_quantity() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let err = handlers::create_booking(&mut store, &user, booking_request("Boarding", 0))
        .expect_err("zero quantity should be rejected");
    assert_eq!(err.kind(), "validation_error");
}

#[test]
fn test_owner_edit_forces_change_requested() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let created = handlers::create_booking(&mut store, &user, booking_request("Grooming", 1))
        .expect("booking creation should succeed");

    let updated = handlers::update_booking(
        &mut store,
        &user,
        created.booking_id,
        UpdateBookingRequest {
            notes: Some(String::from("Please use the hypoallergenic shampoo")),
            ..UpdateBookingRequest::default()
        },
    )
    .expect("update should succeed");
    assert_eq!(updated.status, "Change Requested");
    assert_eq!(updated.amount, 1200);
}

#[test]
fn test_owner_cannot_set_status_directly() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let created = handlers::create_booking(&mut store, &user, booking_request("Grooming", 1))
        .expect("booking creation should succeed");

    let updated = handlers::update_booking(
        &mut store,
        &user,
        created.booking_id,
        UpdateBookingRequest {
            status: Some(String::from("Confirmed")),
            ..UpdateBookingRequest::default()
        },
    )
    .expect("update should succeed");
    assert_eq!(updated.status, "Change Requested");
}

#[test]
fn test_admin_status_change_is_honored() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let admin: Actor = create_admin();
    let created = handlers::create_booking(&mut store, &user, booking_request("Grooming", 1))
        .expect("booking creation should succeed");

    let updated = handlers::update_booking(
        &mut store,
        &admin,
        created.booking_id,
        UpdateBookingRequest {
            status: Some(String::from("Confirmed")),
            ..UpdateBookingRequest::default()
        },
    )
    .expect("update should succeed");
    assert_eq!(updated.status, "Confirmed");
}

#[test]
fn test_update_reprices_on_quantity_and_service_change() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let created = handlers::create_booking(&mut store, &user, booking_request("Boarding", 3))
        .expect("booking creation should succeed");
    assert_eq!(created.amount, 3000);

    let repriced = handlers::update_booking(
        &mut store,
        &user,
        created.booking_id,
        UpdateBookingRequest {
            qty: Some(4),
            ..UpdateBookingRequest::default()
        },
    )
    .expect("update should succeed");
    assert_eq!(repriced.amount, 4000);

    let retrained = handlers::update_booking(
        &mut store,
        &user,
        created.booking_id,
        UpdateBookingRequest {
            service: Some(String::from("Training")),
            ..UpdateBookingRequest::default()
        },
    )
    .expect("update should succeed");
    assert_eq!(retrained.amount, 1500);
}

#[test]
fn test_update_denied_for_non_owner() {
    let mut store = MemoryStore::new();
    let owner: Actor = create_user(7);
    let other: Actor = create_user(8);
    let created = handlers::create_booking(&mut store, &owner, booking_request("Grooming", 1))
        .expect("booking creation should succeed");

    let err = handlers::update_booking(
        &mut store,
        &other,
        created.booking_id,
        UpdateBookingRequest {
            notes: Some(String::from("mine now")),
            ..UpdateBookingRequest::default()
        },
    )
    .expect_err("non-owner should not update");
    assert_eq!(err.kind(), "forbidden");
}

#[test]
fn test_cancel_is_tolerant_of_repeats() {
    let mut store = MemoryStore::new();
    let user: Actor = create_user(7);
    let created = handlers::create_booking(&mut store, &user, booking_request("Grooming", 1))
        .expect("booking creation should succeed");

    let cancelled = handlers::cancel_booking(&mut store, &user, created.booking_id)
        .expect("cancellation should succeed");
    assert_eq!(cancelled.status, "Cancelled");

    let again = handlers::cancel_booking(&mut store, &user, created.booking_id)
        .expect("repeat cancellation should succeed");
    assert_eq!(again.status, "Cancelled");
}

#[test]
fn test_get_and_list_are_scoped() {
    let mut store = MemoryStore::new();
    let owner: Actor = create_user(7);
    let other: Actor = create_user(8);
    let created = handlers::create_booking(&mut store, &owner, booking_request("Grooming", 1))
        .expect("booking creation should succeed");

    let err = handlers::get_booking(&mut store, &other, created.booking_id)
        .expect_err("other users should not see the booking");
    assert_eq!(err.kind(), "not_found");

    let own = handlers::list_bookings(&mut store, &owner, None).expect("listing should succeed");
    assert_eq!(own.len(), 1);
    let others = handlers::list_bookings(&mut store, &other, None)
        .expect("listing should succeed");
    assert!(others.is_empty());
    let all = handlers::list_bookings(&mut store, &create_admin(), None)
        .expect("listing should succeed");
    assert_eq!(all.len(), 1);
}
