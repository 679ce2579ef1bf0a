// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{
    CreateBookingRequest, CreatePetRequest, ListPetsRequest, UpdateBookingRequest,
    UpdatePetRequest,
};

#[test]
fn test_create_pet_request_optional_fields_default() {
    let json = r#"{
        "name": "Rex",
        "pet_type": "Dog",
        "age_group": "Adult",
        "location": "Springfield",
        "image_ref": "images/pets/rex.jpg"
    }"#;
    let request: CreatePetRequest =
        serde_json::from_str(json).expect("minimal request should deserialize");
    assert_eq!(request.name, "Rex");
    assert!(request.breed.is_none());
    assert!(request.description.is_none());
    assert!(!request.featured);
    assert!(request.status.is_none());
}

#[test]
fn test_update_pet_request_from_empty_object() {
    let request: UpdatePetRequest =
        serde_json::from_str("{}").expect("empty patch should deserialize");
    assert_eq!(request, UpdatePetRequest::default());
}

#[test]
fn test_list_pets_request_from_empty_object() {
    let request: ListPetsRequest =
        serde_json::from_str("{}").expect("empty filter should deserialize");
    assert_eq!(request, ListPetsRequest::default());
    assert!(request.page.is_none());
    assert!(request.limit.is_none());
}

#[test]
fn test_create_booking_request_optional_fields_default() {
    let json = r#"{
        "service": "Boarding",
        "qty": 3,
        "date": "2026-09-15",
        "time_slot": "10:00 AM"
    }"#;
    let request: CreateBookingRequest =
        serde_json::from_str(json).expect("minimal request should deserialize");
    assert!(request.pet_id.is_none());
    assert!(request.notes.is_none());
    assert_eq!(request.qty, 3);
}

#[test]
fn test_update_booking_request_ignores_absent_status() {
    let request: UpdateBookingRequest = serde_json::from_str(r#"{"qty": 2}"#)
        .expect("partial patch should deserialize");
    assert_eq!(request.qty, Some(2));
    assert!(request.status.is_none());
}
