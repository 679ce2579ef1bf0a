// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared helpers for API layer tests.

use adoptnest_core::MemoryStore;
use adoptnest_domain::Actor;

use crate::auth::authenticate;
use crate::handlers;
use crate::request_response::{CreateBookingRequest, CreatePetRequest, SubmitAdoptionRequest};

pub fn create_admin() -> Actor {
    authenticate(1, "admin").expect("admin role should authenticate")
}

pub fn create_user(id: i64) -> Actor {
    authenticate(id, "user").expect("user role should authenticate")
}

pub fn create_pet_request(name: &str) -> CreatePetRequest {
    CreatePetRequest {
        name: String::from(name),
        pet_type: String::from("Dog"),
        breed: Some(String::from("Labrador")),
        age_group: String::from("Adult"),
        location: String::from("Springfield"),
        description: Some(String::from("Friendly and house-trained")),
        image_ref: String::from("images/pets/placeholder.jpg"),
        featured: false,
        status: None,
    }
}

/// Creates a pet through the handler as the admin and returns its id.
pub fn seed_pet(store: &mut MemoryStore, name: &str) -> i64 {
    let admin: Actor = create_admin();
    let response = handlers::create_pet(store, &admin, create_pet_request(name))
        .expect("pet creation should succeed");
    response.pet_id
}

pub fn adoption_request_for(pet_id: i64) -> SubmitAdoptionRequest {
    SubmitAdoptionRequest {
        pet_id,
        name: String::from("Jamie Rivera"),
        email: String::from("jamie@example.com"),
        phone: String::from("555-0142"),
        address: String::from("12 Oak Lane"),
        city: String::from("Springfield"),
        reason: String::from("Looking for a companion for daily walks"),
        hours_alone: 4,
    }
}

pub fn booking_request(service: &str, qty: u32) -> CreateBookingRequest {
    CreateBookingRequest {
        pet_id: None,
        service: String::from(service),
        qty,
        date: String::from("2026-09-15"),
        time_slot: String::from("10:00 AM"),
        notes: None,
    }
}
