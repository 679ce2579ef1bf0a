// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod store_tests;

use crate::SqliteStore;
use adoptnest_core::Store;
use adoptnest_domain::{
    AdoptionRequest, AgeGroup, ApplicationDetails, Booking, Pet, PetStatus, PetType, ServiceKind,
    Surrender,
};
use time::macros::date;

pub fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory().expect("in-memory store should initialize")
}

pub fn create_test_pet(name: &str) -> Pet {
    Pet::new(
        String::from(name),
        PetType::Dog,
        Some(String::from("Labrador")),
        AgeGroup::Adult,
        String::from("Springfield"),
        Some(String::from("Friendly and house-trained")),
        String::from("images/pets/placeholder.jpg"),
        false,
        PetStatus::Available,
        1,
    )
}

pub fn seed_pet(store: &mut SqliteStore, name: &str) -> Pet {
    store
        .insert_pet(&create_test_pet(name))
        .expect("inserting a pet should succeed")
}

pub fn create_test_application() -> ApplicationDetails {
    ApplicationDetails {
        name: String::from("Jamie Rivera"),
        email: String::from("jamie@example.com"),
        phone: String::from("555-0100"),
        address: String::from("12 Oak Lane"),
        city: String::from("Springfield"),
        reason: String::from("Looking for a companion"),
        hours_alone: 4,
    }
}

pub fn create_test_adoption(pet_id: i64, applicant_id: i64) -> AdoptionRequest {
    AdoptionRequest::new(pet_id, applicant_id, create_test_application())
}

pub fn create_test_booking(user_id: i64, service: ServiceKind, qty: u32) -> Booking {
    Booking::new(
        user_id,
        None,
        None,
        service,
        qty,
        adoptnest_domain::compute_amount(service, qty),
        date!(2026 - 09 - 15),
        String::from("10:00 AM"),
        None,
    )
}

pub fn create_test_surrender(user_id: i64) -> Surrender {
    Surrender::new(
        user_id,
        String::from("Senior tabby cat, very calm"),
        String::from("Moving overseas"),
    )
}
