// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bookings::NewBooking;
use crate::memory::MemoryStore;
use crate::pets::{self, NewPet};
use adoptnest_domain::{
    Actor, AgeGroup, ApplicationDetails, Pet, PetType, Role, ServiceKind,
};
use time::macros::date;

pub fn create_admin() -> Actor {
    Actor::new(1, Role::Admin)
}

pub fn create_user(id: i64) -> Actor {
    Actor::new(id, Role::User)
}

pub fn create_test_new_pet(name: &str) -> NewPet {
    NewPet {
        name: String::from(name),
        pet_type: PetType::Dog,
        breed: Some(String::from("Labrador")),
        age_group: AgeGroup::Adult,
        location: String::from("Springfield"),
        description: Some(String::from("Friendly and house-trained")),
        image_ref: String::from("images/pets/placeholder.jpg"),
        featured: false,
        status: None,
    }
}

pub fn seed_pet(store: &mut MemoryStore, name: &str) -> Pet {
    pets::create(store, create_admin().id, create_test_new_pet(name))
        .expect("seeding a pet should succeed")
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

pub fn create_test_new_booking(service: ServiceKind, qty: u32) -> NewBooking {
    NewBooking {
        pet_id: None,
        service,
        qty,
        date: date!(2026 - 09 - 15),
        time_slot: String::from("10:00 AM"),
        notes: None,
    }
}
