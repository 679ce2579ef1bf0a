// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    pets (pet_id) {
        pet_id -> BigInt,
        name -> Text,
        pet_type -> Text,
        breed -> Nullable<Text>,
        age_group -> Text,
        location -> Text,
        description -> Nullable<Text>,
        image_ref -> Text,
        featured -> Integer,
        status -> Text,
        created_by -> BigInt,
        created_at -> Text,
    }
}

diesel::table! {
    adoption_requests (request_id) {
        request_id -> BigInt,
        pet_id -> BigInt,
        applicant_id -> BigInt,
        applicant_name -> Text,
        email -> Text,
        phone -> Text,
        address -> Text,
        city -> Text,
        reason -> Text,
        hours_alone -> Integer,
        status -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    bookings (booking_id) {
        booking_id -> BigInt,
        user_id -> BigInt,
        pet_id -> Nullable<BigInt>,
        pet_name -> Nullable<Text>,
        service -> Text,
        qty -> Integer,
        amount -> BigInt,
        date -> Text,
        time_slot -> Text,
        notes -> Nullable<Text>,
        status -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    surrenders (surrender_id) {
        surrender_id -> BigInt,
        user_id -> BigInt,
        pet_description -> Text,
        reason -> Text,
        status -> Text,
        created_at -> Text,
    }
}

diesel::joinable!(adoption_requests -> pets (pet_id));

diesel::allow_tables_to_appear_in_same_query!(adoption_requests, bookings, pets, surrenders);
