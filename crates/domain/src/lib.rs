// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod actor;
mod adoption;
mod booking;
mod error;
mod pet;
mod pricing;
mod surrender;
mod validation;

#[cfg(test)]
mod tests;

pub use actor::{Actor, Role};
pub use adoption::{AdoptionRequest, AdoptionStatus, ApplicationDetails};
pub use booking::{Booking, BookingStatus, ServiceKind};
pub use error::DomainError;
pub use pet::{AgeGroup, Pet, PetStatus, PetType};
pub use pricing::{base_price, compute_amount};
pub use surrender::{Surrender, SurrenderStatus};
pub use validation::{
    parse_date, validate_application, validate_image_ref, validate_pet_fields, validate_quantity,
    validate_surrender_fields,
};
