// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow engine for the AdoptNest adoption service.
//!
//! This crate contains the four workflows (pet registry, adoption
//! requests, bookings, surrenders) and the shared access control layer.
//! Persistence is reached exclusively through the [`Store`] port; the
//! image CDN is reached through the [`ImageStore`] port. Both are
//! supplied by external collaborators.

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

pub mod access;
pub mod adoptions;
pub mod bookings;
pub mod pets;
pub mod surrenders;

mod error;
mod images;
mod memory;
mod paging;
mod store;

#[cfg(test)]
mod tests;

pub use adoptions::AdoptionSubmission;
pub use bookings::{BookingChanges, NewBooking};
pub use error::CoreError;
pub use images::{ImageStore, ImageStoreError, NoopImageStore};
pub use memory::MemoryStore;
pub use paging::{DEFAULT_LIMIT, MAX_LIMIT, Page, PageRequest};
pub use pets::{NewPet, PetPatch};
pub use store::{AdoptionFilter, BookingFilter, PetFilter, Store, StoreError, SurrenderFilter};
pub use surrenders::SurrenderSubmission;
