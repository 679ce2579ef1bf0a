// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the AdoptNest adoption service.
//!
//! This crate sits between the HTTP server and the workflow engine. It
//! owns the request/response DTOs, authentication and role gates, and
//! the translation of domain and workflow errors into the stable API
//! error contract. Handlers are generic over the `Store` port so that
//! tests can run them against the in-memory store.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthorizationService, authenticate};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use request_response::{
    AdoptionResponse, BookingResponse, CreateBookingRequest, CreatePetRequest, DeletedResponse,
    ListPetsRequest, ListPetsResponse, PetResponse, SubmitAdoptionRequest, SubmitSurrenderRequest,
    SurrenderResponse, UpdateAdoptionStatusRequest, UpdateBookingRequest, UpdatePetRequest,
    UpdateSurrenderStatusRequest,
};
