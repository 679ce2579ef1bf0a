// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and role-based authorization.
//!
//! Identity verification happens upstream (the gateway validates the
//! session and forwards the caller's id and role); this module turns
//! that forwarded identity into a domain [`Actor`] and gates the
//! admin-only actions. Per-record ownership checks live in the workflow
//! engine's access control layer, not here.

use crate::error::AuthError;
use adoptnest_domain::{Actor, Role};

/// Resolves a forwarded identity into an authenticated actor.
///
/// # Arguments
///
/// * `actor_id` - The caller's user id, as forwarded by the gateway
/// * `role` - The caller's role string ("admin" or "user")
///
/// # Errors
///
/// Returns an error if the role string is not recognized.
pub fn authenticate(actor_id: i64, role: &str) -> Result<Actor, AuthError> {
    let role: Role = Role::parse(role).map_err(|e| {
        tracing::warn!(actor_id, "Rejected forwarded identity: {}", e);
        AuthError::AuthenticationFailed {
            reason: e.to_string(),
        }
    })?;
    Ok(Actor::new(actor_id, role))
}

/// Authorization service for enforcing role-based access control.
///
/// This service gates the actions reserved for shelter staff. Actions
/// available to any authenticated user (submitting requests, managing
/// one's own bookings) are not listed here; their per-record ownership
/// rules are enforced in the workflow engine.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_admin(actor: &Actor, action: &'static str) -> Result<(), AuthError> {
        if actor.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            })
        }
    }

    /// Checks if an actor is authorized to create a pet record.
    ///
    /// Only Admin actors may create pets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_create_pet(actor: &Actor) -> Result<(), AuthError> {
        Self::require_admin(actor, "create_pet")
    }

    /// Checks if an actor is authorized to update a pet record.
    ///
    /// Only Admin actors may update pets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_update_pet(actor: &Actor) -> Result<(), AuthError> {
        Self::require_admin(actor, "update_pet")
    }

    /// Checks if an actor is authorized to delete a pet record.
    ///
    /// Only Admin actors may delete pets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_delete_pet(actor: &Actor) -> Result<(), AuthError> {
        Self::require_admin(actor, "delete_pet")
    }

    /// Checks if an actor is authorized to decide an adoption request.
    ///
    /// Only Admin actors may approve, reject, or cancel requests through
    /// the status endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_update_adoption_status(actor: &Actor) -> Result<(), AuthError> {
        Self::require_admin(actor, "update_adoption_status")
    }

    /// Checks if an actor is authorized to decide a surrender.
    ///
    /// Only Admin actors may mark surrenders received or rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_update_surrender_status(actor: &Actor) -> Result<(), AuthError> {
        Self::require_admin(actor, "update_surrender_status")
    }
}
