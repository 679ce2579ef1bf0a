// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The surrender intake workflow.
//!
//! Surrenders describe an external animal being brought to the shelter,
//! so accepting one never touches the pet registry; staff register the
//! animal as a new pet separately if they take it in.

use crate::access;
use crate::error::CoreError;
use crate::store::{Store, SurrenderFilter};
use adoptnest_domain::{
    Actor, DomainError, Surrender, SurrenderStatus, validate_surrender_fields,
};
use tracing::info;

/// Data for submitting a surrender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurrenderSubmission {
    /// Free-text description of the animal.
    pub pet_description: String,
    /// Why the owner is surrendering the animal.
    pub reason: String,
}

/// Submits a surrender owned by the actor.
///
/// The status is forced to `Pending` regardless of caller input.
///
/// # Errors
///
/// Returns a per-field validation error for blank fields, or a storage
/// error.
pub fn submit<S: Store>(
    store: &mut S,
    actor: &Actor,
    submission: SurrenderSubmission,
) -> Result<Surrender, CoreError> {
    validate_surrender_fields(&submission.pet_description, &submission.reason)?;

    let surrender: Surrender =
        Surrender::new(actor.id, submission.pet_description, submission.reason);
    let created: Surrender = store.insert_surrender(&surrender)?;
    info!(
        surrender_id = created.surrender_id,
        user_id = created.user_id,
        "Submitted surrender"
    );
    Ok(created)
}

/// Lists surrenders visible to the actor.
///
/// # Errors
///
/// Returns a storage error if the backend fails.
pub fn list<S: Store>(
    store: &mut S,
    actor: &Actor,
    mut filter: SurrenderFilter,
) -> Result<Vec<Surrender>, CoreError> {
    filter.user_id = access::scoped_owner(actor, filter.user_id);
    Ok(store.list_surrenders(&filter)?)
}

/// Retrieves a surrender by id, scoped to the actor.
///
/// # Errors
///
/// Returns `NotFound` if the surrender is absent or out of scope.
pub fn get<S: Store>(
    store: &mut S,
    actor: &Actor,
    surrender_id: i64,
) -> Result<Surrender, CoreError> {
    store
        .find_surrender(surrender_id)?
        .filter(|surrender| access::can_view(actor, surrender.user_id))
        .ok_or(CoreError::NotFound {
            resource: "Surrender",
            id: surrender_id,
        })
}

/// Transitions a surrender out of `Pending`.
///
/// Precondition: the route boundary has verified the actor is an admin;
/// authorization is not re-checked here. Terminal states reject any
/// further transition.
///
/// # Errors
///
/// Returns `NotFound` if the surrender is absent, or an
/// `InvalidStatusTransition` domain violation if the surrender is
/// already terminal.
pub fn update_status<S: Store>(
    store: &mut S,
    surrender_id: i64,
    new_status: SurrenderStatus,
) -> Result<Surrender, CoreError> {
    let mut surrender: Surrender =
        store
            .find_surrender(surrender_id)?
            .ok_or(CoreError::NotFound {
                resource: "Surrender",
                id: surrender_id,
            })?;

    if !surrender.status.can_transition_to(new_status) {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                entity: "surrender",
                from: surrender.status.as_str(),
                to: new_status.as_str(),
            },
        ));
    }

    let previous: SurrenderStatus = surrender.status;
    surrender.status = new_status;
    let updated: Surrender = store.update_surrender(&surrender)?;
    info!(
        surrender_id,
        from = previous.as_str(),
        to = new_status.as_str(),
        "Surrender status updated"
    );
    Ok(updated)
}
