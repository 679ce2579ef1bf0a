// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The adoption request workflow.
//!
//! State machine: `Pending -> {Approved, Rejected, Cancelled}`, terminal
//! on any of the three. Approval cascades the referenced pet to
//! `Adopted` inside a single store transaction, so the request update
//! and the pet update commit or fail together.

use crate::access;
use crate::error::CoreError;
use crate::pets;
use crate::store::{AdoptionFilter, Store};
use adoptnest_domain::{
    Actor, AdoptionRequest, AdoptionStatus, ApplicationDetails, DomainError, validate_application,
};
use tracing::info;

/// Data for submitting an adoption request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdoptionSubmission {
    /// The pet the applicant wants to adopt.
    pub pet_id: i64,
    /// Applicant-supplied application details.
    pub details: ApplicationDetails,
}

/// Submits an adoption request.
///
/// The request status is forced to `Pending` regardless of caller input
/// and the applicant is always the submitting actor.
///
/// # Errors
///
/// Returns `PetNotFound` if the pet does not resolve, a per-field
/// validation error for the application details, or a storage error.
pub fn submit<S: Store>(
    store: &mut S,
    actor: &Actor,
    submission: AdoptionSubmission,
) -> Result<AdoptionRequest, CoreError> {
    validate_application(&submission.details)?;

    if store.find_pet(submission.pet_id)?.is_none() {
        return Err(CoreError::PetNotFound {
            pet_id: submission.pet_id,
        });
    }

    let request: AdoptionRequest =
        AdoptionRequest::new(submission.pet_id, actor.id, submission.details);
    let created: AdoptionRequest = store.insert_adoption(&request)?;
    info!(
        request_id = created.request_id,
        pet_id = created.pet_id,
        applicant_id = created.applicant_id,
        "Submitted adoption request"
    );
    Ok(created)
}

/// Lists adoption requests visible to the actor.
///
/// Visibility is narrowed through the access control layer keyed on the
/// applicant field: users only ever see their own requests.
///
/// # Errors
///
/// Returns a storage error if the backend fails.
pub fn list<S: Store>(
    store: &mut S,
    actor: &Actor,
    mut filter: AdoptionFilter,
) -> Result<Vec<AdoptionRequest>, CoreError> {
    filter.applicant_id = access::scoped_owner(actor, filter.applicant_id);
    Ok(store.list_adoptions(&filter)?)
}

/// Retrieves an adoption request by id, scoped to the actor.
///
/// A request outside the actor's scope surfaces the same `NotFound` as
/// an absent one, so existence cannot be probed.
///
/// # Errors
///
/// Returns `NotFound` if the request is absent or out of scope.
pub fn get<S: Store>(
    store: &mut S,
    actor: &Actor,
    request_id: i64,
) -> Result<AdoptionRequest, CoreError> {
    store
        .find_adoption(request_id)?
        .filter(|request| access::can_view(actor, request.applicant_id))
        .ok_or(CoreError::NotFound {
            resource: "Adoption request",
            id: request_id,
        })
}

/// Transitions an adoption request out of `Pending`.
///
/// Precondition: the route boundary has verified the actor is an admin;
/// authorization is not re-checked here.
///
/// Terminal states reject any further transition. On `Approved`, the
/// request update and the pet's transition to `Adopted` run in one
/// store transaction: if the pet is no longer adoptable (for example, a
/// concurrent approval already adopted it) the whole operation fails
/// with a conflict and the request stays `Pending`.
///
/// # Errors
///
/// Returns `NotFound` if the request is absent, an
/// `InvalidStatusTransition` domain violation if the request is already
/// terminal, `Conflict` if the approval cascade loses the pet guard, or
/// a storage error.
pub fn update_status<S: Store>(
    store: &mut S,
    request_id: i64,
    new_status: AdoptionStatus,
) -> Result<AdoptionRequest, CoreError> {
    let mut request: AdoptionRequest =
        store
            .find_adoption(request_id)?
            .ok_or(CoreError::NotFound {
                resource: "Adoption request",
                id: request_id,
            })?;

    if !request.status.can_transition_to(new_status) {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidStatusTransition {
                entity: "adoption request",
                from: request.status.as_str(),
                to: new_status.as_str(),
            },
        ));
    }

    let previous: AdoptionStatus = request.status;
    request.status = new_status;

    let updated: AdoptionRequest = if new_status == AdoptionStatus::Approved {
        let pet_id: i64 = request.pet_id;
        store.transaction(|store| {
            let updated: AdoptionRequest = store.update_adoption(&request)?;
            pets::mark_adopted(store, pet_id)?;
            Ok(updated)
        })?
    } else {
        store.update_adoption(&request)?
    };

    info!(
        request_id,
        from = previous.as_str(),
        to = new_status.as_str(),
        "Adoption request status updated"
    );
    Ok(updated)
}
