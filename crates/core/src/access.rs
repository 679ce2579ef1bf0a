// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The access control layer shared by all workflows.
//!
//! Visibility and mutation rights are resolved in exactly one place so
//! the per-resource workflows cannot drift apart. An admin sees and
//! mutates everything; a user is narrowed to records they own.

use crate::error::CoreError;
use adoptnest_domain::Actor;

/// Narrows an owner filter to the caller's visibility scope.
///
/// Admins pass their requested owner filter through unchanged (`None`
/// meaning "all owners"); users are always narrowed to their own id
/// regardless of what they asked for.
#[must_use]
pub const fn scoped_owner(actor: &Actor, requested_owner: Option<i64>) -> Option<i64> {
    if actor.is_admin() {
        requested_owner
    } else {
        Some(actor.id)
    }
}

/// Returns whether the actor may see a record owned by `owner_id`.
#[must_use]
pub const fn can_view(actor: &Actor, owner_id: i64) -> bool {
    actor.is_admin() || actor.id == owner_id
}

/// Authorizes a mutation of a record owned by `owner_id`.
///
/// Admins are always allowed; users only on their own records. Failure
/// is an explicit `Forbidden` error, never a silent no-op.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` carrying `action` if the actor does
/// not own the record and is not an admin.
pub fn authorize_mutation(actor: &Actor, owner_id: i64, action: &str) -> Result<(), CoreError> {
    if can_view(actor, owner_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden {
            action: action.to_string(),
        })
    }
}
