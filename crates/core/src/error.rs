// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;
use adoptnest_domain::DomainError;

/// Errors that can occur while running a workflow operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The actor is authenticated but not authorized for this record.
    Forbidden {
        /// The action that was attempted.
        action: String,
    },
    /// The record is absent or outside the caller's access scope.
    ///
    /// Scope-miss and absence are indistinguishable by design, so that a
    /// caller cannot probe for the existence of other users' records.
    NotFound {
        /// The type of record that was not found.
        resource: &'static str,
        /// The requested identifier.
        id: i64,
    },
    /// An adoption request or booking referenced an absent pet.
    PetNotFound {
        /// The pet identifier that did not resolve.
        pet_id: i64,
    },
    /// The operation conflicts with the current state of a record.
    Conflict {
        /// Description of the conflict.
        message: String,
    },
    /// The persistence backend failed.
    Storage(StoreError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Forbidden { action } => {
                write!(f, "Forbidden: not authorized to perform '{action}'")
            }
            Self::NotFound { resource, id } => write!(f, "{resource} {id} not found"),
            Self::PetNotFound { pet_id } => write!(f, "Pet {pet_id} not found"),
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::Storage(err) => write!(f, "Storage error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            StoreError::Conflict(message) => Self::Conflict { message },
            StoreError::Backend(_) => Self::Storage(err),
        }
    }
}
