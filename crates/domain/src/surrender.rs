// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a surrender submission.
///
/// `Pending` is the only non-terminal state; `Received` and `Rejected`
/// are terminal. Surrenders describe an external animal being brought in,
/// so no transition cascades into the pet registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SurrenderStatus {
    /// Initial state after submission.
    #[default]
    Pending,
    /// The shelter has accepted the surrender.
    Received,
    /// The shelter declined the surrender.
    Rejected,
}

impl SurrenderStatus {
    /// Parses a surrender status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Received" => Ok(Self::Received),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidSurrenderStatus(s.to_string())),
        }
    }

    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Received => "Received",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns whether this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are `Pending` -> {`Received`, `Rejected`}.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Pending, Self::Received | Self::Rejected))
    }
}

impl FromStr for SurrenderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for SurrenderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An owner-initiated pet-surrender submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surrender {
    /// Canonical identifier. `None` indicates the surrender has not been
    /// persisted yet.
    pub surrender_id: Option<i64>,
    /// The submitting user (access-control scoping field).
    pub user_id: i64,
    /// Free-text description of the animal being surrendered.
    pub pet_description: String,
    /// Why the owner is surrendering the animal.
    pub reason: String,
    /// Lifecycle status.
    pub status: SurrenderStatus,
}

impl Surrender {
    /// Creates a new `Surrender` in `Pending` status without a persisted id.
    #[must_use]
    pub const fn new(user_id: i64, pet_description: String, reason: String) -> Self {
        Self {
            surrender_id: None,
            user_id,
            pet_description,
            reason,
            status: SurrenderStatus::Pending,
        }
    }

    /// Creates a `Surrender` with an existing persisted id.
    #[must_use]
    pub const fn with_id(
        surrender_id: i64,
        user_id: i64,
        pet_description: String,
        reason: String,
        status: SurrenderStatus,
    ) -> Self {
        Self {
            surrender_id: Some(surrender_id),
            user_id,
            pet_description,
            reason,
            status,
        }
    }
}
