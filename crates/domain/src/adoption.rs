// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of an adoption request.
///
/// The only legal transition is `Pending` to one of the three terminal
/// states. Once terminal, no further transition is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AdoptionStatus {
    /// Initial state after submission. The only non-terminal state.
    #[default]
    Pending,
    /// Approved by an admin. Cascades the referenced pet to `Adopted`.
    Approved,
    /// Rejected by an admin.
    Rejected,
    /// Withdrawn before review.
    Cancelled,
}

impl AdoptionStatus {
    /// Parses an adoption status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidAdoptionStatus(s.to_string())),
        }
    }

    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns whether this status is terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are `Pending` -> {`Approved`, `Rejected`,
    /// `Cancelled`}.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Pending,
                Self::Approved | Self::Rejected | Self::Cancelled
            )
        )
    }
}

impl FromStr for AdoptionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AdoptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Applicant-supplied fields on an adoption request.
///
/// All fields are required at submission and immutable afterwards except
/// by admin edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    /// Applicant full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Why the applicant wants to adopt this pet.
    pub reason: String,
    /// Hours per day the pet would be left alone.
    pub hours_alone: u8,
}

/// A request by a user to adopt a specific pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionRequest {
    /// Canonical identifier. `None` indicates the request has not been
    /// persisted yet.
    pub request_id: Option<i64>,
    /// The pet this request targets.
    pub pet_id: i64,
    /// The applicant (owner of this record for access-control scoping).
    pub applicant_id: i64,
    /// Applicant-supplied application details.
    pub details: ApplicationDetails,
    /// Lifecycle status.
    pub status: AdoptionStatus,
}

impl AdoptionRequest {
    /// Creates a new `AdoptionRequest` in `Pending` status.
    ///
    /// Status is forced to `Pending` regardless of caller input; there is
    /// no way to construct an unpersisted request in any other state.
    #[must_use]
    pub const fn new(pet_id: i64, applicant_id: i64, details: ApplicationDetails) -> Self {
        Self {
            request_id: None,
            pet_id,
            applicant_id,
            details,
            status: AdoptionStatus::Pending,
        }
    }

    /// Creates an `AdoptionRequest` with an existing persisted id.
    #[must_use]
    pub const fn with_id(
        request_id: i64,
        pet_id: i64,
        applicant_id: i64,
        details: ApplicationDetails,
        status: AdoptionStatus,
    ) -> Self {
        Self {
            request_id: Some(request_id),
            pet_id,
            applicant_id,
            details,
            status,
        }
    }
}
