// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Pet type string is not a recognized pet type.
    InvalidPetType(String),
    /// Age group string is not a recognized age group.
    InvalidAgeGroup(String),
    /// Pet status string is not a recognized pet status.
    InvalidPetStatus(String),
    /// Adoption request status string is not recognized.
    InvalidAdoptionStatus(String),
    /// Booking status string is not recognized.
    InvalidBookingStatus(String),
    /// Surrender status string is not recognized.
    InvalidSurrenderStatus(String),
    /// Service string is not in the service catalog.
    InvalidService(String),
    /// Role string is not a recognized actor role.
    InvalidRole(String),
    /// Pet creation requires a resolved image reference.
    ImageRequired,
    /// Booking quantity must be at least 1.
    InvalidQuantity {
        /// The invalid quantity value.
        qty: u32,
    },
    /// A required field is missing or empty.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A field is present but malformed.
    InvalidField {
        /// The name of the invalid field.
        field: &'static str,
        /// Description of why the field is invalid.
        reason: String,
    },
    /// A status transition that is not permitted by the lifecycle.
    InvalidStatusTransition {
        /// The entity whose lifecycle was violated.
        entity: &'static str,
        /// The current status.
        from: &'static str,
        /// The requested status.
        to: &'static str,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPetType(value) => write!(f, "Invalid pet type: '{value}'"),
            Self::InvalidAgeGroup(value) => write!(f, "Invalid age group: '{value}'"),
            Self::InvalidPetStatus(value) => write!(f, "Invalid pet status: '{value}'"),
            Self::InvalidAdoptionStatus(value) => {
                write!(f, "Invalid adoption request status: '{value}'")
            }
            Self::InvalidBookingStatus(value) => write!(f, "Invalid booking status: '{value}'"),
            Self::InvalidSurrenderStatus(value) => {
                write!(f, "Invalid surrender status: '{value}'")
            }
            Self::InvalidService(value) => write!(f, "Invalid service: '{value}'"),
            Self::InvalidRole(value) => write!(f, "Invalid role: '{value}'"),
            Self::ImageRequired => {
                write!(f, "Pet creation requires a resolved image reference")
            }
            Self::InvalidQuantity { qty } => {
                write!(f, "Invalid quantity: {qty}. Must be at least 1")
            }
            Self::MissingField { field } => write!(f, "Required field '{field}' is missing"),
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid field '{field}': {reason}")
            }
            Self::InvalidStatusTransition { entity, from, to } => {
                write!(f, "Illegal {entity} status transition: '{from}' -> '{to}'")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
