// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Domain and core errors are never leaked directly to callers; every
//! error is translated into an `ApiError` carrying a stable machine
//! kind. HTTP status mapping happens in the server layer keyed on the
//! kind, so the strings here are part of the wire contract.

use adoptnest_core::CoreError;
use adoptnest_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A pet record requires an image reference.
    ImageRequired,
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A referenced pet was not found.
    PetNotFound {
        /// The requested pet id.
        pet_id: i64,
    },
    /// The actor does not have permission for the attempted action.
    Forbidden {
        /// The action that was attempted.
        action: String,
    },
    /// The operation lost a concurrency race.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable machine kind for this error.
    ///
    /// The server layer maps kinds to HTTP statuses; clients may branch
    /// on them. These strings are a wire contract and must not change.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "validation_error",
            Self::ImageRequired => "image_required",
            Self::ResourceNotFound { .. } => "not_found",
            Self::PetNotFound { .. } => "pet_not_found",
            Self::Forbidden { .. } => "forbidden",
            Self::Conflict { .. } => "conflict",
            Self::AuthenticationFailed { .. } => "authentication_failed",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ImageRequired => {
                write!(f, "A pet image is required")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PetNotFound { pet_id } => {
                write!(f, "Pet not found: {pet_id}")
            }
            Self::Forbidden { action } => {
                write!(f, "Forbidden: '{action}' is not permitted for this actor")
            }
            Self::Conflict { message } => {
                write!(f, "Conflict: {message}")
            }
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized { action, .. } => Self::Forbidden { action },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPetType(msg) => ApiError::InvalidInput {
            field: String::from("pet_type"),
            message: format!("Invalid pet type: {msg}"),
        },
        DomainError::InvalidAgeGroup(msg) => ApiError::InvalidInput {
            field: String::from("age_group"),
            message: format!("Invalid age group: {msg}"),
        },
        DomainError::InvalidPetStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid pet status: {msg}"),
        },
        DomainError::InvalidAdoptionStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid adoption status: {msg}"),
        },
        DomainError::InvalidBookingStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid booking status: {msg}"),
        },
        DomainError::InvalidSurrenderStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid surrender status: {msg}"),
        },
        DomainError::InvalidService(msg) => ApiError::InvalidInput {
            field: String::from("service"),
            message: format!("Invalid service: {msg}"),
        },
        DomainError::InvalidRole(msg) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Invalid role: {msg}"),
        },
        DomainError::ImageRequired => ApiError::ImageRequired,
        DomainError::InvalidQuantity { qty } => ApiError::InvalidInput {
            field: String::from("qty"),
            message: format!("Invalid quantity: {qty}. Must be at least 1"),
        },
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: String::from(field),
            message: String::from("This field is required"),
        },
        DomainError::InvalidField { field, reason } => ApiError::InvalidInput {
            field: String::from(field),
            message: reason,
        },
        DomainError::InvalidStatusTransition { entity, from, to } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Cannot transition {entity} from {from} to {to}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a core workflow error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
        CoreError::Forbidden { action } => ApiError::Forbidden { action },
        CoreError::NotFound { resource, id } => ApiError::ResourceNotFound {
            resource_type: String::from(resource),
            message: format!("{resource} {id} does not exist"),
        },
        CoreError::PetNotFound { pet_id } => ApiError::PetNotFound { pet_id },
        CoreError::Conflict { message } => ApiError::Conflict { message },
        CoreError::Storage(storage_error) => ApiError::Internal {
            message: storage_error.to_string(),
        },
    }
}
