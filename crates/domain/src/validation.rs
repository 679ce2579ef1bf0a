// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation for boundary input.
//!
//! Validation is detected as early as possible and never mutates state;
//! errors are surfaced per-field.

use crate::adoption::ApplicationDetails;
use crate::error::DomainError;
use time::Date;
use time::format_description::well_known::Iso8601;

/// Maximum plausible value for the hours-alone application field.
const MAX_HOURS_ALONE: u8 = 24;

fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}

/// Validates the applicant-supplied fields on an adoption request.
///
/// All fields are required. The email must contain an '@' and
/// `hours_alone` must be a plausible number of hours in a day.
///
/// # Errors
///
/// Returns a per-field error for the first missing or malformed field.
pub fn validate_application(details: &ApplicationDetails) -> Result<(), DomainError> {
    require_non_empty("name", &details.name)?;
    require_non_empty("email", &details.email)?;
    require_non_empty("phone", &details.phone)?;
    require_non_empty("address", &details.address)?;
    require_non_empty("city", &details.city)?;
    require_non_empty("reason", &details.reason)?;

    if !details.email.contains('@') {
        return Err(DomainError::InvalidField {
            field: "email",
            reason: String::from("must contain '@'"),
        });
    }

    if details.hours_alone > MAX_HOURS_ALONE {
        return Err(DomainError::InvalidField {
            field: "hours_alone",
            reason: format!("must be at most {MAX_HOURS_ALONE}"),
        });
    }

    Ok(())
}

/// Validates a booking quantity.
///
/// # Errors
///
/// Returns an error if the quantity is zero.
pub const fn validate_quantity(qty: u32) -> Result<(), DomainError> {
    if qty == 0 {
        return Err(DomainError::InvalidQuantity { qty });
    }
    Ok(())
}

/// Validates a pre-resolved image reference for pet creation.
///
/// The registry never fetches or validates image bytes; it only requires
/// that the caller supplied a resolved reference string.
///
/// # Errors
///
/// Returns `DomainError::ImageRequired` if the reference is empty or
/// whitespace.
pub fn validate_image_ref(image_ref: &str) -> Result<(), DomainError> {
    if image_ref.trim().is_empty() {
        return Err(DomainError::ImageRequired);
    }
    Ok(())
}

/// Validates the required fields of a pet record.
///
/// # Errors
///
/// Returns a per-field error for the first missing field, or
/// `ImageRequired` if the image reference is absent.
pub fn validate_pet_fields(name: &str, location: &str, image_ref: &str) -> Result<(), DomainError> {
    require_non_empty("name", name)?;
    require_non_empty("location", location)?;
    validate_image_ref(image_ref)
}

/// Validates the required fields of a surrender submission.
///
/// # Errors
///
/// Returns a per-field error for the first missing field.
pub fn validate_surrender_fields(pet_description: &str, reason: &str) -> Result<(), DomainError> {
    require_non_empty("pet_description", pet_description)?;
    require_non_empty("reason", reason)
}

/// Parses an ISO 8601 date string.
///
/// # Errors
///
/// Returns a `DateParseError` carrying the original string if parsing
/// fails.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, &Iso8601::DEFAULT).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}
