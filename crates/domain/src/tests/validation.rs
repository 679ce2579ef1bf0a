// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApplicationDetails, DomainError, parse_date, validate_application, validate_image_ref,
    validate_pet_fields, validate_quantity, validate_surrender_fields,
};

fn valid_details() -> ApplicationDetails {
    ApplicationDetails {
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: String::from("555-0101"),
        address: String::from("12 Elm Street"),
        city: String::from("Springfield"),
        reason: String::from("Always wanted a dog"),
        hours_alone: 4,
    }
}

#[test]
fn test_valid_application_passes() {
    assert!(validate_application(&valid_details()).is_ok());
}

#[test]
fn test_missing_name_is_per_field_error() {
    let mut details: ApplicationDetails = valid_details();
    details.name = String::from("   ");
    assert_eq!(
        validate_application(&details),
        Err(DomainError::MissingField { field: "name" })
    );
}

#[test]
fn test_missing_reason_is_per_field_error() {
    let mut details: ApplicationDetails = valid_details();
    details.reason = String::new();
    assert_eq!(
        validate_application(&details),
        Err(DomainError::MissingField { field: "reason" })
    );
}

#[test]
fn test_email_without_at_sign_rejected() {
    let mut details: ApplicationDetails = valid_details();
    details.email = String::from("jane.example.com");
    let result: Result<(), DomainError> = validate_application(&details);
    assert!(matches!(
        result,
        Err(DomainError::InvalidField { field: "email", .. })
    ));
}

#[test]
fn test_implausible_hours_alone_rejected() {
    let mut details: ApplicationDetails = valid_details();
    details.hours_alone = 25;
    let result: Result<(), DomainError> = validate_application(&details);
    assert!(matches!(
        result,
        Err(DomainError::InvalidField {
            field: "hours_alone",
            ..
        })
    ));
}

#[test]
fn test_zero_quantity_rejected() {
    assert_eq!(
        validate_quantity(0),
        Err(DomainError::InvalidQuantity { qty: 0 })
    );
    assert!(validate_quantity(1).is_ok());
}

#[test]
fn test_blank_image_ref_is_image_required() {
    assert_eq!(validate_image_ref("  "), Err(DomainError::ImageRequired));
    assert_eq!(validate_image_ref(""), Err(DomainError::ImageRequired));
    assert!(validate_image_ref("https://cdn.example.com/a.jpg").is_ok());
}

#[test]
fn test_pet_fields_require_image() {
    assert_eq!(
        validate_pet_fields("Rex", "Springfield", ""),
        Err(DomainError::ImageRequired)
    );
}

#[test]
fn test_pet_fields_require_name_before_image() {
    assert_eq!(
        validate_pet_fields("", "Springfield", ""),
        Err(DomainError::MissingField { field: "name" })
    );
}

#[test]
fn test_surrender_fields_required() {
    assert!(validate_surrender_fields("A brown terrier", "Moving abroad").is_ok());
    assert_eq!(
        validate_surrender_fields("", "Moving abroad"),
        Err(DomainError::MissingField {
            field: "pet_description"
        })
    );
}

#[test]
fn test_parse_date_accepts_iso_8601() {
    let date: time::Date = parse_date("2026-03-14").unwrap();
    assert_eq!(date.year(), 2026);
    assert_eq!(u8::from(date.month()), 3);
    assert_eq!(date.day(), 14);
}

#[test]
fn test_parse_date_rejects_garbage() {
    let result = parse_date("not-a-date");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}
