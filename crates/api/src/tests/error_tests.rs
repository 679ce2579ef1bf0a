// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use adoptnest_core::CoreError;
use adoptnest_domain::DomainError;

use crate::error::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_error_kinds_are_stable() {
    assert_eq!(
        ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("This field is required"),
        }
        .kind(),
        "validation_error"
    );
    assert_eq!(ApiError::ImageRequired.kind(), "image_required");
    assert_eq!(
        ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: String::from("Booking 9 does not exist"),
        }
        .kind(),
        "not_found"
    );
    assert_eq!(ApiError::PetNotFound { pet_id: 9 }.kind(), "pet_not_found");
    assert_eq!(
        ApiError::Forbidden {
            action: String::from("update booking"),
        }
        .kind(),
        "forbidden"
    );
    assert_eq!(
        ApiError::Conflict {
            message: String::from("pet 1 is Adopted"),
        }
        .kind(),
        "conflict"
    );
    assert_eq!(
        ApiError::AuthenticationFailed {
            reason: String::from("unknown role"),
        }
        .kind(),
        "authentication_failed"
    );
    assert_eq!(
        ApiError::Internal {
            message: String::from("database unavailable"),
        }
        .kind(),
        "internal"
    );
}

#[test]
fn test_missing_field_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::MissingField { field: "name" });
    match err {
        ApiError::InvalidInput { field, .. } => assert_eq!(field, "name"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_image_required_translates_directly() {
    let err: ApiError = translate_domain_error(DomainError::ImageRequired);
    assert_eq!(err, ApiError::ImageRequired);
}

#[test]
fn test_status_transition_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::InvalidStatusTransition {
        entity: "adoption request",
        from: "Rejected",
        to: "Approved",
    });
    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "status");
            assert!(message.contains("Rejected"));
            assert!(message.contains("Approved"));
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_date_parse_error_translates_to_date_field() {
    let err: ApiError = translate_domain_error(DomainError::DateParseError {
        date_string: String::from("next tuesday"),
        error: String::from("unexpected format"),
    });
    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "date");
            assert!(message.contains("next tuesday"));
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_core_pet_not_found_keeps_its_own_kind() {
    let err: ApiError = translate_core_error(CoreError::PetNotFound { pet_id: 42 });
    assert_eq!(err, ApiError::PetNotFound { pet_id: 42 });
    assert_eq!(err.kind(), "pet_not_found");
}

#[test]
fn test_core_not_found_carries_resource_and_id() {
    let err: ApiError = translate_core_error(CoreError::NotFound {
        resource: "Booking",
        id: 9,
    });
    match err {
        ApiError::ResourceNotFound {
            resource_type,
            message,
        } => {
            assert_eq!(resource_type, "Booking");
            assert!(message.contains('9'));
        }
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_core_forbidden_and_conflict_pass_through() {
    let forbidden: ApiError = translate_core_error(CoreError::Forbidden {
        action: String::from("cancel booking"),
    });
    assert_eq!(forbidden.kind(), "forbidden");

    let conflict: ApiError = translate_core_error(CoreError::Conflict {
        message: String::from("pet 1 is Adopted and cannot move to Adopted"),
    });
    assert_eq!(conflict.kind(), "conflict");
}

#[test]
fn test_storage_errors_surface_as_internal() {
    let err: ApiError = translate_core_error(CoreError::Storage(
        adoptnest_core::StoreError::Backend(String::from("disk full")),
    ));
    assert_eq!(err.kind(), "internal");
}
