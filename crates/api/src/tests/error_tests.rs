// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bookit::CoreError;
use bookit_domain::{DomainError, Slot};

use crate::{ApiError, translate_core_error, translate_domain_error};

#[test]
fn test_core_error_kinds_survive_translation() {
    let cases: Vec<CoreError> = vec![
        CoreError::Validation(DomainError::MissingField { field: "email" }),
        CoreError::ExperienceNotFound {
            experience_id: String::from("9"),
        },
        CoreError::SlotConflict {
            slot: Slot::new("1", "Oct 22", "09:00 am"),
        },
        CoreError::PromoNotFound {
            code: String::from("NOPE"),
        },
        CoreError::PriceMismatch {
            submitted: 1,
            expected: 998,
        },
        CoreError::ReferenceExhausted { attempts: 5 },
        CoreError::StoreUnavailable(String::from("timed out")),
        CoreError::Internal(String::from("boom")),
    ];

    for err in cases {
        let kind: &'static str = err.kind();
        assert_eq!(translate_core_error(err).kind(), kind);
    }
}

#[test]
fn test_missing_field_names_the_field() {
    let api_err: ApiError =
        translate_domain_error(DomainError::MissingField { field: "fullName" });

    assert_eq!(
        api_err,
        ApiError::InvalidInput {
            field: String::from("fullName"),
            message: String::from("Missing required field: fullName"),
        }
    );
}

#[test]
fn test_invalid_email_is_input_error() {
    let api_err: ApiError =
        translate_domain_error(DomainError::InvalidEmail(String::from("nope")));

    assert!(matches!(api_err, ApiError::InvalidInput { ref field, .. } if field == "email"));
}
