// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingRequest, DomainError, Experience, MAX_AMOUNT, PromoKind, PromoRule,
    normalize_promo_code, validate_booking_request, validate_email, validate_experience,
    validate_promo_code_input, validate_promo_rule,
};

fn create_test_request() -> BookingRequest {
    BookingRequest {
        experience_id: String::from("1"),
        date: String::from("Oct 22"),
        time: String::from("09:00 am"),
        full_name: String::from("Asha Rao"),
        email: String::from("asha@example.com"),
        promo_code: None,
        total_amount: None,
    }
}

#[test]
fn test_validate_booking_request_accepts_valid_request() {
    let request: BookingRequest = create_test_request();
    assert_eq!(validate_booking_request(&request), Ok(()));
}

#[test]
fn test_validate_booking_request_reports_each_missing_field() {
    let cases: [(&'static str, fn(&mut BookingRequest)); 5] = [
        ("experienceId", |r| r.experience_id.clear()),
        ("date", |r| r.date = String::from("   ")),
        ("time", |r| r.time.clear()),
        ("fullName", |r| r.full_name = String::from("\t")),
        ("email", |r| r.email.clear()),
    ];

    for (field, blank) in cases {
        let mut request: BookingRequest = create_test_request();
        blank(&mut request);
        let result: Result<(), DomainError> = validate_booking_request(&request);
        assert_eq!(result, Err(DomainError::MissingField { field }));
    }
}

#[test]
fn test_validate_booking_request_rejects_malformed_email() {
    let mut request: BookingRequest = create_test_request();
    request.email = String::from("not-an-email");
    let result: Result<(), DomainError> = validate_booking_request(&request);
    assert!(matches!(result, Err(DomainError::InvalidEmail(_))));
}

#[test]
fn test_validate_email_cases() {
    assert!(validate_email("a@b").is_ok());
    assert!(validate_email("first.last@example.co.in").is_ok());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("someone@").is_err());
    assert!(validate_email("a@b@c").is_err());
    assert!(validate_email("a b@c.com").is_err());
}

#[test]
fn test_validate_promo_code_input_trims_and_preserves_case() {
    assert_eq!(validate_promo_code_input("  Save10 "), Ok("Save10"));
    assert_eq!(
        validate_promo_code_input("   "),
        Err(DomainError::EmptyPromoCode)
    );
    assert_eq!(validate_promo_code_input(""), Err(DomainError::EmptyPromoCode));
}

#[test]
fn test_normalize_promo_code_treats_blank_as_absent() {
    assert_eq!(normalize_promo_code(None), None);
    assert_eq!(normalize_promo_code(Some("  ")), None);
    assert_eq!(normalize_promo_code(Some(" SAVE10")), Some("SAVE10"));
}

#[test]
fn test_validate_experience() {
    let valid: Experience = Experience::new("1", "Kayaking", 899, "", "Goa", "Water");
    assert!(validate_experience(&valid).is_ok());

    let free: Experience = Experience::new("9", "Free walk", 0, "", "Goa", "Walks");
    assert!(matches!(
        validate_experience(&free),
        Err(DomainError::InvalidExperience { experience_id, .. }) if experience_id == "9"
    ));

    let untitled: Experience = Experience::new("8", " ", 100, "", "Goa", "Walks");
    assert!(validate_experience(&untitled).is_err());
}

#[test]
fn test_validate_experience_rejects_unstorable_price() {
    let at_limit: Experience = Experience::new("1", "Kayaking", MAX_AMOUNT, "", "Goa", "Water");
    assert!(validate_experience(&at_limit).is_ok());

    let too_large: Experience =
        Experience::new("2", "Yacht", MAX_AMOUNT + 1, "", "Goa", "Water");
    assert!(matches!(
        validate_experience(&too_large),
        Err(DomainError::InvalidExperience { experience_id, .. }) if experience_id == "2"
    ));
}

#[test]
fn test_validate_promo_rule_rejects_padded_code() {
    for code in [" SAVE10", "SAVE10 ", "\tSAVE10"] {
        let rule: PromoRule = PromoRule {
            code: code.to_string(),
            kind: PromoKind::Percentage,
            value: 10,
        };
        assert!(matches!(
            validate_promo_rule(&rule),
            Err(DomainError::InvalidPromoRule { .. })
        ));
    }

    assert!(PromoRule::fixed(" FLAT100", 100).is_err());
    assert!(PromoRule::fixed("FLAT100", 100).is_ok());
}
