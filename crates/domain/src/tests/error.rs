// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingField { field: "email" };
    assert_eq!(format!("{err}"), "Missing required field: email");

    let err: DomainError = DomainError::InvalidEmail(String::from("nope"));
    assert_eq!(format!("{err}"), "Invalid email address: 'nope'");

    let err: DomainError = DomainError::EmptyPromoCode;
    assert_eq!(format!("{err}"), "Promo code is required");

    let err: DomainError = DomainError::InvalidPromoRule {
        code: String::from("X"),
        reason: String::from("value must be positive"),
    };
    assert_eq!(format!("{err}"), "Invalid promo rule 'X': value must be positive");

    let err: DomainError = DomainError::InvalidExperience {
        experience_id: String::from("7"),
        reason: String::from("base price must be positive"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid experience '7': base price must be positive"
    );

    let err: DomainError = DomainError::InvalidReference(String::from("REF-x"));
    assert_eq!(format!("{err}"), "Invalid booking reference: 'REF-x'");

    let err: DomainError = DomainError::AmountOverflow {
        base_price: 10,
        tax: 20,
    };
    assert_eq!(
        format!("{err}"),
        "Amount overflow while pricing base price 10 with tax 20"
    );
}
