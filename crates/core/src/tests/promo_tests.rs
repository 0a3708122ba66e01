// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for promo code validation.

use bookit_domain::{DomainError, PromoKind, PromoRule};

use crate::{CatalogSeed, CoreError, StaticPromoDirectory, validate_promo};

fn create_test_directory() -> StaticPromoDirectory {
    CatalogSeed::builtin().into_parts().1
}

#[test]
fn test_validate_promo_accepts_known_code() {
    let directory: StaticPromoDirectory = create_test_directory();

    let rule: PromoRule = validate_promo(&directory, "SAVE10").unwrap();

    assert_eq!(rule.kind, PromoKind::Percentage);
    assert_eq!(rule.value, 10);
}

#[test]
fn test_validate_promo_trims_whitespace() {
    let directory: StaticPromoDirectory = create_test_directory();

    let rule: PromoRule = validate_promo(&directory, "  FLAT100 ").unwrap();

    assert_eq!(rule.kind, PromoKind::Fixed);
    assert_eq!(rule.value, 100);
}

#[test]
fn test_validate_promo_is_case_sensitive() {
    let directory: StaticPromoDirectory = create_test_directory();

    let result: Result<PromoRule, CoreError> = validate_promo(&directory, "save10");

    assert_eq!(
        result.unwrap_err(),
        CoreError::PromoNotFound {
            code: String::from("save10"),
        }
    );
}

#[test]
fn test_validate_promo_unknown_code() {
    let directory: StaticPromoDirectory = create_test_directory();

    let result: Result<PromoRule, CoreError> = validate_promo(&directory, "NOPE");

    let err: CoreError = result.unwrap_err();
    assert_eq!(err.kind(), "promo_not_found");
    assert_eq!(err.to_string(), "Invalid promo code 'NOPE'");
}

#[test]
fn test_validate_promo_blank_code() {
    let directory: StaticPromoDirectory = create_test_directory();

    let result: Result<PromoRule, CoreError> = validate_promo(&directory, "   ");

    assert_eq!(
        result.unwrap_err(),
        CoreError::Validation(DomainError::EmptyPromoCode)
    );
}

#[test]
fn test_validate_promo_against_empty_directory() {
    let directory: StaticPromoDirectory = StaticPromoDirectory::new(Vec::new());

    assert!(directory.is_empty());
    assert!(matches!(
        validate_promo(&directory, "SAVE10"),
        Err(CoreError::PromoNotFound { .. })
    ));
}
