// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use crate::{
    BookingReference, DomainError, REFERENCE_PREFIX, REFERENCE_TOKEN_LEN,
    RandomReferenceGenerator, ReferenceGenerator,
};

fn is_reference_shaped(value: &str) -> bool {
    value.strip_prefix("REF-").is_some_and(|token| {
        token.len() >= 6
            && token
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    })
}

#[test]
fn test_generated_reference_has_expected_shape() {
    let mut generator: RandomReferenceGenerator = RandomReferenceGenerator;
    let reference: BookingReference = generator.generate();

    assert!(reference.as_str().starts_with(REFERENCE_PREFIX));
    assert_eq!(
        reference.as_str().len(),
        REFERENCE_PREFIX.len() + REFERENCE_TOKEN_LEN
    );
    assert!(is_reference_shaped(reference.as_str()));
}

#[test]
fn test_generated_references_rarely_collide() {
    let mut generator: RandomReferenceGenerator = RandomReferenceGenerator;
    let references: HashSet<BookingReference> = (0..1000).map(|_| generator.generate()).collect();
    assert_eq!(references.len(), 1000);
}

#[test]
fn test_parse_accepts_valid_reference() {
    let reference: BookingReference = BookingReference::parse("REF-ABC123").unwrap();
    assert_eq!(reference.as_str(), "REF-ABC123");
    assert_eq!(reference.to_string(), "REF-ABC123");
}

#[test]
fn test_parse_rejects_malformed_references() {
    for value in ["", "REF-", "REF-ABC12", "ref-ABCDEF", "REF-abcdef", "REF-ABC DEF", "XYZ-ABCDEF"] {
        let result: Result<BookingReference, DomainError> = BookingReference::parse(value);
        assert_eq!(
            result,
            Err(DomainError::InvalidReference(value.to_string())),
            "expected {value:?} to be rejected"
        );
    }
}

#[test]
fn test_reference_serializes_as_plain_string() {
    let reference: BookingReference = BookingReference::parse("REF-QWERTY12").unwrap();
    let json: String = serde_json::to_string(&reference).unwrap();
    assert_eq!(json, "\"REF-QWERTY12\"");

    let parsed: BookingReference = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reference);
}

#[test]
fn test_deserialize_rejects_malformed_reference() {
    let result: Result<BookingReference, serde_json::Error> = serde_json::from_str("\"NOPE\"");
    assert!(result.is_err());
}
