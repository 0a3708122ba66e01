// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::pricing::MAX_AMOUNT;
use crate::types::{BookingRequest, Experience, PromoKind, PromoRule};

/// Validates the required fields of a booking request.
///
/// This checks presence and shape only. It does NOT check that the
/// experience exists or that the slot is free (that requires context).
///
/// # Arguments
///
/// * `request` - The booking request to validate
///
/// # Errors
///
/// Returns an error if:
/// - Any of experience id, date, time, full name or email is blank
/// - The email is malformed
pub fn validate_booking_request(request: &BookingRequest) -> Result<(), DomainError> {
    let required: [(&'static str, &str); 5] = [
        ("experienceId", &request.experience_id),
        ("date", &request.date),
        ("time", &request.time),
        ("fullName", &request.full_name),
        ("email", &request.email),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DomainError::MissingField { field });
        }
    }

    validate_email(request.email.trim())
}

/// Validates the shape of an email address.
///
/// Exactly one `@`, with non-empty local and domain parts and no
/// embedded whitespace.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let mut parts = email.split('@');
    let local: &str = parts.next().unwrap_or_default();
    let domain: &str = parts.next().unwrap_or_default();

    let well_formed: bool = parts.next().is_none()
        && !local.is_empty()
        && !domain.is_empty()
        && !email.chars().any(char::is_whitespace);

    if !well_formed {
        return Err(DomainError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validates a promo code typed by a user.
///
/// Returns the code with surrounding whitespace removed. Case is preserved;
/// lookups are case-sensitive.
///
/// # Errors
///
/// Returns `DomainError::EmptyPromoCode` if the code is empty or whitespace.
pub fn validate_promo_code_input(code: &str) -> Result<&str, DomainError> {
    let trimmed: &str = code.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyPromoCode);
    }
    Ok(trimmed)
}

/// Normalizes an optional promo code on a booking.
///
/// Blank codes are treated as absent.
#[must_use]
pub fn normalize_promo_code(code: Option<&str>) -> Option<&str> {
    code.and_then(|c| validate_promo_code_input(c).ok())
}

/// Validates a promo rule's own constraints.
///
/// # Errors
///
/// Returns `DomainError::InvalidPromoRule` if the code is blank or padded
/// with whitespace, the value is zero, or a percentage exceeds 100.
pub fn validate_promo_rule(rule: &PromoRule) -> Result<(), DomainError> {
    let reason: Option<&str> = if rule.code.trim().is_empty() {
        Some("code cannot be empty")
    } else if rule.code.trim() != rule.code {
        Some("code cannot start or end with whitespace")
    } else if rule.value == 0 {
        Some("value must be positive")
    } else if rule.kind == PromoKind::Percentage && rule.value > 100 {
        Some("percentage must be between 1 and 100")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidPromoRule {
            code: rule.code.clone(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates an experience record loaded into the catalog.
///
/// # Errors
///
/// Returns `DomainError::InvalidExperience` if the id or title is blank or
/// the base price is zero or above [`MAX_AMOUNT`].
pub fn validate_experience(experience: &Experience) -> Result<(), DomainError> {
    let reason: Option<&str> = if experience.id.trim().is_empty() {
        Some("id cannot be empty")
    } else if experience.title.trim().is_empty() {
        Some("title cannot be empty")
    } else if experience.base_price == 0 {
        Some("base price must be positive")
    } else if experience.base_price > MAX_AMOUNT {
        Some("base price is too large")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidExperience {
            experience_id: experience.id.clone(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
