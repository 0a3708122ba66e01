// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or blank.
    MissingField {
        /// The wire name of the missing field.
        field: &'static str,
    },
    /// The customer email is malformed.
    InvalidEmail(String),
    /// A promo code was supplied but is empty or whitespace.
    EmptyPromoCode,
    /// A promo rule violates its own constraints.
    InvalidPromoRule {
        /// The promo code of the offending rule.
        code: String,
        /// Why the rule is invalid.
        reason: String,
    },
    /// An experience record violates its own constraints.
    InvalidExperience {
        /// The experience identifier.
        experience_id: String,
        /// Why the experience is invalid.
        reason: String,
    },
    /// A booking reference does not have the expected shape.
    InvalidReference(String),
    /// The computed amount does not fit into the currency type.
    AmountOverflow {
        /// The base price that was being priced.
        base_price: u64,
        /// The flat tax that was being added.
        tax: u64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Missing required field: {field}"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{email}'"),
            Self::EmptyPromoCode => write!(f, "Promo code is required"),
            Self::InvalidPromoRule { code, reason } => {
                write!(f, "Invalid promo rule '{code}': {reason}")
            }
            Self::InvalidExperience {
                experience_id,
                reason,
            } => {
                write!(f, "Invalid experience '{experience_id}': {reason}")
            }
            Self::InvalidReference(value) => {
                write!(f, "Invalid booking reference: '{value}'")
            }
            Self::AmountOverflow { base_price, tax } => {
                write!(
                    f,
                    "Amount overflow while pricing base price {base_price} with tax {tax}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
