// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use bookit::CoreError;
use bookit_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The requested slot is already booked.
    SlotConflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// The promo code is not known.
    PromoNotFound {
        /// The code that was looked up.
        code: String,
    },
    /// The submitted total does not match the server-derived total.
    PriceMismatch {
        /// The amount the client submitted.
        submitted: u64,
        /// The amount the server computed.
        expected: u64,
    },
    /// No unique booking reference could be allocated.
    ReferenceExhausted {
        /// A description for operators.
        message: String,
    },
    /// The booking store is temporarily unavailable.
    StoreUnavailable {
        /// A description of the outage.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable machine-readable kind reported to clients.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "validation_error",
            Self::ResourceNotFound { .. } => "not_found",
            Self::SlotConflict { .. } => "slot_conflict",
            Self::PromoNotFound { .. } => "promo_not_found",
            Self::PriceMismatch { .. } => "price_mismatch",
            Self::ReferenceExhausted { .. } => "reference_exhausted",
            Self::StoreUnavailable { .. } => "store_unavailable",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::SlotConflict { message }
            | Self::ReferenceExhausted { message }
            | Self::StoreUnavailable { message } => write!(f, "{message}"),
            Self::PromoNotFound { code } => write!(f, "Invalid promo code '{code}'"),
            Self::PriceMismatch {
                submitted,
                expected,
            } => {
                write!(
                    f,
                    "Submitted total {submitted} does not match computed total {expected}"
                )
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::MissingField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("Missing required field: {field}"),
        },
        DomainError::InvalidEmail(email) => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{email}' is not a valid email address"),
        },
        DomainError::EmptyPromoCode => ApiError::InvalidInput {
            field: String::from("code"),
            message: String::from("Promo code is required"),
        },
        DomainError::InvalidReference(value) => ApiError::InvalidInput {
            field: String::from("reference"),
            message: format!("'{value}' is not a booking reference"),
        },
        DomainError::AmountOverflow { .. } => ApiError::InvalidInput {
            field: String::from("totalAmount"),
            message: err.to_string(),
        },
        DomainError::InvalidPromoRule { .. } | DomainError::InvalidExperience { .. } => {
            ApiError::Internal {
                message: err.to_string(),
            }
        }
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Validation(domain_err) => translate_domain_error(domain_err),
        CoreError::ExperienceNotFound { experience_id } => ApiError::InvalidInput {
            field: String::from("experienceId"),
            message: format!("Experience '{experience_id}' does not exist"),
        },
        CoreError::SlotConflict { .. } => ApiError::SlotConflict {
            message: err.to_string(),
        },
        CoreError::PromoNotFound { code } => ApiError::PromoNotFound { code },
        CoreError::PriceMismatch {
            submitted,
            expected,
        } => ApiError::PriceMismatch {
            submitted,
            expected,
        },
        CoreError::ReferenceExhausted { .. } => ApiError::ReferenceExhausted {
            message: err.to_string(),
        },
        CoreError::StoreUnavailable(_) => ApiError::StoreUnavailable {
            message: err.to_string(),
        },
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}
