// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bookit_domain::{DomainError, Slot};

/// Reasons a booking attempt or engine query can be rejected.
///
/// Every variant has a stable machine-readable [`CoreError::kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A required field is missing or malformed.
    Validation(DomainError),
    /// The experience id does not resolve in the catalog.
    ExperienceNotFound {
        /// The unknown experience id.
        experience_id: String,
    },
    /// The slot is already reserved. The caller must pick another slot.
    SlotConflict {
        /// The contested slot.
        slot: Slot,
    },
    /// The promo code is not in the directory.
    PromoNotFound {
        /// The unknown code.
        code: String,
    },
    /// The client-supplied total does not match the server-derived total.
    PriceMismatch {
        /// The amount the client submitted.
        submitted: u64,
        /// The amount the server computed.
        expected: u64,
    },
    /// Every reference candidate collided with an existing booking.
    ReferenceExhausted {
        /// How many candidates were tried.
        attempts: u32,
    },
    /// The booking store could not be reached in time. Safe to retry.
    StoreUnavailable(String),
    /// An unexpected internal failure.
    Internal(String),
}

impl CoreError {
    /// Returns the stable machine-readable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::ExperienceNotFound { .. } => "validation_error",
            Self::SlotConflict { .. } => "slot_conflict",
            Self::PromoNotFound { .. } => "promo_not_found",
            Self::PriceMismatch { .. } => "price_mismatch",
            Self::ReferenceExhausted { .. } => "reference_exhausted",
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation error: {err}"),
            Self::ExperienceNotFound { experience_id } => {
                write!(f, "Experience '{experience_id}' not found")
            }
            Self::SlotConflict { slot } => write!(f, "This slot is already booked: {slot}"),
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
            Self::ReferenceExhausted { attempts } => {
                write!(
                    f,
                    "Could not allocate a unique booking reference after {attempts} attempts"
                )
            }
            Self::StoreUnavailable(msg) => write!(f, "Booking store unavailable: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}
