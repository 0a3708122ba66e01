// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod error;
mod pricing;
mod reference;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::Availability;
pub use error::DomainError;
pub use pricing::{MAX_AMOUNT, PriceBreakdown, compute_total};
pub use reference::{
    BookingReference, REFERENCE_PREFIX, REFERENCE_TOKEN_LEN, RandomReferenceGenerator,
    ReferenceGenerator,
};
pub use types::{Booking, BookingRequest, Experience, PromoKind, PromoRule, Slot};
pub use validation::{
    normalize_promo_code, validate_booking_request, validate_email, validate_experience,
    validate_promo_code_input, validate_promo_rule,
};
