// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for BookIt.
//!
//! Handlers here are transport-neutral: they take an engine and a request
//! DTO and return a response DTO or an [`ApiError`]. The HTTP server maps
//! `ApiError` onto status codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    create_booking, get_booking, get_experience, list_experiences, quote_booking, validate_promo,
};
pub use request_response::{
    AvailabilityInfo, BookedSlotInfo, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    ExperienceDetailResponse, ExperienceInfo, PromoDiscountInfo, QuoteRequest, QuoteResponse,
    ValidatePromoRequest, ValidatePromoResponse,
};
