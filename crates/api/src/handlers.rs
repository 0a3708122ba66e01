// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler runs one engine or storefront operation and converts the outcome into
//! the wire representation. Handlers never log customer names or emails.

use bookit::{
    BookingEngine, BookingStore, Confirmation, ExperienceCatalog, PromoDirectory, Quote,
    Storefront,
};
use bookit_domain::{
    Availability, Booking, BookingReference, BookingRequest, PromoRule, ReferenceGenerator, Slot,
};
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AvailabilityInfo, BookedSlotInfo, BookingInfo, CreateBookingRequest, CreateBookingResponse,
    ExperienceDetailResponse, ExperienceInfo, PromoDiscountInfo, QuoteRequest, QuoteResponse,
    ValidatePromoRequest, ValidatePromoResponse,
};

/// Validates a promo code.
///
/// Read-only; never touches the booking store.
///
/// # Arguments
///
/// * `storefront` - The catalog and promo directory
/// * `request` - The validate promo request
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the code is missing or blank and
/// `ApiError::PromoNotFound` if it is unknown.
pub fn validate_promo<C, P>(
    storefront: &Storefront<C, P>,
    request: &ValidatePromoRequest,
) -> Result<ValidatePromoResponse, ApiError>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
{
    let code: &str = request.code.as_deref().unwrap_or_default();
    let rule: PromoRule = storefront.validate_promo(code).map_err(translate_core_error)?;

    Ok(ValidatePromoResponse {
        valid: true,
        discount: PromoDiscountInfo::from(&rule),
        code: rule.code,
    })
}

/// Prices an experience with an optional promo code.
///
/// An unknown promo code is not an error here: the quote is returned
/// without a discount and `promoApplied` is `false`, exactly as the
/// booking would be charged.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the experience is missing or unknown.
pub fn quote_booking<C, P>(
    storefront: &Storefront<C, P>,
    request: &QuoteRequest,
) -> Result<QuoteResponse, ApiError>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
{
    if request.experience_id.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("experienceId"),
            message: String::from("Missing required field: experienceId"),
        });
    }

    let quote: Quote = storefront
        .quote(&request.experience_id, request.promo_code.as_deref())
        .map_err(translate_core_error)?;

    debug!(
        experience_id = %quote.experience_id,
        total = quote.price.total,
        "Quoted experience"
    );

    Ok(QuoteResponse {
        experience_id: quote.experience_id,
        subtotal: quote.price.subtotal,
        discount: quote.price.discount,
        tax: quote.price.tax,
        total: quote.price.total,
        promo_applied: quote.applied_promo.is_some(),
    })
}

/// Creates a booking.
///
/// # Errors
///
/// Returns an error if:
/// - A required field is missing or malformed
/// - The slot is already booked
/// - The submitted total does not match the server total
/// - No unique reference could be allocated
/// - The store is unavailable
pub fn create_booking<C, P, S, G>(
    engine: &mut BookingEngine<C, P, S, G>,
    request: CreateBookingRequest,
) -> Result<CreateBookingResponse, ApiError>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
    S: BookingStore,
    G: ReferenceGenerator,
{
    let booking_request: BookingRequest = request.into();
    let confirmation: Confirmation = engine
        .reserve(&booking_request)
        .map_err(translate_core_error)?;

    info!(
        reference = %confirmation.booking.reference,
        total = confirmation.booking.total_amount,
        promo_applied = confirmation.promo_applied,
        "Booking created"
    );

    Ok(CreateBookingResponse {
        message: String::from("Booking confirmed"),
        booking_reference: confirmation.booking.reference.into(),
        total_amount: confirmation.booking.total_amount,
        promo_applied: confirmation.promo_applied,
    })
}

/// Lists every experience in catalog order.
///
/// This operation never fails.
#[must_use]
pub fn list_experiences<C, P>(storefront: &Storefront<C, P>) -> Vec<ExperienceInfo>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
{
    storefront
        .experiences()
        .iter()
        .map(ExperienceInfo::from)
        .collect()
}

/// Returns one experience with its slot grid and the slots already booked.
///
/// # Arguments
///
/// * `engine` - The booking engine
/// * `experience_id` - The experience to show
/// * `availability` - The offered slot grid
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` for an unknown experience and
/// `ApiError::StoreUnavailable` if booked slots cannot be read.
pub fn get_experience<C, P, S, G>(
    engine: &mut BookingEngine<C, P, S, G>,
    experience_id: &str,
    availability: &Availability,
) -> Result<ExperienceDetailResponse, ApiError>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
    S: BookingStore,
    G: ReferenceGenerator,
{
    let experience: ExperienceInfo = engine
        .find_experience(experience_id)
        .map(ExperienceInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Experience"),
            message: format!("Experience '{experience_id}' does not exist"),
        })?;

    let booked: Vec<Slot> = engine
        .booked_slots(&experience.id)
        .map_err(translate_core_error)?;

    Ok(ExperienceDetailResponse {
        experience,
        availability: AvailabilityInfo {
            dates: availability.dates.clone(),
            times: availability.times.clone(),
            booked: booked.into_iter().map(BookedSlotInfo::from).collect(),
        },
    })
}

/// Looks up a booking by its reference.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for a malformed reference,
/// `ApiError::ResourceNotFound` if no booking has it, and
/// `ApiError::StoreUnavailable` if the store cannot be read.
pub fn get_booking<C, P, S, G>(
    engine: &mut BookingEngine<C, P, S, G>,
    reference: &str,
) -> Result<BookingInfo, ApiError>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
    S: BookingStore,
    G: ReferenceGenerator,
{
    let reference: BookingReference =
        BookingReference::parse(reference.trim()).map_err(translate_domain_error)?;

    let booking: Option<Booking> = engine
        .find_booking(&reference)
        .map_err(translate_core_error)?;

    booking
        .map(BookingInfo::from)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("No booking with reference {reference}"),
        })
}
