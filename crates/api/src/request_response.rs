// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Wire names are camelCase. Request fields that the engine validates are
//! defaulted so that a missing field is reported as a validation error
//! naming the field rather than as a body parse failure.

use bookit_domain::{Booking, BookingRequest, Experience, PromoRule, Slot};
use serde::{Deserialize, Serialize};

/// API request to validate a promo code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatePromoRequest {
    /// The code typed by the customer.
    #[serde(default)]
    pub code: Option<String>,
}

/// The discount carried by a promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoDiscountInfo {
    /// `percentage` or `fixed`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Percent (1-100) or amount in currency units.
    pub value: u64,
}

impl From<&PromoRule> for PromoDiscountInfo {
    fn from(rule: &PromoRule) -> Self {
        Self {
            kind: rule.kind.as_str().to_string(),
            value: rule.value,
        }
    }
}

/// API response for a valid promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatePromoResponse {
    /// Always `true`; unknown codes are reported as errors.
    pub valid: bool,
    /// The code as stored.
    pub code: String,
    /// The discount the code grants.
    pub discount: PromoDiscountInfo,
}

/// API request to price an experience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// The experience to price.
    #[serde(default)]
    pub experience_id: String,
    /// Optional promo code.
    #[serde(default)]
    pub promo_code: Option<String>,
}

/// API response with an itemised price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// The priced experience.
    pub experience_id: String,
    /// Base price.
    pub subtotal: u64,
    /// Discount taken off the subtotal.
    pub discount: u64,
    /// Flat tax.
    pub tax: u64,
    /// Amount payable.
    pub total: u64,
    /// Whether the promo code was applied.
    pub promo_applied: bool,
}

/// API request to create a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// The experience to reserve.
    #[serde(default)]
    pub experience_id: String,
    /// Calendar-day token.
    #[serde(default)]
    pub date: String,
    /// Time-of-day token.
    #[serde(default)]
    pub time: String,
    /// Customer full name.
    #[serde(default)]
    pub full_name: String,
    /// Customer email.
    #[serde(default)]
    pub email: String,
    /// Optional promo code.
    #[serde(default)]
    pub promo_code: Option<String>,
    /// Total the client computed. Verified against the server total.
    #[serde(default)]
    pub total_amount: Option<u64>,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(request: CreateBookingRequest) -> Self {
        Self {
            experience_id: request.experience_id,
            date: request.date,
            time: request.time,
            full_name: request.full_name,
            email: request.email,
            promo_code: request.promo_code,
            total_amount: request.total_amount,
        }
    }
}

/// API response for a confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    /// A success message.
    pub message: String,
    /// The unique booking reference.
    pub booking_reference: String,
    /// The amount charged.
    pub total_amount: u64,
    /// Whether a promo discount was applied.
    pub promo_applied: bool,
}

/// Summary of a bookable experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceInfo {
    /// Experience identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Base price.
    pub price: u64,
    /// Short description.
    pub description: String,
    /// Location.
    pub location: String,
    /// Browsing category.
    pub category: String,
}

impl From<&Experience> for ExperienceInfo {
    fn from(experience: &Experience) -> Self {
        Self {
            id: experience.id.clone(),
            title: experience.title.clone(),
            price: experience.base_price,
            description: experience.description.clone(),
            location: experience.location.clone(),
            category: experience.category.clone(),
        }
    }
}

/// A slot that is already booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedSlotInfo {
    /// Calendar-day token.
    pub date: String,
    /// Time-of-day token.
    pub time: String,
}

impl From<Slot> for BookedSlotInfo {
    fn from(slot: Slot) -> Self {
        Self {
            date: slot.date,
            time: slot.time,
        }
    }
}

/// Offered dates and times of an experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityInfo {
    /// Offered dates.
    pub dates: Vec<String>,
    /// Offered times.
    pub times: Vec<String>,
    /// Slots that can no longer be booked.
    pub booked: Vec<BookedSlotInfo>,
}

/// API response with an experience and its availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceDetailResponse {
    #[serde(flatten)]
    pub experience: ExperienceInfo,
    pub availability: AvailabilityInfo,
}

/// A persisted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub booking_reference: String,
    pub experience_id: String,
    pub date: String,
    pub time: String,
    pub full_name: String,
    pub email: String,
    pub promo_code: Option<String>,
    pub total_amount: u64,
    pub created_at: String,
}

impl From<Booking> for BookingInfo {
    fn from(booking: Booking) -> Self {
        Self {
            booking_reference: booking.reference.into(),
            experience_id: booking.slot.experience_id,
            date: booking.slot.date,
            time: booking.slot.time,
            full_name: booking.full_name,
            email: booking.email,
            promo_code: booking.promo_code,
            total_amount: booking.total_amount,
            created_at: booking.created_at,
        }
    }
}
