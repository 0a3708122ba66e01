// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::reference::BookingReference;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A bookable activity with a fixed base price.
///
/// Experiences are owned by the catalog and are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Stable, unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Base price in whole currency units. Always positive.
    pub base_price: u64,
    /// Short description.
    pub description: String,
    /// Where the experience takes place.
    pub location: String,
    /// Category used for browsing.
    pub category: String,
}

impl Experience {
    /// Creates a new `Experience`.
    ///
    /// # Arguments
    ///
    /// * `id` - The stable identifier
    /// * `title` - The display title
    /// * `base_price` - The base price in currency units
    /// * `description` - A short description
    /// * `location` - Where the experience takes place
    /// * `category` - The browsing category
    #[must_use]
    pub fn new(
        id: &str,
        title: &str,
        base_price: u64,
        description: &str,
        location: &str,
        category: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            base_price,
            description: description.to_string(),
            location: location.to_string(),
            category: category.to_string(),
        }
    }
}

/// How a promo rule reduces the subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoKind {
    /// A percentage of the subtotal, 0 to 100.
    Percentage,
    /// A fixed amount in currency units.
    Fixed,
}

impl PromoKind {
    /// Converts this kind to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

impl FromStr for PromoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            _ => Err(format!("unknown promo kind '{s}'")),
        }
    }
}

impl std::fmt::Display for PromoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A discount rule keyed by a case-sensitive code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoRule {
    /// The code exactly as stored.
    pub code: String,
    /// Percentage or fixed amount.
    pub kind: PromoKind,
    /// Positive value. At most 100 for percentage rules.
    pub value: u64,
}

impl PromoRule {
    /// Creates a validated `PromoRule`.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is blank, the value is zero, or a
    /// percentage value exceeds 100.
    pub fn new(code: &str, kind: PromoKind, value: u64) -> Result<Self, DomainError> {
        let rule: Self = Self {
            code: code.to_string(),
            kind,
            value,
        };
        crate::validation::validate_promo_rule(&rule)?;
        Ok(rule)
    }

    /// Creates a percentage rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule is invalid.
    pub fn percentage(code: &str, percent: u64) -> Result<Self, DomainError> {
        Self::new(code, PromoKind::Percentage, percent)
    }

    /// Creates a fixed-amount rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule is invalid.
    pub fn fixed(code: &str, amount: u64) -> Result<Self, DomainError> {
        Self::new(code, PromoKind::Fixed, amount)
    }
}

/// A reservable `(experience, date, time)` triple.
///
/// Date and time are opaque tokens; no calendar semantics are applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// The experience being reserved.
    pub experience_id: String,
    /// Calendar-day token, e.g. `Oct 22`.
    pub date: String,
    /// Time-of-day token, e.g. `09:00 am`.
    pub time: String,
}

impl Slot {
    /// Creates a new `Slot`.
    #[must_use]
    pub fn new(experience_id: &str, date: &str, time: &str) -> Self {
        Self {
            experience_id: experience_id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {} at {}", self.experience_id, self.date, self.time)
    }
}

/// An incoming booking attempt, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The experience to reserve.
    pub experience_id: String,
    /// Calendar-day token.
    pub date: String,
    /// Time-of-day token.
    pub time: String,
    /// Customer full name.
    pub full_name: String,
    /// Customer email.
    pub email: String,
    /// Promo code the customer applied, if any.
    pub promo_code: Option<String>,
    /// Total the client computed, if supplied. Verified, never trusted.
    pub total_amount: Option<u64>,
}

impl BookingRequest {
    /// Returns the requested slot with surrounding whitespace removed.
    #[must_use]
    pub fn slot(&self) -> Slot {
        Slot::new(
            self.experience_id.trim(),
            self.date.trim(),
            self.time.trim(),
        )
    }
}

/// A confirmed reservation.
///
/// Created exactly once on a successful reservation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Globally unique reference presented to the customer.
    pub reference: BookingReference,
    /// The reserved slot.
    pub slot: Slot,
    /// Customer full name.
    pub full_name: String,
    /// Customer email.
    pub email: String,
    /// The promo code applied, only if it was valid at creation time.
    pub promo_code: Option<String>,
    /// The amount charged.
    pub total_amount: u64,
    /// Creation timestamp (RFC 3339, UTC).
    pub created_at: String,
}
