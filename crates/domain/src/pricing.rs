// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing calculator.
//!
//! Pricing is pure and deterministic so that a quoted price and a charged
//! price computed from the same inputs are always identical.

use crate::error::DomainError;
use crate::types::{PromoKind, PromoRule};
use serde::{Deserialize, Serialize};

/// Largest amount a price or total may reach. Stored amounts are signed
/// 64-bit integers.
pub const MAX_AMOUNT: u64 = i64::MAX.unsigned_abs();

/// The itemised result of pricing a single booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Base price times quantity (quantity is always 1).
    pub subtotal: u64,
    /// Amount taken off the subtotal. Never exceeds the subtotal.
    pub discount: u64,
    /// Flat tax added after the discount.
    pub tax: u64,
    /// `subtotal - discount + tax`. Never below `tax`.
    pub total: u64,
}

/// Computes the payable total for one booking.
///
/// * No rule: no discount.
/// * `fixed`: the rule value, clamped to the subtotal.
/// * `percentage`: `floor(subtotal * value / 100)`.
///
/// # Arguments
///
/// * `base_price` - The experience base price
/// * `tax_flat` - The flat tax amount
/// * `rule` - An already-validated promo rule, if one applies
///
/// # Errors
///
/// Returns `DomainError::AmountOverflow` if the total exceeds [`MAX_AMOUNT`].
pub fn compute_total(
    base_price: u64,
    tax_flat: u64,
    rule: Option<&PromoRule>,
) -> Result<PriceBreakdown, DomainError> {
    let subtotal: u64 = base_price;

    let discount: u64 = match rule {
        None => 0,
        Some(rule) => match rule.kind {
            PromoKind::Fixed => rule.value.min(subtotal),
            PromoKind::Percentage => {
                let scaled: u128 = u128::from(subtotal) * u128::from(rule.value) / 100;
                u64::try_from(scaled).unwrap_or(subtotal).min(subtotal)
            }
        },
    };

    let total: u64 = (subtotal - discount)
        .checked_add(tax_flat)
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or(DomainError::AmountOverflow {
            base_price,
            tax: tax_flat,
        })?;

    Ok(PriceBreakdown {
        subtotal,
        discount,
        tax: tax_flat,
        total,
    })
}
