// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking and pricing engine for BookIt.
//!
//! The engine prevents two customers from reserving the same
//! `(experience, date, time)` slot, computes the payable amount from base
//! price, flat tax and an optional promo rule, and issues a unique booking
//! reference. Storage, the experience catalog and the promo directory are
//! injected through the traits in [`store`] and [`catalog`].

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

pub mod catalog;
mod config;
mod engine;
mod error;
mod promo;
mod slots;
mod stage;
pub mod store;
mod storefront;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogSeed, ExperienceCatalog, PromoDirectory, SeedError, StaticCatalog,
    StaticPromoDirectory,
};
pub use config::{DEFAULT_MAX_REFERENCE_ATTEMPTS, DEFAULT_TAX_FLAT, EngineConfig};
pub use engine::{BookingEngine, Confirmation};
pub use error::CoreError;
pub use promo::validate_promo;
pub use slots::is_slot_taken;
pub use stage::BookingStage;
pub use store::{BookingStore, InMemoryBookingStore, StoreError};
pub use storefront::{Quote, Storefront};
