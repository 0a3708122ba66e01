// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking engine.
//!
//! A reservation runs through the stages of [`BookingStage`]:
//!
//! 1. `Received → Validated`: required fields present, experience exists.
//! 2. `Validated → SlotChecked`: the slot is not already booked.
//! 3. `SlotChecked → Priced`: the total is computed (an unknown promo code
//!    prices without a discount) and checked against any client total.
//! 4. `Priced → Reserved → Persisted`: a reference candidate is drawn and
//!    the store performs a single conditional insert. A reference collision
//!    draws again, up to the configured budget.
//!
//! Any failed gate moves the attempt to `Rejected` with a specific
//! [`CoreError`]. Nothing is written before the final insert, so a rejected
//! or abandoned attempt leaves no trace.

use std::sync::Arc;

use bookit_domain::{
    Booking, BookingReference, BookingRequest, Experience, PriceBreakdown, PromoRule,
    ReferenceGenerator, Slot, validate_booking_request,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, error, info, warn};

use crate::catalog::{ExperienceCatalog, PromoDirectory};
use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::slots::{is_slot_taken, store_failure};
use crate::stage::BookingStage;
use crate::store::{BookingStore, StoreError};
use crate::storefront::{Quote, Storefront};

/// The result of a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The persisted booking.
    pub booking: Booking,
    /// The price that was charged.
    pub price: PriceBreakdown,
    /// Whether a promo discount was applied.
    pub promo_applied: bool,
}

/// Tracks one booking attempt through its stages.
struct Attempt {
    stage: BookingStage,
    slot: Slot,
}

impl Attempt {
    fn new(slot: Slot) -> Self {
        Self {
            stage: BookingStage::Received,
            slot,
        }
    }

    fn advance(&mut self, next: BookingStage) {
        debug_assert!(self.stage.can_transition_to(next));
        debug!(
            experience_id = %self.slot.experience_id,
            date = %self.slot.date,
            time = %self.slot.time,
            from = %self.stage,
            to = %next,
            "Booking attempt advanced"
        );
        self.stage = next;
    }

    // Logs the kind only. Error text may contain the customer email.
    fn reject(&mut self, err: CoreError) -> CoreError {
        info!(
            experience_id = %self.slot.experience_id,
            date = %self.slot.date,
            time = %self.slot.time,
            stage = %self.stage,
            kind = err.kind(),
            "Booking attempt rejected"
        );
        self.stage = BookingStage::Rejected;
        err
    }
}

/// Orchestrates validation, conflict checking, pricing, reference
/// allocation and persistence of bookings.
///
/// All collaborators are injected at construction. The engine holds no
/// global state. Its read-only half is a shared [`Storefront`].
#[derive(Debug)]
pub struct BookingEngine<C, P, S, G> {
    storefront: Arc<Storefront<C, P>>,
    store: S,
    generator: G,
}

impl<C, P, S, G> BookingEngine<C, P, S, G>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
    S: BookingStore,
    G: ReferenceGenerator,
{
    /// Creates a new engine.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The experience catalog
    /// * `promos` - The promo code directory
    /// * `store` - The booking store
    /// * `generator` - The reference candidate source
    /// * `config` - Tax and retry settings
    pub fn new(catalog: C, promos: P, store: S, generator: G, config: EngineConfig) -> Self {
        Self {
            storefront: Arc::new(Storefront::new(catalog, promos, config)),
            store,
            generator,
        }
    }

    /// Returns the read-only half of the engine.
    #[must_use]
    pub fn storefront(&self) -> &Storefront<C, P> {
        &self.storefront
    }

    /// Returns a shared handle to the read-only half of the engine.
    ///
    /// Lookups through the handle never wait on the booking store.
    #[must_use]
    pub fn shared_storefront(&self) -> Arc<Storefront<C, P>> {
        Arc::clone(&self.storefront)
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        self.storefront.config()
    }

    /// Returns every experience in the catalog.
    pub fn experiences(&self) -> &[Experience] {
        self.storefront.experiences()
    }

    /// Finds an experience by id.
    pub fn find_experience(&self, experience_id: &str) -> Option<&Experience> {
        self.storefront.find_experience(experience_id)
    }

    /// Validates a promo code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank code and
    /// `CoreError::PromoNotFound` for an unknown one.
    pub fn validate_promo(&self, code: &str) -> Result<PromoRule, CoreError> {
        self.storefront.validate_promo(code)
    }

    /// Checks whether a slot is already booked.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StoreUnavailable` if the store cannot be queried.
    pub fn is_slot_taken(&mut self, slot: &Slot) -> Result<bool, CoreError> {
        is_slot_taken(&mut self.store, slot)
    }

    /// Lists the booked slots of an experience.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StoreUnavailable` if the store cannot be queried.
    pub fn booked_slots(&mut self, experience_id: &str) -> Result<Vec<Slot>, CoreError> {
        self.store
            .booked_slots(experience_id)
            .map_err(store_failure)
    }

    /// Looks up a booking by reference.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StoreUnavailable` if the store cannot be queried.
    pub fn find_booking(
        &mut self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, CoreError> {
        self.store.find_booking(reference).map_err(store_failure)
    }

    /// Prices an experience with an optional promo code.
    ///
    /// Uses exactly the same calculation as [`Self::reserve`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ExperienceNotFound` for an unknown experience and
    /// `CoreError::Validation` if the amount overflows.
    pub fn quote(&self, experience_id: &str, promo_code: Option<&str>) -> Result<Quote, CoreError> {
        self.storefront.quote(experience_id, promo_code)
    }

    /// Reserves a slot and persists the booking.
    ///
    /// # Errors
    ///
    /// - `CoreError::Validation` / `CoreError::ExperienceNotFound` if the
    ///   request is incomplete or names an unknown experience
    /// - `CoreError::SlotConflict` if the slot is already booked
    /// - `CoreError::PriceMismatch` if the client total is wrong
    /// - `CoreError::ReferenceExhausted` if every reference candidate collided
    /// - `CoreError::StoreUnavailable` if the store failed or timed out
    pub fn reserve(&mut self, request: &BookingRequest) -> Result<Confirmation, CoreError> {
        let slot: Slot = request.slot();
        let mut attempt: Attempt = Attempt::new(slot.clone());

        if let Err(err) = validate_booking_request(request) {
            return Err(attempt.reject(err.into()));
        }
        let Some(experience) = self
            .storefront
            .find_experience(&slot.experience_id)
            .cloned()
        else {
            return Err(attempt.reject(CoreError::ExperienceNotFound {
                experience_id: slot.experience_id,
            }));
        };
        attempt.advance(BookingStage::Validated);

        match is_slot_taken(&mut self.store, &slot) {
            Ok(false) => {}
            Ok(true) => return Err(attempt.reject(CoreError::SlotConflict { slot })),
            Err(err) => return Err(attempt.reject(err)),
        }
        attempt.advance(BookingStage::SlotChecked);

        let quote: Quote = match self
            .storefront
            .price(&experience, request.promo_code.as_deref()) {
            Ok(quote) => quote,
            Err(err) => return Err(attempt.reject(err)),
        };
        if let Some(code) = &quote.rejected_promo {
            warn!(code = %code, "Booking proceeds without discount: unknown promo code");
        }
        match request.total_amount {
            Some(submitted) if submitted != quote.price.total => {
                return Err(attempt.reject(CoreError::PriceMismatch {
                    submitted,
                    expected: quote.price.total,
                }));
            }
            _ => {}
        }
        attempt.advance(BookingStage::Priced);

        let created_at: String = match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(created_at) => created_at,
            Err(err) => return Err(attempt.reject(CoreError::Internal(err.to_string()))),
        };

        let max_attempts: u32 = self.storefront.config().max_reference_attempts.max(1);
        for reference_attempt in 1..=max_attempts {
            let booking: Booking = Booking {
                reference: self.generator.generate(),
                slot: slot.clone(),
                full_name: request.full_name.trim().to_string(),
                email: request.email.trim().to_string(),
                promo_code: quote.applied_promo.as_ref().map(|rule| rule.code.clone()),
                total_amount: quote.price.total,
                created_at: created_at.clone(),
            };

            match self.store.insert_booking(&booking) {
                Ok(()) => {
                    attempt.advance(BookingStage::Reserved);
                    attempt.advance(BookingStage::Persisted);
                    info!(
                        reference = %booking.reference,
                        experience_id = %slot.experience_id,
                        date = %slot.date,
                        time = %slot.time,
                        total = booking.total_amount,
                        "Booking confirmed"
                    );
                    return Ok(Confirmation {
                        promo_applied: quote.applied_promo.is_some(),
                        price: quote.price,
                        booking,
                    });
                }
                Err(StoreError::ReferenceTaken) => {
                    warn!(
                        attempt = reference_attempt,
                        reference = %booking.reference,
                        "Booking reference collision, drawing again"
                    );
                }
                Err(StoreError::SlotTaken) => {
                    return Err(attempt.reject(CoreError::SlotConflict { slot }));
                }
                Err(StoreError::Unavailable(msg)) => {
                    error!(error = %msg, "Booking store unavailable");
                    return Err(attempt.reject(CoreError::StoreUnavailable(msg)));
                }
            }
        }

        error!(
            attempts = max_attempts,
            "Booking reference space exhausted; operator attention required"
        );
        Err(attempt.reject(CoreError::ReferenceExhausted {
            attempts: max_attempts,
        }))
    }
}
