// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-only half of the booking engine.
//!
//! A [`Storefront`] answers catalog lookups, promo validation and price
//! quotes. It never touches the booking store, so it can be shared freely
//! between requests while bookings are serialised elsewhere.

use bookit_domain::{Experience, PriceBreakdown, PromoRule, compute_total, normalize_promo_code};

use crate::catalog::{ExperienceCatalog, PromoDirectory};
use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::promo::validate_promo;

/// The priced outcome of an experience plus an optional promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// The experience that was priced.
    pub experience_id: String,
    /// The itemised price.
    pub price: PriceBreakdown,
    /// The rule that was applied, if the code was valid.
    pub applied_promo: Option<PromoRule>,
    /// A supplied code that was not found and therefore not applied.
    pub rejected_promo: Option<String>,
}

/// Catalog, promo directory and pricing settings.
#[derive(Debug)]
pub struct Storefront<C, P> {
    catalog: C,
    promos: P,
    config: EngineConfig,
}

impl<C, P> Storefront<C, P>
where
    C: ExperienceCatalog,
    P: PromoDirectory,
{
    /// Creates a storefront over a catalog and a promo directory.
    #[must_use]
    pub const fn new(catalog: C, promos: P, config: EngineConfig) -> Self {
        Self {
            catalog,
            promos,
            config,
        }
    }

    /// Returns the pricing and retry settings.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns every experience in the catalog.
    #[must_use]
    pub fn experiences(&self) -> &[Experience] {
        self.catalog.experiences()
    }

    /// Finds an experience by id.
    #[must_use]
    pub fn find_experience(&self, experience_id: &str) -> Option<&Experience> {
        self.catalog.find_experience(experience_id)
    }

    /// Validates a promo code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank code and
    /// `CoreError::PromoNotFound` for an unknown one.
    pub fn validate_promo(&self, code: &str) -> Result<PromoRule, CoreError> {
        validate_promo(&self.promos, code)
    }

    /// Prices an experience with an optional promo code.
    ///
    /// An unknown code is reported in `rejected_promo` and priced without a
    /// discount, exactly as a booking would be charged.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::ExperienceNotFound` for an unknown experience and
    /// `CoreError::Validation` if the amount overflows.
    pub fn quote(&self, experience_id: &str, promo_code: Option<&str>) -> Result<Quote, CoreError> {
        let experience: &Experience = self
            .catalog
            .find_experience(experience_id.trim())
            .ok_or_else(|| CoreError::ExperienceNotFound {
                experience_id: experience_id.trim().to_string(),
            })?;

        self.price(experience, promo_code)
    }

    pub(crate) fn price(
        &self,
        experience: &Experience,
        promo_code: Option<&str>,
    ) -> Result<Quote, CoreError> {
        let (applied_promo, rejected_promo): (Option<PromoRule>, Option<String>) =
            match normalize_promo_code(promo_code) {
                None => (None, None),
                Some(code) => match validate_promo(&self.promos, code) {
                    Ok(rule) => (Some(rule), None),
                    Err(CoreError::PromoNotFound { code }) => (None, Some(code)),
                    Err(err) => return Err(err),
                },
            };

        let price: PriceBreakdown = compute_total(
            experience.base_price,
            self.config.tax_flat,
            applied_promo.as_ref(),
        )?;

        Ok(Quote {
            experience_id: experience.id.clone(),
            price,
            applied_promo,
            rejected_promo,
        })
    }
}
