// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only collaborators: the experience catalog and the promo directory.
//!
//! Both are loaded once at startup from a [`CatalogSeed`] and never mutated.

use std::collections::HashMap;

use bookit_domain::{
    DomainError, Experience, PromoKind, PromoRule, validate_experience, validate_promo_rule,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookup of bookable experiences.
pub trait ExperienceCatalog {
    /// Finds an experience by its exact id.
    fn find_experience(&self, experience_id: &str) -> Option<&Experience>;

    /// Returns every experience in display order.
    fn experiences(&self) -> &[Experience];
}

/// Lookup of promo rules by case-sensitive code.
pub trait PromoDirectory {
    /// Finds a promo rule by its exact code.
    fn find_promo(&self, code: &str) -> Option<&PromoRule>;
}

/// A catalog held in memory in seed order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    experiences: Vec<Experience>,
}

impl StaticCatalog {
    /// Creates a catalog from already-validated experiences.
    #[must_use]
    pub const fn new(experiences: Vec<Experience>) -> Self {
        Self { experiences }
    }
}

impl ExperienceCatalog for StaticCatalog {
    fn find_experience(&self, experience_id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|exp| exp.id == experience_id)
    }

    fn experiences(&self) -> &[Experience] {
        &self.experiences
    }
}

/// A promo directory held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticPromoDirectory {
    rules: HashMap<String, PromoRule>,
}

impl StaticPromoDirectory {
    /// Creates a directory from already-validated rules.
    #[must_use]
    pub fn new(rules: Vec<PromoRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.code.clone(), rule))
                .collect(),
        }
    }

    /// Returns the number of codes in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl PromoDirectory for StaticPromoDirectory {
    fn find_promo(&self, code: &str) -> Option<&PromoRule> {
        self.rules.get(code)
    }
}

/// Errors raised while loading a catalog seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed document is not valid JSON for the expected shape.
    #[error("failed to parse catalog seed: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry violates a domain rule.
    #[error("invalid catalog entry: {0}")]
    Invalid(#[from] DomainError),

    /// Two experiences share an id.
    #[error("duplicate experience id '{0}'")]
    DuplicateExperience(String),

    /// Two promo rules share a code.
    #[error("duplicate promo code '{0}'")]
    DuplicatePromoCode(String),
}

/// The startup contents of the catalog and the promo directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    /// Experiences in display order.
    pub experiences: Vec<Experience>,
    /// Promo rules.
    #[serde(default)]
    pub promo_codes: Vec<PromoRule>,
}

impl CatalogSeed {
    /// Returns the built-in seed shipped with the server.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            experiences: vec![
                Experience::new(
                    "1",
                    "Kayaking",
                    899,
                    "Guided small-group experience. Certified guide. Safety first with gear included.",
                    "Udupi, Karnataka",
                    "Water Sports",
                ),
                Experience::new(
                    "2",
                    "Mountain Hiking",
                    799,
                    "Explore scenic mountain trails with experienced guides.",
                    "Manali, Himachal Pradesh",
                    "Trekking",
                ),
                Experience::new(
                    "3",
                    "Scuba Diving",
                    1299,
                    "Discover underwater wonders with certified instructors.",
                    "Havelock Island, Andaman",
                    "Water Sports",
                ),
            ],
            promo_codes: vec![
                PromoRule {
                    code: String::from("SAVE10"),
                    kind: PromoKind::Percentage,
                    value: 10,
                },
                PromoRule {
                    code: String::from("FLAT100"),
                    kind: PromoKind::Fixed,
                    value: 100,
                },
            ],
        }
    }

    /// Parses a seed from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any entry is invalid.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks every entry and rejects duplicate ids and codes.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen_ids: Vec<&str> = Vec::with_capacity(self.experiences.len());
        for experience in &self.experiences {
            validate_experience(experience)?;
            if seen_ids.contains(&experience.id.as_str()) {
                return Err(SeedError::DuplicateExperience(experience.id.clone()));
            }
            seen_ids.push(&experience.id);
        }

        let mut seen_codes: Vec<&str> = Vec::with_capacity(self.promo_codes.len());
        for rule in &self.promo_codes {
            validate_promo_rule(rule)?;
            if seen_codes.contains(&rule.code.as_str()) {
                return Err(SeedError::DuplicatePromoCode(rule.code.clone()));
            }
            seen_codes.push(&rule.code);
        }

        Ok(())
    }

    /// Splits the seed into its two lookups.
    #[must_use]
    pub fn into_parts(self) -> (StaticCatalog, StaticPromoDirectory) {
        (
            StaticCatalog::new(self.experiences),
            StaticPromoDirectory::new(self.promo_codes),
        )
    }
}
