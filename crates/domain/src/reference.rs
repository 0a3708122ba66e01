// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking references and reference generation.
//!
//! A generator only proposes candidates. Uniqueness is enforced by the
//! booking store, which rejects a duplicate reference so the engine can
//! draw again.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Prefix carried by every booking reference.
pub const REFERENCE_PREFIX: &str = "REF-";

/// Number of token characters produced by [`RandomReferenceGenerator`].
pub const REFERENCE_TOKEN_LEN: usize = 8;

/// Shortest token accepted by [`BookingReference::parse`].
const MIN_TOKEN_LEN: usize = 6;

const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const RADIX: u64 = 36;

/// A human-presentable booking reference such as `REF-7Q2KX9AB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingReference(String);

impl BookingReference {
    /// Parses and validates a reference.
    ///
    /// A valid reference is `REF-` followed by at least six characters
    /// from `[A-Z0-9]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReference` if the value is malformed.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let token: &str = value
            .strip_prefix(REFERENCE_PREFIX)
            .ok_or_else(|| DomainError::InvalidReference(value.to_string()))?;

        let well_formed: bool = token.len() >= MIN_TOKEN_LEN
            && token
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());

        if !well_formed {
            return Err(DomainError::InvalidReference(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for BookingReference {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.0
    }
}

/// Source of candidate booking references.
pub trait ReferenceGenerator {
    /// Proposes a new candidate reference.
    fn generate(&mut self) -> BookingReference;
}

/// Draws references from the thread-local random source.
///
/// Eight characters over a 36-symbol alphabet give roughly 2.8e12
/// candidates per draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReferenceGenerator;

impl ReferenceGenerator for RandomReferenceGenerator {
    fn generate(&mut self) -> BookingReference {
        let mut entropy: u64 = rand::random::<u64>();
        let mut value: String = String::with_capacity(REFERENCE_PREFIX.len() + REFERENCE_TOKEN_LEN);
        value.push_str(REFERENCE_PREFIX);

        for _ in 0..REFERENCE_TOKEN_LEN {
            let index: usize = usize::try_from(entropy % RADIX).unwrap_or_default();
            let symbol: u8 = ALPHABET.get(index).copied().unwrap_or(b'0');
            value.push(char::from(symbol));
            entropy /= RADIX;
        }

        BookingReference(value)
    }
}
