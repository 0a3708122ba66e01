// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Default flat tax, in currency units.
pub const DEFAULT_TAX_FLAT: u64 = 99;

/// Default number of reference candidates tried per booking.
pub const DEFAULT_MAX_REFERENCE_ATTEMPTS: u32 = 5;

/// Tunables for the booking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Flat tax added to every booking.
    pub tax_flat: u64,
    /// How many reference candidates to try before giving up.
    pub max_reference_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tax_flat: DEFAULT_TAX_FLAT,
            max_reference_attempts: DEFAULT_MAX_REFERENCE_ATTEMPTS,
        }
    }
}
