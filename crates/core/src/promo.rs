// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bookit_domain::{PromoRule, validate_promo_code_input};
use tracing::{debug, warn};

use crate::catalog::PromoDirectory;
use crate::error::CoreError;

/// Validates a promo code against the directory.
///
/// The lookup is an exact, case-sensitive match after trimming surrounding
/// whitespace. It has no side effects.
///
/// # Arguments
///
/// * `directory` - The promo code directory
/// * `code` - The code typed by the customer
///
/// # Errors
///
/// Returns `CoreError::Validation` for an empty code and
/// `CoreError::PromoNotFound` when the code is not in the directory. The
/// latter is an expected outcome, not a fault.
pub fn validate_promo<P: PromoDirectory + ?Sized>(
    directory: &P,
    code: &str,
) -> Result<PromoRule, CoreError> {
    let code: &str = validate_promo_code_input(code)?;

    directory.find_promo(code).map_or_else(
        || {
            warn!(code, "Promo code not found");
            Err(CoreError::PromoNotFound {
                code: code.to_string(),
            })
        },
        |rule| {
            debug!(code, kind = %rule.kind, value = rule.value, "Promo code accepted");
            Ok(rule.clone())
        },
    )
}
