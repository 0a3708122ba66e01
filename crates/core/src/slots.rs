// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bookit_domain::Slot;
use tracing::debug;

use crate::error::CoreError;
use crate::store::{BookingStore, StoreError};

/// Checks whether a booking already exists for exactly this slot.
///
/// Read-only. A `false` answer is advisory: the store's conditional insert
/// is what actually guarantees the slot cannot be booked twice.
///
/// # Errors
///
/// Returns `CoreError::StoreUnavailable` if the store cannot be queried.
pub fn is_slot_taken<S: BookingStore + ?Sized>(
    store: &mut S,
    slot: &Slot,
) -> Result<bool, CoreError> {
    let taken: bool = store.is_slot_taken(slot).map_err(store_failure)?;
    debug!(
        experience_id = %slot.experience_id,
        date = %slot.date,
        time = %slot.time,
        taken,
        "Checked slot"
    );
    Ok(taken)
}

/// Maps a store failure outside of a conditional insert.
pub(crate) fn store_failure(err: StoreError) -> CoreError {
    CoreError::StoreUnavailable(err.to_string())
}
