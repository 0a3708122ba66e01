// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking store contract.
//!
//! A store owns two unique indexes: one over `(experience id, date, time)`
//! and one over the booking reference. [`BookingStore::insert_booking`] is
//! a single conditional insert that must fail atomically when either index
//! already holds the key, so two concurrent reservations of the same slot
//! can never both succeed.

use std::collections::HashMap;

use bookit_domain::{Booking, BookingReference, Slot};
use thiserror::Error;

/// Errors reported by a booking store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The slot index already holds a booking for this slot.
    #[error("slot is already booked")]
    SlotTaken,

    /// The reference index already holds this reference.
    #[error("booking reference is already in use")]
    ReferenceTaken,

    /// The store could not complete the operation in bounded time.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent storage for bookings.
pub trait BookingStore {
    /// Returns whether a booking exists for exactly this slot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be queried.
    fn is_slot_taken(&mut self, slot: &Slot) -> Result<bool, StoreError>;

    /// Inserts a booking if neither its slot nor its reference is taken.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SlotTaken` or `StoreError::ReferenceTaken` on a
    /// uniqueness violation, and `StoreError::Unavailable` otherwise. No
    /// partial write is left behind on error.
    fn insert_booking(&mut self, booking: &Booking) -> Result<(), StoreError>;

    /// Looks up a booking by reference.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be queried.
    fn find_booking(
        &mut self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, StoreError>;

    /// Lists the booked slots of one experience.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the store cannot be queried.
    fn booked_slots(&mut self, experience_id: &str) -> Result<Vec<Slot>, StoreError>;
}

/// A process-local store backed by two hash indexes.
///
/// Exclusive access through `&mut self` makes check-and-insert atomic.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    by_slot: HashMap<Slot, BookingReference>,
    by_reference: HashMap<BookingReference, Booking>,
}

impl InMemoryBookingStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored bookings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_reference.len()
    }

    /// Returns whether the store holds no bookings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_reference.is_empty()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn is_slot_taken(&mut self, slot: &Slot) -> Result<bool, StoreError> {
        Ok(self.by_slot.contains_key(slot))
    }

    fn insert_booking(&mut self, booking: &Booking) -> Result<(), StoreError> {
        if self.by_slot.contains_key(&booking.slot) {
            return Err(StoreError::SlotTaken);
        }
        if self.by_reference.contains_key(&booking.reference) {
            return Err(StoreError::ReferenceTaken);
        }

        self.by_slot
            .insert(booking.slot.clone(), booking.reference.clone());
        self.by_reference
            .insert(booking.reference.clone(), booking.clone());
        Ok(())
    }

    fn find_booking(
        &mut self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(self.by_reference.get(reference).cloned())
    }

    fn booked_slots(&mut self, experience_id: &str) -> Result<Vec<Slot>, StoreError> {
        let mut slots: Vec<Slot> = self
            .by_slot
            .keys()
            .filter(|slot| slot.experience_id == experience_id)
            .cloned()
            .collect();
        slots.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        Ok(slots)
    }
}
