// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the BookIt booking engine.
//!
//! Bookings are stored in `SQLite` through Diesel. Two unique constraints
//! carry the booking invariants:
//!
//! - `idx_bookings_slot` over `(experience_id, booking_date, booking_time)`
//! - the `booking_reference` column
//!
//! Every booking is written with one `INSERT`, so a reservation either
//! lands completely or fails with [`PersistenceError::SlotTaken`] or
//! [`PersistenceError::ReferenceTaken`]. Several processes may share one
//! database file: the constraints, not the callers, decide the winner.
//!
//! ## Lock Contention
//!
//! File-backed databases run in WAL mode with a busy timeout. A statement
//! that cannot get the write lock within the timeout fails with
//! [`PersistenceError::Busy`], which the engine reports as a retryable
//! store outage.

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
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use bookit::{BookingStore, StoreError};
use bookit_domain::{Booking, BookingReference, Slot};
use diesel::SqliteConnection;

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Default time a statement waits on a locked database.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Persistence adapter for bookings.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared-cache database, so adapters never
    /// see each other's bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:bookit_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection =
            backend::sqlite::initialize_database(&shared_memory_url, DEFAULT_BUSY_TIMEOUT)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database
    /// and the default busy timeout.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        Self::new_with_file_and_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    /// * `busy_timeout` - How long a statement waits on a locked database
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file_and_timeout<P: AsRef<Path>>(
        path: P,
        busy_timeout: Duration,
    ) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection =
            backend::sqlite::initialize_database(path_str, busy_timeout)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Changes the busy timeout of this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the PRAGMA statement fails.
    pub fn set_busy_timeout(&mut self, timeout: Duration) -> Result<(), PersistenceError> {
        backend::sqlite::set_busy_timeout(&mut self.conn, timeout)
    }

    /// Persists a booking with a single conditional insert.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SlotTaken` or `PersistenceError::ReferenceTaken`
    /// on a uniqueness violation, or another error if the write fails.
    pub fn persist_booking(&mut self, booking: &Booking) -> Result<(), PersistenceError> {
        mutations::bookings::insert_booking(&mut self.conn, booking)
    }

    /// Checks whether a booking exists for exactly this slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn slot_exists(&mut self, slot: &Slot) -> Result<bool, PersistenceError> {
        queries::bookings::slot_exists(&mut self.conn, slot)
    }

    /// Retrieves a booking by reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_booking(
        &mut self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::get_booking_by_reference(&mut self.conn, reference)
    }

    /// Lists the booked slots of one experience.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_booked_slots(&mut self, experience_id: &str) -> Result<Vec<Slot>, PersistenceError> {
        queries::bookings::list_booked_slots(&mut self.conn, experience_id)
    }

    /// Counts all stored bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_bookings(&mut self) -> Result<i64, PersistenceError> {
        queries::bookings::count_bookings(&mut self.conn)
    }
}

impl BookingStore for Persistence {
    fn is_slot_taken(&mut self, slot: &Slot) -> Result<bool, StoreError> {
        Ok(self.slot_exists(slot)?)
    }

    fn insert_booking(&mut self, booking: &Booking) -> Result<(), StoreError> {
        Ok(self.persist_booking(booking)?)
    }

    fn find_booking(
        &mut self,
        reference: &BookingReference,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(self.get_booking(reference)?)
    }

    fn booked_slots(&mut self, experience_id: &str) -> Result<Vec<Slot>, StoreError> {
        Ok(self.list_booked_slots(experience_id)?)
    }
}
