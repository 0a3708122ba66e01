// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bookit::StoreError;
use diesel::result::DatabaseErrorKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// The slot index already holds a booking for this slot.
    SlotTaken,
    /// The reference index already holds this reference.
    ReferenceTaken,
    /// The database stayed locked past the busy timeout.
    Busy(String),
    /// A stored row cannot be mapped back to a booking.
    CorruptRow(String),
    /// A value cannot be represented in a column.
    ValueOutOfRange(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::SlotTaken => write!(f, "Slot is already booked"),
            Self::ReferenceTaken => write!(f, "Booking reference is already in use"),
            Self::Busy(msg) => write!(f, "Database busy: {msg}"),
            Self::CorruptRow(msg) => write!(f, "Corrupt booking row: {msg}"),
            Self::ValueOutOfRange(msg) => write!(f, "Value out of range: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Returns whether a database message reports lock contention.
fn is_lock_contention(message: &str) -> bool {
    message.contains("locked") || message.contains("busy")
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                // SQLite names the violated columns in the message.
                if info.message().contains("booking_reference") {
                    Self::ReferenceTaken
                } else {
                    Self::SlotTaken
                }
            }
            diesel::result::Error::DatabaseError(_, info) if is_lock_contention(info.message()) => {
                Self::Busy(info.message().to_string())
            }
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::SlotTaken => Self::SlotTaken,
            PersistenceError::ReferenceTaken => Self::ReferenceTaken,
            other => Self::Unavailable(other.to_string()),
        }
    }
}
