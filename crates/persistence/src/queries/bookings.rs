// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.

use bookit_domain::{Booking, BookingReference, Slot};
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct BookingRow {
    booking_reference: String,
    experience_id: String,
    booking_date: String,
    booking_time: String,
    full_name: String,
    email: String,
    promo_code: Option<String>,
    total_amount: i64,
    created_at: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let reference: BookingReference = BookingReference::parse(&row.booking_reference)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        let total_amount: u64 = u64::try_from(row.total_amount).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "negative total amount {} for {}",
                row.total_amount, row.booking_reference
            ))
        })?;

        Ok(Self {
            reference,
            slot: Slot {
                experience_id: row.experience_id,
                date: row.booking_date,
                time: row.booking_time,
            },
            full_name: row.full_name,
            email: row.email,
            promo_code: row.promo_code,
            total_amount,
            created_at: row.created_at,
        })
    }
}

/// Checks whether a booking exists for exactly this slot.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn slot_exists(conn: &mut SqliteConnection, slot: &Slot) -> Result<bool, PersistenceError> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        bookings::table
            .filter(bookings::experience_id.eq(&slot.experience_id))
            .filter(bookings::booking_date.eq(&slot.date))
            .filter(bookings::booking_time.eq(&slot.time)),
    ))
    .get_result(conn)?;

    debug!(slot = %slot, exists, "Slot lookup");
    Ok(exists)
}

/// Retrieves a booking by reference.
///
/// # Errors
///
/// Returns an error if the database query fails or the stored row is
/// malformed. Returns `Ok(None)` if no booking has this reference.
pub fn get_booking_by_reference(
    conn: &mut SqliteConnection,
    reference: &BookingReference,
) -> Result<Option<Booking>, PersistenceError> {
    let row: Option<BookingRow> = bookings::table
        .filter(bookings::booking_reference.eq(reference.as_str()))
        .select(BookingRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Booking::try_from).transpose()
}

/// Lists the booked slots of one experience, ordered by date then time.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_booked_slots(
    conn: &mut SqliteConnection,
    experience_id: &str,
) -> Result<Vec<Slot>, PersistenceError> {
    let rows: Vec<(String, String)> = bookings::table
        .filter(bookings::experience_id.eq(experience_id))
        .select((bookings::booking_date, bookings::booking_time))
        .order((bookings::booking_date.asc(), bookings::booking_time.asc()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(date, time)| Slot {
            experience_id: experience_id.to_string(),
            date,
            time,
        })
        .collect())
}

/// Counts all stored bookings.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_bookings(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(bookings::table.count().get_result(conn)?)
}
