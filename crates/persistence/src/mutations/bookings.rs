// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.
//!
//! A booking is written with a single `INSERT`. The unique index on
//! `(experience_id, booking_date, booking_time)` and the unique
//! `booking_reference` column make the insert the conditional write that
//! decides which of two concurrent reservations wins.

use bookit_domain::Booking;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Inserts a booking.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking` - The booking to persist
///
/// # Errors
///
/// Returns `PersistenceError::SlotTaken` or `PersistenceError::ReferenceTaken`
/// on a uniqueness violation, `PersistenceError::Busy` if the database stayed
/// locked, and `PersistenceError::ValueOutOfRange` if the amount does not
/// fit the column. Nothing is written on error.
pub fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &Booking,
) -> Result<(), PersistenceError> {
    let total_amount: i64 = i64::try_from(booking.total_amount).map_err(|_| {
        PersistenceError::ValueOutOfRange(format!("total amount {}", booking.total_amount))
    })?;

    debug!(
        reference = %booking.reference,
        experience_id = %booking.slot.experience_id,
        date = %booking.slot.date,
        time = %booking.slot.time,
        "Inserting booking"
    );

    diesel::insert_into(bookings::table)
        .values((
            bookings::booking_reference.eq(booking.reference.as_str()),
            bookings::experience_id.eq(&booking.slot.experience_id),
            bookings::booking_date.eq(&booking.slot.date),
            bookings::booking_time.eq(&booking.slot.time),
            bookings::full_name.eq(&booking.full_name),
            bookings::email.eq(&booking.email),
            bookings::promo_code.eq(booking.promo_code.as_deref()),
            bookings::total_amount.eq(total_amount),
            bookings::created_at.eq(&booking.created_at),
        ))
        .execute(conn)?;

    info!(reference = %booking.reference, "Booking persisted");
    Ok(())
}
