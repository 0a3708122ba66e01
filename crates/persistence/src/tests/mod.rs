// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use bookit_domain::{Booking, BookingReference, Slot};

pub fn create_test_booking(reference: &str, experience_id: &str, date: &str, time: &str) -> Booking {
    Booking {
        reference: BookingReference::parse(reference).unwrap(),
        slot: Slot::new(experience_id, date, time),
        full_name: String::from("Asha Rao"),
        email: String::from("asha@example.com"),
        promo_code: None,
        total_amount: 998,
        created_at: String::from("2026-10-18T09:00:00Z"),
    }
}
