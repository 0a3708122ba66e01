// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

const STANDARD_DATES: [&str; 5] = ["Oct 22", "Oct 23", "Oct 24", "Oct 25", "Oct 26"];
const STANDARD_TIMES: [&str; 3] = ["09:00 am", "11:00 am", "01:00 pm"];

/// The grid of dates and times offered for an experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Offered calendar-day tokens, in display order.
    pub dates: Vec<String>,
    /// Offered time-of-day tokens, in display order.
    pub times: Vec<String>,
}

impl Availability {
    /// Returns the fixed slot grid offered for every experience.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            dates: STANDARD_DATES.iter().map(ToString::to_string).collect(),
            times: STANDARD_TIMES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::standard()
    }
}
