// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The epoch anchor every pay calendar is computed from.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A known pay period start date from which all other dates are derived.
///
/// The anchor is immutable. It is expected to be a Sunday and the first day
/// of pay period 1 of its pay year; [`crate::CalendarConfig::validate`]
/// checks both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    /// The anchor date.
    #[serde(with = "iso_date")]
    date: Date,
    /// Whether the anchor date is the first day of pay period 1.
    starts_pay_year: bool,
}

impl Anchor {
    /// Creates a new `Anchor`.
    ///
    /// # Arguments
    ///
    /// * `date` - The anchor date
    /// * `starts_pay_year` - Whether `date` is the first day of pay period 1
    #[must_use]
    pub const fn new(date: Date, starts_pay_year: bool) -> Self {
        Self {
            date,
            starts_pay_year,
        }
    }

    /// Returns the anchor date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns whether the anchor date starts pay period 1 of its pay year.
    #[must_use]
    pub const fn starts_pay_year(&self) -> bool {
        self.starts_pay_year
    }

    /// Returns the pay year the anchor date starts.
    #[must_use]
    pub fn pay_year(&self) -> i32 {
        pay_year_of_start(self.date)
    }
}

/// Names the pay year that begins on `start_date`.
///
/// Pay years begin within two weeks of January 1. A pay year starting in
/// late December belongs to the following calendar year.
#[must_use]
pub fn pay_year_of_start(start_date: Date) -> i32 {
    match start_date.month() {
        Month::December => start_date.year() + 1,
        _ => start_date.year(),
    }
}
