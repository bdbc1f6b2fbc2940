// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay year and pay period value objects.
//!
//! Both are derived on demand from a [`crate::PayCalendar`] and own all of
//! the dates they hand out.

use crate::calendar::DAYS_PER_PAY_PERIOD;
use crate::error::CalendarError;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

/// Represents one pay year of the calendar.
///
/// A pay year is defined by:
/// - A year identifier
/// - A start date (always a Sunday)
/// - A number of pay periods (26 or 27)
///
/// All other properties (end date, pay periods) are derived deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayYear {
    /// The year identifier (e.g., 2026).
    year: i32,
    /// The start date of pay period 1 (inclusive).
    start_date: Date,
    /// The number of pay periods (26 or 27).
    num_pay_periods: u8,
}

impl PayYear {
    pub(crate) const fn new(year: i32, start_date: Date, num_pay_periods: u8) -> Self {
        Self {
            year,
            start_date,
            num_pay_periods,
        }
    }

    /// Returns the year identifier.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the start date of the pay year.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the number of pay periods.
    #[must_use]
    pub const fn num_pay_periods(&self) -> u8 {
        self.num_pay_periods
    }

    /// Returns whether this pay year carries a 27th pay period.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        self.num_pay_periods == 27
    }

    /// Returns the number of days in the pay year.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        i64::from(self.num_pay_periods) * DAYS_PER_PAY_PERIOD
    }

    /// Derives the end date of the pay year.
    ///
    /// The end date is calculated as:
    /// `start_date` + (`num_pay_periods` * 14 days) - 1 day
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if date arithmetic overflows.
    pub fn end_date(&self) -> Result<Date, CalendarError> {
        self.start_date
            .checked_add(Duration::days(self.duration_days() - 1))
            .ok_or(CalendarError::YearUnknown { year: self.year })
    }

    /// Returns whether `date` falls within this pay year.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        let elapsed: i64 = (date - self.start_date).whole_days();
        (0..self.duration_days()).contains(&elapsed)
    }

    /// Derives all pay periods for this pay year.
    ///
    /// Pay periods are bi-weekly (14 days), contiguous, and non-overlapping.
    /// The first pay period starts on the pay year start date.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows.
    pub fn pay_periods(&self) -> Result<Vec<PayPeriod>, CalendarError> {
        let mut periods: Vec<PayPeriod> = Vec::with_capacity(usize::from(self.num_pay_periods));

        for index in 1..=self.num_pay_periods {
            let period: PayPeriod = self.pay_period(index)?;
            periods.push(period);
        }

        Ok(periods)
    }

    /// Derives a single pay period by its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The index is outside `1..=num_pay_periods`
    /// - Date arithmetic overflows
    pub fn pay_period(&self, index: u8) -> Result<PayPeriod, CalendarError> {
        if index < 1 || index > self.num_pay_periods {
            return Err(CalendarError::PayPeriodOutOfRange {
                year: self.year,
                period: i64::from(index),
                max: self.num_pay_periods,
            });
        }

        let offset_days: i64 = i64::from(index - 1) * DAYS_PER_PAY_PERIOD;
        let period_start: Date = self
            .start_date
            .checked_add(Duration::days(offset_days))
            .ok_or(CalendarError::YearUnknown { year: self.year })?;

        PayPeriod::new(self.year, index, period_start)
    }
}

/// Represents a single pay period within a pay year.
///
/// A pay period runs Sunday through the second following Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The pay year this period belongs to.
    pay_year: i32,
    /// The 1-based number of this pay period.
    index: u8,
    /// The start date of this pay period (inclusive).
    start_date: Date,
    /// The end date of this pay period (inclusive).
    end_date: Date,
}

impl PayPeriod {
    pub(crate) fn new(pay_year: i32, index: u8, start_date: Date) -> Result<Self, CalendarError> {
        let end_date: Date = start_date
            .checked_add(Duration::days(DAYS_PER_PAY_PERIOD - 1))
            .ok_or(CalendarError::YearUnknown { year: pay_year })?;

        Ok(Self {
            pay_year,
            index,
            start_date,
            end_date,
        })
    }

    /// Returns the pay year this period belongs to.
    #[must_use]
    pub const fn pay_year(&self) -> i32 {
        self.pay_year
    }

    /// Returns the pay period number (1-based).
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the number of days in this pay period.
    ///
    /// This should always be 14 for valid pay periods.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// Returns whether `date` falls within this pay period.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the seven dates of the first week, Sunday through Saturday.
    #[must_use]
    pub fn week_one(&self) -> Vec<Date> {
        self.days().into_iter().take(7).collect()
    }

    /// Returns the seven dates of the second week, Sunday through Saturday.
    #[must_use]
    pub fn week_two(&self) -> Vec<Date> {
        self.days().into_iter().skip(7).collect()
    }

    /// Returns all fourteen dates of the pay period in order.
    #[must_use]
    pub fn days(&self) -> Vec<Date> {
        std::iter::successors(Some(self.start_date), |day| day.next_day())
            .take_while(|day| *day <= self.end_date)
            .collect()
    }
}
