// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pay calendar calculation engine.
//!
//! A [`PayCalendar`] converts between calendar dates and pay calendar
//! coordinates (pay year, pay period number, pay period start date). Every
//! answer is computed from two immutable inputs: the [`Anchor`] and the set
//! of long (27 pay period) years.
//!
//! Pay years are only answered within ten years of the first and last long
//! year. Outside that window the drift-correction pattern is not known and
//! [`CalendarError::YearUnknown`] is returned.

use crate::anchor::{Anchor, pay_year_of_start};
use crate::error::CalendarError;
use crate::pay_year::{PayPeriod, PayYear};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use time::{Date, Duration};
use tracing::{debug, trace};

/// Number of days in one pay period.
pub const DAYS_PER_PAY_PERIOD: i64 = 14;

/// Number of years after which the long-year pattern repeats.
pub const CYCLE_YEARS: i32 = 56;

/// Number of days in one full 56-year cycle.
///
/// 56 years of 26 pay periods plus five 27th pay periods: `(56 * 26 + 5) * 14`.
pub const CYCLE_DAYS: i64 = 20_454;

/// Years beyond the first and last long year that can still be answered.
pub const RANGE_MARGIN_YEARS: i32 = 10;

const SHORT_YEAR_PERIODS: u8 = 26;
const LONG_YEAR_PERIODS: u8 = 27;

/// The biweekly pay calendar.
///
/// A `PayCalendar` is immutable after construction and every method is a
/// pure function of its arguments, so a single instance may be shared
/// freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayCalendar {
    anchor: Anchor,
    long_years: BTreeSet<i32>,
}

impl PayCalendar {
    /// Creates a calendar from an anchor and a set of long years.
    ///
    /// Inputs are stored as given. Use [`crate::CalendarConfig`] to validate
    /// them first. An anchor that does not start pay period 1 cannot place
    /// any pay year, so every year start lookup on such a calendar returns
    /// [`CalendarError::YearUnknown`].
    #[must_use]
    pub const fn new(anchor: Anchor, long_years: BTreeSet<i32>) -> Self {
        Self { anchor, long_years }
    }

    /// Returns the anchor.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the long years.
    #[must_use]
    pub const fn long_years(&self) -> &BTreeSet<i32> {
        &self.long_years
    }

    /// Returns the window of years this calendar can answer, or `None` when
    /// the long-year set is empty.
    #[must_use]
    pub fn year_range(&self) -> Option<RangeInclusive<i32>> {
        let first: i32 = *self.long_years.first()?;
        let last: i32 = *self.long_years.last()?;
        Some(first.saturating_sub(RANGE_MARGIN_YEARS)..=last.saturating_add(RANGE_MARGIN_YEARS))
    }

    /// Returns whether `year` lies within [`Self::year_range`].
    #[must_use]
    pub fn is_year_in_range(&self, year: i32) -> bool {
        self.year_range().is_some_and(|range| range.contains(&year))
    }

    /// Returns whether `year` has 27 pay periods.
    #[must_use]
    pub fn is_long_year(&self, year: i32) -> bool {
        self.long_years.contains(&year)
    }

    /// Returns the number of pay periods in `year`: 27 for long years, else 26.
    ///
    /// This is a set lookup only and does not check the year range.
    #[must_use]
    pub fn periods_in_year(&self, year: i32) -> u8 {
        if self.is_long_year(year) {
            LONG_YEAR_PERIODS
        } else {
            SHORT_YEAR_PERIODS
        }
    }

    fn year_length_days(&self, year: i32) -> i64 {
        i64::from(self.periods_in_year(year)) * DAYS_PER_PAY_PERIOD
    }

    /// Computes the start date of pay period 1 of `year`.
    ///
    /// Whole 56-year cycles between the anchor and `year` are skipped in one
    /// step. The remaining years are walked one at a time, forward when
    /// `year` follows the anchor and backward when it precedes it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if:
    /// - `year` is outside the calendar's range or the range of [`Date`]
    /// - The anchor is not flagged as the start of pay period 1
    pub fn year_start_date(&self, year: i32) -> Result<Date, CalendarError> {
        let unknown: CalendarError = CalendarError::YearUnknown { year };
        if !self.is_year_in_range(year)
            || !self.anchor.starts_pay_year()
            || !(Date::MIN.year()..=Date::MAX.year()).contains(&year)
        {
            return Err(unknown);
        }

        let anchor_year: i32 = self.anchor.pay_year();
        // Truncating division: skipped cycles never pass `year`
        let cycles: i32 = year
            .checked_sub(anchor_year)
            .ok_or_else(|| unknown.clone())?
            / CYCLE_YEARS;
        let base_year: i32 = cycles
            .checked_mul(CYCLE_YEARS)
            .and_then(|years| anchor_year.checked_add(years))
            .ok_or_else(|| unknown.clone())?;
        let mut offset_days: i64 = i64::from(cycles) * CYCLE_DAYS;

        if year >= base_year {
            offset_days += (base_year..year)
                .map(|y| self.year_length_days(y))
                .sum::<i64>();
        } else {
            offset_days -= (year..base_year)
                .map(|y| self.year_length_days(y))
                .sum::<i64>();
        }

        let start_date: Date = self
            .anchor
            .date()
            .checked_add(Duration::days(offset_days))
            .ok_or(unknown)?;

        trace!(year, cycles, %start_date, "Resolved pay year start date");
        Ok(start_date)
    }

    /// Computes the last day of `year`, always a Saturday.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if `year` is outside the
    /// calendar's range.
    pub fn year_end_date(&self, year: i32) -> Result<Date, CalendarError> {
        self.pay_year(year)?.end_date()
    }

    /// Computes the start date of pay period `period_no` of the pay year
    /// beginning on `year_start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PayPeriodOutOfRange`] if `period_no` is not
    /// within `1..=periods_in_year`.
    pub fn pay_period_start_date(
        &self,
        year_start_date: Date,
        period_no: u8,
    ) -> Result<Date, CalendarError> {
        let year: i32 = pay_year_of_start(year_start_date);
        Ok(self
            .pay_year_from_start(year, year_start_date)
            .pay_period(period_no)?
            .start_date())
    }

    /// Computes the number of the pay period containing `target_date` within
    /// the pay year beginning on `year_start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PayPeriodOutOfRange`] if `target_date` does
    /// not fall within that pay year.
    pub fn pay_period_number(
        &self,
        year_start_date: Date,
        target_date: Date,
    ) -> Result<u8, CalendarError> {
        let year: i32 = pay_year_of_start(year_start_date);
        self.period_number_in(year, year_start_date, target_date)
    }

    fn period_number_in(
        &self,
        year: i32,
        year_start_date: Date,
        target_date: Date,
    ) -> Result<u8, CalendarError> {
        let max: u8 = self.periods_in_year(year);
        let elapsed: i64 = (target_date - year_start_date).whole_days();
        let period: i64 = elapsed.div_euclid(DAYS_PER_PAY_PERIOD) + 1;

        u8::try_from(period)
            .ok()
            .filter(|number| (1..=max).contains(number))
            .ok_or(CalendarError::PayPeriodOutOfRange { year, period, max })
    }

    fn pay_year_from_start(&self, year: i32, start_date: Date) -> PayYear {
        PayYear::new(year, start_date, self.periods_in_year(year))
    }

    /// Resolves `target_date` to the pay period enclosing it.
    ///
    /// Pay years do not align with calendar years. The pay year named for
    /// the date's calendar year is tried first. A date before its start
    /// belongs to the previous pay year, and a date after its end belongs to
    /// the next one.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if a pay year that has to be
    /// consulted is outside the calendar's range.
    pub fn find_period_info(&self, target_date: Date) -> Result<PayPeriod, CalendarError> {
        let mut pay_year: PayYear = self.pay_year(target_date.year())?;

        if target_date < pay_year.start_date() {
            debug!(%target_date, year = pay_year.year(), "Date precedes pay year, using previous pay year");
            pay_year = self.pay_year(pay_year.year() - 1)?;
        } else if !pay_year.contains(target_date) {
            debug!(%target_date, year = pay_year.year(), "Date follows pay year, using next pay year");
            pay_year = self.pay_year(pay_year.year() + 1)?;
        }

        let period_no: u8 =
            self.period_number_in(pay_year.year(), pay_year.start_date(), target_date)?;
        pay_year.pay_period(period_no)
    }

    /// Returns the start date of every pay period from the one containing
    /// `start_date` through the one containing `end_date`, inclusive.
    ///
    /// The result is empty when `end_date` falls in an earlier pay period
    /// than `start_date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if either endpoint is outside
    /// the calendar's range.
    pub fn generate_period_range(
        &self,
        start_date: Date,
        end_date: Date,
    ) -> Result<Vec<Date>, CalendarError> {
        let first: Date = self.find_period_info(start_date)?.start_date();
        let last: Date = self.find_period_info(end_date)?.start_date();

        Ok(std::iter::successors(Some(first), |current| {
            current.checked_add(Duration::days(DAYS_PER_PAY_PERIOD))
        })
        .take_while(|current| *current <= last)
        .collect())
    }

    /// Returns every pay period from the one containing `start_date` through
    /// the one containing `end_date`, inclusive, across pay year boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if either endpoint, or any pay
    /// year between them, is outside the calendar's range.
    pub fn pay_periods_between(
        &self,
        start_date: Date,
        end_date: Date,
    ) -> Result<Vec<PayPeriod>, CalendarError> {
        let first: PayPeriod = self.find_period_info(start_date)?;
        let last: PayPeriod = self.find_period_info(end_date)?;

        let mut periods: Vec<PayPeriod> = Vec::new();
        for pay_year in self.pay_years(first.pay_year()..=last.pay_year())? {
            periods.extend(
                pay_year
                    .pay_periods()?
                    .into_iter()
                    .filter(|period| {
                        first.start_date() <= period.start_date()
                            && period.start_date() <= last.start_date()
                    }),
            );
        }

        Ok(periods)
    }

    /// Builds the [`PayYear`] for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] if `year` is outside the
    /// calendar's range.
    pub fn pay_year(&self, year: i32) -> Result<PayYear, CalendarError> {
        let start_date: Date = self.year_start_date(year)?;
        Ok(self.pay_year_from_start(year, start_date))
    }

    /// Builds every [`PayYear`] in `years`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearUnknown`] for the first year outside the
    /// calendar's range.
    pub fn pay_years(&self, years: RangeInclusive<i32>) -> Result<Vec<PayYear>, CalendarError> {
        years.map(|year| self.pay_year(year)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn federal() -> PayCalendar {
        crate::CalendarConfig::federal().into_calendar().unwrap()
    }

    #[test]
    fn test_cycle_days_matches_pattern() {
        assert_eq!(
            CYCLE_DAYS,
            (i64::from(CYCLE_YEARS) * 26 + 5) * DAYS_PER_PAY_PERIOD
        );
    }

    #[test]
    fn test_year_range_empty_long_years() {
        let calendar: PayCalendar =
            PayCalendar::new(Anchor::new(date!(1901 - 01 - 13), true), BTreeSet::new());
        assert_eq!(calendar.year_range(), None);
        assert!(!calendar.is_year_in_range(1901));
        assert_eq!(
            calendar.year_start_date(1901).unwrap_err(),
            CalendarError::YearUnknown { year: 1901 }
        );
    }

    #[test]
    fn test_year_range_federal() {
        assert_eq!(federal().year_range(), Some(1890..=2100));
    }

    #[test]
    fn test_periods_in_year_ignores_range() {
        let calendar: PayCalendar = federal();
        assert_eq!(calendar.periods_in_year(1911), 27);
        assert_eq!(calendar.periods_in_year(1912), 26);
        assert_eq!(calendar.periods_in_year(3000), 26);
    }

    #[test]
    fn test_year_start_date_anchor_year() {
        assert_eq!(
            federal().year_start_date(1901).unwrap(),
            date!(1901 - 01 - 13)
        );
    }

    #[test]
    fn test_year_start_date_walks_backward() {
        let calendar: PayCalendar = federal();
        assert_eq!(calendar.year_start_date(1900).unwrap(), date!(1899 - 12 - 31));
        assert_eq!(calendar.year_start_date(1899).unwrap(), date!(1899 - 01 - 01));
        assert_eq!(calendar.year_start_date(1890).unwrap(), date!(1890 - 01 - 12));
    }

    #[test]
    fn test_year_start_date_skips_cycles() {
        let calendar: PayCalendar = federal();
        assert_eq!(calendar.year_start_date(1957).unwrap(), date!(1957 - 01 - 13));
        assert_eq!(calendar.year_start_date(2013).unwrap(), date!(2013 - 01 - 13));
        assert_eq!(calendar.year_start_date(2069).unwrap(), date!(2069 - 01 - 13));
    }

    #[test]
    fn test_year_start_date_extreme_long_year() {
        let calendar: PayCalendar = PayCalendar::new(
            Anchor::new(date!(1901 - 01 - 13), true),
            BTreeSet::from([i32::MIN + 5, 1901]),
        );
        assert!(calendar.is_year_in_range(i32::MIN));
        assert_eq!(
            calendar.year_start_date(i32::MIN).unwrap_err(),
            CalendarError::YearUnknown { year: i32::MIN }
        );
        assert_eq!(
            calendar.year_start_date(i32::MIN + 15).unwrap_err(),
            CalendarError::YearUnknown {
                year: i32::MIN + 15
            }
        );
        assert_eq!(
            calendar.year_start_date(1901).unwrap(),
            date!(1901 - 01 - 13)
        );
    }

    #[test]
    fn test_year_start_date_mid_year_anchor_unknown() {
        let calendar: PayCalendar = PayCalendar::new(
            Anchor::new(date!(1901 - 01 - 27), false),
            crate::FEDERAL_LONG_YEARS.into_iter().collect(),
        );
        assert_eq!(
            calendar.year_start_date(1901).unwrap_err(),
            CalendarError::YearUnknown { year: 1901 }
        );
        assert_eq!(
            calendar.find_period_info(date!(1901 - 02 - 01)).unwrap_err(),
            CalendarError::YearUnknown { year: 1901 }
        );
    }

    #[test]
    fn test_year_end_date() {
        let calendar: PayCalendar = federal();
        assert_eq!(calendar.year_end_date(2023).unwrap(), date!(2024 - 01 - 13));
        assert_eq!(calendar.year_end_date(1900).unwrap(), date!(1901 - 01 - 12));
    }

    #[test]
    fn test_pay_period_start_date_december_start() {
        // Pay year 1900 begins 1899-12-31 and is a long year
        let calendar: PayCalendar = federal();
        assert_eq!(
            calendar
                .pay_period_start_date(date!(1899 - 12 - 31), 27)
                .unwrap(),
            date!(1900 - 12 - 30)
        );
    }

    #[test]
    fn test_pay_period_number_before_start() {
        let calendar: PayCalendar = federal();
        assert_eq!(
            calendar
                .pay_period_number(date!(2025 - 01 - 12), date!(2025 - 01 - 11))
                .unwrap_err(),
            CalendarError::PayPeriodOutOfRange {
                year: 2025,
                period: 0,
                max: 26
            }
        );
        assert_eq!(
            calendar
                .pay_period_number(date!(2025 - 01 - 12), date!(2024 - 12 - 28))
                .unwrap_err(),
            CalendarError::PayPeriodOutOfRange {
                year: 2025,
                period: -1,
                max: 26
            }
        );
    }

    #[test]
    fn test_pay_period_number_past_end() {
        let calendar: PayCalendar = federal();
        assert_eq!(
            calendar
                .pay_period_number(date!(2025 - 01 - 12), date!(2026 - 01 - 11))
                .unwrap_err(),
            CalendarError::PayPeriodOutOfRange {
                year: 2025,
                period: 27,
                max: 26
            }
        );
    }

    #[test]
    fn test_find_period_info_moves_forward_in_december() {
        // 1899-12-31 already belongs to pay year 1900
        let period: PayPeriod = federal().find_period_info(date!(1899 - 12 - 31)).unwrap();
        assert_eq!(period.pay_year(), 1900);
        assert_eq!(period.index(), 1);
        assert_eq!(period.start_date(), date!(1899 - 12 - 31));
    }

    #[test]
    fn test_generate_period_range_reversed_is_empty() {
        let dates: Vec<Date> = federal()
            .generate_period_range(date!(2025 - 03 - 01), date!(2025 - 01 - 20))
            .unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_pay_periods_between_crosses_year() {
        let periods: Vec<PayPeriod> = federal()
            .pay_periods_between(date!(2025 - 12 - 20), date!(2026 - 01 - 25))
            .unwrap();

        let ids: Vec<(i32, u8)> = periods
            .iter()
            .map(|period| (period.pay_year(), period.index()))
            .collect();
        assert_eq!(ids, vec![(2025, 25), (2025, 26), (2026, 1), (2026, 2)]);
    }

    #[test]
    fn test_pay_years_stops_at_unknown_year() {
        let calendar: PayCalendar = federal();
        assert_eq!(calendar.pay_years(2098..=2100).unwrap().len(), 3);
        assert_eq!(
            calendar.pay_years(2099..=2102).unwrap_err(),
            CalendarError::YearUnknown { year: 2101 }
        );
    }
}
