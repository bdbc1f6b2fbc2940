// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Biweekly pay period calculations for the U.S. federal pay calendar.
//!
//! Every pay period starts on a Sunday and ends on the Saturday of the
//! following week. A pay year has 26 pay periods (364 days), so it drifts
//! against the Gregorian calendar by about 1.25 days a year. A 27th pay
//! period is inserted roughly every 11.2 years to pull it back.
//!
//! ```
//! use fedpp_calendar::{CalendarConfig, PayCalendar, PayPeriod};
//! use time::macros::date;
//!
//! let calendar: PayCalendar = CalendarConfig::federal().into_calendar()?;
//! let period: PayPeriod = calendar.find_period_info(date!(2025 - 07 - 04))?;
//!
//! assert_eq!(period.pay_year(), 2025);
//! assert_eq!(period.index(), 13);
//! assert_eq!(period.start_date(), date!(2025 - 06 - 29));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

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

mod anchor;
mod calendar;
mod config;
mod error;
mod pay_year;

#[cfg(test)]
mod tests;

pub use anchor::{Anchor, pay_year_of_start};
pub use calendar::{
    CYCLE_DAYS, CYCLE_YEARS, DAYS_PER_PAY_PERIOD, PayCalendar, RANGE_MARGIN_YEARS,
};
pub use config::{CalendarConfig, FEDERAL_ANCHOR_DATE, FEDERAL_LONG_YEARS};
pub use error::{CalendarError, ConfigError};
pub use pay_year::{PayPeriod, PayYear};
