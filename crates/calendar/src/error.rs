// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for pay calendar calculations and configuration.

use thiserror::Error;
use time::{Date, Weekday};

/// Errors raised when a request falls outside what a calendar can answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The year lies outside the window covered by the long-year set.
    #[error("Pay year {year} is unknown to this calendar")]
    YearUnknown {
        /// The offending year.
        year: i32,
    },
    /// A pay period number is not valid for its pay year.
    #[error("Invalid pay period {period} for pay year {year}. Must be between 1 and {max}")]
    PayPeriodOutOfRange {
        /// The pay year the period was checked against.
        year: i32,
        /// The requested or derived period number.
        period: i64,
        /// The number of pay periods in the pay year.
        max: u8,
    },
}

/// Errors raised while loading or validating a calendar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The long-year set contains no years.
    #[error("Long-year set must contain at least one year")]
    EmptyLongYears,
    /// The long-year set is not strictly increasing.
    #[error("Long years must be strictly increasing, but {next} follows {previous}")]
    LongYearsNotIncreasing {
        /// The earlier entry.
        previous: i32,
        /// The entry that does not exceed it.
        next: i32,
    },
    /// The anchor date is not a Sunday.
    #[error("Anchor date must be a Sunday, but {date} is a {weekday}")]
    AnchorNotSunday {
        /// The anchor date.
        date: Date,
        /// The actual weekday.
        weekday: Weekday,
    },
    /// The anchor is not flagged as the first day of pay period 1.
    #[error("Anchor date {date} must be the start of pay period 1 of its pay year")]
    AnchorNotPayYearStart {
        /// The anchor date.
        date: Date,
    },
    /// The anchor's pay year lies outside the window of the long-year set.
    #[error("Anchor pay year {year} is outside the known range {min}..={max}")]
    AnchorOutOfRange {
        /// The anchor's pay year.
        year: i32,
        /// First year of the known window.
        min: i32,
        /// Last year of the known window.
        max: i32,
    },
    /// The configuration document could not be parsed.
    #[error("Failed to parse calendar configuration: {message}")]
    Parse {
        /// The parser's error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_calendar_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
        assert_impl::<ConfigError>();
    }

    #[test]
    fn test_config_error_display() {
        let err: ConfigError = ConfigError::AnchorNotSunday {
            date: date!(1901 - 01 - 12),
            weekday: Weekday::Saturday,
        };
        assert_eq!(
            err.to_string(),
            "Anchor date must be a Sunday, but 1901-01-12 is a Saturday"
        );

        let err: ConfigError = ConfigError::LongYearsNotIncreasing {
            previous: 1922,
            next: 1911,
        };
        assert_eq!(
            err.to_string(),
            "Long years must be strictly increasing, but 1911 follows 1922"
        );

        let err: ConfigError = ConfigError::AnchorOutOfRange {
            year: 1850,
            min: 1890,
            max: 2100,
        };
        assert_eq!(
            err.to_string(),
            "Anchor pay year 1850 is outside the known range 1890..=2100"
        );
    }
}
