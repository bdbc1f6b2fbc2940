// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar configuration and the built-in federal table.
//!
//! The federal pay calendar inserts a 27th pay period every 11.2 years. This
//! happens five times in a 56-year cycle, in years 11, 22, 33, 44 and 56,
//! after which the pattern starts over.

use crate::anchor::Anchor;
use crate::calendar::PayCalendar;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::macros::date;
use time::{Date, Weekday};
use tracing::warn;

/// Start of pay period 1 of pay year 1901.
pub const FEDERAL_ANCHOR_DATE: Date = date!(1901 - 01 - 13);

/// Federal long years from 1900 through 2090.
pub const FEDERAL_LONG_YEARS: [i32; 18] = [
    1900, 1911, 1922, 1933, 1944, 1956, 1967, 1978, 1989, 2000, 2012, 2023, 2034, 2045, 2056,
    2068, 2079, 2090,
];

/// An anchor and a long-year set, the two inputs of a [`PayCalendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// The epoch anchor.
    pub anchor: Anchor,
    /// Years with 27 pay periods, strictly increasing.
    pub long_years: Vec<i32>,
}

impl CalendarConfig {
    /// Returns the built-in U.S. federal pay calendar table.
    #[must_use]
    pub fn federal() -> Self {
        Self {
            anchor: Anchor::new(FEDERAL_ANCHOR_DATE, true),
            long_years: FEDERAL_LONG_YEARS.to_vec(),
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// ```json
    /// {
    ///   "anchor": { "date": "1901-01-13", "starts_pay_year": true },
    ///   "long_years": [1900, 1911, 1922]
    /// }
    /// ```
    ///
    /// The result is not validated; call [`Self::validate`] or
    /// [`Self::into_calendar`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks that the configuration describes a usable calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The long-year set is empty or not strictly increasing
    /// - The anchor is not a Sunday
    /// - The anchor is not the start of pay period 1
    /// - The anchor's pay year is outside the long-year window
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().inspect_err(|err| {
            warn!(%err, "Rejected pay calendar configuration");
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.long_years.is_empty() {
            return Err(ConfigError::EmptyLongYears);
        }

        if let Some(pair) = self.long_years.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::LongYearsNotIncreasing {
                previous: pair[0],
                next: pair[1],
            });
        }

        let date: Date = self.anchor.date();
        if date.weekday() != Weekday::Sunday {
            return Err(ConfigError::AnchorNotSunday {
                date,
                weekday: date.weekday(),
            });
        }

        if !self.anchor.starts_pay_year() {
            return Err(ConfigError::AnchorNotPayYearStart { date });
        }

        let calendar: PayCalendar = self.to_calendar();
        let year: i32 = self.anchor.pay_year();
        if let Some(range) = calendar.year_range().filter(|range| !range.contains(&year)) {
            return Err(ConfigError::AnchorOutOfRange {
                year,
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(())
    }

    fn to_calendar(&self) -> PayCalendar {
        PayCalendar::new(
            self.anchor,
            self.long_years.iter().copied().collect::<BTreeSet<i32>>(),
        )
    }

    /// Validates the configuration and builds a [`PayCalendar`] from it.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; see [`Self::validate`].
    pub fn into_calendar(self) -> Result<PayCalendar, ConfigError> {
        self.validate()?;
        Ok(self.to_calendar())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_config_is_valid() {
        assert_eq!(CalendarConfig::federal().validate(), Ok(()));
    }

    #[test]
    fn test_federal_long_year_spacing() {
        for pair in FEDERAL_LONG_YEARS.windows(2) {
            let gap: i32 = pair[1] - pair[0];
            assert!(
                gap == 11 || gap == 12,
                "Unexpected gap of {gap} between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_empty_long_years_rejected() {
        let config: CalendarConfig = CalendarConfig {
            long_years: Vec::new(),
            ..CalendarConfig::federal()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyLongYears));
    }

    #[test]
    fn test_unordered_long_years_rejected() {
        let config: CalendarConfig = CalendarConfig {
            long_years: vec![1911, 1933, 1922],
            ..CalendarConfig::federal()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LongYearsNotIncreasing {
                previous: 1933,
                next: 1922
            })
        );
    }

    #[test]
    fn test_duplicate_long_years_rejected() {
        let config: CalendarConfig = CalendarConfig {
            long_years: vec![1911, 1911],
            ..CalendarConfig::federal()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LongYearsNotIncreasing { .. })
        ));
    }

    #[test]
    fn test_anchor_not_sunday_rejected() {
        let config: CalendarConfig = CalendarConfig {
            anchor: Anchor::new(date!(1901 - 01 - 12), true),
            ..CalendarConfig::federal()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AnchorNotSunday {
                date: date!(1901 - 01 - 12),
                weekday: Weekday::Saturday
            })
        );
    }

    #[test]
    fn test_anchor_not_pay_year_start_rejected() {
        let config: CalendarConfig = CalendarConfig {
            anchor: Anchor::new(date!(1901 - 01 - 27), false),
            ..CalendarConfig::federal()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AnchorNotPayYearStart {
                date: date!(1901 - 01 - 27)
            })
        );
    }

    #[test]
    fn test_anchor_out_of_range_rejected() {
        let config: CalendarConfig = CalendarConfig {
            long_years: vec![2023, 2034],
            ..CalendarConfig::federal()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AnchorOutOfRange {
                year: 1901,
                min: 2013,
                max: 2044
            })
        );
    }

    #[test]
    fn test_from_json_str() {
        let json: &str = r#"{
            "anchor": { "date": "1901-01-13", "starts_pay_year": true },
            "long_years": [1900, 1911, 1922]
        }"#;
        let config: CalendarConfig = CalendarConfig::from_json_str(json).unwrap();
        assert_eq!(config.anchor, Anchor::new(FEDERAL_ANCHOR_DATE, true));
        assert_eq!(config.long_years, vec![1900, 1911, 1922]);

        let calendar: PayCalendar = config.into_calendar().unwrap();
        assert_eq!(calendar.year_range(), Some(1890..=1932));
    }

    #[test]
    fn test_from_json_str_bad_date() {
        let json: &str = r#"{
            "anchor": { "date": "1901/01/13", "starts_pay_year": true },
            "long_years": [1911]
        }"#;
        assert!(matches!(
            CalendarConfig::from_json_str(json),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config: CalendarConfig = CalendarConfig::federal();
        let json: String = serde_json::to_string(&config).unwrap();
        assert_eq!(CalendarConfig::from_json_str(&json).unwrap(), config);
    }
}
