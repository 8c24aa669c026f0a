//! Gregorian calendar ↔ integer Julian Day Number.
//!
//! Day arithmetic throughout the workspace is done on JDNs, which makes
//! "days between two dates" a plain subtraction and keeps the lunar walk
//! and the sexagenary day count independent of any clock or time zone.
//!
//! Algorithm: Fliegel & Van Flandern (1968) forward, Richards (2013) inverse.
//! Valid for all proleptic Gregorian dates with positive JDN.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// JDN of 1900-01-31, day 0 of the lunar table and of the day-pillar cycle.
pub const EPOCH_JDN: i64 = 2_415_051;

/// JDN of 2000-01-01 (sanity anchor).
pub const J2000_JDN: i64 = 2_451_545;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Convert a Gregorian calendar date to its Julian Day Number.
///
/// No validation; see [`SolarDate::new`] for checked construction.
pub const fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Convert a Julian Day Number back to a Gregorian `(year, month, day)`.
pub const fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// A validated proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Build a date, rejecting months outside 1..=12 and days past month end.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Date for a Julian Day Number.
    pub const fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }

    /// Julian Day Number of this date.
    pub const fn jdn(self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    /// Signed day count since 1900-01-31.
    pub const fn days_since_epoch(self) -> i64 {
        self.jdn() - EPOCH_JDN
    }
}

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
