//! Error types for calendar conversion.

use thiserror::Error;

/// Errors from solar/lunar date validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year lies outside the lunar table (1900..=2100).
    #[error("지원하지 않는 연도입니다: {year}년 (1900~2100년만 지원)")]
    OutOfRange { year: i32 },
    /// Solar date precedes the lunar epoch (1900-01-31).
    #[error("{year:04}-{month:02}-{day:02} precedes the lunar epoch 1900-01-31")]
    BeforeEpoch { year: i32, month: u32, day: u32 },
    /// Month is not in 1..=12.
    #[error("invalid month: {month}")]
    InvalidMonth { month: u32 },
    /// Day is zero or exceeds the length of its month.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Leap flag set on a month that is not the year's leap month.
    #[error("lunar year {year} has no leap month {month}")]
    InvalidLeapMonth { year: i32, month: u32 },
}
