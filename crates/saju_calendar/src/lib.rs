//! Calendar primitives for four-pillar charts.
//!
//! This crate provides:
//! - Gregorian date ↔ Julian Day Number conversion
//! - Korean lunisolar (음력) ↔ solar conversion over 1900–2100
//! - The fixed solar-term month table that drives month pillars
//!
//! Everything here is a pure function over immutable tables.

pub mod error;
pub mod julian;
pub mod lunar;
pub mod solar_term;

pub use error::CalendarError;
pub use julian::{
    EPOCH_JDN, J2000_JDN, SolarDate, calendar_to_jdn, days_in_month, is_leap_year,
    jdn_to_calendar,
};
pub use lunar::{
    LunarDate, MAX_YEAR, MIN_YEAR, leap_month, leap_month_days, lunar_to_solar, lunar_year_days,
    month_days, solar_to_lunar,
};
pub use solar_term::{
    LUCK_TERM_DAYS, SOLAR_TERMS, SolarTerm, chart_year, governing_term, is_before_spring_start,
    luck_term_day, solar_month_ordinal,
};
