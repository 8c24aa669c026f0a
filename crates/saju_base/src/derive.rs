//! Pillar derivation from a solar date and hour slot.
//!
//! - Year: sexagenary index `(chart_year - 4) mod 60`, with the chart year
//!   rolling over at 입춘 (Feb 4) rather than Jan 1.
//! - Month: ordinal from the solar-term table; branch `(ordinal + 1) mod 12`,
//!   stem offset keyed by the year stem (period 5).
//! - Day: days since 1900-01-31 (갑자) mod 60.
//! - Hour: slot branch; stem offset keyed by the day stem (period 5).

use saju_calendar::{MAX_YEAR, MIN_YEAR, SolarDate, chart_year, lunar_to_solar, solar_month_ordinal};

use crate::branch::Branch;
use crate::chart::{HourSlot, SajuChart};
use crate::error::ChartError;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Stem index of the 寅 month, keyed by year stem index mod 5.
///
/// 갑/기 → 병인, 을/경 → 무인, 병/신 → 경인, 정/임 → 임인, 무/계 → 갑인.
const MONTH_STEM_START: [u8; 5] = [2, 4, 6, 8, 0];

/// Stem index of the 子 hour, keyed by day stem index mod 5.
///
/// 갑/기 → 갑자, 을/경 → 병자, 병/신 → 무자, 정/임 → 경자, 무/계 → 임자.
const HOUR_STEM_START: [u8; 5] = [0, 2, 4, 6, 8];

/// Year pillar for a chart year (already rolled over at 입춘).
pub const fn year_pillar(chart_year: i32) -> Pillar {
    Pillar::from_cycle(chart_year as i64 - 4)
}

/// Month pillar for a year stem and month ordinal (1 = 寅 .. 12 = 丑).
pub fn month_pillar(year_stem: Stem, ordinal: u8) -> Result<Pillar, ChartError> {
    let start = MONTH_STEM_START[(year_stem.index() % 5) as usize];
    let stem = Stem::from_index(start + (ordinal + 9) % 10);
    let branch = Branch::from_index(ordinal + 1);
    Pillar::new(stem, branch)
}

/// Day pillar; 1900-01-31 is 갑자.
pub const fn day_pillar(date: SolarDate) -> Pillar {
    Pillar::from_cycle(date.days_since_epoch())
}

/// Hour pillar for a day stem and hour branch.
pub fn hour_pillar(day_stem: Stem, branch: Branch) -> Result<Pillar, ChartError> {
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize];
    Pillar::new(Stem::from_index(start + branch.index()), branch)
}

/// Derive the four pillars of a solar birth date.
///
/// An unknown hour yields the 子-hour pillar as placeholder with
/// `hour_known = false`.
pub fn derive_chart(date: SolarDate, hour: HourSlot) -> Result<SajuChart, ChartError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year) {
        return Err(saju_calendar::CalendarError::OutOfRange { year: date.year }.into());
    }
    let year = year_pillar(chart_year(date));
    let month = month_pillar(year.stem(), solar_month_ordinal(date.month, date.day))?;
    let day = day_pillar(date);
    let hour_branch = hour.branch();
    let hour_pillar = hour_pillar(day.stem(), hour_branch.unwrap_or(Branch::Ja))?;
    Ok(SajuChart {
        year,
        month,
        day,
        hour: hour_pillar,
        hour_known: hour_branch.is_some(),
    })
}

/// Derive the chart of a lunar birth date by converting it to solar first.
pub fn derive_chart_lunar(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
    hour: HourSlot,
) -> Result<SajuChart, ChartError> {
    let solar = lunar_to_solar(year, month, day, is_leap_month)?;
    derive_chart(solar, hour)
}
