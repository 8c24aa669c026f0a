//! Korean lunisolar calendar (음력) over 1900..=2100.
//!
//! Each lunar year is packed into one `u32`:
//!
//! | Bits    | Meaning                                              |
//! |---------|------------------------------------------------------|
//! | 0..4    | Leap month ordinal (0 = no leap month)               |
//! | 4..16   | Month lengths, bit `0x10000 >> m` set = month m has 30 days |
//! | 16      | Leap month has 30 days (else 29)                     |
//!
//! Lunar 1900-01-01 falls on solar 1900-01-31 ([`EPOCH_JDN`]). Conversion
//! walks whole lunar years from the epoch, then months, with the leap month
//! placed directly after the ordinary month it repeats.

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::julian::{EPOCH_JDN, SolarDate};

/// First supported year.
pub const MIN_YEAR: i32 = 1900;
/// Last supported year.
pub const MAX_YEAR: i32 = 2100;

const LUNAR_DATA: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a4d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

const fn raw(year: i32) -> u32 {
    LUNAR_DATA[(year - MIN_YEAR) as usize]
}

const fn raw_month_days(data: u32, month: u32) -> u32 {
    if data & (0x10000 >> month) != 0 { 30 } else { 29 }
}

const fn raw_leap_month(data: u32) -> u32 {
    data & 0xf
}

const fn raw_leap_days(data: u32) -> u32 {
    if raw_leap_month(data) == 0 {
        0
    } else if data & 0x10000 != 0 {
        30
    } else {
        29
    }
}

const fn raw_year_days(data: u32) -> u32 {
    let mut sum = 0;
    let mut m = 1;
    while m <= 12 {
        sum += raw_month_days(data, m);
        m += 1;
    }
    sum + raw_leap_days(data)
}

fn year_data(year: i32) -> Result<u32, CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(raw(year))
    } else {
        Err(CalendarError::OutOfRange { year })
    }
}

/// Ordinal of the leap month in a lunar year, if it has one.
pub fn leap_month(year: i32) -> Result<Option<u32>, CalendarError> {
    let m = raw_leap_month(year_data(year)?);
    Ok((m != 0).then_some(m))
}

/// Length of an ordinary (non-leap) lunar month: 29 or 30.
pub fn month_days(year: i32, month: u32) -> Result<u32, CalendarError> {
    let data = year_data(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(raw_month_days(data, month))
}

/// Length of the leap month, or 0 when the year has none.
pub fn leap_month_days(year: i32) -> Result<u32, CalendarError> {
    Ok(raw_leap_days(year_data(year)?))
}

/// Total days in a lunar year (353..=385).
pub fn lunar_year_days(year: i32) -> Result<u32, CalendarError> {
    Ok(raw_year_days(year_data(year)?))
}

/// A lunar calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// The date lies in the intercalary repeat of `month`.
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Build a lunar date, checking month length and the leap flag
    /// against the year's table entry.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, CalendarError> {
        let data = year_data(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let len = if is_leap_month {
            if raw_leap_month(data) != month {
                return Err(CalendarError::InvalidLeapMonth { year, month });
            }
            raw_leap_days(data)
        } else {
            raw_month_days(data, month)
        };
        if day == 0 || day > len {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day, is_leap_month })
    }

    /// Solar equivalent of this date.
    pub fn to_solar(self) -> SolarDate {
        let mut offset: i64 = 0;
        for y in MIN_YEAR..self.year {
            offset += raw_year_days(raw(y)) as i64;
        }
        let data = raw(self.year);
        let leap = raw_leap_month(data);
        for m in 1..self.month {
            offset += raw_month_days(data, m) as i64;
            if m == leap {
                offset += raw_leap_days(data) as i64;
            }
        }
        if self.is_leap_month {
            offset += raw_month_days(data, self.month) as i64;
        }
        offset += self.day as i64 - 1;
        SolarDate::from_jdn(EPOCH_JDN + offset)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.is_leap_month {
            write!(f, " (윤달)")?;
        }
        Ok(())
    }
}

/// Convert a solar (Gregorian) date to its lunar date.
///
/// Solar years outside 1900..=2100 fail with [`CalendarError::OutOfRange`];
/// 1900-01-01..=1900-01-30 precede the table and fail with
/// [`CalendarError::BeforeEpoch`].
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::OutOfRange { year });
    }
    let date = SolarDate::new(year, month, day)?;
    let mut offset = date.days_since_epoch();
    if offset < 0 {
        return Err(CalendarError::BeforeEpoch { year, month, day });
    }

    for y in MIN_YEAR..=MAX_YEAR {
        let data = raw(y);
        let year_len = raw_year_days(data) as i64;
        if offset >= year_len {
            offset -= year_len;
            continue;
        }

        let leap = raw_leap_month(data);
        for m in 1..=12 {
            let len = raw_month_days(data, m) as i64;
            if offset < len {
                return Ok(LunarDate { year: y, month: m, day: offset as u32 + 1, is_leap_month: false });
            }
            offset -= len;
            if m == leap {
                let len = raw_leap_days(data) as i64;
                if offset < len {
                    return Ok(LunarDate { year: y, month: m, day: offset as u32 + 1, is_leap_month: true });
                }
                offset -= len;
            }
        }
    }
    // Lunar 2100 ends in solar 2101, so every in-range solar date resolves above.
    Err(CalendarError::OutOfRange { year })
}

/// Convert a lunar date to its solar (Gregorian) date.
///
/// `is_leap_month` must match the year's actual leap month, otherwise
/// [`CalendarError::InvalidLeapMonth`]. Late lunar-2100 dates map into
/// solar 2101.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
) -> Result<SolarDate, CalendarError> {
    Ok(LunarDate::new(year, month, day, is_leap_month)?.to_solar())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_lunar_new_year_1900() {
        let l = solar_to_lunar(1900, 1, 31).unwrap();
        assert_eq!(l, LunarDate { year: 1900, month: 1, day: 1, is_leap_month: false });
    }

    #[test]
    fn before_epoch_rejected() {
        assert_eq!(
            solar_to_lunar(1900, 1, 30),
            Err(CalendarError::BeforeEpoch { year: 1900, month: 1, day: 30 })
        );
    }

    #[test]
    fn out_of_range_names_year() {
        let err = solar_to_lunar(2101, 1, 1).unwrap_err();
        assert_eq!(err, CalendarError::OutOfRange { year: 2101 });
        assert!(err.to_string().contains("2101"));
        assert!(lunar_to_solar(1899, 1, 1, false).is_err());
    }

    #[test]
    fn year_lengths_are_plausible() {
        for y in MIN_YEAR..=MAX_YEAR {
            let days = lunar_year_days(y).unwrap();
            assert!((353..=385).contains(&days), "lunar year {y} has {days} days");
            if leap_month(y).unwrap().is_some() {
                assert!(days >= 383, "leap year {y} has {days} days");
            }
        }
    }

    #[test]
    fn known_leap_months() {
        assert_eq!(leap_month(2023).unwrap(), Some(2));
        assert_eq!(leap_month(2020).unwrap(), Some(4));
        assert_eq!(leap_month(2024).unwrap(), None);
    }

    #[test]
    fn leap_flag_checked() {
        assert_eq!(
            lunar_to_solar(2023, 3, 1, true),
            Err(CalendarError::InvalidLeapMonth { year: 2023, month: 3 })
        );
        assert_eq!(
            lunar_to_solar(2024, 1, 1, true),
            Err(CalendarError::InvalidLeapMonth { year: 2024, month: 1 })
        );
    }

    #[test]
    fn day_past_month_end_rejected() {
        let len = month_days(2024, 1).unwrap();
        assert!(lunar_to_solar(2024, 1, len, false).is_ok());
        assert_eq!(
            lunar_to_solar(2024, 1, len + 1, false),
            Err(CalendarError::InvalidDate { year: 2024, month: 1, day: len + 1 })
        );
    }

    #[test]
    fn leap_month_follows_its_ordinary_month() {
        // 2023: ordinary 2nd month, then leap 2nd month, then 3rd month.
        let leap_start = lunar_to_solar(2023, 2, 1, true).unwrap();
        let ordinary_start = lunar_to_solar(2023, 2, 1, false).unwrap();
        let third = lunar_to_solar(2023, 3, 1, false).unwrap();
        let len = month_days(2023, 2).unwrap() as i64;
        let leap_len = leap_month_days(2023).unwrap() as i64;
        assert_eq!(leap_start.jdn() - ordinary_start.jdn(), len);
        assert_eq!(third.jdn() - leap_start.jdn(), leap_len);
    }

    #[test]
    fn last_supported_solar_day() {
        let l = solar_to_lunar(2100, 12, 31).unwrap();
        assert_eq!(l.year, 2100);
        assert_eq!(lunar_to_solar(l.year, l.month, l.day, l.is_leap_month).unwrap(),
            SolarDate { year: 2100, month: 12, day: 31 });
    }
}
