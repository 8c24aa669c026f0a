//! Golden lunar ↔ solar conversions.
//!
//! Reference dates are Korean lunar new years and leap-month starts as
//! published by the Korea Astronomy and Space Science Institute calendar.

use saju_calendar::{CalendarError, LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};

fn lunar(year: i32, month: u32, day: u32, is_leap_month: bool) -> LunarDate {
    LunarDate { year, month, day, is_leap_month }
}

fn solar(year: i32, month: u32, day: u32) -> SolarDate {
    SolarDate { year, month, day }
}

// ---------------------------------------------------------------------------
// Solar → lunar
// ---------------------------------------------------------------------------

#[test]
fn lunar_new_years() {
    let cases = [
        (solar(1900, 1, 31), lunar(1900, 1, 1, false)),
        (solar(1984, 2, 2), lunar(1984, 1, 1, false)),
        (solar(2000, 2, 5), lunar(2000, 1, 1, false)),
        (solar(2024, 2, 10), lunar(2024, 1, 1, false)),
    ];
    for (s, l) in cases {
        assert_eq!(solar_to_lunar(s.year, s.month, s.day).unwrap(), l, "solar {s}");
    }
}

#[test]
fn leap_month_starts() {
    assert_eq!(solar_to_lunar(2023, 3, 22).unwrap(), lunar(2023, 2, 1, true));
    assert_eq!(solar_to_lunar(2023, 4, 20).unwrap(), lunar(2023, 3, 1, false));
    assert_eq!(solar_to_lunar(2020, 5, 23).unwrap(), lunar(2020, 4, 1, true));
}

#[test]
fn mid_year_date() {
    assert_eq!(solar_to_lunar(1990, 5, 15).unwrap(), lunar(1990, 4, 21, false));
}

#[test]
fn last_solar_day_of_range() {
    assert_eq!(solar_to_lunar(2100, 12, 31).unwrap(), lunar(2100, 12, 1, false));
}

// ---------------------------------------------------------------------------
// Lunar → solar
// ---------------------------------------------------------------------------

#[test]
fn leap_month_to_solar() {
    assert_eq!(lunar_to_solar(2023, 2, 1, true).unwrap(), solar(2023, 3, 22));
    assert_eq!(lunar_to_solar(2020, 4, 1, true).unwrap(), solar(2020, 5, 23));
}

#[test]
fn ordinary_month_to_solar() {
    assert_eq!(lunar_to_solar(2024, 1, 1, false).unwrap(), solar(2024, 2, 10));
    assert_eq!(lunar_to_solar(1990, 4, 21, false).unwrap(), solar(1990, 5, 15));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn invalid_solar_day() {
    assert_eq!(
        solar_to_lunar(2023, 2, 29),
        Err(CalendarError::InvalidDate { year: 2023, month: 2, day: 29 })
    );
}

#[test]
fn unsupported_years() {
    assert_eq!(solar_to_lunar(1899, 12, 31), Err(CalendarError::OutOfRange { year: 1899 }));
    assert_eq!(lunar_to_solar(2101, 1, 1, false), Err(CalendarError::OutOfRange { year: 2101 }));
}
