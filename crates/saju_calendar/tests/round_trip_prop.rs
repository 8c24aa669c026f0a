//! Property tests: lunar ↔ solar conversion is a bijection on the table.

use proptest::prelude::*;
use saju_calendar::{
    EPOCH_JDN, MAX_YEAR, MIN_YEAR, SolarDate, calendar_to_jdn, leap_month, leap_month_days,
    lunar_to_solar, month_days, solar_to_lunar,
};

/// JDN of 2100-12-31, the last supported solar day.
const LAST_JDN: i64 = calendar_to_jdn(2100, 12, 31);

proptest! {
    #[test]
    fn solar_lunar_solar(jdn in EPOCH_JDN..=LAST_JDN) {
        let s = SolarDate::from_jdn(jdn);
        let l = solar_to_lunar(s.year, s.month, s.day).unwrap();
        let back = lunar_to_solar(l.year, l.month, l.day, l.is_leap_month).unwrap();
        prop_assert_eq!(back, s);
    }

    #[test]
    fn lunar_solar_lunar(year in MIN_YEAR..=MAX_YEAR, month in 1u32..=12, day_seed in 0u32..30, leap in any::<bool>()) {
        let is_leap = leap && leap_month(year).unwrap() == Some(month);
        let len = if is_leap {
            leap_month_days(year).unwrap()
        } else {
            month_days(year, month).unwrap()
        };
        let day = day_seed % len + 1;
        let s = lunar_to_solar(year, month, day, is_leap).unwrap();
        // Late lunar-2100 dates spill into solar 2101, outside the solar range.
        prop_assume!(s.year <= MAX_YEAR);
        let l = solar_to_lunar(s.year, s.month, s.day).unwrap();
        prop_assert_eq!((l.year, l.month, l.day, l.is_leap_month), (year, month, day, is_leap));
    }

    #[test]
    fn consecutive_days_advance_by_one(jdn in EPOCH_JDN..LAST_JDN) {
        let a = SolarDate::from_jdn(jdn);
        let b = SolarDate::from_jdn(jdn + 1);
        let la = solar_to_lunar(a.year, a.month, a.day).unwrap();
        let lb = solar_to_lunar(b.year, b.month, b.day).unwrap();
        if lb.day != 1 {
            prop_assert_eq!(lb.day, la.day + 1);
            prop_assert_eq!((lb.year, lb.month, lb.is_leap_month), (la.year, la.month, la.is_leap_month));
        }
    }
}
