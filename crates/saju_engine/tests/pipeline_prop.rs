use proptest::prelude::*;

use saju_engine::{BirthInput, ChartOptions, Gender, HourSlot, SolarDate, calculate_saju};
use saju_calendar::calendar_to_jdn;

const FIRST_JDN: i64 = calendar_to_jdn(1900, 1, 1);
const LAST_JDN: i64 = calendar_to_jdn(2100, 12, 31);

proptest! {
    #[test]
    fn every_in_range_solar_date_reads(jdn in FIRST_JDN..=LAST_JDN, male in any::<bool>(), age in 0u32..100) {
        let d = SolarDate::from_jdn(jdn);
        let gender = if male { Gender::Male } else { Gender::Female };
        let input = BirthInput::solar(d.year, d.month, d.day, HourSlot::Unknown, gender);
        let r = calculate_saju(&input, &ChartOptions::with_age(age)).unwrap();
        prop_assert_eq!(r.solar_date, d);
        prop_assert!(r.day_master().score <= 100);
        let first = r.luck_cycles[0].start_age;
        let last = r.luck_cycles[7].end_age;
        let current = r.luck_cycles.iter().filter(|p| p.is_current).count();
        prop_assert_eq!(current, usize::from((first..=last).contains(&age)));
    }
}
