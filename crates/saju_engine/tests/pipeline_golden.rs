//! End-to-end readings through the public pipeline.

use saju_engine::{
    BirthInput, CalendarError, ChartOptions, ChartPattern, Element, Gender, HourSlot, SajuError,
    SolarDate, StrengthTier, calculate_compatibility, calculate_saju,
};

fn reading(input: BirthInput, age: u32) -> saju_engine::SajuResult {
    calculate_saju(&input, &ChartOptions::with_age(age)).unwrap()
}

// ---------------------------------------------------------------------------
// Full readings
// ---------------------------------------------------------------------------

#[test]
fn solar_1990_male() {
    let r = reading(BirthInput::solar(1990, 5, 15, HourSlot::O, Gender::Male), 34);
    assert_eq!(r.chart.to_string(), "庚午 辛巳 庚子 壬午");
    assert_eq!(r.five_elements.dominant, Element::Metal);
    assert_eq!(r.five_elements.lacking, Element::Wood);
    assert_eq!(r.day_master().score, 22);
    assert_eq!(r.day_master().tier, StrengthTier::Weak);
    assert_eq!(r.yongshin().favorable, Element::Earth);
    assert_eq!(r.recommendations.number, 5);
    assert_eq!(r.recommendations.direction, "중앙");
    assert_eq!(r.pattern, ChartPattern::IndirectAuthority);
    assert_eq!(r.luck_cycles.len(), 8);
    assert_eq!(r.current_luck_cycle().map(|p| p.pillar.to_string()).as_deref(), Some("甲申"));
    assert!(!r.reduced_confidence());
    let lunar = r.lunar_date.unwrap();
    assert_eq!((lunar.year, lunar.month, lunar.day, lunar.is_leap_month), (1990, 4, 21, false));
}

#[test]
fn lunar_input_gives_same_chart() {
    let solar = reading(BirthInput::solar(1990, 5, 15, HourSlot::O, Gender::Male), 34);
    let lunar = reading(BirthInput::lunar(1990, 4, 21, false, HourSlot::O, Gender::Male), 34);
    assert_eq!(solar, lunar);
}

#[test]
fn leap_month_input() {
    // Lunar 2023 leap 2/1 is solar 2023-03-22.
    let r = reading(BirthInput::lunar(2023, 2, 1, true, HourSlot::Unknown, Gender::Female), 1);
    assert_eq!(r.solar_date, SolarDate::new(2023, 3, 22).unwrap());
    assert!(r.lunar_date.unwrap().is_leap_month);
    assert!(r.reduced_confidence());
    assert!(!r.chart.hour_known);
}

#[test]
fn following_pattern_1984() {
    let r = reading(BirthInput::solar(1984, 2, 4, HourSlot::Ja, Gender::Female), 40);
    assert_eq!(r.chart.to_string(), "甲子 丙寅 戊子 壬子");
    assert_eq!(r.day_master().tier, StrengthTier::ExtremelyWeak);
    assert_eq!(r.pattern, ChartPattern::FollowWealth);
}

#[test]
fn reference_year_sets_current_period() {
    let input = BirthInput::solar(1990, 5, 15, HourSlot::O, Gender::Male);
    let options = ChartOptions { reference_year: Some(2024), current_age: None };
    let r = calculate_saju(&input, &options).unwrap();
    assert_eq!(r.luck_cycles.iter().filter(|p| p.is_current).count(), 1);
    let none = calculate_saju(&input, &ChartOptions::default()).unwrap();
    assert!(none.current_luck_cycle().is_none());
}

#[test]
fn lunar_birth_ages_from_solar_year() {
    // Lunar 1989-12-22 is solar 1990-01-18: 34 in 2024, not 35.
    let input = BirthInput::lunar(1989, 12, 22, false, HourSlot::Ja, Gender::Male);
    let options = ChartOptions { reference_year: Some(2024), current_age: None };
    let r = calculate_saju(&input, &options).unwrap();
    assert_eq!(r.solar_date, SolarDate::new(1990, 1, 18).unwrap());
    assert_eq!(r.chart.to_string(), "己巳 丁丑 癸卯 壬子");
    assert_eq!(r.luck_cycles[0].start_age, 5);
    let current = r.current_luck_cycle().unwrap();
    assert_eq!((current.start_age, current.end_age), (25, 34));
    assert_eq!(current.pillar.to_string(), "甲戌");
}

#[test]
fn epoch_gap_has_no_lunar_date() {
    let r = reading(BirthInput::solar(1900, 1, 15, HourSlot::Ja, Gender::Male), 0);
    assert!(r.lunar_date.is_none());
}

#[test]
fn serde_round_trip() {
    let r = reading(BirthInput::solar(1985, 1, 1, HourSlot::Myo, Gender::Female), 39);
    let json = serde_json::to_string(&r).unwrap();
    let back: saju_engine::SajuResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
    assert_eq!(back.day_master(), r.day_master());
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_year_surfaces_verbatim() {
    let input = BirthInput::solar(2101, 1, 1, HourSlot::Ja, Gender::Male);
    let err = calculate_saju(&input, &ChartOptions::default()).unwrap_err();
    assert_eq!(err, SajuError::Calendar(CalendarError::OutOfRange { year: 2101 }));
    assert!(err.to_string().contains("2101"));
}

#[test]
fn invalid_day_is_rejected() {
    let input = BirthInput::solar(1990, 2, 30, HourSlot::Ja, Gender::Male);
    assert_eq!(
        calculate_saju(&input, &ChartOptions::default()).unwrap_err(),
        SajuError::Calendar(CalendarError::InvalidDate { year: 1990, month: 2, day: 30 })
    );
}

#[test]
fn inconsistent_leap_flag_is_rejected() {
    // 2024 has no leap month.
    let input = BirthInput::lunar(2024, 3, 1, true, HourSlot::Ja, Gender::Male);
    assert!(matches!(
        calculate_saju(&input, &ChartOptions::default()),
        Err(SajuError::Calendar(CalendarError::InvalidLeapMonth { .. }))
    ));
}

// ---------------------------------------------------------------------------
// Compatibility
// ---------------------------------------------------------------------------

#[test]
fn compatibility_is_symmetric_in_total() {
    let a = reading(BirthInput::solar(1990, 5, 15, HourSlot::O, Gender::Male), 34);
    let b = reading(BirthInput::solar(1984, 2, 4, HourSlot::Ja, Gender::Female), 40);
    let ab = calculate_compatibility(&a, &b);
    let ba = calculate_compatibility(&b, &a);
    assert_eq!(ab.total, ba.total);
    // Metal and earth day masters: earth generates metal.
    assert_eq!(ab.categories[0].score, 90);
    // The 1984 chart lacks metal, the 1990 chart's dominant element.
    assert_eq!(ab.categories[3].score, 75);
    assert_eq!(ba.categories[3].score, 75);
}
