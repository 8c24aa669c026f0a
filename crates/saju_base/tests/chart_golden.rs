//! Golden charts: pillars, balance, strength, favorable element, pattern
//! and luck cycles for a handful of fixed birth moments.

use saju_base::{
    Branch, ChartPattern, Element, Gender, HourSlot, RelationKind, SajuChart, Stem, StrengthTier,
    analyze_day_master, branch_relations, chart_pattern, derive_chart, derive_chart_lunar,
    five_element_balance, luck_cycles, resolve_yongshin,
};
use saju_calendar::SolarDate;

fn solar(y: i32, m: u32, d: u32, hour: HourSlot) -> SajuChart {
    derive_chart(SolarDate::new(y, m, d).unwrap(), hour).unwrap()
}

fn hanja(chart: &SajuChart) -> [String; 4] {
    [chart.year, chart.month, chart.day, chart.hour].map(|p| p.to_string())
}

// ---------------------------------------------------------------------------
// Pillars
// ---------------------------------------------------------------------------

#[test]
fn pillars_1990_05_15_noon() {
    let c = solar(1990, 5, 15, HourSlot::O);
    assert_eq!(hanja(&c), ["庚午", "辛巳", "庚子", "壬午"]);
    assert_eq!(c.zodiac_animal(), "말");
}

#[test]
fn pillars_across_spring_start() {
    // 입춘 on Feb 4 rolls the year pillar.
    let before = solar(1984, 2, 3, HourSlot::Ja);
    let after = solar(1984, 2, 4, HourSlot::Ja);
    assert_eq!(hanja(&before), ["癸亥", "乙丑", "丁亥", "庚子"]);
    assert_eq!(hanja(&after), ["甲子", "丙寅", "戊子", "壬子"]);
}

#[test]
fn pillars_epoch_day() {
    let c = solar(1900, 1, 31, HourSlot::Ja);
    assert_eq!(hanja(&c), ["己亥", "丁丑", "甲子", "甲子"]);
}

#[test]
fn pillars_new_year_day_uses_previous_december_month() {
    let c = solar(1985, 1, 1, HourSlot::Myo);
    assert_eq!(hanja(&c), ["甲子", "丙子", "庚申", "己卯"]);
}

#[test]
fn unknown_hour_keeps_placeholder() {
    let c = solar(2000, 1, 1, HourSlot::Unknown);
    assert!(!c.hour_known);
    assert_eq!(hanja(&c), ["己卯", "丙子", "戊寅", "壬子"]);
    assert_eq!(c.to_string(), "己卯 丙子 戊寅 --");
}

#[test]
fn lunar_input_matches_solar() {
    // Lunar 1990-04-21 is solar 1990-05-15.
    let l = derive_chart_lunar(1990, 4, 21, false, HourSlot::O).unwrap();
    assert_eq!(l, solar(1990, 5, 15, HourSlot::O));
}

#[test]
fn out_of_range_year_is_rejected() {
    assert!(derive_chart(SolarDate::new(1899, 12, 31).unwrap(), HourSlot::Ja).is_err());
    assert!(derive_chart(SolarDate::new(2101, 1, 1).unwrap(), HourSlot::Ja).is_err());
}

// ---------------------------------------------------------------------------
// Balance and strength
// ---------------------------------------------------------------------------

#[test]
fn balance_1990() {
    let b = five_element_balance(&solar(1990, 5, 15, HourSlot::O));
    assert_eq!([b.wood, b.fire, b.earth, b.metal, b.water], [0.0, 3.0, 1.3, 3.5, 2.0]);
    assert_eq!(b.dominant, Element::Metal);
    assert_eq!(b.lacking, Element::Wood);
}

#[test]
fn balance_1984() {
    let b = five_element_balance(&solar(1984, 2, 4, HourSlot::Ja));
    assert_eq!([b.wood, b.fire, b.earth, b.metal, b.water], [2.0, 1.5, 1.3, 0.0, 4.0]);
    assert_eq!(b.dominant, Element::Water);
    assert_eq!(b.lacking, Element::Metal);
}

#[test]
fn strength_goldens() {
    let cases = [
        (solar(1990, 5, 15, HourSlot::O), [4, 13, 0, 2, 3], StrengthTier::Weak),
        (solar(1984, 2, 4, HourSlot::Ja), [4, 0, 7, 3, 2], StrengthTier::ExtremelyWeak),
        (solar(2000, 1, 1, HourSlot::Unknown), [12, 7, 7, 7, 2], StrengthTier::ModeratelyWeak),
        (solar(1900, 1, 31, HourSlot::Ja), [12, 7, 0, 5, 8], StrengthTier::Weak),
        (solar(1985, 1, 1, HourSlot::Myo), [20, 0, 7, 9, 3], StrengthTier::ModeratelyWeak),
    ];
    for (chart, parts, tier) in cases {
        let a = analyze_day_master(&chart);
        let b = a.breakdown;
        assert_eq!([b.seasonal, b.peer, b.resource, b.vitality, b.hidden], parts, "{chart}");
        assert_eq!(a.score, parts.iter().sum::<u32>(), "{chart}");
        assert_eq!(a.tier, tier, "{chart}");
        assert!(!a.is_strong);
    }
}

#[test]
fn unknown_hour_reduces_confidence() {
    assert!(analyze_day_master(&solar(2000, 1, 1, HourSlot::Unknown)).reduced_confidence);
    assert!(!analyze_day_master(&solar(1990, 5, 15, HourSlot::O)).reduced_confidence);
}

// ---------------------------------------------------------------------------
// Favorable element and pattern
// ---------------------------------------------------------------------------

#[test]
fn yongshin_weak_metal() {
    let a = analyze_day_master(&solar(1990, 5, 15, HourSlot::O));
    let y = resolve_yongshin(&a);
    assert_eq!(y.favorable, Element::Earth);
    assert_eq!(y.ally_of_favorable, Element::Metal);
    assert_eq!(y.unfavorable, Element::Wood);
    assert_eq!(y.ally_of_unfavorable, Element::Fire);
    assert_eq!(y.neutral, Element::Water);
}

#[test]
fn yongshin_extremely_weak_earth() {
    let a = analyze_day_master(&solar(1984, 2, 4, HourSlot::Ja));
    let y = resolve_yongshin(&a);
    assert_eq!(y.favorable, Element::Fire);
    assert_eq!(y.ally_of_favorable, Element::Earth);
    assert_eq!(y.unfavorable, Element::Wood);
    assert_eq!(y.ally_of_unfavorable, Element::Water);
    assert_eq!(y.neutral, Element::Metal);
}

#[test]
fn pattern_goldens() {
    let cases = [
        (solar(1990, 5, 15, HourSlot::O), ChartPattern::IndirectAuthority),
        (solar(1984, 2, 4, HourSlot::Ja), ChartPattern::FollowWealth),
        (solar(1985, 1, 1, HourSlot::Myo), ChartPattern::HurtingOfficer),
        (solar(1900, 1, 31, HourSlot::Ja), ChartPattern::DirectWealth),
        (solar(2000, 1, 1, HourSlot::Unknown), ChartPattern::DirectWealth),
    ];
    for (chart, expected) in cases {
        let a = analyze_day_master(&chart);
        assert_eq!(chart_pattern(&chart, &a), expected, "{chart}");
    }
}

// ---------------------------------------------------------------------------
// Luck cycles and relations
// ---------------------------------------------------------------------------

#[test]
fn luck_cycles_1990_male() {
    let c = solar(1990, 5, 15, HourSlot::O);
    let periods = luck_cycles(&c, Gender::Male, Some(SolarDate::new(1990, 5, 15).unwrap()), Some(34));
    assert_eq!(periods.len(), 8);
    assert_eq!(periods[0].start_age, 7);
    assert_eq!(periods[0].end_age, 16);
    let names: Vec<String> = periods.iter().take(3).map(|p| p.pillar.to_string()).collect();
    assert_eq!(names, ["壬午", "癸未", "甲申"]);
    let current: Vec<usize> = periods.iter().enumerate().filter(|(_, p)| p.is_current).map(|(i, _)| i).collect();
    assert_eq!(current, [2]);
}

#[test]
fn luck_cycles_1990_female_reverse() {
    let c = solar(1990, 5, 15, HourSlot::O);
    let periods = luck_cycles(&c, Gender::Female, None, None);
    assert_eq!(periods[0].start_age, 3);
    assert_eq!(periods[0].pillar.to_string(), "庚辰");
    assert!(periods.iter().all(|p| !p.is_current));
}

#[test]
fn relations_1990() {
    let rels = branch_relations(&solar(1990, 5, 15, HourSlot::O));
    let clashes = rels.iter().filter(|r| r.kind == RelationKind::Clash).count();
    assert_eq!(clashes, 2);
    let selfp: Vec<_> = rels.iter().filter(|r| r.kind == RelationKind::SelfPunishment).collect();
    assert_eq!(selfp.len(), 1);
    assert_eq!(selfp[0].branches, [Branch::O]);
    assert!(rels.iter().all(|r| !r.favorable));
}

#[test]
fn day_master_is_day_stem() {
    let c = solar(1990, 5, 15, HourSlot::O);
    assert_eq!(c.day_master(), Stem::Gyeong);
}
