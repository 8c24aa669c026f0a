use proptest::prelude::*;

use saju_base::{
    ALL_ELEMENTS, Element, FiveElementBalance, Gender, HourSlot, SajuChart, analyze_day_master,
    derive_chart, five_element_balance, luck_cycles, resolve_yongshin,
};
use saju_calendar::{SolarDate, calendar_to_jdn};

const FIRST_JDN: i64 = calendar_to_jdn(1900, 1, 1);
const LAST_JDN: i64 = calendar_to_jdn(2100, 12, 31);

const HOURS: [HourSlot; 13] = [
    HourSlot::Ja,
    HourSlot::Chuk,
    HourSlot::In,
    HourSlot::Myo,
    HourSlot::Jin,
    HourSlot::Sa,
    HourSlot::O,
    HourSlot::Mi,
    HourSlot::Sin,
    HourSlot::Yu,
    HourSlot::Sul,
    HourSlot::Hae,
    HourSlot::Unknown,
];

fn chart_strategy() -> impl Strategy<Value = (SolarDate, SajuChart)> {
    (FIRST_JDN..=LAST_JDN, 0..HOURS.len()).prop_map(|(jdn, h)| {
        let date = SolarDate::from_jdn(jdn);
        (date, derive_chart(date, HOURS[h]).unwrap())
    })
}

proptest! {
    #[test]
    fn every_pillar_shares_polarity((_, chart) in chart_strategy()) {
        for (_, p) in chart.pillars() {
            prop_assert_eq!(p.stem().polarity(), p.branch().polarity());
        }
    }

    #[test]
    fn strength_score_is_bounded((_, chart) in chart_strategy()) {
        let a = analyze_day_master(&chart);
        prop_assert!(a.score <= 100);
        prop_assert_eq!(a.score, a.breakdown.total());
        prop_assert_eq!(a.is_strong, a.score >= 50);
    }

    #[test]
    fn yongshin_roles_cover_all_elements((_, chart) in chart_strategy()) {
        let y = resolve_yongshin(&analyze_day_master(&chart));
        let mut seen = [y.favorable, y.ally_of_favorable, y.unfavorable, y.ally_of_unfavorable, y.neutral];
        seen.sort();
        prop_assert_eq!(seen, ALL_ELEMENTS);
    }

    #[test]
    fn dominant_and_lacking_are_extremes((_, chart) in chart_strategy()) {
        let b = five_element_balance(&chart);
        for e in ALL_ELEMENTS {
            prop_assert!(b.get(e) <= b.get(b.dominant));
            prop_assert!(b.get(e) >= b.get(b.lacking));
        }
    }

    #[test]
    fn ties_go_to_earliest_element(tenths in proptest::array::uniform5(0u32..60)) {
        let b = FiveElementBalance::from_tenths(tenths);
        let max = *tenths.iter().max().unwrap();
        let min = *tenths.iter().min().unwrap();
        let first = |v: u32| Element::from_index(tenths.iter().position(|t| *t == v).unwrap() as u8);
        prop_assert_eq!(b.dominant, first(max));
        prop_assert_eq!(b.lacking, first(min));
    }

    #[test]
    fn at_most_one_current_period(
        (date, chart) in chart_strategy(),
        male in any::<bool>(),
        age in 0u32..120,
    ) {
        let gender = if male { Gender::Male } else { Gender::Female };
        let periods = luck_cycles(&chart, gender, Some(date), Some(age));
        prop_assert_eq!(periods.len(), 8);
        prop_assert!(periods.iter().filter(|p| p.is_current).count() <= 1);
        for w in periods.windows(2) {
            prop_assert_eq!(w[1].start_age, w[0].end_age + 1);
        }
    }
}
