//! Fixed solar-term month boundaries (절기).
//!
//! Month pillars change on the twelve "sectional" solar terms rather than on
//! lunar new moons. True term instants drift by a day or so from year to
//! year; this table uses one fixed civil date per term, which is the
//! accepted approximation for chart work without an ephemeris.

use crate::julian::SolarDate;

/// One month-opening solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTerm {
    /// Korean name.
    pub name: &'static str,
    /// Hanja name.
    pub hanja: &'static str,
    /// Solar month the term falls in.
    pub month: u32,
    /// Fixed day of that month.
    pub day: u32,
    /// Month ordinal the term opens (1 = 寅 month .. 12 = 丑 month).
    pub ordinal: u8,
}

/// The twelve month-opening terms in civil-calendar order (Jan → Dec).
pub const SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm { name: "소한", hanja: "小寒", month: 1, day: 6, ordinal: 12 },
    SolarTerm { name: "입춘", hanja: "立春", month: 2, day: 4, ordinal: 1 },
    SolarTerm { name: "경칩", hanja: "驚蟄", month: 3, day: 6, ordinal: 2 },
    SolarTerm { name: "청명", hanja: "淸明", month: 4, day: 5, ordinal: 3 },
    SolarTerm { name: "입하", hanja: "立夏", month: 5, day: 6, ordinal: 4 },
    SolarTerm { name: "망종", hanja: "芒種", month: 6, day: 6, ordinal: 5 },
    SolarTerm { name: "소서", hanja: "小暑", month: 7, day: 7, ordinal: 6 },
    SolarTerm { name: "입추", hanja: "立秋", month: 8, day: 7, ordinal: 7 },
    SolarTerm { name: "백로", hanja: "白露", month: 9, day: 8, ordinal: 8 },
    SolarTerm { name: "한로", hanja: "寒露", month: 10, day: 8, ordinal: 9 },
    SolarTerm { name: "입동", hanja: "立冬", month: 11, day: 7, ordinal: 10 },
    SolarTerm { name: "대설", hanja: "大雪", month: 12, day: 7, ordinal: 11 },
];

/// Approximate term day per solar month, used only for the luck-cycle
/// starting-age estimate. Deliberately coarser than [`SOLAR_TERMS`].
pub const LUCK_TERM_DAYS: [u32; 12] = [4, 6, 5, 6, 6, 7, 7, 8, 8, 7, 7, 6];

/// The most recent month-opening term on or before `(month, day)`.
///
/// January 1–5 precede 소한 and belong to the 대설 (子) month opened the
/// previous December.
pub fn governing_term(month: u32, day: u32) -> SolarTerm {
    SOLAR_TERMS
        .iter()
        .rev()
        .find(|t| month > t.month || (month == t.month && day >= t.day))
        .copied()
        .unwrap_or(SOLAR_TERMS[11])
}

/// Month ordinal for a solar date: 1 (寅) ..= 12 (丑).
pub fn solar_month_ordinal(month: u32, day: u32) -> u8 {
    governing_term(month, day).ordinal
}

/// True before 입춘 (Feb 4), when the chart year is still the previous one.
pub const fn is_before_spring_start(month: u32, day: u32) -> bool {
    month < 2 || (month == 2 && day < 4)
}

/// Year whose stem-branch names the date's year pillar.
pub const fn chart_year(date: SolarDate) -> i32 {
    if is_before_spring_start(date.month, date.day) {
        date.year - 1
    } else {
        date.year
    }
}

/// Luck-cycle term day for a solar month (1..=12).
pub const fn luck_term_day(month: u32) -> u32 {
    LUCK_TERM_DAYS[((month + 11) % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_sorted_by_civil_date() {
        for w in SOLAR_TERMS.windows(2) {
            assert!((w[0].month, w[0].day) < (w[1].month, w[1].day));
        }
    }

    #[test]
    fn every_ordinal_once() {
        let mut seen = [false; 12];
        for t in &SOLAR_TERMS {
            assert!(!seen[t.ordinal as usize - 1]);
            seen[t.ordinal as usize - 1] = true;
        }
    }

    #[test]
    fn ordinals_around_boundaries() {
        assert_eq!(solar_month_ordinal(2, 3), 12);
        assert_eq!(solar_month_ordinal(2, 4), 1);
        assert_eq!(solar_month_ordinal(3, 5), 1);
        assert_eq!(solar_month_ordinal(3, 6), 2);
        assert_eq!(solar_month_ordinal(5, 15), 4);
        assert_eq!(solar_month_ordinal(12, 6), 10);
        assert_eq!(solar_month_ordinal(12, 7), 11);
        assert_eq!(solar_month_ordinal(12, 31), 11);
    }

    #[test]
    fn early_january_is_previous_december_month() {
        assert_eq!(solar_month_ordinal(1, 1), 11);
        assert_eq!(solar_month_ordinal(1, 5), 11);
        assert_eq!(solar_month_ordinal(1, 6), 12);
        assert_eq!(governing_term(1, 3).name, "대설");
    }

    #[test]
    fn spring_start_cutover() {
        assert!(is_before_spring_start(1, 31));
        assert!(is_before_spring_start(2, 3));
        assert!(!is_before_spring_start(2, 4));
        let d = SolarDate::new(1984, 2, 3).unwrap();
        assert_eq!(chart_year(d), 1983);
        let d = SolarDate::new(1984, 2, 4).unwrap();
        assert_eq!(chart_year(d), 1984);
    }

    #[test]
    fn luck_term_table_lookup() {
        assert_eq!(luck_term_day(1), 4);
        assert_eq!(luck_term_day(8), 8);
        assert_eq!(luck_term_day(12), 6);
    }
}
