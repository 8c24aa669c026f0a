//! Topic fortunes scored from a finished [`SajuResult`].
//!
//! Each scorer is a pure function of the reading plus an explicit date,
//! year or month; none of them reads a clock. Scores are integers clamped
//! to 10..=100. Luck-period ages are reported as the period midpoint.

pub mod career;
pub mod finance;
pub mod health;
pub mod love;
pub mod marriage;
pub mod weekly;
pub mod yearly;

use serde::{Deserialize, Serialize};

use saju_base::{LuckCyclePeriod, PillarPosition, Stem, TenGod};

use crate::daily::relation_score;
use crate::result::SajuResult;

pub use career::{CareerFortune, StarCount, career_fortune};
pub use finance::{FinanceFortune, finance_fortune};
pub use health::{HealthFortune, OrganReading, OrganStatus, calendar_season, health_fortune};
pub use love::{LoveFortune, love_fortune};
pub use marriage::{MarriageFortune, StarPosition, marriage_fortune};
pub use weekly::{WEEKDAY_NAMES, WeeklyFortune, week_start, weekly_fortune};
pub use yearly::{MonthKeyword, MonthOutlook, YearlyFortune, yearly_fortune};

/// Cut-offs 80 / 60 / 40.
pub const WIDE_CUTS: [u32; 3] = [80, 60, 40];
/// Cut-offs 75 / 55 / 40.
pub const NARROW_CUTS: [u32; 3] = [75, 55, 40];

/// Four-step grade behind every summary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Outlook {
    /// Grade `score` against descending cut-offs.
    pub const fn grade(score: u32, cuts: [u32; 3]) -> Self {
        if score >= cuts[0] {
            Self::Excellent
        } else if score >= cuts[1] {
            Self::Good
        } else if score >= cuts[2] {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Stem or branch half of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPart {
    Stem,
    Branch,
}

impl PillarPart {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "천간",
            Self::Branch => "지지",
        }
    }
}

pub(crate) fn clamp_score(raw: i32) -> u32 {
    raw.clamp(10, 100) as u32
}

/// Round half toward positive infinity: 2.5 → 3, -2.5 → -2.
pub(crate) fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// The eight chart ten gods, stem before branch, year to hour.
pub(crate) fn chart_gods(result: &SajuResult) -> impl Iterator<Item = (PillarPosition, PillarPart, TenGod)> + '_ {
    result.ten_gods.iter().flat_map(|t| {
        [(t.position, PillarPart::Stem, t.stem_god), (t.position, PillarPart::Branch, t.branch_god)]
    })
}

pub(crate) const fn period_gods(day_master: Stem, period: &LuckCyclePeriod) -> [TenGod; 2] {
    [
        TenGod::of_stem(day_master, period.pillar.stem()),
        TenGod::of_branch(day_master, period.pillar.branch()),
    ]
}

/// Midpoint age of a period, halves rounded up.
pub(crate) const fn midpoint_age(period: &LuckCyclePeriod) -> u32 {
    (period.start_age + period.end_age + 1) / 2
}

/// Midpoint ages of the luck periods whose stem or branch god matches.
pub(crate) fn period_ages(result: &SajuResult, matches: impl Fn(TenGod) -> bool) -> Vec<u32> {
    let dm = result.chart.day_master();
    result
        .luck_cycles
        .iter()
        .filter(|p| period_gods(dm, p).into_iter().any(&matches))
        .map(midpoint_age)
        .collect()
}

/// `50 + 2·relation` of the current period's stem to the day master; 50
/// without a current period.
pub(crate) fn current_period_score(result: &SajuResult) -> u32 {
    match result.current_luck_cycle() {
        Some(p) => {
            let rel = relation_score(result.chart.day_master().element(), p.pillar.stem_element());
            clamp_score(50 + rel * 2)
        }
        None => 50,
    }
}
