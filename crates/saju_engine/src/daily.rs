//! Daily pillar score (오늘의 운세): a chart's day pillar against the
//! day pillar of a given date.

use serde::{Deserialize, Serialize};

use saju_base::{Element, ElementRelation, Pillar, day_pillar};
use saju_calendar::SolarDate;

/// Score band of a daily reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyBand {
    /// 80..=100
    Excellent,
    /// 60..=79
    Smooth,
    /// 40..=59
    Steady,
    /// 10..=39
    Careful,
}

impl DailyBand {
    pub const fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Smooth,
            40..=59 => Self::Steady,
            _ => Self::Careful,
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Excellent => "기운이 조화를 이루는 최고의 하루입니다!",
            Self::Smooth => "오늘은 전반적으로 순조로운 흐름이 이어집니다.",
            Self::Steady => "평범하지만 안정적인 하루가 예상됩니다.",
            Self::Careful => "오늘은 신중하게 행동하면 무난히 넘길 수 있습니다.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFortune {
    pub date: SolarDate,
    /// Day pillar of `date`.
    pub pillar: Pillar,
    pub stem_score: i32,
    pub branch_score: i32,
    /// Date seed in -10..=9.
    pub seed: i32,
    /// 10..=100.
    pub score: u32,
    pub band: DailyBand,
}

/// Score of the day's element against the chart's.
pub const fn relation_score(mine: Element, today: Element) -> i32 {
    match mine.relation_to(today) {
        ElementRelation::Same => 15,
        ElementRelation::Generates => 10,
        ElementRelation::GeneratedBy => 20,
        ElementRelation::Overcomes => 5,
        ElementRelation::OvercomeBy => -5,
    }
}

/// `(y·10000 + m·100 + d) mod 20 − 10`.
pub const fn date_seed(date: SolarDate) -> i32 {
    let n = date.year as i64 * 10_000 + date.month as i64 * 100 + date.day as i64;
    n.rem_euclid(20) as i32 - 10
}

/// Score a chart's day pillar against `date`.
pub fn daily_fortune(chart_day: Pillar, date: SolarDate) -> DailyFortune {
    let pillar = day_pillar(date);
    let stem_score = relation_score(chart_day.stem_element(), pillar.stem_element());
    let branch_score = relation_score(chart_day.branch_element(), pillar.branch_element());
    let seed = date_seed(date);
    let score = (50 + stem_score + branch_score + seed).clamp(10, 100) as u32;
    DailyFortune {
        date,
        pillar,
        stem_score,
        branch_score,
        seed,
        score,
        band: DailyBand::from_score(score),
    }
}
