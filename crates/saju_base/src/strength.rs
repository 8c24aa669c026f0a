//! Day-master strength (일간 강약).
//!
//! Five independent sub-scores, each in its own band, summed into 0..=100:
//!
//! | Sub-score  | Band  | Source                                            |
//! |------------|-------|---------------------------------------------------|
//! | seasonal   | 0..40 | seasonal state of the day master in the month     |
//! | peer       | 0..20 | same-element stems among year, month, hour        |
//! | resource   | 0..20 | generating-element stems among year, month, hour  |
//! | vitality   | 0..10 | twelve-stage of the day master on the day branch  |
//! | hidden     | 0..10 | supporting share of all hidden-stem weight        |
//!
//! All arithmetic is integer with round-half-up, so tier boundaries are exact.

use serde::{Deserialize, Serialize};

use crate::chart::{PillarPosition, SajuChart};
use crate::element::Element;
use crate::hidden_stem::hidden_stems;
use crate::seasonal::{SeasonalState, seasonal_state};
use crate::stem::Stem;
use crate::ten_god::TenGodGroup;
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Six strength tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    /// 극강, 80..=100
    ExtremelyStrong,
    /// 강, 65..=79
    Strong,
    /// 중강, 50..=64
    ModeratelyStrong,
    /// 중약, 35..=49
    ModeratelyWeak,
    /// 약, 20..=34
    Weak,
    /// 극약, 0..=19
    ExtremelyWeak,
}

impl StrengthTier {
    pub const fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::ExtremelyStrong,
            65..=79 => Self::Strong,
            50..=64 => Self::ModeratelyStrong,
            35..=49 => Self::ModeratelyWeak,
            20..=34 => Self::Weak,
            _ => Self::ExtremelyWeak,
        }
    }

    /// Moderately strong or above.
    pub const fn is_strong(self) -> bool {
        matches!(self, Self::ExtremelyStrong | Self::Strong | Self::ModeratelyStrong)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ExtremelyStrong => "극강",
            Self::Strong => "강",
            Self::ModeratelyStrong => "중강",
            Self::ModeratelyWeak => "중약",
            Self::Weak => "약",
            Self::ExtremelyWeak => "극약",
        }
    }
}

/// Sub-scores of the strength total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrengthBreakdown {
    pub seasonal: u32,
    pub peer: u32,
    pub resource: u32,
    pub vitality: u32,
    pub hidden: u32,
}

impl StrengthBreakdown {
    pub const fn total(&self) -> u32 {
        self.seasonal + self.peer + self.resource + self.vitality + self.hidden
    }
}

/// Strength analysis of the day master.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayMasterAnalysis {
    pub day_master: Stem,
    pub day_element: Element,
    /// 0..=100.
    pub score: u32,
    pub tier: StrengthTier,
    /// `score >= 50`.
    pub is_strong: bool,
    pub breakdown: StrengthBreakdown,
    pub seasonal_state: SeasonalState,
    /// Peak or rising in the month (득령).
    pub in_season: bool,
    /// Peer plus resource stems among year, month, hour.
    pub support_count: u32,
    /// Output, wealth and authority stems among year, month, hour.
    pub drain_count: u32,
    pub day_stage: TwelveStage,
    /// The hour was unknown and its placeholder pillar was counted.
    pub reduced_confidence: bool,
}

/// `round(count / 3 * 20)`, capped at 20.
pub const fn count_score(count: u32) -> u32 {
    let s = (40 * count + 3) / 6;
    if s > 20 { 20 } else { s }
}

/// Seasonal sub-score, 0..=40.
pub const fn seasonal_score(state: SeasonalState) -> u32 {
    state.strength_tenths() * 4
}

/// Vitality sub-score, 0..=10.
pub const fn vitality_score(stage: TwelveStage) -> u32 {
    (stage.strength_hundredths() * 10 + 50) / 100
}

/// Supporting (peer or resource) and total hidden-stem weight over all
/// four branches, in tenths.
pub fn hidden_weights(chart: &SajuChart) -> (u32, u32) {
    let dm = chart.day_master().element();
    let mut ally = 0;
    let mut total = 0;
    for b in chart.branches() {
        for hs in hidden_stems(b) {
            let w = hs.tier.weight_tenths();
            total += w;
            if TenGodGroup::of(dm, hs.stem.element()).is_supporting() {
                ally += w;
            }
        }
    }
    (ally, total)
}

/// Hidden-ally sub-score, 0..=10.
pub const fn hidden_score(ally_tenths: u32, total_tenths: u32) -> u32 {
    if total_tenths == 0 {
        return 5;
    }
    (20 * ally_tenths + total_tenths) / (2 * total_tenths)
}

/// Score the day master of a chart.
pub fn analyze_day_master(chart: &SajuChart) -> DayMasterAnalysis {
    let dm = chart.day_master();
    let de = dm.element();
    let state = seasonal_state(de, chart.month.branch());

    let mut peers = 0;
    let mut resources = 0;
    let mut drains = 0;
    for (position, p) in chart.pillars() {
        if position == PillarPosition::Day {
            continue;
        }
        match TenGodGroup::of(de, p.stem_element()) {
            TenGodGroup::Peer => peers += 1,
            TenGodGroup::Resource => resources += 1,
            _ => drains += 1,
        }
    }

    let day_stage = twelve_stage(dm, chart.day.branch());
    let (ally, total) = hidden_weights(chart);
    let breakdown = StrengthBreakdown {
        seasonal: seasonal_score(state),
        peer: count_score(peers),
        resource: count_score(resources),
        vitality: vitality_score(day_stage),
        hidden: hidden_score(ally, total),
    };
    let score = breakdown.total();
    let tier = StrengthTier::from_score(score);

    DayMasterAnalysis {
        day_master: dm,
        day_element: de,
        score,
        tier,
        is_strong: score >= 50,
        breakdown,
        seasonal_state: state,
        in_season: state.holds_month(),
        support_count: peers + resources,
        drain_count: drains,
        day_stage,
        reduced_confidence: !chart.hour_known,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        let cases = [
            (100, StrengthTier::ExtremelyStrong),
            (80, StrengthTier::ExtremelyStrong),
            (79, StrengthTier::Strong),
            (65, StrengthTier::Strong),
            (50, StrengthTier::ModeratelyStrong),
            (49, StrengthTier::ModeratelyWeak),
            (35, StrengthTier::ModeratelyWeak),
            (34, StrengthTier::Weak),
            (20, StrengthTier::Weak),
            (19, StrengthTier::ExtremelyWeak),
            (0, StrengthTier::ExtremelyWeak),
        ];
        for (score, tier) in cases {
            assert_eq!(StrengthTier::from_score(score), tier, "score {score}");
        }
    }

    #[test]
    fn is_strong_matches_fifty() {
        assert!(StrengthTier::from_score(50).is_strong());
        assert!(!StrengthTier::from_score(49).is_strong());
    }

    #[test]
    fn count_score_rounds_and_caps() {
        assert_eq!(count_score(0), 0);
        assert_eq!(count_score(1), 7);
        assert_eq!(count_score(2), 13);
        assert_eq!(count_score(3), 20);
        assert_eq!(count_score(4), 20);
    }

    #[test]
    fn seasonal_band() {
        assert_eq!(seasonal_score(SeasonalState::Peak), 40);
        assert_eq!(seasonal_score(SeasonalState::Rising), 32);
        assert_eq!(seasonal_score(SeasonalState::Dead), 4);
    }

    #[test]
    fn vitality_rounds_half_up() {
        assert_eq!(vitality_score(TwelveStage::Tomb), 2);
        assert_eq!(vitality_score(TwelveStage::Peak), 10);
        assert_eq!(vitality_score(TwelveStage::Extinct), 1);
    }

    #[test]
    fn hidden_ratio_rounding() {
        assert_eq!(hidden_score(0, 66), 0);
        assert_eq!(hidden_score(66, 66), 10);
        assert_eq!(hidden_score(15, 60), 3);
        assert_eq!(hidden_score(9, 20), 5);
    }
}
