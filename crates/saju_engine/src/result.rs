//! Aggregate chart reading returned by the pipeline.

use serde::{Deserialize, Serialize};

use saju_base::{
    BranchRelation, ChartPattern, DayMasterAnalysis, Element, FiveElementBalance,
    LuckCyclePeriod, SajuChart, SpiritKilling, StageReading, TenGodRelation, YongshinProfile,
    lucky_colors, lucky_direction, lucky_number,
};
use saju_calendar::{LunarDate, SolarDate};

/// Color, number and direction tied to the favorable element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub element: Element,
    pub colors: String,
    pub number: u8,
    pub direction: String,
}

impl Recommendations {
    pub fn for_element(element: Element) -> Self {
        Self {
            element,
            colors: lucky_colors(element).to_string(),
            number: lucky_number(element),
            direction: lucky_direction(element).to_string(),
        }
    }
}

/// A complete chart reading. Either every field is filled or the pipeline
/// failed; there is no partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SajuResult {
    pub solar_date: SolarDate,
    /// Absent for the days before the lunar table's epoch (1900-01-01..30).
    pub lunar_date: Option<LunarDate>,
    pub chart: SajuChart,
    pub five_elements: FiveElementBalance,
    pub ten_gods: [TenGodRelation; 4],
    pub twelve_stages: [StageReading; 4],
    pub luck_cycles: Vec<LuckCyclePeriod>,
    pub branch_relations: Vec<BranchRelation>,
    pub spirit_killings: Vec<SpiritKilling>,
    pub pattern: ChartPattern,
    pub recommendations: Recommendations,
    pub(crate) day_master: DayMasterAnalysis,
    pub(crate) yongshin: YongshinProfile,
}

impl SajuResult {
    /// Day-master strength analysis.
    pub const fn day_master(&self) -> &DayMasterAnalysis {
        &self.day_master
    }

    /// Favorable-element profile.
    pub const fn yongshin(&self) -> &YongshinProfile {
        &self.yongshin
    }

    /// Luck period containing the current age, if any.
    pub fn current_luck_cycle(&self) -> Option<&LuckCyclePeriod> {
        self.luck_cycles.iter().find(|p| p.is_current)
    }

    /// True when the hour was unknown and a placeholder hour pillar was used.
    pub const fn reduced_confidence(&self) -> bool {
        self.day_master.reduced_confidence
    }
}
