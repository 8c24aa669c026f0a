//! The chart pipeline: calendar conversion, pillar derivation, then every
//! classifier over the finished chart.
//!
//! Each stage is a pure function of the birth input and the options; the
//! pipeline never reads a clock. A failure at any stage aborts the whole
//! reading.

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_base::{
    Compatibility, analyze_day_master, branch_relations, chart_pattern, compatibility,
    derive_chart, five_element_balance, luck_cycles, resolve_yongshin, spirit_killings, ten_gods,
    twelve_stage_readings,
};
use saju_calendar::solar_to_lunar;

use crate::error::SajuError;
use crate::input::BirthInput;
use crate::result::{Recommendations, SajuResult};

/// Caller-resolved context for a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Year used to derive the current age as `reference_year - birth year`.
    pub reference_year: Option<i32>,
    /// Explicit current age; overrides `reference_year`.
    pub current_age: Option<u32>,
}

impl ChartOptions {
    pub const fn with_age(age: u32) -> Self {
        Self { reference_year: None, current_age: Some(age) }
    }

    /// Current age for a birth year, if one can be determined.
    pub fn current_age_for(&self, birth_year: i32) -> Option<u32> {
        self.current_age
            .or_else(|| self.reference_year.and_then(|y| u32::try_from(y - birth_year).ok()))
    }
}

/// Compute a full reading.
pub fn calculate_saju(input: &BirthInput, options: &ChartOptions) -> Result<SajuResult, SajuError> {
    let solar_date = input.solar_date()?;
    let chart = derive_chart(solar_date, input.hour)?;
    debug!(%solar_date, %chart, hour_known = chart.hour_known, "pillars derived");

    let lunar_date = solar_to_lunar(solar_date.year, solar_date.month, solar_date.day).ok();
    let five_elements = five_element_balance(&chart);
    let ten_gods = ten_gods(&chart);
    let twelve_stages = twelve_stage_readings(&chart);
    let branch_relations = branch_relations(&chart);
    let spirit_killings = spirit_killings(&chart);
    debug!(
        dominant = ?five_elements.dominant,
        lacking = ?five_elements.lacking,
        relations = branch_relations.len(),
        markers = spirit_killings.len(),
        "chart classified"
    );

    let day_master = analyze_day_master(&chart);
    debug!(score = day_master.score, tier = ?day_master.tier, "strength scored");
    let yongshin = resolve_yongshin(&day_master);

    // Age counts from the solar birth year, also for lunar input.
    let current_age = options.current_age_for(solar_date.year);
    let luck_cycles = luck_cycles(&chart, input.gender, Some(solar_date), current_age);

    let pattern = chart_pattern(&chart, &day_master);
    debug!(pattern = pattern.name(), favorable = ?yongshin.favorable, "pattern chosen");

    Ok(SajuResult {
        solar_date,
        lunar_date,
        chart,
        five_elements,
        ten_gods,
        twelve_stages,
        luck_cycles,
        branch_relations,
        spirit_killings,
        pattern,
        recommendations: Recommendations::for_element(yongshin.favorable),
        day_master,
        yongshin,
    })
}

/// Compatibility of two readings.
pub fn calculate_compatibility(a: &SajuResult, b: &SajuResult) -> Compatibility {
    let c = compatibility(&a.chart, &b.chart);
    debug!(total = c.total, verdict = ?c.verdict, "compatibility scored");
    c
}
