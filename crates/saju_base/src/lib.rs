//! Stems, branches and pillars of the four-pillar (사주) chart, plus every
//! rule table used to read one.
//!
//! This crate provides:
//! - Closed enumerations: [`Element`], [`Polarity`], [`Stem`], [`Branch`]
//! - Pillar derivation from a solar or lunar birth date
//! - Hidden stems, weighted five-element balance and ten gods
//! - Day-master strength, favorable-element resolution and chart pattern
//! - Ten-year luck cycles, branch relations and spirit-killing markers
//! - Compatibility of two charts
//!
//! All functions are pure and total over valid charts; the only fallible
//! step is derivation from a date.

pub mod branch;
pub mod branch_relation;
pub mod chart;
pub mod chart_pattern;
pub mod compat;
pub mod derive;
pub mod element;
pub mod error;
pub mod five_element;
pub mod hidden_stem;
pub mod luck_cycle;
pub mod pillar;
pub mod seasonal;
pub mod spirit_killing;
pub mod stem;
pub mod strength;
pub mod ten_god;
pub mod twelve_stage;
pub mod yongshin;

pub use branch::{ALL_BRANCHES, Branch};
pub use branch_relation::{BranchRelation, PunishmentKind, RelationKind, branch_relations};
pub use chart::{ALL_POSITIONS, HourSlot, ParseHourSlotError, PillarPosition, SajuChart};
pub use chart_pattern::{ChartPattern, PatternCategory, chart_pattern};
pub use compat::{CompatAspect, CompatCategory, CompatVerdict, Compatibility, compatibility};
pub use derive::{day_pillar, derive_chart, derive_chart_lunar, hour_pillar, month_pillar, year_pillar};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity};
pub use error::ChartError;
pub use five_element::{FiveElementBalance, five_element_balance, surface_counts};
pub use hidden_stem::{HiddenStem, HiddenTier, hidden_stems, main_hidden_stem};
pub use luck_cycle::{Gender, LuckCyclePeriod, LuckDirection, luck_cycles};
pub use pillar::Pillar;
pub use seasonal::{SeasonalState, seasonal_state};
pub use spirit_killing::{MarkerTone, SpiritKilling, SpiritMarker, spirit_killings};
pub use stem::{ALL_STEMS, Stem};
pub use strength::{DayMasterAnalysis, StrengthBreakdown, StrengthTier, analyze_day_master};
pub use ten_god::{TenGod, TenGodGroup, TenGodRelation, ten_gods};
pub use twelve_stage::{StageReading, TwelveStage, twelve_stage, twelve_stage_readings};
pub use yongshin::{
    ElementRole, YongshinProfile, lucky_colors, lucky_direction, lucky_number, resolve_yongshin,
};
