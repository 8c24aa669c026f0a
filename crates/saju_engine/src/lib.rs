//! Four-pillar (사주) reading engine.
//!
//! Wraps the calendar and rule-table crates into one pipeline that turns a
//! [`BirthInput`] into a complete [`SajuResult`], plus the collaborators
//! around it: TOML config, a bounded reading history, daily pillar scores,
//! topic fortunes and compatibility.
//!
//! # Quick start
//!
//! ```rust
//! use saju_engine::*;
//!
//! let input = BirthInput::solar(1990, 5, 15, HourSlot::O, Gender::Male);
//! let result = calculate_saju(&input, &ChartOptions::with_age(34)).unwrap();
//! assert_eq!(result.chart.to_string(), "庚午 辛巳 庚子 壬午");
//! assert_eq!(result.day_master().tier, StrengthTier::Weak);
//! ```

pub mod config;
pub mod daily;
pub mod error;
pub mod fortune;
pub mod history;
pub mod input;
pub mod pipeline;
pub mod result;

pub use config::EngineConfig;
pub use daily::{DailyBand, DailyFortune, daily_fortune};
pub use error::{COMPUTATION_SUMMARY, ConfigError, SajuError, StorageError};
pub use fortune::{
    CareerFortune, FinanceFortune, HealthFortune, LoveFortune, MarriageFortune, Outlook,
    WeeklyFortune, YearlyFortune, career_fortune, finance_fortune, health_fortune, love_fortune,
    marriage_fortune, weekly_fortune, yearly_fortune,
};
pub use history::{
    DEFAULT_HISTORY_LIMIT, FileStorage, HistoryStore, MAX_HISTORY_LIMIT, MemoryStorage, STORAGE_KEY,
    SavedReading, Storage,
};
pub use input::{BirthInput, CalendarType};
pub use pipeline::{ChartOptions, calculate_compatibility, calculate_saju};
pub use result::{Recommendations, SajuResult};

// Re-export the record types so callers only need this crate.
pub use saju_base::{
    Branch, BranchRelation, ChartPattern, Compatibility, DayMasterAnalysis, Element,
    FiveElementBalance, Gender, HourSlot, LuckCyclePeriod, Pillar, PillarPosition, RelationKind,
    SajuChart, SpiritKilling, SpiritMarker, Stem, StrengthTier, TenGod, TenGodRelation,
    YongshinProfile,
};
pub use saju_calendar::{CalendarError, LunarDate, SolarDate, lunar_to_solar, solar_to_lunar};
