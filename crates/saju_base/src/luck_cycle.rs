//! Ten-year luck cycles (대운, 大運).
//!
//! Eight periods step from the month pillar along the sexagenary cycle:
//! forward for a yang-year man or yin-year woman, backward otherwise. The
//! first period starts at the number of days from birth to the governing
//! solar term divided by three, using the coarse day table
//! [`LUCK_TERM_DAYS`](saju_calendar::LUCK_TERM_DAYS).

use serde::{Deserialize, Serialize};

use saju_calendar::{SolarDate, luck_term_day};

use crate::chart::SajuChart;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Number of generated periods.
pub const LUCK_PERIODS: usize = 8;

/// Starting age used when the birth day is not available.
pub const DEFAULT_START_AGE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Ok(Self::Male),
            "female" | "f" | "여" | "여자" => Ok(Self::Female),
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Direction of travel along the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuckDirection {
    /// 순행
    Forward,
    /// 역행
    Reverse,
}

impl LuckDirection {
    /// Forward for male + yang year stem or female + yin year stem.
    pub const fn for_chart(gender: Gender, year_stem: Stem) -> Self {
        match (gender, year_stem.polarity().is_yang()) {
            (Gender::Male, true) | (Gender::Female, false) => Self::Forward,
            _ => Self::Reverse,
        }
    }

    const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// One ten-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCyclePeriod {
    pub start_age: u32,
    /// Inclusive; `start_age + 9`.
    pub end_age: u32,
    pub pillar: Pillar,
    pub is_current: bool,
}

impl LuckCyclePeriod {
    pub const fn contains_age(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

/// Starting age of the first period from the solar birth month and day.
pub fn start_age(direction: LuckDirection, month: u32, day: u32) -> u32 {
    let term = luck_term_day(month);
    let days = match direction {
        LuckDirection::Forward if day <= term => term - day,
        LuckDirection::Forward => 30 + term - day,
        LuckDirection::Reverse if day >= term => day - term,
        LuckDirection::Reverse => day + 30 - term,
    };
    ((days as f64 / 3.0).round() as u32).max(1)
}

/// Generate the eight luck periods of a chart.
///
/// `birth` is the solar birth date; without it the first period starts at
/// [`DEFAULT_START_AGE`]. At most one period is current: the one whose
/// inclusive age span contains `current_age`.
pub fn luck_cycles(
    chart: &SajuChart,
    gender: Gender,
    birth: Option<SolarDate>,
    current_age: Option<u32>,
) -> Vec<LuckCyclePeriod> {
    let direction = LuckDirection::for_chart(gender, chart.year.stem());
    let first = birth.map_or(DEFAULT_START_AGE, |d| start_age(direction, d.month, d.day));
    (0..LUCK_PERIODS)
        .map(|i| {
            let start_age = first + 10 * i as u32;
            let end_age = start_age + 9;
            LuckCyclePeriod {
                start_age,
                end_age,
                pillar: chart.month.offset(direction.sign() * (i as i64 + 1)),
                is_current: current_age.is_some_and(|a| a >= start_age && a <= end_age),
            }
        })
        .collect()
}
