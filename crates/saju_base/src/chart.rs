//! The four-pillar chart (사주) and the hour-slot input code.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::pillar::Pillar;
use crate::stem::Stem;

/// Chart position of a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// Positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> usize {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Two-hour birth slot (시진), or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HourSlot {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
    Unknown,
}

impl HourSlot {
    /// Input code, e.g. `"ja"`, `"unknown"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::Chuk => "chuk",
            Self::In => "in",
            Self::Myo => "myo",
            Self::Jin => "jin",
            Self::Sa => "sa",
            Self::O => "o",
            Self::Mi => "mi",
            Self::Sin => "sin",
            Self::Yu => "yu",
            Self::Sul => "sul",
            Self::Hae => "hae",
            Self::Unknown => "unknown",
        }
    }

    /// Branch of the slot; `None` when unknown.
    pub const fn branch(self) -> Option<Branch> {
        match self {
            Self::Ja => Some(Branch::Ja),
            Self::Chuk => Some(Branch::Chuk),
            Self::In => Some(Branch::In),
            Self::Myo => Some(Branch::Myo),
            Self::Jin => Some(Branch::Jin),
            Self::Sa => Some(Branch::Sa),
            Self::O => Some(Branch::O),
            Self::Mi => Some(Branch::Mi),
            Self::Sin => Some(Branch::Sin),
            Self::Yu => Some(Branch::Yu),
            Self::Sul => Some(Branch::Sul),
            Self::Hae => Some(Branch::Hae),
            Self::Unknown => None,
        }
    }

    /// Slot containing a civil hour (0..=23). 23:00 opens the 子 slot.
    pub const fn from_hour(hour: u32) -> Self {
        match (hour + 1) % 24 / 2 {
            0 => Self::Ja,
            1 => Self::Chuk,
            2 => Self::In,
            3 => Self::Myo,
            4 => Self::Jin,
            5 => Self::Sa,
            6 => Self::O,
            7 => Self::Mi,
            8 => Self::Sin,
            9 => Self::Yu,
            10 => Self::Sul,
            _ => Self::Hae,
        }
    }

    /// Civil time span, e.g. `"23:00 ~ 01:00"`; empty when unknown.
    pub fn time_range(self) -> String {
        match self.branch() {
            Some(b) => {
                let start = (b.index() as u32 * 2 + 23) % 24;
                format!("{start:02}:00 ~ {:02}:00", (start + 2) % 24)
            }
            None => String::new(),
        }
    }
}

/// Unrecognised hour-slot code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hour slot code: {0}")]
pub struct ParseHourSlotError(pub String);

impl FromStr for HourSlot {
    type Err = ParseHourSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [HourSlot; 13] = [
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
        let code = s.trim().to_ascii_lowercase();
        // A civil hour ("0".."23") is accepted too.
        if let Ok(hour @ 0..=23) = code.parse::<u32>() {
            return Ok(Self::from_hour(hour));
        }
        ALL.into_iter()
            .find(|h| h.code() == code)
            .ok_or_else(|| ParseHourSlotError(s.to_string()))
    }
}

/// Four pillars. The day stem is the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SajuChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    /// Placeholder 子-hour pillar when `hour_known` is false.
    pub hour: Pillar,
    pub hour_known: bool,
}

impl SajuChart {
    /// The day pillar's stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub const fn pillar(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars with their positions, in chart order.
    pub fn pillars(&self) -> [(PillarPosition, Pillar); 4] {
        ALL_POSITIONS.map(|p| (p, self.pillar(p)))
    }

    pub fn stems(&self) -> [Stem; 4] {
        ALL_POSITIONS.map(|p| self.pillar(p).stem())
    }

    pub fn branches(&self) -> [Branch; 4] {
        ALL_POSITIONS.map(|p| self.pillar(p).branch())
    }

    /// Zodiac animal of the year branch.
    pub const fn zodiac_animal(&self) -> &'static str {
        self.year.branch().zodiac_animal()
    }
}

impl std::fmt::Display for SajuChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} ", self.year, self.month, self.day)?;
        if self.hour_known { write!(f, "{}", self.hour) } else { f.write_str("--") }
    }
}
