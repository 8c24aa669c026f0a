//! Spirit killings (신살, 神殺): special markers triggered by branch lookups.
//!
//! Most markers key on the trine group (삼합) of the day branch and point at
//! one target branch; the marker fires when the target sits anywhere in the
//! chart. Heavenly noble keys on the day stem and has two targets; solitude
//! keys on the directional group of the year branch.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{PillarPosition, SajuChart};
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiritMarker {
    /// 도화살
    PeachBlossom,
    /// 역마살
    TravellingHorse,
    /// 화개살
    Canopy,
    /// 귀문관살
    GhostGate,
    /// 천을귀인
    HeavenlyNoble,
    /// 겁살
    Robbery,
    /// 재살
    Disaster,
    /// 망신살
    LossOfFace,
    /// 천살
    HeavenKilling,
    /// 지살
    EarthKilling,
    /// 고독살
    Solitude,
}

/// Markers in detection order.
pub const ALL_SPIRIT_MARKERS: [SpiritMarker; 11] = [
    SpiritMarker::PeachBlossom,
    SpiritMarker::TravellingHorse,
    SpiritMarker::Canopy,
    SpiritMarker::GhostGate,
    SpiritMarker::HeavenlyNoble,
    SpiritMarker::Robbery,
    SpiritMarker::Disaster,
    SpiritMarker::LossOfFace,
    SpiritMarker::HeavenKilling,
    SpiritMarker::EarthKilling,
    SpiritMarker::Solitude,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerTone {
    Positive,
    Negative,
    Neutral,
}

impl MarkerTone {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Positive => "길",
            Self::Negative => "흉",
            Self::Neutral => "중립",
        }
    }
}

impl SpiritMarker {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeachBlossom => "도화살",
            Self::TravellingHorse => "역마살",
            Self::Canopy => "화개살",
            Self::GhostGate => "귀문관살",
            Self::HeavenlyNoble => "천을귀인",
            Self::Robbery => "겁살",
            Self::Disaster => "재살",
            Self::LossOfFace => "망신살",
            Self::HeavenKilling => "천살",
            Self::EarthKilling => "지살",
            Self::Solitude => "고독살",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::PeachBlossom => "桃花殺",
            Self::TravellingHorse => "驛馬殺",
            Self::Canopy => "華蓋殺",
            Self::GhostGate => "鬼門關殺",
            Self::HeavenlyNoble => "天乙貴人",
            Self::Robbery => "劫殺",
            Self::Disaster => "災殺",
            Self::LossOfFace => "亡身殺",
            Self::HeavenKilling => "天殺",
            Self::EarthKilling => "地殺",
            Self::Solitude => "孤獨殺",
        }
    }

    pub const fn tone(self) -> MarkerTone {
        match self {
            Self::HeavenlyNoble => MarkerTone::Positive,
            Self::PeachBlossom | Self::TravellingHorse | Self::Canopy | Self::EarthKilling => {
                MarkerTone::Neutral
            }
            Self::GhostGate
            | Self::Robbery
            | Self::Disaster
            | Self::LossOfFace
            | Self::HeavenKilling
            | Self::Solitude => MarkerTone::Negative,
        }
    }
}

/// One triggered marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritKilling {
    pub marker: SpiritMarker,
    pub tone: MarkerTone,
    /// Branches the marker points at.
    pub targets: Vec<Branch>,
    /// Chart positions holding a target.
    pub positions: Vec<PillarPosition>,
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

use Branch::*;

// Trine-keyed tables, indexed by `branch.index() % 4`:
// [申子辰, 巳酉丑, 寅午戌, 亥卯未].
const PEACH_BLOSSOM: [Branch; 4] = [Yu, O, Myo, Ja];
const TRAVELLING_HORSE: [Branch; 4] = [In, Hae, Sin, Sa];
const CANOPY: [Branch; 4] = [Jin, Chuk, Sul, Mi];
const ROBBERY: [Branch; 4] = [Sa, In, Hae, Sin];
const DISASTER: [Branch; 4] = [O, Myo, Ja, Yu];
const LOSS_OF_FACE: [Branch; 4] = [Hae, Sin, Sa, In];
const HEAVEN_KILLING: [Branch; 4] = [Mi, Jin, Chuk, Sul];
const EARTH_KILLING: [Branch; 4] = [Sin, Sa, In, Hae];

/// Ghost gate, indexed by day branch.
const GHOST_GATE: [Branch; 12] = [Yu, O, Mi, Sin, Sa, Jin, Chuk, In, Myo, Ja, Hae, Sul];

/// Solitude, indexed by directional group of the year branch:
/// [寅卯辰, 巳午未, 申酉戌, 亥子丑].
const SOLITUDE: [Branch; 4] = [Sa, Sin, Hae, In];

const fn trine(branch: Branch) -> usize {
    (branch.index() % 4) as usize
}

const fn direction(branch: Branch) -> usize {
    ((branch.index() + 10) % 12 / 3) as usize
}

const fn heavenly_noble(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Gap | Stem::Mu => [Chuk, Mi],
        Stem::Eul | Stem::Gi => [Ja, Sin],
        Stem::Byeong | Stem::Jeong => [Hae, Yu],
        Stem::Gyeong | Stem::Sin => [In, O],
        Stem::Im | Stem::Gye => [Myo, Sa],
    }
}

/// Target branches of a marker for a chart.
pub fn marker_targets(marker: SpiritMarker, chart: &SajuChart) -> Vec<Branch> {
    let day = chart.day.branch();
    match marker {
        SpiritMarker::PeachBlossom => vec![PEACH_BLOSSOM[trine(day)]],
        SpiritMarker::TravellingHorse => vec![TRAVELLING_HORSE[trine(day)]],
        SpiritMarker::Canopy => vec![CANOPY[trine(day)]],
        SpiritMarker::GhostGate => vec![GHOST_GATE[day.index() as usize]],
        SpiritMarker::HeavenlyNoble => heavenly_noble(chart.day_master()).to_vec(),
        SpiritMarker::Robbery => vec![ROBBERY[trine(day)]],
        SpiritMarker::Disaster => vec![DISASTER[trine(day)]],
        SpiritMarker::LossOfFace => vec![LOSS_OF_FACE[trine(day)]],
        SpiritMarker::HeavenKilling => vec![HEAVEN_KILLING[trine(day)]],
        SpiritMarker::EarthKilling => vec![EARTH_KILLING[trine(day)]],
        SpiritMarker::Solitude => vec![SOLITUDE[direction(chart.year.branch())]],
    }
}

/// Every marker whose target appears among the chart's branches.
pub fn spirit_killings(chart: &SajuChart) -> Vec<SpiritKilling> {
    ALL_SPIRIT_MARKERS
        .iter()
        .filter_map(|&marker| {
            let targets = marker_targets(marker, chart);
            let positions: Vec<_> = chart
                .pillars()
                .iter()
                .filter(|(_, p)| targets.contains(&p.branch()))
                .map(|(pos, _)| *pos)
                .collect();
            (!positions.is_empty()).then(|| SpiritKilling {
                marker,
                tone: marker.tone(),
                targets,
                positions,
            })
        })
        .collect()
}
