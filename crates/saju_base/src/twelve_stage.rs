//! Twelve life stages (십이운성, 十二運星).
//!
//! Each stem is born (장생) at a fixed branch and walks the twelve stages
//! forward through the branches if yang, backward if yin.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{PillarPosition, SajuChart};
use crate::stem::Stem;

/// The twelve stages from birth to nurture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveStage {
    /// 장생
    Birth,
    /// 목욕
    Bath,
    /// 관대
    Cap,
    /// 건록
    Prime,
    /// 제왕
    Peak,
    /// 쇠
    Decline,
    /// 병
    Sick,
    /// 사
    Death,
    /// 묘
    Tomb,
    /// 절
    Extinct,
    /// 태
    Gestate,
    /// 양
    Nurture,
}

/// Stages in life-cycle order.
pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Birth,
    TwelveStage::Bath,
    TwelveStage::Cap,
    TwelveStage::Prime,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sick,
    TwelveStage::Death,
    TwelveStage::Tomb,
    TwelveStage::Extinct,
    TwelveStage::Gestate,
    TwelveStage::Nurture,
];

impl TwelveStage {
    /// Vitality in hundredths (peak = 100 .. extinct = 10).
    pub const fn strength_hundredths(self) -> u32 {
        match self {
            Self::Birth => 70,
            Self::Bath => 50,
            Self::Cap => 80,
            Self::Prime => 90,
            Self::Peak => 100,
            Self::Decline => 40,
            Self::Sick => 30,
            Self::Death => 20,
            Self::Tomb => 15,
            Self::Extinct => 10,
            Self::Gestate => 30,
            Self::Nurture => 50,
        }
    }

    pub fn strength(self) -> f64 {
        self.strength_hundredths() as f64 / 100.0
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "장생",
            Self::Bath => "목욕",
            Self::Cap => "관대",
            Self::Prime => "건록",
            Self::Peak => "제왕",
            Self::Decline => "쇠",
            Self::Sick => "병",
            Self::Death => "사",
            Self::Tomb => "묘",
            Self::Extinct => "절",
            Self::Gestate => "태",
            Self::Nurture => "양",
        }
    }
}

/// Branch index where a stem's birth stage falls.
const fn birth_branch(stem: Stem) -> u8 {
    match stem {
        Stem::Gap => 11,
        Stem::Byeong | Stem::Mu => 2,
        Stem::Gyeong => 5,
        Stem::Im => 8,
        Stem::Eul => 6,
        Stem::Jeong | Stem::Gi => 9,
        Stem::Sin => 0,
        Stem::Gye => 3,
    }
}

/// Stage of `stem` on `branch`.
pub const fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    let start = birth_branch(stem);
    let b = branch.index();
    let offset = if stem.polarity().is_yang() {
        (b + 12 - start) % 12
    } else {
        (start + 12 - b) % 12
    };
    ALL_TWELVE_STAGES[offset as usize]
}

/// Day master's stage on one chart branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageReading {
    pub position: PillarPosition,
    pub branch: Branch,
    pub stage: TwelveStage,
    pub strength: f64,
}

/// Day master's stage on each of the four branches.
pub fn twelve_stage_readings(chart: &SajuChart) -> [StageReading; 4] {
    let dm = chart.day_master();
    chart.pillars().map(|(position, p)| {
        let stage = twelve_stage(dm, p.branch());
        StageReading { position, branch: p.branch(), stage, strength: stage.strength() }
    })
}
