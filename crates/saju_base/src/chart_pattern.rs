//! Chart pattern (격국, 格局): a 13-way structural archetype.
//!
//! An extremely weak day master "follows" (종격) whichever draining force
//! dominates the non-day pillars. Otherwise the month branch decides: the
//! day stem's prime (건록) or blade (양인) branch gives those special
//! patterns, anything else is named after the ten god of the month
//! branch's main hidden stem.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{PillarPosition, SajuChart};
use crate::hidden_stem::main_hidden_stem;
use crate::stem::Stem;
use crate::strength::{DayMasterAnalysis, StrengthTier};
use crate::ten_god::{TenGod, TenGodGroup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartPattern {
    /// 정관격
    DirectAuthority,
    /// 편관격
    IndirectAuthority,
    /// 정인격
    DirectResource,
    /// 편인격
    IndirectResource,
    /// 정재격
    DirectWealth,
    /// 편재격
    IndirectWealth,
    /// 식신격
    EatingGod,
    /// 상관격
    HurtingOfficer,
    /// 건록격
    Prime,
    /// 양인격
    Blade,
    /// 종재격
    FollowWealth,
    /// 종관격
    FollowAuthority,
    /// 종아격
    FollowOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// 정격
    Regular,
    /// 특수격
    Special,
}

impl ChartPattern {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DirectAuthority => "정관격",
            Self::IndirectAuthority => "편관격",
            Self::DirectResource => "정인격",
            Self::IndirectResource => "편인격",
            Self::DirectWealth => "정재격",
            Self::IndirectWealth => "편재격",
            Self::EatingGod => "식신격",
            Self::HurtingOfficer => "상관격",
            Self::Prime => "건록격",
            Self::Blade => "양인격",
            Self::FollowWealth => "종재격",
            Self::FollowAuthority => "종관격",
            Self::FollowOutput => "종아격",
        }
    }

    /// Only the following patterns are special; prime and blade count as
    /// regular (정격).
    pub const fn category(self) -> PatternCategory {
        match self {
            Self::FollowWealth | Self::FollowAuthority | Self::FollowOutput => PatternCategory::Special,
            _ => PatternCategory::Regular,
        }
    }

    /// Pattern named by a month-branch ten god. Peer and rival fold into
    /// prime and blade.
    pub const fn from_ten_god(god: TenGod) -> Self {
        match god {
            TenGod::AuthorityDirect => Self::DirectAuthority,
            TenGod::AuthorityIndirect => Self::IndirectAuthority,
            TenGod::ResourceDirect => Self::DirectResource,
            TenGod::ResourceIndirect => Self::IndirectResource,
            TenGod::WealthDirect => Self::DirectWealth,
            TenGod::WealthIndirect => Self::IndirectWealth,
            TenGod::OutputSame => Self::EatingGod,
            TenGod::OutputRival => Self::HurtingOfficer,
            TenGod::PeerSame => Self::Prime,
            TenGod::PeerRival => Self::Blade,
        }
    }
}

/// Prime (건록) branch of a day stem.
pub const fn prime_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::In,
        Stem::Eul => Branch::Myo,
        Stem::Byeong | Stem::Mu => Branch::Sa,
        Stem::Jeong | Stem::Gi => Branch::O,
        Stem::Gyeong => Branch::Sin,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Hae,
        Stem::Gye => Branch::Ja,
    }
}

/// Blade (양인) branch of a day stem.
pub const fn blade_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::Myo,
        Stem::Eul => Branch::In,
        Stem::Byeong | Stem::Mu => Branch::O,
        Stem::Jeong | Stem::Gi => Branch::Sa,
        Stem::Gyeong => Branch::Yu,
        Stem::Sin => Branch::Sin,
        Stem::Im => Branch::Ja,
        Stem::Gye => Branch::Hae,
    }
}

/// Following pattern for an extremely weak day master.
///
/// Counts wealth, authority and output elements over the stems and branches
/// of the year, month and hour pillars; ties go wealth, then authority.
fn following_pattern(chart: &SajuChart) -> ChartPattern {
    let de = chart.day_master().element();
    let (mut wealth, mut authority, mut output) = (0, 0, 0);
    for (position, p) in chart.pillars() {
        if position == PillarPosition::Day {
            continue;
        }
        for e in [p.stem_element(), p.branch_element()] {
            match TenGodGroup::of(de, e) {
                TenGodGroup::Wealth => wealth += 1,
                TenGodGroup::Authority => authority += 1,
                TenGodGroup::Output => output += 1,
                TenGodGroup::Peer | TenGodGroup::Resource => {}
            }
        }
    }
    if wealth >= authority && wealth >= output {
        ChartPattern::FollowWealth
    } else if authority >= output {
        ChartPattern::FollowAuthority
    } else {
        ChartPattern::FollowOutput
    }
}

/// Classify the chart's pattern.
pub fn chart_pattern(chart: &SajuChart, analysis: &DayMasterAnalysis) -> ChartPattern {
    if analysis.tier == StrengthTier::ExtremelyWeak {
        return following_pattern(chart);
    }
    let dm = chart.day_master();
    let month = chart.month.branch();
    if month == prime_branch(dm) {
        return ChartPattern::Prime;
    }
    if month == blade_branch(dm) {
        return ChartPattern::Blade;
    }
    ChartPattern::from_ten_god(TenGod::of_stem(dm, main_hidden_stem(month)))
}
