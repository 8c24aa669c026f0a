//! Ten gods (십신, 十神): the relation of any stem or branch to the day master.
//!
//! The element relation picks one of five groups; matching polarity picks
//! the "indirect"/"same" member of the group and differing polarity the
//! "direct"/"rival" member.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::chart::{PillarPosition, SajuChart};
use crate::element::{Element, ElementRelation, Polarity};
use crate::stem::Stem;

/// The ten relation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGod {
    /// 비견 比肩
    PeerSame,
    /// 겁재 劫財
    PeerRival,
    /// 식신 食神
    OutputSame,
    /// 상관 傷官
    OutputRival,
    /// 편재 偏財
    WealthIndirect,
    /// 정재 正財
    WealthDirect,
    /// 편관 偏官
    AuthorityIndirect,
    /// 정관 正官
    AuthorityDirect,
    /// 편인 偏印
    ResourceIndirect,
    /// 정인 正印
    ResourceDirect,
}

/// The five groups the ten gods pair into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenGodGroup {
    /// 비겁: same element.
    Peer,
    /// 식상: element the day master generates.
    Output,
    /// 재성: element the day master overcomes.
    Wealth,
    /// 관성: element that overcomes the day master.
    Authority,
    /// 인성: element that generates the day master.
    Resource,
}

impl TenGodGroup {
    /// Group of a target element relative to the day master's element.
    pub const fn of(day_element: Element, target: Element) -> Self {
        match day_element.relation_to(target) {
            ElementRelation::Same => Self::Peer,
            ElementRelation::Generates => Self::Output,
            ElementRelation::Overcomes => Self::Wealth,
            ElementRelation::OvercomeBy => Self::Authority,
            ElementRelation::GeneratedBy => Self::Resource,
        }
    }

    /// Peer and resource strengthen the day master.
    pub const fn is_supporting(self) -> bool {
        matches!(self, Self::Peer | Self::Resource)
    }
}

impl TenGod {
    /// Classify a target element/polarity against the day master.
    pub const fn classify(day_master: Stem, element: Element, polarity: Polarity) -> Self {
        let same = matches!(
            (day_master.polarity(), polarity),
            (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
        );
        match (TenGodGroup::of(day_master.element(), element), same) {
            (TenGodGroup::Peer, true) => Self::PeerSame,
            (TenGodGroup::Peer, false) => Self::PeerRival,
            (TenGodGroup::Output, true) => Self::OutputSame,
            (TenGodGroup::Output, false) => Self::OutputRival,
            (TenGodGroup::Wealth, true) => Self::WealthIndirect,
            (TenGodGroup::Wealth, false) => Self::WealthDirect,
            (TenGodGroup::Authority, true) => Self::AuthorityIndirect,
            (TenGodGroup::Authority, false) => Self::AuthorityDirect,
            (TenGodGroup::Resource, true) => Self::ResourceIndirect,
            (TenGodGroup::Resource, false) => Self::ResourceDirect,
        }
    }

    /// Ten god of a stem.
    pub const fn of_stem(day_master: Stem, stem: Stem) -> Self {
        Self::classify(day_master, stem.element(), stem.polarity())
    }

    /// Ten god of a branch, by its surface element and polarity.
    pub const fn of_branch(day_master: Stem, branch: Branch) -> Self {
        Self::classify(day_master, branch.element(), branch.polarity())
    }

    pub const fn group(self) -> TenGodGroup {
        match self {
            Self::PeerSame | Self::PeerRival => TenGodGroup::Peer,
            Self::OutputSame | Self::OutputRival => TenGodGroup::Output,
            Self::WealthIndirect | Self::WealthDirect => TenGodGroup::Wealth,
            Self::AuthorityIndirect | Self::AuthorityDirect => TenGodGroup::Authority,
            Self::ResourceIndirect | Self::ResourceDirect => TenGodGroup::Resource,
        }
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeerSame => "비견",
            Self::PeerRival => "겁재",
            Self::OutputSame => "식신",
            Self::OutputRival => "상관",
            Self::WealthIndirect => "편재",
            Self::WealthDirect => "정재",
            Self::AuthorityIndirect => "편관",
            Self::AuthorityDirect => "정관",
            Self::ResourceIndirect => "편인",
            Self::ResourceDirect => "정인",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::PeerSame => "比肩",
            Self::PeerRival => "劫財",
            Self::OutputSame => "食神",
            Self::OutputRival => "傷官",
            Self::WealthIndirect => "偏財",
            Self::WealthDirect => "正財",
            Self::AuthorityIndirect => "偏官",
            Self::AuthorityDirect => "正官",
            Self::ResourceIndirect => "偏印",
            Self::ResourceDirect => "正印",
        }
    }
}

/// Ten gods of one pillar's stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenGodRelation {
    pub position: PillarPosition,
    pub stem: Stem,
    pub branch: Branch,
    pub stem_god: TenGod,
    pub branch_god: TenGod,
}

/// Ten gods for all four pillars. The day stem is always [`TenGod::PeerSame`].
pub fn ten_gods(chart: &SajuChart) -> [TenGodRelation; 4] {
    let dm = chart.day_master();
    chart.pillars().map(|(position, p)| TenGodRelation {
        position,
        stem: p.stem(),
        branch: p.branch(),
        stem_god: if position == PillarPosition::Day {
            TenGod::PeerSame
        } else {
            TenGod::of_stem(dm, p.stem())
        },
        branch_god: TenGod::of_branch(dm, p.branch()),
    })
}
