//! Compatibility (궁합) of two charts.
//!
//! Four category scores, each an integer percentage, combined with weights
//! 3:2:2:3 and rounded half up.

use serde::{Deserialize, Serialize};

use crate::branch_relation::six_harmony;
use crate::chart::{ALL_POSITIONS, SajuChart};
use crate::element::{Element, ElementRelation};
use crate::five_element::five_element_balance;

/// Which aspect a category score measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatAspect {
    /// 일주 상성
    DayElement,
    /// 천간 조화
    StemHarmony,
    /// 지지 조화
    BranchHarmony,
    /// 오행 보완
    Complement,
}

impl CompatAspect {
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayElement => "일주 상성",
            Self::StemHarmony => "천간 조화",
            Self::BranchHarmony => "지지 조화",
            Self::Complement => "오행 보완",
        }
    }

    /// Weight of this aspect in tenths of the total.
    pub const fn weight_tenths(self) -> u32 {
        match self {
            Self::DayElement | Self::Complement => 3,
            Self::StemHarmony | Self::BranchHarmony => 2,
        }
    }
}

/// Overall verdict band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatVerdict {
    /// 80..=100
    Destined,
    /// 65..=79
    Good,
    /// 50..=64
    Fair,
    /// 0..=49
    Challenging,
}

impl CompatVerdict {
    pub const fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::Destined,
            65..=79 => Self::Good,
            50..=64 => Self::Fair,
            _ => Self::Challenging,
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Destined => "천생연분! 서로에게 최고의 파트너가 될 수 있는 궁합입니다.",
            Self::Good => "좋은 궁합입니다. 서로 부족한 부분을 채워줄 수 있는 관계입니다.",
            Self::Fair => "무난한 궁합입니다. 서로의 차이를 이해하고 존중하면 좋은 관계를 유지할 수 있습니다.",
            Self::Challenging => "도전적인 궁합입니다. 서로의 다름을 인정하고 소통하면 강한 유대감을 가질 수 있습니다.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatCategory {
    pub aspect: CompatAspect,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    /// 0..=100.
    pub total: u32,
    pub verdict: CompatVerdict,
    /// Day element, stem harmony, branch harmony, complement.
    pub categories: [CompatCategory; 4],
    pub stem_harmonies: u32,
    pub branch_harmonies: u32,
}

/// Day-stem element score: same 70, generating either way 90, overcoming
/// either way 40.
pub const fn day_element_score(a: Element, b: Element) -> u32 {
    match a.relation_to(b) {
        ElementRelation::Same => 70,
        ElementRelation::Generates | ElementRelation::GeneratedBy => 90,
        ElementRelation::Overcomes | ElementRelation::OvercomeBy => 40,
    }
}

/// `50 + 20n`, capped at 100.
pub const fn harmony_score(count: u32) -> u32 {
    let s = 50 + 20 * count;
    if s > 100 { 100 } else { s }
}

/// Compare two charts position by position.
pub fn compatibility(a: &SajuChart, b: &SajuChart) -> Compatibility {
    let day = day_element_score(a.day_master().element(), b.day_master().element());

    let mut stem_harmonies = 0;
    let mut branch_harmonies = 0;
    for pos in ALL_POSITIONS {
        let (pa, pb) = (a.pillar(pos), b.pillar(pos));
        if pa.stem().combining_partner() == pb.stem() {
            stem_harmonies += 1;
        }
        if six_harmony(pa.branch(), pb.branch()).is_some() {
            branch_harmonies += 1;
        }
    }

    let (ba, bb) = (five_element_balance(a), five_element_balance(b));
    let mut complement = 50;
    if ba.lacking == bb.dominant {
        complement += 25;
    }
    if bb.lacking == ba.dominant {
        complement += 25;
    }

    let categories = [
        CompatCategory { aspect: CompatAspect::DayElement, score: day },
        CompatCategory { aspect: CompatAspect::StemHarmony, score: harmony_score(stem_harmonies) },
        CompatCategory { aspect: CompatAspect::BranchHarmony, score: harmony_score(branch_harmonies) },
        CompatCategory { aspect: CompatAspect::Complement, score: complement },
    ];
    let weighted: u32 = categories.iter().map(|c| c.score * c.aspect.weight_tenths()).sum();
    let total = (weighted + 5) / 10;

    Compatibility {
        total,
        verdict: CompatVerdict::from_score(total),
        categories,
        stem_harmonies,
        branch_harmonies,
    }
}
