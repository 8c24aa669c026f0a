//! Relations among the four chart branches (합충형파해).
//!
//! Pair tables are symmetric: a pair matches in either order. Triples
//! (three-harmony, directional harmony) need all three branches present
//! anywhere in the chart. Half-harmonies are only reported when no full
//! three-harmony formed.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::chart::{PillarPosition, SajuChart};
use crate::element::Element;

/// Flavour of a pairwise punishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunishmentKind {
    /// 무은지형: 寅巳申 and 丑戌未.
    Ungrateful,
    /// 무례지형: 子卯.
    Rude,
}

/// Detected relation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// 육합
    SixHarmony,
    /// 삼합
    ThreeHarmony,
    /// 반합
    HalfHarmony,
    /// 방합
    DirectionalHarmony,
    /// 충
    Clash,
    /// 형
    Punishment(PunishmentKind),
    /// 자형: the same branch at two or more positions.
    SelfPunishment,
    /// 파
    Destruction,
    /// 해
    Harm,
}

impl RelationKind {
    /// Harmonies are favorable; everything else is not.
    pub const fn is_favorable(self) -> bool {
        matches!(
            self,
            Self::SixHarmony | Self::ThreeHarmony | Self::HalfHarmony | Self::DirectionalHarmony
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SixHarmony => "육합",
            Self::ThreeHarmony => "삼합",
            Self::HalfHarmony => "반합",
            Self::DirectionalHarmony => "방합",
            Self::Clash => "충",
            Self::Punishment(PunishmentKind::Ungrateful) => "무은지형",
            Self::Punishment(PunishmentKind::Rude) => "무례지형",
            Self::SelfPunishment => "자형",
            Self::Destruction => "파",
            Self::Harm => "해",
        }
    }
}

/// One detected relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRelation {
    pub kind: RelationKind,
    pub branches: Vec<Branch>,
    pub positions: Vec<PillarPosition>,
    /// Element formed by a harmony.
    pub element: Option<Element>,
    pub favorable: bool,
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

use Branch::*;

const SIX_HARMONY: [(Branch, Branch, Element); 6] = [
    (Ja, Chuk, Element::Earth),
    (In, Hae, Element::Wood),
    (Myo, Sul, Element::Fire),
    (Jin, Yu, Element::Metal),
    (Sa, Sin, Element::Water),
    (O, Mi, Element::Fire),
];

const THREE_HARMONY: [([Branch; 3], Element); 4] = [
    ([Sin, Ja, Jin], Element::Water),
    ([Hae, Myo, Mi], Element::Wood),
    ([In, O, Sul], Element::Fire),
    ([Sa, Yu, Chuk], Element::Metal),
];

const HALF_HARMONY: [(Branch, Branch, Element); 8] = [
    (Sin, Ja, Element::Water),
    (Ja, Jin, Element::Water),
    (Hae, Myo, Element::Wood),
    (Myo, Mi, Element::Wood),
    (In, O, Element::Fire),
    (O, Sul, Element::Fire),
    (Sa, Yu, Element::Metal),
    (Yu, Chuk, Element::Metal),
];

const DIRECTIONAL_HARMONY: [([Branch; 3], Element); 4] = [
    ([In, Myo, Jin], Element::Wood),
    ([Sa, O, Mi], Element::Fire),
    ([Sin, Yu, Sul], Element::Metal),
    ([Hae, Ja, Chuk], Element::Water),
];

const CLASH: [(Branch, Branch); 6] = [(Ja, O), (Chuk, Mi), (In, Sin), (Myo, Yu), (Jin, Sul), (Sa, Hae)];

const PUNISHMENT: [(Branch, Branch, PunishmentKind); 7] = [
    (In, Sa, PunishmentKind::Ungrateful),
    (Sa, Sin, PunishmentKind::Ungrateful),
    (Sin, In, PunishmentKind::Ungrateful),
    (Chuk, Sul, PunishmentKind::Ungrateful),
    (Sul, Mi, PunishmentKind::Ungrateful),
    (Mi, Chuk, PunishmentKind::Ungrateful),
    (Ja, Myo, PunishmentKind::Rude),
];

const DESTRUCTION: [(Branch, Branch); 6] = [(Ja, Yu), (Chuk, Jin), (In, Hae), (Myo, O), (Sin, Sa), (Mi, Sul)];

const HARM: [(Branch, Branch); 6] = [(Ja, Mi), (Chuk, O), (In, Sa), (Myo, Jin), (Sin, Hae), (Yu, Sul)];

fn same_pair(a: Branch, b: Branch, x: Branch, y: Branch) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

/// Element formed by a six-harmony pair, if the pair is one.
pub fn six_harmony(a: Branch, b: Branch) -> Option<Element> {
    SIX_HARMONY.iter().find(|(x, y, _)| same_pair(a, b, *x, *y)).map(|(_, _, e)| *e)
}

/// True if the two branches clash.
pub fn is_clash(a: Branch, b: Branch) -> bool {
    CLASH.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

fn punishment(a: Branch, b: Branch) -> Option<PunishmentKind> {
    PUNISHMENT.iter().find(|(x, y, _)| same_pair(a, b, *x, *y)).map(|(_, _, k)| *k)
}

fn is_destruction(a: Branch, b: Branch) -> bool {
    DESTRUCTION.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

fn is_harm(a: Branch, b: Branch) -> bool {
    HARM.iter().any(|(x, y)| same_pair(a, b, *x, *y))
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

struct Slots([(PillarPosition, Branch); 4]);

impl Slots {
    fn contains(&self, b: Branch) -> bool {
        self.0.iter().any(|(_, x)| *x == b)
    }

    fn positions_of(&self, set: &[Branch]) -> Vec<PillarPosition> {
        self.0.iter().filter(|(_, x)| set.contains(x)).map(|(p, _)| *p).collect()
    }

    fn pairs(&self) -> impl Iterator<Item = ((PillarPosition, Branch), (PillarPosition, Branch))> + '_ {
        (0..4).flat_map(move |i| (i + 1..4).map(move |j| (self.0[i], self.0[j])))
    }
}

fn pair_relation(
    kind: RelationKind,
    (pa, a): (PillarPosition, Branch),
    (pb, b): (PillarPosition, Branch),
    element: Option<Element>,
) -> BranchRelation {
    BranchRelation {
        kind,
        branches: vec![a, b],
        positions: vec![pa, pb],
        element,
        favorable: kind.is_favorable(),
    }
}

fn set_relation(kind: RelationKind, slots: &Slots, set: &[Branch], element: Option<Element>) -> BranchRelation {
    BranchRelation {
        kind,
        branches: set.to_vec(),
        positions: slots.positions_of(set),
        element,
        favorable: kind.is_favorable(),
    }
}

/// Detect every branch relation in a chart.
pub fn branch_relations(chart: &SajuChart) -> Vec<BranchRelation> {
    let slots = Slots(chart.pillars().map(|(p, pillar)| (p, pillar.branch())));
    let mut out = Vec::new();

    for (x, y) in slots.pairs() {
        if let Some(e) = six_harmony(x.1, y.1) {
            out.push(pair_relation(RelationKind::SixHarmony, x, y, Some(e)));
        }
    }

    let mut three_formed = false;
    for (set, e) in &THREE_HARMONY {
        if set.iter().all(|b| slots.contains(*b)) {
            three_formed = true;
            out.push(set_relation(RelationKind::ThreeHarmony, &slots, set, Some(*e)));
        }
    }
    if !three_formed {
        for (a, b, e) in &HALF_HARMONY {
            if slots.contains(*a) && slots.contains(*b) {
                out.push(set_relation(RelationKind::HalfHarmony, &slots, &[*a, *b], Some(*e)));
            }
        }
    }

    for (set, e) in &DIRECTIONAL_HARMONY {
        if set.iter().all(|b| slots.contains(*b)) {
            out.push(set_relation(RelationKind::DirectionalHarmony, &slots, set, Some(*e)));
        }
    }

    for (x, y) in slots.pairs() {
        if is_clash(x.1, y.1) {
            out.push(pair_relation(RelationKind::Clash, x, y, None));
        }
    }

    for (x, y) in slots.pairs() {
        if let Some(k) = punishment(x.1, y.1) {
            out.push(pair_relation(RelationKind::Punishment(k), x, y, None));
        }
    }

    for b in ALL_BRANCHES {
        let positions = slots.positions_of(&[b]);
        if positions.len() >= 2 {
            out.push(BranchRelation {
                kind: RelationKind::SelfPunishment,
                branches: vec![b],
                positions,
                element: None,
                favorable: false,
            });
        }
    }

    for (x, y) in slots.pairs() {
        if is_destruction(x.1, y.1) {
            out.push(pair_relation(RelationKind::Destruction, x, y, None));
        }
    }

    for (x, y) in slots.pairs() {
        if is_harm(x.1, y.1) {
            out.push(pair_relation(RelationKind::Harm, x, y, None));
        }
    }

    out
}
