//! Favorable-element resolution (용신, 用神).
//!
//! A strong day master wants draining (output, wealth, authority); a weak
//! one wants support (resource, peer). The four tables below differ only in
//! which of the five relative elements fills each role.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element, ElementRelation};
use crate::strength::{DayMasterAnalysis, StrengthTier};

/// Role an element plays for the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRole {
    /// 용신
    Favorable,
    /// 희신
    AllyOfFavorable,
    /// 한신
    Neutral,
    /// 구신
    AllyOfUnfavorable,
    /// 기신
    Unfavorable,
}

impl ElementRole {
    /// Favorability in [-1, 1].
    pub const fn favorability(self) -> f64 {
        match self {
            Self::Favorable => 1.0,
            Self::AllyOfFavorable => 0.6,
            Self::Neutral => 0.0,
            Self::AllyOfUnfavorable => -0.5,
            Self::Unfavorable => -1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Favorable => "용신",
            Self::AllyOfFavorable => "희신",
            Self::Neutral => "한신",
            Self::AllyOfUnfavorable => "구신",
            Self::Unfavorable => "기신",
        }
    }
}

/// Element assignment for each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YongshinProfile {
    pub favorable: Element,
    pub ally_of_favorable: Element,
    pub unfavorable: Element,
    pub ally_of_unfavorable: Element,
    pub neutral: Element,
}

/// Roles as relations to the day master:
/// (favorable, ally, unfavorable, anti-ally, neutral).
type RoleTable = [ElementRelation; 5];

const EXTREMELY_STRONG: RoleTable = [
    ElementRelation::OvercomeBy,
    ElementRelation::Generates,
    ElementRelation::Same,
    ElementRelation::GeneratedBy,
    ElementRelation::Overcomes,
];

const STRONG: RoleTable = [
    ElementRelation::Overcomes,
    ElementRelation::Generates,
    ElementRelation::GeneratedBy,
    ElementRelation::Same,
    ElementRelation::OvercomeBy,
];

const WEAK: RoleTable = [
    ElementRelation::GeneratedBy,
    ElementRelation::Same,
    ElementRelation::Overcomes,
    ElementRelation::OvercomeBy,
    ElementRelation::Generates,
];

const EXTREMELY_WEAK: RoleTable = [
    ElementRelation::GeneratedBy,
    ElementRelation::Same,
    ElementRelation::OvercomeBy,
    ElementRelation::Overcomes,
    ElementRelation::Generates,
];

const fn role_table(tier: StrengthTier) -> &'static RoleTable {
    match tier {
        StrengthTier::ExtremelyStrong => &EXTREMELY_STRONG,
        StrengthTier::Strong | StrengthTier::ModeratelyStrong => &STRONG,
        StrengthTier::ModeratelyWeak | StrengthTier::Weak => &WEAK,
        StrengthTier::ExtremelyWeak => &EXTREMELY_WEAK,
    }
}

impl YongshinProfile {
    /// Profile for a day-master element at a strength tier.
    pub const fn resolve(day_element: Element, tier: StrengthTier) -> Self {
        let t = role_table(tier);
        Self {
            favorable: day_element.related(t[0]),
            ally_of_favorable: day_element.related(t[1]),
            unfavorable: day_element.related(t[2]),
            ally_of_unfavorable: day_element.related(t[3]),
            neutral: day_element.related(t[4]),
        }
    }

    /// Role of an element. Total: the five roles cover all five elements.
    pub fn role_of(&self, element: Element) -> ElementRole {
        if element == self.favorable {
            ElementRole::Favorable
        } else if element == self.ally_of_favorable {
            ElementRole::AllyOfFavorable
        } else if element == self.unfavorable {
            ElementRole::Unfavorable
        } else if element == self.ally_of_unfavorable {
            ElementRole::AllyOfUnfavorable
        } else {
            ElementRole::Neutral
        }
    }

    pub fn favorability(&self, element: Element) -> f64 {
        self.role_of(element).favorability()
    }

    /// Elements from most to least favorable.
    pub fn ranked(&self) -> [Element; 5] {
        let mut all = ALL_ELEMENTS;
        all.sort_by(|a, b| self.favorability(*b).total_cmp(&self.favorability(*a)));
        all
    }
}

/// Resolve the profile from a day-master analysis.
pub fn resolve_yongshin(analysis: &DayMasterAnalysis) -> YongshinProfile {
    YongshinProfile::resolve(analysis.day_element, analysis.tier)
}

/// Lucky colors of a favorable element.
pub const fn lucky_colors(element: Element) -> &'static str {
    match element {
        Element::Wood => "초록색, 청색",
        Element::Fire => "빨간색, 보라색",
        Element::Earth => "노란색, 갈색",
        Element::Metal => "흰색, 은색",
        Element::Water => "검은색, 파란색",
    }
}

/// He Tu number of an element.
pub const fn lucky_number(element: Element) -> u8 {
    match element {
        Element::Wood => 3,
        Element::Fire => 7,
        Element::Earth => 5,
        Element::Metal => 9,
        Element::Water => 1,
    }
}

/// Compass direction associated with an element.
pub const fn lucky_direction(element: Element) -> &'static str {
    match element {
        Element::Wood => "동쪽",
        Element::Fire => "남쪽",
        Element::Earth => "중앙",
        Element::Metal => "서쪽",
        Element::Water => "북쪽",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_distinct(p: &YongshinProfile) -> bool {
        let mut seen = [false; 5];
        for e in [p.favorable, p.ally_of_favorable, p.unfavorable, p.ally_of_unfavorable, p.neutral] {
            if seen[e.index() as usize] {
                return false;
            }
            seen[e.index() as usize] = true;
        }
        true
    }

    #[test]
    fn every_profile_is_a_permutation() {
        for e in ALL_ELEMENTS {
            for s in [0, 20, 35, 50, 65, 80] {
                let p = YongshinProfile::resolve(e, StrengthTier::from_score(s));
                assert!(all_distinct(&p), "{e:?} at {s}");
            }
        }
    }

    #[test]
    fn weak_wood_wants_water() {
        let p = YongshinProfile::resolve(Element::Wood, StrengthTier::Weak);
        assert_eq!(p.favorable, Element::Water);
        assert_eq!(p.ally_of_favorable, Element::Wood);
        assert_eq!(p.unfavorable, Element::Earth);
        assert_eq!(p.ally_of_unfavorable, Element::Metal);
        assert_eq!(p.neutral, Element::Fire);
    }

    #[test]
    fn extremely_strong_metal_wants_fire() {
        let p = YongshinProfile::resolve(Element::Metal, StrengthTier::ExtremelyStrong);
        assert_eq!(p.favorable, Element::Fire);
        assert_eq!(p.unfavorable, Element::Metal);
    }

    #[test]
    fn moderate_tiers_fold() {
        assert_eq!(
            YongshinProfile::resolve(Element::Fire, StrengthTier::ModeratelyStrong),
            YongshinProfile::resolve(Element::Fire, StrengthTier::Strong)
        );
        assert_eq!(
            YongshinProfile::resolve(Element::Fire, StrengthTier::ModeratelyWeak),
            YongshinProfile::resolve(Element::Fire, StrengthTier::Weak)
        );
    }

    #[test]
    fn favorability_scale() {
        let p = YongshinProfile::resolve(Element::Earth, StrengthTier::Strong);
        assert_eq!(p.favorability(p.favorable), 1.0);
        assert_eq!(p.favorability(p.ally_of_favorable), 0.6);
        assert_eq!(p.favorability(p.neutral), 0.0);
        assert_eq!(p.favorability(p.ally_of_unfavorable), -0.5);
        assert_eq!(p.favorability(p.unfavorable), -1.0);
        assert_eq!(p.ranked()[0], p.favorable);
        assert_eq!(p.ranked()[4], p.unfavorable);
    }

    #[test]
    fn lucky_color_table() {
        assert_eq!(lucky_colors(Element::Wood), "초록색, 청색");
        assert_eq!(lucky_colors(Element::Fire), "빨간색, 보라색");
        assert_eq!(lucky_colors(Element::Metal), "흰색, 은색");
        assert_eq!(lucky_colors(Element::Water), "검은색, 파란색");
    }
}
