//! Seasonal command (월령): strength of an element in the birth month.
//!
//! The month branch fixes a season element. An element is at its peak (왕)
//! when it is the season, rising (상) when the season generates it, resting
//! (휴) when it generates the season, trapped (수) when it overcomes the
//! season and dead (사) when the season overcomes it.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{Element, ElementRelation};

/// Five seasonal states (왕상휴수사).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalState {
    Peak,
    Rising,
    Rest,
    Trapped,
    Dead,
}

impl SeasonalState {
    /// Strength in tenths: 10, 8, 5, 3, 1.
    pub const fn strength_tenths(self) -> u32 {
        match self {
            Self::Peak => 10,
            Self::Rising => 8,
            Self::Rest => 5,
            Self::Trapped => 3,
            Self::Dead => 1,
        }
    }

    pub fn strength(self) -> f64 {
        self.strength_tenths() as f64 / 10.0
    }

    /// Peak or rising: the element holds the month (득령).
    pub const fn holds_month(self) -> bool {
        matches!(self, Self::Peak | Self::Rising)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peak => "왕",
            Self::Rising => "상",
            Self::Rest => "휴",
            Self::Trapped => "수",
            Self::Dead => "사",
        }
    }
}

/// Season element of a month branch. 辰戌丑未 are the earth transitions.
pub const fn season_element(month_branch: Branch) -> Element {
    match month_branch {
        Branch::In | Branch::Myo => Element::Wood,
        Branch::Sa | Branch::O => Element::Fire,
        Branch::Sin | Branch::Yu => Element::Metal,
        Branch::Hae | Branch::Ja => Element::Water,
        Branch::Jin | Branch::Sul | Branch::Chuk | Branch::Mi => Element::Earth,
    }
}

/// Seasonal state of `element` in the month of `month_branch`.
pub const fn seasonal_state(element: Element, month_branch: Branch) -> SeasonalState {
    match season_element(month_branch).relation_to(element) {
        ElementRelation::Same => SeasonalState::Peak,
        ElementRelation::Generates => SeasonalState::Rising,
        ElementRelation::GeneratedBy => SeasonalState::Rest,
        ElementRelation::OvercomeBy => SeasonalState::Trapped,
        ElementRelation::Overcomes => SeasonalState::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wood_through_the_year() {
        assert_eq!(seasonal_state(Element::Wood, Branch::Myo), SeasonalState::Peak);
        assert_eq!(seasonal_state(Element::Wood, Branch::Ja), SeasonalState::Rising);
        assert_eq!(seasonal_state(Element::Wood, Branch::O), SeasonalState::Rest);
        assert_eq!(seasonal_state(Element::Wood, Branch::Jin), SeasonalState::Trapped);
        assert_eq!(seasonal_state(Element::Wood, Branch::Yu), SeasonalState::Dead);
    }

    #[test]
    fn metal_in_summer_is_dead() {
        assert_eq!(seasonal_state(Element::Metal, Branch::Sa), SeasonalState::Dead);
        assert!(!SeasonalState::Dead.holds_month());
        assert!(SeasonalState::Rising.holds_month());
    }
}
