//! Pillars (주): one stem-branch pair of the sexagenary cycle.
//!
//! A pillar stores only its position in the 60-term cycle. Stem and branch
//! are both read off that one index (mod 10, mod 12), so a pillar whose
//! stem and branch disagree in polarity cannot be represented.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::ChartError;
use crate::stem::Stem;

/// One stem-branch pair (갑자, 을축, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PillarRepr", into = "PillarRepr")]
pub struct Pillar {
    cycle: u8,
}

impl Pillar {
    /// Pillar at a sexagenary position; any integer, wrapped into 0..60.
    pub const fn from_cycle(index: i64) -> Self {
        Self { cycle: index.rem_euclid(60) as u8 }
    }

    /// Pillar from an explicit pair. Fails when the polarities differ.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, ChartError> {
        let diff = branch.index() as i64 - stem.index() as i64;
        if diff.rem_euclid(2) != 0 {
            return Err(ChartError::PolarityMismatch { stem, branch });
        }
        // n ≡ s (mod 10), n ≡ b (mod 12): n = s + 10k with 5k ≡ (b - s)/2 (mod 6).
        let k = (5 * diff / 2).rem_euclid(6);
        Ok(Self::from_cycle(stem.index() as i64 + 10 * k))
    }

    /// Position in the 60-term cycle (갑자 = 0).
    pub const fn cycle(self) -> u8 {
        self.cycle
    }

    pub const fn stem(self) -> Stem {
        Stem::from_index(self.cycle % 10)
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.cycle % 12)
    }

    pub const fn stem_element(self) -> Element {
        self.stem().element()
    }

    pub const fn branch_element(self) -> Element {
        self.branch().element()
    }

    /// Shared polarity of stem and branch.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.cycle)
    }

    /// Pillar `steps` positions along the cycle (negative steps go back).
    pub const fn offset(self, steps: i64) -> Self {
        Self::from_cycle(self.cycle as i64 + steps)
    }

    /// Korean reading, e.g. "갑자".
    pub fn korean_name(self) -> String {
        format!("{}{}", self.stem().name(), self.branch().name())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("{}{}", self.stem().hanja(), self.branch().hanja()))
    }
}

#[derive(Serialize, Deserialize)]
struct PillarRepr {
    stem: Stem,
    branch: Branch,
}

impl From<Pillar> for PillarRepr {
    fn from(p: Pillar) -> Self {
        Self { stem: p.stem(), branch: p.branch() }
    }
}

impl TryFrom<PillarRepr> for Pillar {
    type Error = ChartError;

    fn try_from(r: PillarRepr) -> Result<Self, Self::Error> {
        Pillar::new(r.stem, r.branch)
    }
}
