//! Weighted five-element balance of a chart (오행 분포).

use serde::{Deserialize, Serialize};

use crate::chart::SajuChart;
use crate::element::{ALL_ELEMENTS, Element};
use crate::hidden_stem::hidden_stems;

/// Weighted element counts with the dominant and lacking element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveElementBalance {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
    /// Highest count; ties go to the earlier element (wood first).
    pub dominant: Element,
    /// Lowest count; ties go to the earlier element (wood first).
    pub lacking: Element,
}

impl FiveElementBalance {
    /// Build from per-element weights in tenths, indexed by [`Element::index`].
    pub fn from_tenths(tenths: [u32; 5]) -> Self {
        let mut dominant = Element::Wood;
        let mut lacking = Element::Wood;
        for e in ALL_ELEMENTS {
            let w = tenths[e.index() as usize];
            if w > tenths[dominant.index() as usize] {
                dominant = e;
            }
            if w < tenths[lacking.index() as usize] {
                lacking = e;
            }
        }
        let w = |e: Element| tenths[e.index() as usize] as f64 / 10.0;
        Self {
            wood: w(Element::Wood),
            fire: w(Element::Fire),
            earth: w(Element::Earth),
            metal: w(Element::Metal),
            water: w(Element::Water),
            dominant,
            lacking,
        }
    }

    /// Weighted count of one element.
    pub const fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Sum over all five elements.
    pub fn total(&self) -> f64 {
        ALL_ELEMENTS.iter().map(|e| self.get(*e)).sum()
    }
}

/// Per-element weights of a chart in tenths: 10 per stem plus each
/// branch's hidden-stem weights.
pub fn element_tenths(chart: &SajuChart) -> [u32; 5] {
    let mut tenths = [0u32; 5];
    for (_, p) in chart.pillars() {
        tenths[p.stem_element().index() as usize] += 10;
        for hs in hidden_stems(p.branch()) {
            tenths[hs.stem.element().index() as usize] += hs.tier.weight_tenths();
        }
    }
    tenths
}

/// Plain element counts of the eight stems and branches, indexed by
/// [`Element::index`]. Hidden stems are ignored.
pub fn surface_counts(chart: &SajuChart) -> [u32; 5] {
    let mut counts = [0u32; 5];
    for (_, p) in chart.pillars() {
        counts[p.stem_element().index() as usize] += 1;
        counts[p.branch_element().index() as usize] += 1;
    }
    counts
}

/// Weighted five-element balance of a chart.
pub fn five_element_balance(chart: &SajuChart) -> FiveElementBalance {
    FiveElementBalance::from_tenths(element_tenths(chart))
}
