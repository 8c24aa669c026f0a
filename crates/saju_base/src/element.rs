//! Five elements (오행) and yin/yang polarity.
//!
//! The generation cycle is wood → fire → earth → metal → water → wood and
//! the overcoming cycle skips one step: wood → earth → water → fire →
//! metal → wood. Both follow from the cyclic index, so every relation
//! between two elements is one of exactly five cases.

use serde::{Deserialize, Serialize};

/// The five elements, declared in tie-break priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All elements in priority order (wood first).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// How a target element stands relative to a reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// Same element.
    Same,
    /// Reference generates target.
    Generates,
    /// Reference overcomes target.
    Overcomes,
    /// Target overcomes reference.
    OvercomeBy,
    /// Target generates reference.
    GeneratedBy,
}

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element for an index, wrapping modulo 5.
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// Classify `target` relative to `self`.
    pub const fn relation_to(self, target: Element) -> ElementRelation {
        match (target.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Overcomes,
            3 => ElementRelation::OvercomeBy,
            4 => ElementRelation::GeneratedBy,
            _ => unreachable!(),
        }
    }

    /// The element standing in `relation` to `self`.
    pub const fn related(self, relation: ElementRelation) -> Self {
        match relation {
            ElementRelation::Same => self,
            ElementRelation::Generates => self.generates(),
            ElementRelation::Overcomes => self.overcomes(),
            ElementRelation::OvercomeBy => self.overcome_by(),
            ElementRelation::GeneratedBy => self.generated_by(),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.hanja())
    }
}

/// Yin/yang polarity (음양).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a cyclic index: even = yang.
    pub const fn from_index(i: u8) -> Self {
        if i % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }
}
