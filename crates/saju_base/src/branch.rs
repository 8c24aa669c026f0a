//! Earthly branches (지지, 地支).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The twelve earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// 자 子
    Ja,
    /// 축 丑
    Chuk,
    /// 인 寅
    In,
    /// 묘 卯
    Myo,
    /// 진 辰
    Jin,
    /// 사 巳
    Sa,
    /// 오 午
    O,
    /// 미 未
    Mi,
    /// 신 申
    Sin,
    /// 유 酉
    Yu,
    /// 술 戌
    Sul,
    /// 해 亥
    Hae,
}

/// All twelve branches in cyclic order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch for an index, wrapping modulo 12.
    pub const fn from_index(i: u8) -> Self {
        ALL_BRANCHES[(i % 12) as usize]
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Surface element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Even-indexed branches are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Zodiac animal (띠).
    pub const fn zodiac_animal(self) -> &'static str {
        match self {
            Self::Ja => "쥐",
            Self::Chuk => "소",
            Self::In => "호랑이",
            Self::Myo => "토끼",
            Self::Jin => "용",
            Self::Sa => "뱀",
            Self::O => "말",
            Self::Mi => "양",
            Self::Sin => "원숭이",
            Self::Yu => "닭",
            Self::Sul => "개",
            Self::Hae => "돼지",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.hanja())
    }
}
