//! Heavenly stems (천간, 天干).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    /// 갑 甲
    Gap,
    /// 을 乙
    Eul,
    /// 병 丙
    Byeong,
    /// 정 丁
    Jeong,
    /// 무 戊
    Mu,
    /// 기 己
    Gi,
    /// 경 庚
    Gyeong,
    /// 신 辛
    Sin,
    /// 임 壬
    Im,
    /// 계 癸
    Gye,
}

/// All ten stems in cyclic order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem for an index, wrapping modulo 10.
    pub const fn from_index(i: u8) -> Self {
        ALL_STEMS[(i % 10) as usize]
    }

    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Stems pair off per element: 갑을 wood, 병정 fire, and so on.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Even-indexed stems are yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Stem that combines with this one (갑기, 을경, 병신, 정임, 무계).
    pub const fn combining_partner(self) -> Self {
        Self::from_index(self.index() + 5)
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.hanja())
    }
}
