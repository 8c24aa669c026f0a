//! Year outlook (신년 운세): a given year's pillar against the day pillar,
//! with a score for each of its twelve solar months.

use serde::{Deserialize, Serialize};

use saju_base::{Pillar, TenGod, year_pillar};

use super::{NARROW_CUTS, Outlook, clamp_score};
use crate::daily::relation_score;
use crate::result::SajuResult;

/// One-word grade of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthKeyword {
    /// 80..=100
    GreatFortune,
    /// 65..=79
    Fortunate,
    /// 50..=64
    Ordinary,
    /// 35..=49
    MinorTrouble,
    /// 10..=34
    Caution,
}

impl MonthKeyword {
    pub const fn from_score(score: u32) -> Self {
        match score {
            80.. => Self::GreatFortune,
            65..=79 => Self::Fortunate,
            50..=64 => Self::Ordinary,
            35..=49 => Self::MinorTrouble,
            _ => Self::Caution,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::GreatFortune => "대길",
            Self::Fortunate => "길",
            Self::Ordinary => "보통",
            Self::MinorTrouble => "소흉",
            Self::Caution => "주의",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOutlook {
    /// Solar month ordinal, 1 = 寅 month.
    pub month: u32,
    pub pillar: Pillar,
    pub score: u32,
    pub keyword: MonthKeyword,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyFortune {
    pub year: i32,
    pub pillar: Pillar,
    /// Ten god of the year stem.
    pub ten_god: TenGod,
    pub theme: String,
    pub score: u32,
    pub outlook: Outlook,
    /// Luck period current at the reading's reference age.
    pub current_luck: Option<Pillar>,
    pub months: Vec<MonthOutlook>,
    pub summary: String,
    pub advice: String,
}

/// Score `year` for a reading.
pub fn yearly_fortune(result: &SajuResult, year: i32) -> YearlyFortune {
    let day = result.chart.day;
    let dm = result.chart.day_master();
    let pillar = year_pillar(year);
    let ten_god = TenGod::of_stem(dm, pillar.stem());
    let score = clamp_score(50 + pillar_score(day, pillar));

    // 寅 month of a year whose stem index is s sits at cycle (s mod 5)·12 + 2.
    let first = Pillar::from_cycle((pillar.stem().index() % 5) as i64 * 12 + 2);
    let months = (1..=12u32)
        .map(|m| {
            let p = first.offset(m as i64 - 1);
            let seed = (year as i64 * 100 + m as i64).rem_euclid(15) as i32 - 7;
            let score = clamp_score(50 + pillar_score(day, p) + seed);
            MonthOutlook { month: m, pillar: p, score, keyword: MonthKeyword::from_score(score) }
        })
        .collect();

    let outlook = Outlook::grade(score, NARROW_CUTS);
    YearlyFortune {
        year,
        pillar,
        ten_god,
        theme: theme(ten_god).to_string(),
        score,
        outlook,
        current_luck: result.current_luck_cycle().map(|p| p.pillar),
        months,
        summary: summary(outlook, ten_god, year),
        advice: advice(ten_god).to_string(),
    }
}

fn pillar_score(day: Pillar, other: Pillar) -> i32 {
    relation_score(day.stem_element(), other.stem_element())
        + relation_score(day.branch_element(), other.branch_element())
}

const fn theme(god: TenGod) -> &'static str {
    match god {
        TenGod::PeerSame => "자기 발견과 독립의 해",
        TenGod::PeerRival => "도전과 경쟁의 해",
        TenGod::OutputSame => "재능 발휘와 여유의 해",
        TenGod::OutputRival => "창의성과 변화의 해",
        TenGod::WealthIndirect => "투자와 기회의 해",
        TenGod::WealthDirect => "안정적 수입과 저축의 해",
        TenGod::AuthorityIndirect => "리더십과 권위의 해",
        TenGod::AuthorityDirect => "명예와 승진의 해",
        TenGod::ResourceIndirect => "학문과 자기계발의 해",
        TenGod::ResourceDirect => "학업과 성장의 해",
    }
}

fn summary(outlook: Outlook, god: TenGod, year: i32) -> String {
    let god = god.name();
    match outlook {
        Outlook::Excellent => format!(
            "{year}년은 {god}의 기운이 작용하여 전반적으로 좋은 한 해가 될 것입니다. 새로운 시도에 좋은 시기입니다."
        ),
        Outlook::Good => {
            format!("{year}년은 안정적인 한 해입니다. {god}의 기운 아래 꾸준한 노력이 성과로 이어집니다.")
        }
        Outlook::Fair => {
            format!("{year}년은 내면의 성장에 집중하기 좋은 해입니다. 조급해하지 말고 천천히 나아가세요.")
        }
        Outlook::Poor => format!("{year}년은 인내가 필요한 해입니다. 기반을 다지는 시기로 삼으면 좋겠습니다."),
    }
}

const fn advice(god: TenGod) -> &'static str {
    match god {
        TenGod::PeerSame => "자기 자신에게 투자하세요. 건강 관리와 자기계발이 중요한 해입니다.",
        TenGod::PeerRival => "경쟁에서 이기려 하기보다 협력의 기회를 찾으세요. 파트너십이 행운을 가져옵니다.",
        TenGod::OutputSame => "취미와 재능을 살려보세요. 즐기는 것에서 기회가 찾아옵니다.",
        TenGod::OutputRival => "기존의 틀을 깨는 새로운 시도가 좋습니다. 단, 인간관계에서는 언행에 주의하세요.",
        TenGod::WealthIndirect => "투자와 사업에 좋은 기회가 올 수 있습니다. 단, 과욕은 금물입니다.",
        TenGod::WealthDirect => "꾸준한 저축과 안정적인 투자가 좋습니다. 지름길보다 정도를 걸으세요.",
        TenGod::AuthorityIndirect => "리더십을 발휘할 기회가 옵니다. 책임감을 가지고 나서면 인정받습니다.",
        TenGod::AuthorityDirect => "승진이나 시험에 좋은 기운입니다. 규칙을 잘 지키면 좋은 결과가 따릅니다.",
        TenGod::ResourceIndirect => "새로운 분야의 공부나 자격증 취득에 좋습니다. 독특한 관점이 빛을 발합니다.",
        TenGod::ResourceDirect => "학업과 자기계발에 최적의 해입니다. 어머니나 스승의 도움이 있을 수 있습니다.",
    }
}
