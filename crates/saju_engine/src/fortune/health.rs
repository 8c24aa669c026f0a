//! Health outlook (건강운): organ systems read from the surface element
//! counts of the chart.

use serde::{Deserialize, Serialize};

use saju_base::{ALL_ELEMENTS, Element, surface_counts};

use super::{Outlook, WIDE_CUTS, clamp_score, round_half_up};
use crate::result::SajuResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganStatus {
    /// No stem or branch of the element.
    Weak,
    /// Exactly one.
    Normal,
    /// Two or three.
    Strong,
    /// Four or more.
    Excess,
}

impl OrganStatus {
    pub const fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Weak,
            1 => Self::Normal,
            2 | 3 => Self::Strong,
            _ => Self::Excess,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Weak => "약함",
            Self::Normal => "보통",
            Self::Strong => "강함",
            Self::Excess => "과다",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganReading {
    pub element: Element,
    pub organs: String,
    pub count: u32,
    pub status: OrganStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFortune {
    pub month: u32,
    /// Element of the calendar season of `month`.
    pub season: Element,
    pub organs: Vec<OrganReading>,
    pub weak_organs: Vec<String>,
    pub excess_organs: Vec<String>,
    pub score: u32,
    pub outlook: Outlook,
    pub seasonal_advice: String,
    pub tips: Vec<String>,
    pub summary: String,
    pub advice: String,
}

/// Organ pair governed by an element.
pub const fn organs_of(element: Element) -> &'static str {
    match element {
        Element::Wood => "간/담낭",
        Element::Fire => "심장/소장",
        Element::Earth => "비장/위장",
        Element::Metal => "폐/대장",
        Element::Water => "신장/방광",
    }
}

/// Season element of a calendar month: spring 2–4, summer 5–7, autumn 8–9,
/// winter otherwise.
pub const fn calendar_season(month: u32) -> Element {
    match month {
        2..=4 => Element::Wood,
        5..=7 => Element::Fire,
        8 | 9 => Element::Metal,
        _ => Element::Water,
    }
}

/// Read health for a chart during calendar `month` (1..=12).
pub fn health_fortune(result: &SajuResult, month: u32) -> HealthFortune {
    let counts = surface_counts(&result.chart);
    let organs: Vec<OrganReading> = ALL_ELEMENTS
        .iter()
        .map(|&element| {
            let count = counts[element.index() as usize];
            OrganReading {
                element,
                organs: organs_of(element).to_string(),
                count,
                status: OrganStatus::from_count(count),
            }
        })
        .collect();

    let with = |status: OrganStatus| organs.iter().filter(move |o| o.status == status);
    let weak_organs: Vec<String> = with(OrganStatus::Weak).map(|o| o.organs.clone()).collect();
    let excess_organs: Vec<String> = with(OrganStatus::Excess).map(|o| o.organs.clone()).collect();
    let present = organs
        .iter()
        .filter(|o| matches!(o.status, OrganStatus::Normal | OrganStatus::Strong))
        .count() as i32;

    let mut raw = 70 + present * 5 - weak_organs.len() as i32 * 10 - excess_organs.len() as i32 * 8;
    let yongshin = result.yongshin();
    raw += ALL_ELEMENTS.iter().map(|&e| round_half_up(yongshin.favorability(e) * 5.0)).sum::<i32>();
    let score = clamp_score(raw);
    let outlook = Outlook::grade(score, WIDE_CUTS);

    let balance = &result.five_elements;
    let season = calendar_season(month);
    HealthFortune {
        month,
        season,
        seasonal_advice: seasonal_advice(balance.dominant, season),
        tips: tips(balance.dominant, balance.lacking),
        summary: summary(outlook, &weak_organs, &excess_organs),
        advice: advice(balance.dominant, balance.lacking),
        organs,
        weak_organs,
        excess_organs,
        score,
        outlook,
    }
}

const fn season_name(season: Element) -> &'static str {
    match season {
        Element::Wood => "봄",
        Element::Fire => "여름",
        Element::Earth => "환절기",
        Element::Metal => "가을",
        Element::Water => "겨울",
    }
}

fn seasonal_advice(dominant: Element, season: Element) -> String {
    if dominant == season {
        return "현재 계절과 주도 오행이 같아 기운이 과잉될 수 있습니다. 반대 오행의 활동으로 균형을 잡으세요."
            .to_string();
    }
    format!(
        "현재 {} 계절입니다. {}의 기운이 강한 당신은 {} 관리에 특히 신경 쓰세요.",
        season_name(season),
        dominant.name(),
        organs_of(dominant)
    )
}

fn tips(dominant: Element, lacking: Element) -> Vec<String> {
    let care: [&str; 2] = match lacking {
        Element::Wood => ["간 건강을 위해 과음을 피하세요", "눈 건강에 신경 쓰세요 (블루라이트 차단)"],
        Element::Fire => ["심혈관 건강을 위해 규칙적인 유산소 운동을 하세요", "스트레스 관리가 중요합니다"],
        Element::Earth => ["위장 건강을 위해 규칙적인 식사를 하세요", "과식과 야식을 피하세요"],
        Element::Metal => ["호흡기 건강을 위해 깊은 호흡 운동을 하세요", "건조한 환경에서는 수분 보충을 하세요"],
        Element::Water => ["신장 건강을 위해 충분한 수분 섭취를 하세요", "하체 운동으로 순환을 도우세요"],
    };
    let mut out: Vec<String> = care.iter().map(|s| s.to_string()).collect();
    if dominant != lacking {
        out.push(
            match dominant {
                Element::Wood => "과도한 활동보다는 적절한 휴식이 필요합니다",
                Element::Fire => "과열된 몸을 시원하게 관리하세요",
                Element::Earth => "소화기관에 무리가 가지 않도록 주의하세요",
                Element::Metal => "건조함을 주의하고 보습에 신경 쓰세요",
                Element::Water => "체온 관리에 주의하고 따뜻하게 유지하세요",
            }
            .to_string(),
        );
    }
    out.push("규칙적인 수면 습관을 유지하세요".to_string());
    out
}

fn summary(outlook: Outlook, weak: &[String], excess: &[String]) -> String {
    match outlook {
        Outlook::Excellent => {
            "오행이 균형 잡혀 있어 전반적인 건강운이 좋습니다. 현재 생활 습관을 잘 유지하세요.".to_string()
        }
        Outlook::Good if !weak.is_empty() => format!(
            "전반적으로 양호하지만, {} 부위에 특히 신경 쓸 필요가 있습니다.",
            weak.join(", ")
        ),
        Outlook::Good => "건강운이 양호합니다. 규칙적인 생활이 건강을 지키는 열쇠입니다.".to_string(),
        Outlook::Fair => {
            let concerns: Vec<&str> = weak.iter().chain(excess).map(String::as_str).collect();
            format!(
                "{} 관련 건강 관리가 필요합니다. 예방적 차원에서 정기 검진을 추천합니다.",
                concerns.join(", ")
            )
        }
        Outlook::Poor => {
            "오행 불균형이 있어 건강 관리에 적극적으로 나설 필요가 있습니다. 전문가 상담도 고려해 보세요."
                .to_string()
        }
    }
}

fn advice(dominant: Element, lacking: Element) -> String {
    let food = match lacking {
        Element::Wood => "신맛 음식(레몬, 식초)과 녹색 채소",
        Element::Fire => "쓴맛 음식(커피, 녹차)과 붉은색 식품",
        Element::Earth => "단맛 음식(고구마, 호박)과 노란색 식품",
        Element::Metal => "매운 맛 음식(생강, 마늘)과 흰색 식품",
        Element::Water => "짠맛 음식(해산물, 해조류)과 검은색 식품",
    };
    format!(
        "부족한 {}의 기운을 보충하기 위해 {food}을 섭취하면 좋습니다. 과다한 {}의 기운은 절제하면서 균형을 잡아보세요.",
        lacking.name(),
        dominant.name()
    )
}
