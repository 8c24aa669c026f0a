//! Marriage outlook (결혼운) from the spouse star and 도화살 branches.

use serde::{Deserialize, Serialize};

use saju_base::{Branch, Element, Gender, PillarPosition, TenGod};

use super::{Outlook, PillarPart, WIDE_CUTS, chart_gods, period_ages};
use crate::result::SajuResult;

/// 子 午 卯 酉.
const PEACH_BLOSSOM: [Branch; 4] = [Branch::Ja, Branch::O, Branch::Myo, Branch::Yu];

/// Order the peach-blossom branches are reported in; the day branch leads.
const PEACH_ORDER: [PillarPosition; 4] =
    [PillarPosition::Day, PillarPosition::Year, PillarPosition::Month, PillarPosition::Hour];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarPosition {
    pub position: PillarPosition,
    pub part: PillarPart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarriageFortune {
    pub spouse_star: TenGod,
    pub star_count: u32,
    pub positions: Vec<StarPosition>,
    /// Positions whose branch is a peach-blossom branch.
    pub peach_blossom: Vec<PillarPosition>,
    pub spouse_element: Element,
    pub spouse_traits: Vec<String>,
    /// Midpoint ages of luck periods carrying the spouse star.
    pub best_ages: Vec<u32>,
    pub score: u32,
    pub outlook: Outlook,
    pub summary: String,
    pub advice: String,
}

/// 정재 for men, 정관 for women.
pub const fn spouse_star(gender: Gender) -> TenGod {
    match gender {
        Gender::Male => TenGod::WealthDirect,
        Gender::Female => TenGod::AuthorityDirect,
    }
}

pub fn marriage_fortune(result: &SajuResult, gender: Gender) -> MarriageFortune {
    let star = spouse_star(gender);
    let positions: Vec<StarPosition> = chart_gods(result)
        .filter(|(_, _, god)| *god == star)
        .map(|(position, part, _)| StarPosition { position, part })
        .collect();
    let star_count = positions.len() as u32;
    let peach_blossom: Vec<PillarPosition> = PEACH_ORDER
        .into_iter()
        .filter(|&p| PEACH_BLOSSOM.contains(&result.chart.pillar(p).branch()))
        .collect();
    let best_ages = period_ages(result, |g| g == star);

    let dm_element = result.chart.day_master().element();
    let spouse_element = match gender {
        Gender::Male => dm_element.overcomes(),
        Gender::Female => dm_element.overcome_by(),
    };

    let mut score: u32 = 50;
    score += match star_count {
        0 => 0,
        1 => 20,
        _ => 15,
    };
    if positions.iter().any(|p| p.position == PillarPosition::Day) {
        score += 10;
    }
    if !peach_blossom.is_empty() {
        score += 5;
    }
    if !best_ages.is_empty() {
        score += 5;
    }
    let score = score.min(100);
    let outlook = Outlook::grade(score, WIDE_CUTS);

    MarriageFortune {
        spouse_star: star,
        star_count,
        spouse_traits: traits(spouse_element).iter().map(|s| s.to_string()).collect(),
        summary: summary(outlook, star),
        advice: advice(spouse_element, !peach_blossom.is_empty()),
        positions,
        peach_blossom,
        spouse_element,
        best_ages,
        score,
        outlook,
    }
}

const fn traits(element: Element) -> [&'static str; 4] {
    match element {
        Element::Wood => ["성장 지향적", "인내심 있는", "교육적", "부드러운 리더십"],
        Element::Fire => ["열정적", "사교적", "표현력 풍부", "에너지 넘치는"],
        Element::Earth => ["안정적", "신뢰할 수 있는", "포용력 있는", "실용적"],
        Element::Metal => ["결단력 있는", "원칙적", "깔끔한", "절약 정신"],
        Element::Water => ["지적", "감성적", "유연한", "배려심 깊은"],
    }
}

fn summary(outlook: Outlook, star: TenGod) -> String {
    let star = star.name();
    match outlook {
        Outlook::Excellent => format!(
            "사주에 {star}(이/가) 적절히 자리잡고 있어 결혼운이 매우 좋습니다. 좋은 배우자를 만날 가능성이 높습니다."
        ),
        Outlook::Good => format!("결혼운이 양호합니다. {star}의 기운이 작용하여 안정적인 가정을 꾸릴 수 있습니다."),
        Outlook::Fair => {
            "결혼운은 보통입니다. 때를 기다리며 자기 발전에 집중하면 좋은 인연이 찾아올 것입니다.".to_string()
        }
        Outlook::Poor => {
            "결혼운이 다소 약하지만, 대운의 흐름에 따라 좋은 시기가 반드시 옵니다. 조급해하지 마세요.".to_string()
        }
    }
}

fn advice(spouse_element: Element, peach_blossom: bool) -> String {
    let base = match spouse_element {
        Element::Wood => "교육이나 성장 관련 분야에서 좋은 배우자를 만날 수 있습니다. 봄철 만남에 주목하세요.",
        Element::Fire => "사교 모임이나 문화 활동에서 인연을 만날 수 있습니다. 열정적인 만남이 기다립니다.",
        Element::Earth => "직장이나 일상적인 환경에서 자연스럽게 인연이 찾아옵니다. 신뢰를 쌓는 것이 중요합니다.",
        Element::Metal => "격식 있는 자리나 소개팅에서 좋은 인연이 있을 수 있습니다. 첫인상을 중요하게 생각하세요.",
        Element::Water => "학업이나 지적 활동에서 마음이 맞는 사람을 만날 수 있습니다. 대화가 이어지는 관계에 주목하세요.",
    };
    if peach_blossom {
        format!("{base} 도화살의 영향으로 이성에게 인기가 있으니 신중한 선택이 중요합니다.")
    } else {
        base.to_string()
    }
}
