//! Romance outlook (애정운). Men read the wealth stars, women the authority
//! stars.

use serde::{Deserialize, Serialize};

use saju_base::{Element, Gender, TenGod, TenGodGroup};

use super::{NARROW_CUTS, Outlook, chart_gods, current_period_score};
use crate::result::SajuResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveFortune {
    /// Distinct love stars in chart order.
    pub stars: Vec<TenGod>,
    /// Love stars over the eight chart positions.
    pub star_count: u32,
    pub score: u32,
    pub outlook: Outlook,
    pub style: String,
    pub influence: String,
    pub strengths: Vec<String>,
    pub cautions: Vec<String>,
    pub summary: String,
    pub advice: String,
}

/// Star group read for romance.
pub const fn love_group(gender: Gender) -> TenGodGroup {
    match gender {
        Gender::Male => TenGodGroup::Wealth,
        Gender::Female => TenGodGroup::Authority,
    }
}

pub fn love_fortune(result: &SajuResult, gender: Gender) -> LoveFortune {
    let group = love_group(gender);
    let mut stars = Vec::new();
    let mut star_count = 0;
    for (_, _, god) in chart_gods(result) {
        if god.group() == group {
            star_count += 1;
            if !stars.contains(&god) {
                stars.push(god);
            }
        }
    }

    let bonus = match star_count {
        0 => 0,
        1 => 8,
        _ => 15,
    };
    let score = (current_period_score(result) + bonus).min(100);
    let outlook = Outlook::grade(score, NARROW_CUTS);
    let dominant = result.five_elements.dominant;

    LoveFortune {
        stars,
        star_count,
        score,
        outlook,
        style: style(dominant).to_string(),
        influence: influence(dominant).to_string(),
        strengths: strengths(dominant, star_count),
        cautions: cautions(dominant, star_count),
        summary: summary(outlook).to_string(),
        advice: advice(dominant).to_string(),
    }
}

const fn style(dominant: Element) -> &'static str {
    match dominant {
        Element::Fire => "열정적이고 적극적인 연애 스타일입니다. 감정 표현이 풍부하고 로맨틱한 분위기를 즐깁니다.",
        Element::Water => "감성적이고 깊은 연애를 추구합니다. 상대방의 마음을 잘 읽고 배려심이 깊습니다.",
        Element::Wood => "성장하는 사랑을 추구합니다. 상대방과 함께 발전해 나가는 관계를 좋아합니다.",
        Element::Metal => "진지하고 일관된 연애를 합니다. 한번 마음을 주면 끝까지 책임지는 스타일입니다.",
        Element::Earth => "안정적이고 헌신적인 연애를 합니다. 편안하고 따뜻한 관계를 만들어 갑니다.",
    }
}

const fn influence(dominant: Element) -> &'static str {
    match dominant {
        Element::Wood => "목의 기운이 강해 성장하는 관계를 지향합니다. 상대방의 발전을 응원하고 함께 성장하려는 모습이 매력적입니다.",
        Element::Fire => "화의 기운이 강해 열정적이고 표현력이 풍부합니다. 상대방에게 따뜻한 감정을 잘 전달합니다.",
        Element::Earth => "토의 기운이 강해 안정적인 관계를 만들어 갑니다. 신뢰할 수 있는 파트너로서 매력이 있습니다.",
        Element::Metal => "금의 기운이 강해 진지하고 깊은 관계를 추구합니다. 약속을 잘 지키고 일관성 있는 모습이 장점입니다.",
        Element::Water => "수의 기운이 강해 감성적이고 직관적인 연애를 합니다. 상대의 감정을 잘 읽어 공감 능력이 뛰어납니다.",
    }
}

fn strengths(dominant: Element, star_count: u32) -> Vec<String> {
    let base: [&str; 3] = match dominant {
        Element::Wood => ["성장 지향적 관계 형성", "인내심과 배려", "미래를 함께 계획하는 능력"],
        Element::Fire => ["풍부한 감정 표현", "적극적인 애정 표현", "함께하는 시간을 즐기는 능력"],
        Element::Earth => ["안정적인 관계 유지", "헌신과 충성", "가정적인 면모"],
        Element::Metal => ["명확한 의사소통", "약속과 신뢰", "일관된 애정 표현"],
        Element::Water => ["감성적 교류", "깊은 공감 능력", "상대를 이해하는 직관"],
    };
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if star_count >= 2 {
        out.push("이성에 대한 자연스러운 매력".to_string());
    }
    out
}

fn cautions(dominant: Element, star_count: u32) -> Vec<String> {
    let base: [&str; 2] = match dominant {
        Element::Wood => ["지나친 이상주의", "상대에 대한 기대치가 높을 수 있음"],
        Element::Fire => ["감정 기복이 클 수 있음", "질투심에 주의"],
        Element::Earth => ["변화에 대한 두려움", "소유욕이 강할 수 있음"],
        Element::Metal => ["감정 표현이 부족할 수 있음", "완벽주의적 성향"],
        Element::Water => ["우유부단할 수 있음", "감정에 너무 빠질 수 있음"],
    };
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if star_count >= 3 {
        out.push("이성 관계가 복잡해질 수 있으니 신중한 선택 필요".to_string());
    }
    if star_count == 0 {
        out.push("연애에 소극적일 수 있으니 적극적인 자세 필요".to_string());
    }
    out
}

const fn summary(outlook: Outlook) -> &'static str {
    match outlook {
        Outlook::Excellent => "현재 애정운이 매우 좋은 시기입니다. 새로운 만남이나 기존 관계의 발전이 기대됩니다.",
        Outlook::Good => "애정운이 안정적인 시기입니다. 자연스러운 만남을 통해 좋은 인연을 만날 수 있습니다.",
        Outlook::Fair => "애정운은 보통이지만, 자기 자신을 가꾸는 시간이 결국 좋은 인연을 부릅니다.",
        Outlook::Poor => "현재는 연애보다 자기 발전에 집중하면 좋겠습니다. 때가 되면 좋은 인연이 찾아올 것입니다.",
    }
}

const fn advice(dominant: Element) -> &'static str {
    match dominant {
        Element::Wood => "상대방의 속도에 맞추어 보세요. 조급하지 않은 마음이 더 깊은 사랑을 만듭니다.",
        Element::Fire => "가끔은 한 발짝 물러서서 상대방의 이야기를 들어보세요. 경청이 사랑의 시작입니다.",
        Element::Earth => "새로운 경험을 함께 하면 관계가 더욱 풍요로워집니다. 변화를 두려워하지 마세요.",
        Element::Metal => "마음속 감정을 솔직하게 표현해 보세요. 당신의 진심이 상대에게 큰 감동을 줄 것입니다.",
        Element::Water => "감정에 휩쓸리지 않고 이성적인 판단도 함께 하세요. 균형 잡힌 관계가 오래 갑니다.",
    }
}
