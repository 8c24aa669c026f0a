//! Career outlook (직업운) from the authority, output and resource stars.

use serde::{Deserialize, Serialize};

use saju_base::{Element, TenGod, TenGodGroup};

use super::{NARROW_CUTS, Outlook, chart_gods, current_period_score, period_ages};
use crate::result::SajuResult;

/// Career-related ten gods in report order.
const CAREER_STARS: [TenGod; 6] = [
    TenGod::AuthorityDirect,
    TenGod::AuthorityIndirect,
    TenGod::OutputSame,
    TenGod::OutputRival,
    TenGod::ResourceDirect,
    TenGod::ResourceIndirect,
];

const MAX_JOBS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarCount {
    pub god: TenGod,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerFortune {
    /// Career stars present in the chart, in report order.
    pub stars: Vec<StarCount>,
    /// Midpoint ages of luck periods carrying an authority star.
    pub promotion_ages: Vec<u32>,
    pub score: u32,
    pub outlook: Outlook,
    pub jobs: Vec<String>,
    pub style: String,
    pub strengths: Vec<String>,
    pub summary: String,
    pub advice: String,
}

impl CareerFortune {
    fn has(&self, god: TenGod) -> bool {
        self.stars.iter().any(|s| s.god == god)
    }

    fn has_group(&self, group: TenGodGroup) -> bool {
        self.stars.iter().any(|s| s.god.group() == group)
    }
}

pub fn career_fortune(result: &SajuResult) -> CareerFortune {
    let gods: Vec<TenGod> = chart_gods(result).map(|(_, _, g)| g).collect();
    let count = |god: TenGod| gods.iter().filter(|g| **g == god).count() as u32;

    let stars: Vec<StarCount> = CAREER_STARS
        .iter()
        .map(|&god| StarCount { god, count: count(god) })
        .filter(|s| s.count > 0)
        .collect();
    let authority = count(TenGod::AuthorityDirect) + count(TenGod::AuthorityIndirect);
    let score = (current_period_score(result) + authority * 8).min(100);
    let dominant = result.five_elements.dominant;

    let mut fortune = CareerFortune {
        stars,
        promotion_ages: period_ages(result, |g| g.group() == TenGodGroup::Authority),
        score,
        outlook: Outlook::grade(score, NARROW_CUTS),
        jobs: Vec::new(),
        style: style(dominant).to_string(),
        strengths: Vec::new(),
        summary: String::new(),
        advice: advice(dominant).to_string(),
    };
    fortune.jobs = jobs(&fortune, dominant);
    fortune.strengths = strengths(&fortune, dominant);
    fortune.summary = summary(&fortune).to_string();
    fortune
}

fn jobs(fortune: &CareerFortune, dominant: Element) -> Vec<String> {
    let base: [&str; 5] = match dominant {
        Element::Wood => ["교육/강의", "의료/건강", "출판/언론", "농업/원예", "환경/복지"],
        Element::Fire => ["예술/디자인", "엔터테인먼트", "IT/미디어", "마케팅/홍보", "요리/외식"],
        Element::Earth => ["부동산", "건설/건축", "공무원", "농업/식품", "중개/유통"],
        Element::Metal => ["금융/보험", "법률/회계", "제조/기술", "IT/엔지니어링", "군/경찰"],
        Element::Water => ["연구/학문", "무역/물류", "서비스업", "여행/관광", "수산/해양"],
    };
    let mut jobs: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if fortune.has_group(TenGodGroup::Authority) {
        jobs.extend(["관리직/공무원".to_string(), "조직 리더".to_string()]);
    }
    if fortune.has_group(TenGodGroup::Output) {
        jobs.extend(["프리랜서/전문직".to_string(), "크리에이터".to_string()]);
    }
    jobs.truncate(MAX_JOBS);
    jobs
}

const fn style(dominant: Element) -> &'static str {
    match dominant {
        Element::Wood => "성장과 발전을 추구하는 스타일입니다. 꾸준한 학습과 자기계발을 통해 실력을 키워가는 타입입니다.",
        Element::Fire => "열정적이고 창의적인 업무 스타일입니다. 새로운 프로젝트에 불을 붙이고 팀에 활력을 불어넣습니다.",
        Element::Earth => "안정적이고 신뢰할 수 있는 업무 스타일입니다. 묵묵히 책임을 다하며 팀의 든든한 기둥 역할을 합니다.",
        Element::Metal => "체계적이고 효율적인 업무 스타일입니다. 명확한 목표 설정과 계획적인 실행이 강점입니다.",
        Element::Water => "유연하고 창의적인 업무 스타일입니다. 변화에 잘 적응하며 새로운 아이디어를 제시합니다.",
    }
}

fn strengths(fortune: &CareerFortune, dominant: Element) -> Vec<String> {
    let base: [&str; 3] = match dominant {
        Element::Wood => ["성장 지향적 마인드", "교육/코칭 능력", "인내심과 꾸준함"],
        Element::Fire => ["창의력과 표현력", "리더십과 추진력", "대인관계 능력"],
        Element::Earth => ["안정적인 업무 수행", "신뢰와 책임감", "조직 관리 능력"],
        Element::Metal => ["분석력과 판단력", "효율적인 업무 처리", "원칙과 정확성"],
        Element::Water => ["유연한 사고력", "문제 해결 능력", "학습 능력"],
    };
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    for (god, text) in [
        (TenGod::AuthorityDirect, "조직 내 승진에 유리"),
        (TenGod::AuthorityIndirect, "리더십과 결단력"),
        (TenGod::OutputSame, "전문 기술력"),
    ] {
        if fortune.has(god) {
            out.push(text.to_string());
        }
    }
    out
}

fn summary(fortune: &CareerFortune) -> &'static str {
    match fortune.outlook {
        Outlook::Excellent if fortune.has_group(TenGodGroup::Authority) => {
            "관성이 잘 갖추어져 있어 직장운이 매우 좋습니다. 승진과 인정을 받을 기회가 많습니다."
        }
        Outlook::Excellent => "직장운이 좋은 시기입니다. 자신의 역량을 충분히 발휘할 수 있습니다.",
        Outlook::Good => "직장운이 안정적입니다. 꾸준한 노력이 성과로 이어지는 시기입니다.",
        Outlook::Fair => "직장운은 보통입니다. 현재 위치에서 실력을 쌓는 데 집중하면 좋겠습니다.",
        Outlook::Poor => "직장운이 다소 약한 시기입니다. 이직보다는 현재 위치에서 역량을 키우는 것을 추천합니다.",
    }
}

const fn advice(dominant: Element) -> &'static str {
    match dominant {
        Element::Wood => "지속적인 자기계발이 경쟁력입니다. 새로운 자격증이나 교육에 투자하세요.",
        Element::Fire => "네트워킹을 적극 활용하세요. 사람들과의 관계에서 기회가 찾아옵니다.",
        Element::Earth => "신뢰를 바탕으로 한 안정적인 커리어를 쌓아가세요. 충성심이 인정받을 것입니다.",
        Element::Metal => "전문성을 깊이 있게 파세요. 해당 분야의 전문가로 인정받으면 기회가 열립니다.",
        Element::Water => "변화에 유연하게 대응하세요. 새로운 트렌드를 빠르게 파악하는 것이 강점입니다.",
    }
}
