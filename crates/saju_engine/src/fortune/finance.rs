//! Wealth outlook (재물운).

use serde::{Deserialize, Serialize};

use saju_base::{Element, TenGod, TenGodGroup};

use super::{Outlook, WIDE_CUTS, chart_gods, clamp_score, period_ages, round_half_up};
use crate::result::SajuResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceFortune {
    /// 정재 count over the eight chart positions.
    pub regular_wealth: u32,
    /// 편재 count over the eight chart positions.
    pub windfall: u32,
    pub score: u32,
    pub outlook: Outlook,
    pub style: String,
    /// Midpoint ages of luck periods carrying a wealth star.
    pub investment_ages: Vec<u32>,
    pub recommendations: Vec<String>,
    pub cautions: Vec<String>,
    pub summary: String,
    pub advice: String,
}

pub fn finance_fortune(result: &SajuResult) -> FinanceFortune {
    let gods: Vec<TenGod> = chart_gods(result).map(|(_, _, g)| g).collect();
    let count = |god: TenGod| gods.iter().filter(|g| **g == god).count() as u32;
    let regular = count(TenGod::WealthDirect);
    let windfall = count(TenGod::WealthIndirect);

    let mut raw = 50 + regular as i32 * 10 + windfall as i32 * 8;
    // 식신 feeds the wealth stars.
    if gods.contains(&TenGod::OutputSame) {
        raw += 5;
    }
    let wealth_element = result.chart.day_master().element().overcomes();
    raw += round_half_up(result.yongshin().favorability(wealth_element) * 12.0);
    let score = clamp_score(raw);
    let outlook = Outlook::grade(score, WIDE_CUTS);
    let dominant = result.five_elements.dominant;

    FinanceFortune {
        regular_wealth: regular,
        windfall,
        score,
        outlook,
        style: style(dominant).to_string(),
        investment_ages: period_ages(result, |g| g.group() == TenGodGroup::Wealth),
        recommendations: recommendations(dominant, regular, windfall),
        cautions: cautions(dominant, regular, windfall),
        summary: summary(outlook).to_string(),
        advice: advice(dominant).to_string(),
    }
}

const fn style(dominant: Element) -> &'static str {
    match dominant {
        Element::Wood => "성장형 투자자: 장기적인 시각으로 투자하며, 교육이나 자기계발에 돈을 아끼지 않습니다.",
        Element::Fire => "활동형 투자자: 트렌드에 민감하고 빠른 의사결정을 합니다. 단기 투자에 재능이 있습니다.",
        Element::Earth => "축적형 관리자: 꾸준히 모으는 것을 좋아하며, 부동산 등 실물 자산에 관심이 많습니다.",
        Element::Metal => "절약형 관리자: 계획적인 재무 관리를 하며, 낭비를 싫어합니다. 금융 상품에 밝습니다.",
        Element::Water => "유동형 투자자: 유연한 자산 운용을 하며, 다양한 분야에 분산 투자하는 경향이 있습니다.",
    }
}

fn recommendations(dominant: Element, regular: u32, windfall: u32) -> Vec<String> {
    let base: [&str; 3] = match dominant {
        Element::Wood => ["교육 관련 투자", "성장주 장기 투자", "친환경/건강 관련 사업"],
        Element::Fire => ["IT/미디어 관련 투자", "단기 트레이딩", "문화/예술 관련 사업"],
        Element::Earth => ["부동산 투자", "적금/예금", "식품/농업 관련 사업"],
        Element::Metal => ["금융 상품 투자", "채권/안전자산", "제조/기술 관련 사업"],
        Element::Water => ["분산 투자", "해외 투자", "유통/서비스 관련 사업"],
    };
    let mut out: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if regular >= 2 {
        out.push("안정적인 월급 관리를 기반으로 한 투자".to_string());
    }
    if windfall >= 2 {
        out.push("투기적 기회에 대한 감각 활용 (단, 리스크 관리 필수)".to_string());
    }
    out
}

fn cautions(dominant: Element, regular: u32, windfall: u32) -> Vec<String> {
    let mut out = Vec::new();
    if windfall >= 2 && regular == 0 {
        out.push("안정적 수입원 확보가 우선입니다".to_string());
    }
    if regular == 0 && windfall == 0 {
        out.push("재성이 부족하므로 재테크보다 본업에 집중하세요".to_string());
    }
    out.push(
        match dominant {
            Element::Fire => "충동적 소비에 주의하세요",
            Element::Water => "지나친 분산투자는 피하세요",
            Element::Wood => "낙관적 전망만 믿고 투자하지 마세요",
            Element::Metal => "지나친 절약이 기회를 놓칠 수 있습니다",
            Element::Earth => "유동성을 확보해두는 것도 중요합니다",
        }
        .to_string(),
    );
    out
}

const fn summary(outlook: Outlook) -> &'static str {
    match outlook {
        Outlook::Excellent => "사주에 재성이 잘 갖추어져 재물운이 매우 좋습니다. 재테크 감각이 뛰어나고 돈을 모으는 능력이 있습니다.",
        Outlook::Good => "재물운이 양호합니다. 꾸준한 노력으로 안정적인 재산을 형성할 수 있습니다.",
        Outlook::Fair => "재물운은 보통입니다. 본업에 집중하면서 차근차근 재산을 늘려가는 것이 좋습니다.",
        Outlook::Poor => "재성이 다소 부족하지만, 대운의 흐름에 따라 재물운이 좋아지는 시기가 있습니다. 그때를 잘 활용하세요.",
    }
}

const fn advice(dominant: Element) -> &'static str {
    match dominant {
        Element::Wood => "장기적인 시각으로 투자하세요. 급하게 서두르면 손해를 볼 수 있습니다. 자기계발에 투자한 것이 결국 큰 재산이 됩니다.",
        Element::Fire => "열정적인 투자도 좋지만, 냉정한 분석도 함께 하세요. 감정에 휘둘리지 않는 투자 원칙을 세우세요.",
        Element::Earth => "부동산이나 실물 자산에 강합니다. 안정적인 자산을 기반으로 차근차근 부를 쌓아가세요.",
        Element::Metal => "계획적인 재무 관리는 장점이지만, 가끔은 과감한 투자도 필요합니다. 기회를 놓치지 마세요.",
        Element::Water => "유연한 투자 전략이 장점입니다. 다만 핵심 자산은 안전하게 지키면서 여유 자금으로 투자하세요.",
    }
}
