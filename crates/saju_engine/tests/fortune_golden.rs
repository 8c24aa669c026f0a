//! Topic fortunes over fixed readings.

use saju_engine::fortune::{
    MonthKeyword, OrganStatus, PillarPart, StarCount, StarPosition, week_start,
};
use saju_engine::{
    BirthInput, ChartOptions, Element, Gender, HourSlot, Outlook, PillarPosition, SajuResult,
    SolarDate, TenGod, career_fortune, finance_fortune, health_fortune, love_fortune,
    marriage_fortune, weekly_fortune, yearly_fortune,
};

fn chart_1990(gender: Gender) -> SajuResult {
    let input = BirthInput::solar(1990, 5, 15, HourSlot::O, gender);
    saju_engine::calculate_saju(&input, &ChartOptions::with_age(34)).unwrap()
}

fn chart_1984() -> SajuResult {
    let input = BirthInput::solar(1984, 2, 4, HourSlot::Ja, Gender::Male);
    saju_engine::calculate_saju(&input, &ChartOptions::default()).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Weekly
// ---------------------------------------------------------------------------

#[test]
fn weekly_new_year_2024() {
    let r = chart_1990(Gender::Male);
    let w = weekly_fortune(r.chart.day, date(2024, 1, 4));
    assert_eq!(w.start, date(2024, 1, 1));
    let scores: Vec<u32> = w.days.iter().map(|d| d.score).collect();
    assert_eq!(scores, [66, 67, 33, 54, 80, 61, 72]);
    assert_eq!(w.days[2].pillar.to_string(), "丙戌");
    assert_eq!(w.best_day, date(2024, 1, 5));
    assert_eq!(w.worst_day, date(2024, 1, 3));
    assert_eq!(w.average, 62);
    assert_eq!(w.outlook, Outlook::Good);
    assert!(w.advice.starts_with("정돈된 환경"));
}

#[test]
fn week_start_on_sunday_goes_back() {
    assert_eq!(week_start(date(2023, 12, 31)), date(2023, 12, 25));
}

// ---------------------------------------------------------------------------
// Yearly
// ---------------------------------------------------------------------------

#[test]
fn yearly_2024() {
    let r = chart_1990(Gender::Male);
    let y = yearly_fortune(&r, 2024);
    assert_eq!(y.pillar.to_string(), "甲辰");
    assert_eq!(y.ten_god, TenGod::WealthIndirect);
    assert_eq!(y.theme, "투자와 기회의 해");
    assert_eq!(y.score, 50);
    assert_eq!(y.outlook, Outlook::Fair);
    assert_eq!(y.current_luck.map(|p| p.to_string()).as_deref(), Some("甲申"));

    let months: Vec<String> = y.months.iter().map(|m| m.pillar.to_string()).collect();
    assert_eq!(months[0], "丙寅");
    assert_eq!(months[11], "丁丑");
    let scores: Vec<u32> = y.months.iter().map(|m| m.score).collect();
    assert_eq!(scores, [54, 55, 66, 77, 73, 64, 85, 86, 57, 63, 54, 35]);
    assert_eq!(y.months[6].keyword, MonthKeyword::GreatFortune);
    assert_eq!(y.months[11].keyword, MonthKeyword::MinorTrouble);
}

// ---------------------------------------------------------------------------
// Career
// ---------------------------------------------------------------------------

#[test]
fn career_1990_male() {
    let c = career_fortune(&chart_1990(Gender::Male));
    assert_eq!(
        c.stars,
        [
            StarCount { god: TenGod::AuthorityDirect, count: 1 },
            StarCount { god: TenGod::AuthorityIndirect, count: 2 },
            StarCount { god: TenGod::OutputSame, count: 2 },
        ]
    );
    assert_eq!(c.promotion_ages, [12, 52, 62]);
    assert_eq!(c.score, 84);
    assert_eq!(c.outlook, Outlook::Excellent);
    assert!(c.summary.starts_with("관성이"));
    assert_eq!(c.jobs.len(), 7);
    assert_eq!(c.jobs[0], "금융/보험");
    assert_eq!(c.jobs[5], "관리직/공무원");
}

#[test]
fn career_1990_female_reverse_periods() {
    let c = career_fortune(&chart_1990(Gender::Female));
    assert_eq!(c.promotion_ages, [38, 48]);
    assert_eq!(c.score, 64);
}

#[test]
fn career_without_current_period() {
    let c = career_fortune(&chart_1984());
    assert_eq!(
        c.stars,
        [
            StarCount { god: TenGod::AuthorityIndirect, count: 2 },
            StarCount { god: TenGod::ResourceIndirect, count: 1 },
        ]
    );
    assert_eq!(c.promotion_ages, [6, 76]);
    assert_eq!(c.score, 66);
}

// ---------------------------------------------------------------------------
// Finance
// ---------------------------------------------------------------------------

#[test]
fn finance_1990() {
    let m = finance_fortune(&chart_1990(Gender::Male));
    assert_eq!((m.regular_wealth, m.windfall), (0, 0));
    assert_eq!(m.score, 43);
    assert_eq!(m.outlook, Outlook::Fair);
    assert_eq!(m.investment_ages, [32, 42]);
    assert!(m.cautions[0].starts_with("재성이 부족"));

    let f = finance_fortune(&chart_1990(Gender::Female));
    assert_eq!(f.score, 43);
    assert_eq!(f.investment_ages, [18, 28, 58, 68]);
}

#[test]
fn finance_1984_windfall() {
    let m = finance_fortune(&chart_1984());
    assert_eq!((m.regular_wealth, m.windfall), (0, 4));
    assert_eq!(m.score, 76);
    assert_eq!(m.investment_ages, [56, 66]);
    assert_eq!(m.cautions[0], "안정적 수입원 확보가 우선입니다");
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[test]
fn health_1990() {
    let h = health_fortune(&chart_1990(Gender::Male), 1);
    let counts: Vec<u32> = h.organs.iter().map(|o| o.count).collect();
    assert_eq!(counts, [0, 3, 0, 3, 2]);
    let statuses: Vec<OrganStatus> = h.organs.iter().map(|o| o.status).collect();
    assert_eq!(
        statuses,
        [
            OrganStatus::Weak,
            OrganStatus::Strong,
            OrganStatus::Weak,
            OrganStatus::Strong,
            OrganStatus::Strong,
        ]
    );
    assert_eq!(h.weak_organs, ["간/담낭", "비장/위장"]);
    assert!(h.excess_organs.is_empty());
    assert_eq!(h.score, 66);
    assert_eq!(h.outlook, Outlook::Good);
    assert_eq!(h.season, Element::Water);
    assert!(h.summary.contains("간/담낭, 비장/위장"));
}

#[test]
fn health_1984_excess_water() {
    let h = health_fortune(&chart_1984(), 6);
    let counts: Vec<u32> = h.organs.iter().map(|o| o.count).collect();
    assert_eq!(counts, [2, 1, 1, 0, 4]);
    assert_eq!(h.excess_organs, ["신장/방광"]);
    assert_eq!(h.score, 68);
    assert_eq!(h.season, Element::Fire);
}

// ---------------------------------------------------------------------------
// Love
// ---------------------------------------------------------------------------

#[test]
fn love_by_gender() {
    let m = love_fortune(&chart_1990(Gender::Male), Gender::Male);
    assert!(m.stars.is_empty());
    assert_eq!(m.star_count, 0);
    assert_eq!(m.score, 60);

    let f = love_fortune(&chart_1990(Gender::Female), Gender::Female);
    assert_eq!(f.stars, [TenGod::AuthorityIndirect, TenGod::AuthorityDirect]);
    assert_eq!(f.star_count, 3);
    assert_eq!(f.score, 55);
    assert_eq!(f.outlook, Outlook::Good);
}

#[test]
fn love_1984() {
    let l = love_fortune(&chart_1984(), Gender::Male);
    assert_eq!(l.stars, [TenGod::WealthIndirect]);
    assert_eq!(l.star_count, 4);
    assert_eq!(l.score, 65);
}

// ---------------------------------------------------------------------------
// Marriage
// ---------------------------------------------------------------------------

#[test]
fn marriage_1990_male() {
    let m = marriage_fortune(&chart_1990(Gender::Male), Gender::Male);
    assert_eq!(m.spouse_star, TenGod::WealthDirect);
    assert!(m.positions.is_empty());
    assert_eq!(
        m.peach_blossom,
        [PillarPosition::Day, PillarPosition::Year, PillarPosition::Hour]
    );
    assert_eq!(m.best_ages, [42]);
    assert_eq!(m.spouse_element, Element::Wood);
    assert_eq!(m.score, 60);
    assert!(m.advice.contains("도화살"));
}

#[test]
fn marriage_1990_female() {
    let m = marriage_fortune(&chart_1990(Gender::Female), Gender::Female);
    assert_eq!(m.spouse_star, TenGod::AuthorityDirect);
    assert_eq!(
        m.positions,
        [StarPosition { position: PillarPosition::Month, part: PillarPart::Branch }]
    );
    assert_eq!(m.best_ages, [38]);
    assert_eq!(m.spouse_element, Element::Fire);
    assert_eq!(m.score, 80);
    assert_eq!(m.outlook, Outlook::Excellent);
}

#[test]
fn marriage_1984() {
    let m = marriage_fortune(&chart_1984(), Gender::Male);
    assert_eq!(m.best_ages, [66]);
    assert_eq!(m.score, 60);
}
