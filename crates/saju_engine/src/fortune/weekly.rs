//! Week of daily scores (주간 운세), Monday through Sunday.

use serde::{Deserialize, Serialize};

use saju_base::{Element, Pillar};
use saju_calendar::SolarDate;

use super::{NARROW_CUTS, Outlook};
use crate::daily::{DailyFortune, daily_fortune};

/// Weekday labels, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyFortune {
    /// Monday of the week.
    pub start: SolarDate,
    pub days: Vec<DailyFortune>,
    /// First day holding the highest score.
    pub best_day: SolarDate,
    /// First day holding the lowest score.
    pub worst_day: SolarDate,
    /// Mean of the seven scores, halves rounded up.
    pub average: u32,
    pub outlook: Outlook,
    pub summary: String,
    pub advice: String,
}

impl WeeklyFortune {
    /// `m/d ~ m/d` label of the week.
    pub fn range_label(&self) -> String {
        let end = SolarDate::from_jdn(self.start.jdn() + 6);
        format!("{}/{} ~ {}/{}", self.start.month, self.start.day, end.month, end.day)
    }
}

/// Monday on or before `date`.
pub const fn week_start(date: SolarDate) -> SolarDate {
    // JDN 0 fell on a Monday.
    let jdn = date.jdn();
    SolarDate::from_jdn(jdn - jdn.rem_euclid(7))
}

/// Score the week containing `date` for a chart's day pillar.
pub fn weekly_fortune(chart_day: Pillar, date: SolarDate) -> WeeklyFortune {
    let start = week_start(date);
    let days: Vec<DailyFortune> =
        (0..7).map(|i| daily_fortune(chart_day, SolarDate::from_jdn(start.jdn() + i))).collect();

    let mut best = days[0];
    let mut worst = days[0];
    for day in &days[1..] {
        if day.score > best.score {
            best = *day;
        }
        if day.score < worst.score {
            worst = *day;
        }
    }
    let sum: u32 = days.iter().map(|d| d.score).sum();
    let average = (2 * sum + 7) / 14;
    let element = chart_day.stem_element();
    let outlook = Outlook::grade(average, NARROW_CUTS);

    WeeklyFortune {
        start,
        best_day: best.date,
        worst_day: worst.date,
        average,
        outlook,
        summary: summary(outlook, element),
        advice: advice(element).to_string(),
        days,
    }
}

fn summary(outlook: Outlook, element: Element) -> String {
    match outlook {
        Outlook::Excellent => format!(
            "이번 주는 {}의 기운이 강하게 작용하여 전반적으로 좋은 흐름이 이어집니다. 적극적으로 행동하면 좋은 결과를 얻을 수 있습니다.",
            element.name()
        ),
        Outlook::Good => "이번 주는 무난한 한 주가 될 것입니다. 꾸준한 노력이 빛을 발하는 시기입니다.".to_string(),
        Outlook::Fair => {
            "이번 주는 다소 조용한 흐름입니다. 내면의 충전이 필요한 시기이므로 무리하지 마세요.".to_string()
        }
        Outlook::Poor => "이번 주는 신중함이 필요합니다. 중요한 결정은 다음 주로 미루는 것이 좋겠습니다.".to_string(),
    }
}

const fn advice(element: Element) -> &'static str {
    match element {
        Element::Wood => "자연 속에서 시간을 보내면 기운이 충전됩니다. 나무가 많은 곳이 행운의 장소입니다.",
        Element::Fire => "사람들과의 만남이 에너지를 높여줍니다. 밝은 색상의 옷이 행운을 불러옵니다.",
        Element::Earth => "안정적인 루틴을 유지하는 것이 중요합니다. 규칙적인 생활이 힘이 됩니다.",
        Element::Metal => "정돈된 환경이 집중력을 높여줍니다. 금요일에 중요한 약속을 잡아보세요.",
        Element::Water => "조용한 곳에서의 사색이 좋은 아이디어를 줍니다. 물과 관련된 활동이 길합니다.",
    }
}
