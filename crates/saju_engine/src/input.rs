//! Birth input record.

use serde::{Deserialize, Serialize};

use saju_base::{Gender, HourSlot};
use saju_calendar::{CalendarError, SolarDate, lunar_to_solar};

/// Calendar the birth date is given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    #[default]
    Solar,
    Lunar,
}

impl std::str::FromStr for CalendarType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solar" | "양력" => Ok(Self::Solar),
            "lunar" | "음력" => Ok(Self::Lunar),
            other => Err(format!("unknown calendar type: {other}")),
        }
    }
}

/// Birth date, hour slot, calendar and gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: HourSlot,
    pub calendar: CalendarType,
    /// Only meaningful for lunar input.
    #[serde(default)]
    pub is_leap_month: bool,
    pub gender: Gender,
}

impl BirthInput {
    pub const fn solar(year: i32, month: u32, day: u32, hour: HourSlot, gender: Gender) -> Self {
        Self { year, month, day, hour, calendar: CalendarType::Solar, is_leap_month: false, gender }
    }

    pub const fn lunar(
        year: i32,
        month: u32,
        day: u32,
        is_leap_month: bool,
        hour: HourSlot,
        gender: Gender,
    ) -> Self {
        Self { year, month, day, hour, calendar: CalendarType::Lunar, is_leap_month, gender }
    }

    /// The solar birth date, converting lunar input.
    pub fn solar_date(&self) -> Result<SolarDate, CalendarError> {
        match self.calendar {
            CalendarType::Solar => SolarDate::new(self.year, self.month, self.day),
            CalendarType::Lunar => lunar_to_solar(self.year, self.month, self.day, self.is_leap_month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_input_converts() {
        let input = BirthInput::lunar(1990, 4, 21, false, HourSlot::O, Gender::Male);
        assert_eq!(input.solar_date().unwrap(), SolarDate::new(1990, 5, 15).unwrap());
    }

    #[test]
    fn invalid_solar_day_fails() {
        let input = BirthInput::solar(2023, 2, 29, HourSlot::Unknown, Gender::Female);
        assert_eq!(
            input.solar_date(),
            Err(CalendarError::InvalidDate { year: 2023, month: 2, day: 29 })
        );
    }

    #[test]
    fn calendar_type_parses() {
        assert_eq!("LUNAR".parse::<CalendarType>().unwrap(), CalendarType::Lunar);
        assert_eq!("양력".parse::<CalendarType>().unwrap(), CalendarType::Solar);
        assert!("julian".parse::<CalendarType>().is_err());
    }

    #[test]
    fn deserializes_without_leap_flag() {
        let json = r#"{"year":1990,"month":5,"day":15,"hour":"o","calendar":"solar","gender":"male"}"#;
        let input: BirthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, BirthInput::solar(1990, 5, 15, HourSlot::O, Gender::Male));
    }
}
