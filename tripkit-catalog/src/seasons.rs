use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Fall,
}

impl Season {
    /// Classify a 0-indexed calendar month: summer 5-7 (Jun-Aug), winter
    /// 11/0/1 (Dec-Feb), spring 2-4 (Mar-May), fall 8-10 (Sep-Nov).
    pub fn from_month0(month0: u32) -> Season {
        match month0 {
            5..=7 => Season::Summer,
            11 | 0 | 1 => Season::Winter,
            2..=4 => Season::Spring,
            _ => Season::Fall,
        }
    }

    pub fn from_date(date: NaiveDate) -> Season {
        Season::from_month0(date.month0())
    }
}

/// Seasonal flight-price multipliers for a destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeasonalMultipliers {
    pub summer: f64,
    pub winter: f64,
    pub spring: f64,
    pub fall: f64,
}

impl SeasonalMultipliers {
    pub fn for_season(&self, season: Season) -> f64 {
        match season {
            Season::Summer => self.summer,
            Season::Winter => self.winter,
            Season::Spring => self.spring,
            Season::Fall => self.fall,
        }
    }
}

const DEFAULT_MULTIPLIERS: SeasonalMultipliers = SeasonalMultipliers {
    summer: 1.3,
    winter: 1.1,
    spring: 1.2,
    fall: 1.0,
};

/// Seasonal multiplier table for a destination, falling back to a default
/// table with the same shape when the destination is unrecognized.
pub fn seasonal_multipliers(destination: &str) -> SeasonalMultipliers {
    match destination {
        "New York" => SeasonalMultipliers {
            summer: 1.4,
            winter: 1.2,
            spring: 1.1,
            fall: 1.0,
        },
        "Paris" => SeasonalMultipliers {
            summer: 1.5,
            winter: 0.9,
            spring: 1.2,
            fall: 1.0,
        },
        "Tokyo" => SeasonalMultipliers {
            summer: 1.3,
            winter: 1.1,
            spring: 1.4,
            fall: 1.0,
        },
        _ => DEFAULT_MULTIPLIERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_boundaries() {
        // 0-indexed months
        assert_eq!(Season::from_month0(5), Season::Summer);
        assert_eq!(Season::from_month0(7), Season::Summer);
        assert_eq!(Season::from_month0(11), Season::Winter);
        assert_eq!(Season::from_month0(0), Season::Winter);
        assert_eq!(Season::from_month0(1), Season::Winter);
        assert_eq!(Season::from_month0(2), Season::Spring);
        assert_eq!(Season::from_month0(4), Season::Spring);
        assert_eq!(Season::from_month0(8), Season::Fall);
        assert_eq!(Season::from_month0(10), Season::Fall);
    }

    #[test]
    fn test_season_is_pure_function_of_calendar_month() {
        let june_2025 = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let june_2031 = NaiveDate::from_ymd_opt(2031, 6, 1).unwrap();
        assert_eq!(Season::from_date(june_2025), Season::from_date(june_2031));
        assert_eq!(Season::from_date(june_2025), Season::Summer);
    }

    #[test]
    fn test_unknown_destination_uses_default_table() {
        let atlantis = seasonal_multipliers("Atlantis");
        assert_eq!(atlantis, DEFAULT_MULTIPLIERS);
        assert_eq!(atlantis.for_season(Season::Fall), 1.0);
    }

    #[test]
    fn test_paris_winter_is_off_season() {
        let paris = seasonal_multipliers("Paris");
        assert!(paris.for_season(Season::Winter) < 1.0);
        assert_eq!(paris.for_season(Season::Summer), 1.5);
    }
}
