//! Canned weather forecasts.
//!
//! No external service is called; each period maps to a fixed template with
//! the location substituted into its header line.

use crate::error::{AppError, Result};
use std::fmt;
use std::str::FromStr;

pub const FORECAST_NOT_AVAILABLE: &str = "Forecast not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastPeriod {
    SevenDay,
    FourteenDay,
    Seasonal,
}

impl ForecastPeriod {
    pub const ALL: [ForecastPeriod; 3] = [
        ForecastPeriod::SevenDay,
        ForecastPeriod::FourteenDay,
        ForecastPeriod::Seasonal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastPeriod::SevenDay => "7-day",
            ForecastPeriod::FourteenDay => "14-day",
            ForecastPeriod::Seasonal => "Seasonal",
        }
    }
}

impl fmt::Display for ForecastPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForecastPeriod {
    type Err = AppError;

    /// Exact match only; the labels are the ones the front end offers.
    fn from_str(s: &str) -> Result<Self> {
        ForecastPeriod::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| AppError::InvalidData(format!("Unknown forecast period: '{}'", s)))
    }
}

const SEVEN_DAY: [(&str, i32); 7] = [
    ("Sunny", 28),
    ("Partly cloudy", 26),
    ("Light rain", 24),
    ("Thunderstorms", 22),
    ("Cloudy", 25),
    ("Sunny", 27),
    ("Sunny", 29),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherModel;

impl WeatherModel {
    pub fn new() -> Self {
        Self
    }

    /// Forecast text for `location` over `period`.
    ///
    /// `period` is not validated: any label other than the three known ones
    /// yields [`FORECAST_NOT_AVAILABLE`].
    pub fn predict(&self, location: &str, period: &str) -> String {
        match period.parse::<ForecastPeriod>() {
            Ok(period) => self.forecast(location, period),
            Err(_) => FORECAST_NOT_AVAILABLE.to_string(),
        }
    }

    pub fn forecast(&self, location: &str, period: ForecastPeriod) -> String {
        match period {
            ForecastPeriod::SevenDay => {
                let mut lines = vec![format!("Weather forecast for {} next 7 days:", location)];
                for (day, (condition, temp)) in SEVEN_DAY.iter().enumerate() {
                    lines.push(format!("• Day {}: {}, {}°C", day + 1, condition, temp));
                }
                lines.join("\n")
            }
            ForecastPeriod::FourteenDay => format!(
                "14-day forecast for {}:\n\
                 First week: Mixed sun and rain, temps 24-28°C\n\
                 Second week: Drier conditions, temps 26-30°C",
                location
            ),
            ForecastPeriod::Seasonal => format!(
                "Seasonal outlook for {}:\n\
                 Expected above-average rainfall this season.\n\
                 Temperatures will be slightly higher than normal.",
                location
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_day_has_seven_entries() {
        let forecast = WeatherModel::new().predict("Nairobi", "7-day");
        assert!(forecast.contains("Nairobi"));
        assert_eq!(forecast.lines().filter(|l| l.starts_with("• Day ")).count(), 7);
        assert!(forecast.ends_with("• Day 7: Sunny, 29°C"));
    }

    #[test]
    fn test_fourteen_day() {
        let forecast = WeatherModel::new().predict("Kisumu", "14-day");
        assert_eq!(forecast.lines().count(), 3);
        assert_eq!(forecast.lines().next(), Some("14-day forecast for Kisumu:"));
    }

    #[test]
    fn test_seasonal() {
        let forecast = WeatherModel::new().predict("Eldoret", "Seasonal");
        assert!(forecast.starts_with("Seasonal outlook for Eldoret:"));
        assert!(forecast.contains("above-average rainfall"));
    }

    #[test]
    fn test_unknown_period() {
        let model = WeatherModel::new();
        assert_eq!(model.predict("Nairobi", "unknown-value"), "Forecast not available");
        assert_eq!(model.predict("Nairobi", "seasonal"), "Forecast not available");
    }
}
