//! Weather value objects.
//!
//! Produced by the external weather collaborator; the core never owns or
//! caches them. A report is re-fetched on every weather turn.

use serde::{Deserialize, Serialize};

/// A resolved place: city name plus coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub weather_code: i64,
    pub description: String,
}

impl WeatherReport {
    pub fn new(temperature_c: f64, weather_code: i64) -> Self {
        Self {
            temperature_c,
            weather_code,
            description: describe_weather_code(weather_code).to_string(),
        }
    }

    /// The canonical one-line summary for a city.
    pub fn summary(&self, city: &str) -> String {
        format!(
            "The weather in {} is {} with a temperature of {}°C.",
            city, self.description, self.temperature_c
        )
    }
}

/// WMO weather code lookup. Fixed table of 20 known codes; anything else
/// reads "Unknown weather condition".
pub fn describe_weather_code(code: i64) -> &'static str {
    match code {
        0 => "Clear skies",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        95 => "Thunderstorms",
        96 => "Thunderstorms with slight hail",
        99 => "Thunderstorms with heavy hail",
        _ => "Unknown weather condition",
    }
}
