//! Weather gateway over ipinfo.io, Nominatim, and Open-Meteo.
//!
//! Three hops per lookup: current city from ipinfo, coordinates from
//! Nominatim (which returns lat/lon as strings), current conditions from
//! Open-Meteo. Nothing is cached.

use crate::config::WeatherConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use switchboard_application::ports::weather::{WeatherError, WeatherGateway};
use switchboard_domain::WeatherReport;
use tracing::debug;

/// Weather gateway backed by public HTTP services.
pub struct OpenMeteoWeatherGateway {
    client: reqwest::Client,
    location_endpoint: String,
    geocode_endpoint: String,
    forecast_endpoint: String,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    #[serde(default)]
    city: Option<String>,
}

/// One Nominatim search hit. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: i64,
}

impl OpenMeteoWeatherGateway {
    pub fn new(config: &WeatherConfig, timeout: Duration) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Fault(format!("Could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            location_endpoint: config.location_endpoint.clone(),
            geocode_endpoint: config.geocode_endpoint.clone(),
            forecast_endpoint: config.forecast_endpoint.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    fn request_error(e: reqwest::Error) -> WeatherError {
        if e.is_timeout() {
            WeatherError::Timeout
        } else {
            WeatherError::Fault(format!("Request failed: {}", e))
        }
    }

    fn status_error(status: reqwest::StatusCode) -> WeatherError {
        WeatherError::Fault(format!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        ))
    }
}

#[async_trait]
impl WeatherGateway for OpenMeteoWeatherGateway {
    async fn resolve_current_location(&self) -> Result<String, WeatherError> {
        let response = self
            .client
            .get(&self.location_endpoint)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(Self::request_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        let payload: IpInfoResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Fault(format!("Bad payload: {}", e)))?;

        payload
            .city
            .filter(|c| !c.is_empty())
            .ok_or_else(|| WeatherError::Fault("No city in location payload".to_string()))
    }

    async fn geocode(&self, city: &str) -> Result<(f64, f64), WeatherError> {
        let response = self
            .client
            .get(&self.geocode_endpoint)
            .query(&[("city", city), ("format", "json")])
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(Self::request_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        let hits: Vec<GeocodeHit> = response
            .json()
            .await
            .map_err(|e| WeatherError::Fault(format!("Bad payload: {}", e)))?;

        let hit = hits
            .first()
            .ok_or_else(|| WeatherError::NotFound(city.to_string()))?;

        let latitude: f64 = hit
            .lat
            .parse()
            .map_err(|_| WeatherError::Fault(format!("Bad latitude: {}", hit.lat)))?;
        let longitude: f64 = hit
            .lon
            .parse()
            .map_err(|_| WeatherError::Fault(format!("Bad longitude: {}", hit.lon)))?;

        debug!("Geocoded {} to ({}, {})", city, latitude, longitude);
        Ok((latitude, longitude))
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(&self.forecast_endpoint)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(Self::request_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        let payload: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Fault(format!("Bad payload: {}", e)))?;

        let current = payload
            .current_weather
            .ok_or_else(|| WeatherError::Fault("No current weather in payload".to_string()))?;

        Ok(WeatherReport::new(current.temperature, current.weathercode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocode_hit_parses_string_coordinates() {
        let payload = r#"[{"lat": "52.5170365", "lon": "13.3888599", "display_name": "Berlin"}]"#;
        let hits: Vec<GeocodeHit> = serde_json::from_str(payload).unwrap();
        assert_eq!(hits.len(), 1);
        assert!((hits[0].lat.parse::<f64>().unwrap() - 52.517).abs() < 0.001);
    }

    #[test]
    fn test_forecast_response_shape() {
        let payload = r#"{"current_weather": {"temperature": 18.3, "weathercode": 61, "windspeed": 12.0}}"#;
        let response: ForecastResponse = serde_json::from_str(payload).unwrap();
        let current = response.current_weather.unwrap();
        assert_eq!(current.temperature, 18.3);
        assert_eq!(current.weathercode, 61);
    }

    #[test]
    fn test_ipinfo_response_without_city() {
        let response: IpInfoResponse = serde_json::from_str(r#"{"ip": "1.2.3.4"}"#).unwrap();
        assert!(response.city.is_none());
    }
}
