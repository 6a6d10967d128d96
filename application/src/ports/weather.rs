//! Weather gateway port
//!
//! Location resolution, geocoding, and forecast lookup as one external
//! collaborator surface. Nothing here is cached — a weather turn always
//! re-fetches.

use async_trait::async_trait;
use switchboard_domain::WeatherReport;
use thiserror::Error;

/// Errors from the weather collaborator.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather request timed out")]
    Timeout,

    #[error("Weather request failed: {0}")]
    Fault(String),

    #[error("No coordinates found for {0}")]
    NotFound(String),
}

/// Gateway for weather lookups.
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Resolve the caller's current city.
    async fn resolve_current_location(&self) -> Result<String, WeatherError>;

    /// Geocode a city name to `(latitude, longitude)`.
    async fn geocode(&self, city: &str) -> Result<(f64, f64), WeatherError>;

    /// Fetch current conditions for coordinates.
    async fn forecast(&self, latitude: f64, longitude: f64)
    -> Result<WeatherReport, WeatherError>;
}
