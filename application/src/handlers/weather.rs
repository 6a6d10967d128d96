//! Weather handler: current conditions for weather-keyword messages.
//!
//! Resolves the caller's city, geocodes it, fetches the forecast, and
//! asks the generation collaborator to phrase the canonical summary.
//! Each hop degrades independently: a generation fault falls back to the
//! canonical sentence, a collaborator fault to a fixed apology line.

use crate::config::RuntimeParams;
use crate::handlers::{Handler, bounded};
use crate::ports::generation::{GenerationError, GenerationGateway};
use crate::ports::weather::{WeatherError, WeatherGateway};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use switchboard_domain::{IntentKind, Location, TurnState, intent};
use tracing::debug;

/// Fallback when the weather collaborator itself is unavailable.
pub const FETCH_FAILED: &str =
    "Could not fetch weather details at the moment. Please try again later.";

/// Not-applicable line for non-weather messages.
pub const NOT_APPLICABLE: &str = "I can provide weather information if you ask specifically.";

/// Handler for the weather intent.
pub struct WeatherHandler {
    weather: Arc<dyn WeatherGateway>,
    generation: Arc<dyn GenerationGateway>,
    timeout: Duration,
}

impl WeatherHandler {
    pub fn new(
        weather: Arc<dyn WeatherGateway>,
        generation: Arc<dyn GenerationGateway>,
        params: &RuntimeParams,
    ) -> Self {
        Self {
            weather,
            generation,
            timeout: params.collaborator_timeout,
        }
    }

    /// Resolve location and fetch today's conditions, reduced to the
    /// canonical summary line. Reports are never cached — every weather
    /// turn re-fetches.
    async fn weather_summary(&self) -> String {
        let city = match bounded(
            self.timeout,
            WeatherError::Timeout,
            self.weather.resolve_current_location(),
        )
        .await
        {
            Ok(city) => city,
            Err(e) => {
                debug!("Location resolution failed: {}", e);
                return FETCH_FAILED.to_string();
            }
        };

        let location = match bounded(
            self.timeout,
            WeatherError::Timeout,
            self.weather.geocode(&city),
        )
        .await
        {
            Ok((latitude, longitude)) => Location {
                city,
                latitude,
                longitude,
            },
            Err(e) => {
                debug!("Geocoding failed for {}: {}", city, e);
                return format!("Sorry, weather information is not available for {}.", city);
            }
        };

        match bounded(
            self.timeout,
            WeatherError::Timeout,
            self.weather.forecast(location.latitude, location.longitude),
        )
        .await
        {
            Ok(report) => report.summary(&location.city),
            Err(e) => {
                debug!("Forecast failed for {}: {}", location.city, e);
                FETCH_FAILED.to_string()
            }
        }
    }
}

#[async_trait]
impl Handler for WeatherHandler {
    fn kind(&self) -> IntentKind {
        IntentKind::Weather
    }

    fn detect(&self, message: &str) -> bool {
        intent::detect_intents(message).contains(&IntentKind::Weather)
    }

    async fn handle(&self, state: TurnState) -> TurnState {
        if !self.detect(state.message()) {
            return state.with_contribution(IntentKind::Weather, NOT_APPLICABLE);
        }

        let summary = self.weather_summary().await;

        let prompt = format!(
            "The user asked about the weather. The current weather is: {}\n\
             Generate a friendly and concise response incorporating this information.",
            summary
        );

        let contribution = match bounded(
            self.timeout,
            GenerationError::Timeout,
            self.generation.generate(&prompt),
        )
        .await
        {
            Ok(text) => text,
            Err(e) => {
                debug!("Weather phrasing unavailable, using summary: {}", e);
                summary
            }
        };

        state.with_contribution(IntentKind::Weather, contribution)
    }
}
