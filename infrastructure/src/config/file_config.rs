//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the config file. Every
//! section and field has a default, so a missing file or partial file is
//! always usable.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation collaborator settings
    pub generation: GenerationConfig,
    /// Weather collaborator settings
    pub weather: WeatherConfig,
    /// Identity store settings
    pub store: StoreConfig,
    /// Pipeline runtime settings
    pub runtime: RuntimeConfig,
}

/// `[generation]` section — the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    /// API key; usually supplied via `SWITCHBOARD_GENERATION__API_KEY`.
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
        }
    }
}

/// `[weather]` section — the three public weather services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub location_endpoint: String,
    pub geocode_endpoint: String,
    pub forecast_endpoint: String,
    /// Nominatim requires an identifying User-Agent.
    pub user_agent: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            location_endpoint: "https://ipinfo.io/json".to_string(),
            geocode_endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            forecast_endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            user_agent: "Switchboard/0.1 (conversational router)".to_string(),
        }
    }
}

/// `[store]` section — where identities persist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON store file. `None` keeps identities in memory
    /// for the process lifetime only.
    pub path: Option<PathBuf>,
}

/// `[runtime]` section — pipeline bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Bound on each outbound collaborator call, in seconds.
    pub collaborator_timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout_secs: 5,
        }
    }
}

impl RuntimeConfig {
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_secs(self.collaborator_timeout_secs)
    }
}
