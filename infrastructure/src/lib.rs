//! Infrastructure layer for switchboard
//!
//! Adapters for the application-layer ports: HTTP gateways for the
//! generation and weather collaborators, session store implementations,
//! and the configuration loader.

pub mod config;
pub mod generation;
pub mod store;
pub mod weather;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use generation::HttpGenerationGateway;
pub use store::{InMemorySessionStore, JsonFileSessionStore};
pub use weather::OpenMeteoWeatherGateway;
