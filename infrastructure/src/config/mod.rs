//! Configuration: raw TOML structure and the multi-source loader

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, GenerationConfig, RuntimeConfig, StoreConfig, WeatherConfig};
pub use loader::ConfigLoader;
