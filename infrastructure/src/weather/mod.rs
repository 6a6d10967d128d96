//! Weather collaborator adapters

pub mod open_meteo;

pub use open_meteo::OpenMeteoWeatherGateway;
