//! Application layer for switchboard
//!
//! This crate contains the handler pipeline, port definitions, the
//! aggregator, and the process-turn use case. It depends only on the
//! domain layer.

pub mod aggregator;
pub mod config;
pub mod handlers;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use aggregator::{MULTI_CAPABILITY_FALLBACK, combine};
pub use config::RuntimeParams;
pub use handlers::{
    Handler,
    account::AccountHandler,
    greeting::GreetingHandler,
    joke::JokeHandler,
    weather::WeatherHandler,
};
pub use ports::{
    generation::{GenerationError, GenerationGateway},
    weather::{WeatherError, WeatherGateway},
};
pub use use_cases::process_turn::ProcessTurnUseCase;
