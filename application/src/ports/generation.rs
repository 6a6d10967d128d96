//! Generation gateway port
//!
//! Defines the interface for the natural-language generation
//! collaborator. Every caller must fall back to a fixed canned string
//! when generation fails — a generation fault never aborts a turn.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the generation collaborator.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation timed out")]
    Timeout,

    #[error("Generation request failed: {0}")]
    Fault(String),

    #[error("Generation returned no candidates")]
    EmptyResponse,
}

/// Gateway for natural-language generation.
///
/// This port defines how handlers phrase responses through an external
/// model. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Generate a response for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
