//! HTTP adapter for the generation gateway port.

use crate::config::GenerationConfig;
use crate::generation::protocol::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use std::time::Duration;
use switchboard_application::ports::generation::{GenerationError, GenerationGateway};
use tracing::debug;

/// Generation gateway over a Gemini-style `generateContent` endpoint.
///
/// The request timeout is set on the client; the handler layer applies
/// its own bound on top, so a slow endpoint degrades to fallbacks either
/// way.
pub struct HttpGenerationGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl HttpGenerationGateway {
    pub fn new(config: &GenerationConfig, timeout: Duration) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Fault(format!("Could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerationGateway for HttpGenerationGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.url())
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Fault(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Fault(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Fault(format!("Bad payload: {}", e)))?;

        let text = payload.first_text().ok_or(GenerationError::EmptyResponse)?;
        debug!("Generation returned {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_shape() {
        let config = GenerationConfig {
            endpoint: "https://generativelanguage.googleapis.com/".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: Some("k123".to_string()),
        };
        let gateway = HttpGenerationGateway::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(
            gateway.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=k123"
        );
    }
}
