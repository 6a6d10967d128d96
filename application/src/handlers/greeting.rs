//! Greeting handler: friendly openers for greeting-keyword messages.

use crate::config::RuntimeParams;
use crate::handlers::{Handler, bounded};
use crate::ports::generation::{GenerationError, GenerationGateway};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use switchboard_domain::{IntentKind, TurnState, intent};
use tracing::debug;

/// Canned greeting used when generation is unavailable.
///
/// Fixed (not randomized) so the greeting contribution stays idempotent.
pub const FALLBACK_GREETING: &str = "Hello! How can I assist you today?";

/// Not-applicable line for non-greeting messages.
pub const NOT_APPLICABLE: &str = "I only handle greetings right now.";

/// Handler for the greeting intent.
pub struct GreetingHandler {
    gateway: Arc<dyn GenerationGateway>,
    timeout: Duration,
}

impl GreetingHandler {
    pub fn new(gateway: Arc<dyn GenerationGateway>, params: &RuntimeParams) -> Self {
        Self {
            gateway,
            timeout: params.collaborator_timeout,
        }
    }
}

#[async_trait]
impl Handler for GreetingHandler {
    fn kind(&self) -> IntentKind {
        IntentKind::Greeting
    }

    fn detect(&self, message: &str) -> bool {
        intent::detect_intents(message).contains(&IntentKind::Greeting)
    }

    async fn handle(&self, state: TurnState) -> TurnState {
        if !self.detect(state.message()) {
            return state.with_contribution(IntentKind::Greeting, NOT_APPLICABLE);
        }

        let prompt = format!(
            "The user said: '{}'. Generate a friendly greeting response.",
            state.message()
        );

        let contribution = match bounded(
            self.timeout,
            GenerationError::Timeout,
            self.gateway.generate(&prompt),
        )
        .await
        {
            Ok(text) => text,
            Err(e) => {
                debug!("Greeting generation unavailable, using fallback: {}", e);
                FALLBACK_GREETING.to_string()
            }
        };

        state.with_contribution(IntentKind::Greeting, contribution)
    }
}
