//! Joke handler: one-liners for joke-keyword messages.

use crate::config::RuntimeParams;
use crate::handlers::{Handler, bounded};
use crate::ports::generation::{GenerationError, GenerationGateway};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use switchboard_domain::{IntentKind, TurnState, intent};
use tracing::debug;

/// Canned jokes used when generation is unavailable. Picked uniformly at
/// random — intentional nondeterminism, seedable for tests.
pub const FALLBACK_JOKES: [&str; 3] = [
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "What do you call fake spaghetti? An impasta!",
];

/// Not-applicable line for non-joke messages.
pub const NOT_APPLICABLE: &str = "I can tell jokes if you ask for one!";

/// Handler for the joke intent.
pub struct JokeHandler {
    gateway: Arc<dyn GenerationGateway>,
    timeout: Duration,
    rng: Mutex<StdRng>,
}

impl JokeHandler {
    pub fn new(gateway: Arc<dyn GenerationGateway>, params: &RuntimeParams) -> Self {
        Self {
            gateway,
            timeout: params.collaborator_timeout,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seed the fallback selection, making it deterministic under test.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    fn fallback_joke(&self) -> &'static str {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        FALLBACK_JOKES
            .choose(&mut *rng)
            .copied()
            .unwrap_or(FALLBACK_JOKES[0])
    }
}

#[async_trait]
impl Handler for JokeHandler {
    fn kind(&self) -> IntentKind {
        IntentKind::Joke
    }

    fn detect(&self, message: &str) -> bool {
        intent::detect_intents(message).contains(&IntentKind::Joke)
    }

    async fn handle(&self, state: TurnState) -> TurnState {
        if !self.detect(state.message()) {
            return state.with_contribution(IntentKind::Joke, NOT_APPLICABLE);
        }

        let prompt = "The user asked for a joke. Provide a lighthearted and funny joke.";

        let contribution = match bounded(
            self.timeout,
            GenerationError::Timeout,
            self.gateway.generate(prompt),
        )
        .await
        {
            Ok(text) => text,
            Err(e) => {
                debug!("Joke generation unavailable, using fallback: {}", e);
                self.fallback_joke().to_string()
            }
        };

        state.with_contribution(IntentKind::Joke, contribution)
    }
}
