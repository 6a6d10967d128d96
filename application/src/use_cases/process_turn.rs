//! Process Turn use case.
//!
//! The orchestrator: takes one raw input message plus the caller's
//! channel identity, runs the fixed handler pipeline, aggregates the
//! matched contributions, and persists the turn.
//!
//! Account triggers are checked first and short-circuit the pipeline:
//! the account handler then fully owns the response and the other
//! handlers never run. This is a priority override, not aggregation.
//!
//! There is no fatal path here — handler failures degrade to fallbacks
//! inside the handlers, so every turn yields a non-empty response.

use crate::aggregator::combine;
use crate::config::RuntimeParams;
use crate::handlers::account::AccountHandler;
use crate::handlers::greeting::GreetingHandler;
use crate::handlers::joke::JokeHandler;
use crate::handlers::weather::WeatherHandler;
use crate::handlers::Handler;
use crate::ports::generation::GenerationGateway;
use crate::ports::weather::WeatherGateway;
use std::sync::Arc;
use switchboard_domain::{
    ChannelSession, HistoryEntry, SessionStore, TurnState, detect_intents, truncate_str,
};
use tracing::{debug, info, warn};

/// Use case for processing one conversational turn.
///
/// Holds the statically ordered domain pipeline (Greeting, Joke,
/// Weather — order only affects external-call latency, contributions are
/// independent) plus the account handler and the identity store.
pub struct ProcessTurnUseCase {
    handlers: Vec<Arc<dyn Handler>>,
    account: AccountHandler,
    store: Arc<dyn SessionStore>,
}

impl ProcessTurnUseCase {
    /// Assemble the fixed pipeline against the given collaborators.
    pub fn new(
        generation: Arc<dyn GenerationGateway>,
        weather: Arc<dyn WeatherGateway>,
        store: Arc<dyn SessionStore>,
        params: &RuntimeParams,
    ) -> Self {
        let handlers: Vec<Arc<dyn Handler>> = vec![
            Arc::new(GreetingHandler::new(generation.clone(), params)),
            Arc::new(JokeHandler::new(generation.clone(), params)),
            Arc::new(WeatherHandler::new(weather, generation, params)),
        ];
        Self {
            handlers,
            account: AccountHandler::new(store.clone()),
            store,
        }
    }

    /// Replace the domain pipeline (used by tests to inject seeded or
    /// scripted handlers).
    pub fn with_pipeline(mut self, handlers: Vec<Arc<dyn Handler>>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Process one turn for the given channel.
    ///
    /// The history append happens strictly after the final response is
    /// computed, and only when the channel has an established identity.
    pub async fn execute(&self, message: &str, channel: &mut ChannelSession) -> String {
        info!("Processing turn: {}", truncate_str(message, 80));

        let response = if let Some(intent) = AccountHandler::detect(message) {
            debug!("Account trigger matched, short-circuiting pipeline");
            self.account.respond(intent, channel).await
        } else {
            let state = self.run_pipeline(message, channel).await;
            // The aggregator always writes a non-empty final response.
            state.final_response().unwrap_or_default().to_string()
        };

        if let Some(id) = channel.current()
            && let Err(e) = self
                .store
                .append_history(id, HistoryEntry::new(message, &response))
                .await
        {
            warn!("Could not persist turn for {}: {}", id, e);
        }

        response
    }

    /// Run the domain handlers sequentially and aggregate.
    ///
    /// The aggregator runs strictly after every handler has written its
    /// contribution; handlers never observe each other's entries. Its
    /// result is the turn's final response, written exactly once.
    async fn run_pipeline(&self, message: &str, channel: &ChannelSession) -> TurnState {
        let mut state = TurnState::new(message);
        if let Some(id) = channel.current() {
            state = state.with_session_id(id);
        }

        for handler in &self.handlers {
            state = handler.handle(state).await;
        }

        let matched = detect_intents(message);
        debug!(
            "Matched intents: [{}]",
            matched
                .iter()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let response = combine(&state, &matched);
        state.with_final_response(response)
    }
}
