//! Per-turn working memory.
//!
//! [`TurnState`] is created fresh for every incoming message, threaded
//! through the handler pipeline, and discarded when the turn completes.
//! Handlers assemble it stage by stage as a value: each stage consumes
//! the state and returns an enriched one, which keeps the "independent
//! contribution" rule structural — a handler can only add its own entry.

use crate::intent::IntentKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Working memory for one request/response cycle.
///
/// The message is immutable once set. Each handler writes at most one
/// contribution, keyed by its own kind; only the aggregator reads across
/// kinds. The final response is written exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnState {
    message: String,
    contributions: BTreeMap<IntentKind, String>,
    session_id: Option<String>,
    final_response: Option<String>,
}

impl TurnState {
    /// Create a fresh state for an incoming message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            contributions: BTreeMap::new(),
            session_id: None,
            final_response: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Add this handler's contribution, consuming and returning the state.
    ///
    /// Last write wins for a given kind; handlers only ever write their
    /// own kind, so in practice each key is written at most once per turn.
    pub fn with_contribution(mut self, kind: IntentKind, text: impl Into<String>) -> Self {
        self.contributions.insert(kind, text.into());
        self
    }

    pub fn contribution(&self, kind: IntentKind) -> Option<&str> {
        self.contributions.get(&kind).map(String::as_str)
    }

    pub fn contributions(&self) -> &BTreeMap<IntentKind, String> {
        &self.contributions
    }

    /// Record the identity established for this turn, if any.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Write the single outward-facing response. Set exactly once, by the
    /// aggregator (or the account short-circuit).
    pub fn with_final_response(mut self, response: impl Into<String>) -> Self {
        debug_assert!(self.final_response.is_none(), "final response written twice");
        self.final_response = Some(response.into());
        self
    }

    pub fn final_response(&self) -> Option<&str> {
        self.final_response.as_deref()
    }
}
