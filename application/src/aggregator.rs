//! Aggregator — composes the single outward-facing response.
//!
//! Runs strictly after the pipeline: every contribution is written
//! before this reads them. Contributions for matched kinds are
//! concatenated in the fixed order Greeting, Joke, Weather; kinds the
//! message did not match are skipped even though the pipeline wrote
//! their not-applicable lines.

use std::collections::BTreeSet;
use switchboard_domain::{IntentKind, TurnState};

/// Fixed reply for a message that matched nothing.
pub const MULTI_CAPABILITY_FALLBACK: &str = "I can greet you, tell you a joke, or look up the \
     weather. You can also sign up with 'My name is [Your Name]'.";

/// Combine the matched contributions into the final response string.
pub fn combine(state: &TurnState, matched: &BTreeSet<IntentKind>) -> String {
    if matched.is_empty() {
        return MULTI_CAPABILITY_FALLBACK.to_string();
    }

    IntentKind::pipeline_order()
        .into_iter()
        .filter(|kind| matched.contains(kind))
        .filter_map(|kind| state.contribution(kind))
        .collect::<Vec<_>>()
        .join(" ")
}
