//! Handler pipeline — the polymorphic units of work over [`TurnState`].
//!
//! Each handler owns one intent kind. `detect` is a pure keyword match
//! against the kind's fixed vocabulary; `handle` enriches the state with
//! at most one contribution, keyed by the handler's own kind. Handlers
//! never read each other's contributions — only the aggregator composes.
//!
//! Collaborator failures are absorbed at the handler boundary: a failed
//! or timed-out call degrades to the handler's fixed fallback string and
//! the pipeline continues. There is no fatal error path here.

pub mod account;
pub mod greeting;
pub mod joke;
pub mod weather;

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use switchboard_domain::{IntentKind, TurnState};

/// A pipeline stage owning one intent kind.
///
/// `detect` + `handle` together are idempotent for an unchanged external
/// world, with one documented exception: the joke handler may pick its
/// fallback uniformly at random when generation is unavailable.
#[async_trait]
pub trait Handler: Send + Sync {
    /// The intent kind this handler contributes under.
    fn kind(&self) -> IntentKind;

    /// Pure, deterministic keyword match against this kind's vocabulary.
    fn detect(&self, message: &str) -> bool;

    /// Enrich the state with this handler's contribution.
    ///
    /// Writes the kind's fixed not-applicable line when `detect` is
    /// false. Never mutates the message, another kind's contribution, or
    /// a session id set elsewhere.
    async fn handle(&self, state: TurnState) -> TurnState;
}

/// Bound a collaborator call, converting expiry into the port's timeout
/// error so the caller's fallback path handles both uniformly.
pub(crate) async fn bounded<T, E, F>(limit: Duration, on_timeout: E, fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_through_ready_results() {
        let ok: Result<u32, &str> = bounded(Duration::from_secs(1), "timeout", async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: Result<u32, &str> =
            bounded(Duration::from_secs(1), "timeout", async { Err("boom") }).await;
        assert_eq!(err, Err("boom"));
    }

    #[tokio::test]
    async fn test_bounded_converts_expiry() {
        let result: Result<u32, &str> = bounded(
            Duration::from_millis(10),
            "timeout",
            futures::future::pending(),
        )
        .await;
        assert_eq!(result, Err("timeout"));
    }
}
