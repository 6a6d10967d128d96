//! Runtime parameters — collaborator call control.
//!
//! [`RuntimeParams`] groups the static parameters that bound outbound
//! collaborator calls made by the handler pipeline. These are
//! application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pipeline runtime parameters.
///
/// Every outbound collaborator call (generation, location, geocoding,
/// forecast) is wrapped in `collaborator_timeout`; on expiry the calling
/// handler degrades to its fixed fallback and the turn continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeParams {
    /// Bound applied to each outbound collaborator call.
    pub collaborator_timeout: Duration,
}

impl Default for RuntimeParams {
    fn default() -> Self {
        Self {
            collaborator_timeout: Duration::from_secs(5),
        }
    }
}

impl RuntimeParams {
    pub fn with_collaborator_timeout(mut self, timeout: Duration) -> Self {
        self.collaborator_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = RuntimeParams::default();
        assert_eq!(params.collaborator_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder() {
        let params =
            RuntimeParams::default().with_collaborator_timeout(Duration::from_millis(50));
        assert_eq!(params.collaborator_timeout, Duration::from_millis(50));
    }
}
