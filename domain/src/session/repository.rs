//! Session store trait
//!
//! Domain-level abstraction over the identity store. Implementations
//! live in the infrastructure layer (in-memory, JSON file, ...).

use crate::session::entities::{Credential, HistoryEntry, Session};
use async_trait::async_trait;
use thiserror::Error;

/// Errors from session store operations.
///
/// `AlreadyExists` and `NotFound` are expected outcomes of account
/// handling and are surfaced as ordinary response text, never as a
/// failed turn.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Identity already exists: {0}")]
    AlreadyExists(String),

    #[error("Identity not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository for persisted identities, keyed by derived session id.
///
/// The store's update-by-key operations are the only transaction
/// discipline: one turn at a time mutates it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a new identity record. Fails with [`StoreError::AlreadyExists`]
    /// if the id is taken.
    async fn create(
        &self,
        id: &str,
        display_name: &str,
        credential: Credential,
    ) -> Result<(), StoreError>;

    /// Look up an identity by id.
    async fn find(&self, id: &str) -> Result<Option<Session>, StoreError>;

    /// Append one turn to an identity's transcript. Fails with
    /// [`StoreError::NotFound`] for an unknown id.
    async fn append_history(&self, id: &str, entry: HistoryEntry) -> Result<(), StoreError>;
}
