//! In-memory session store.
//!
//! The default store when no store path is configured: identities live
//! for the process lifetime only.

use async_trait::async_trait;
use std::collections::HashMap;
use switchboard_domain::{Credential, HistoryEntry, Session, SessionStore, StoreError};
use tokio::sync::RwLock;

/// Identity store backed by a process-local map.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(
        &self,
        id: &str,
        display_name: &str,
        credential: Credential,
    ) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(id) {
            return Err(StoreError::AlreadyExists(id.to_string()));
        }
        sessions.insert(id.to_string(), Session::new(id, display_name, credential));
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn append_history(&self, id: &str, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        session.append_history(entry);
        Ok(())
    }
}
