//! JSON-file-backed session store.
//!
//! Holds the full identity map in memory and snapshots it to a JSON file
//! after every mutation, so identities and transcripts survive process
//! restarts. One process owns the file at a time; the store's
//! update-by-key operations are the only write discipline.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use switchboard_domain::{Credential, HistoryEntry, Session, SessionStore, StoreError};
use tokio::sync::RwLock;
use tracing::debug;

/// Identity store persisted as a single JSON document.
#[derive(Debug)]
pub struct JsonFileSessionStore {
    path: PathBuf,
    sessions: RwLock<HashMap<String, Session>>,
}

impl JsonFileSessionStore {
    /// Open (or create) the store at the given path.
    ///
    /// A missing file starts an empty store; a corrupt file is an error
    /// rather than silent data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let sessions = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| StoreError::Storage(format!("Could not read {}: {}", path.display(), e)))?;
            serde_json::from_str(&raw)
                .map_err(|e| StoreError::Storage(format!("Corrupt store {}: {}", path.display(), e)))?
        } else {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Storage(format!("Could not create {}: {}", parent.display(), e))
                })?;
            }
            HashMap::new()
        };

        debug!(
            "Opened session store at {} ({} identities)",
            path.display(),
            sessions.len()
        );

        Ok(Self {
            path,
            sessions: RwLock::new(sessions),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, sessions: &HashMap<String, Session>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(sessions)
            .map_err(|e| StoreError::Storage(format!("Could not serialize store: {}", e)))?;
        std::fs::write(&self.path, raw)
            .map_err(|e| StoreError::Storage(format!("Could not write {}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
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
        self.persist(&sessions)
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
        self.persist(&sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");

        {
            let store = JsonFileSessionStore::open(&path).unwrap();
            store
                .create("id1", "alice", Credential::digest("pw"))
                .await
                .unwrap();
            store
                .append_history("id1", HistoryEntry::new("hi", "Hello!"))
                .await
                .unwrap();
        }

        let reopened = JsonFileSessionStore::open(&path).unwrap();
        let session = reopened.find("id1").await.unwrap().unwrap();
        assert_eq!(session.display_name(), "alice");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].response, "Hello!");
    }

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::open(dir.path().join("fresh.json")).unwrap();
        assert!(store.find("anyone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileSessionStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
    }

    #[tokio::test]
    async fn test_create_conflict_does_not_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSessionStore::open(dir.path().join("sessions.json")).unwrap();

        store
            .create("id1", "alice", Credential::digest("pw"))
            .await
            .unwrap();
        store
            .append_history("id1", HistoryEntry::new("hi", "Hello!"))
            .await
            .unwrap();

        let err = store
            .create("id1", "alice", Credential::digest("pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));

        let session = store.find("id1").await.unwrap().unwrap();
        assert_eq!(session.history().len(), 1);
    }
}
