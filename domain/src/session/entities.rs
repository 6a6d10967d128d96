//! Session domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One `(message, response)` pair in a session's transcript (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub response: String,
    pub at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(message: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: response.into(),
            at: Utc::now(),
        }
    }
}

/// An opaque credential stored alongside an identity.
///
/// Only a SHA-256 digest is kept; verification is plain digest equality.
/// This is deliberately not a password-security scheme — the login flow
/// never asks for a credential — but keeping the digest behind this type
/// means a stricter scheme can replace it without touching the store
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential(String);

impl Credential {
    /// Digest a plaintext credential.
    pub fn digest(plaintext: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(plaintext.as_bytes());
        Self(hex_encode(&hasher.finalize()))
    }

    /// Check a plaintext credential against the stored digest.
    pub fn verify(&self, plaintext: &str) -> bool {
        Self::digest(plaintext) == *self
    }
}

/// A returning identity (Entity)
///
/// Owns its own append-only transcript. The session id is derived
/// deterministically from the normalized display name — it is an
/// addressing key, not a security credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: String,
    display_name: String,
    credential: Credential,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            credential,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Append one turn to the transcript. Entries are never removed.
    pub fn append_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Render the transcript the way the history query reports it.
    pub fn transcript(&self) -> String {
        if self.history.is_empty() {
            return "No history available.".to_string();
        }
        let mut out = String::new();
        for entry in &self.history {
            out.push_str(&format!("User: {}\nBot: {}\n", entry.message, entry.response));
        }
        out
    }
}

/// Normalize a display name for identity derivation: trim + lower-case.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Derive a stable session id from a normalized display name.
///
/// SHA-256 of the normalized name, hex, truncated to 16 characters.
/// Deterministic so the same name always addresses the same record.
pub fn derive_session_id(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_name(name).as_bytes());
    let mut id = hex_encode(&hasher.finalize());
    id.truncate(16);
    id
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_deterministic() {
        assert_eq!(derive_session_id("alice"), derive_session_id("alice"));
        assert_eq!(derive_session_id("  Alice "), derive_session_id("alice"));
        assert_ne!(derive_session_id("alice"), derive_session_id("bob"));
    }

    #[test]
    fn test_session_id_shape() {
        let id = derive_session_id("alice");
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_credential_digest_and_verify() {
        let cred = Credential::digest("default_password");
        assert!(cred.verify("default_password"));
        assert!(!cred.verify("wrong"));
    }

    #[test]
    fn test_history_is_append_only_and_ordered() {
        let mut session = Session::new("id1", "alice", Credential::digest("pw"));
        session.append_history(HistoryEntry::new("hello", "Hello!"));
        session.append_history(HistoryEntry::new("tell me a joke", "An impasta!"));

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].message, "hello");
        assert_eq!(session.history()[1].message, "tell me a joke");
    }

    #[test]
    fn test_session_serde_round_trip() {
        let mut session = Session::new(
            derive_session_id("alice"),
            "alice",
            Credential::digest("default_password"),
        );
        session.append_history(HistoryEntry::new("hello", "Hello!"));

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id(), session.id());
        assert_eq!(restored.display_name(), "alice");
        assert_eq!(restored.history(), session.history());
        assert!(restored.credential().verify("default_password"));
    }

    #[test]
    fn test_transcript_rendering() {
        let mut session = Session::new("id1", "alice", Credential::digest("pw"));
        assert_eq!(session.transcript(), "No history available.");

        session.append_history(HistoryEntry::new("hi", "Hello!"));
        assert_eq!(session.transcript(), "User: hi\nBot: Hello!\n");
    }
}
