//! Account handler: signup, login, identity, and history turns.
//!
//! Unlike the domain handlers, the account handler fully owns its turn —
//! when an account trigger matches, the pipeline's other contributions
//! are discarded and this handler's response is the final response.
//!
//! Identity is tracked per calling channel via [`ChannelSession`], never
//! in process-wide state. `AlreadyExists`/`NotFound` from the store are
//! expected outcomes surfaced as ordinary response text.

use std::sync::Arc;
use switchboard_domain::{
    AccountIntent, ChannelSession, Credential, SessionStore, StoreError, capitalize_first,
    derive_session_id,
};
use tracing::{debug, warn};

/// Placeholder credential — signup never asks for a password.
const PLACEHOLDER_CREDENTIAL: &str = "default_password";

/// Fixed line when the store itself is unreachable. Store faults never
/// abort the turn.
pub const STORE_UNAVAILABLE: &str =
    "Sorry, I couldn't reach the account store. Please try again later.";

/// Handler owning all account-intent turns.
pub struct AccountHandler {
    store: Arc<dyn SessionStore>,
}

impl AccountHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Pure trigger match; see [`switchboard_domain::detect_account_intent`].
    pub fn detect(message: &str) -> Option<AccountIntent> {
        switchboard_domain::detect_account_intent(message)
    }

    /// Produce the full response for an account turn, updating the
    /// channel's identity pointer where the transition calls for it.
    pub async fn respond(&self, intent: AccountIntent, channel: &mut ChannelSession) -> String {
        match intent {
            AccountIntent::SignUp { name } => self.sign_up(&name, channel).await,
            AccountIntent::LogIn => self.log_in(channel).await,
            AccountIntent::IdentityQuery => self.identity_query(channel).await,
            AccountIntent::HistoryQuery => self.history_query(channel).await,
        }
    }

    /// Anonymous -> Identified. The id is derived from the normalized
    /// name; on conflict the channel pointer stays as it was.
    async fn sign_up(&self, name: &str, channel: &mut ChannelSession) -> String {
        if name.is_empty() {
            return "You need to tell me your name. Try: 'My name is [Your Name]'.".to_string();
        }

        let id = derive_session_id(name);
        match self
            .store
            .create(&id, name, Credential::digest(PLACEHOLDER_CREDENTIAL))
            .await
        {
            Ok(()) => {
                debug!("Signup created identity {}", id);
                channel.identify(id);
                format!("Signup successful! Welcome, {}.", capitalize_first(name))
            }
            Err(StoreError::AlreadyExists(_)) => {
                "This user already exists. Please log in.".to_string()
            }
            Err(e) => {
                warn!("Signup failed against store: {}", e);
                STORE_UNAVAILABLE.to_string()
            }
        }
    }

    /// Re-validates that the channel's last-established identity still
    /// exists. No credential is asked for; presence in the store is
    /// sufficient.
    async fn log_in(&self, channel: &mut ChannelSession) -> String {
        let Some(id) = channel.current() else {
            return "You need to provide your name to log in. Try: 'My name is [Your Name]'."
                .to_string();
        };

        match self.store.find(id).await {
            Ok(Some(session)) => format!(
                "Hi {}! You're now logged in.",
                capitalize_first(session.display_name())
            ),
            Ok(None) => "I couldn't find your account. Please sign up first.".to_string(),
            Err(e) => {
                warn!("Login lookup failed: {}", e);
                STORE_UNAVAILABLE.to_string()
            }
        }
    }

    async fn identity_query(&self, channel: &ChannelSession) -> String {
        let Some(id) = channel.current() else {
            return "You are not logged in. Please sign up or log in first.".to_string();
        };

        match self.store.find(id).await {
            Ok(Some(session)) => {
                format!("Your name is {}.", capitalize_first(session.display_name()))
            }
            Ok(None) => "I don't have your name stored. Please sign up first.".to_string(),
            Err(e) => {
                warn!("Identity lookup failed: {}", e);
                STORE_UNAVAILABLE.to_string()
            }
        }
    }

    /// Returns the transcript of turns persisted *before* this one; the
    /// history turn itself is appended afterwards by the orchestrator.
    async fn history_query(&self, channel: &ChannelSession) -> String {
        let Some(id) = channel.current() else {
            return "No session found. Please log in first.".to_string();
        };

        match self.store.find(id).await {
            Ok(Some(session)) => session.transcript(),
            Ok(None) => "No history available.".to_string(),
            Err(e) => {
                warn!("History lookup failed: {}", e);
                STORE_UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use switchboard_domain::{HistoryEntry, Session};

    // ==================== Test Mocks ====================

    /// Minimal in-memory store for handler tests.
    struct MapStore {
        sessions: Mutex<HashMap<String, Session>>,
    }

    impl MapStore {
        fn new() -> Self {
            Self {
                sessions: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl SessionStore for MapStore {
        async fn create(
            &self,
            id: &str,
            display_name: &str,
            credential: Credential,
        ) -> Result<(), StoreError> {
            let mut sessions = self.sessions.lock().unwrap();
            if sessions.contains_key(id) {
                return Err(StoreError::AlreadyExists(id.to_string()));
            }
            sessions.insert(id.to_string(), Session::new(id, display_name, credential));
            Ok(())
        }

        async fn find(&self, id: &str) -> Result<Option<Session>, StoreError> {
            Ok(self.sessions.lock().unwrap().get(id).cloned())
        }

        async fn append_history(&self, id: &str, entry: HistoryEntry) -> Result<(), StoreError> {
            let mut sessions = self.sessions.lock().unwrap();
            let session = sessions
                .get_mut(id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            session.append_history(entry);
            Ok(())
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_signup_identifies_channel() {
        let handler = AccountHandler::new(Arc::new(MapStore::new()));
        let mut channel = ChannelSession::new();

        let response = handler
            .respond(
                AccountIntent::SignUp {
                    name: "alice".to_string(),
                },
                &mut channel,
            )
            .await;

        assert_eq!(response, "Signup successful! Welcome, Alice.");
        assert_eq!(channel.current(), Some(derive_session_id("alice").as_str()));
    }

    #[tokio::test]
    async fn test_signup_conflict_leaves_channel_anonymous() {
        let store = Arc::new(MapStore::new());
        let handler = AccountHandler::new(store);

        let mut first = ChannelSession::new();
        handler
            .respond(
                AccountIntent::SignUp {
                    name: "alice".to_string(),
                },
                &mut first,
            )
            .await;

        let mut second = ChannelSession::new();
        let response = handler
            .respond(
                AccountIntent::SignUp {
                    name: "alice".to_string(),
                },
                &mut second,
            )
            .await;

        assert_eq!(response, "This user already exists. Please log in.");
        assert!(second.is_anonymous());
    }

    #[tokio::test]
    async fn test_signup_empty_name_is_a_usage_hint() {
        let handler = AccountHandler::new(Arc::new(MapStore::new()));
        let mut channel = ChannelSession::new();

        let response = handler
            .respond(
                AccountIntent::SignUp {
                    name: String::new(),
                },
                &mut channel,
            )
            .await;

        assert!(response.contains("My name is"));
        assert!(channel.is_anonymous());
    }

    #[tokio::test]
    async fn test_login_welcomes_back_identified_channel() {
        let handler = AccountHandler::new(Arc::new(MapStore::new()));
        let mut channel = ChannelSession::new();
        handler
            .respond(
                AccountIntent::SignUp {
                    name: "bob".to_string(),
                },
                &mut channel,
            )
            .await;

        let response = handler.respond(AccountIntent::LogIn, &mut channel).await;
        assert_eq!(response, "Hi Bob! You're now logged in.");
    }

    #[tokio::test]
    async fn test_login_without_identity() {
        let handler = AccountHandler::new(Arc::new(MapStore::new()));
        let mut channel = ChannelSession::new();

        let response = handler.respond(AccountIntent::LogIn, &mut channel).await;
        assert_eq!(
            response,
            "You need to provide your name to log in. Try: 'My name is [Your Name]'."
        );
    }

    #[tokio::test]
    async fn test_identity_query_round_trip() {
        let handler = AccountHandler::new(Arc::new(MapStore::new()));
        let mut channel = ChannelSession::new();

        let anonymous = handler
            .respond(AccountIntent::IdentityQuery, &mut channel)
            .await;
        assert_eq!(anonymous, "You are not logged in. Please sign up or log in first.");

        handler
            .respond(
                AccountIntent::SignUp {
                    name: "carol".to_string(),
                },
                &mut channel,
            )
            .await;
        let identified = handler
            .respond(AccountIntent::IdentityQuery, &mut channel)
            .await;
        assert_eq!(identified, "Your name is Carol.");
    }

    #[tokio::test]
    async fn test_history_query_without_session() {
        let handler = AccountHandler::new(Arc::new(MapStore::new()));
        let mut channel = ChannelSession::new();

        let response = handler
            .respond(AccountIntent::HistoryQuery, &mut channel)
            .await;
        assert_eq!(response, "No session found. Please log in first.");
    }
}
