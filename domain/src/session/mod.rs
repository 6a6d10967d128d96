//! Session domain: persisted identities and per-channel identity state

pub mod channel;
pub mod entities;
pub mod repository;

pub use channel::ChannelSession;
pub use entities::{Credential, HistoryEntry, Session, derive_session_id, normalize_name};
pub use repository::{SessionStore, StoreError};
