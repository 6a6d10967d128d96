//! Domain layer for switchboard
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turn
//!
//! One request/response cycle through the router for a single input
//! message. Each turn gets a fresh [`TurnState`] that the handler
//! pipeline enriches with per-intent contributions.
//!
//! ## Intent
//!
//! A detected domain category for a message: greeting, weather, joke, or
//! account. A message may match several independent intents at once;
//! account intents are exclusive and own the whole turn.
//!
//! ## Identity
//!
//! A persisted user record addressable by a derived session key. The
//! active identity is tracked per calling channel, never process-wide.

pub mod intent;
pub mod session;
pub mod turn;
pub mod util;
pub mod weather;

// Re-export commonly used types
pub use intent::{AccountIntent, IntentKind, detect_account_intent, detect_intents};
pub use session::{
    channel::ChannelSession,
    entities::{Credential, HistoryEntry, Session, derive_session_id, normalize_name},
    repository::{SessionStore, StoreError},
};
pub use turn::TurnState;
pub use util::{capitalize_first, truncate_str};
pub use weather::{Location, WeatherReport, describe_weather_code};
