//! Intent detection — fixed keyword vocabularies per handler kind.
//!
//! Greeting/Weather/Joke use word-boundary, case-insensitive matching and
//! are independent: a message can carry several of them at once. Account
//! triggers are exact substring matches and are exclusive — an account
//! turn short-circuits the pipeline.
//!
//! The vocabularies are design data and must not drift; tests pin them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Greeting vocabulary (word-boundary, case-insensitive)
pub const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "how are you",
    "greetings",
    "salutations",
    "what's up",
    "howdy",
];

/// Weather vocabulary (word-boundary, case-insensitive)
pub const WEATHER_KEYWORDS: &[&str] = &["weather", "temperature", "forecast"];

/// Joke vocabulary (word-boundary, case-insensitive)
pub const JOKE_KEYWORDS: &[&str] = &["joke", "funny", "laugh"];

static GREETING_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(GREETING_KEYWORDS));
static WEATHER_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(WEATHER_KEYWORDS));
static JOKE_PATTERN: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(JOKE_KEYWORDS));

/// Build a case-insensitive word-boundary alternation over a fixed
/// vocabulary. The vocabularies are compile-time constants, so the
/// pattern is always valid.
fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .unwrap_or_else(|e| panic!("invalid intent vocabulary pattern: {e}"))
}

/// A detected domain category for a message.
///
/// Variant order is the fixed aggregation order: contributions are
/// concatenated Greeting, Joke, Weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntentKind {
    Greeting,
    Joke,
    Weather,
    Account,
    Unknown,
}

impl IntentKind {
    /// The domain handler kinds, in aggregation order.
    ///
    /// Account is excluded — it short-circuits instead of aggregating.
    pub fn pipeline_order() -> [IntentKind; 3] {
        [IntentKind::Greeting, IntentKind::Joke, IntentKind::Weather]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Greeting => "greeting",
            IntentKind::Joke => "joke",
            IntentKind::Weather => "weather",
            IntentKind::Account => "account",
            IntentKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect which independent handler kinds a message matches.
///
/// Returns a set because Greeting/Joke/Weather are independent — a
/// message may match zero, one, or all of them. Account intents are not
/// reported here; see [`detect_account_intent`].
pub fn detect_intents(message: &str) -> BTreeSet<IntentKind> {
    let mut matched = BTreeSet::new();
    if GREETING_PATTERN.is_match(message) {
        matched.insert(IntentKind::Greeting);
    }
    if JOKE_PATTERN.is_match(message) {
        matched.insert(IntentKind::Joke);
    }
    if WEATHER_PATTERN.is_match(message) {
        matched.insert(IntentKind::Weather);
    }
    matched
}

/// An account/session operation extracted from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountIntent {
    /// "my name is {name}" — name is trimmed and lower-cased
    SignUp { name: String },
    /// "log me in"
    LogIn,
    /// "what is my name"
    IdentityQuery,
    /// "show my history"
    HistoryQuery,
}

/// Detect an account trigger in the message (exact substring match,
/// case-insensitive).
///
/// Signup wins over the other triggers when several substrings are
/// present. The signup name is everything after the last occurrence of
/// the trigger.
pub fn detect_account_intent(message: &str) -> Option<AccountIntent> {
    let lowered = message.trim().to_lowercase();

    if let Some((_, rest)) = lowered.rsplit_once("my name is") {
        // "what is my name" contains "my name" but never "my name is",
        // so the identity query cannot be misread as a signup.
        return Some(AccountIntent::SignUp {
            name: rest.trim().to_string(),
        });
    }
    if lowered.contains("log me in") {
        return Some(AccountIntent::LogIn);
    }
    if lowered.contains("what is my name") {
        return Some(AccountIntent::IdentityQuery);
    }
    if lowered.contains("show my history") {
        return Some(AccountIntent::HistoryQuery);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_keywords_match_word_boundary() {
        assert!(detect_intents("hello there").contains(&IntentKind::Greeting));
        assert!(detect_intents("Good MORNING!").contains(&IntentKind::Greeting));
        assert!(detect_intents("what's up?").contains(&IntentKind::Greeting));
        // "hi" inside another word must not match
        assert!(detect_intents("this is a test").is_empty());
        assert!(detect_intents("the highway is long").is_empty());
    }

    #[test]
    fn test_weather_and_joke_keywords() {
        assert!(detect_intents("what's the WEATHER like").contains(&IntentKind::Weather));
        assert!(detect_intents("temperature today?").contains(&IntentKind::Weather));
        assert!(detect_intents("tell me a joke").contains(&IntentKind::Joke));
        assert!(detect_intents("something funny").contains(&IntentKind::Joke));
        // "joke" inside another word must not match
        assert!(!detect_intents("jokester").contains(&IntentKind::Joke));
    }

    #[test]
    fn test_multi_intent_message() {
        let matched = detect_intents("hi, tell me a joke about the weather forecast");
        assert!(matched.contains(&IntentKind::Greeting));
        assert!(matched.contains(&IntentKind::Joke));
        assert!(matched.contains(&IntentKind::Weather));
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_intent_set_iterates_in_aggregation_order() {
        let matched = detect_intents("weather joke hello");
        let order: Vec<_> = matched.into_iter().collect();
        assert_eq!(
            order,
            vec![IntentKind::Greeting, IntentKind::Joke, IntentKind::Weather]
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(IntentKind::Greeting.to_string(), "greeting");
        assert_eq!(IntentKind::Joke.to_string(), "joke");
        assert_eq!(IntentKind::Weather.to_string(), "weather");
        assert_eq!(IntentKind::Account.to_string(), "account");
        assert_eq!(IntentKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_signup_trigger_extracts_name() {
        assert_eq!(
            detect_account_intent("My name is Alice"),
            Some(AccountIntent::SignUp {
                name: "alice".to_string()
            })
        );
        assert_eq!(
            detect_account_intent("hello, my name is   Bob Smith  "),
            Some(AccountIntent::SignUp {
                name: "bob smith".to_string()
            })
        );
    }

    #[test]
    fn test_signup_with_empty_name() {
        assert_eq!(
            detect_account_intent("my name is"),
            Some(AccountIntent::SignUp {
                name: String::new()
            })
        );
    }

    #[test]
    fn test_other_account_triggers() {
        assert_eq!(detect_account_intent("log me in"), Some(AccountIntent::LogIn));
        assert_eq!(
            detect_account_intent("What is my name?"),
            Some(AccountIntent::IdentityQuery)
        );
        assert_eq!(
            detect_account_intent("please show my history"),
            Some(AccountIntent::HistoryQuery)
        );
    }

    #[test]
    fn test_identity_query_is_not_signup() {
        // "what is my name" must not be parsed as a signup
        assert_eq!(
            detect_account_intent("what is my name"),
            Some(AccountIntent::IdentityQuery)
        );
    }

    #[test]
    fn test_no_account_trigger() {
        assert_eq!(detect_account_intent("tell me a joke"), None);
        assert_eq!(detect_account_intent("my name has an e in it"), None);
    }
}
