//! Session-scoped key-value storage for the high score.
//!
//! The engine only needs a tiny string store: read one key at startup,
//! write it back whenever the high score improves. Hosts back this with
//! whatever session-lifetime storage they have; [`MemoryStore`] is the
//! in-process implementation used by tests and headless hosts.

use std::collections::HashMap;

/// Storage key under which the session high score is kept.
pub const HIGH_SCORE_KEY: &str = "memory-high-score";

/// A session-lifetime string store.
pub trait SessionStore {
    /// Read a previously stored value, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-process [`SessionStore`] backed by a `HashMap`.
///
/// # Example
///
/// ```rust
/// use recall::{MemoryStore, SessionStore, HIGH_SCORE_KEY};
///
/// let mut store = MemoryStore::new();
/// assert!(store.get(HIGH_SCORE_KEY).is_none());
///
/// store.set(HIGH_SCORE_KEY, "7");
/// assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("7"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Read the stored high score, tolerating absence and garbage.
///
/// A missing or non-numeric value means "no high score yet" and yields 0;
/// it is never an error.
pub fn load_high_score<S: SessionStore>(store: &S) -> u32 {
    store
        .get(HIGH_SCORE_KEY)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_none_for_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get("anything").is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "12");
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("12"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "3");
        store.set(HIGH_SCORE_KEY, "9");
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("9"));
    }

    #[test]
    fn missing_high_score_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn non_numeric_high_score_defaults_to_zero() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "not-a-number");
        assert_eq!(load_high_score(&store), 0);
    }

    #[test]
    fn stored_high_score_is_parsed() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, "42");
        assert_eq!(load_high_score(&store), 42);
    }

    #[test]
    fn whitespace_around_stored_value_is_tolerated() {
        let mut store = MemoryStore::new();
        store.set(HIGH_SCORE_KEY, " 5 ");
        assert_eq!(load_high_score(&store), 5);
    }
}
