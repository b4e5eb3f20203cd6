//! Persistence boundary for the theme preference.
//!
//! The stored representation is a JSON-serialized boolean under a single
//! well-known key. The key name must stay stable across releases: renaming it
//! silently resets every returning visitor to the default theme.

use thiserror::Error;

/// localStorage key holding the serialized preference. Matches the original
/// deployment so returning visitors keep their saved theme.
pub const STORAGE_KEY: &str = "darkMode";

/// Failures inside a store implementation. Never surfaced to the UI: reads
/// degrade to "no stored value", writes are best-effort.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("stored preference is not a boolean: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key-value persistence for the single dark-mode flag.
pub trait PreferenceStore {
    /// Previously stored preference, or `None` if never set, missing, or
    /// unreadable (all treated identically by the controller).
    fn get(&self) -> Option<bool>;

    /// Durably persists the preference, overwriting any prior value.
    /// Best-effort: failures are swallowed by the implementation.
    fn set(&mut self, value: bool);
}

/// Serializes a preference for storage.
pub fn encode(value: bool) -> String {
    // Booleans always serialize cleanly.
    serde_json::to_string(&value).unwrap_or_else(|_| value.to_string())
}

/// Parses a raw stored value back into a preference.
pub fn decode(raw: &str) -> Result<bool, StoreError> {
    Ok(serde_json::from_str(raw)?)
}

/// In-memory store for tests and non-browser targets. Holds the preference
/// only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a saved preference (a "returning visitor").
    pub fn with_saved(value: bool) -> Self {
        Self { value: Some(value) }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<bool> {
        self.value
    }

    fn set(&mut self, value: bool) {
        self.value = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_memory_store_set_overwrites() {
        let mut store = MemoryStore::new();
        store.set(true);
        assert_eq!(store.get(), Some(true));
        store.set(false);
        assert_eq!(store.get(), Some(false));
    }

    #[test]
    fn test_encode_matches_stored_layout() {
        assert_eq!(encode(true), "true");
        assert_eq!(encode(false), "false");
    }

    #[test]
    fn test_decode_round_trips() {
        assert!(decode(&encode(true)).unwrap());
        assert!(!decode(&encode(false)).unwrap());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not-a-bool").is_err());
        assert!(decode("").is_err());
        assert!(decode("1.5e").is_err());
    }
}
