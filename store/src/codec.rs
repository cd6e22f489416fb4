//! # Serialization codec over a key/value text medium
//!
//! Every collection in the entity store is persisted as one JSON document
//! under one fixed key. [`KeyValueStore`] is the seam between the store logic
//! and the actual medium: an in-memory map ([`crate::MemoryStore`]) or the
//! filesystem ([`crate::FileStore`]).
//!
//! The codec is deliberately forgiving on the read side: an absent key or a
//! document that no longer parses yields the caller-supplied default instead
//! of an error. Losing a malformed collection to its default is preferable to
//! blocking the whole application, so corruption is logged and swallowed here
//! and never reaches a caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Abstract key/value text store the entity collections persist through.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Load a collection, falling back to `default` when the key is absent or
/// the stored document is unreadable.
pub fn load<S: KeyValueStore, T: DeserializeOwned>(kv: &S, key: &str, default: T) -> T {
    let Some(raw) = kv.read(key) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "discarding unreadable collection");
            default
        }
    }
}

/// Persist a collection snapshot, overwriting any prior value. Best-effort:
/// failures are logged, not propagated.
pub fn store<S: KeyValueStore, T: Serialize>(kv: &S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => kv.write(key, &raw),
        Err(err) => tracing::warn!(key, %err, "failed to serialize collection"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_roundtrip_is_structurally_identical() {
        let kv = MemoryStore::new();
        let value = vec!["a".to_string(), "b".to_string()];

        store(&kv, "k", &value);
        let loaded: Vec<String> = load(&kv, "k", Vec::new());

        assert_eq!(loaded, value);
    }

    #[test]
    fn test_absent_key_returns_default() {
        let kv = MemoryStore::new();
        let loaded: Vec<u32> = load(&kv, "missing", vec![7]);
        assert_eq!(loaded, vec![7]);
    }

    #[test]
    fn test_corrupt_document_returns_default() {
        let kv = MemoryStore::new();
        kv.write("k", "{not json");

        let loaded: Vec<u32> = load(&kv, "k", Vec::new());
        assert!(loaded.is_empty());
    }
}
