//! Store-level persistence contract and the JSON key-value adapter.
//!
//! # Responsibility
//! - Load the whole `IdeaStore` at startup.
//! - Save the whole `IdeaStore` after every change (full overwrite).
//!
//! # Invariants
//! - The storage key is injected; adapters never hard-code it.
//! - `load_or_empty` never fails: missing, unreadable or unparseable data
//!   yields an empty store.

use super::kv_store::KeyValueStore;
use super::{StorageError, StorageResult};
use crate::model::idea_store::IdeaStore;
use log::{info, warn};

/// Default key of the persisted idea mapping.
pub const DEFAULT_STORAGE_KEY: &str = "ideaVaultIdeas";

/// Persistence backend for the idea store.
pub trait IdeaStorage {
    /// Reads the persisted store. A missing value is an empty store.
    fn load(&self) -> StorageResult<IdeaStore>;
    /// Replaces the persisted store with `store`.
    fn save(&mut self, store: &IdeaStore) -> StorageResult<()>;
}

/// `IdeaStorage` that keeps the JSON mapping under one key of a `KeyValueStore`.
pub struct KeyValueIdeaStorage<K: KeyValueStore> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> KeyValueIdeaStorage<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_default_key(backend: K) -> Self {
        Self::new(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut K {
        &mut self.backend
    }
}

impl<K: KeyValueStore> IdeaStorage for KeyValueIdeaStorage<K> {
    fn load(&self) -> StorageResult<IdeaStore> {
        match self.backend.get(&self.key)? {
            Some(raw) => decode_store(&raw),
            None => Ok(IdeaStore::new()),
        }
    }

    fn save(&mut self, store: &IdeaStore) -> StorageResult<()> {
        let encoded = encode_store(store)?;
        self.backend.set(&self.key, &encoded)
    }
}

/// Serializes the store to its JSON wire form.
pub fn encode_store(store: &IdeaStore) -> StorageResult<String> {
    serde_json::to_string(store).map_err(StorageError::Encode)
}

/// Parses the JSON wire form. No validation beyond a successful parse.
pub fn decode_store(raw: &str) -> StorageResult<IdeaStore> {
    serde_json::from_str(raw).map_err(StorageError::Decode)
}

/// Startup read path: failures downgrade to an empty store.
pub fn load_or_empty(storage: &impl IdeaStorage) -> IdeaStore {
    match storage.load() {
        Ok(store) => {
            info!(
                "event=store_load module=storage status=ok ideas={}",
                store.total()
            );
            store
        }
        Err(err) => {
            warn!(
                "event=store_load module=storage status=fallback error_code={} error={}",
                err.code(),
                err
            );
            IdeaStore::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load_or_empty, IdeaStorage, KeyValueIdeaStorage, DEFAULT_STORAGE_KEY};
    use crate::model::domain::Domain;
    use crate::model::idea::Idea;
    use crate::model::idea_store::IdeaStore;
    use crate::storage::kv_store::MemoryKeyValueStore;

    #[test]
    fn save_writes_json_under_injected_key() {
        let mut storage = KeyValueIdeaStorage::new(MemoryKeyValueStore::new(), "custom");
        let mut store = IdeaStore::new();
        store.append(Domain::Art, Idea::new("mural").unwrap());

        storage.save(&store).unwrap();

        assert_eq!(storage.backend().raw("custom"), Some(r#"{"Art":["mural"]}"#));
        assert_eq!(storage.backend().raw(DEFAULT_STORAGE_KEY), None);
    }

    #[test]
    fn load_missing_key_is_empty_store() {
        let storage = KeyValueIdeaStorage::with_default_key(MemoryKeyValueStore::new());
        assert_eq!(storage.load().unwrap(), IdeaStore::new());
    }

    #[test]
    fn load_or_empty_swallows_corrupt_value() {
        let backend = MemoryKeyValueStore::new().with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let storage = KeyValueIdeaStorage::with_default_key(backend);

        assert_eq!(storage.load().unwrap_err().code(), "storage_decode_failed");
        assert!(load_or_empty(&storage).is_empty());
    }

    #[test]
    fn load_or_empty_swallows_unreadable_storage() {
        let storage = KeyValueIdeaStorage::with_default_key(MemoryKeyValueStore::disabled());
        assert!(load_or_empty(&storage).is_empty());
    }
}
