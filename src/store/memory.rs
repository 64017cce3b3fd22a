//! In-memory storage implementation

use super::error::{Result, StoreError};
use super::record::Record;
use parking_lot::RwLock;
use serde::Serialize;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// Type alias for our hash map with SipHasher
type RecordMap = HashMap<String, Record, BuildHasherDefault<SipHasher13>>;

/// In-memory record store
///
/// A single map guarded by one reader/writer lock. `exists` and `read` take
/// the lock shared, `write` and `destroy` take it exclusive, and the lock is
/// only held across the map access itself. Share it between threads or tasks
/// behind an `Arc`.
pub struct MemoryStore {
    records: RwLock<RecordMap>,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            records: RwLock::new(HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            )),
        }
    }

    /// Check if a record is stored under `key`
    pub fn exists(&self, key: &str) -> bool {
        self.records.read().contains_key(key)
    }

    /// Get a copy of the record stored under `key`
    ///
    /// The lookup and the copy happen under one shared lock acquisition, so
    /// a concurrent `write` is either fully visible or not at all.
    pub fn read(&self, key: &str) -> Result<Record> {
        self.records
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Store `record` under `key`, replacing whatever was there (last writer wins)
    pub fn write(&self, key: impl Into<String>, record: Record) {
        let key = key.into();
        self.records.write().insert(key, record);
    }

    /// Remove the record under `key`; a missing key is a no-op
    pub fn destroy(&self, key: &str) {
        self.records.write().remove(key);
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Sorted snapshot of all keys (expensive operation, for debugging/admin)
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.records.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        let records = self.records.read();

        let (payload_bytes, record_bytes) = records
            .values()
            .fold((0, 0), |(payload, usage), record| {
                (payload + record.len(), usage + record.memory_usage())
            });
        let key_bytes: usize = records.keys().map(|k| k.len()).sum();

        StoreStats {
            keys: records.len(),
            payload_bytes,
            used_memory_bytes: key_bytes + record_bytes,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the memory store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub keys: usize,
    pub payload_bytes: usize,
    pub used_memory_bytes: usize,
}
