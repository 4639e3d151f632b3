//!
//! Byte-oriented key/value substrate underneath the keeper.
//!
//! The keeper only needs atomic single-key reads and writes. Whatever the
//! surrounding state machine provides (a transactional chain store, a cache
//! branch, an in-memory map) plugs in through `KvStore`.

use std::collections::BTreeMap;

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Keyed storage with atomic single-key semantics.
pub trait KvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    fn has(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError>;
}

/// Ordered in-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in byte order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.keys().map(Vec::as_slice)
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn has(&self, key: &[u8]) -> Result<bool, StoreError> {
        Ok(self.entries.contains_key(key))
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(key.to_vec(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set(b"k", b"v".to_vec()).unwrap();
        assert_eq!(store.get(b"k").unwrap(), Some(b"v".to_vec()));
        assert!(store.has(b"k").unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(b"absent").unwrap(), None);
        assert!(!store.has(b"absent").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn set_overwrites() {
        let mut store = MemoryStore::new();
        store.set(b"k", b"one".to_vec()).unwrap();
        store.set(b"k", b"two".to_vec()).unwrap();
        assert_eq!(store.get(b"k").unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn keys_are_byte_ordered() {
        let mut store = MemoryStore::new();
        store.set(b"b", Vec::new()).unwrap();
        store.set(b"a", Vec::new()).unwrap();
        let keys: Vec<&[u8]> = store.keys().collect();
        assert_eq!(keys, vec![b"a".as_slice(), b"b".as_slice()]);
    }
}
