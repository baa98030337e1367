//! In-process key-value store.

use std::collections::HashMap;

use super::Store;
use crate::error::StorageError;

/// `HashMap`-backed [`Store`], used for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`StorageError::WriteRejected`].
    pub fn reject_writes(&mut self, reject: bool) {
        self.reject_writes = reject;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Store for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn save_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_overwrites() {
        let mut store = MemoryStore::new();
        assert!(store.load_raw("k").unwrap().is_none());
        store.save_raw("k", "one").unwrap();
        store.save_raw("k", "two").unwrap();
        assert_eq!(store.load_raw("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejected_writes_leave_values_untouched() {
        let mut store = MemoryStore::new();
        store.save_raw("k", "one").unwrap();
        store.reject_writes(true);
        assert!(matches!(
            store.save_raw("k", "two"),
            Err(StorageError::WriteRejected(_))
        ));
        assert_eq!(store.load_raw("k").unwrap().as_deref(), Some("one"));
    }
}
