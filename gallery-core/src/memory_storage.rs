//! In-memory [`CountsStore`], keeping the serialized blob the way a browser key-value store would.

use crate::storage::CountsStore;
use crate::trending::TrendingCounts;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    /// Creates a store whose entry already holds `raw`, valid JSON or not.
    pub fn with_raw(raw: impl Into<String>) -> MemoryStorage {
        MemoryStorage {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl CountsStore for MemoryStorage {
    type Error = serde_json::Error;

    fn load(&self) -> Result<TrendingCounts, serde_json::Error> {
        match self.raw.borrow().as_deref() {
            Some(raw) => serde_json::from_str(raw),
            None => Ok(TrendingCounts::default()),
        }
    }

    fn save(&self, counts: &TrendingCounts) -> Result<(), serde_json::Error> {
        let serialized = serde_json::to_string(counts)?;
        *self.raw.borrow_mut() = Some(serialized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptId;

    #[test]
    fn test_empty_store_loads_empty_counts() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());
        assert!(storage.raw().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let mut counts = TrendingCounts::default();
        counts.increment(&PromptId::from(1));
        counts.increment(&PromptId::from(1));

        storage.save(&counts).unwrap();
        assert_eq!(Some("{\"1\":2}".to_string()), storage.raw());
        assert_eq!(counts, storage.load().unwrap());
    }

    #[test]
    fn test_corrupted_blob_is_an_error() {
        let storage = MemoryStorage::with_raw("{not json");
        assert!(storage.load().is_err());
    }
}
