//! # File Storage
//!
//! This module provides a filesystem-backed key-value store for the trending counts.
//! Each entry is a JSON file named after its key inside a base directory, so the counts live in
//! `<base_path>/trendingCounts.json`.
//!
//! # Examples
//!
//! ```rust
//! use gallery_core::file_storage::FileStorage;
//! use gallery_core::prompt::PromptId;
//! use gallery_core::storage::CountsStore;
//! use gallery_core::trending::TrendingCounts;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let storage = FileStorage {
//!     base_path: temp_dir.path().to_path_buf(),
//! };
//!
//! let mut counts = TrendingCounts::default();
//! counts.increment(&PromptId::from(1));
//! storage.save(&counts).expect("Failed to save counts");
//!
//! assert_eq!(1, storage.load().unwrap().get(&PromptId::from(1)));
//! ```

use crate::storage::{CountsStore, TRENDING_COUNTS_KEY};
use crate::trending::TrendingCounts;
use std::fs::create_dir_all;
use std::io::Write;
use std::path::PathBuf;
use std::{fs, io};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),
    #[error("Failed to persist {path}: {source}")]
    PersistError {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// A local file storage for trending counts.
pub struct FileStorage {
    /// The base directory where store entries are kept.
    pub base_path: PathBuf,
}

impl CountsStore for FileStorage {
    type Error = StorageError;

    /// Loads the counts mapping.
    ///
    /// # Returns
    ///
    /// * `Ok(TrendingCounts)` - The persisted mapping, or an empty one if nothing was saved yet.
    /// * `StorageError::SerializationError` - If the entry exists but is not a valid mapping.
    fn load(&self) -> Result<TrendingCounts, StorageError> {
        let file_path = self.entry_path(TRENDING_COUNTS_KEY);
        if !file_path.exists() {
            return Ok(TrendingCounts::default());
        }

        let content = fs::read_to_string(file_path)?;
        let counts = serde_json::from_str(&content)?;
        Ok(counts)
    }

    /// Saves the counts mapping, replacing the previous entry.
    ///
    /// If `base_path` doesn't exist, it is created first. The entry is written to a temporary
    /// file in the same directory and then renamed over the old one.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the mapping is saved correctly.
    /// * `StorageError::InvalidBasePath` - If `base_path` exists but is not a directory.
    fn save(&self, counts: &TrendingCounts) -> Result<(), StorageError> {
        self.ensure_base_directory_exists()?;

        let serialized = serde_json::to_string(counts)?;
        let file_path = self.entry_path(TRENDING_COUNTS_KEY);

        let mut temp_file = NamedTempFile::new_in(&self.base_path)?;
        temp_file.write_all(serialized.as_bytes())?;
        temp_file
            .persist(&file_path)
            .map_err(|e| StorageError::PersistError {
                path: file_path.display().to_string(),
                source: e.error,
            })?;
        Ok(())
    }
}

impl FileStorage {
    pub fn ensure_base_directory_exists(&self) -> Result<(), StorageError> {
        if !self.base_path.exists() {
            create_dir_all(&self.base_path)?;
        } else if !self.base_path.is_dir() {
            return Err(StorageError::InvalidBasePath(
                self.base_path.display().to_string(),
            ));
        }
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptId;
    use std::fs;
    use tempfile::TempDir;

    fn counts_of(entries: &[(&str, u64)]) -> TrendingCounts {
        let mut counts = TrendingCounts::default();
        for (id, times) in entries {
            for _ in 0..*times {
                counts.increment(&PromptId::from(*id));
            }
        }
        counts
    }

    #[test]
    fn test_load_missing_entry_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage {
            base_path: temp_dir.path().to_path_buf(),
        };

        let counts = storage.load().expect("Failed to load counts");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_save_writes_json_object() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage {
            base_path: temp_dir.path().to_path_buf(),
        };

        storage.save(&counts_of(&[("1", 2), ("2", 1)])).unwrap();

        let file_path = temp_dir.path().join("trendingCounts.json");
        assert!(file_path.exists());
        let content = fs::read_to_string(file_path).unwrap();
        assert_eq!("{\"1\":2,\"2\":1}", content);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage {
            base_path: temp_dir.path().to_path_buf(),
        };

        let counts = counts_of(&[("a", 3), ("b", 1)]);
        storage.save(&counts).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(counts, loaded);
        assert_eq!(3, loaded.get(&PromptId::from("a")));
    }

    #[test]
    fn test_save_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage {
            base_path: temp_dir.path().to_path_buf(),
        };

        storage.save(&counts_of(&[("1", 1)])).unwrap();
        storage.save(&counts_of(&[("1", 5)])).unwrap();

        assert_eq!(5, storage.load().unwrap().get(&PromptId::from(1)));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage_dir = temp_dir.path().join("storage");
        let storage = FileStorage {
            base_path: storage_dir.clone(),
        };

        assert!(!storage_dir.exists());
        storage.save(&counts_of(&[("1", 1)])).unwrap();

        assert!(storage_dir.exists());
        assert!(storage_dir.is_dir());
    }

    #[test]
    fn test_save_fails_when_base_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not_a_directory");
        fs::write(&file_path, "some content").unwrap();

        let storage = FileStorage {
            base_path: file_path,
        };

        match storage.save(&counts_of(&[("1", 1)])) {
            Err(StorageError::InvalidBasePath(path)) => assert!(path.contains("not_a_directory")),
            other => panic!("Expected InvalidBasePath error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_corrupted_entry() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("trendingCounts.json"), "{\"1\": ").unwrap();

        let storage = FileStorage {
            base_path: temp_dir.path().to_path_buf(),
        };

        match storage.load() {
            Err(StorageError::SerializationError(_)) => {}
            other => panic!("Expected SerializationError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_negative_counts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("trendingCounts.json"), "{\"1\": -4}").unwrap();

        let storage = FileStorage {
            base_path: temp_dir.path().to_path_buf(),
        };

        assert!(storage.load().is_err());
    }
}
