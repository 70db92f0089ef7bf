use crate::constants::GALLERY_CLI;
use confy::ConfyError;
use gallery_core::catalog::{CatalogSource, DEFAULT_CATALOG};
use gallery_core::file_storage::FileStorage;
use gallery_core::trending::DEFAULT_TRENDING_SIZE;
use serde::{Deserialize, Serialize};
use std::env::home_dir;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryCliConfig {
    /// Path or URL of the prompt catalog.
    pub catalog: String,
    /// Directory holding the trending counts.
    pub storage_path: String,
    pub trending_size: usize,
}

impl Default for GalleryCliConfig {
    fn default() -> Self {
        let storage_path = home_dir()
            .map(|p| p.join("gallery").join("storage"))
            .unwrap_or_else(|| PathBuf::from("gallery/storage"));

        Self {
            catalog: DEFAULT_CATALOG.to_string(),
            storage_path: storage_path.display().to_string(),
            trending_size: DEFAULT_TRENDING_SIZE,
        }
    }
}

impl GalleryCliConfig {
    pub fn load() -> Result<GalleryCliConfig, ConfyError> {
        confy::load(GALLERY_CLI, None)
    }

    /// Applies command-line overrides on top of the stored config.
    pub fn with_overrides(mut self, catalog: Option<String>, storage_path: Option<String>) -> Self {
        if let Some(catalog) = catalog {
            self.catalog = catalog;
        }
        if let Some(storage_path) = storage_path {
            self.storage_path = storage_path;
        }
        self
    }

    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::from(self.catalog.as_str())
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage {
            base_path: PathBuf::from(&self.storage_path),
        }
    }
}
