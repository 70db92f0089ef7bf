//! # Catalog
//!
//! Loads the static prompt catalog: a JSON array of [`Prompt`] objects read once per session
//! from a local file or fetched with a single HTTP GET.
//!
//! [`Catalog::load`] never fails. A missing file, an unreachable URL or a malformed payload is
//! logged and the session continues with an empty catalog.

use crate::prompt::{Prompt, PromptId};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Well-known location of the catalog resource.
pub const DEFAULT_CATALOG: &str = "prompts.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to fetch catalog from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(String),
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Path(PathBuf::from(DEFAULT_CATALOG))
    }
}

impl From<&str> for CatalogSource {
    fn from(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Url(location.to_string())
        } else {
            CatalogSource::Path(PathBuf::from(location))
        }
    }
}

impl FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CatalogSource::from(s))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Path(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

impl CatalogSource {
    /// Retrieves and parses the catalog.
    ///
    /// A single attempt is made; there is no retry and no timeout.
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        let payload = match self {
            CatalogSource::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.display().to_string(),
                        source,
                    })?
            }
            CatalogSource::Url(url) => fetch_url(url).await.map_err(|source| CatalogError::Http {
                url: url.clone(),
                source,
            })?,
        };

        Catalog::from_json(&payload)
    }
}

async fn fetch_url(url: &str) -> Result<String, reqwest::Error> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("gallery/", env!("CARGO_PKG_VERSION")))
        .build()?;

    client.get(url).send().await?.error_for_status()?.text().await
}

/// The full, unfiltered list of prompts in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    prompts: Vec<Prompt>,
}

impl Catalog {
    pub fn new(prompts: Vec<Prompt>) -> Catalog {
        Catalog { prompts }
    }

    /// Parses a JSON array of prompts.
    pub fn from_json(payload: &str) -> Result<Catalog, CatalogError> {
        let prompts: Vec<Prompt> = serde_json::from_str(payload)?;
        Ok(Catalog { prompts })
    }

    /// Loads the catalog from `source`, degrading to an empty catalog on any failure.
    pub async fn load(source: &CatalogSource) -> Catalog {
        match source.fetch().await {
            Ok(catalog) => {
                log::info!("Loaded {} prompts from {}", catalog.len(), source);
                catalog
            }
            Err(e) => {
                log::error!("Error loading prompts: {}", e);
                Catalog::default()
            }
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Finds a prompt by id. Returns the first match in source order.
    pub fn get(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG_JSON: &str = r#"[
        {
            "id": 1,
            "title": "Sunset",
            "description": "Sunset view",
            "promptText": "A man watching the sunset",
            "category": "Men",
            "image": "/images/1.jpg"
        },
        {
            "id": 2,
            "title": "Ocean",
            "description": "Waves at dawn",
            "promptText": "A woman by the ocean",
            "category": "Women",
            "image": "/images/2.jpg"
        }
    ]"#;

    #[test]
    fn test_from_json_preserves_source_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("Failed to parse catalog");
        assert_eq!(2, catalog.len());
        assert_eq!("Sunset", catalog.prompts()[0].title);
        assert_eq!("Ocean", catalog.prompts()[1].title);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Catalog::from_json("{ not a list");
        match result {
            Err(CatalogError::Malformed(_)) => {}
            other => panic!("Expected Malformed error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let prompt = catalog.get(&PromptId::from(2)).expect("Expected prompt 2");
        assert_eq!("Ocean", prompt.title);
        assert!(catalog.get(&PromptId::from("missing")).is_none());
    }

    #[test]
    fn test_source_from_str() {
        assert_eq!(
            CatalogSource::Url("https://example.com/prompts.json".to_string()),
            CatalogSource::from("https://example.com/prompts.json")
        );
        assert_eq!(
            CatalogSource::Path(PathBuf::from("data/prompts.json")),
            CatalogSource::from("data/prompts.json")
        );
        assert_eq!(
            CatalogSource::Path(PathBuf::from(DEFAULT_CATALOG)),
            CatalogSource::default()
        );
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompts.json");
        fs::write(&path, CATALOG_JSON).unwrap();

        let catalog = CatalogSource::Path(path).fetch().await.expect("Failed to fetch catalog");
        assert_eq!(2, catalog.len());
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = CatalogSource::Path(temp_dir.path().join("nope.json"));

        match source.fetch().await {
            Err(CatalogError::Io { path, .. }) => assert!(path.contains("nope.json")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_degrades_to_empty_on_malformed_payload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompts.json");
        fs::write(&path, "[{\"id\": 1}]").unwrap();

        let catalog = Catalog::load(&CatalogSource::Path(path)).await;
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_degrades_to_empty_on_unreachable_url() {
        let source = CatalogSource::Url("http://127.0.0.1:1/prompts.json".to_string());
        let catalog = Catalog::load(&source).await;
        assert!(catalog.is_empty());
    }
}
