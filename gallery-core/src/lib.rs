//! # gallery Core
//!
//! This crate provides the core functionality of the prompt gallery: a catalog of AI
//! image-generation prompts that can be filtered by category and free-text search, copied to the
//! clipboard, and ranked by how often they were copied.
//!
//! # Modules
//!
//! - [`catalog`] - Loading the static prompt catalog
//! - [`clipboard`] - Clipboard seam and fallback handling
//! - [`file_storage`] - File-based store for trending counts
//! - [`filter`] - Category and search filtering
//! - [`gallery`] - Session shell tying the pieces together
//! - [`memory_storage`] - In-memory store for trending counts
//! - [`prompt`] - Core prompt data structures
//! - [`storage`] - Counts store trait
//! - [`trending`] - Copy counting and trending ranking
//!
//! # Examples
//!
//! ```rust
//! use gallery_core::catalog::Catalog;
//! use gallery_core::filter::filter;
//! use gallery_core::memory_storage::MemoryStorage;
//! use gallery_core::prompt::{Category, PromptId};
//! use gallery_core::trending::TrendingTracker;
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"id": 1, "title": "Sunset", "description": "Sunset view", "promptText": "Golden hour",
//!      "category": "Men", "image": "/1.jpg"}
//! ]"#).expect("Failed to parse catalog");
//!
//! let visible = filter(catalog.prompts(), &Category::All, "sun");
//! assert_eq!(1, visible.len());
//!
//! let mut tracker = TrendingTracker::load(MemoryStorage::new());
//! tracker.record_copy(&PromptId::from(1));
//! let trending = tracker.rank_top(catalog.prompts(), 3).expect("Expected trending prompts");
//! assert_eq!("Sunset", trending[0].prompt.title);
//! ```

pub mod catalog;
pub mod clipboard;
pub mod file_storage;
pub mod filter;
pub mod gallery;
pub mod memory_storage;
pub mod prompt;
pub mod storage;
pub mod trending;
