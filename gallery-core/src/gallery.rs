//! # Gallery
//!
//! The stateful shell around the pure filter and ranking functions. A [`Gallery`] owns the
//! loaded catalog, the transient filter inputs and the trending tracker, and handles the three
//! kinds of session events one at a time: catalog load, filter input changes and copy actions.

use crate::catalog::{Catalog, CatalogSource};
use crate::clipboard::{Clipboard, ClipboardError};
use crate::filter::{FilterState, FilterSummary};
use crate::prompt::{Category, Prompt, PromptId};
use crate::storage::CountsStore;
use crate::trending::{TrendingCounts, TrendingEntry, TrendingTracker};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Prompt not found: {0}")]
    PromptNotFound(PromptId),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

pub struct Gallery<S: CountsStore> {
    catalog: Catalog,
    filter: FilterState,
    tracker: TrendingTracker<S>,
}

impl<S: CountsStore> Gallery<S> {
    pub fn new(catalog: Catalog, store: S) -> Gallery<S> {
        Gallery {
            catalog,
            filter: FilterState::default(),
            tracker: TrendingTracker::load(store),
        }
    }

    /// Loads the catalog from `source` and the counts from `store`.
    ///
    /// Neither step fails: an unavailable catalog or a corrupted store degrade to empty.
    pub async fn open(source: &CatalogSource, store: S) -> Gallery<S> {
        let catalog = Catalog::load(source).await;
        Gallery::new(catalog, store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn counts(&self) -> &TrendingCounts {
        self.tracker.counts()
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.filter.search_term = search_term.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.filter.category = category;
    }

    pub fn visible(&self) -> Vec<&Prompt> {
        self.filter.apply(&self.catalog)
    }

    pub fn summary(&self) -> FilterSummary {
        self.filter
            .summarize(self.visible().len(), self.catalog.len())
    }

    pub fn trending(&self, n: usize) -> Option<Vec<TrendingEntry<'_>>> {
        self.tracker.rank_top(self.catalog.prompts(), n)
    }

    /// Copies the prompt's text and counts the copy.
    pub fn copy<C: Clipboard + ?Sized>(
        &mut self,
        id: &PromptId,
        clipboard: &mut C,
    ) -> Result<u64, GalleryError> {
        let prompt = self
            .catalog
            .get(id)
            .ok_or_else(|| GalleryError::PromptNotFound(id.clone()))?;

        let counts = self.tracker.copy_and_record(prompt, clipboard)?;
        Ok(counts.get(id))
    }
}
