//! # Trending
//!
//! Copy counting and the "trending" ranking derived from it.
//!
//! [`TrendingCounts`] is the only state that outlives a session. Counts only ever grow: every
//! successful copy adds exactly one, and the complete mapping is written back to the
//! [`CountsStore`] before [`TrendingTracker::record_copy`] returns.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::prompt::{Prompt, PromptId};
use crate::storage::CountsStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of prompts shown in the trending section.
pub const DEFAULT_TRENDING_SIZE: usize = 3;

/// Copy count per prompt id.
///
/// Entries for ids missing from the current catalog are kept as they are; ranking only walks the
/// catalog, so they are never shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendingCounts(BTreeMap<PromptId, u64>);

impl TrendingCounts {
    pub fn get(&self, id: &PromptId) -> u64 {
        self.0.get(id).copied().unwrap_or(0)
    }

    /// Adds one copy to `id` and returns its new count.
    pub fn increment(&mut self, id: &PromptId) -> u64 {
        let count = self.0.entry(id.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PromptId, u64)> {
        self.0.iter().map(|(id, count)| (id, *count))
    }
}

/// One row of the trending section.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendingEntry<'a> {
    /// 1-based position.
    pub rank: usize,
    pub prompt: &'a Prompt,
    pub count: u64,
}

/// Ranks the catalog by copy count and keeps at most `n` prompts that were copied at least once.
///
/// Prompts with equal counts keep their catalog order. Returns `None` when there is nothing to
/// show, so the caller can skip the trending section entirely.
pub fn rank_top<'a>(
    prompts: &'a [Prompt],
    counts: &TrendingCounts,
    n: usize,
) -> Option<Vec<TrendingEntry<'a>>> {
    let mut ranked: Vec<(&Prompt, u64)> = prompts.iter().map(|p| (p, counts.get(&p.id))).collect();

    // sort_by is stable: ties stay in catalog order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let entries: Vec<TrendingEntry> = ranked
        .into_iter()
        .take(n)
        .filter(|(_, count)| *count > 0)
        .enumerate()
        .map(|(i, (prompt, count))| TrendingEntry {
            rank: i + 1,
            prompt,
            count,
        })
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Holds the current counts and writes every change through to a [`CountsStore`].
///
/// Mutation goes through `&mut self`, so each read-modify-persist cycle completes before the next
/// one can start.
pub struct TrendingTracker<S: CountsStore> {
    store: S,
    counts: TrendingCounts,
}

impl<S: CountsStore> TrendingTracker<S> {
    /// Creates a tracker from whatever `store` currently holds.
    ///
    /// An unreadable or corrupted entry is logged and the tracker starts empty.
    pub fn load(store: S) -> TrendingTracker<S> {
        let counts = Self::read(&store);
        TrendingTracker { store, counts }
    }

    /// Re-reads the store, replacing the in-memory mapping.
    pub fn reload(&mut self) {
        self.counts = Self::read(&self.store);
    }

    fn read(store: &S) -> TrendingCounts {
        match store.load() {
            Ok(counts) => counts,
            Err(e) => {
                log::warn!("Failed to load trending counts, starting empty: {}", e);
                TrendingCounts::default()
            }
        }
    }

    pub fn counts(&self) -> &TrendingCounts {
        &self.counts
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records one copy of `id` and persists the full mapping.
    ///
    /// Repeated calls are never coalesced. A failed save is logged; the in-memory count still
    /// reflects the copy.
    pub fn record_copy(&mut self, id: &PromptId) -> &TrendingCounts {
        let count = self.counts.increment(id);
        log::debug!("Prompt {} copied, count is now {}", id, count);

        if let Err(e) = self.store.save(&self.counts) {
            log::error!("Failed to persist trending counts: {}", e);
        }
        &self.counts
    }

    /// Copies the prompt text to `clipboard` and records the copy only if the write succeeded.
    pub fn copy_and_record<C: Clipboard + ?Sized>(
        &mut self,
        prompt: &Prompt,
        clipboard: &mut C,
    ) -> Result<&TrendingCounts, ClipboardError> {
        clipboard.set_text(&prompt.prompt_text)?;
        Ok(self.record_copy(&prompt.id))
    }

    pub fn rank_top<'a>(&self, prompts: &'a [Prompt], n: usize) -> Option<Vec<TrendingEntry<'a>>> {
        rank_top(prompts, &self.counts, n)
    }
}
