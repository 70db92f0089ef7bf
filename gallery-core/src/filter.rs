//! # Filter
//!
//! Derives the visible subset of the catalog from a category selector and a free-text search.
//! Everything here is a pure function of its inputs and is cheap enough to run on every
//! keystroke.

use crate::catalog::Catalog;
use crate::prompt::{Category, Prompt};
use std::fmt;

/// Returns the prompts that pass both the category selector and the search term.
///
/// The category filter keeps prompts whose `category` is exactly the selected one (any prompt for
/// [`Category::All`], none for an unknown selector). The search filter keeps prompts whose title,
/// description or prompt text contains the search term, ignoring case. A blank search term
/// disables the search filter. Catalog order is preserved.
pub fn filter<'a>(prompts: &'a [Prompt], category: &Category, search_term: &str) -> Vec<&'a Prompt> {
    let needle = normalized_search(search_term);

    prompts
        .iter()
        .filter(|p| category.matches(&p.category))
        .filter(|p| match &needle {
            Some(needle) => matches_search(p, needle),
            None => true,
        })
        .collect()
}

fn normalized_search(search_term: &str) -> Option<String> {
    if search_term.trim().is_empty() {
        None
    } else {
        Some(search_term.to_lowercase())
    }
}

fn matches_search(prompt: &Prompt, needle: &str) -> bool {
    prompt.title.to_lowercase().contains(needle)
        || prompt.description.to_lowercase().contains(needle)
        || prompt.prompt_text.to_lowercase().contains(needle)
}

/// Transient filter inputs of a session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: Category,
}

impl FilterState {
    pub fn new(category: Category, search_term: impl Into<String>) -> FilterState {
        FilterState {
            search_term: search_term.into(),
            category,
        }
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Prompt> {
        filter(catalog.prompts(), &self.category, &self.search_term)
    }

    pub fn summarize(&self, visible: usize, total: usize) -> FilterSummary {
        FilterSummary {
            visible,
            total,
            search_term: self.has_search().then(|| self.search_term.clone()),
            category: self.category.clone(),
        }
    }
}

/// The "Showing X of Y prompts" line rendered above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub visible: usize,
    pub total: usize,
    pub search_term: Option<String>,
    pub category: Category,
}

impl FilterSummary {
    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }

    /// Message shown in place of the results when nothing matched.
    pub fn empty_message(&self) -> String {
        match &self.search_term {
            Some(term) => format!("No results for \"{}\". Try a different search term.", term),
            None => "No prompts available for this category.".to_string(),
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} prompts", self.visible, self.total)?;
        if let Some(term) = &self.search_term {
            write!(f, " for \"{}\"", term)?;
        }
        if !self.category.is_all() {
            write!(f, " in {}", self.category)?;
        }
        Ok(())
    }
}
