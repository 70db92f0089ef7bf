//! # Storage
//!
//! Abstraction over the durable key-value store that holds [`TrendingCounts`].
//!
//! The main components are:
//! - [`CountsStore`] trait - Loads and saves the complete counts mapping
//! - [`TRENDING_COUNTS_KEY`] - Name of the single entry the mapping is stored under

use crate::trending::TrendingCounts;

/// Name of the store entry holding the serialized counts.
pub const TRENDING_COUNTS_KEY: &str = "trendingCounts";

pub trait CountsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the persisted mapping. A store with no entry yet yields an empty mapping.
    fn load(&self) -> Result<TrendingCounts, Self::Error>;

    /// Replaces the persisted mapping with `counts`.
    fn save(&self, counts: &TrendingCounts) -> Result<(), Self::Error>;
}
