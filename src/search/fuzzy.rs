//! Generic fuzzy search over collections.
//!
//! Applies any [`DistanceMetric`] to every item of a flat string slice or a
//! single-level table, filters by the threshold, and optionally ranks by
//! similarity. Per-item comparison failures (a character the keyboard table
//! does not know, a word phonetics cannot encode) skip the item; collection
//! shape errors abort the whole call.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{FalcataError, Result};
use crate::metric::distance::{DistanceMetric, Threshold};
use crate::metric::edit::Levenshtein;

/// One accepted match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The matched item.
    pub item: String,
    /// Position of the item in the original collection.
    pub index: usize,
    /// Distance reported by the metric.
    pub distance: f64,
    /// Similarity reported by the metric.
    pub similarity: f64,
}

/// Configuration for a fuzzy search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum distance or minimum similarity for a hit.
    pub threshold: Threshold,
    /// Sort hits by descending similarity (stable: ties keep collection
    /// order). When false, hits stay in collection order.
    pub sort_by_similarity: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: Threshold::Distance(2),
            sort_by_similarity: true,
        }
    }
}

/// Fuzzy search driver over a pluggable metric.
#[derive(Debug, Clone)]
pub struct FuzzySearcher<M> {
    metric: M,
    config: SearchConfig,
}

impl<M: DistanceMetric> FuzzySearcher<M> {
    /// A searcher with the default configuration.
    pub fn new(metric: M) -> Self {
        FuzzySearcher {
            metric,
            config: SearchConfig::default(),
        }
    }

    /// A searcher with custom configuration.
    pub fn with_config(metric: M, config: SearchConfig) -> Self {
        FuzzySearcher { metric, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Search a flat collection of strings for approximate matches of
    /// `target`.
    ///
    /// The same [`Threshold`] value drives both the metric's band and the
    /// hit filter, so the two interpretations cannot drift apart: an
    /// absolute threshold keeps `distance <= n`, a similarity threshold
    /// keeps `similarity >= s`.
    pub fn search<S: AsRef<str>>(&self, items: &[S], target: &str) -> Result<Vec<SearchHit>> {
        if items.is_empty() {
            return Err(FalcataError::invalid_collection("collection is empty"));
        }
        self.config.threshold.validate()?;

        let mut hits = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let item = item.as_ref();
            let measure = match self.metric.measure(target, item, self.config.threshold) {
                Ok(measure) => measure,
                Err(e) if e.is_per_item() => continue,
                Err(e) => return Err(e),
            };
            if self.config.threshold.accepts(&measure) {
                hits.push(SearchHit {
                    item: item.to_string(),
                    index,
                    distance: measure.distance,
                    similarity: measure.similarity,
                });
            }
        }

        if self.config.sort_by_similarity {
            hits.sort_by(|a, b| {
                b.similarity
                    .partial_cmp(&a.similarity)
                    .unwrap_or(Ordering::Equal)
            });
        }
        Ok(hits)
    }

    /// Search a single-level table, comparing against the designated column.
    ///
    /// The column index is validated against every row before any comparison
    /// runs; an out-of-range index aborts the whole call.
    pub fn search_table(
        &self,
        rows: &[Vec<String>],
        column: usize,
        target: &str,
    ) -> Result<Vec<SearchHit>> {
        if rows.is_empty() {
            return Err(FalcataError::invalid_collection("collection is empty"));
        }
        for row in rows {
            if column >= row.len() {
                return Err(FalcataError::column_out_of_range(column, row.len()));
            }
        }
        let items: Vec<&str> = rows.iter().map(|row| row[column].as_str()).collect();
        self.search(&items, target)
    }
}

impl Default for FuzzySearcher<Levenshtein> {
    /// The default driver uses the plain character metric.
    fn default() -> Self {
        FuzzySearcher::new(Levenshtein::new())
    }
}
