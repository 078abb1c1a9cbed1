//! The common calling convention shared by every distance metric.
//!
//! All metrics report a [`Measure`] and accept a [`Threshold`], so a generic
//! driver can treat them polymorphically through [`DistanceMetric`].

use serde::{Deserialize, Serialize};

use crate::error::{FalcataError, Result};

/// The outcome of one distance computation.
///
/// `distance` is integral-valued for the character and positional metrics and
/// real-valued for the keyboard metric. `similarity` is the normalized
/// complement `1 - distance / max_len`, clamped to `[0, 1]` since weighted
/// substitution costs can push the raw distance past `max_len`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Computed distance, or the capped sentinel `max_distance + 1` when
    /// truncated.
    pub distance: f64,
    /// Normalized similarity in `[0, 1]`.
    pub similarity: f64,
    /// True iff the true distance exceeds the caller's threshold and
    /// `distance` is the capped sentinel rather than an exact value.
    pub truncated: bool,
}

impl Measure {
    /// An exact (non-truncated) measurement.
    ///
    /// Two empty strings compare as identical: `distance = 0`,
    /// `similarity = 1`.
    pub fn exact(distance: f64, max_len: usize) -> Self {
        Measure {
            distance,
            similarity: similarity_for(distance, max_len),
            truncated: false,
        }
    }

    /// A measurement capped at `max_distance + 1` because the true distance
    /// exceeds the threshold.
    pub fn capped(max_distance: usize, max_len: usize) -> Self {
        let distance = (max_distance + 1) as f64;
        Measure {
            distance,
            similarity: similarity_for(distance, max_len),
            truncated: true,
        }
    }
}

fn similarity_for(distance: f64, max_len: usize) -> f64 {
    if max_len == 0 {
        return 1.0;
    }
    (1.0 - distance / max_len as f64).clamp(0.0, 1.0)
}

/// Maximum allowed distance, or minimum required similarity.
///
/// The original convention this library descends from inferred the meaning
/// from the numeric range of a single scalar; the tagged representation
/// removes that ambiguity. Both variants convert into a concrete band width
/// via [`Threshold::max_distance`], and [`Threshold::accepts`] applies the
/// matching filter, so the metric and the search driver always agree on which
/// interpretation is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Threshold {
    /// Absolute maximum distance.
    Distance(usize),
    /// Minimum required similarity in `[0, 1]`.
    Similarity(f64),
}

impl Threshold {
    /// Reject out-of-range similarity values at the API boundary.
    pub fn validate(&self) -> Result<()> {
        match self {
            Threshold::Distance(_) => Ok(()),
            Threshold::Similarity(s) => {
                if (0.0..=1.0).contains(s) {
                    Ok(())
                } else {
                    Err(FalcataError::invalid_config(format!(
                        "similarity threshold must be within [0, 1], got {s}"
                    )))
                }
            }
        }
    }

    /// Convert to an absolute maximum distance for a pair with the given
    /// longer length.
    ///
    /// A similarity threshold converts via
    /// `round((1 - min_similarity) * max_len)`, clamped to at least 1 so the
    /// band never degenerates to zero width.
    pub fn max_distance(&self, max_len: usize) -> usize {
        match *self {
            Threshold::Distance(d) => d,
            Threshold::Similarity(s) => {
                let converted = ((1.0 - s) * max_len as f64).round() as usize;
                converted.max(1)
            }
        }
    }

    /// Whether a measurement passes this threshold.
    ///
    /// `Distance(n)` keeps `distance <= n`; `Similarity(s)` keeps
    /// `similarity >= s`. Truncated measurements carry the sentinel
    /// `max_distance + 1` and therefore never pass a `Distance` filter.
    pub fn accepts(&self, measure: &Measure) -> bool {
        match *self {
            Threshold::Distance(d) => !measure.truncated && measure.distance <= d as f64,
            Threshold::Similarity(s) => !measure.truncated && measure.similarity >= s,
        }
    }
}

/// A pluggable string distance metric.
///
/// Implementations must be symmetric in their substitution costs and
/// reflexive (`measure(s, s)` yields distance 0, similarity 1), and must
/// honor the [`Threshold`] semantics identically so drivers can swap them
/// freely.
pub trait DistanceMetric {
    /// Short identifier, e.g. for benchmark and log labels.
    fn name(&self) -> &'static str;

    /// Measure the distance between `a` and `b` under the given threshold.
    fn measure(&self, a: &str, b: &str, threshold: Threshold) -> Result<Measure>;
}
