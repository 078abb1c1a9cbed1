//! Positional (fixed-width) metric.
//!
//! Compares two strings code point by code point, logically padding the
//! shorter one with a neutral filler so every missing trailing position
//! counts as one mismatch. No dynamic programming and no band pruning; the
//! whole comparison is a single O(n) pass.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metric::distance::{DistanceMetric, Measure, Threshold};

/// Positional mismatch-count metric.
///
/// The distance is the number of positions at which the two strings differ
/// after padding to equal length; similarity is `1 - distance / max_len` as
/// for every other metric. The result is still capped at the threshold
/// sentinel when the count exceeds it, so the output shape matches the
/// edit-based metrics exactly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Hamming;

impl Hamming {
    pub fn new() -> Self {
        Hamming
    }
}

impl DistanceMetric for Hamming {
    fn name(&self) -> &'static str {
        "hamming"
    }

    fn measure(&self, a: &str, b: &str, threshold: Threshold) -> Result<Measure> {
        threshold.validate()?;

        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let max_len = a_chars.len().max(b_chars.len());

        if max_len == 0 {
            return Ok(Measure::exact(0.0, 0));
        }

        // A position past either string's end never equals the other side,
        // which is exactly the neutral-filler padding behavior.
        let mismatches = (0..max_len)
            .filter(|&i| a_chars.get(i) != b_chars.get(i))
            .count();

        let max_distance = threshold.max_distance(max_len);
        if mismatches > max_distance {
            Ok(Measure::capped(max_distance, max_len))
        } else {
            Ok(Measure::exact(mismatches as f64, max_len))
        }
    }
}
