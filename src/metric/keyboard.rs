//! Keyboard-geometry-weighted edit distance.
//!
//! Substituting a character costs the physical distance between the two keys
//! on the active layout, so fat-finger typos ("searcg" for "search") score
//! closer than random substitutions. Everything else — banding, thresholds,
//! transpositions — is the shared edit engine.

use crate::error::{FalcataError, Result};
use crate::keyboard::geometry::KeyDistance;
use crate::keyboard::layout::{KeyboardLayout, default_qwerty};
use crate::metric::distance::{DistanceMetric, Measure, Threshold};
use crate::metric::edit::{EditEngine, SubstitutionCost};

/// Substitution cost backed by a keyboard coordinate table.
///
/// Identical characters cost 0 without touching the table; any other pair is
/// the geometric distance between their keys. A character missing from the
/// table is a lookup failure, not a default distance.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardProximity<'a> {
    layout: &'a KeyboardLayout,
    geometry: KeyDistance,
}

impl<'a> KeyboardProximity<'a> {
    pub fn new(layout: &'a KeyboardLayout, geometry: KeyDistance) -> Self {
        KeyboardProximity { layout, geometry }
    }
}

impl SubstitutionCost for KeyboardProximity<'_> {
    fn cost(&self, a: char, b: char) -> Result<f64> {
        if a == b {
            return Ok(0.0);
        }
        Ok(self
            .geometry
            .between(self.layout.coord(a)?, self.layout.coord(b)?))
    }
}

/// The keyboard metric: edit distance with key-proximity substitution costs.
///
/// Transpositions are on by default since swapped neighbors are the classic
/// typing error. Per-operation costs default to 1 and can be overridden;
/// because substitution costs are unbounded the raw distance can exceed the
/// string length, and similarity is clamped at 0 accordingly.
#[derive(Debug, Clone)]
pub struct KeyboardMetric {
    layout: KeyboardLayout,
    geometry: KeyDistance,
    delete_cost: f64,
    insert_cost: f64,
    transpositions: bool,
}

impl KeyboardMetric {
    /// A metric over the given layout with Euclidean geometry, unit
    /// operation costs, and transpositions enabled.
    pub fn new(layout: KeyboardLayout) -> Self {
        KeyboardMetric {
            layout,
            geometry: KeyDistance::Euclidean,
            delete_cost: 1.0,
            insert_cost: 1.0,
            transpositions: true,
        }
    }

    /// Convenience constructor over the shared case-insensitive QWERTY
    /// layout.
    pub fn qwerty() -> Self {
        KeyboardMetric::new(default_qwerty().clone())
    }

    /// Select Euclidean or Manhattan key geometry.
    pub fn geometry(mut self, geometry: KeyDistance) -> Self {
        self.geometry = geometry;
        self
    }

    /// Enable or disable the adjacent-transposition operation.
    pub fn transpositions(mut self, enabled: bool) -> Self {
        self.transpositions = enabled;
        self
    }

    /// Override the per-operation deletion and insertion costs.
    ///
    /// Costs must be finite and strictly positive.
    pub fn with_costs(mut self, delete_cost: f64, insert_cost: f64) -> Result<Self> {
        if !(delete_cost.is_finite() && delete_cost > 0.0)
            || !(insert_cost.is_finite() && insert_cost > 0.0)
        {
            return Err(FalcataError::invalid_config(format!(
                "operation costs must be finite and positive, got delete={delete_cost}, insert={insert_cost}"
            )));
        }
        self.delete_cost = delete_cost;
        self.insert_cost = insert_cost;
        Ok(self)
    }
}

impl Default for KeyboardMetric {
    fn default() -> Self {
        KeyboardMetric::qwerty()
    }
}

impl DistanceMetric for KeyboardMetric {
    fn name(&self) -> &'static str {
        "keyboard"
    }

    fn measure(&self, a: &str, b: &str, threshold: Threshold) -> Result<Measure> {
        threshold.validate()?;

        // Identical strings are distance 0 regardless of table coverage.
        if a == b {
            return Ok(Measure::exact(0.0, a.chars().count()));
        }

        let max_len = a.chars().count().max(b.chars().count());
        let max_distance = threshold.max_distance(max_len);
        EditEngine::new(KeyboardProximity::new(&self.layout, self.geometry))
            .transpositions(self.transpositions)
            .with_costs(self.delete_cost, self.insert_cost)?
            .compute(a, b, max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(metric: &KeyboardMetric, a: &str, b: &str) -> Measure {
        metric.measure(a, b, Threshold::Distance(100)).unwrap()
    }

    #[test]
    fn test_reflexivity() {
        let metric = KeyboardMetric::qwerty();
        let m = measure(&metric, "search", "search");
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.similarity, 1.0);
    }

    #[test]
    fn test_reflexivity_with_unmapped_characters() {
        // Equal strings short-circuit before any table lookup.
        let metric = KeyboardMetric::qwerty();
        let m = measure(&metric, "€uro", "€uro");
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.similarity, 1.0);
    }

    #[test]
    fn test_nearby_cheaper_than_distant() {
        let metric = KeyboardMetric::qwerty();
        // g neighbors h on the home row; p is across the board.
        let nearby = measure(&metric, "search", "searcg").distance;
        let distant = measure(&metric, "search", "searcp").distance;
        assert!(nearby < distant);
    }

    #[test]
    fn test_symmetry() {
        let metric = KeyboardMetric::qwerty();
        for (a, b) in [("search", "searcg"), ("hello", "jello"), ("abc", "")] {
            assert_eq!(measure(&metric, a, b).distance, measure(&metric, b, a).distance);
        }
    }

    #[test]
    fn test_transposition_counts_once() {
        // e and r are neighbors, so the swap (priced at their key distance)
        // undercuts the delete+insert path that the plain engine takes.
        let metric = KeyboardMetric::qwerty();
        let swapped = measure(&metric, "ernest", "renest").distance;
        let plain = KeyboardMetric::qwerty().transpositions(false);
        let unswapped = measure(&plain, "ernest", "renest").distance;
        assert!(swapped < unswapped);
        assert!((swapped - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let metric = KeyboardMetric::qwerty();
        let err = metric
            .measure("cat", "ca€", Threshold::Distance(5))
            .unwrap_err();
        assert!(err.is_per_item());
    }

    #[test]
    fn test_similarity_clamped_at_zero() {
        // Heavy operation costs push the raw distance past the string
        // length; similarity must floor at 0.
        let metric = KeyboardMetric::qwerty().with_costs(5.0, 5.0).unwrap();
        let m = metric.measure("ab", "", Threshold::Distance(100)).unwrap();
        assert_eq!(m.distance, 10.0);
        assert_eq!(m.similarity, 0.0);
        assert!(!m.truncated);
    }

    #[test]
    fn test_non_positive_costs_rejected() {
        assert!(KeyboardMetric::qwerty().with_costs(0.0, 1.0).is_err());
        assert!(KeyboardMetric::qwerty().with_costs(1.0, -2.0).is_err());
    }

    #[test]
    fn test_manhattan_geometry() {
        let euclidean = KeyboardMetric::qwerty();
        let manhattan = KeyboardMetric::qwerty().geometry(KeyDistance::Manhattan);
        // q -> s is a diagonal move: Manhattan strictly exceeds Euclidean.
        let e = measure(&euclidean, "q", "s").distance;
        let m = measure(&manhattan, "q", "s").distance;
        assert!(m > e);
    }

    #[test]
    fn test_shift_offset_prices_case() {
        let layout = KeyboardLayout::builtin("qwerty", true, 0.5).unwrap();
        let metric = KeyboardMetric::new(layout);
        let m = measure(&metric, "a", "A");
        assert!((m.distance - 0.5).abs() < 1e-9);
    }
}
