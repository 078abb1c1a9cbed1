//! Pairwise geometric distance between key coordinates.

use serde::{Deserialize, Serialize};

use crate::keyboard::layout::KeyCoord;

/// How to measure the distance between two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyDistance {
    /// L2 norm of the coordinate delta.
    Euclidean,
    /// L1 norm of the coordinate delta.
    Manhattan,
}

impl KeyDistance {
    pub fn name(&self) -> &'static str {
        match self {
            KeyDistance::Euclidean => "euclidean",
            KeyDistance::Manhattan => "manhattan",
        }
    }

    /// Distance between two key coordinates, including the modifier axis.
    pub fn between(&self, a: KeyCoord, b: KeyCoord) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dz = a.z - b.z;
        match self {
            KeyDistance::Euclidean => (dx * dx + dy * dy + dz * dz).sqrt(),
            KeyDistance::Manhattan => dx.abs() + dy.abs() + dz.abs(),
        }
    }
}

impl Default for KeyDistance {
    fn default() -> Self {
        KeyDistance::Euclidean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let a = KeyCoord::new(0.0, 0.0);
        let b = KeyCoord::new(3.0, 4.0);
        assert!((KeyDistance::Euclidean.between(a, b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_manhattan() {
        let a = KeyCoord::new(0.0, 0.0);
        let b = KeyCoord::new(3.0, 4.0);
        assert!((KeyDistance::Manhattan.between(a, b) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_modifier_axis_counts() {
        let plain = KeyCoord::new(1.0, 1.0);
        let shifted = KeyCoord::shifted(1.0, 1.0, 0.5);
        assert!((KeyDistance::Euclidean.between(plain, shifted) - 0.5).abs() < 1e-9);
        assert!((KeyDistance::Manhattan.between(plain, shifted) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_for_same_key() {
        let a = KeyCoord::new(2.0, 3.0);
        assert_eq!(KeyDistance::Euclidean.between(a, a), 0.0);
        assert_eq!(KeyDistance::Manhattan.between(a, a), 0.0);
    }
}
