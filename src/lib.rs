//! # Falcata
//!
//! A fast, flexible approximate string matching library for Rust.
//!
//! ## Features
//!
//! - Banded edit distance with an early-exit threshold protocol
//! - Restricted adjacent-transposition (optimal string alignment) variant
//! - Keyboard-geometry-weighted distances over QWERTY/QWERTZ or custom layouts
//! - Positional (fixed-width) comparison
//! - Soundex, German Soundex, and Cologne phonetic encoders
//! - Generic fuzzy search and phonetic grouping over collections

pub mod error;
pub mod keyboard;
pub mod metric;
pub mod phonetic;
pub mod search;

pub mod prelude {
    pub use crate::error::{FalcataError, Result};
    pub use crate::keyboard::geometry::KeyDistance;
    pub use crate::keyboard::layout::{KeyCoord, KeyboardLayout};
    pub use crate::metric::distance::{DistanceMetric, Measure, Threshold};
    pub use crate::metric::edit::Levenshtein;
    pub use crate::metric::hamming::Hamming;
    pub use crate::metric::keyboard::KeyboardMetric;
    pub use crate::metric::phonetic::PhoneticMetric;
    pub use crate::phonetic::cologne::ColognePhonetic;
    pub use crate::phonetic::encoder::PhoneticEncoder;
    pub use crate::phonetic::soundex::{GermanSoundex, Soundex};
    pub use crate::search::fuzzy::{FuzzySearcher, SearchConfig, SearchHit};
    pub use crate::search::group::PhoneticGrouper;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
