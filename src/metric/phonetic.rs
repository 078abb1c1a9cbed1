//! Phonetic-code similarity as a distance metric.
//!
//! Encodes both inputs with a [`PhoneticEncoder`], then compares the codes
//! with the plain character metric, so "Meyer" and "Maier" measure as
//! identical even though they differ by two edits.

use crate::error::Result;
use crate::metric::distance::{DistanceMetric, Measure, Threshold};
use crate::metric::edit::Levenshtein;
use crate::phonetic::encoder::PhoneticEncoder;

/// Distance between the phonetic codes of two strings.
///
/// Fails the single comparison when either input cannot be encoded; batch
/// drivers skip such items.
#[derive(Debug, Clone)]
pub struct PhoneticMetric<E> {
    encoder: E,
    inner: Levenshtein,
}

impl<E: PhoneticEncoder> PhoneticMetric<E> {
    pub fn new(encoder: E) -> Self {
        PhoneticMetric {
            encoder,
            inner: Levenshtein::new(),
        }
    }

    /// Access the wrapped encoder.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }
}

impl<E: PhoneticEncoder> DistanceMetric for PhoneticMetric<E> {
    fn name(&self) -> &'static str {
        "phonetic"
    }

    fn measure(&self, a: &str, b: &str, threshold: Threshold) -> Result<Measure> {
        let code_a = self.encoder.encode(a)?;
        let code_b = self.encoder.encode(b)?;
        self.inner.measure(&code_a, &code_b, threshold)
    }
}
