//! The phonetic encoder contract.

use crate::error::Result;

/// Encodes a word by how it sounds.
///
/// Codes are a pure function of the normalized (uppercased,
/// alphabetic-filtered) input: identical inputs always yield identical
/// codes. An input with no classifiable letters after normalization fails
/// with `UnencodableWord`.
pub trait PhoneticEncoder {
    /// Short identifier, e.g. for group labels.
    fn name(&self) -> &'static str;

    /// Encode the input to its phonetic code.
    fn encode(&self, input: &str) -> Result<String>;
}
