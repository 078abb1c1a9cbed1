//! Grouping a collection by shared pronunciation.

use ahash::AHashMap;

use crate::error::{FalcataError, Result};
use crate::phonetic::encoder::PhoneticEncoder;

/// Groups items by their phonetic code.
#[derive(Debug, Clone)]
pub struct PhoneticGrouper<E> {
    encoder: E,
}

impl<E: PhoneticEncoder> PhoneticGrouper<E> {
    pub fn new(encoder: E) -> Self {
        PhoneticGrouper { encoder }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Group a collection by phonetic code.
    ///
    /// Each group's items keep their insertion order. Items that cannot be
    /// encoded are skipped rather than failing the whole operation; an empty
    /// input collection is a shape error.
    pub fn group<S: AsRef<str>>(&self, items: &[S]) -> Result<AHashMap<String, Vec<String>>> {
        if items.is_empty() {
            return Err(FalcataError::invalid_collection("collection is empty"));
        }

        let mut groups: AHashMap<String, Vec<String>> = AHashMap::new();
        for item in items {
            let item = item.as_ref();
            match self.encoder.encode(item) {
                Ok(code) => groups.entry(code).or_default().push(item.to_string()),
                Err(e) if e.is_per_item() => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(groups)
    }
}
