//! Error types for the Falcata library.
//!
//! All fallible operations in Falcata return [`Result`], whose error type is
//! the [`FalcataError`] enum. Batch-level misuse (bad configuration, bad
//! collection shape) and per-comparison data issues (a character missing from
//! a keyboard table, a word with nothing to encode) are distinct variants so
//! that drivers can skip the latter while aborting on the former.
//!
//! # Examples
//!
//! ```
//! use falcata::error::{FalcataError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FalcataError::invalid_config("similarity threshold must be within [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Falcata operations.
#[derive(Error, Debug)]
pub enum FalcataError {
    /// The collection handed to a batch operation is empty or has an
    /// unsupported shape (only flat sequences and single-level tables are
    /// accepted).
    #[error("Invalid collection: {0}")]
    InvalidCollection(String),

    /// The designated comparison column lies outside the table.
    #[error("Column {index} out of range for row with {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },

    /// A character has no entry in the active keyboard coordinate table.
    #[error("Unknown character: {0:?} has no keyboard coordinate")]
    UnknownCharacter(char),

    /// Phonetic normalization left no classifiable letters.
    #[error("Unencodable word: {0:?}")]
    UnencodableWord(String),

    /// Invalid configuration (unknown layout name, non-positive operation
    /// costs, out-of-range similarity threshold, ...).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FalcataError.
pub type Result<T> = std::result::Result<T, FalcataError>;

impl FalcataError {
    /// Create a new invalid collection error.
    pub fn invalid_collection<S: Into<String>>(msg: S) -> Self {
        FalcataError::InvalidCollection(msg.into())
    }

    /// Create a new column out of range error.
    pub fn column_out_of_range(index: usize, width: usize) -> Self {
        FalcataError::ColumnOutOfRange { index, width }
    }

    /// Create a new unknown character error.
    pub fn unknown_character(ch: char) -> Self {
        FalcataError::UnknownCharacter(ch)
    }

    /// Create a new unencodable word error.
    pub fn unencodable_word<S: Into<String>>(word: S) -> Self {
        FalcataError::UnencodableWord(word.into())
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FalcataError::InvalidConfig(msg.into())
    }

    /// Whether this error aborts only the single comparison that produced it.
    ///
    /// Drivers iterating a collection skip items that fail with such errors
    /// instead of aborting the whole batch.
    pub fn is_per_item(&self) -> bool {
        matches!(
            self,
            FalcataError::UnknownCharacter(_) | FalcataError::UnencodableWord(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FalcataError::invalid_collection("collection is empty");
        assert_eq!(error.to_string(), "Invalid collection: collection is empty");

        let error = FalcataError::column_out_of_range(3, 2);
        assert_eq!(
            error.to_string(),
            "Column 3 out of range for row with 2 columns"
        );

        let error = FalcataError::invalid_config("unknown layout");
        assert_eq!(error.to_string(), "Invalid configuration: unknown layout");
    }

    #[test]
    fn test_per_item_classification() {
        assert!(FalcataError::unknown_character('€').is_per_item());
        assert!(FalcataError::unencodable_word("123").is_per_item());
        assert!(!FalcataError::invalid_collection("empty").is_per_item());
        assert!(!FalcataError::invalid_config("bad costs").is_per_item());
    }
}
