//! Collection drivers: fuzzy search and phonetic grouping.

pub mod fuzzy;
pub mod group;
