//! Phonetic encoders: words to pronunciation codes.
//!
//! Differently spelled but similar-sounding words encode to the same or
//! nearby codes, which the phonetic metric and grouping build on.

pub mod cologne;
pub mod encoder;
pub mod soundex;
