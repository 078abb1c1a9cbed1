//! Keyboard geometry: coordinate tables and key-to-key distances.

pub mod geometry;
pub mod layout;
