//! Keyboard coordinate tables.
//!
//! Maps characters to physical key positions so the keyboard metric can price
//! a substitution by how far apart the two keys sit. Built-in QWERTY and
//! QWERTZ tables cover the primary (lowercase) keys with their row stagger;
//! uppercase variants copy the base key's position and, for case-sensitive
//! layouts, carry the modifier cost on the extra axis. Callers with other
//! hardware supply their own table of the same shape.

use std::sync::OnceLock;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{FalcataError, Result};

/// Physical position of one key.
///
/// `x`/`y` locate the key on the board; `z` is nonzero only for characters
/// that need a modifier key to type, and only on case-sensitive layouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyCoord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl KeyCoord {
    /// An unshifted key position.
    pub fn new(x: f64, y: f64) -> Self {
        KeyCoord { x, y, z: 0.0 }
    }

    /// A key position reached through a modifier.
    pub fn shifted(x: f64, y: f64, z: f64) -> Self {
        KeyCoord { x, y, z }
    }
}

/// Base key positions for the US QWERTY layout: primary character, column,
/// row. Rows carry the usual physical stagger.
const QWERTY_KEYS: &[(char, f64, f64)] = &[
    ('1', 0.0, 0.0),
    ('2', 1.0, 0.0),
    ('3', 2.0, 0.0),
    ('4', 3.0, 0.0),
    ('5', 4.0, 0.0),
    ('6', 5.0, 0.0),
    ('7', 6.0, 0.0),
    ('8', 7.0, 0.0),
    ('9', 8.0, 0.0),
    ('0', 9.0, 0.0),
    ('-', 10.0, 0.0),
    ('=', 11.0, 0.0),
    ('q', 0.5, 1.0),
    ('w', 1.5, 1.0),
    ('e', 2.5, 1.0),
    ('r', 3.5, 1.0),
    ('t', 4.5, 1.0),
    ('y', 5.5, 1.0),
    ('u', 6.5, 1.0),
    ('i', 7.5, 1.0),
    ('o', 8.5, 1.0),
    ('p', 9.5, 1.0),
    ('[', 10.5, 1.0),
    (']', 11.5, 1.0),
    ('a', 0.75, 2.0),
    ('s', 1.75, 2.0),
    ('d', 2.75, 2.0),
    ('f', 3.75, 2.0),
    ('g', 4.75, 2.0),
    ('h', 5.75, 2.0),
    ('j', 6.75, 2.0),
    ('k', 7.75, 2.0),
    ('l', 8.75, 2.0),
    (';', 9.75, 2.0),
    ('\'', 10.75, 2.0),
    ('z', 1.25, 3.0),
    ('x', 2.25, 3.0),
    ('c', 3.25, 3.0),
    ('v', 4.25, 3.0),
    ('b', 5.25, 3.0),
    ('n', 6.25, 3.0),
    ('m', 7.25, 3.0),
    (',', 8.25, 3.0),
    ('.', 9.25, 3.0),
    ('/', 10.25, 3.0),
    (' ', 5.0, 4.0),
];

/// Base key positions for the German QWERTZ layout.
const QWERTZ_KEYS: &[(char, f64, f64)] = &[
    ('1', 0.0, 0.0),
    ('2', 1.0, 0.0),
    ('3', 2.0, 0.0),
    ('4', 3.0, 0.0),
    ('5', 4.0, 0.0),
    ('6', 5.0, 0.0),
    ('7', 6.0, 0.0),
    ('8', 7.0, 0.0),
    ('9', 8.0, 0.0),
    ('0', 9.0, 0.0),
    ('ß', 10.0, 0.0),
    ('q', 0.5, 1.0),
    ('w', 1.5, 1.0),
    ('e', 2.5, 1.0),
    ('r', 3.5, 1.0),
    ('t', 4.5, 1.0),
    ('z', 5.5, 1.0),
    ('u', 6.5, 1.0),
    ('i', 7.5, 1.0),
    ('o', 8.5, 1.0),
    ('p', 9.5, 1.0),
    ('ü', 10.5, 1.0),
    ('a', 0.75, 2.0),
    ('s', 1.75, 2.0),
    ('d', 2.75, 2.0),
    ('f', 3.75, 2.0),
    ('g', 4.75, 2.0),
    ('h', 5.75, 2.0),
    ('j', 6.75, 2.0),
    ('k', 7.75, 2.0),
    ('l', 8.75, 2.0),
    ('ö', 9.75, 2.0),
    ('ä', 10.75, 2.0),
    ('y', 1.25, 3.0),
    ('x', 2.25, 3.0),
    ('c', 3.25, 3.0),
    ('v', 4.25, 3.0),
    ('b', 5.25, 3.0),
    ('n', 6.25, 3.0),
    ('m', 7.25, 3.0),
    (',', 8.25, 3.0),
    ('.', 9.25, 3.0),
    ('-', 10.25, 3.0),
    (' ', 5.0, 4.0),
];

/// A character → coordinate table.
#[derive(Debug, Clone, Default)]
pub struct KeyboardLayout {
    keys: AHashMap<char, KeyCoord>,
}

impl KeyboardLayout {
    /// Build a named built-in layout ("qwerty" or "qwertz").
    ///
    /// Uppercase letters copy the base key's position; when `case_sensitive`
    /// is true they additionally carry `shift_z_offset` on the extra axis,
    /// modeling the cost of the modifier press.
    pub fn builtin(name: &str, case_sensitive: bool, shift_z_offset: f64) -> Result<Self> {
        let base = match name.to_ascii_lowercase().as_str() {
            "qwerty" => QWERTY_KEYS,
            "qwertz" => QWERTZ_KEYS,
            _ => {
                return Err(FalcataError::invalid_config(format!(
                    "unknown keyboard layout {name:?} (expected \"qwerty\" or \"qwertz\")"
                )));
            }
        };
        Ok(Self::from_base(base, case_sensitive, shift_z_offset))
    }

    fn from_base(base: &[(char, f64, f64)], case_sensitive: bool, shift_z_offset: f64) -> Self {
        let mut keys = AHashMap::with_capacity(base.len() * 2);
        for &(ch, x, y) in base {
            keys.insert(ch, KeyCoord::new(x, y));
            if ch.is_alphabetic() {
                let z = if case_sensitive { shift_z_offset } else { 0.0 };
                for upper in ch.to_uppercase() {
                    keys.insert(upper, KeyCoord::shifted(x, y, z));
                }
            }
        }
        KeyboardLayout { keys }
    }

    /// Build a layout from a caller-supplied coordinate table, for hardware
    /// the built-in tables do not cover.
    pub fn from_table<I>(table: I) -> Self
    where
        I: IntoIterator<Item = (char, KeyCoord)>,
    {
        KeyboardLayout {
            keys: table.into_iter().collect(),
        }
    }

    /// Look up the coordinate of a character.
    ///
    /// A character absent from the table is an error, never a default
    /// distance.
    pub fn coord(&self, ch: char) -> Result<KeyCoord> {
        self.keys
            .get(&ch)
            .copied()
            .ok_or(FalcataError::UnknownCharacter(ch))
    }

    /// Whether the table has an entry for this character.
    pub fn contains(&self, ch: char) -> bool {
        self.keys.contains_key(&ch)
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// The process-wide default layout: case-insensitive QWERTY, published once.
pub fn default_qwerty() -> &'static KeyboardLayout {
    static DEFAULT_QWERTY: OnceLock<KeyboardLayout> = OnceLock::new();
    DEFAULT_QWERTY.get_or_init(|| KeyboardLayout::from_base(QWERTY_KEYS, false, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_qwerty() {
        let layout = KeyboardLayout::builtin("qwerty", false, 0.0).unwrap();
        let q = layout.coord('q').unwrap();
        assert_eq!((q.x, q.y, q.z), (0.5, 1.0, 0.0));
        assert!(layout.contains('7'));
        assert!(layout.contains(' '));
    }

    #[test]
    fn test_unknown_layout_name() {
        assert!(KeyboardLayout::builtin("dvorak", false, 0.0).is_err());
    }

    #[test]
    fn test_unknown_character() {
        let layout = KeyboardLayout::builtin("qwerty", false, 0.0).unwrap();
        match layout.coord('€') {
            Err(FalcataError::UnknownCharacter('€')) => {}
            other => panic!("expected UnknownCharacter, got {other:?}"),
        }
    }

    #[test]
    fn test_case_insensitive_uppercase() {
        let layout = KeyboardLayout::builtin("qwerty", false, 0.5).unwrap();
        assert_eq!(layout.coord('A').unwrap(), layout.coord('a').unwrap());
    }

    #[test]
    fn test_case_sensitive_shift_offset() {
        let layout = KeyboardLayout::builtin("qwerty", true, 0.5).unwrap();
        let lower = layout.coord('a').unwrap();
        let upper = layout.coord('A').unwrap();
        assert_eq!((upper.x, upper.y), (lower.x, lower.y));
        assert_eq!(lower.z, 0.0);
        assert_eq!(upper.z, 0.5);
    }

    #[test]
    fn test_qwertz_specifics() {
        let layout = KeyboardLayout::builtin("qwertz", false, 0.0).unwrap();
        // Z and Y trade places relative to QWERTY.
        let z = layout.coord('z').unwrap();
        assert_eq!((z.x, z.y), (5.5, 1.0));
        let y = layout.coord('y').unwrap();
        assert_eq!((y.x, y.y), (1.25, 3.0));
        assert!(layout.contains('ü'));
        assert!(layout.contains('ß'));
    }

    #[test]
    fn test_custom_table() {
        let layout = KeyboardLayout::from_table([
            ('а', KeyCoord::new(0.0, 0.0)),
            ('б', KeyCoord::new(1.0, 0.0)),
        ]);
        assert_eq!(layout.len(), 2);
        assert!(layout.coord('а').is_ok());
        assert!(layout.coord('q').is_err());
    }

    #[test]
    fn test_default_qwerty_is_shared() {
        let a = default_qwerty();
        let b = default_qwerty();
        assert!(std::ptr::eq(a, b));
        assert!(a.contains('q'));
    }
}
