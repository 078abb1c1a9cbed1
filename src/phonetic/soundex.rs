//! Soundex-style phonetic encoders.
//!
//! Both encoders produce the classic fixed 4-character code: the first
//! letter followed by three digits, zero-padded. The German variant expands
//! umlauts and ß to their digraph spellings before classification so that
//! "Müller" and "Mueller" encode identically.

use crate::error::{FalcataError, Result};
use crate::phonetic::encoder::PhoneticEncoder;

/// Classic American Soundex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Soundex;

impl Soundex {
    pub fn new() -> Self {
        Soundex
    }
}

impl PhoneticEncoder for Soundex {
    fn name(&self) -> &'static str {
        "soundex"
    }

    fn encode(&self, input: &str) -> Result<String> {
        let chars: Vec<char> = input
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        encode_frame(&chars).ok_or_else(|| FalcataError::unencodable_word(input))
    }
}

/// Soundex over German orthography.
///
/// Umlauts expand to their digraph spellings (ä → ae, ö → oe, ü → ue) and
/// ß to ss before the standard classification runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanSoundex;

impl GermanSoundex {
    pub fn new() -> Self {
        GermanSoundex
    }
}

impl PhoneticEncoder for GermanSoundex {
    fn name(&self) -> &'static str {
        "german_soundex"
    }

    fn encode(&self, input: &str) -> Result<String> {
        let mut chars = Vec::with_capacity(input.len());
        // ß uppercases to SS on its own; the umlauts need the explicit
        // digraph expansion.
        for ch in input.to_uppercase().chars() {
            match ch {
                'Ä' => chars.extend(['A', 'E']),
                'Ö' => chars.extend(['O', 'E']),
                'Ü' => chars.extend(['U', 'E']),
                c if c.is_ascii_alphabetic() => chars.push(c),
                _ => {}
            }
        }
        encode_frame(&chars).ok_or_else(|| FalcataError::unencodable_word(input))
    }
}

/// Soundex digit for an uppercase ASCII letter.
fn digit(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        // A, E, I, O, U, H, W, Y
        _ => '0',
    }
}

/// The shared Soundex frame: first letter + up to three digits, zero-padded.
///
/// H and W are transparent (they do not break adjacency); vowels break
/// adjacency but emit nothing.
fn encode_frame(chars: &[char]) -> Option<String> {
    let (&first, rest) = chars.split_first()?;

    let mut code = String::with_capacity(4);
    code.push(first);
    let mut prev = digit(first);

    for &c in rest {
        if code.len() >= 4 {
            break;
        }
        if matches!(c, 'H' | 'W') {
            continue;
        }
        let d = digit(c);
        if d != '0' && d != prev {
            code.push(d);
        }
        prev = d;
    }

    while code.len() < 4 {
        code.push('0');
    }
    Some(code)
}
