//! Cologne phonetics (Kölner Phonetik).
//!
//! A variable-length digit encoding tuned to German pronunciation. Letters
//! classify context-sensitively (C depends on its neighbors, D/T soften
//! before sibilants, X expands to "48"), consecutive duplicate digits
//! collapse, and zeros survive only in leading position. Multi-word input
//! encodes one code per word, space-joined.

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{FalcataError, Result};
use crate::phonetic::encoder::PhoneticEncoder;

/// Kölner Phonetik encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColognePhonetic;

impl ColognePhonetic {
    pub fn new() -> Self {
        ColognePhonetic
    }
}

impl PhoneticEncoder for ColognePhonetic {
    fn name(&self) -> &'static str {
        "cologne"
    }

    fn encode(&self, input: &str) -> Result<String> {
        let codes: Vec<String> = input.unicode_words().filter_map(encode_word).collect();
        if codes.is_empty() {
            return Err(FalcataError::unencodable_word(input));
        }
        Ok(codes.join(" "))
    }
}

/// Encode a single word; `None` when nothing classifiable remains.
fn encode_word(word: &str) -> Option<String> {
    let chars: Vec<char> = word
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'Ä' => 'A',
            'Ö' => 'O',
            'Ü' => 'U',
            c => c,
        })
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    if chars.is_empty() {
        return None;
    }

    let mut raw = String::with_capacity(chars.len() + 2);
    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();
        raw.push_str(classify(c, i == 0, prev, next));
    }

    // Collapse runs of the same digit, then drop non-leading zeros.
    let mut code = String::with_capacity(raw.len());
    let mut last = None;
    for d in raw.chars() {
        if last != Some(d) {
            if d != '0' || code.is_empty() {
                code.push(d);
            }
        }
        last = Some(d);
    }

    if code.is_empty() { None } else { Some(code) }
}

/// Context-sensitive digit(s) for one uppercase letter.
fn classify(c: char, initial: bool, prev: Option<char>, next: Option<char>) -> &'static str {
    match c {
        'A' | 'E' | 'I' | 'J' | 'O' | 'U' | 'Y' => "0",
        'H' => "",
        'B' => "1",
        'P' => {
            if next == Some('H') {
                "3"
            } else {
                "1"
            }
        }
        'D' | 'T' => {
            if matches!(next, Some('C') | Some('S') | Some('Z')) {
                "8"
            } else {
                "2"
            }
        }
        'F' | 'V' | 'W' => "3",
        'G' | 'K' | 'Q' => "4",
        'C' => {
            if initial {
                if matches!(
                    next,
                    Some('A')
                        | Some('H')
                        | Some('K')
                        | Some('L')
                        | Some('O')
                        | Some('Q')
                        | Some('R')
                        | Some('U')
                        | Some('X')
                ) {
                    "4"
                } else {
                    "8"
                }
            } else if matches!(prev, Some('S') | Some('Z')) {
                "8"
            } else if matches!(
                next,
                Some('A') | Some('H') | Some('K') | Some('O') | Some('Q') | Some('U') | Some('X')
            ) {
                "4"
            } else {
                "8"
            }
        }
        'X' => {
            if matches!(prev, Some('C') | Some('K') | Some('Q')) {
                "8"
            } else {
                "48"
            }
        }
        'L' => "5",
        'M' | 'N' => "6",
        'R' => "7",
        'S' | 'Z' => "8",
        _ => "",
    }
}
