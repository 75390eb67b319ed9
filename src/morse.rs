//! Morse Translator
//!
//! Maps a single character to its International Morse symbol sequence.
//!
//! # Table Layout
//!
//! The table is a fixed array indexed by the normalized character:
//! letters `a`-`z` occupy slots 0-25 and digits `0`-`9` slots 26-35.
//! Every other byte, including space and punctuation, falls back to
//! [`DEFAULT_SEQUENCE`], a single dot.

use crate::types::Symbol::{self, Dash, Dot};

/// Number of entries in the translation table
pub const TABLE_LEN: usize = 36;

/// Sequence played for characters outside the table
pub const DEFAULT_SEQUENCE: &[Symbol] = &[Dot];

/// One character and its Morse symbols
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseEntry {
    /// Normalized ASCII character (lowercase letter or digit)
    pub character: u8,
    /// Symbols in transmission order (1 to 5 long)
    pub symbols: &'static [Symbol],
}

impl MorseEntry {
    const fn new(character: u8, symbols: &'static [Symbol]) -> Self {
        Self { character, symbols }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for MorseEntry {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}={}", self.character as char, self.symbols);
    }
}

/// International Morse table for letters and digits
pub static MORSE_TABLE: [MorseEntry; TABLE_LEN] = [
    MorseEntry::new(b'a', &[Dot, Dash]),
    MorseEntry::new(b'b', &[Dash, Dot, Dot, Dot]),
    MorseEntry::new(b'c', &[Dash, Dot, Dash, Dot]),
    MorseEntry::new(b'd', &[Dash, Dot, Dot]),
    MorseEntry::new(b'e', &[Dot]),
    MorseEntry::new(b'f', &[Dot, Dot, Dash, Dot]),
    MorseEntry::new(b'g', &[Dash, Dash, Dot]),
    MorseEntry::new(b'h', &[Dot, Dot, Dot, Dot]),
    MorseEntry::new(b'i', &[Dot, Dot]),
    MorseEntry::new(b'j', &[Dot, Dash, Dash, Dash]),
    MorseEntry::new(b'k', &[Dash, Dot, Dash]),
    MorseEntry::new(b'l', &[Dot, Dash, Dot, Dot]),
    MorseEntry::new(b'm', &[Dash, Dash]),
    MorseEntry::new(b'n', &[Dash, Dot]),
    MorseEntry::new(b'o', &[Dash, Dash, Dash]),
    MorseEntry::new(b'p', &[Dot, Dash, Dash, Dot]),
    MorseEntry::new(b'q', &[Dash, Dash, Dot, Dash]),
    MorseEntry::new(b'r', &[Dot, Dash, Dot]),
    MorseEntry::new(b's', &[Dot, Dot, Dot]),
    MorseEntry::new(b't', &[Dash]),
    MorseEntry::new(b'u', &[Dot, Dot, Dash]),
    MorseEntry::new(b'v', &[Dot, Dot, Dot, Dash]),
    MorseEntry::new(b'w', &[Dot, Dash, Dash]),
    MorseEntry::new(b'x', &[Dash, Dot, Dot, Dash]),
    MorseEntry::new(b'y', &[Dash, Dot, Dash, Dash]),
    MorseEntry::new(b'z', &[Dash, Dash, Dot, Dot]),
    MorseEntry::new(b'0', &[Dash, Dash, Dash, Dash, Dash]),
    MorseEntry::new(b'1', &[Dot, Dash, Dash, Dash, Dash]),
    MorseEntry::new(b'2', &[Dot, Dot, Dash, Dash, Dash]),
    MorseEntry::new(b'3', &[Dot, Dot, Dot, Dash, Dash]),
    MorseEntry::new(b'4', &[Dot, Dot, Dot, Dot, Dash]),
    MorseEntry::new(b'5', &[Dot, Dot, Dot, Dot, Dot]),
    MorseEntry::new(b'6', &[Dash, Dot, Dot, Dot, Dot]),
    MorseEntry::new(b'7', &[Dash, Dash, Dot, Dot, Dot]),
    MorseEntry::new(b'8', &[Dash, Dash, Dash, Dot, Dot]),
    MorseEntry::new(b'9', &[Dash, Dash, Dash, Dash, Dot]),
];

/// Normalize a character for lookup (ASCII letters to lowercase)
#[must_use]
pub const fn normalize(character: u8) -> u8 {
    character.to_ascii_lowercase()
}

/// Table slot for an already normalized character
const fn slot(normalized: u8) -> Option<usize> {
    match normalized {
        b'a'..=b'z' => Some((normalized - b'a') as usize),
        b'0'..=b'9' => Some(26 + (normalized - b'0') as usize),
        _ => None,
    }
}

/// Find the table entry for a character, if it has one
#[must_use]
pub fn lookup(character: u8) -> Option<&'static MorseEntry> {
    slot(normalize(character)).map(|index| &MORSE_TABLE[index])
}

/// Translate a character to its Morse symbols
///
/// Letters are case-insensitive. Characters without a table entry
/// translate to [`DEFAULT_SEQUENCE`].
#[must_use]
pub fn translate(character: u8) -> &'static [Symbol] {
    lookup(character).map_or(DEFAULT_SEQUENCE, |entry| entry.symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_slots_match_characters() {
        for (index, entry) in MORSE_TABLE.iter().enumerate() {
            assert_eq!(slot(entry.character), Some(index));
        }
    }

    #[test]
    fn table_sequences_are_one_to_five_long() {
        for entry in &MORSE_TABLE {
            assert!((1..=5).contains(&entry.symbols.len()));
        }
    }

    #[test]
    fn normalize_only_touches_letters() {
        assert_eq!(normalize(b'Q'), b'q');
        assert_eq!(normalize(b'q'), b'q');
        assert_eq!(normalize(b'7'), b'7');
        assert_eq!(normalize(b'!'), b'!');
    }

    #[test]
    fn letter_a() {
        assert_eq!(translate(b'a'), &[Dot, Dash]);
        assert_eq!(translate(b'A'), &[Dot, Dash]);
    }

    #[test]
    fn digit_zero() {
        assert_eq!(translate(b'0'), &[Dash; 5]);
    }

    #[test]
    fn unknown_falls_back_to_dot() {
        assert_eq!(translate(b' '), DEFAULT_SEQUENCE);
        assert_eq!(translate(b'@'), DEFAULT_SEQUENCE);
        assert!(lookup(b'@').is_none());
    }
}
