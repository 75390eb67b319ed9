//! Morse Translator Tests
//!
//! Tests for the character to symbol table and its fallback.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test morse_tests

use morse_beacon::morse::{lookup, normalize, translate, DEFAULT_SEQUENCE, MORSE_TABLE, TABLE_LEN};
use morse_beacon::types::Symbol;

/// Convert dot/dash text to symbols
fn pattern(text: &str) -> Vec<Symbol> {
    text.chars()
        .map(|c| match c {
            '.' => Symbol::Dot,
            '-' => Symbol::Dash,
            other => panic!("bad pattern char {other}"),
        })
        .collect()
}

/// International Morse code for letters and digits
const REFERENCE: [(u8, &str); 36] = [
    (b'a', ".-"),
    (b'b', "-..."),
    (b'c', "-.-."),
    (b'd', "-.."),
    (b'e', "."),
    (b'f', "..-."),
    (b'g', "--."),
    (b'h', "...."),
    (b'i', ".."),
    (b'j', ".---"),
    (b'k', "-.-"),
    (b'l', ".-.."),
    (b'm', "--"),
    (b'n', "-."),
    (b'o', "---"),
    (b'p', ".--."),
    (b'q', "--.-"),
    (b'r', ".-."),
    (b's', "..."),
    (b't', "-"),
    (b'u', "..-"),
    (b'v', "...-"),
    (b'w', ".--"),
    (b'x', "-..-"),
    (b'y', "-.--"),
    (b'z', "--.."),
    (b'0', "-----"),
    (b'1', ".----"),
    (b'2', "..---"),
    (b'3', "...--"),
    (b'4', "....-"),
    (b'5', "....."),
    (b'6', "-...."),
    (b'7', "--..."),
    (b'8', "---.."),
    (b'9', "----."),
];

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn test_table_has_36_entries() {
    assert_eq!(MORSE_TABLE.len(), TABLE_LEN);
    assert_eq!(TABLE_LEN, 36);
}

#[test]
fn test_every_entry_matches_international_morse() {
    for (character, text) in REFERENCE {
        assert_eq!(
            translate(character),
            pattern(text).as_slice(),
            "wrong sequence for {:?}",
            character as char
        );
    }
}

#[test]
fn test_uppercase_letters_match_lowercase() {
    for character in b'A'..=b'Z' {
        assert_eq!(translate(character), translate(character.to_ascii_lowercase()));
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(translate(b'e'), &[Symbol::Dot]);
    assert_eq!(translate(b'o'), &[Symbol::Dash; 3]);
    assert_eq!(translate(b'O'), &[Symbol::Dash; 3]);
    assert_eq!(translate(b'5'), &[Symbol::Dot; 5]);
    assert_eq!(translate(b'0'), &[Symbol::Dash; 5]);
    assert_eq!(translate(b'a'), &[Symbol::Dot, Symbol::Dash]);
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_space_falls_back_to_single_dot() {
    assert_eq!(translate(b' '), &[Symbol::Dot]);
    assert_eq!(DEFAULT_SEQUENCE, &[Symbol::Dot]);
}

#[test]
fn test_everything_outside_the_table_falls_back() {
    for byte in 0..=u8::MAX {
        if byte.is_ascii_alphanumeric() {
            continue;
        }
        assert_eq!(translate(byte), DEFAULT_SEQUENCE, "byte {byte:#04x}");
        assert!(lookup(byte).is_none());
    }
}

#[test]
fn test_punctuation_with_standard_codes_still_falls_back() {
    // '.', '?' and '/' have Morse codes but are not in the table
    for byte in [b'.', b'?', b'/', b',', b'='] {
        assert_eq!(translate(byte), DEFAULT_SEQUENCE);
    }
}

// =============================================================================
// Lookup and Purity Tests
// =============================================================================

#[test]
fn test_lookup_reports_normalized_character() {
    let entry = lookup(b'Q').unwrap();
    assert_eq!(entry.character, b'q');
    assert_eq!(entry.symbols, pattern("--.-").as_slice());
}

#[test]
fn test_normalize_lowercases_letters_only() {
    assert_eq!(normalize(b'S'), b's');
    assert_eq!(normalize(b'9'), b'9');
    assert_eq!(normalize(b' '), b' ');
}

#[test]
fn test_translate_is_idempotent() {
    for byte in 0..=u8::MAX {
        assert_eq!(translate(byte), translate(byte));
    }
}
