//! Two-digit base-N encoding.
//!
//! Each byte becomes exactly two symbols, `byte / base` followed by
//! `byte % base`, independent of its neighbours. Any alphabet of at least 16
//! symbols can hold a byte this way.

use crate::core::alphabet::{Alphabet, Symbolization, is_code_whitespace};
use crate::encoders::algorithms::errors::DecodeError;

/// Encodes every byte as a high/low digit pair.
pub fn encode_pairs(data: &[u8], alphabet: &Alphabet) -> String {
    let base = alphabet.base();
    debug_assert!(base * base >= 256, "digit pairs need at least 16 symbols");

    let mut result = String::with_capacity(data.len() * 2);
    for &byte in data {
        let byte = byte as usize;
        for digit in [byte / base, byte % base] {
            if let Some(symbol) = alphabet.encode_digit(digit) {
                result.push_str(symbol);
            }
        }
    }
    result
}

/// Decodes digit pairs back to bytes.
///
/// Whitespace anywhere in the input is ignored. A trailing unpaired symbol
/// is dropped. Fixed-width alphabets only inspect the symbols that form
/// whole pairs; longest-match alphabets must split the entire input.
pub fn decode_pairs(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let cleaned: String = encoded.chars().filter(|&c| !is_code_whitespace(c)).collect();

    let digits = match alphabet.symbolization() {
        Symbolization::FixedWidth => symbolize_fixed(&cleaned, alphabet)?,
        Symbolization::LongestMatch => symbolize_longest(&cleaned, alphabet)?,
    };

    let base = alphabet.base();
    digits
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, digits)| {
            let value = digits[0] * base + digits[1];
            u8::try_from(value).map_err(|_| DecodeError::ValueOutOfRange {
                position: pair * 2,
                value,
            })
        })
        .collect()
}

fn symbolize_fixed(cleaned: &str, alphabet: &Alphabet) -> Result<Vec<usize>, DecodeError> {
    let chars: Vec<char> = cleaned.chars().collect();
    let even = chars.len() / 2 * 2;

    chars[..even]
        .iter()
        .enumerate()
        .map(|(position, &c)| {
            alphabet.decode_char(c).ok_or_else(|| {
                DecodeError::invalid_character(c, position, cleaned, &alphabet.describe())
            })
        })
        .collect()
}

fn symbolize_longest(cleaned: &str, alphabet: &Alphabet) -> Result<Vec<usize>, DecodeError> {
    let mut digits = Vec::with_capacity(cleaned.len() / 3);
    let mut remaining = cleaned;
    let mut position = 0;

    while !remaining.is_empty() {
        let (symbol, digit) = alphabet
            .match_longest(remaining)
            .ok_or_else(|| DecodeError::unmatched(position, remaining))?;
        digits.push(digit);
        remaining = &remaining[symbol.len()..];
        position += symbol.chars().count();
    }

    Ok(digits)
}
