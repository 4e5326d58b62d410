//! Fixed-width bit-packing over power-of-two alphabets.
//!
//! Bytes are shifted into a bit accumulator and sliced into
//! `log2(base)`-bit chunks. The final partial chunk is filled with zero bits
//! on the right. Blocky (3 bits) and base64 (6 bits) both run on this engine;
//! they differ only in padding and in how strictly they decode.

use crate::core::alphabet::{Alphabet, is_code_whitespace};
use crate::encoders::algorithms::errors::DecodeError;

fn bits_per_symbol(alphabet: &Alphabet) -> usize {
    let base = alphabet.base();
    debug_assert!(base.is_power_of_two(), "chunked mode needs a power-of-two alphabet");
    base.trailing_zeros() as usize
}

/// Encodes bytes as fixed-width chunks, padding to a multiple of four
/// symbols when the alphabet has a padding character.
pub fn encode_chunked(data: &[u8], alphabet: &Alphabet) -> String {
    let bits_per_char = bits_per_symbol(alphabet);
    if bits_per_char == 0 {
        return String::new();
    }

    let output_chars = (data.len() * 8).div_ceil(bits_per_char);
    let padded_chars = if alphabet.padding().is_some() {
        output_chars.div_ceil(4) * 4
    } else {
        output_chars
    };
    let mut result = String::with_capacity(padded_chars * 3);
    let mask = (1u32 << bits_per_char) - 1;

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= bits_per_char {
            bits_in_buffer -= bits_per_char;
            let index = ((bit_buffer >> bits_in_buffer) & mask) as usize;
            push_digit(&mut result, alphabet, index);
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (bits_per_char - bits_in_buffer)) & mask) as usize;
        push_digit(&mut result, alphabet, index);
    }

    if let Some(pad_char) = alphabet.padding() {
        for _ in output_chars..padded_chars {
            result.push(pad_char);
        }
    }

    result
}

fn push_digit(out: &mut String, alphabet: &Alphabet, index: usize) {
    // index is masked to log2(base) bits, so it is always in range
    if let Some(symbol) = alphabet.encode_digit(index) {
        out.push_str(symbol);
    }
}

/// Accumulates digits and emits whole bytes; trailing bits that do not make
/// a byte are dropped.
struct BitReader {
    bits_per_char: usize,
    bit_buffer: u32,
    bits_in_buffer: usize,
    out: Vec<u8>,
}

impl BitReader {
    fn new(bits_per_char: usize, capacity: usize) -> Self {
        BitReader {
            bits_per_char,
            bit_buffer: 0,
            bits_in_buffer: 0,
            out: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, digit: usize) {
        self.bit_buffer = (self.bit_buffer << self.bits_per_char) | (digit as u32);
        self.bits_in_buffer += self.bits_per_char;

        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            self.out.push(((self.bit_buffer >> self.bits_in_buffer) & 0xFF) as u8);
        }
    }

    fn finish(self) -> Vec<u8> {
        self.out
    }
}

/// Decodes chunked symbols, silently skipping any character outside the
/// alphabet.
///
/// Never fails: foreign characters are treated as formatting.
pub fn decode_chunked_lenient(encoded: &str, alphabet: &Alphabet) -> Vec<u8> {
    let bits_per_char = bits_per_symbol(alphabet);
    let mut reader = BitReader::new(bits_per_char, encoded.len() * bits_per_char / 8);

    for c in encoded.chars() {
        if let Some(digit) = alphabet.decode_char(c) {
            reader.push(digit);
        }
    }

    reader.finish()
}

/// Decodes chunked symbols with padding, rejecting anything malformed.
///
/// Whitespace is ignored. When the remaining length is a multiple of four,
/// up to two trailing padding characters are removed; unpadded input is
/// accepted. A length of `1 mod 4` cannot come from any byte sequence and is
/// an error, as is padding anywhere else or any character outside the
/// alphabet.
pub fn decode_chunked_strict(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let bits_per_char = bits_per_symbol(alphabet);
    let padding = alphabet.padding();

    let mut symbols: Vec<(usize, char)> = encoded
        .chars()
        .enumerate()
        .filter(|&(_, c)| !is_code_whitespace(c))
        .collect();

    if let Some(pad) = padding {
        if symbols.len() % 4 == 0 {
            for _ in 0..2 {
                if symbols.last().is_some_and(|&(_, c)| c == pad) {
                    symbols.pop();
                }
            }
        }
    }

    if symbols.len() % 4 == 1 {
        return Err(DecodeError::invalid_length(
            symbols.len(),
            "a length that is not 1 more than a multiple of 4",
            "the code looks truncated; copy it again in full",
        ));
    }

    let mut reader = BitReader::new(bits_per_char, symbols.len() * bits_per_char / 8);
    for &(position, c) in &symbols {
        if Some(c) == padding {
            return Err(DecodeError::InvalidPadding);
        }
        let digit = alphabet.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, position, encoded, &alphabet.describe())
        })?;
        reader.push(digit);
    }

    Ok(reader.finish())
}
