//! Built-in share-code alphabets.
//!
//! Symbol order is part of the wire format: reordering any of these lists
//! changes every code produced with it.
//!
//! The four alphabets must stay pairwise disjoint, since the format sniffer
//! identifies a code purely by which characters it contains. The Sussy list
//! has symbols that are prefixes of other symbols (`ඞ` / `ඞී`, `ට` / `ටී`,
//! `ඩ` / `ඩ්ඩු`, ...); it decodes correctly only because no symbol starts with
//! a combining mark. Re-check `test_sussy_greedy_match_is_unambiguous` before
//! adding a symbol.

use crate::core::alphabet::Alphabet;
use std::sync::LazyLock;

/// 3-bit glyph alphabet used by the Blocky codec.
pub const BLOCKY_CHARS: &str = "▀▄█▌▐░▒▓";

/// 112-glyph alphabet used by the Arrow codec.
pub const ARROW_CHARS: &str = "←↑→↓↔↕↖↗↘↙↚↛↜↝↞↟↠↡↢↣↤↥↦↧↨↩↪↫↬↭↮↯↰↱↲↳↴↵↶↷↸↹↺↻↼↽↾↿⇀⇁⇂⇃⇄⇅⇆⇇⇈⇉⇊⇋⇌⇍⇎⇏⇐⇑⇒⇓⇔⇕▖⇗⇘⇙⇚⇛⇜⇝⇞⇟⇠⇡⇢⇣⇤⇥⇦⇧⇨⇩⇪⇫⇬⇭⇮⇯⇰⇱⇲⇳⇴⇵⇶⇷⇸⇹⇺⇻⇼⇽⇾⇿";

/// 23 Sinhala clusters used by the Sussy codec.
pub const SUSSY_SYMBOLS: [&str; 23] = [
    "ඞ",
    "ඞී",
    "ඩැ",
    "ඩො",
    "ඩෙ",
    "ඩෘ",
    "ඩ",
    "ඩ්ඩු",
    "ඩ්\u{200d}ය",
    "ඩෑ",
    "ධෛ",
    "ච",
    "ටී",
    "චි",
    "චැ",
    "ට",
    "චෙ",
    "ඔ",
    "ඖ",
    "ඕ",
    "ඹ",
    "ඹී",
    "ඹෟ",
];

/// RFC 4648 standard base64 alphabet.
pub const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

pub const BASE64_PADDING: char = '=';

pub static BLOCKY: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::from_chars(BLOCKY_CHARS).expect("blocky alphabet is valid"));

pub static ARROW: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::from_chars(ARROW_CHARS).expect("arrow alphabet is valid"));

pub static SUSSY: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::from_symbols(&SUSSY_SYMBOLS).expect("sussy alphabet is valid"));

pub static BASE64: LazyLock<Alphabet> = LazyLock::new(|| {
    Alphabet::from_chars_with_padding(BASE64_CHARS, BASE64_PADDING)
        .expect("base64 alphabet is valid")
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn codepoints(alphabet: &Alphabet) -> HashSet<char> {
        alphabet.symbols().iter().flat_map(|s| s.chars()).collect()
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(BLOCKY.base(), 8);
        assert_eq!(ARROW.base(), 112);
        assert_eq!(SUSSY.base(), 23);
        assert_eq!(BASE64.base(), 64);
    }

    #[test]
    fn test_arrow_keeps_block_glyph() {
        assert_eq!(ARROW.decode_char('▖'), Some(70));
        assert_eq!(ARROW.encode_digit(0), Some("←"));
        assert_eq!(ARROW.encode_digit(111), Some("⇿"));
    }

    #[test]
    fn test_sussy_zwj_symbol() {
        assert_eq!(SUSSY.encode_digit(8).map(|s| s.chars().count()), Some(4));
        assert!(SUSSY.encode_digit(8).unwrap().contains('\u{200d}'));
    }

    #[test]
    fn test_alphabets_pairwise_disjoint() {
        let mut base64 = codepoints(&BASE64);
        base64.insert(BASE64_PADDING);
        let sets = [
            ("blocky", codepoints(&BLOCKY)),
            ("arrow", codepoints(&ARROW)),
            ("sussy", codepoints(&SUSSY)),
            ("base64", base64),
        ];

        for (i, (name_a, a)) in sets.iter().enumerate() {
            for (name_b, b) in sets.iter().skip(i + 1) {
                let shared: Vec<_> = a.intersection(b).collect();
                assert!(shared.is_empty(), "{} and {} share {:?}", name_a, name_b, shared);
            }
        }
    }

    #[test]
    fn test_sussy_greedy_match_is_unambiguous() {
        // Every ordered pair of symbols must re-split into the same pair.
        for (i, a) in SUSSY_SYMBOLS.iter().enumerate() {
            for (j, b) in SUSSY_SYMBOLS.iter().enumerate() {
                let joined = format!("{}{}", a, b);
                let (first, first_index) = SUSSY.match_longest(&joined).unwrap();
                assert_eq!(first_index, i, "pair {:?}", joined);
                let rest = &joined[first.len()..];
                assert_eq!(SUSSY.match_longest(rest).map(|(_, idx)| idx), Some(j));
            }
        }
    }

    #[test]
    fn test_no_sussy_symbol_starts_with_combining_mark() {
        for symbol in SUSSY_SYMBOLS {
            let first = symbol.chars().next().unwrap();
            assert!(!('\u{0dca}'..='\u{0ddf}').contains(&first), "{}", symbol);
        }
    }
}
