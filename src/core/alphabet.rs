use std::collections::HashMap;

/// Whitespace as pasted codes see it: the Unicode White_Space set minus
/// U+0085, plus U+FEFF (byte order mark). Matches the `\s` class of
/// browser regexes and `String.prototype.trim`.
pub fn is_code_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// How an encoded string is split back into alphabet symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbolization {
    /// Every symbol is exactly one codepoint.
    FixedWidth,
    /// Symbols may span several codepoints and some are prefixes of others.
    /// The longest symbol matching at the scan position wins.
    LongestMatch,
}

/// An ordered, fixed set of symbols used as the digits of an encoding.
///
/// Indices are dense in `[0, base)`. The symbol→index table and the
/// longest-first decode order are built once at construction and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<String>,
    symbol_to_index: HashMap<String, usize>,
    char_to_index: HashMap<char, usize>,
    decode_order: Vec<usize>,
    symbolization: Symbolization,
    padding: Option<char>,
}

impl Alphabet {
    /// Creates a fixed-width alphabet from a string, one symbol per codepoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or repeats a character.
    pub fn from_chars(chars: &str) -> Result<Self, String> {
        let symbols = chars.chars().map(String::from).collect();
        Self::build(symbols, Symbolization::FixedWidth, None)
    }

    /// Creates a fixed-width alphabet with a padding character.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is invalid or the padding character
    /// is itself one of the symbols.
    pub fn from_chars_with_padding(chars: &str, padding: char) -> Result<Self, String> {
        let symbols = chars.chars().map(String::from).collect();
        Self::build(symbols, Symbolization::FixedWidth, Some(padding))
    }

    /// Creates an alphabet of possibly multi-codepoint symbols, decoded by
    /// longest match.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains an empty symbol, or
    /// repeats a symbol.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Self, String> {
        let symbols = symbols.iter().map(|s| s.as_ref().to_string()).collect();
        Self::build(symbols, Symbolization::LongestMatch, None)
    }

    fn build(
        symbols: Vec<String>,
        symbolization: Symbolization,
        padding: Option<char>,
    ) -> Result<Self, String> {
        if symbols.is_empty() {
            return Err("Alphabet cannot be empty".to_string());
        }

        let mut symbol_to_index = HashMap::with_capacity(symbols.len());
        let mut char_to_index = HashMap::new();
        for (i, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(format!("Empty symbol at index {}", i));
            }
            if symbol_to_index.insert(symbol.clone(), i).is_some() {
                return Err(format!("Duplicate symbol in alphabet: {}", symbol));
            }
            let mut chars = symbol.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                char_to_index.insert(c, i);
            }
        }

        if symbolization == Symbolization::FixedWidth && char_to_index.len() != symbols.len() {
            return Err("Fixed-width alphabet symbols must be single characters".to_string());
        }

        if let Some(pad) = padding {
            if char_to_index.contains_key(&pad) {
                return Err(format!("Padding character '{}' is also a symbol", pad));
            }
        }

        // Stable sort keeps list order among symbols of equal length.
        let mut decode_order: Vec<usize> = (0..symbols.len()).collect();
        decode_order.sort_by_key(|&i| std::cmp::Reverse(symbols[i].chars().count()));

        Ok(Alphabet {
            symbols,
            symbol_to_index,
            char_to_index,
            decode_order,
            symbolization,
            padding,
        })
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbolization(&self) -> Symbolization {
        self.symbolization
    }

    /// Returns the padding character, if any.
    pub fn padding(&self) -> Option<char> {
        self.padding
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Encodes a digit (0 to base-1) as its symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<&str> {
        self.symbols.get(digit).map(String::as_str)
    }

    /// Decodes a whole symbol back to its digit value.
    pub fn decode_symbol(&self, symbol: &str) -> Option<usize> {
        self.symbol_to_index.get(symbol).copied()
    }

    /// Decodes a single character back to its digit value.
    ///
    /// Only single-codepoint symbols are reachable this way.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    /// Finds the longest symbol that `input` starts with.
    ///
    /// Returns the matched symbol and its digit value.
    pub fn match_longest<'a>(&'a self, input: &str) -> Option<(&'a str, usize)> {
        self.decode_order
            .iter()
            .map(|&i| (self.symbols[i].as_str(), i))
            .find(|(symbol, _)| input.starts_with(*symbol))
    }

    /// True if any symbol occurs anywhere in `input` as a substring.
    pub fn contains_any_in(&self, input: &str) -> bool {
        self.symbols.iter().any(|symbol| input.contains(symbol.as_str()))
    }

    /// True if `input` is non-empty and every character is whitespace, one of
    /// the alphabet's single-codepoint symbols, or one of `extra`.
    pub fn covers(&self, input: &str, extra: &[char]) -> bool {
        !input.is_empty()
            && input.chars().all(|c| {
                is_code_whitespace(c) || self.char_to_index.contains_key(&c) || extra.contains(&c)
            })
    }

    /// Concatenation of every symbol, for diagnostics.
    pub fn describe(&self) -> String {
        self.symbols.concat()
    }
}
