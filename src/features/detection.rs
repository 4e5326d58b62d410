use crate::core::alphabet::{Alphabet, is_code_whitespace};
use crate::core::alphabets::{ARROW, BASE64, BASE64_PADDING, BLOCKY, SUSSY};
use crate::core::config::CodecKind;
use crate::encoders::algorithms::errors::ShareError;

/// How a rule decides that an input belongs to its alphabet.
#[derive(Debug, Clone, Copy)]
pub enum SniffTest {
    /// Every character is whitespace, a symbol, or one of the extra chars.
    FullMatch {
        alphabet: &'static Alphabet,
        extra: &'static [char],
    },
    /// At least one symbol appears somewhere in the input.
    Contains { alphabet: &'static Alphabet },
}

impl SniffTest {
    fn matches(&self, input: &str) -> bool {
        match self {
            SniffTest::FullMatch { alphabet, extra } => alphabet.covers(input, extra),
            SniffTest::Contains { alphabet } => alphabet.contains_any_in(input),
        }
    }
}

/// One `(predicate, codec)` pair of the sniffing table.
#[derive(Debug, Clone, Copy)]
pub struct SniffRule {
    pub kind: CodecKind,
    pub test: SniffTest,
}

/// Identifies which codec produced a pasted share code.
///
/// Rules are tried in order and the first match wins. Order matters: the
/// base64 character class is the most permissive and goes last, and the
/// Sussy rule only needs one symbol to be present, so it must come after the
/// full-match rules for the glyph alphabets.
#[derive(Debug, Clone)]
pub struct FormatDetector {
    rules: Vec<SniffRule>,
}

static BASE64_EXTRA: [char; 1] = [BASE64_PADDING];

impl Default for FormatDetector {
    fn default() -> Self {
        FormatDetector {
            rules: vec![
                SniffRule {
                    kind: CodecKind::Blocky,
                    test: SniffTest::FullMatch {
                        alphabet: &BLOCKY,
                        extra: &[],
                    },
                },
                SniffRule {
                    kind: CodecKind::Arrow,
                    test: SniffTest::FullMatch {
                        alphabet: &ARROW,
                        extra: &[],
                    },
                },
                SniffRule {
                    kind: CodecKind::Sussy,
                    test: SniffTest::Contains { alphabet: &SUSSY },
                },
                SniffRule {
                    kind: CodecKind::Standard,
                    test: SniffTest::FullMatch {
                        alphabet: &BASE64,
                        extra: &BASE64_EXTRA,
                    },
                },
            ],
        }
    }
}

impl FormatDetector {
    /// Creates a detector with the built-in rule order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detector from an explicit rule list.
    pub fn with_rules(rules: Vec<SniffRule>) -> Self {
        FormatDetector { rules }
    }

    pub fn rules(&self) -> &[SniffRule] {
        &self.rules
    }

    /// Classifies `input` into exactly one codec.
    ///
    /// The input is trimmed first. Blank input fails with
    /// [`ShareError::EmptyInput`]; input no rule accepts fails with
    /// [`ShareError::UnrecognizedFormat`].
    pub fn detect(&self, input: &str) -> Result<CodecKind, ShareError> {
        let input = input.trim_matches(is_code_whitespace);
        if input.is_empty() {
            return Err(ShareError::EmptyInput);
        }

        let kind = self
            .rules
            .iter()
            .find(|rule| rule.test.matches(input))
            .map(|rule| rule.kind)
            .ok_or(ShareError::UnrecognizedFormat)?;

        tracing::debug!(codec = %kind, chars = input.chars().count(), "Detected share code format");
        Ok(kind)
    }
}

/// Classifies `input` with the built-in rule order.
pub fn detect_format(input: &str) -> Result<CodecKind, ShareError> {
    FormatDetector::default().detect(input)
}
