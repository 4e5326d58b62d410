use crate::core::config::CodecKind;
use std::fmt;

/// Errors that can occur while mapping a symbol string back to bytes.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// The padding is malformed or incorrect
    InvalidPadding,
    /// Invalid length for the encoding format
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// No alphabet symbol starts at this position of a multi-codepoint code
    UnmatchedSequence { position: usize, remainder: String },
    /// A symbol pair decodes to a value that does not fit in a byte
    ValueOutOfRange { position: usize, value: usize },
}

/// Characters of unmatched remainder kept for diagnostics.
const REMAINDER_CONTEXT: usize = 10;

impl DecodeError {
    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        // Truncate long inputs on a char boundary
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
            valid_chars: valid_chars.to_string(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        DecodeError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    /// Create an UnmatchedSequence error keeping a bounded slice of the rest
    pub fn unmatched(position: usize, remaining: &str) -> Self {
        DecodeError::UnmatchedSequence {
            position,
            remainder: remaining.chars().take(REMAINDER_CONTEXT).collect(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character '{}' at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(
                        f,
                        "error: invalid character '{}' at position {}",
                        c, position
                    )?;
                }
                writeln!(f)?;

                // Caret only lines up when the position is inside the shown prefix
                writeln!(f, "  {}", input)?;
                if *position <= 60 {
                    write!(f, "  {}", " ".repeat(*position))?;
                    if use_color {
                        writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                    } else {
                        writeln!(f, "^")?;
                    }
                }
                writeln!(f)?;

                let hint_chars = if valid_chars.chars().count() > 80 {
                    format!("{}...", valid_chars.chars().take(80).collect::<String>())
                } else {
                    valid_chars.clone()
                };

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid characters: {}", hint_chars)?;
                } else {
                    write!(f, "hint: valid characters: {}", hint_chars)?;
                }
                Ok(())
            }
            DecodeError::InvalidPadding => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid padding")?;
                    write!(
                        f,
                        "\n\x1b[1;36mhint:\x1b[0m check for missing or incorrect '=' characters at end of input"
                    )?;
                } else {
                    writeln!(f, "error: invalid padding")?;
                    write!(
                        f,
                        "\nhint: check for missing or incorrect '=' characters at end of input"
                    )?;
                }
                Ok(())
            }
            DecodeError::InvalidLength {
                actual,
                expected,
                hint,
            } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m invalid length for decode")?;
                } else {
                    writeln!(f, "error: invalid length for decode")?;
                }
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)?;
                } else {
                    write!(f, "hint: {}", hint)?;
                }
                Ok(())
            }
            DecodeError::UnmatchedSequence {
                position,
                remainder,
            } => {
                if use_color {
                    write!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid sequence at position {}: {}",
                        position, remainder
                    )
                } else {
                    write!(
                        f,
                        "error: invalid sequence at position {}: {}",
                        position, remainder
                    )
                }
            }
            DecodeError::ValueOutOfRange { position, value } => {
                if use_color {
                    write!(
                        f,
                        "\x1b[1;31merror:\x1b[0m symbol pair at position {} decodes to {}, which is not a byte",
                        position, value
                    )
                } else {
                    write!(
                        f,
                        "error: symbol pair at position {} decodes to {}, which is not a byte",
                        position, value
                    )
                }
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Failure of a share-code export or import.
///
/// Every stage of the pipeline reports through this type so a caller can
/// show a single notification via [`ShareError::user_message`].
#[derive(Debug)]
pub enum ShareError {
    /// Input was blank after trimming
    EmptyInput,
    /// No alphabet test matched; nothing was decoded
    UnrecognizedFormat,
    /// The sniffed alphabet could not map the input back to bytes
    Decode { codec: CodecKind, source: DecodeError },
    /// The gzip encoder failed
    Compress(std::io::Error),
    /// The decoded bytes are not a gzip stream of UTF-8 text
    Decompress(std::io::Error),
    /// The decompressed text is not JSON
    MalformedJson(serde_json::Error),
    /// The JSON does not look like a dialog-node sequence
    InvalidStructure(String),
    /// The tree could not be turned into JSON
    Serialize(serde_json::Error),
}

impl ShareError {
    /// One-line message suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            ShareError::EmptyInput => "Code is empty.".to_string(),
            ShareError::UnrecognizedFormat => {
                "Unknown code format. Please use a valid share code.".to_string()
            }
            // The symbols were fine; their pair just spells more than a byte
            ShareError::Decode {
                source: DecodeError::ValueOutOfRange { .. },
                ..
            } => "Invalid or corrupted code. Please check and try again.".to_string(),
            ShareError::Decode { codec, .. } => match codec {
                CodecKind::Sussy => "Sussy code appears to be corrupted or invalid.".to_string(),
                CodecKind::Standard => "Invalid Base64 string".to_string(),
                CodecKind::Arrow => "Invalid character in arrow code sequence.".to_string(),
                CodecKind::Blocky => "Blocky code appears to be corrupted or invalid.".to_string(),
            },
            ShareError::Decompress(_) => {
                "Invalid or corrupted code. Please check and try again.".to_string()
            }
            ShareError::MalformedJson(_) => "Code does not contain valid dialog data.".to_string(),
            ShareError::InvalidStructure(_) => "Invalid data structure.".to_string(),
            ShareError::Serialize(_) | ShareError::Compress(_) => {
                "Error generating code.".to_string()
            }
        }
    }
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Decode { codec, .. } => {
                write!(f, "failed to decode {} code", codec)
            }
            ShareError::Compress(e) => write!(f, "failed to compress dialogs: {}", e),
            ShareError::Decompress(e) => write!(f, "failed to decompress share code: {}", e),
            ShareError::MalformedJson(e) => write!(f, "share code is not valid JSON: {}", e),
            ShareError::InvalidStructure(reason) => {
                write!(f, "invalid dialog structure: {}", reason)
            }
            ShareError::Serialize(e) => write!(f, "failed to serialize dialogs: {}", e),
            other => f.write_str(&other.user_message()),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShareError::Decode { source, .. } => Some(source),
            ShareError::Compress(e) | ShareError::Decompress(e) => Some(e),
            ShareError::MalformedJson(e) | ShareError::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

/// Error when a codec name is not recognised
#[derive(Debug)]
pub struct CodecNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CodecNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CodecNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m codec '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: codec '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        let names: Vec<&str> = CodecKind::ALL.iter().map(|k| k.as_str()).collect();
        write!(f, "      available codecs: {}", names.join(", "))
    }
}

impl std::error::Error for CodecNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching codec name
pub fn find_closest_codec(name: &str) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;
    let threshold = if name.len() < 5 { 2 } else { 3 };

    for kind in CodecKind::ALL {
        let distance = levenshtein_distance(&name.to_lowercase(), kind.as_str());
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(kind.as_str().to_string());
        }
    }

    best_match
}
