//! Share-code export and import.
//!
//! Export: tree → JSON → gzip → alphabet string.
//! Import: trim → sniff → decode → gunzip → JSON → structural check.
//!
//! Every stage is a pure function of its input; a failed import returns an
//! error and produces no partial tree.

use crate::core::alphabet::is_code_whitespace;
use crate::core::config::{CodecKind, ShareSettings};
use crate::dialog::DialogNode;
use crate::encoders::algorithms::errors::ShareError;
use crate::encoders::codec::{AlphabetCodec, Codec};
use crate::features::compression::{self, DEFAULT_LEVEL};
use crate::features::detection::FormatDetector;
use serde::Serialize;
use serde_json::Value;

/// Builds a share code for `tree` with the given codec at the default
/// compression level.
///
/// # Example
/// ```
/// use phrase_share::{CodecKind, DialogNode, build_share_code, load_dialogs};
///
/// let pack = vec![DialogNode::message("msg-1", "1", "gg wp")];
/// let code = build_share_code(&pack, CodecKind::Arrow).unwrap();
/// assert_eq!(load_dialogs(&code).unwrap(), pack);
/// ```
pub fn build_share_code<T: Serialize + ?Sized>(
    tree: &T,
    kind: CodecKind,
) -> Result<String, ShareError> {
    build_share_code_at_level(tree, kind, DEFAULT_LEVEL)
}

/// Builds a share code using the compression level from `settings`.
pub fn build_share_code_with<T: Serialize + ?Sized>(
    tree: &T,
    kind: CodecKind,
    settings: &ShareSettings,
) -> Result<String, ShareError> {
    build_share_code_at_level(tree, kind, settings.compression_level)
}

fn build_share_code_at_level<T: Serialize + ?Sized>(
    tree: &T,
    kind: CodecKind,
    level: u32,
) -> Result<String, ShareError> {
    let json = serde_json::to_string(tree).map_err(ShareError::Serialize)?;
    let compressed = compression::compress(&json, level)?;
    let code = Codec::for_kind(kind).encode(&compressed);

    tracing::debug!(
        codec = %kind,
        json_bytes = json.len(),
        compressed_bytes = compressed.len(),
        code_chars = code.chars().count(),
        "Built share code"
    );
    Ok(code)
}

/// Decodes a pasted share code into a validated dialog sequence.
///
/// The returned values are the raw JSON nodes; see [`load_dialogs`] for a
/// typed variant.
pub fn load_from_share_code(pasted: &str) -> Result<Vec<Value>, ShareError> {
    load_with_detector(pasted, &FormatDetector::default())
}

/// [`load_from_share_code`] with a caller-supplied sniffing table.
pub fn load_with_detector(pasted: &str, detector: &FormatDetector) -> Result<Vec<Value>, ShareError> {
    let trimmed = pasted.trim_matches(is_code_whitespace);
    if trimmed.is_empty() {
        return Err(ShareError::EmptyInput);
    }

    let kind = detector.detect(trimmed)?;
    let compressed = Codec::for_kind(kind)
        .decode(trimmed)
        .map_err(|source| ShareError::Decode { codec: kind, source })?;
    let json = compression::decompress(&compressed)?;
    let value: Value = serde_json::from_str(&json).map_err(ShareError::MalformedJson)?;
    let nodes = validate_tree(value)?;

    tracing::debug!(codec = %kind, nodes = nodes.len(), "Loaded share code");
    Ok(nodes)
}

/// Decodes a share code and deserializes it into [`DialogNode`]s.
pub fn load_dialogs(pasted: &str) -> Result<Vec<DialogNode>, ShareError> {
    load_from_share_code(pasted)?
        .into_iter()
        .map(|node| {
            serde_json::from_value(node).map_err(|e| ShareError::InvalidStructure(e.to_string()))
        })
        .collect()
}

/// Accepts an array whose first element, if any, carries an `id` field.
pub fn validate_tree(value: Value) -> Result<Vec<Value>, ShareError> {
    let Value::Array(nodes) = value else {
        return Err(ShareError::InvalidStructure(
            "expected a list of dialog nodes".to_string(),
        ));
    };

    if let Some(first) = nodes.first() {
        if first.get("id").is_none() {
            return Err(ShareError::InvalidStructure(
                "first node has no id".to_string(),
            ));
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pack() -> Vec<DialogNode> {
        vec![
            DialogNode::category(
                "cat-1",
                "1",
                "Tactical",
                vec![
                    DialogNode::message("msg-1", "1", "Rotate B"),
                    DialogNode::message("msg-2", "2", "Need backup ←"),
                ],
            ),
            DialogNode::category("cat-2", "2", "Empty", vec![]),
        ]
    }

    #[test]
    fn test_roundtrip_every_codec() {
        let pack = pack();
        for kind in CodecKind::ALL {
            let code = build_share_code(&pack, kind).unwrap();
            assert_eq!(load_dialogs(&code).unwrap(), pack, "{}", kind);
        }
    }

    #[test]
    fn test_roundtrip_with_settings() {
        let settings = ShareSettings {
            compression_level: 1,
            ..ShareSettings::default()
        };
        let code = build_share_code_with(&pack(), CodecKind::Standard, &settings).unwrap();
        assert_eq!(load_dialogs(&code).unwrap(), pack());
    }

    #[test]
    fn test_byte_order_mark_prefixed_code_loads() {
        let pack = pack();
        for kind in CodecKind::ALL {
            let code = build_share_code(&pack, kind).unwrap();
            let pasted = format!("\u{feff}{}", code);
            assert_eq!(load_dialogs(&pasted).unwrap(), pack, "{}", kind);

            // a mark wrapped into the middle of a code is stripped like a newline
            let chars: Vec<char> = code.chars().collect();
            let mid = chars.len() / 2;
            let split: String = chars[..mid]
                .iter()
                .chain(['\u{feff}', '\n'].iter())
                .chain(chars[mid..].iter())
                .collect();
            assert_eq!(load_dialogs(&split).unwrap(), pack, "{}", kind);
        }
    }

    #[test]
    fn test_next_line_char_is_not_whitespace() {
        let code = build_share_code(&pack(), CodecKind::Arrow).unwrap();
        assert!(load_from_share_code(&format!("{}\u{85}", code)).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(load_from_share_code(""), Err(ShareError::EmptyInput)));
        assert!(matches!(
            load_from_share_code("   "),
            Err(ShareError::EmptyInput)
        ));
    }

    #[test]
    fn test_unrecognized_input() {
        assert!(matches!(
            load_from_share_code("not a code!"),
            Err(ShareError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let code = build_share_code(&json!([]), CodecKind::Blocky).unwrap();
        assert!(load_from_share_code(&code).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_array() {
        let code = build_share_code(&json!({"id": "x"}), CodecKind::Arrow).unwrap();
        assert!(matches!(
            load_from_share_code(&code),
            Err(ShareError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_rejects_first_node_without_id() {
        let code = build_share_code(&json!([{"key": "1", "text": "hi"}]), CodecKind::Standard)
            .unwrap();
        assert!(matches!(
            load_from_share_code(&code),
            Err(ShareError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_only_first_node_is_checked() {
        let tree = json!([{"id": "a"}, {"anything": true}]);
        let code = build_share_code(&tree, CodecKind::Sussy).unwrap();
        assert_eq!(load_from_share_code(&code).unwrap().len(), 2);
        // but the typed loader needs real nodes
        assert!(matches!(
            load_dialogs(&code),
            Err(ShareError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        let compressed = compression::compress("[{\"id\":", DEFAULT_LEVEL).unwrap();
        let code = Codec::for_kind(CodecKind::Arrow).encode(&compressed);
        assert!(matches!(
            load_from_share_code(&code),
            Err(ShareError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_blocky_garbage_fails_in_decompress() {
        assert!(matches!(
            load_from_share_code("▀▄█▌▐░▒▓▀▄█▌"),
            Err(ShareError::Decompress(_))
        ));
    }

    #[test]
    fn test_corrupted_sussy_message() {
        let code = build_share_code(&pack(), CodecKind::Sussy).unwrap();
        let corrupted = format!("{}?{}", &code[..6], &code[6..]);
        let err = load_from_share_code(&corrupted).unwrap_err();
        assert!(matches!(
            err,
            ShareError::Decode {
                codec: CodecKind::Sussy,
                ..
            }
        ));
        assert_eq!(
            err.user_message(),
            "Sussy code appears to be corrupted or invalid."
        );
    }

    #[test]
    fn test_validate_tree_direct() {
        assert!(validate_tree(json!([])).is_ok());
        assert!(validate_tree(json!([{"id": 5}])).is_ok());
        assert!(validate_tree(json!("text")).is_err());
        assert!(validate_tree(json!([1, 2])).is_err());
    }
}
