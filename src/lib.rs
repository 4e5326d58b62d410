//! Share codes for quick-phrase dialog packs.
//!
//! A dialog tree is serialized to JSON, gzip-compressed and written out in
//! one of four alphabets. Pasted codes are sniffed back to their alphabet,
//! decoded, decompressed and checked before they replace anything.

mod core;
mod encoders;
mod features;

pub mod dialog;
pub mod share;
pub mod prelude;
pub mod store;

pub use crate::core::alphabet::{Alphabet, Symbolization, is_code_whitespace};
pub use crate::core::alphabets;
pub use crate::core::config::{CodecKind, ShareSettings};
pub use dialog::{DialogNode, Preset, count_messages, find_node};
pub use encoders::algorithms::{
    CodecNotFoundError, DecodeError, ShareError, chunked, digit_pair, find_closest_codec,
};
pub use encoders::codec::{decode, encode};
pub use encoders::{AlphabetCodec, ArrowCodec, Base64Codec, BlockyCodec, Codec, SussyCodec};
pub use features::compression::{self, DEFAULT_LEVEL};
pub use features::detection::{FormatDetector, SniffRule, SniffTest, detect_format};
pub use features::{compress, decompress};
pub use share::{
    build_share_code, build_share_code_with, load_dialogs, load_from_share_code,
    load_with_detector, validate_tree,
};
pub use store::{PresetStore, StoreError};
