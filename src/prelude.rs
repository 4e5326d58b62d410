//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use phrase_share::prelude::*;
//!
//! let pack = vec![DialogNode::message("m-1", "1", "Need healing")];
//! let code = build_share_code(&pack, CodecKind::Blocky).unwrap();
//! assert_eq!(detect_format(&code).unwrap(), CodecKind::Blocky);
//! assert_eq!(load_dialogs(&code).unwrap(), pack);
//! ```

pub use crate::{
    // Codecs
    AlphabetCodec,
    Codec,
    CodecKind,
    DecodeError,
    // Dialog model
    DialogNode,
    Preset,
    PresetStore,
    ShareError,
    ShareSettings,
    // Pipeline
    build_share_code,
    decode,
    detect_format,
    encode,
    load_dialogs,
    load_from_share_code,
};
