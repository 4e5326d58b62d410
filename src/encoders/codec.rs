use crate::core::alphabet::Alphabet;
use crate::core::alphabets::{ARROW, BASE64, BLOCKY, SUSSY};
use crate::core::config::CodecKind;
use crate::encoders::algorithms::errors::DecodeError;
use crate::encoders::algorithms::{chunked, digit_pair};

/// Bidirectional mapping between bytes and a symbol string in one alphabet.
///
/// For every codec `decode(&encode(x)) == x`, and whitespace inserted into
/// an encoded string is ignored by `decode`.
pub trait AlphabetCodec {
    fn kind(&self) -> CodecKind;
    fn alphabet(&self) -> &'static Alphabet;
    fn encode(&self, data: &[u8]) -> String;
    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError>;
}

/// RFC 4648 base64: strict decode, bad padding or characters fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

/// Blocky: 3-bit packing. Decoding skips unknown characters instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockyCodec;

/// Arrow: two single-codepoint glyphs per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowCodec;

/// Sussy: two multi-codepoint clusters per byte, split by longest match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SussyCodec;

impl AlphabetCodec for Base64Codec {
    fn kind(&self) -> CodecKind {
        CodecKind::Standard
    }

    fn alphabet(&self) -> &'static Alphabet {
        &BASE64
    }

    fn encode(&self, data: &[u8]) -> String {
        chunked::encode_chunked(data, &BASE64)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        chunked::decode_chunked_strict(encoded, &BASE64)
    }
}

impl AlphabetCodec for BlockyCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Blocky
    }

    fn alphabet(&self) -> &'static Alphabet {
        &BLOCKY
    }

    fn encode(&self, data: &[u8]) -> String {
        chunked::encode_chunked(data, &BLOCKY)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        Ok(chunked::decode_chunked_lenient(encoded, &BLOCKY))
    }
}

impl AlphabetCodec for ArrowCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Arrow
    }

    fn alphabet(&self) -> &'static Alphabet {
        &ARROW
    }

    fn encode(&self, data: &[u8]) -> String {
        digit_pair::encode_pairs(data, &ARROW)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        digit_pair::decode_pairs(encoded, &ARROW)
    }
}

impl AlphabetCodec for SussyCodec {
    fn kind(&self) -> CodecKind {
        CodecKind::Sussy
    }

    fn alphabet(&self) -> &'static Alphabet {
        &SUSSY
    }

    fn encode(&self, data: &[u8]) -> String {
        digit_pair::encode_pairs(data, &SUSSY)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        digit_pair::decode_pairs(encoded, &SUSSY)
    }
}

/// The closed set of share-code codecs.
#[derive(Debug, Clone, Copy)]
pub enum Codec {
    Base64(Base64Codec),
    Blocky(BlockyCodec),
    Arrow(ArrowCodec),
    Sussy(SussyCodec),
}

impl Codec {
    /// Looks up the implementation for a codec tag.
    pub fn for_kind(kind: CodecKind) -> Self {
        match kind {
            CodecKind::Standard => Codec::Base64(Base64Codec),
            CodecKind::Blocky => Codec::Blocky(BlockyCodec),
            CodecKind::Arrow => Codec::Arrow(ArrowCodec),
            CodecKind::Sussy => Codec::Sussy(SussyCodec),
        }
    }

    fn inner(&self) -> &dyn AlphabetCodec {
        match self {
            Codec::Base64(c) => c,
            Codec::Blocky(c) => c,
            Codec::Arrow(c) => c,
            Codec::Sussy(c) => c,
        }
    }
}

impl From<CodecKind> for Codec {
    fn from(kind: CodecKind) -> Self {
        Codec::for_kind(kind)
    }
}

impl AlphabetCodec for Codec {
    fn kind(&self) -> CodecKind {
        self.inner().kind()
    }

    fn alphabet(&self) -> &'static Alphabet {
        self.inner().alphabet()
    }

    fn encode(&self, data: &[u8]) -> String {
        self.inner().encode(data)
    }

    fn decode(&self, encoded: &str) -> Result<Vec<u8>, DecodeError> {
        self.inner().decode(encoded)
    }
}

/// Encodes bytes with the codec for `kind`.
pub fn encode(data: &[u8], kind: CodecKind) -> String {
    Codec::for_kind(kind).encode(data)
}

/// Decodes a symbol string with the codec for `kind`.
pub fn decode(encoded: &str, kind: CodecKind) -> Result<Vec<u8>, DecodeError> {
    Codec::for_kind(kind).decode(encoded)
}
