pub mod algorithms;
pub mod codec;

pub use codec::{AlphabetCodec, ArrowCodec, Base64Codec, BlockyCodec, Codec, SussyCodec};
