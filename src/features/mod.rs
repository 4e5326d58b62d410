//! Pipeline stages around the alphabet codecs.
//!
//! Compression and format detection live here, separate from the
//! byte-to-symbol encoders.

pub mod compression;
pub mod detection;

pub use compression::{compress, decompress};
