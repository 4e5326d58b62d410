use crate::encoders::algorithms::errors::ShareError;
use std::io::{Read, Write};

/// gzip level used when no setting overrides it.
pub const DEFAULT_LEVEL: u32 = 6;

/// Compress UTF-8 text to a gzip stream.
pub fn compress(text: &str, level: u32) -> Result<Vec<u8>, ShareError> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder.write_all(text.as_bytes()).map_err(ShareError::Compress)?;
    encoder.finish().map_err(ShareError::Compress)
}

/// Decompress a gzip stream back to UTF-8 text.
///
/// Truncated streams, non-gzip bytes and non-UTF-8 payloads all fail with
/// [`ShareError::Decompress`].
pub fn decompress(data: &[u8]) -> Result<String, ShareError> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(data);
    let mut result = String::new();
    decoder
        .read_to_string(&mut result)
        .map_err(ShareError::Decompress)?;
    Ok(result)
}
