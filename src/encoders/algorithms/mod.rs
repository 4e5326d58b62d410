pub mod chunked;
pub mod digit_pair;
pub mod errors;

// Re-export error types for public API
pub use errors::{CodecNotFoundError, DecodeError, ShareError, find_closest_codec};
