//! Error types for resmod-common.

use thiserror::Error;

/// Common error type for resmod operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while walking a record.
    #[error("truncated input: needed {needed} bytes but only {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// A primitive read or write addressed bytes past the end of its buffer.
    ///
    /// Callers slice buffers to a record's declared size before decoding, so
    /// this indicates a layout bug rather than bad input.
    #[error("offset {offset:#x} (+{len}) out of range for buffer of {size:#x} bytes")]
    OutOfRange { offset: usize, len: usize, size: usize },

    /// A value could not be mapped through its field encoding.
    #[error("invalid encoding for {field}: {value}")]
    InvalidEncoding { field: &'static str, value: String },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
