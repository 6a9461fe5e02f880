//! Error types for Wii environment resources.

use thiserror::Error;

/// Errors that can occur when loading or saving resource records.
#[derive(Debug, Error)]
pub enum Error {
    /// Common library error.
    #[error("{0}")]
    Common(#[from] resmod_common::Error),

    /// The buffer is shorter than the record's declared or implied extent.
    #[error("truncated {record}: needed {needed} bytes but only {available} available")]
    TruncatedInput {
        record: &'static str,
        needed: usize,
        available: usize,
    },

    /// A field value has no valid mapping through its encoding.
    #[error("invalid {field}: {value}")]
    InvalidEncoding { field: &'static str, value: String },

    /// A child list or total size no longer fits its header field.
    #[error("{record} cannot store {count} in its {field} field")]
    CountOverflow {
        record: &'static str,
        field: &'static str,
        count: usize,
    },
}

impl Error {
    /// Check if this error was caused by input ending early.
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            Error::TruncatedInput { .. }
                | Error::Common(resmod_common::Error::TruncatedInput { .. })
        )
    }
}

/// Result type for resource operations.
pub type Result<T> = std::result::Result<T, Error>;
