//! Error types for resmod.

use thiserror::Error;

/// Errors that can occur when loading, converting, or saving resources.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource codec error.
    #[error("{0}")]
    Resource(#[from] resmod_wiienv::Error),

    /// No registered format matches the identifier, extension, or path.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// XML serialization error.
    #[cfg(feature = "xml-export")]
    #[error("XML serialization error: {0}")]
    XmlSerialize(#[from] quick_xml::SeError),

    /// XML deserialization error.
    #[cfg(feature = "xml-export")]
    #[error("XML deserialization error: {0}")]
    XmlDeserialize(#[from] quick_xml::DeError),

    /// JSON error.
    #[cfg(feature = "json-export")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for resmod operations.
pub type Result<T> = std::result::Result<T, Error>;
