//! Error types for buttons-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or reading a button registry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Descriptor rejected at registration time.
    #[error("invalid descriptor '{id}': {reason}")]
    InvalidDescriptor { id: String, reason: String },

    /// No descriptor registered under the id at the given index.
    #[error("no button '{id}' at index {index}")]
    NotFound { id: String, index: usize },

    /// Manifest file not found at the expected path.
    #[error("button manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Failed to parse manifest TOML.
    #[error("failed to parse button manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// I/O error reading the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the bootstrap payload.
    #[error("failed to serialize bootstrap payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-descriptor error.
    pub fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
