//! Error types for buttons-host

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] buttons_core::Error),

    #[error("Host configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid host configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request has no action")]
    MissingAction,

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}
