//! Common error types used throughout shelfsort.
//!
//! A single error type covers the failure cases the organizing pipelines
//! share: missing sources, destination collisions, bad configuration, and
//! plain I/O failures.

use std::path::PathBuf;

/// Common error type for shelfsort.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source path does not exist or is not readable.
    #[error("Source not found: {0}")]
    SourceNotFound(PathBuf),

    /// A destination path already exists and the collision policy forbids
    /// touching it.
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Config error: {0}")]
    Config(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new SourceNotFound error.
    pub fn source_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::SourceNotFound(path.into())
    }

    /// Create a new DestinationExists error.
    pub fn destination_exists<P: Into<PathBuf>>(path: P) -> Self {
        Self::DestinationExists(path.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
