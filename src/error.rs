// file: src/error.rs
// version: 1.3.0
// guid: d4e5f6a7-b8c9-0123-4567-890123defabc

//! Error types shared by both slinky binaries

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, SlinkyError>;

/// Error types for link scanning and creation
#[derive(Error, Debug)]
pub enum SlinkyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("path prefix error: {0}")]
    Prefix(#[from] std::path::StripPrefixError),

    #[error("{0}: No such file or directory")]
    PathNotFound(String),

    #[error("Target does not exist; refusing to create dangling symlink without --allow-dangling")]
    DanglingRefused,

    #[error("Target does not exist; cannot create {0}")]
    TargetMissing(&'static str),

    #[error("cannot hard link a directory")]
    HardLinkDirectory,

    #[error("Hardlink failed (likely cross-device): {0}")]
    HardLinkFailed(#[source] std::io::Error),

    #[error("Target is required")]
    TargetRequired,

    #[error("Could not get basename; target path terminates in ..")]
    NoBasename,

    #[error("Failed to resolve absolute path for {path}: {source}")]
    Canonicalize {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to calculate relative path")]
    RelativePath,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SlinkyError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap a canonicalize failure with the path that caused it
    pub fn canonicalize(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Canonicalize {
            path: path.into(),
            source,
        }
    }
}
