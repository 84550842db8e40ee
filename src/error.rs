//! Error types for the dirdump utilities.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors for a concat or map run.
///
/// Per-file read failures during a concat run are not represented here: they
/// are recorded inline in the output artifact and the run continues.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("Failed to walk {root:?}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to list directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file {path:?}: {source}")]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for DumpError {
    fn from(err: config::ConfigError) -> Self {
        DumpError::ConfigError(err.to_string())
    }
}
