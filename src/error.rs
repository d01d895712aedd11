//! Error types for the page-bundle restructurer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while restructuring a Markdown tree.
///
/// Every variant is fatal to the run. I/O variants carry the path that
/// failed so the CLI diagnostic identifies it.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Destination index not found: {path}")]
    IndexNotFound { path: PathBuf },

    #[error("Source root not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl BundleError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
