//! Preserved destination index
//!
//! The destination's top-level `_index.md` is captured before the walk and
//! written back after it. Index-like source files overwrite it transiently in
//! between; only the captured bytes survive a successful run.

use crate::error::BundleError;
use crate::tree::path::root_index_path;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of the destination index at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreservedIndex {
    path: PathBuf,
    contents: Vec<u8>,
}

impl PreservedIndex {
    /// Read `destination_root/_index.md` in full.
    ///
    /// A missing file is the precondition failure and is reported before
    /// anything under the destination is touched.
    pub fn capture(destination_root: &Path) -> Result<Self, BundleError> {
        let path = root_index_path(destination_root);
        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BundleError::IndexNotFound { path })
            }
            Err(e) => return Err(BundleError::read(path, e)),
        };

        debug!(path = %path.display(), bytes = contents.len(), "Captured destination index");
        Ok(Self { path, contents })
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Copy an index-like source file over the destination index (truncating).
    pub fn overwrite_with(&self, source: &Path) -> Result<(), BundleError> {
        let contents = fs::read(source).map_err(|e| BundleError::read(source, e))?;
        fs::write(&self.path, contents).map_err(|e| BundleError::write(&self.path, e))
    }

    /// Write the captured bytes back. Consumes the value so it happens once.
    pub fn restore(self) -> Result<(), BundleError> {
        fs::write(&self.path, &self.contents).map_err(|e| BundleError::write(&self.path, e))?;
        debug!(path = %self.path.display(), "Restored destination index");
        Ok(())
    }
}
