//! Shared test utilities for integration tests
//!
//! Builds source/destination trees inside a temp dir and snapshots the
//! destination for comparison.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A source tree and a destination root side by side in one temp dir.
pub struct Workspace {
    _temp: TempDir,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl Workspace {
    /// Destination starts with `_index.md` containing `index`.
    pub fn new(index: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("docs");
        let dest = temp.path().join("content");
        fs::create_dir_all(&source).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("_index.md"), index).unwrap();
        Self {
            _temp: temp,
            source,
            dest,
        }
    }

    /// Write a file under the source root, creating parents.
    pub fn source_file(&self, relative: &str, contents: &str) {
        let path = self.source.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read_dest(&self, relative: &str) -> String {
        fs::read_to_string(self.dest.join(relative)).unwrap()
    }
}

/// Relative path -> contents for every file under `root`.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read(e.path()).unwrap())
        })
        .collect()
}
