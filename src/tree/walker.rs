//! Source tree walker
//!
//! Depth-first traversal that threads the full source path of every entry.
//! Within a directory, files come before subdirectories and both are ordered
//! by file name, so a run over the same tree always processes files in the
//! same order.

use crate::error::BundleError;
use crate::tree::path::is_markdown;
use std::cmp::Ordering;
use std::ffi::OsString;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Source tree entry types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A directory, including the source root itself at depth 0
    Directory { path: PathBuf, depth: usize },
    /// A Markdown file; the name is kept as an `OsString` so non-UTF-8 names survive
    Markdown { path: PathBuf, file_name: OsString },
    /// Non-Markdown files and dangling symlinks
    Other { path: PathBuf },
}

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to descend through symlinked directories (default: false)
    pub follow_symlinks: bool,
    /// Directories pruned from the walk, e.g. a destination nested inside the source
    pub exclude: Vec<PathBuf>,
}

/// Source tree walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the source tree and collect all entries in processing order.
    ///
    /// The first traversal error aborts the walk.
    pub fn walk(&self) -> Result<Vec<Entry>, BundleError> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by(files_first_by_name)
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = entry?;
            let path = entry.path().to_path_buf();

            if entry.file_type().is_dir() {
                entries.push(Entry::Directory {
                    path,
                    depth: entry.depth(),
                });
                continue;
            }

            // Symlinks to regular files count as files; dangling links do not.
            if !entry.file_type().is_file() && !path.is_file() {
                entries.push(Entry::Other { path });
                continue;
            }

            if is_markdown(entry.file_name()) {
                entries.push(Entry::Markdown {
                    file_name: entry.file_name().to_os_string(),
                    path,
                });
            } else {
                entries.push(Entry::Other { path });
            }
        }

        Ok(entries)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self
                .config
                .exclude
                .iter()
                .any(|excluded| entry.path() == excluded.as_path())
    }
}

/// Files sort before directories; ties break on file name.
fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
