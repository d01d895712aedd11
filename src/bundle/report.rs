//! Run report

use std::ffi::OsString;
use std::path::PathBuf;

/// One relocated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleWrite {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Two source files that map to the same bundle directory. The later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemCollision {
    pub stem: OsString,
    pub first: PathBuf,
    pub second: PathBuf,
}

/// What a successful run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestructureReport {
    pub source_root: PathBuf,
    pub destination_root: PathBuf,
    pub directories_visited: usize,
    /// Index-like source files copied over the destination index, in order
    pub index_merges: Vec<PathBuf>,
    pub bundles: Vec<BundleWrite>,
    pub collisions: Vec<StemCollision>,
    /// Non-Markdown files, ignored
    pub skipped_other: usize,
    /// Markdown files whose stem is empty or not a single normal path segment
    pub skipped_invalid_stem: Vec<PathBuf>,
}

impl RestructureReport {
    pub fn bundles_written(&self) -> usize {
        self.bundles.len()
    }

    /// Number of distinct bundle directories produced.
    pub fn distinct_bundles(&self) -> usize {
        self.bundles.len() - self.collisions.len()
    }
}
