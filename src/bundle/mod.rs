//! Page-bundle restructuring
//!
//! Rewrites a Markdown source tree into the layout page-bundle site
//! generators expect: every content page `name.md` becomes
//! `<destination>/name/_index.md`. Output is flat: bundles are keyed by stem
//! only, whatever source subdirectory the file came from.
//!
//! A run has three phases:
//! 1. capture the destination's `_index.md`
//! 2. walk the source tree and relocate every Markdown file
//! 3. write the captured index back
//!
//! Any I/O failure aborts the run. Files already written stay on disk and the
//! destination index is not restored; re-running after fixing the cause
//! repairs the output since directory creation and file writes are idempotent.

pub mod index;
pub mod report;

pub use index::PreservedIndex;
pub use report::{BundleWrite, RestructureReport, StemCollision};

use crate::error::BundleError;
use crate::tree::path::{
    bundle_dir, bundle_index_path, bundle_stem, is_index_like, root_index_path,
};
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Restructures one source tree into one destination root.
pub struct Restructurer {
    source_root: PathBuf,
    destination_root: PathBuf,
}

impl Restructurer {
    pub fn new(source_root: impl Into<PathBuf>, destination_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
        }
    }

    /// Run the full transformation.
    #[instrument(skip(self), fields(source = %self.source_root.display(), destination = %self.destination_root.display()))]
    pub fn run(&self) -> Result<RestructureReport, BundleError> {
        let start = Instant::now();
        info!(
            "source: {}, output: {}, index: {}",
            self.source_root.display(),
            self.destination_root.display(),
            root_index_path(&self.destination_root).display()
        );

        // Phase 1: nothing is written before the index is safely in memory.
        let preserved = PreservedIndex::capture(&self.destination_root)?;

        // Phase 2
        let entries = match self.walker().walk() {
            Ok(entries) => {
                debug!(entry_count = entries.len(), "Walked source tree");
                entries
            }
            Err(e) => {
                error!("Source walk failed: {}", e);
                return Err(e);
            }
        };

        let mut report = RestructureReport {
            source_root: self.source_root.clone(),
            destination_root: self.destination_root.clone(),
            ..RestructureReport::default()
        };
        let mut seen_stems: HashMap<OsString, PathBuf> = HashMap::new();

        for entry in entries {
            match entry {
                Entry::Directory { path, depth } => {
                    info!("Processing {}", path.display());
                    debug!(depth, "Entered directory");
                    report.directories_visited += 1;
                }
                Entry::Other { path } => {
                    debug!(path = %path.display(), "Skipping non-Markdown file");
                    report.skipped_other += 1;
                }
                Entry::Markdown { path, file_name } => {
                    if is_index_like(&file_name) {
                        debug!(path = %path.display(), "Merging index-like file into destination index");
                        preserved.overwrite_with(&path)?;
                        report.index_merges.push(path);
                        continue;
                    }

                    let Some(stem) = bundle_stem(&file_name) else {
                        warn!(
                            path = %path.display(),
                            "Skipping Markdown file whose stem is empty or not a single path segment"
                        );
                        report.skipped_invalid_stem.push(path);
                        continue;
                    };

                    let destination = self.write_bundle(&path, stem)?;

                    if let Some(first) = seen_stems.get(stem) {
                        warn!(
                            stem = %stem.to_string_lossy(),
                            first = %first.display(),
                            second = %path.display(),
                            "Stem collision, later file overwrites earlier bundle"
                        );
                        report.collisions.push(StemCollision {
                            stem: stem.to_os_string(),
                            first: first.clone(),
                            second: path.clone(),
                        });
                    }
                    seen_stems.insert(stem.to_os_string(), path.clone());

                    report.bundles.push(BundleWrite {
                        source: path,
                        destination,
                    });
                }
            }
        }

        // Phase 3
        preserved.restore()?;

        info!(
            directories = report.directories_visited,
            bundles = report.bundles_written(),
            index_merges = report.index_merges.len(),
            collisions = report.collisions.len(),
            duration_ms = start.elapsed().as_millis(),
            "Restructure completed"
        );

        Ok(report)
    }

    /// Copy `source` to `<destination>/<stem>/_index.md`, creating the directory.
    fn write_bundle(&self, source: &Path, stem: &OsStr) -> Result<PathBuf, BundleError> {
        let directory = bundle_dir(&self.destination_root, stem);
        fs::create_dir_all(&directory).map_err(|e| BundleError::create_dir(&directory, e))?;

        let target = bundle_index_path(&self.destination_root, stem);
        info!("Writing {}", target.display());

        let contents = fs::read(source).map_err(|e| BundleError::read(source, e))?;
        fs::write(&target, contents).map_err(|e| BundleError::write(&target, e))?;
        Ok(target)
    }

    /// A destination nested inside the source is pruned so earlier output is
    /// never fed back in as input.
    fn walker(&self) -> Walker {
        let mut config = WalkerConfig::default();
        if self.destination_root != self.source_root
            && self.destination_root.starts_with(&self.source_root)
        {
            config.exclude.push(self.destination_root.clone());
        }
        Walker::with_config(self.source_root.clone(), config)
    }
}

/// Restructure `source_root` into `destination_root`.
///
/// `destination_root/_index.md` must exist; its content is identical before
/// and after a successful run.
pub fn restructure(
    source_root: &Path,
    destination_root: &Path,
) -> Result<RestructureReport, BundleError> {
    Restructurer::new(source_root, destination_root).run()
}
