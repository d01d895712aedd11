//! Filename predicates and bundle path construction

use crate::error::BundleError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Name of the landing page inside every bundle directory.
pub const INDEX_FILE_NAME: &str = "_index.md";

/// Extension (without the dot) a source file must carry to be processed.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Substring that marks a source file as index-like.
pub const INDEX_MARKER: &str = "index";

/// True when the file name ends with `.md` (case-sensitive).
///
/// Names need not be valid UTF-8; the suffix check survives lossy decoding
/// since invalid bytes never decode to ASCII.
pub fn is_markdown(file_name: &OsStr) -> bool {
    let name = file_name.to_string_lossy();
    name.rsplit_once('.')
        .map(|(_, ext)| ext == MARKDOWN_EXTENSION)
        .unwrap_or(false)
}

/// True when `index` appears anywhere in the file name, extension included.
///
/// `myindex.md`, `index.md` and `_index.md` all qualify; `Index.md` does not.
pub fn is_index_like(file_name: &OsStr) -> bool {
    file_name.to_string_lossy().contains(INDEX_MARKER)
}

/// Strip the final extension segment from a file name.
///
/// Only the last `.`-segment is dropped, so `my.page.md` yields `my.page`.
/// Returns `None` unless the stem is exactly one normal path segment: no
/// extension, `.md` alone, and dot-only stems (`..md`, `...md`) are all
/// rejected so a bundle never lands on or above the destination root.
pub fn bundle_stem(file_name: &OsStr) -> Option<&OsStr> {
    let path = Path::new(file_name);
    path.extension()?;
    let stem = path.file_stem()?;

    let mut components = Path::new(stem).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(stem),
        _ => None,
    }
}

/// Directory that holds the bundle for `stem`, directly under the destination root.
pub fn bundle_dir(destination_root: &Path, stem: &OsStr) -> PathBuf {
    destination_root.join(stem)
}

/// `destination_root/<stem>/_index.md`
pub fn bundle_index_path(destination_root: &Path, stem: &OsStr) -> PathBuf {
    bundle_dir(destination_root, stem).join(INDEX_FILE_NAME)
}

/// The destination's top-level index file.
pub fn root_index_path(destination_root: &Path) -> PathBuf {
    destination_root.join(INDEX_FILE_NAME)
}

/// Canonicalize a root directory.
///
/// Uses `dunce` so Windows paths stay free of the `\\?\` prefix in progress
/// output. A missing path surfaces as `SourceNotFound` for source roots; the
/// caller decides which variant applies via `missing`.
pub fn resolve_root(
    path: &Path,
    missing: impl FnOnce(PathBuf) -> BundleError,
) -> Result<PathBuf, BundleError> {
    let resolved = match dunce::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(missing(path.to_path_buf()))
        }
        Err(e) => return Err(BundleError::read(path, e)),
    };

    if !resolved.is_dir() {
        return Err(BundleError::NotADirectory(resolved));
    }

    Ok(resolved)
}
