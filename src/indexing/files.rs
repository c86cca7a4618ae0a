//! File collection for scenario extraction
//!
//! Recursively collects candidate source files from a directory, filtered by
//! extension. Any traversal error aborts the collection.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::error::{GherkinError, Result};

/// Collect all files under `dir` whose extension is exactly `extension`.
///
/// Entries are visited in file-name order, so the result is deterministic for a
/// given filesystem snapshot. Hidden files and ignore files are not special.
/// Regular files and symbolic links with a matching name are both collected;
/// directory links are not descended into. A link is resolved only when the
/// file is read, so a dangling `x.go` link fails the extraction there.
///
/// # Errors
///
/// Returns `GherkinError::Traversal` on the first entry that cannot be read,
/// including a missing `dir`. The error names the offending path when the
/// walker reports one.
pub fn collect_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| GherkinError::Traversal {
            path: error_path(&source).unwrap_or(dir).to_path_buf(),
            source,
        })?;

        let is_candidate = entry
            .file_type()
            .is_some_and(|t| t.is_file() || t.is_symlink());
        if is_candidate && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    debug!(dir = %dir.display(), count = files.len(), "collected source files");
    Ok(files)
}

/// Path attached to a walk error, looking through depth and line wrappers.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}

/// Check whether `path` ends in `.{extension}`, compared case-sensitively.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == extension)
}
