//! Scenario extraction orchestration
//!
//! Enumerates the source files under a base directory, parses each one, and
//! gathers the scenarios of every marker call into a single [`Results`].
//! Any traversal, read or parse failure aborts the whole extraction.

use std::fs;
use std::io;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::ExtractOptions;
use crate::detectors::gherkin::extract_scenarios;
use crate::error::{GherkinError, Result};
use crate::indexing::collect_files;
use crate::parsing::parse_go;
use crate::schema::Results;

/// Extract scenarios from every Go source file under `base` with default options.
///
/// This is the main entry point for scenario extraction.
pub fn extract(base: impl AsRef<Path>) -> Result<Results> {
    extract_with_options(base, &ExtractOptions::default())
}

/// Extract scenarios from every matching source file under `base`.
///
/// # Errors
///
/// - `Traversal` if the directory walk fails
/// - `NoFilesFound` if no file under `base` has the configured extension
/// - `Io` / `ParseFailure` for the first file that cannot be read or parsed
pub fn extract_with_options(base: impl AsRef<Path>, options: &ExtractOptions) -> Result<Results> {
    let base = base.as_ref();
    let files = collect_files(base, &options.extension)?;
    if files.is_empty() {
        return Err(GherkinError::NoFilesFound {
            base: base.to_path_buf(),
            extension: options.extension.clone(),
        });
    }

    let per_file = if options.parallel {
        // Collect every outcome first so the reported error is the earliest
        // failing file in enumeration order, as in a sequential run.
        files
            .par_iter()
            .map(|file| extract_file(file, options))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>>>()?
    } else {
        files
            .iter()
            .map(|file| extract_file(file, options))
            .collect::<Result<Vec<_>>>()?
    };

    let scenarios: Vec<String> = per_file.into_iter().flatten().collect();

    info!(
        base = %base.display(),
        files = files.len(),
        scenarios = scenarios.len(),
        "extracted scenarios"
    );

    Ok(Results {
        walked: files,
        scenarios,
    })
}

/// Read and parse one file, returning its scenarios in walk order.
///
/// Source that is not valid UTF-8 is a `ParseFailure`, like any other
/// malformed Go file.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Vec<String>> {
    let source = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => GherkinError::ParseFailure {
            path: path.to_path_buf(),
            message: "invalid UTF-8 encoding".to_string(),
        },
        _ => GherkinError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    extract_source(path, &source, options)
}

/// Parse already-loaded source text and return its scenarios in walk order.
///
/// `path` is used only to label errors.
pub fn extract_source(path: &Path, source: &str, options: &ExtractOptions) -> Result<Vec<String>> {
    let tree = parse_go(path, source)?;
    let scenarios = extract_scenarios(&tree, source, options);
    debug!(file = %path.display(), count = scenarios.len(), "walked file");
    Ok(scenarios)
}
