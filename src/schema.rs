//! Output schema for scenario extraction

use serde::Serialize;
use std::path::PathBuf;

/// Files walked during an extraction and the scenarios gathered from them.
///
/// `scenarios` is ordered by file-enumeration order, then by the order the
/// marker calls appear while walking each file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Results {
    pub walked: Vec<PathBuf>,
    pub scenarios: Vec<String>,
}

impl Results {
    /// Render scenarios as plain text, separated by blank lines.
    pub fn to_text(&self) -> String {
        self.scenarios.join("\n\n")
    }
}
