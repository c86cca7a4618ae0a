//! Extraction options.

use serde::{Deserialize, Serialize};

/// Default source-file extension scanned for marker calls.
pub const DEFAULT_EXTENSION: &str = "go";

/// Options controlling file enumeration and scenario normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// File extension (without the dot) of candidate source files. Matched exactly.
    pub extension: String,
    /// Remove the enclosing `"` or `` ` `` delimiters from each scenario.
    pub strip_delimiters: bool,
    /// Parse files on the rayon thread pool. Results keep enumeration order.
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            strip_delimiters: false,
            parallel: false,
        }
    }
}

impl ExtractOptions {
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_strip_delimiters(mut self, strip: bool) -> Self {
        self.strip_delimiters = strip;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
