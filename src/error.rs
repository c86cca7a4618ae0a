//! Error types and exit codes for gherkin-scenarios

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for scenario extraction
#[derive(Error, Debug)]
pub enum GherkinError {
    #[error("Failed to walk {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("No .{extension} source files found within {}", base.display())]
    NoFilesFound { base: PathBuf, extension: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    ParseFailure { path: PathBuf, message: String },

    #[error("Failed to load grammar: {message}")]
    Language { message: String },

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GherkinError {
    /// Convert error to the process exit code reported by the CLI:
    /// - 0: Success
    /// - 1: Traversal, read failure or no source files
    /// - 3: Parse failure
    /// - 4: Internal failure (grammar, serialization)
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Traversal { .. } => ExitCode::from(1),
            Self::NoFilesFound { .. } => ExitCode::from(1),
            Self::Io { .. } => ExitCode::from(1),
            Self::ParseFailure { .. } => ExitCode::from(3),
            Self::Language { .. } => ExitCode::from(4),
            Self::Serialization(_) => ExitCode::from(4),
        }
    }
}

/// Result type alias for gherkin-scenarios operations
pub type Result<T> = std::result::Result<T, GherkinError>;
