//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ExtractOptions, DEFAULT_EXTENSION};

/// Harvest gherkin.Scenario narratives from Go sources
#[derive(Parser, Debug)]
#[command(name = "gherkin-scenarios")]
#[command(about = "Collects gherkin.Scenario(...) string literals from a tree of Go source files")]
#[command(version)]
pub struct Cli {
    /// Base directory to scan
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Extension of the source files to scan (without the dot)
    #[arg(long, env = "GHERKIN_SCENARIOS_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Remove the enclosing quote or backtick delimiters from each scenario
    #[arg(long, env = "GHERKIN_SCENARIOS_STRIP_DELIMITERS")]
    pub strip_delimiters: bool,

    /// Parse files in parallel (output order is unchanged)
    #[arg(long, env = "GHERKIN_SCENARIOS_PARALLEL")]
    pub parallel: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scenarios separated by blank lines
    #[default]
    Text,
    /// The full results (walked files and scenarios) as JSON
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Extraction options selected by the flags
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::default()
            .with_extension(self.extension.clone())
            .with_strip_delimiters(self.strip_delimiters)
            .with_parallel(self.parallel)
    }
}
