//! gherkin-scenarios: harvest Gherkin narratives from Go test sources
//!
//! Acceptance tests often describe their behavior inline:
//!
//! ```go
//! gherkin.Scenario(`
//!     Scenario: read user accounts
//!
//!     Given Bruce has registered a user account
//!       And he wants to read other user accounts
//!      Then he is unable to read user accounts`)
//! ```
//!
//! This library walks a directory of Go files, parses each one with
//! tree-sitter, and collects the string literal of every
//! `gherkin.Scenario(<literal>)` call with tabs removed and outer whitespace
//! trimmed, so the narratives can be published as living documentation.
//!
//! # Example
//!
//! ```no_run
//! use gherkin_scenarios::extract;
//!
//! let results = extract("./internal")?;
//! for scenario in &results.scenarios {
//!     println!("{}\n", scenario);
//! }
//! # Ok::<(), gherkin_scenarios::GherkinError>(())
//! ```

pub mod cli;
pub mod config;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod indexing;
pub mod marker;
pub mod parsing;
pub mod schema;
pub mod utils;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use config::ExtractOptions;
pub use detectors::gherkin::{match_marker_call, MARKER_FUNCTION, MARKER_QUALIFIER};
pub use error::{GherkinError, Result};
pub use extract::{extract, extract_file, extract_source, extract_with_options};
pub use indexing::collect_files;
pub use schema::Results;
pub use utils::normalize_scenario;
