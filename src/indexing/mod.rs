//! Source file enumeration
//!
//! Walks a base directory and returns the candidate source files, in the order
//! the extractor processes them.
//!
//! # Example
//!
//! ```ignore
//! use gherkin_scenarios::indexing::collect_files;
//!
//! let files = collect_files(&repo_dir, "go")?;
//! println!("Found {} Go files", files.len());
//! ```

mod files;

pub use files::{collect_files, has_extension};
