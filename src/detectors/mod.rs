//! Syntax-tree detectors
//!
//! - `common`: traversal and node-text helpers
//! - `gherkin`: the `gherkin.Scenario(...)` marker-call matcher

pub mod common;
pub mod gherkin;
