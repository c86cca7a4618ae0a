//! Output Format Tests
//!
//! Runs the CLI binary and checks the text and JSON reports.

pub mod cli_output_tests;
