//! TestRepo builder for integration testing
//!
//! Creates temporary directories holding Go sources with marker calls.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Builder for creating temporary source trees
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test repository
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the test repository root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add a Go test file whose test function body is `body`
    pub fn add_go_test(&self, relative_path: &str, body: &str) -> &Self {
        let content = format!(
            "package specs_test\n\nimport (\n\t\"testing\"\n\n\t\"example.com/gherkin\"\n)\n\nfunc TestSpec(t *testing.T) {{\n{}\n}}\n",
            body
        );
        self.add_file(relative_path, &content)
    }

    /// Add a Go test file containing one marker call per scenario, in order
    pub fn add_scenarios(&self, relative_path: &str, scenarios: &[&str]) -> &Self {
        let body = scenarios
            .iter()
            .map(|s| format!("\tgherkin.Scenario(`{}`)", s))
            .collect::<Vec<_>>()
            .join("\n");
        self.add_go_test(relative_path, &body)
    }

    /// Run the gherkin-scenarios binary in the repository root
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_gherkin-scenarios"))
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (exit code, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (Option<i32>, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
