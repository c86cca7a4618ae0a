//! CLI output format tests

use crate::common::{assert_valid_json, TestRepo};

fn sample_repo() -> TestRepo {
    let repo = TestRepo::new();
    repo.add_scenarios("a_test.go", &["\n\t\tScenario: one\n\t"])
        .add_scenarios("b_test.go", &["Scenario: two"]);
    repo
}

#[test]
fn test_text_output_separates_scenarios() {
    let repo = sample_repo();
    let stdout = repo.run_cli_success(&["."]);
    assert_eq!(stdout, "`\nScenario: one\n`\n\n`Scenario: two`\n");
}

#[test]
fn test_text_output_strip_delimiters() {
    let repo = sample_repo();
    let stdout = repo.run_cli_success(&["--strip-delimiters"]);
    assert_eq!(stdout, "Scenario: one\n\nScenario: two\n");
}

#[test]
fn test_json_output_lists_walked_and_scenarios() {
    let repo = sample_repo();
    let stdout = repo.run_cli_success(&["--format", "json"]);
    let json = assert_valid_json(&stdout, "extract json");

    let walked = json["walked"].as_array().expect("walked array");
    assert_eq!(walked.len(), 2);
    assert!(walked[0].as_str().unwrap().ends_with("a_test.go"));

    let scenarios = json["scenarios"].as_array().expect("scenarios array");
    assert_eq!(scenarios[1], "`Scenario: two`");
}

#[test]
fn test_empty_directory_exit_code() {
    let repo = TestRepo::new();
    let (code, stderr) = repo.run_cli_failure(&["."]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("No .go source files found"), "stderr: {}", stderr);
}

#[test]
fn test_parse_failure_exit_code() {
    let repo = TestRepo::new();
    repo.add_file("broken.go", "package broken\n\nfunc oops( {\n");
    let (code, stderr) = repo.run_cli_failure(&["."]);
    assert_eq!(code, Some(3));
    assert!(stderr.contains("broken.go"), "stderr: {}", stderr);
}

#[test]
fn test_non_utf8_source_exit_code() {
    let repo = TestRepo::new();
    std::fs::write(repo.path().join("binary.go"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let (code, stderr) = repo.run_cli_failure(&["."]);
    assert_eq!(code, Some(3));
    assert!(stderr.contains("binary.go"), "stderr: {}", stderr);
}
