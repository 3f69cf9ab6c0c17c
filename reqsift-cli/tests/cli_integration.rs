//! Integration tests for the reqsift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DESCRIPTION: &str = "The customer should book a washing machine. \
     The administrator must monitor the payment system for fraud.";

fn reqsift() -> Command {
    Command::cargo_bin("reqsift").unwrap()
}

#[test]
fn test_no_arguments_runs_embedded_demo() {
    reqsift()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1. "))
        .stdout(predicate::str::contains("The system shall"));
}

#[test]
fn test_extract_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("description.txt");
    fs::write(&input, DESCRIPTION).unwrap();

    reqsift()
        .arg("extract")
        .arg("-i")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. The customer shall book"))
        .stdout(predicate::str::contains("2. The administrator shall monitor"));
}

#[test]
fn test_extract_from_stdin() {
    reqsift()
        .arg("extract")
        .arg("-i")
        .arg("-")
        .write_stdin(DESCRIPTION)
        .assert()
        .success()
        .stdout(predicate::str::contains("The customer shall book"));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("description.txt");
    fs::write(&input, DESCRIPTION).unwrap();

    reqsift()
        .arg("extract")
        .arg("-i")
        .arg(&input)
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"requirement\""))
        .stdout(predicate::str::contains("\"stakeholder\": \"Customer\""))
        .stdout(predicate::str::contains("\"categories\""));
}

#[test]
fn test_markdown_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("description.txt");
    fs::write(&input, DESCRIPTION).unwrap();

    reqsift()
        .arg("extract")
        .arg("-i")
        .arg(&input)
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Requirements"))
        .stdout(predicate::str::contains("## Customer"))
        .stdout(predicate::str::contains("*Total requirements:"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("description.txt");
    let output = temp_dir.path().join("requirements.txt");
    fs::write(&input, DESCRIPTION).unwrap();

    reqsift()
        .arg("extract")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("The customer shall book"));
}

#[test]
fn test_missing_input_file_fails() {
    reqsift()
        .arg("extract")
        .arg("-i")
        .arg("no-such-description.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_empty_description_yields_no_output_lines() {
    reqsift()
        .arg("extract")
        .arg("-i")
        .arg("-")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_custom_lexicon_profile() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("description.txt");
    fs::write(&input, "The patient should book a scanner appointment.").unwrap();

    let profile = temp_dir.path().join("clinic.toml");
    fs::write(
        &profile,
        r#"
[metadata]
code = "en-clinic"
name = "English (clinic)"

[vocabulary]
action_verbs = ["book", "view"]
modal_verbs = ["should", "must"]

[scoring]
requirement_keywords = ["should", "book"]
component_keywords = ["appointment", "scanner"]
role_keywords = ["patient"]

[scoring.weights]
action_verb = 2
modal = 3
svo = 2
requirement_keyword = 3
component_keyword = 2
role_keyword = 2

[actors]
customer = ["customer", "patient"]
administrator = ["administrator", "admin"]

[refinement]
lead_phrases = [
    "the system shall",
    "the customer shall",
    "the customer should",
    "the administrator shall",
    "the administrator should",
]
default_lead = "The system shall "

[classification]
nonfunctional_keywords = ["security"]

[[classification.categories]]
name = "Appointments"
keywords = ["appointment", "book"]
"#,
    )
    .unwrap();

    reqsift()
        .arg("extract")
        .arg("-i")
        .arg(&input)
        .arg("--lexicon")
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("The customer shall book"));
}

#[test]
fn test_list_categories() {
    reqsift()
        .arg("list")
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Washing/Drying"))
        .stdout(predicate::str::contains("Payment"));
}

#[test]
fn test_list_formats() {
    reqsift()
        .arg("list")
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}
