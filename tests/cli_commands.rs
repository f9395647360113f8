mod common;

use common::{complete_record, CliHarness};
use predicates::prelude::*;
use prompt_architect::domain::FormRecord;

#[test]
fn version_lists_build_metadata() {
    let harness = CliHarness::new();
    harness
        .command()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("CLI version"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn prompt_with_no_saved_answers_uses_placeholders() {
    let harness = CliHarness::new();
    harness
        .command()
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("# AI PROMPT ARCHITECT SPECIFICATION"))
        .stdout(predicate::str::contains("**Name:** Not specified"))
        .stdout(predicate::str::contains(
            "No third-party integrations selected.",
        ));
}

#[test]
fn prompt_renders_saved_answers_to_a_file() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());
    let target = harness.home().join("prompt.txt");

    harness
        .command()
        .args(["prompt", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt written to"));

    let text = std::fs::read_to_string(&target).unwrap();
    assert!(text.contains("**Name:** Jane"));
    assert!(text.contains("**Application Name:** Acme"));
    assert!(text.contains("**Technology Stack:** React + Node.js"));
}

#[test]
fn show_lists_answers_by_step() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());
    harness
        .command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 1. Author Information ==="))
        .stdout(predicate::str::contains("Jane"))
        .stdout(predicate::str::contains("React + Node.js"));
}

#[test]
fn export_writes_data_and_prompt_named_after_the_app() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());
    let dir = harness.home().join("out");

    harness
        .command()
        .args(["export", "--with-prompt", "--dir"])
        .arg(&dir)
        .assert()
        .success();

    let data = std::fs::read_to_string(dir.join("Acme-data.json")).unwrap();
    assert_eq!(FormRecord::from_json(&data).unwrap(), complete_record());
    assert!(dir.join("Acme-prompt.txt").exists());
}

#[test]
fn export_defaults_to_configured_directory() {
    let harness = CliHarness::new();
    harness.command().arg("export").assert().success();
    assert!(harness.exports().join("project-data.json").exists());
}

#[test]
fn import_replaces_saved_answers() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());
    let file = harness.write_file("incoming.json", r#"{"name":"Sam","appName":"Beta"}"#);

    harness
        .command()
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data imported successfully."));

    let saved = harness.saved();
    assert_eq!(saved.name, "Sam");
    assert_eq!(saved.app_name, "Beta");
    assert_eq!(saved.email, "");
}

#[test]
fn invalid_import_fails_and_keeps_saved_answers() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());
    let file = harness.write_file("broken.json", "{ not json");

    harness
        .command()
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Import failed"));

    assert_eq!(harness.saved(), complete_record());
}

#[test]
fn reset_requires_confirmation() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());

    harness
        .command()
        .arg("reset")
        .env("PROMPT_ARCHITECT_TEST_TEXT_INPUTS", "n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was changed."));
    assert_eq!(harness.saved(), complete_record());

    harness.command().args(["reset", "--yes"]).assert().success();
    assert_eq!(harness.saved(), FormRecord::default());
}

#[test]
fn ephemeral_runs_ignore_saved_answers() {
    let harness = CliHarness::new();
    harness.seed(&complete_record());
    harness
        .command()
        .args(["--ephemeral", "prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Name:** Not specified"));
}

#[test]
fn unreadable_config_is_reported() {
    let harness = CliHarness::new();
    std::fs::write(harness.home().join("config").join("config.json"), "[").unwrap();
    harness
        .command()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Configuration error"));
}
