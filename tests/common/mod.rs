#![allow(dead_code)]

use assert_cmd::Command;
use std::{fs, path::Path};
use tempfile::TempDir;

use prompt_architect::{
    config::{Config, ConfigManager},
    domain::FormRecord,
    storage::{FormStore, JsonFileStore},
};

pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI binary against an isolated data directory.
pub struct CliHarness {
    home: TempDir,
}

impl CliHarness {
    pub fn new() -> Self {
        let harness = Self {
            home: tempfile::tempdir().expect("create temp dir"),
        };
        harness.write_config(&Config {
            generation_delay_ms: 0,
            export_dir: Some(harness.exports()),
            ..Config::default()
        });
        harness
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn exports(&self) -> std::path::PathBuf {
        self.home().join("exports")
    }

    pub fn write_config(&self, config: &Config) {
        ConfigManager::with_base_dir(self.home().to_path_buf())
            .expect("config manager")
            .save(config)
            .expect("save config");
    }

    fn store(&self) -> FormStore {
        let backend = JsonFileStore::new(Some(self.home().to_path_buf())).expect("json store");
        FormStore::new(Box::new(backend))
    }

    pub fn seed(&self, record: &FormRecord) {
        self.store().save(record);
    }

    pub fn saved(&self) -> FormRecord {
        self.store().load()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("prompt_architect_cli").expect("binary exists");
        cmd.env("PROMPT_ARCHITECT_HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("PROMPT_ARCHITECT_TEST_MENU_EVENTS")
            .env_remove("PROMPT_ARCHITECT_TEST_TEXT_INPUTS");
        cmd
    }

    pub fn run_wizard(&self, menu_sequences: &[&str], text_inputs: &[&str]) -> CliOutput {
        assert!(
            !menu_sequences.is_empty(),
            "provide at least one menu sequence"
        );
        let mut cmd = self.command();
        cmd.arg("wizard")
            .env("PROMPT_ARCHITECT_TEST_MENU_EVENTS", join_sequences(menu_sequences))
            .env("PROMPT_ARCHITECT_TEST_TEXT_INPUTS", join_sequences(text_inputs));
        let output = cmd.output().expect("run wizard");
        if !output.status.success() {
            panic!(
                "wizard failed: status={}\nstdout:\n{}\nstderr:\n{}",
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn write_file(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.home().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

fn join_sequences(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("|")
}

/// A record with every required field of steps 1 to 7 filled.
pub fn complete_record() -> FormRecord {
    let mut record = FormRecord {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        app_name: "Acme".into(),
        project_type: "web-app".into(),
        project_description: "Subscription analytics".into(),
        target_audience: "Small teams".into(),
        tech_stack: "react-node".into(),
        design_style: "modern".into(),
        color_scheme: "blue-purple".into(),
        ..FormRecord::default()
    };
    record.content_strategy.tone = "professional".into();
    record.content_strategy.voice = "educational".into();
    record
}
