//! Test environment for isolated concept-engine runs.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables the binary reads; cleared for every run.
const CLEARED_VARS: &[&str] = &[
    "CONCEPT_ENGINE_TREE",
    "CONCEPT_ENGINE_TEXT",
    "CONCEPT_ENGINE_COLOR",
    "RUST_LOG",
    "CI",
];

/// Result of running a concept-engine command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}):\n{}", self.stdout);
        })
    }
}

/// Isolated working directory and user config directory.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            config_home: TempDir::new().expect("create config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_concept-engine")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file below the project root and return its path.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write test file");
        path
    }

    /// Write the user-level config file.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.path().join("concept-engine");
        fs::create_dir_all(&dir).expect("create user config dir");
        let path = dir.join("config.toml");
        fs::write(&path, content).expect("write user config");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("CONCEPT_ENGINE_UNICODE", "0");
        for key in CLEARED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute concept-engine");
        to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
