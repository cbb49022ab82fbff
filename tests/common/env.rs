//! Test environment builder for isolated ctob testing.
//!
//! Provides `TestEnv` - a temp project directory holding a solution manifest
//! and a temp home directory, plus helpers to run the `ctob` binary in it.

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use super::fixtures::{ATTRIBUTE_FILE, DEFAULT_MANIFEST};

/// Result of running a ctob CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    /// Temporary directory for the solution
    pub project_root: TempDir,
    /// Temporary directory for HOME and the user config
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to the solution root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run ctob from the solution root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run ctob from a directory below the solution root
    pub fn run_in(&self, relative_dir: &str, args: &[&str]) -> TestResult {
        self.run_from(&self.project_path(relative_dir), args, &[])
    }

    /// Run ctob from the solution root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    fn run_from(&self, dir: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ctob"));
        cmd.current_dir(dir)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("APPDATA", self.home_dir.path().join("AppData"))
            .env_remove("RUST_LOG")
            .env_remove("CTOB_WALK_MODE")
            .env_remove("CTOB_SESSION_MODE")
            .env_remove("CTOB_LOG_LEVEL");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ctob");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file below the solution root
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Read a file below the solution root, empty when it does not exist
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative)).unwrap_or_default()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.project_path(relative).exists()
    }

    /// Content of the project's attribute file
    pub fn read_attributes(&self) -> String {
        self.read_file(ATTRIBUTE_FILE)
    }

    /// Move a file's modification time `secs` seconds into the past
    pub fn age(&self, relative: &str, secs: u64) {
        let time = SystemTime::now() - Duration::from_secs(secs);
        set_mtime(&self.project_path(relative), time);
    }

    /// Move a file's modification time `secs` seconds into the future
    pub fn touch_ahead(&self, relative: &str, secs: u64) {
        let time = SystemTime::now() + Duration::from_secs(secs);
        set_mtime(&self.project_path(relative), time);
    }

    /// Enable build-time generation for an item
    pub fn enable(&self, item: &str) {
        let result = self.run(&["set", item, "--run-on-build", "true"]);
        assert!(
            result.success,
            "set failed:\n{}",
            result.combined_output()
        );
    }
}

fn set_mtime(path: &Path, time: SystemTime) {
    let file = File::options()
        .write(true)
        .open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {}", path.display(), e));
    file.set_modified(time).expect("Failed to set mtime");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    manifest: String,
    files: Vec<(String, String)>,
    project_config: Option<String>,
    user_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            manifest: super::fixtures::MANIFEST.to_string(),
            files: vec![
                ("App/App.csproj".to_string(), "<Project />\n".to_string()),
                (
                    "App/Model.tt".to_string(),
                    super::fixtures::TEMPLATE.to_string(),
                ),
            ],
            project_config: None,
            user_config: None,
        }
    }

    /// Replace the solution manifest
    pub fn with_manifest(mut self, toml: &str) -> Self {
        self.manifest = toml.to_string();
        self
    }

    /// Add a file below the solution root
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Write `.ctob.toml` next to the manifest
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Write the user config below the isolated home
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project temp dir");
        let home_dir = TempDir::new().expect("Failed to create home temp dir");

        std::fs::write(project_root.path().join(DEFAULT_MANIFEST), &self.manifest)
            .expect("Failed to write manifest");

        for (relative, content) in &self.files {
            let path = project_root.path().join(relative);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&path, content).expect("Failed to write file");
        }

        if let Some(config) = &self.project_config {
            std::fs::write(project_root.path().join(".ctob.toml"), config)
                .expect("Failed to write .ctob.toml");
        }

        if let Some(config) = &self.user_config {
            for base in [
                home_dir.path().join(".config"),
                home_dir.path().join("Library/Application Support"),
                home_dir.path().join("AppData"),
            ] {
                let path = base.join("ctob/config.toml");
                std::fs::create_dir_all(path.parent().unwrap())
                    .expect("Failed to create config dir");
                std::fs::write(&path, config).expect("Failed to write user config");
            }
        }

        TestEnv {
            project_root,
            home_dir,
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
