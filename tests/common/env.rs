//! Test environment builder for isolated Encore testing.
//!
//! Provides `TestEnv` - a temp project directory holding `encore.toml` and
//! any number of build manifests, plus helpers to run the `encore` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an Encore CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse each stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
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

/// Isolated project directory.
pub struct TestEnv {
    pub project_root: TempDir,
    encore_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run encore in the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run encore in the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.encore_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env_remove("RUST_LOG")
            .env_remove("ENCORE_OUTPUT_PATH")
            .env_remove("ENCORE_STRICT_MODE")
            .env_remove("ENCORE_CACHE")
            .env_remove("ENCORE_PRELOAD");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute encore");
        output_to_result(output)
    }

    /// Overwrite (or create) a file in the project.
    pub fn write(&self, relative: &str, content: &str) {
        write_file(&self.project_path(relative), content);
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.project_path(relative)).expect("Failed to remove file");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative)).unwrap_or_default()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

#[derive(Default)]
pub struct TestEnvBuilder {
    config: Option<String>,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Content of `encore.toml`
    pub fn with_config(mut self, content: &str) -> Self {
        self.config = Some(content.to_string());
        self
    }

    /// Write `entrypoints.json` into `build_dir` (relative to the project).
    pub fn with_manifest(self, build_dir: &str, content: &str) -> Self {
        self.with_file(&format!("{}/entrypoints.json", build_dir), content)
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create temp dir");

        if let Some(config) = &self.config {
            write_file(&project_root.path().join("encore.toml"), config);
        }
        for (relative, content) in &self.files {
            write_file(&project_root.path().join(relative), content);
        }

        TestEnv {
            project_root,
            encore_bin: PathBuf::from(env!("CARGO_BIN_EXE_encore")),
        }
    }
}
