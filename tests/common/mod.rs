//! Common test utilities for curl2retrofit integration tests
//!
//! - CLI invocation helpers with an isolated config directory
//! - Temporary interface file fixtures

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliResponse {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Isolated environment for one CLI run
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Standard input content
    pub stdin: Option<Vec<u8>>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            stdin: None,
        }
    }

    /// Write a config.toml into the config directory
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_dir.path().join("config.toml"), toml)
            .expect("Failed to write config");
        self
    }

    pub fn with_stdin(mut self, content: &str) -> Self {
        self.stdin = Some(content.as_bytes().to_vec());
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }
}

/// Run the CLI with the given arguments (excluding the program name)
pub fn c2r(args: &[&str]) -> CliResponse {
    c2r_with_env(args, &MockEnvironment::new())
}

pub fn c2r_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_curl2retrofit"));
    cmd.args(args);
    cmd.env("CURL2RETROFIT_CONFIG_DIR", env.config_path());
    cmd.env_remove("RUST_LOG");
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    if let Some(ref stdin_data) = env.stdin {
        cmd.stdin(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to spawn command");
        {
            let stdin = child.stdin.as_mut().expect("Failed to open stdin");
            stdin.write_all(stdin_data).expect("Failed to write to stdin");
        }
        let output = child.wait_with_output().expect("Failed to wait for command");
        parse_output(output)
    } else {
        cmd.stdin(Stdio::null());
        let output = cmd.output().expect("Failed to execute command");
        parse_output(output)
    }
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(1),
    }
}

/// Create a temporary source file with the given name and content
pub fn create_source_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = dir.path().join(name);
    std::fs::write(&file_path, content).expect("Failed to write temp file");
    (dir, file_path)
}
