//! Test environment builder for isolated Libris testing.
//!
//! Provides `TestEnv` - an isolated test environment with a temp data
//! directory and a temp home, plus helpers to run the libris binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a Libris CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - Isolated data directory (working directory of every run)
/// - Isolated home directory (for the user config)
/// - CLI command execution helpers
pub struct TestEnv {
    /// Temporary directory holding the record files
    pub data_dir: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Path to the libris binary
    libris_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("Failed to create data dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            libris_bin: PathBuf::from(env!("CARGO_BIN_EXE_libris")),
        }
    }

    /// Get path relative to the data directory
    pub fn data_path(&self, relative: &str) -> PathBuf {
        self.data_dir.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run libris with arguments and no stdin
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_full(args, &[], "")
    }

    /// Run libris with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_full(args, env_vars, "")
    }

    /// Run the interactive menu, feeding `input` on stdin
    pub fn run_menu(&self, input: &str) -> TestResult {
        self.run_full(&[], &[], input)
    }

    /// Run libris with arguments, env vars and stdin
    pub fn run_full(&self, args: &[&str], env_vars: &[(&str, &str)], input: &str) -> TestResult {
        let mut cmd = Command::new(&self.libris_bin);
        cmd.current_dir(self.data_dir.path())
            .args(args)
            .with_test_home(self.home_dir.path())
            .env_remove("LIBRIS_DATA_DIR")
            .env_remove("LIBRIS_LOG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("Failed to execute libris");
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
        let output = child.wait_with_output().expect("Failed to wait on libris");

        Self::output_to_result(output)
    }

    /// Convert Command output to TestResult
    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Read a file from the data directory, empty if missing
    pub fn read_data_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.data_path(relative_path)).unwrap_or_default()
    }

    /// Write a file to the data directory
    pub fn write_data_file(&self, relative_path: &str, content: &str) {
        let full_path = self.data_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        let full_path = self.home_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait pointing every home lookup at a temp directory
pub trait TestHomeExt {
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl TestHomeExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("LIBRIS_TEST_HOME", home)
            .env_remove("XDG_CONFIG_HOME")
    }
}
