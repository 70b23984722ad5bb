//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run solconf in this project with exactly the given environment
    pub fn run(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_solconf"));
        cmd.current_dir(self.path()).env_clear();
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.args(args);
        cmd.output().expect("Failed to execute solconf")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an injected environment from pairs
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Stdout of a finished command as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Sample manifest TOML for testing
pub const SAMPLE_MANIFEST: &str = r#"
plugins = ["etherscan", "waffle"]

[[compilers]]
version = "0.8.20"
optimizer = { enabled = true, runs = 1000 }

[[compilers]]
version = "0.6.12"
optimizer = { enabled = true, runs = 200 }

[overrides."contracts/legacy/Pinned.sol"]
version = "0.6.12"
optimizer = { enabled = false, runs = 200 }

[networks.sepolia]
url_env = "SEPOLIA_URL"
accounts_env = "DEPLOYER_KEY"
gas = 3000000

[networks.local]
url = "http://127.0.0.1:8545"

[gas_reporter]
currency = "EUR"
"#;

/// Solidity source with a caret pragma
pub const MODERN_SOURCE: &str = "// SPDX-License-Identifier: MIT\npragma solidity ^0.8.0;\n\ncontract Token {}\n";

/// Solidity source restricted to the 0.5/0.6 series
pub const LEGACY_SOURCE: &str = "pragma solidity >=0.5.0 <0.7.0;\n\nlibrary Oracle {}\n";
