//! Error types for solconf
//!
//! Domain-specific error types using thiserror. Loading the configuration
//! from the environment never fails; these cover the optional manifest,
//! network lookups that require a profile, pragma parsing and export.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration lookup and manifest errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Network name has no profile
    #[error("Network '{name}' is not configured (known networks: {})", known.join(", "))]
    NetworkNotConfigured { name: String, known: Vec<String> },

    /// Manifest file could not be read
    #[error("Failed to read manifest '{path}': {error}")]
    ManifestRead { path: PathBuf, error: String },

    /// Manifest file is not valid TOML for the manifest schema
    #[error("Failed to parse manifest '{path}': {error}")]
    ManifestParse { path: PathBuf, error: String },

    /// Manifest declares no compilers
    #[error("Manifest '{path}' declares no compilers")]
    NoCompilers { path: PathBuf },
}

/// Solidity pragma errors
#[derive(Error, Debug, PartialEq)]
pub enum PragmaError {
    /// Source has no `pragma solidity` directive
    #[error("No 'pragma solidity' directive found")]
    Missing,

    /// Constraint could not be translated to a semver requirement
    #[error("Invalid pragma constraint '{constraint}': {reason}")]
    InvalidConstraint { constraint: String, reason: String },
}

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON rendering failed
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML rendering failed
    #[error("Failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Top-level solconf error type
#[derive(Error, Debug)]
pub enum SolconfError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Export error
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO error
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory walk error
    #[error("Failed to walk '{path}': {error}")]
    Walk { path: PathBuf, error: String },
}
