//! solconf - Solidity project configuration resolver
//!
//! Builds the configuration of a multi-version Solidity project once, from
//! built-in literals (or a `solconf.toml` manifest) plus environment
//! lookups, and answers compiler and network queries against it.
//!
//! ```
//! use std::collections::HashMap;
//! use solconf::core::project::ProjectConfig;
//!
//! let env: HashMap<String, String> = HashMap::new();
//! let config = ProjectConfig::load(&env);
//!
//! assert_eq!(config.resolve_compiler_for("contracts/Token.sol").version.to_string(), "0.8.9");
//! assert!(config.network_for("mainnet").is_none());
//! ```
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

#[cfg(test)]
pub mod test_utils;
