//! Configuration contract for the external toolchain
//!
//! Renders a [`ProjectConfig`] in the shape the compiler driver and task
//! runner consume: camelCase keys, `solidity.compilers[].settings.optimizer`,
//! path-keyed `solidity.overrides`, name-keyed `networks`, `gasReporter`
//! and `etherscan.apiKey`.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::core::compiler::CompilerSpec;
use crate::core::network::NetworkProfile;
use crate::core::project::ProjectConfig;
use crate::core::reporting::GasReporterConfig;
use crate::error::ExportError;

/// Placeholder written in place of secrets when redacting
pub const REDACTED: &str = "<redacted>";

/// Output format for the exported configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,
    /// Pretty-printed TOML
    Toml,
}

/// Exported configuration document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedConfig {
    /// Compiler list and overrides
    pub solidity: ExportedSolidity,

    /// Networks by name
    pub networks: BTreeMap<String, ExportedNetwork>,

    /// Gas reporter settings
    pub gas_reporter: GasReporterConfig,

    /// Explorer settings
    pub etherscan: ExportedEtherscan,

    /// Plugin packages to load
    pub plugins: Vec<String>,
}

/// Exported compiler section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedSolidity {
    /// Compilers, default first
    pub compilers: Vec<CompilerSpec>,

    /// Exact source path overrides
    pub overrides: BTreeMap<String, CompilerSpec>,
}

/// Exported network; in-process networks carry neither url nor accounts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedNetwork {
    /// RPC endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Signing keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts: Option<Vec<String>>,

    /// Fixed transaction gas limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
}

/// Exported explorer section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedEtherscan {
    /// API key
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ExportedConfig {
    /// Build the exported document, optionally replacing secrets with [`REDACTED`]
    pub fn new(config: &ProjectConfig, redact: bool) -> Self {
        let networks = config
            .networks
            .iter()
            .map(|(name, profile)| (name.clone(), export_network(profile, redact)))
            .collect();

        let api_key = config
            .reporting
            .etherscan
            .api_key
            .as_ref()
            .map(|key| if redact { REDACTED.to_string() } else { key.clone() });

        Self {
            solidity: ExportedSolidity {
                compilers: config.solidity.compilers().to_vec(),
                overrides: config.solidity.overrides().clone(),
            },
            networks,
            gas_reporter: config.reporting.gas_reporter.clone(),
            etherscan: ExportedEtherscan { api_key },
            plugins: config
                .plugins
                .iter()
                .map(|p| p.package().to_string())
                .collect(),
        }
    }

    /// Render in `format`
    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Toml => Ok(toml::to_string_pretty(self)?),
        }
    }
}

fn export_network(profile: &NetworkProfile, redact: bool) -> ExportedNetwork {
    if profile.is_in_process() {
        return ExportedNetwork {
            url: None,
            accounts: None,
            gas: profile.gas,
        };
    }

    let accounts = profile
        .accounts
        .iter()
        .map(|key| {
            if redact {
                REDACTED.to_string()
            } else {
                key.expose().to_string()
            }
        })
        .collect();

    ExportedNetwork {
        url: Some(profile.url.clone()),
        accounts: Some(accounts),
        gas: profile.gas,
    }
}

/// Stable SHA-256 fingerprint of the configuration
///
/// Computed over the redacted canonical JSON, so it changes when compilers,
/// overrides, endpoints or flags change but never depends on secret values.
pub fn fingerprint(config: &ProjectConfig) -> Result<String, ExportError> {
    let canonical = serde_json::to_vec(&ExportedConfig::new(config, true))?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}
