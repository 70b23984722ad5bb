//! Manifest (solconf.toml) parsing
//!
//! The manifest is optional. When absent, [`Manifest::default`] carries the
//! built-in project configuration. The manifest never holds secrets; it
//! only names the environment variables that supply them.
//!
//! ```toml
//! plugins = ["etherscan", "gas-reporter"]
//!
//! [[compilers]]
//! version = "0.8.9"
//! optimizer = { enabled = true, runs = 200 }
//!
//! [overrides."@uniswap/lib/contracts/libraries/FullMath.sol"]
//! version = "0.6.6"
//! optimizer = { enabled = true, runs = 200 }
//!
//! [networks.rinkeby]
//! url_env = "RINKEBY_URL"
//! accounts_env = "PRIVATE_KEY"
//! gas = 6721975
//! ```

use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::{defaults, env_vars};
use crate::core::compiler::{CompilerSpec, OptimizerSettings};
use crate::core::network::NetworkKind;
use crate::core::plugins::{default_plugins, Plugin};
use crate::error::ConfigError;

/// The project manifest (solconf.toml)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Compilers, default first
    #[serde(default = "default_compilers")]
    pub compilers: Vec<CompilerEntry>,

    /// Exact source path to compiler overrides
    #[serde(default = "default_overrides")]
    pub overrides: BTreeMap<String, CompilerEntry>,

    /// Network definitions
    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, NetworkEntry>,

    /// Gas reporter settings
    #[serde(default)]
    pub gas_reporter: GasReporterEntry,

    /// Explorer settings
    #[serde(default)]
    pub etherscan: EtherscanEntry,

    /// Toolchain plugins
    #[serde(default = "default_plugins")]
    pub plugins: Vec<Plugin>,
}

/// A compiler entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompilerEntry {
    /// Compiler version
    pub version: Version,

    /// Optimizer settings (solc defaults when omitted)
    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

impl CompilerEntry {
    fn optimized(version: &str) -> Self {
        Self {
            version: parse_builtin_version(version),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: defaults::OPTIMIZER_RUNS,
            },
        }
    }

    /// Convert into a resolved compiler spec
    pub fn to_spec(&self) -> CompilerSpec {
        let mut spec = CompilerSpec::optimized(self.version.clone(), self.optimizer.runs);
        spec.settings.optimizer.enabled = self.optimizer.enabled;
        spec
    }
}

/// A network definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkEntry {
    /// How the network is reached
    #[serde(default)]
    pub kind: NetworkKind,

    /// Environment variable holding the RPC URL
    #[serde(default)]
    pub url_env: Option<String>,

    /// Literal RPC URL used when `url_env` is unset or absent
    #[serde(default)]
    pub url: Option<String>,

    /// Environment variable holding the signing key
    #[serde(default)]
    pub accounts_env: Option<String>,

    /// Fixed transaction gas limit
    #[serde(default)]
    pub gas: Option<u64>,
}

/// Gas reporter definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GasReporterEntry {
    /// Environment variable whose presence enables reporting
    #[serde(default = "default_report_gas_env")]
    pub enabled_env: Option<String>,

    /// Always enable reporting
    #[serde(default)]
    pub enabled: bool,

    /// Currency used for cost estimates
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Explorer definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EtherscanEntry {
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,
}

fn parse_builtin_version(version: &str) -> Version {
    // Built-in literals are known-good semver
    Version::parse(version).unwrap_or_else(|_| Version::new(0, 0, 0))
}

fn default_compilers() -> Vec<CompilerEntry> {
    defaults::COMPILER_VERSIONS
        .iter()
        .map(|v| CompilerEntry::optimized(v))
        .collect()
}

fn default_overrides() -> BTreeMap<String, CompilerEntry> {
    defaults::LEGACY_OVERRIDE_PATHS
        .iter()
        .map(|path| {
            (
                (*path).to_string(),
                CompilerEntry::optimized(defaults::LEGACY_OVERRIDE_VERSION),
            )
        })
        .collect()
}

fn default_networks() -> BTreeMap<String, NetworkEntry> {
    let mut networks = BTreeMap::new();
    networks.insert(
        defaults::DEV_NETWORK.to_string(),
        NetworkEntry {
            kind: NetworkKind::InProcess,
            ..NetworkEntry::default()
        },
    );
    networks.insert(
        "ropsten".to_string(),
        NetworkEntry {
            url_env: Some(env_vars::ROPSTEN_URL.to_string()),
            accounts_env: Some(env_vars::PRIVATE_KEY.to_string()),
            ..NetworkEntry::default()
        },
    );
    networks.insert(
        "rinkeby".to_string(),
        NetworkEntry {
            url_env: Some(env_vars::RINKEBY_URL.to_string()),
            accounts_env: Some(env_vars::PRIVATE_KEY.to_string()),
            gas: Some(defaults::RINKEBY_GAS_LIMIT),
            ..NetworkEntry::default()
        },
    );
    networks
}

#[allow(clippy::unnecessary_wraps)]
fn default_report_gas_env() -> Option<String> {
    Some(env_vars::REPORT_GAS.to_string())
}

#[allow(clippy::unnecessary_wraps)]
fn default_api_key_env() -> Option<String> {
    Some(env_vars::ETHERSCAN_API_KEY.to_string())
}

fn default_currency() -> String {
    defaults::GAS_REPORTER_CURRENCY.to_string()
}

impl Default for GasReporterEntry {
    fn default() -> Self {
        Self {
            enabled_env: default_report_gas_env(),
            enabled: false,
            currency: default_currency(),
        }
    }
}

impl Default for EtherscanEntry {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            compilers: default_compilers(),
            overrides: default_overrides(),
            networks: default_networks(),
            gas_reporter: GasReporterEntry::default(),
            etherscan: EtherscanEntry::default(),
            plugins: default_plugins(),
        }
    }
}

impl Manifest {
    /// Load manifest from file path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ManifestRead {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let manifest = Self::from_toml(&content).map_err(|e| ConfigError::ManifestParse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        if manifest.compilers.is_empty() {
            return Err(ConfigError::NoCompilers {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            "Loaded manifest {} ({} compilers, {} networks)",
            path.display(),
            manifest.compilers.len(),
            manifest.networks.len()
        );
        Ok(manifest)
    }

    /// Load manifest from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize manifest to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
