//! Project configuration resolver
//!
//! [`ProjectConfig`] is built once, from the manifest (or the built-in
//! defaults) plus environment lookups, and is read-only afterwards. It is
//! passed explicitly to every consumer; there is no global instance.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::compiler::{CompilerSpec, SolidityConfig};
use crate::core::environment::{
    accounts_from, flag_present, optional_value, url_or_empty, Environment, ProcessEnvironment,
};
use crate::core::manifest::{Manifest, NetworkEntry};
use crate::core::network::{NetworkKind, NetworkProfile};
use crate::core::plugins::Plugin;
use crate::core::reporting::{EtherscanConfig, GasReporterConfig, ReportingConfig};
use crate::error::ConfigError;

/// Fully resolved project configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectConfig {
    /// Compiler list and overrides
    pub solidity: SolidityConfig,

    /// Network profiles by name
    pub networks: BTreeMap<String, NetworkProfile>,

    /// Gas reporter and explorer settings
    pub reporting: ReportingConfig,

    /// Toolchain plugins
    pub plugins: Vec<Plugin>,
}

impl ProjectConfig {
    /// Build the built-in configuration against `env`
    ///
    /// Never fails: every absent variable has a documented default.
    pub fn load(env: &impl Environment) -> Self {
        Self::from_manifest(&Manifest::default(), env)
    }

    /// Build the built-in configuration from the process environment
    pub fn from_process_env() -> Self {
        Self::load(&ProcessEnvironment)
    }

    /// Build from a manifest against `env`
    pub fn from_manifest(manifest: &Manifest, env: &impl Environment) -> Self {
        let mut specs = manifest.compilers.iter().map(|entry| entry.to_spec());
        // Manifest::load rejects empty compiler lists; Manifest::default never has one
        let default = specs
            .next()
            .unwrap_or_else(|| Manifest::default().compilers[0].to_spec());

        let overrides = manifest
            .overrides
            .iter()
            .map(|(path, entry)| (path.clone(), entry.to_spec()))
            .collect();

        let networks = manifest
            .networks
            .iter()
            .map(|(name, entry)| (name.clone(), network_profile(name, entry, env)))
            .collect();

        let gas = &manifest.gas_reporter;
        let reporting = ReportingConfig {
            gas_reporter: GasReporterConfig {
                enabled: gas.enabled
                    || gas
                        .enabled_env
                        .as_deref()
                        .is_some_and(|key| flag_present(env, key)),
                currency: gas.currency.clone(),
            },
            etherscan: EtherscanConfig {
                api_key: manifest
                    .etherscan
                    .api_key_env
                    .as_deref()
                    .and_then(|key| optional_value(env, key)),
            },
        };

        Self {
            solidity: SolidityConfig::new(default, specs, overrides),
            networks,
            reporting,
            plugins: manifest.plugins.clone(),
        }
    }

    /// Compiler for `path`: exact override match, else the default compiler
    pub fn resolve_compiler_for(&self, path: &str) -> &CompilerSpec {
        self.solidity.resolve_compiler_for(path)
    }

    /// Profile for `name`, or `None` when the network is not configured
    pub fn network_for(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Profile for `name`, as an error when the network is not configured
    pub fn require_network(&self, name: &str) -> Result<&NetworkProfile, ConfigError> {
        self.network_for(name)
            .ok_or_else(|| ConfigError::NetworkNotConfigured {
                name: name.to_string(),
                known: self.network_names(),
            })
    }

    /// Names of all configured networks, sorted
    pub fn network_names(&self) -> Vec<String> {
        self.networks.keys().cloned().collect()
    }
}

fn network_profile(name: &str, entry: &NetworkEntry, env: &impl Environment) -> NetworkProfile {
    if entry.kind == NetworkKind::InProcess {
        if entry.url.is_some() || entry.url_env.is_some() || entry.accounts_env.is_some() {
            tracing::debug!("{name} is in-process, ignoring its url and accounts settings");
        }
        let mut profile = NetworkProfile::in_process(name);
        profile.gas = entry.gas;
        return profile;
    }

    let url = match (&entry.url_env, &entry.url) {
        (Some(key), None) => url_or_empty(env, key),
        (Some(key), Some(literal)) => env.get(key).unwrap_or_else(|| literal.clone()),
        (None, Some(literal)) => literal.clone(),
        (None, None) => String::new(),
    };

    let accounts = entry
        .accounts_env
        .as_deref()
        .map(|key| accounts_from(env, key))
        .unwrap_or_default();

    NetworkProfile::remote(name, url, accounts, entry.gas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_load_with_empty_environment() {
        let config = ProjectConfig::load(&env(&[]));

        let ropsten = config.network_for("ropsten").unwrap();
        assert_eq!(ropsten.url, "");
        assert!(ropsten.accounts.is_empty());
        assert!(!config.reporting.gas_reporting_enabled());
        assert_eq!(config.reporting.gas_reporter.currency, "USD");
        assert_eq!(config.reporting.explorer_api_key(), None);
        assert_eq!(config.solidity.compilers().len(), 3);
        assert_eq!(config.plugins.len(), 5);
    }

    #[test]
    fn test_load_reads_environment() {
        let config = ProjectConfig::load(&env(&[
            ("ROPSTEN_URL", "https://ropsten.example"),
            ("RINKEBY_URL", "https://rinkeby.example"),
            ("PRIVATE_KEY", "0xkey"),
            ("ETHERSCAN_API_KEY", "scan"),
        ]));

        assert_eq!(config.network_for("ropsten").unwrap().url, "https://ropsten.example");
        let rinkeby = config.network_for("rinkeby").unwrap();
        assert_eq!(rinkeby.url, "https://rinkeby.example");
        assert_eq!(rinkeby.accounts[0].expose(), "0xkey");
        assert_eq!(rinkeby.gas, Some(6_721_975));
        assert_eq!(config.reporting.explorer_api_key(), Some("scan"));
    }

    #[test]
    fn test_hardhat_network_is_in_process() {
        let config = ProjectConfig::load(&env(&[("PRIVATE_KEY", "k")]));
        let dev = config.network_for("hardhat").unwrap();
        assert!(dev.is_in_process());
        assert!(dev.accounts.is_empty());
    }

    #[test]
    fn test_in_process_manifest_network_keeps_gas() {
        let manifest = Manifest::from_toml(
            r#"
[networks.dev]
kind = "in-process"
gas = 12000000
url = "http://ignored:8545"
accounts_env = "PRIVATE_KEY"
"#,
        )
        .unwrap();

        let config = ProjectConfig::from_manifest(&manifest, &env(&[("PRIVATE_KEY", "k")]));
        let dev = config.network_for("dev").unwrap();
        assert!(dev.is_in_process());
        assert_eq!(dev.gas, Some(12_000_000));
        assert_eq!(dev.url, "");
        assert!(dev.accounts.is_empty());
    }

    #[test]
    fn test_require_network_lists_known() {
        let config = ProjectConfig::load(&env(&[]));
        let err = config.require_network("mainnet").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("mainnet"));
        assert!(message.contains("rinkeby"));
    }

    #[test]
    fn test_manifest_literal_url_fallback() {
        let manifest = Manifest::from_toml(
            r#"
[networks.local]
url_env = "LOCAL_URL"
url = "http://127.0.0.1:8545"
"#,
        )
        .unwrap();

        let config = ProjectConfig::from_manifest(&manifest, &env(&[]));
        assert_eq!(config.network_for("local").unwrap().url, "http://127.0.0.1:8545");

        let config = ProjectConfig::from_manifest(&manifest, &env(&[("LOCAL_URL", "http://node:8545")]));
        assert_eq!(config.network_for("local").unwrap().url, "http://node:8545");
    }

    #[test]
    fn test_manifest_always_enabled_gas_reporter() {
        let manifest = Manifest::from_toml("[gas_reporter]\nenabled = true\n").unwrap();
        let config = ProjectConfig::from_manifest(&manifest, &env(&[]));
        assert!(config.reporting.gas_reporting_enabled());
    }

    #[test]
    fn test_config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProjectConfig>();
    }
}
