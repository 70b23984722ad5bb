//! Gas reporting and explorer verification settings

use serde::Serialize;

/// Gas reporter integration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasReporterConfig {
    /// Whether gas usage is reported after test runs
    pub enabled: bool,

    /// Currency used for cost estimates
    pub currency: String,
}

/// Block explorer verification service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EtherscanConfig {
    /// API key; `None` when not provided
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Auxiliary reporting integrations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportingConfig {
    /// Gas reporter settings
    pub gas_reporter: GasReporterConfig,

    /// Explorer settings
    pub etherscan: EtherscanConfig,
}

impl ReportingConfig {
    /// Whether gas reporting is on
    pub fn gas_reporting_enabled(&self) -> bool {
        self.gas_reporter.enabled
    }

    /// Explorer API key, if configured
    pub fn explorer_api_key(&self) -> Option<&str> {
        self.etherscan.api_key.as_deref()
    }
}
