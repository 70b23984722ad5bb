//! Environment variable names consumed by the configuration resolver

/// RPC endpoint for the "ropsten" network
pub const ROPSTEN_URL: &str = "ROPSTEN_URL";

/// RPC endpoint for the "rinkeby" network
pub const RINKEBY_URL: &str = "RINKEBY_URL";

/// Signing key shared by the remote networks
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Presence enables gas reporting (value is ignored)
pub const REPORT_GAS: &str = "REPORT_GAS";

/// API key for the contract verification service
pub const ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";

/// Every variable the built-in configuration reads
#[cfg(test)]
pub const ALL: &[&str] = &[
    ROPSTEN_URL,
    RINKEBY_URL,
    PRIVATE_KEY,
    REPORT_GAS,
    ETHERSCAN_API_KEY,
];
