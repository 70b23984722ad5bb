//! Toolchain plugins the project configuration expects to be installed

use serde::{Deserialize, Serialize};
use std::fmt;

/// A task-runner plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plugin {
    /// Contract verification on the block explorer
    Etherscan,
    /// Waffle test matchers and fixtures
    Waffle,
    /// Gas usage reporter
    GasReporter,
    /// Solidity coverage
    Coverage,
    /// Contract bytecode size reporter
    ContractSizer,
}

impl Plugin {
    /// Every known plugin, in load order
    pub const ALL: [Plugin; 5] = [
        Plugin::Etherscan,
        Plugin::Waffle,
        Plugin::GasReporter,
        Plugin::Coverage,
        Plugin::ContractSizer,
    ];

    /// npm package providing the plugin
    pub fn package(self) -> &'static str {
        match self {
            Self::Etherscan => "@nomiclabs/hardhat-etherscan",
            Self::Waffle => "@nomiclabs/hardhat-waffle",
            Self::GasReporter => "hardhat-gas-reporter",
            Self::Coverage => "solidity-coverage",
            Self::ContractSizer => "hardhat-contract-sizer",
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.package())
    }
}

/// Default plugin set
pub fn default_plugins() -> Vec<Plugin> {
    Plugin::ALL.to_vec()
}
