//! Default configuration values

/// Compiler versions available to the project, default first
pub const COMPILER_VERSIONS: &[&str] = &["0.8.9", "0.6.6", "0.5.17"];

/// Optimizer runs applied to every built-in compiler entry
pub const OPTIMIZER_RUNS: u32 = 200;

/// Compiler version used by the third-party library overrides
pub const LEGACY_OVERRIDE_VERSION: &str = "0.6.6";

/// Library sources that only compile under the legacy compiler
pub const LEGACY_OVERRIDE_PATHS: &[&str] = &[
    "@uniswap/lib/contracts/libraries/FullMath.sol",
    "@uniswap/lib/contracts/libraries/FixedPoint.sol",
    "@uniswap/v2-periphery/contracts/libraries/UniswapV2OracleLibrary.sol",
];

/// Name of the in-process development network
pub const DEV_NETWORK: &str = "hardhat";

/// Fixed transaction gas limit for the rinkeby network
pub const RINKEBY_GAS_LIMIT: u64 = 6_721_975;

/// Currency used by the gas reporter
pub const GAS_REPORTER_CURRENCY: &str = "USD";

/// Default manifest file name
pub const MANIFEST_FILE: &str = "solconf.toml";

/// Default directory scanned by `solconf plan`
pub const SOURCES_DIR: &str = "contracts";

/// Directory searched for package-qualified override paths
pub const PACKAGES_DIR: &str = "node_modules";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
