//! Check command logic
//!
//! Reports configuration that will likely fail downstream: override paths
//! that don't exist or pin an unlisted compiler, remote networks without an
//! endpoint or signing key, and sources no configured compiler can build. Findings are warnings; the
//! configuration itself is never rejected.

use std::path::Path;

use crate::config::defaults;
use crate::core::plan::{plan, CompilePlan};
use crate::core::project::ProjectConfig;
use crate::error::SolconfError;

/// A single check finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Override path not found in the project or installed packages
    MissingOverride { path: String },

    /// Override pinned to a compiler that is not in the compiler list
    UnlistedOverrideCompiler { path: String, version: String },
    /// Remote network with an empty RPC URL
    NoEndpoint { network: String },
    /// Remote network without signing accounts
    NoAccounts { network: String },
    /// Gas reporting enabled without a currency
    NoCurrency,
    /// Source no configured compiler can build
    UnresolvedSource { path: String, reason: String },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOverride { path } => {
                write!(f, "Override path '{path}' does not exist")
            }
            Self::UnlistedOverrideCompiler { path, version } => write!(
                f,
                "Override for '{path}' uses solc {version}, which is not in the compiler list"
            ),
            Self::NoEndpoint { network } => {
                write!(f, "Network '{network}' has no RPC URL")
            }
            Self::NoAccounts { network } => write!(
                f,
                "Network '{network}' has no signing accounts; transactions cannot be sent"
            ),
            Self::NoCurrency => write!(f, "Gas reporting is enabled but no currency is set"),
            Self::UnresolvedSource { path, reason } => write!(f, "{path}: {reason}"),
        }
    }
}

/// Result of the check operation
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Findings, in discovery order
    pub findings: Vec<Finding>,

    /// Compile plan, when a sources directory was checked
    pub plan: Option<CompilePlan>,
}

impl CheckReport {
    /// Whether nothing was found
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Whether an override key names an existing file
///
/// Keys are looked up relative to the project root, then under the
/// installed packages directory for package-qualified paths like
/// `@scope/pkg/contracts/File.sol`.
pub fn override_exists(project_root: &Path, key: &str) -> bool {
    project_root.join(key).is_file()
        || project_root
            .join(defaults::PACKAGES_DIR)
            .join(key)
            .is_file()
}

/// Perform check operation on a project
///
/// `sources_dir`, when given, is planned as well and unresolvable sources
/// are reported. A missing sources directory is an error only because it
/// was explicitly requested.
pub fn check(
    project_root: &Path,
    config: &ProjectConfig,
    sources_dir: Option<&Path>,
) -> Result<CheckReport, SolconfError> {
    let mut report = CheckReport::default();

    for (key, spec) in config.solidity.overrides() {
        if !override_exists(project_root, key) {
            report
                .findings
                .push(Finding::MissingOverride { path: key.clone() });
        }
        if !config.solidity.has_version(&spec.version) {
            report.findings.push(Finding::UnlistedOverrideCompiler {
                path: key.clone(),
                version: spec.version.to_string(),
            });
        }
    }

    for profile in config.networks.values() {
        if profile.is_in_process() {
            continue;
        }
        if !profile.has_endpoint() {
            report.findings.push(Finding::NoEndpoint {
                network: profile.name.clone(),
            });
        }
        if !profile.can_sign() {
            report.findings.push(Finding::NoAccounts {
                network: profile.name.clone(),
            });
        }
    }

    let gas = &config.reporting.gas_reporter;
    if gas.enabled && gas.currency.trim().is_empty() {
        report.findings.push(Finding::NoCurrency);
    }

    if let Some(dir) = sources_dir {
        let compile_plan = plan(project_root, dir, &config.solidity)?;
        for source in &compile_plan.unresolved {
            report.findings.push(Finding::UnresolvedSource {
                path: source.path.clone(),
                reason: source.reason.clone(),
            });
        }
        report.plan = Some(compile_plan);
    }

    for finding in &report.findings {
        tracing::warn!("{finding}");
    }

    Ok(report)
}
