//! Compiler selection
//!
//! Holds the ordered compiler list and the path-keyed override mapping, and
//! resolves which compiler builds a given source file.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::pragma::SolidityPragma;

/// Optimizer settings for one compiler entry
///
/// Missing fields deserialize to the solc defaults: disabled, 200 runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Whether the optimizer runs at all
    pub enabled: bool,

    /// Expected number of contract invocations to optimize for
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

/// Compiler settings block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    /// Optimizer settings
    pub optimizer: OptimizerSettings,
}

/// A compiler version together with its settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSpec {
    /// Compiler semantic version
    pub version: Version,

    /// Compiler settings
    pub settings: CompilerSettings,
}

impl CompilerSpec {
    /// Compiler spec with the optimizer enabled for `runs`
    pub fn optimized(version: Version, runs: u32) -> Self {
        Self {
            version,
            settings: CompilerSettings {
                optimizer: OptimizerSettings {
                    enabled: true,
                    runs,
                },
            },
        }
    }

    /// Optimizer settings shortcut
    pub fn optimizer(&self) -> OptimizerSettings {
        self.settings.optimizer
    }
}

impl fmt::Display for CompilerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = self.optimizer();
        if opt.enabled {
            write!(f, "solc {} (optimizer: {} runs)", self.version, opt.runs)
        } else {
            write!(f, "solc {} (optimizer: off)", self.version)
        }
    }
}

/// Which rule selected a compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// Exact match in the override mapping
    Override,
    /// Highest listed version satisfying the source pragma
    Pragma,
    /// First entry of the compiler list
    Default,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Override => "override",
            Self::Pragma => "pragma",
            Self::Default => "default",
        };
        f.write_str(s)
    }
}

/// Ordered compiler list plus per-path overrides
///
/// The first compiler is the project default. The list is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolidityConfig {
    compilers: Vec<CompilerSpec>,
    overrides: BTreeMap<String, CompilerSpec>,
}

impl SolidityConfig {
    /// Build from a default compiler, further compilers and overrides
    pub fn new(
        default: CompilerSpec,
        others: impl IntoIterator<Item = CompilerSpec>,
        overrides: BTreeMap<String, CompilerSpec>,
    ) -> Self {
        let mut compilers = vec![default];
        compilers.extend(others);
        Self {
            compilers,
            overrides,
        }
    }

    /// All compilers, default first
    pub fn compilers(&self) -> &[CompilerSpec] {
        &self.compilers
    }

    /// The path-keyed override mapping
    pub fn overrides(&self) -> &BTreeMap<String, CompilerSpec> {
        &self.overrides
    }

    /// The default compiler
    pub fn default_compiler(&self) -> &CompilerSpec {
        // `new` always seeds the list with the default
        &self.compilers[0]
    }

    /// Compiler for `path`: the exact override if one exists, else the default
    ///
    /// Matching is by exact string only; no globbing, prefixes or path
    /// normalization.
    pub fn resolve_compiler_for(&self, path: &str) -> &CompilerSpec {
        self.overrides
            .get(path)
            .unwrap_or_else(|| self.default_compiler())
    }

    /// Highest listed compiler satisfying `pragma`
    pub fn resolve_for_pragma(&self, pragma: &SolidityPragma) -> Option<&CompilerSpec> {
        self.compilers
            .iter()
            .filter(|spec| pragma.matches(&spec.version))
            .max_by(|a, b| a.version.cmp(&b.version))
    }

    /// Compiler for a source file, taking its pragma into account
    ///
    /// Precedence is override, then pragma, then default. A missing pragma
    /// falls back to the default; a pragma no listed version satisfies
    /// yields `None`.
    pub fn resolve_for_source(
        &self,
        path: &str,
        pragma: Option<&SolidityPragma>,
    ) -> Option<(&CompilerSpec, Resolution)> {
        if let Some(spec) = self.overrides.get(path) {
            return Some((spec, Resolution::Override));
        }
        match pragma {
            Some(pragma) => self
                .resolve_for_pragma(pragma)
                .map(|spec| (spec, Resolution::Pragma)),
            None => Some((self.default_compiler(), Resolution::Default)),
        }
    }

    /// Whether `version` is listed among the compilers
    pub fn has_version(&self, version: &Version) -> bool {
        self.compilers.iter().any(|spec| &spec.version == version)
    }
}
