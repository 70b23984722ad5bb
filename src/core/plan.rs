//! Compile plan
//!
//! Walks a sources tree and groups every Solidity file under the compiler
//! that would build it: exact override first, then the file's pragma, then
//! the project default.

use semver::Version;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::defaults;
use crate::core::compiler::{CompilerSpec, Resolution, SolidityConfig};
use crate::core::pragma::pragma_of;
use crate::error::{PragmaError, SolconfError};

/// One source file assigned to a compiler
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedSource {
    /// Project-relative path, or the package path for installed files
    pub path: String,

    /// Which rule selected the compiler
    pub resolution: Resolution,
}

/// All sources built by one compiler
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompileJob {
    /// Compiler running the job
    pub compiler: CompilerSpec,

    /// Sources in the job, sorted by path
    pub sources: Vec<PlannedSource>,
}

/// A source no listed compiler can build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnresolvedSource {
    /// Source name, as in [`PlannedSource::path`]
    pub path: String,

    /// Why it could not be assigned
    pub reason: String,
}

/// Full plan for a sources tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompilePlan {
    /// Jobs in compiler-list order; empty jobs are omitted
    pub jobs: Vec<CompileJob>,

    /// Sources that could not be assigned
    pub unresolved: Vec<UnresolvedSource>,
}

impl CompilePlan {
    /// Total number of planned sources
    pub fn source_count(&self) -> usize {
        self.jobs.iter().map(|job| job.sources.len()).sum()
    }

    /// Job for a compiler version, if any
    pub fn job_for(&self, version: &Version) -> Option<&CompileJob> {
        self.jobs.iter().find(|job| &job.compiler.version == version)
    }
}

/// Source name of `path`, as used for override lookups
///
/// Project files are named relative to `root` with `/` separators. Files in
/// the installed packages directory are named by their package path
/// (`@scope/pkg/contracts/File.sol`), the way the compiler imports them.
pub fn source_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let relative = relative
        .strip_prefix(defaults::PACKAGES_DIR)
        .unwrap_or(relative);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Collect `*.sol` files under `dir`, sorted
pub fn find_sources(dir: &Path) -> Result<Vec<PathBuf>, SolconfError> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|e| SolconfError::Walk {
            path: dir.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "sol")
        {
            sources.push(entry.into_path());
        }
    }
    sources.sort();
    Ok(sources)
}

/// Plan compilation of every source under `sources_dir`
///
/// Overrides are matched against each file's [`source_name`] under `project_root`.
pub fn plan(
    project_root: &Path,
    sources_dir: &Path,
    solidity: &SolidityConfig,
) -> Result<CompilePlan, SolconfError> {
    let files = find_sources(sources_dir)?;
    tracing::debug!("Planning {} sources under {}", files.len(), sources_dir.display());

    // One bucket per listed compiler, by position in the list
    let mut buckets: Vec<Vec<PlannedSource>> = vec![Vec::new(); solidity.compilers().len()];
    let mut override_jobs: Vec<CompileJob> = Vec::new();
    let mut unresolved = Vec::new();

    for file in files {
        let path = source_name(project_root, &file);
        let source = std::fs::read_to_string(&file).map_err(|e| SolconfError::Io {
            path: file.clone(),
            source: e,
        })?;

        let pragma = match pragma_of(&source) {
            Ok(p) => Some(p),
            Err(PragmaError::Missing) => None,
            Err(e) => {
                tracing::warn!("{path}: {e}");
                unresolved.push(UnresolvedSource {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let Some((spec, resolution)) = solidity.resolve_for_source(&path, pragma.as_ref()) else {
            let reason = format!(
                "no configured compiler satisfies pragma '{}'",
                pragma.as_ref().map_or("", |p| p.as_str())
            );
            unresolved.push(UnresolvedSource { path, reason });
            continue;
        };

        let planned = PlannedSource { path, resolution };
        match solidity.compilers().iter().position(|c| c == spec) {
            Some(index) => buckets[index].push(planned),
            None => match override_jobs.iter_mut().find(|job| &job.compiler == spec) {
                Some(job) => job.sources.push(planned),
                None => override_jobs.push(CompileJob {
                    compiler: spec.clone(),
                    sources: vec![planned],
                }),
            },
        }
    }

    let mut jobs: Vec<CompileJob> = solidity
        .compilers()
        .iter()
        .zip(buckets)
        .filter(|(_, sources)| !sources.is_empty())
        .map(|(compiler, sources)| CompileJob {
            compiler: compiler.clone(),
            sources,
        })
        .collect();
    jobs.extend(override_jobs);

    Ok(CompilePlan { jobs, unresolved })
}
