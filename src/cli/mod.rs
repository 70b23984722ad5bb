//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no resolution logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::defaults;
use crate::core::environment::ProcessEnvironment;
use crate::core::manifest::Manifest;
use crate::core::project::ProjectConfig;
use commands::Commands;

/// Version string with the git commit when the build recorded one
fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let sha = option_env!("VERGEN_GIT_SHA").filter(|s| !s.starts_with("VERGEN_"));
        let dirty = option_env!("VERGEN_GIT_DIRTY") == Some("true");
        match sha {
            Some(sha) if dirty => format!("{} ({sha}-dirty)", env!("CARGO_PKG_VERSION")),
            Some(sha) => format!("{} ({sha})", env!("CARGO_PKG_VERSION")),
            None => env!("CARGO_PKG_VERSION").to_string(),
        }
    })
}

/// solconf - Solidity project configuration resolver
///
/// Resolves compiler versions, overrides and network profiles for a
/// multi-version Solidity project.
#[derive(Parser, Debug)]
#[command(name = "solconf")]
#[command(author, version, long_version = long_version(), about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root directory
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Manifest path (defaults to solconf.toml in the project root, if present)
    #[arg(long, global = true, env = "SOLCONF_MANIFEST")]
    pub manifest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(cmd) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let config = load_project(&self.project_dir, self.manifest.as_deref())?;
        cmd.run(&self.project_dir, &config)
    }
}

/// Load the project configuration from the process environment
///
/// An explicit manifest must exist. Without one, `solconf.toml` in the
/// project root is used if present, else the built-in configuration.
pub fn load_project(project_dir: &Path, manifest: Option<&Path>) -> Result<ProjectConfig> {
    let discovered = project_dir.join(defaults::MANIFEST_FILE);
    let manifest_path = match manifest {
        Some(path) => Some(path.to_path_buf()),
        None if discovered.is_file() => Some(discovered),
        None => None,
    };

    let manifest = match manifest_path {
        Some(path) => {
            tracing::info!("Using manifest {}", path.display());
            Manifest::load(&path).context("Failed to load project manifest")?
        }
        None => {
            tracing::info!("No manifest found, using built-in configuration");
            Manifest::default()
        }
    };

    Ok(ProjectConfig::from_manifest(&manifest, &ProcessEnvironment))
}
