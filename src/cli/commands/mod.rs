//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod export;
pub mod network;
pub mod plan;
pub mod resolve;
pub mod show;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::export::ExportFormat;
use crate::core::project::ProjectConfig;

/// Export output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration with secrets redacted
    Show,

    /// Show which compiler builds a source file
    Resolve {
        /// Source path exactly as used in the override mapping
        path: String,

        /// Read this file's pragma to choose among listed compilers
        #[arg(long)]
        source: Option<PathBuf>,
    },

    /// Show a network profile (fails if the network is not configured)
    Network {
        /// Network name
        name: String,
    },

    /// Export the configuration for the external toolchain
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,

        /// Replace secrets with a placeholder
        #[arg(long)]
        redact: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Group sources by the compiler that builds them
    Plan {
        /// Sources directory, relative to the project root
        #[arg(default_value = defaults::SOURCES_DIR)]
        dir: PathBuf,
    },

    /// Report configuration likely to fail downstream
    Check {
        /// Also plan this sources directory
        #[arg(long)]
        sources: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command against a loaded configuration
    pub fn run(self, project_dir: &Path, config: &ProjectConfig) -> Result<()> {
        match self {
            Self::Show => show::execute(config),
            Self::Resolve { path, source } => {
                let source = source.map(|s| project_dir.join(s));
                resolve::execute(config, &path, source.as_deref())
            }
            Self::Network { name } => network::execute(config, &name),
            Self::Export {
                format,
                redact,
                output,
            } => export::execute(config, format.into(), redact, output.as_deref()),
            Self::Plan { dir } => plan::execute(project_dir, &project_dir.join(dir), config),
            Self::Check { sources } => {
                let sources = sources.map(|s| project_dir.join(s));
                check::execute(project_dir, config, sources.as_deref())
            }
        }
    }
}
