//! CLI command for `solconf export`
//!
//! Writes the configuration contract consumed by the external compiler and
//! task runner.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::print_success;
use crate::core::export::{ExportFormat, ExportedConfig};
use crate::core::project::ProjectConfig;

/// Execute the export command
pub fn execute(
    config: &ProjectConfig,
    format: ExportFormat,
    redact: bool,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = ExportedConfig::new(config, redact)
        .render(format)
        .context("Failed to render configuration")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Exported configuration ({format:?}) to {}", path.display());
            print_success(&format!("Wrote {}", path.display()));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
