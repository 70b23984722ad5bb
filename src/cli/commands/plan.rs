//! CLI command for `solconf plan`

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{
    is_json, is_quiet, print_detail, print_info, print_json, print_warning, status,
};
use crate::core::plan::plan;
use crate::core::project::ProjectConfig;

/// Execute the plan command
pub fn execute(project_dir: &Path, sources_dir: &Path, config: &ProjectConfig) -> Result<()> {
    let compile_plan = plan(project_dir, sources_dir, &config.solidity)
        .with_context(|| format!("Failed to plan sources in {}", sources_dir.display()))?;

    if is_json() {
        return print_json(&compile_plan);
    }
    if is_quiet() {
        return Ok(());
    }

    if compile_plan.jobs.is_empty() {
        print_info(&format!("No Solidity sources found in {}", sources_dir.display()));
    }
    for job in &compile_plan.jobs {
        println!("{} ({} sources)", job.compiler, job.sources.len());
        for source in &job.sources {
            print_detail(&format!(
                "{} {} [{}]",
                status::BULLET,
                source.path,
                source.resolution
            ));
        }
    }

    for source in &compile_plan.unresolved {
        print_warning(&format!("{}: {}", source.path, source.reason));
    }

    Ok(())
}
