//! Check command implementation
//!
//! Implements `solconf check` to report configuration likely to fail in
//! the external toolchain.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{is_json, is_quiet, print_json, print_success, print_warning};
use crate::core::check;
use crate::core::project::ProjectConfig;

/// Execute the check command
pub fn execute(project_dir: &Path, config: &ProjectConfig, sources: Option<&Path>) -> Result<()> {
    tracing::info!("Checking project in {}", project_dir.display());

    let report = check::check(project_dir, config, sources).context("Check failed")?;

    if is_json() {
        let findings: Vec<String> = report.findings.iter().map(ToString::to_string).collect();
        return print_json(&serde_json::json!({
            "status": if report.is_clean() { "success" } else { "warning" },
            "findings": findings,
            "planned_sources": report.plan.as_ref().map(|p| p.source_count()),
        }));
    }

    if is_quiet() {
        return Ok(());
    }

    println!("Checking project configuration...\n");
    if report.is_clean() {
        print_success("No problems found");
    } else {
        for finding in &report.findings {
            print_warning(&finding.to_string());
        }
        println!("\n{} warning(s)", report.findings.len());
    }

    if let Some(compile_plan) = &report.plan {
        print_success(&format!(
            "{} sources planned across {} compiler(s)",
            compile_plan.source_count(),
            compile_plan.jobs.len()
        ));
    }

    Ok(())
}
