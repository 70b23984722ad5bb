//! CLI command for `solconf resolve`
//!
//! Without `--source`, resolution is by exact override match only. With a
//! source file, its pragma picks among the listed compilers when no
//! override applies.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::cli::output::{is_json, print_json, print_success};
use crate::core::compiler::Resolution;
use crate::core::pragma::pragma_of;
use crate::core::project::ProjectConfig;
use crate::error::PragmaError;

/// Execute the resolve command
pub fn execute(config: &ProjectConfig, path: &str, source: Option<&Path>) -> Result<()> {
    let (spec, resolution) = match source {
        None => {
            let spec = config.resolve_compiler_for(path);
            let resolution = if config.solidity.overrides().contains_key(path) {
                Resolution::Override
            } else {
                Resolution::Default
            };
            (spec, resolution)
        }
        Some(file) => {
            let text = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read source {}", file.display()))?;
            let pragma = match pragma_of(&text) {
                Ok(p) => Some(p),
                Err(PragmaError::Missing) => None,
                Err(e) => return Err(e).with_context(|| format!("In {}", file.display())),
            };
            match config.solidity.resolve_for_source(path, pragma.as_ref()) {
                Some(found) => found,
                None => bail!(
                    "No configured compiler satisfies pragma '{}' in {}",
                    pragma.as_ref().map_or("", |p| p.as_str()),
                    file.display()
                ),
            }
        }
    };

    tracing::info!("Resolved {path} via {resolution}");

    if is_json() {
        return print_json(&serde_json::json!({
            "path": path,
            "resolution": resolution,
            "compiler": spec,
        }));
    }

    print_success(&format!("{path}: {spec} [{resolution}]"));
    Ok(())
}
