//! CLI command for `solconf network`

use anyhow::Result;

use crate::cli::commands::show::describe_network;
use crate::cli::output::{is_json, print_json, print_success, print_warning};
use crate::core::project::ProjectConfig;

/// Execute the network command
pub fn execute(config: &ProjectConfig, name: &str) -> Result<()> {
    let profile = config.require_network(name)?;

    if is_json() {
        return print_json(&serde_json::json!({
            "name": profile.name,
            "kind": profile.kind,
            "url": profile.url,
            "accounts": profile.accounts.iter().map(|k| k.redacted()).collect::<Vec<_>>(),
            "gas": profile.gas,
            "can_sign": profile.can_sign(),
        }));
    }

    print_success(&describe_network(profile));
    if !profile.is_in_process() && !profile.can_sign() {
        print_warning("No signing accounts; transactions cannot be sent on this network");
    }
    Ok(())
}
