//! CLI command for `solconf show`
//!
//! Prints the resolved configuration. Secrets are always redacted.

use anyhow::Result;

use crate::cli::output::{
    is_json, is_quiet, print_detail, print_heading, print_json, status,
};
use crate::core::export::{fingerprint, ExportedConfig};
use crate::core::network::NetworkProfile;
use crate::core::project::ProjectConfig;

/// Execute the show command
pub fn execute(config: &ProjectConfig) -> Result<()> {
    let fp = fingerprint(config)?;

    if is_json() {
        let body = serde_json::json!({
            "config": ExportedConfig::new(config, true),
            "fingerprint": fp,
        });
        return print_json(&body);
    }

    if is_quiet() {
        return Ok(());
    }

    print_heading("Compilers");
    for (i, spec) in config.solidity.compilers().iter().enumerate() {
        let marker = if i == 0 { " [default]" } else { "" };
        print_detail(&format!("{} {spec}{marker}", status::BULLET));
    }

    print_heading("Overrides");
    if config.solidity.overrides().is_empty() {
        print_detail("(none)");
    }
    for (path, spec) in config.solidity.overrides() {
        print_detail(&format!("{} {path} → {spec}", status::BULLET));
    }

    print_heading("Networks");
    for profile in config.networks.values() {
        print_detail(&format!("{} {}", status::BULLET, describe_network(profile)));
    }

    let gas = &config.reporting.gas_reporter;
    println!(
        "Gas reporter: {} ({})",
        if gas.enabled { "enabled" } else { "disabled" },
        gas.currency
    );
    println!(
        "Explorer API key: {}",
        if config.reporting.explorer_api_key().is_some() {
            "set"
        } else {
            "not set"
        }
    );

    let plugins: Vec<String> = config.plugins.iter().map(ToString::to_string).collect();
    println!("Plugins: {}", plugins.join(", "));
    println!("Fingerprint: {fp}");

    Ok(())
}

/// One-line human description of a network profile
pub fn describe_network(profile: &NetworkProfile) -> String {
    if profile.is_in_process() {
        return match profile.gas {
            Some(gas) => format!("{} (in-process) gas={gas}", profile.name),
            None => format!("{} (in-process)", profile.name),
        };
    }

    let url = if profile.has_endpoint() {
        profile.url.as_str()
    } else {
        "<unset>"
    };
    let accounts = match profile.accounts.first() {
        Some(key) => key.redacted(),
        None => "none".to_string(),
    };
    let mut line = format!("{}: url={url} account={accounts}", profile.name);
    if let Some(gas) = profile.gas {
        line.push_str(&format!(" gas={gas}"));
    }
    line
}
