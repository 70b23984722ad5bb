//! Integration tests for the solconf command line
//!
//! Each test runs the binary with a cleared environment so only the
//! variables passed explicitly are visible.

mod common;

use common::{stderr, stdout, TestProject, SAMPLE_MANIFEST};

#[test]
fn test_show_redacts_private_key() {
    let project = TestProject::new();
    let output = project.run(&["show"], &[("PRIVATE_KEY", "0x0123456789abcdef0123")]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("solc 0.8.9 (optimizer: 200 runs) [default]"));
    assert!(out.contains("@uniswap/lib/contracts/libraries/FullMath.sol"));
    assert!(out.contains("hardhat (in-process)"));
    assert!(out.contains("gas=6721975"));
    assert!(!out.contains("0x0123456789abcdef0123"));
}

#[test]
fn test_resolve_override_and_default() {
    let project = TestProject::new();

    let output = project.run(
        &["resolve", "@uniswap/lib/contracts/libraries/FixedPoint.sol"],
        &[],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("solc 0.6.6"));
    assert!(stdout(&output).contains("[override]"));

    let output = project.run(&["resolve", "contracts/Token.sol"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("solc 0.8.9"));
    assert!(stdout(&output).contains("[default]"));
}

#[test]
fn test_resolve_with_source_pragma() {
    let project = TestProject::new();
    project.create_file("contracts/Oracle.sol", common::LEGACY_SOURCE);

    let output = project.run(
        &["--json", "resolve", "contracts/Oracle.sol", "--source", "contracts/Oracle.sol"],
        &[],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["resolution"], "pragma");
    assert_eq!(value["compiler"]["version"], "0.6.6");
}

#[test]
fn test_network_unknown_fails() {
    let project = TestProject::new();
    let output = project.run(&["network", "mainnet"], &[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'mainnet' is not configured"));
}

#[test]
fn test_network_json_reports_signing() {
    let project = TestProject::new();
    let output = project.run(
        &["--json", "network", "rinkeby"],
        &[("RINKEBY_URL", "https://rinkeby.example"), ("PRIVATE_KEY", "0xfeedfacefeedface")],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["name"], "rinkeby");
    assert_eq!(value["url"], "https://rinkeby.example");
    assert_eq!(value["gas"], 6_721_975);
    assert_eq!(value["can_sign"], true);
    assert_eq!(value["accounts"][0], "****(18 chars)");
    assert!(!stdout(&output).contains("0xfe"));
}

#[test]
fn test_export_json_contract() {
    let project = TestProject::new();
    let output = project.run(&["export"], &[("PRIVATE_KEY", "0xk"), ("REPORT_GAS", "1")]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["solidity"]["compilers"].as_array().unwrap().len(), 3);
    assert_eq!(value["networks"]["ropsten"]["accounts"][0], "0xk");
    assert_eq!(value["gasReporter"]["enabled"], true);
}

#[cfg(unix)]
#[test]
fn test_export_non_unicode_variables_count_as_present() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let project = TestProject::new();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_solconf"))
        .current_dir(project.path())
        .env_clear()
        .env("REPORT_GAS", OsStr::from_bytes(b"\xff"))
        .env("PRIVATE_KEY", OsStr::from_bytes(b"0\xfe"))
        .arg("export")
        .output()
        .expect("Failed to execute solconf");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["gasReporter"]["enabled"], true);
    assert_eq!(value["networks"]["ropsten"]["accounts"].as_array().unwrap().len(), 1);
    assert_eq!(value["networks"]["rinkeby"]["accounts"].as_array().unwrap().len(), 1);
}

#[test]
fn test_export_toml_to_file_redacted() {
    let project = TestProject::new();
    let output = project.run(
        &["export", "--format", "toml", "--redact", "--output", "out/config.toml"],
        &[("PRIVATE_KEY", "0xsecret"), ("ETHERSCAN_API_KEY", "scan")],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.file_exists("out/config.toml"));

    let written = project.read_file("out/config.toml");
    assert!(!written.contains("0xsecret"));
    assert!(!written.contains("\"scan\""));
    let value: toml::Value = toml::from_str(&written).unwrap();
    assert_eq!(value["etherscan"]["apiKey"].as_str(), Some("<redacted>"));
}

#[test]
fn test_manifest_discovered_in_project_root() {
    let project = TestProject::new();
    project.create_file("solconf.toml", SAMPLE_MANIFEST);

    let output = project.run(
        &["--json", "network", "sepolia"],
        &[("SEPOLIA_URL", "https://sepolia.example")],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["url"], "https://sepolia.example");
    assert_eq!(value["can_sign"], false);

    // Built-in networks are replaced by the manifest's
    let output = project.run(&["network", "rinkeby"], &[]);
    assert!(!output.status.success());
}

#[test]
fn test_explicit_manifest_must_exist() {
    let project = TestProject::new();
    let output = project.run(&["--manifest", "missing.toml", "show"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load project manifest"));
}

#[test]
fn test_invalid_manifest_reports_error() {
    let project = TestProject::new();
    project.create_file("solconf.toml", "[[compilers]]\nversion = 8\n");
    let output = project.run(&["show"], &[]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to parse manifest"));
}

#[test]
fn test_check_reports_unconfigured_networks() {
    let project = TestProject::new();
    let output = project.run(&["check"], &[]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Network 'ropsten' has no RPC URL"));
    assert!(out.contains("Network 'rinkeby' has no signing accounts"));
    assert!(out.contains("Override path '@uniswap/lib/contracts/libraries/FullMath.sol' does not exist"));
}

#[test]
fn test_quiet_suppresses_output() {
    let project = TestProject::new();
    let output = project.run(&["--quiet", "show"], &[]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}
