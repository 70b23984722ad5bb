//! Core business logic module
//!
//! Resolution logic is pure: the environment is injected through
//! [`environment::Environment`] and nothing here touches global state.
//! Only [`plan`] and [`check`] read the filesystem.
//!
//! # Submodules
//!
//! - [`project`] - The configuration resolver
//! - [`compiler`] - Compiler specs, overrides and selection
//! - [`network`] - Network profiles and credentials
//! - [`reporting`] - Gas reporter and explorer settings
//! - [`environment`] - Environment abstraction and lookups
//! - [`manifest`] - Optional solconf.toml manifest
//! - [`pragma`] - Solidity version pragmas
//! - [`plan`] - Compile plan over a sources tree
//! - [`check`] - Configuration diagnostics
//! - [`export`] - Configuration contract for the external toolchain
//! - [`plugins`] - Toolchain plugin list

pub mod check;
pub mod compiler;
pub mod environment;
pub mod export;
pub mod manifest;
pub mod network;
pub mod plan;
pub mod plugins;
pub mod pragma;
pub mod project;
pub mod reporting;
