//! Configuration constants
//!
//! - [`defaults`] - Built-in compiler, override and network literals
//! - [`env_vars`] - Names of the environment variables read at load time

pub mod defaults;
pub mod env_vars;
