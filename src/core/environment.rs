//! Environment abstraction and per-variable lookups
//!
//! Every environment-driven value is read through one small function with a
//! documented default, against an injected [`Environment`]. The process
//! environment is just one implementation; tests pass plain maps.

use std::collections::{BTreeMap, HashMap};

use crate::core::network::Credential;

/// Source of environment variables
pub trait Environment {
    /// Value of `key`, or `None` when the variable is absent
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        // Presence is what matters; non-unicode values are kept lossily
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// RPC URL from `key`, or the empty string (unconfigured) when unset
pub fn url_or_empty(env: &impl Environment, key: &str) -> String {
    env.get(key).unwrap_or_else(|| {
        tracing::debug!("{key} not set, using empty URL");
        String::new()
    })
}

/// Signing accounts from `key`
///
/// An absent variable yields no accounts at all rather than a placeholder.
/// A present variable yields exactly one account, even if its value is empty.
pub fn accounts_from(env: &impl Environment, key: &str) -> Vec<Credential> {
    match env.get(key) {
        Some(secret) => vec![Credential::new(secret)],
        None => {
            tracing::debug!("{key} not set, network has no signing accounts");
            Vec::new()
        }
    }
}

/// Whether `key` is present, whatever its value
pub fn flag_present(env: &impl Environment, key: &str) -> bool {
    env.get(key).is_some()
}

/// Raw optional value of `key`
pub fn optional_value(env: &impl Environment, key: &str) -> Option<String> {
    let value = env.get(key);
    if value.is_none() {
        tracing::debug!("{key} not set");
    }
    value
}
