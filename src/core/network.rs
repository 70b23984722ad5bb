//! Network profiles
//!
//! A network profile is a named set of connection parameters for submitting
//! transactions to one chain endpoint.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A signing secret
///
/// `Debug` and `Display` never print the value. Serialization emits it raw
/// because the external toolchain needs the key to sign.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a secret value
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Redacted form used in human-facing output; only the length is shown
    pub fn redacted(&self) -> String {
        format!("****({} chars)", self.0.chars().count())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl Serialize for Credential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// How a network is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkKind {
    /// Development chain run inside the task runner
    InProcess,
    /// JSON-RPC endpoint
    #[default]
    Remote,
}

/// Connection parameters for one network
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkProfile {
    /// Network identifier
    pub name: String,

    /// RPC endpoint; empty means unconfigured
    pub url: String,

    /// Signing accounts, zero or one entries
    pub accounts: Vec<Credential>,

    /// Fixed transaction gas limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,

    /// How the network is reached
    pub kind: NetworkKind,
}

impl NetworkProfile {
    /// In-process development network with no endpoint or accounts
    pub fn in_process(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
            accounts: Vec::new(),
            gas: None,
            kind: NetworkKind::InProcess,
        }
    }

    /// Remote network profile
    pub fn remote(
        name: impl Into<String>,
        url: String,
        accounts: Vec<Credential>,
        gas: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            url,
            accounts,
            gas,
            kind: NetworkKind::Remote,
        }
    }

    /// Whether transactions can be signed on this network
    pub fn can_sign(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// Whether a remote endpoint has been configured
    pub fn has_endpoint(&self) -> bool {
        !self.url.is_empty()
    }

    /// Whether this is the in-process development network
    pub fn is_in_process(&self) -> bool {
        self.kind == NetworkKind::InProcess
    }
}
