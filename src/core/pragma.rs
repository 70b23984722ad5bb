//! Solidity version pragmas
//!
//! Extracts `pragma solidity <constraint>;` from source text and translates
//! the constraint into semver requirements. Solidity constraints differ from
//! Cargo-style requirements in a few ways:
//!
//! - comparators are separated by whitespace, not commas
//! - a bare version (`0.8.9`) is an exact match, not a caret requirement
//! - `a - b` is an inclusive range
//! - `||` separates alternatives, any of which may match

use regex::Regex;
use semver::{Version, VersionReq};
use std::fmt;
use std::sync::LazyLock;

use crate::error::PragmaError;

static PRAGMA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*pragma\s+solidity\s+([^;]+);").expect("valid pragma regex")
});

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("valid comment regex"));

static HYPHEN_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+)\s+-\s+(\S+)").expect("valid range regex"));

static OPERATOR_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(>=|<=|>|<|=|\^|~)\s+").expect("valid operator regex"));

/// A parsed `pragma solidity` constraint
#[derive(Debug, Clone, PartialEq)]
pub struct SolidityPragma {
    raw: String,
    alternatives: Vec<VersionReq>,
}

impl SolidityPragma {
    /// Parse a Solidity version constraint such as `>=0.6.0 <0.8.0`
    pub fn parse(constraint: &str) -> Result<Self, PragmaError> {
        let raw = constraint.trim().to_string();
        let invalid = |reason: String| PragmaError::InvalidConstraint {
            constraint: raw.clone(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("empty constraint".to_string()));
        }

        let mut alternatives = Vec::new();
        for branch in raw.split("||") {
            let req = translate_branch(branch).map_err(&invalid)?;
            alternatives.push(req);
        }

        Ok(Self { raw, alternatives })
    }

    /// Whether `version` satisfies any alternative
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }

    /// The constraint as written in the source
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for SolidityPragma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Translate one `||` branch into a semver requirement
fn translate_branch(branch: &str) -> Result<VersionReq, String> {
    let branch = branch.trim();
    if branch.is_empty() {
        return Err("empty alternative".to_string());
    }

    let ranged = HYPHEN_RANGE_RE.replace_all(branch, ">=$1 <=$2");
    let tightened = OPERATOR_GAP_RE.replace_all(&ranged, "$1");

    let comparators: Vec<String> = tightened
        .split_whitespace()
        .map(|token| {
            let bare = token.starts_with(|c: char| c.is_ascii_digit());
            let wildcard = token.contains(['x', 'X', '*']);
            if bare && !wildcard {
                format!("={token}")
            } else {
                token.to_string()
            }
        })
        .collect();

    VersionReq::parse(&comparators.join(", ")).map_err(|e| e.to_string())
}

/// Raw constraint text of the first `pragma solidity` directive in `source`
///
/// Directives inside line or block comments are ignored.
pub fn find_pragma(source: &str) -> Option<String> {
    let code = COMMENT_RE.replace_all(source, " ");
    PRAGMA_RE
        .captures(&code)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Parse the version pragma of a Solidity source file
pub fn pragma_of(source: &str) -> Result<SolidityPragma, PragmaError> {
    let constraint = find_pragma(source).ok_or(PragmaError::Missing)?;
    SolidityPragma::parse(&constraint)
}
