//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;
    use std::collections::HashMap;

    /// Generate a Solidity source path, optionally package-qualified
    pub fn source_path() -> impl Strategy<Value = String> {
        (
            prop_oneof![Just(String::new()), "@[a-z]{2,8}/[a-z]{2,8}/"],
            "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            "[A-Z][A-Za-z0-9]{0,20}",
        )
            .prop_map(|(prefix, dir, file)| format!("{prefix}{dir}/{file}.sol"))
    }

    /// Generate a valid semver version string
    pub fn semver_version() -> impl Strategy<Value = String> {
        (0u32..2, 0u32..30, 0u32..30)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate an arbitrary environment value, including the empty string
    pub fn env_value() -> impl Strategy<Value = String> {
        "[ -~]{0,64}"
    }

    /// Generate an environment over the variables solconf reads
    ///
    /// Each variable is independently present or absent.
    pub fn environment() -> impl Strategy<Value = HashMap<String, String>> {
        let vars = crate::config::env_vars::ALL;
        proptest::collection::vec(proptest::option::of(env_value()), vars.len()).prop_map(
            move |values| {
                vars.iter()
                    .zip(values)
                    .filter_map(|(k, v)| v.map(|v| ((*k).to_string(), v)))
                    .collect()
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use crate::core::export::fingerprint;
    use crate::core::project::ProjectConfig;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_source_path_generator(path in source_path()) {
            prop_assert!(path.ends_with(".sol"));
            prop_assert!(!path.starts_with('/'));
        }

        #[test]
        fn test_semver_version_generator(version in semver_version()) {
            prop_assert!(semver::Version::parse(&version).is_ok());
        }

        /// Loading twice from the same environment gives equal configurations
        #[test]
        fn prop_load_is_deterministic(env in environment()) {
            let first = ProjectConfig::load(&env);
            let second = ProjectConfig::load(&env);
            prop_assert_eq!(fingerprint(&first).unwrap(), fingerprint(&second).unwrap());
            prop_assert_eq!(first, second);
        }

        /// Remote networks carry exactly the PRIVATE_KEY value, or nothing
        #[test]
        fn prop_accounts_follow_private_key(env in environment()) {
            let config = ProjectConfig::load(&env);
            for name in ["ropsten", "rinkeby"] {
                let profile = config.network_for(name).expect("built-in network");
                match env.get("PRIVATE_KEY") {
                    Some(key) => {
                        prop_assert_eq!(profile.accounts.len(), 1);
                        prop_assert_eq!(profile.accounts[0].expose(), key.as_str());
                    }
                    None => prop_assert!(profile.accounts.is_empty()),
                }
            }
        }

        /// Gas reporting tracks presence of REPORT_GAS, not its value
        #[test]
        fn prop_gas_reporting_tracks_presence(env in environment()) {
            let config = ProjectConfig::load(&env);
            prop_assert_eq!(
                config.reporting.gas_reporting_enabled(),
                env.contains_key("REPORT_GAS")
            );
        }

        /// Unlisted paths resolve to the default compiler
        #[test]
        fn prop_unlisted_paths_use_default(path in source_path()) {
            let config = ProjectConfig::load(&std::collections::HashMap::<String, String>::new());
            prop_assume!(!config.solidity.overrides().contains_key(&path));
            prop_assert_eq!(config.resolve_compiler_for(&path), config.solidity.default_compiler());
        }
    }
}
