//! Authentication — API credentials and their resolution.
//!
//! Redis Cloud authenticates every request with an API key/secret pair sent
//! as the `x-api-key` and `x-api-secret-key` headers. Credentials are fixed
//! at client construction: passed explicitly to the builder, or resolved
//! from the environment via [`resolve_credentials`].
//!
//! Resolution reads through a [`ConfigSource`] rather than the process
//! environment directly, so tests can inject a deterministic source without
//! mutating real environment variables. [`ProcessEnv`] is the production
//! source.

use crate::error::{CloudError, Result};

/// Environment variables checked for the API key, in priority order.
pub const API_KEY_VARS: [&str; 3] = [
    "REDIS_CLOUD_API_KEY",
    "REDIS_CLOUD_ACCOUNT_KEY",
    "REDIS_CLOUD_USER_KEY",
];

/// Environment variables checked for the API secret, in priority order.
///
/// `REDIS_CLOUD_USER_KEY` doubles as the last fallback for both the key and
/// the secret; this mirrors the historical resolution order.
pub const API_SECRET_VARS: [&str; 3] = [
    "REDIS_CLOUD_API_SECRET",
    "REDIS_CLOUD_SECRET_KEY",
    "REDIS_CLOUD_USER_KEY",
];

/// Resolved API key/secret pair. Immutable once built.
#[derive(Clone)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret.
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .finish()
    }
}

/// A read-only configuration lookup.
///
/// Implementations return `None` for unset *and* empty values, so an empty
/// environment variable never wins resolution.
pub trait ConfigSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// [`ConfigSource`] backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

fn first_set(source: &dyn ConfigSource, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| source.get(name))
}

/// Resolve credentials from a configuration source.
///
/// The key is resolved before the secret; a missing key reports
/// "API key not found" even when no secret is set either.
pub fn resolve_credentials(source: &dyn ConfigSource) -> Result<Credentials> {
    let key = first_set(source, &API_KEY_VARS).ok_or_else(|| {
        CloudError::Configuration(
            "API key not found. Set REDIS_CLOUD_API_KEY or REDIS_CLOUD_ACCOUNT_KEY".to_string(),
        )
    })?;

    let secret = first_set(source, &API_SECRET_VARS).ok_or_else(|| {
        CloudError::Configuration("API secret not found. Set REDIS_CLOUD_API_SECRET".to_string())
    })?;

    Ok(Credentials { key, secret })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapSource(HashMap<&'static str, &'static str>);

    impl ConfigSource for MapSource {
        fn get(&self, name: &str) -> Option<String> {
            self.0
                .get(name)
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        }
    }

    fn source(pairs: &[(&'static str, &'static str)]) -> MapSource {
        MapSource(pairs.iter().copied().collect())
    }

    #[test]
    fn resolves_primary_names() {
        let src = source(&[
            ("REDIS_CLOUD_API_KEY", "key-1"),
            ("REDIS_CLOUD_API_SECRET", "secret-1"),
        ]);
        let creds = resolve_credentials(&src).unwrap();
        assert_eq!(creds.key, "key-1");
        assert_eq!(creds.secret, "secret-1");
    }

    #[test]
    fn resolves_alternate_names() {
        let src = source(&[
            ("REDIS_CLOUD_ACCOUNT_KEY", "key-2"),
            ("REDIS_CLOUD_SECRET_KEY", "secret-2"),
        ]);
        let creds = resolve_credentials(&src).unwrap();
        assert_eq!(creds.key, "key-2");
        assert_eq!(creds.secret, "secret-2");
    }

    #[test]
    fn primary_name_wins_over_alternates() {
        let src = source(&[
            ("REDIS_CLOUD_API_KEY", "primary"),
            ("REDIS_CLOUD_ACCOUNT_KEY", "alternate"),
            ("REDIS_CLOUD_API_SECRET", "secret"),
        ]);
        assert_eq!(resolve_credentials(&src).unwrap().key, "primary");
    }

    #[test]
    fn user_key_backstops_both_key_and_secret() {
        let src = source(&[("REDIS_CLOUD_USER_KEY", "shared")]);
        let creds = resolve_credentials(&src).unwrap();
        assert_eq!(creds.key, "shared");
        assert_eq!(creds.secret, "shared");
    }

    #[test]
    fn missing_key_reports_key_not_found() {
        let err = resolve_credentials(&source(&[])).unwrap_err();
        assert!(err.to_string().contains("API key not found"));
    }

    #[test]
    fn missing_secret_reports_secret_not_found() {
        let src = source(&[("REDIS_CLOUD_API_KEY", "key-only")]);
        let err = resolve_credentials(&src).unwrap_err();
        assert!(err.to_string().contains("API secret not found"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let src = source(&[
            ("REDIS_CLOUD_API_KEY", ""),
            ("REDIS_CLOUD_ACCOUNT_KEY", "fallback"),
            ("REDIS_CLOUD_API_SECRET", "secret"),
        ]);
        assert_eq!(resolve_credentials(&src).unwrap().key, "fallback");
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials {
            key: "k".into(),
            secret: "hunter2".into(),
        };
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("hunter2"));
    }
}
