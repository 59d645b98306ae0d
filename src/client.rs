//! High-level client — `CloudClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, environment-based construction, raw verb
//! helpers, and the accessor methods. Typed and raw operations share the
//! same transport, so auth, timeout, and error semantics are identical
//! regardless of entry point.

use crate::auth::{self, ConfigSource, Credentials, ProcessEnv};
use crate::blocking;
use crate::domain::account::client::Account;
use crate::domain::database::client::Databases;
use crate::domain::subscription::client::Subscriptions;
use crate::error::{CloudError, Result};
use crate::http::CloudHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

use std::time::Duration;

/// Default user agent for HTTP requests.
const DEFAULT_USER_AGENT: &str = concat!("redis-cloud/", env!("CARGO_PKG_VERSION"));

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::database::client::Databases as DatabasesClient;
pub use crate::domain::subscription::client::Subscriptions as SubscriptionsClient;

/// The primary entry point for the Redis Cloud API.
///
/// Immutable after construction and cheap to clone (the underlying
/// connection pool is shared). A single instance supports concurrent
/// blocking calls from multiple threads and concurrent async calls on an
/// event loop.
///
/// Provides nested sub-client accessors per resource:
/// `client.subscriptions()`, `client.databases()`, `client.account()`.
#[derive(Clone, Debug)]
pub struct CloudClient {
    pub(crate) http: CloudHttp,
}

impl CloudClient {
    pub fn builder() -> CloudClientBuilder {
        CloudClientBuilder::default()
    }

    /// Build a client from the environment.
    ///
    /// Credentials resolve in priority order — key from
    /// `REDIS_CLOUD_API_KEY`, `REDIS_CLOUD_ACCOUNT_KEY`,
    /// `REDIS_CLOUD_USER_KEY`; secret from `REDIS_CLOUD_API_SECRET`,
    /// `REDIS_CLOUD_SECRET_KEY`, `REDIS_CLOUD_USER_KEY` — and
    /// `REDIS_CLOUD_BASE_URL` overrides the default base URL when set.
    pub fn from_env() -> Result<Self> {
        Self::from_config_source(&ProcessEnv)
    }

    /// Like [`CloudClient::from_env`] but reading from an injected source,
    /// for deterministic construction in tests.
    pub fn from_config_source(source: &impl ConfigSource) -> Result<Self> {
        let credentials = auth::resolve_credentials(source)?;
        let mut builder = Self::builder()
            .api_key(credentials.key)
            .api_secret(credentials.secret);
        if let Some(base_url) = source.get("REDIS_CLOUD_BASE_URL") {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions { client: self }
    }

    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    // ── Configuration accessors ──────────────────────────────────────────

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    /// Per-request timeout in seconds.
    pub fn timeout_secs(&self) -> f64 {
        self.http.timeout().as_secs_f64()
    }

    /// Base URL requests are issued against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Raw verbs ────────────────────────────────────────────────────────
    //
    // Passthroughs for resources without a typed wrapper. Same transport
    // and error mapping as the typed operations.

    /// Raw GET returning the JSON body.
    pub async fn get_raw(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        self.http.get(path, params).await
    }

    /// Raw POST with a JSON body.
    pub async fn post_raw(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.http.post(path, &body).await
    }

    /// Raw PUT with a JSON body.
    pub async fn put_raw(&self, path: &str, body: serde_json::Value) -> Result<serde_json::Value> {
        self.http.put(path, &body).await
    }

    /// Raw DELETE. An empty success body is reported as
    /// `{"status": "deleted"}`.
    pub async fn delete_raw(&self, path: &str) -> Result<serde_json::Value> {
        self.http.delete(path).await
    }

    // ── Blocking twins ───────────────────────────────────────────────────

    /// Blocking form of [`CloudClient::get_raw`].
    pub fn get_raw_sync(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value> {
        blocking::block_on(self.get_raw(path, params))
    }

    /// Blocking form of [`CloudClient::post_raw`].
    pub fn post_raw_sync(&self, path: &str, body: serde_json::Value) -> Result<serde_json::Value> {
        blocking::block_on(self.post_raw(path, body))
    }

    /// Blocking form of [`CloudClient::put_raw`].
    pub fn put_raw_sync(&self, path: &str, body: serde_json::Value) -> Result<serde_json::Value> {
        blocking::block_on(self.put_raw(path, body))
    }

    /// Blocking form of [`CloudClient::delete_raw`].
    pub fn delete_raw_sync(&self, path: &str) -> Result<serde_json::Value> {
        blocking::block_on(self.delete_raw(path))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct CloudClientBuilder {
    api_key: Option<String>,
    api_secret: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for CloudClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CloudClientBuilder {
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn api_secret(mut self, secret: impl Into<String>) -> Self {
        self.api_secret = Some(secret.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header, e.g. `my-app/1.0.0`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<CloudClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| CloudError::Configuration("API key is required".to_string()))?;
        let api_secret = self
            .api_secret
            .ok_or_else(|| CloudError::Configuration("API secret is required".to_string()))?;

        let http = CloudHttp::new(
            Credentials {
                key: api_key,
                secret: api_secret,
            },
            &self.base_url,
            self.timeout,
            &self.user_agent,
        )?;

        Ok(CloudClient { http })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ConfigSource;
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

    #[test]
    fn build_requires_key_and_secret() {
        let err = CloudClient::builder().build().unwrap_err();
        assert!(matches!(err, CloudError::Configuration(_)));
        assert!(err.to_string().contains("API key is required"));

        let err = CloudClient::builder().api_key("k").build().unwrap_err();
        assert!(err.to_string().contains("API secret is required"));
    }

    #[test]
    fn default_timeout_is_positive() {
        let client = CloudClient::builder()
            .api_key("k")
            .api_secret("s")
            .build()
            .unwrap();
        assert!(client.timeout_secs() > 0.0);
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn configured_timeout_is_reflected() {
        let client = CloudClient::builder()
            .api_key("k")
            .api_secret("s")
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();
        assert_eq!(client.timeout_secs(), 60.0);
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = CloudClient::builder()
            .api_key("k")
            .api_secret("s")
            .base_url("https://example.com/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://example.com/v1");
    }

    #[test]
    fn from_config_source_honors_base_url_override() {
        let source = MapSource(
            [
                ("REDIS_CLOUD_API_KEY", "k"),
                ("REDIS_CLOUD_API_SECRET", "s"),
                ("REDIS_CLOUD_BASE_URL", "https://staging.example.com"),
            ]
            .into_iter()
            .collect(),
        );
        let client = CloudClient::from_config_source(&source).unwrap();
        assert_eq!(client.base_url(), "https://staging.example.com");
    }

    #[test]
    fn from_config_source_fails_without_key() {
        let err = CloudClient::from_config_source(&MapSource(HashMap::new())).unwrap_err();
        assert!(err.to_string().contains("API key not found"));
    }
}
