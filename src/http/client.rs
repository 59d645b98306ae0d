//! Low-level HTTP transport — `CloudHttp`.
//!
//! One authenticated request per call: attaches the `x-api-key` /
//! `x-api-secret-key` headers, joins paths onto the base URL, enforces the
//! per-request timeout, and maps every failure into [`CloudError`]. No
//! retries happen here. Internal to the crate — the sub-clients and
//! `CloudClient` wrap this.

use crate::auth::Credentials;
use crate::error::{CloudError, Result};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace};

/// Low-level transport for the Redis Cloud REST API.
#[derive(Clone, Debug)]
pub struct CloudHttp {
    base_url: String,
    timeout: Duration,
    credentials: Credentials,
    client: Client,
}

impl CloudHttp {
    pub(crate) fn new(
        credentials: Credentials,
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                CloudError::Configuration(format!("invalid user agent: {}", e))
            })?,
        );

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| CloudError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            credentials,
            client,
        })
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one slash, appending
    /// percent-encoded query parameters.
    fn url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url = format!("{}?{}", url, encoded.join("&"));
        }
        url
    }

    // ── Verbs ────────────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    /// DELETE, tolerating an empty success body: the API answers some
    /// deletions with 204/empty, reported here as `{"status": "deleted"}`.
    pub(crate) async fn delete(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.url(path, &[]);
        debug!(method = "DELETE", %url, "request");

        let response = self.authed(self.client.delete(&url)).send().await?;
        let status = response.status();
        trace!(status = status.as_u16(), "response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CloudError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(CloudError::from)?;
        if bytes.is_empty() {
            Ok(serde_json::json!({"status": "deleted"}))
        } else {
            decode(&bytes)
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("x-api-key", &self.credentials.key)
            .header("x-api-secret-key", &self.credentials.secret)
    }

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.url(path, query);
        debug!(method = %method, %url, "request");

        let mut req = self.authed(self.client.request(method, &url));
        if let Some(b) = body {
            req = req.json(b);
        }

        let response = req.send().await?;
        let status = response.status();
        trace!(status = status.as_u16(), "response");

        if status.is_success() {
            let bytes = response.bytes().await.map_err(CloudError::from)?;
            decode(&bytes)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(CloudError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Decode a response body, reporting the offending field path on failure.
fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        CloudError::Deserialization(format!(
            "failed to deserialize field '{}': {}",
            err.path(),
            err.inner()
        ))
    })
}
