//! # redis-cloud
//!
//! A Rust client for the Redis Cloud REST API, usable from async and
//! blocking code.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — error taxonomy, network constants, wire types
//! 2. **Auth** — credential model and environment resolution
//! 3. **HTTP** — `CloudHttp` transport + pagination engine
//! 4. **High-Level Client** — `CloudClient` with nested sub-clients and
//!    `_sync` blocking twins
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use redis_cloud::CloudClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CloudClient::builder()
//!     .api_key("your-api-key")
//!     .api_secret("your-api-secret")
//!     .build()?;
//!
//! // Typed access
//! let subs = client.subscriptions().list_all().await?;
//! let dbs = client.databases().list_all(subs[0].id).await?;
//!
//! // Raw access for endpoints without a typed wrapper
//! let payment_methods = client.get_raw("/payment-methods", &[]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every operation also has a blocking twin (`list_all_sync`,
//! `get_raw_sync`, ...) for use outside an async runtime:
//!
//! ```rust,no_run
//! use redis_cloud::CloudClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CloudClient::from_env()?;
//! let subs = client.subscriptions().list_all_sync()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Redis Cloud authenticates with two headers on every request:
//! `x-api-key` and `x-api-secret-key`. Pass credentials to the builder, or
//! use [`CloudClient::from_env`] to resolve them from
//! `REDIS_CLOUD_API_KEY` / `REDIS_CLOUD_API_SECRET` (with fallback names —
//! see the [`auth`] module).
//!
//! ## Errors
//!
//! Every failure is a [`CloudError`]: configuration problems, transport
//! failures (with a timeout kind), non-2xx responses carrying the server's
//! status and body, pagination loops, and undecodable bodies. The client
//! never retries; [`CloudError::is_retryable`] tells callers which failures
//! are worth retrying themselves.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified client error type.
pub mod error;

/// Network URL and timeout constants.
pub mod network;

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and environment resolution.
pub mod auth;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport and pagination engine.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CloudClient` — the primary entry point.
pub mod client;

pub(crate) mod blocking;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use auth::{ConfigSource, Credentials, ProcessEnv};
pub use client::{CloudClient, CloudClientBuilder};
pub use error::{CloudError, Result, TransportKind};

pub mod prelude {
    pub use crate::auth::{ConfigSource, Credentials, ProcessEnv};
    pub use crate::client::{
        AccountClient, CloudClient, CloudClientBuilder, DatabasesClient, SubscriptionsClient,
    };
    pub use crate::domain::account::AccountInfo;
    pub use crate::domain::database::{Database, DatabasesPage};
    pub use crate::domain::subscription::{Subscription, SubscriptionsPage};
    pub use crate::error::{CloudError, Result, TransportKind};
    pub use crate::http::Page;
    pub use crate::network::DEFAULT_API_URL;
}
