//! Wire types for database responses (REST).

use crate::http::Page;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single database as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub database_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// e.g. "redis", "memcached"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_limit_in_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_endpoint: Option<String>,
    /// Unknown/future API fields.
    #[serde(flatten)]
    pub extra: Value,
}

/// One page of a subscription's databases collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabasesPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<i32>,
    #[serde(default)]
    pub databases: Vec<Database>,
    /// Continuation cursor; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl Page for DatabasesPage {
    type Item = Database;

    fn into_parts(self) -> (Vec<Database>, Option<String>) {
        (self.databases, self.next_cursor)
    }
}
