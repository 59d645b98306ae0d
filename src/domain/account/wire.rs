//! Wire types for account responses (REST).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Account information, nested under `account` in the root endpoint's
/// response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_timestamp: Option<String>,
    /// Unknown/future API fields.
    #[serde(flatten)]
    pub extra: Value,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountInfo>,
}
