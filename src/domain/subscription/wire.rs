//! Wire types for subscription responses (REST).

use crate::http::Page;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single subscription as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// e.g. "active", "pending", "error"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// e.g. "credit-card", "marketplace"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_databases: Option<i32>,
    /// Unknown/future API fields.
    #[serde(flatten)]
    pub extra: Value,
}

/// One page of the subscriptions collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionsPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i32>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    /// Continuation cursor; absent on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl Page for SubscriptionsPage {
    type Item = Subscription;

    fn into_parts(self) -> (Vec<Subscription>, Option<String>) {
        (self.subscriptions, self.next_cursor)
    }
}
