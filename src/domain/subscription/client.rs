//! Subscriptions sub-client — list, drain, fetch by id.

use crate::blocking;
use crate::client::CloudClient;
use crate::domain::subscription::wire::{Subscription, SubscriptionsPage};
use crate::error::Result;
use crate::http::page;

pub struct Subscriptions<'a> {
    pub(crate) client: &'a CloudClient,
}

impl<'a> Subscriptions<'a> {
    /// Fetch one page of subscriptions. `cursor` continues a previous page.
    pub async fn list(&self, cursor: Option<&str>) -> Result<SubscriptionsPage> {
        let mut query = Vec::new();
        if let Some(c) = cursor {
            query.push(("cursor", c.to_string()));
        }
        self.client.http.get("/subscriptions", &query).await
    }

    /// Fetch every page and return all subscriptions in server order.
    pub async fn list_all(&self) -> Result<Vec<Subscription>> {
        page::fetch_all(|cursor| async move { self.list(cursor.as_deref()).await }).await
    }

    /// Fetch a single subscription by id.
    pub async fn get(&self, subscription_id: i32) -> Result<Subscription> {
        self.client
            .http
            .get(&format!("/subscriptions/{}", subscription_id), &[])
            .await
    }

    // ── Blocking twins ───────────────────────────────────────────────────

    /// Blocking form of [`Subscriptions::list`].
    pub fn list_sync(&self, cursor: Option<&str>) -> Result<SubscriptionsPage> {
        blocking::block_on(self.list(cursor))
    }

    /// Blocking form of [`Subscriptions::list_all`].
    pub fn list_all_sync(&self) -> Result<Vec<Subscription>> {
        blocking::block_on(self.list_all())
    }

    /// Blocking form of [`Subscriptions::get`].
    pub fn get_sync(&self, subscription_id: i32) -> Result<Subscription> {
        blocking::block_on(self.get(subscription_id))
    }
}
