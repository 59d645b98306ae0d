//! Databases sub-client — list, drain, fetch by id within a subscription.

use crate::blocking;
use crate::client::CloudClient;
use crate::domain::database::wire::{Database, DatabasesPage};
use crate::error::Result;
use crate::http::page;

pub struct Databases<'a> {
    pub(crate) client: &'a CloudClient,
}

impl<'a> Databases<'a> {
    /// Fetch one page of a subscription's databases.
    pub async fn list(
        &self,
        subscription_id: i32,
        cursor: Option<&str>,
    ) -> Result<DatabasesPage> {
        let mut query = Vec::new();
        if let Some(c) = cursor {
            query.push(("cursor", c.to_string()));
        }
        self.client
            .http
            .get(
                &format!("/subscriptions/{}/databases", subscription_id),
                &query,
            )
            .await
    }

    /// Fetch every page and return all of the subscription's databases in
    /// server order.
    pub async fn list_all(&self, subscription_id: i32) -> Result<Vec<Database>> {
        page::fetch_all(|cursor| async move {
            self.list(subscription_id, cursor.as_deref()).await
        })
        .await
    }

    /// Fetch a single database by id.
    pub async fn get(&self, subscription_id: i32, database_id: i32) -> Result<Database> {
        self.client
            .http
            .get(
                &format!(
                    "/subscriptions/{}/databases/{}",
                    subscription_id, database_id
                ),
                &[],
            )
            .await
    }

    // ── Blocking twins ───────────────────────────────────────────────────

    /// Blocking form of [`Databases::list`].
    pub fn list_sync(
        &self,
        subscription_id: i32,
        cursor: Option<&str>,
    ) -> Result<DatabasesPage> {
        blocking::block_on(self.list(subscription_id, cursor))
    }

    /// Blocking form of [`Databases::list_all`].
    pub fn list_all_sync(&self, subscription_id: i32) -> Result<Vec<Database>> {
        blocking::block_on(self.list_all(subscription_id))
    }

    /// Blocking form of [`Databases::get`].
    pub fn get_sync(&self, subscription_id: i32, database_id: i32) -> Result<Database> {
        blocking::block_on(self.get(subscription_id, database_id))
    }
}
