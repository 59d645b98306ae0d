//! Account sub-client — current-account lookup.

use crate::blocking;
use crate::client::CloudClient;
use crate::domain::account::wire::{AccountInfo, RootAccount};
use crate::error::{CloudError, Result};

pub struct Account<'a> {
    pub(crate) client: &'a CloudClient,
}

impl<'a> Account<'a> {
    /// Fetch the account that owns the API key (`GET /`).
    pub async fn get(&self) -> Result<AccountInfo> {
        let root: RootAccount = self.client.http.get("/", &[]).await?;
        root.account.ok_or_else(|| {
            CloudError::Deserialization("response is missing the 'account' field".to_string())
        })
    }

    /// Blocking form of [`Account::get`].
    pub fn get_sync(&self) -> Result<AccountInfo> {
        blocking::block_on(self.get())
    }
}
