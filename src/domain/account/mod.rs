//! Account domain — the account owning the API key.

pub mod client;
pub mod wire;

pub use client::Account;
pub use wire::AccountInfo;
