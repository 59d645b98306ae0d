//! Database domain — databases nested under a subscription.

pub mod client;
pub mod wire;

pub use client::Databases;
pub use wire::{Database, DatabasesPage};
