//! Subscription domain — account subscriptions and their lifecycle state.

pub mod client;
pub mod wire;

pub use client::Subscriptions;
pub use wire::{Subscription, SubscriptionsPage};
