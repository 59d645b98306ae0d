//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — serde structs matching the REST API payloads
//! - `client.rs` — sub-client with the resource's operations

pub mod account;
pub mod database;
pub mod subscription;
