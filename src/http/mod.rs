//! HTTP layer — `CloudHttp` transport and the pagination engine.

pub mod client;
pub mod page;

pub use client::CloudHttp;
pub use page::Page;
