//! # edgechat_core
//!
//! Core domain logic for Edgechat: the message store, the answer resolver
//! and the pseudo-GraphQL request pipeline.

pub mod answers;
pub mod models;
pub mod protocol;
pub mod store;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
