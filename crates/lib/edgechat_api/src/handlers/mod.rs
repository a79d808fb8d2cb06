//! Request handlers.

pub mod graphql;
