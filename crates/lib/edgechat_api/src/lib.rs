//! # edgechat_api
//!
//! HTTP API library for Edgechat.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::Router;
use edgechat_core::protocol::OperationRouter;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::graphql;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Operation dispatch for the configured variant.
    pub operations: Arc<OperationRouter>,
}

impl AppState {
    /// State with a fresh in-memory store and the built-in answer templates.
    pub fn new(config: ApiConfig) -> Self {
        let operations = Arc::new(OperationRouter::in_memory(config.variant));
        Self { config, operations }
    }

    /// State around a caller-built router (custom store or resolver).
    pub fn with_operations(config: ApiConfig, operations: OperationRouter) -> Self {
        Self {
            config,
            operations: Arc::new(operations),
        }
    }
}

/// Builds the Axum router.
///
/// The endpoint answers on every path, like an edge worker: the handler is
/// installed as the fallback rather than on a fixed route.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback(graphql::graphql_handler)
        .layer(cors)
        .with_state(state)
}
