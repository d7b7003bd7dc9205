//! Quill HTTP/JSON Gateway.
//!
//! This crate hosts the quill access-control core behind a REST surface:
//! per-collection CRUD endpoints backed by a document store, with every
//! request routed through authentication and the access decision table
//! before any store operation runs.

pub mod config;
pub mod error;
pub mod json;
pub mod routes;
pub mod seed;
pub mod store;

pub use config::{Args, GatewayConfig};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use quill_core::access::RequestAuthenticator;
use store::DocumentStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Document store backing all collections.
    pub store: Arc<dyn DocumentStore>,
    /// Shared-secret authenticator, built once at startup.
    pub authenticator: Arc<RequestAuthenticator>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        authenticator: RequestAuthenticator,
        config: GatewayConfig,
    ) -> Self {
        Self {
            store,
            authenticator: Arc::new(authenticator),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::documents::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
