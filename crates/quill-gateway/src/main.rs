//! Quill HTTP/JSON Gateway binary.

use std::sync::Arc;

use clap::Parser;
use quill_core::access::RequestAuthenticator;
use quill_gateway::store::MemoryStore;
use quill_gateway::{create_router, seed, AppState, Args, GatewayConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line args
    let args = Args::parse();
    let config = GatewayConfig::from(&args);

    info!(listen = %config.listen_addr, "Starting Quill Gateway");

    let authenticator = RequestAuthenticator::new(config.secret.as_deref());
    if authenticator.is_enabled() {
        info!("Admin authentication enabled");
    } else {
        warn!("No secret configured; serving anonymous read-only traffic");
    }

    let store = Arc::new(MemoryStore::new());
    if config.seed {
        seed::seed(store.as_ref())?;
        info!("Seeded sample documents");
    }

    // Create application state and router
    let state = AppState::new(store, authenticator, config.clone());
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Gateway listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
