//! party-gateway server entry point.
//!
//! Starts the Axum HTTP server in front of the record store.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use party_gateway::api;
use party_gateway::app_state::AppState;
use party_gateway::config::{GatewayConfig, LogFormat};
use party_gateway::store::{HttpRecordStore, InMemoryRecordStore, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting party-gateway");

    // Build record store
    let store: Arc<dyn RecordStore> = if config.demo_mode {
        tracing::warn!("DEMO_MODE is on: serving built-in demo documents, writes stay in memory");
        Arc::new(InMemoryRecordStore::with_fixtures())
    } else {
        tracing::info!(
            url = %config.record_store_url,
            timeout_secs = config.record_store_timeout.as_secs(),
            "using remote record store"
        );
        Arc::new(
            HttpRecordStore::new(config.record_store_url.clone(), config.record_store_timeout)
                .context("failed to build record store client")?,
        )
    };

    // Build application state
    let app_state = AppState::new(store);

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
