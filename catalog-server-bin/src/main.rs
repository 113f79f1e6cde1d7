use std::sync::Arc;

use catalog_http_api::{CatalogApiState, ServerConfig, build_router};
use catalog_runtime::Network;

fn setup_log() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};
    if tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .is_err()
    {}
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Catalog server shutting down...");
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    setup_log();

    let config = ServerConfig::from_env();
    if let Err(e) = Network::resolve(&config.default_network) {
        tracing::warn!("DEFAULT_NETWORK is unsupported, legacy routes will return 404: {e}");
    }

    let state = Arc::new(CatalogApiState::from_config(&config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    tracing::info!(
        "Catalog server listening on port {} (subgraphs at {}, default network {})",
        config.http_port,
        config.graph_base_url,
        config.default_network,
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
