pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use catalog_runtime::GraphClient;

pub use config::ServerConfig;
pub use error::ApiError;

pub struct CatalogApiState {
    pub graph: GraphClient,
    /// Network served by the network-less `/api/*.json` routes.
    pub default_network: String,
}

impl CatalogApiState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            graph: GraphClient::new(config.graph_base_url.clone()),
            default_network: config.default_network.clone(),
        }
    }
}

/// Every catalog is public data; any origin may read it.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(state: Arc<CatalogApiState>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::actions::router())
        .merge(routes::tokens::router())
        .merge(routes::tokenlist::router())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
