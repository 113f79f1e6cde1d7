use axum::{Router, routing::get, extract::{Path, State}, Json};
use std::sync::Arc;

use catalog_runtime::{Network, TokenCatalog, build_tokens};

use crate::CatalogApiState;
use crate::error::ApiError;

pub fn router() -> Router<Arc<CatalogApiState>> {
    Router::new()
        .route("/api/{network}/tokens.json", get(network_tokens))
        .route("/api/tokens.json", get(default_tokens))
}

async fn network_tokens(
    State(state): State<Arc<CatalogApiState>>,
    Path(network): Path<String>,
) -> Result<Json<TokenCatalog>, ApiError> {
    tokens_for(&state, &network).await.map(Json)
}

async fn default_tokens(
    State(state): State<Arc<CatalogApiState>>,
) -> Result<Json<TokenCatalog>, ApiError> {
    tokens_for(&state, &state.default_network).await.map(Json)
}

/// Shared with the token-list route, which reshapes the same catalog.
pub(crate) async fn tokens_for(
    state: &CatalogApiState,
    network: &str,
) -> Result<TokenCatalog, ApiError> {
    let network = Network::resolve(network)?;
    let wrappers = state.graph.fetch_wrappers(network).await?;
    Ok(build_tokens(network, &wrappers)?)
}
