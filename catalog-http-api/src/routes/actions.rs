use axum::{Router, routing::get, extract::{Path, State}, Json};
use serde::Serialize;
use std::sync::Arc;

use catalog_runtime::{Action, Network, build_actions};

use crate::CatalogApiState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct ActionsResponse {
    pub actions: Vec<Action>,
}

pub fn router() -> Router<Arc<CatalogApiState>> {
    Router::new()
        .route("/api/{network}/actions.json", get(network_actions))
        .route("/api/actions.json", get(default_actions))
}

async fn network_actions(
    State(state): State<Arc<CatalogApiState>>,
    Path(network): Path<String>,
) -> Result<Json<ActionsResponse>, ApiError> {
    actions_for(&state, &network).await.map(Json)
}

async fn default_actions(
    State(state): State<Arc<CatalogApiState>>,
) -> Result<Json<ActionsResponse>, ApiError> {
    actions_for(&state, &state.default_network).await.map(Json)
}

async fn actions_for(state: &CatalogApiState, network: &str) -> Result<ActionsResponse, ApiError> {
    let network = Network::resolve(network)?;
    let adapters = state.graph.fetch_adapters(network).await?;
    let actions = build_actions(network, &adapters)?;
    Ok(ActionsResponse { actions })
}
