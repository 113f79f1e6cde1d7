use axum::{Router, routing::get, extract::{Path, State}, Json};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use catalog_runtime::{TokenList, build_token_list};

use crate::CatalogApiState;
use crate::error::ApiError;
use crate::routes::tokens::tokens_for;

pub fn router() -> Router<Arc<CatalogApiState>> {
    Router::new()
        .route("/api/{network}/tokenlist.json", get(network_token_list))
        .route("/api/tokenlist.json", get(default_token_list))
}

async fn network_token_list(
    State(state): State<Arc<CatalogApiState>>,
    Path(network): Path<String>,
) -> Result<Json<TokenList>, ApiError> {
    token_list_for(&state, &network).await.map(Json)
}

async fn default_token_list(
    State(state): State<Arc<CatalogApiState>>,
) -> Result<Json<TokenList>, ApiError> {
    token_list_for(&state, &state.default_network).await.map(Json)
}

async fn token_list_for(state: &CatalogApiState, network: &str) -> Result<TokenList, ApiError> {
    let catalog = tokens_for(state, network).await?;
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Ok(build_token_list(&catalog, &timestamp))
}
