use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::CatalogError;
use crate::networks::Network;
use crate::queries::{ADAPTERS_QUERY, AdaptersData, WRAPPERS_QUERY, WrappersData};
use crate::records::{self, Adapter, Wrapper};

/// Client for the per-network adapter subgraphs.
///
/// Each network has its own subgraph at `{base_url}/{network}`.
#[derive(Debug, Clone)]
pub struct GraphClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GraphResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphErrorMessage {
    message: String,
}

impl GraphClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Run a GraphQL document and return its `data` object.
    ///
    /// A non-empty `errors` list fails with [`CatalogError::Query`] carrying
    /// every upstream message, even when partial `data` came back.
    pub async fn query<T: DeserializeOwned>(
        &self,
        network: &Network,
        document: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.base_url, network.name);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "query": document, "variables": null }))
            .send()
            .await?;

        let status = resp.status();
        let body: GraphResponse<T> = resp.json().await.map_err(|e| {
            if status.is_success() {
                CatalogError::SerializationError(e.to_string())
            } else {
                CatalogError::HttpError(format!("subgraph returned {status}"))
            }
        })?;

        if let Some(errors) = body.errors.filter(|errors| !errors.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            tracing::error!(network = network.name, ?messages, "subgraph query failed");
            return Err(CatalogError::Query { messages });
        }

        body.data.ok_or_else(|| CatalogError::Query {
            messages: vec![format!("subgraph for {} returned no data", network.name)],
        })
    }

    /// Fetch and validate every adapter on the network.
    pub async fn fetch_adapters(&self, network: &Network) -> Result<Vec<Adapter>, CatalogError> {
        let data: AdaptersData = self.query(network, ADAPTERS_QUERY).await?;
        records::parse_adapters(data.adapters)
    }

    /// Fetch and validate every wrapper on the network.
    pub async fn fetch_wrappers(&self, network: &Network) -> Result<Vec<Wrapper>, CatalogError> {
        let data: WrappersData = self.query(network, WRAPPERS_QUERY).await?;
        records::parse_wrappers(data.wrappers)
    }
}
