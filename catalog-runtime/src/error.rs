use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Graph query failed: {}", messages.join("; "))]
    Query { messages: Vec<String> },

    #[error("Network {0} not found")]
    UnknownNetwork(String),

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CatalogError {
    /// Messages to report back to the caller, one per upstream error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CatalogError::Query { messages } => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::HttpError(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
