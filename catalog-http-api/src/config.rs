//! Server settings read from the environment.

pub const DEFAULT_HTTP_PORT: u16 = 3000;
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://api.thegraph.com/subgraphs/name/defi-777";
pub const DEFAULT_NETWORK: &str = "kovan";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub http_port: u16,
    /// Subgraphs live at `{graph_base_url}/{network}`.
    pub graph_base_url: String,
    pub default_network: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            default_network: DEFAULT_NETWORK.to_string(),
        }
    }
}

impl ServerConfig {
    /// `CATALOG_HTTP_PORT`, `GRAPH_BASE_URL` and `DEFAULT_NETWORK`, each
    /// falling back to its default when unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let http_port = match lookup("CATALOG_HTTP_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid CATALOG_HTTP_PORT, using {DEFAULT_HTTP_PORT}");
                DEFAULT_HTTP_PORT
            }),
            None => defaults.http_port,
        };

        Self {
            http_port,
            graph_base_url: lookup("GRAPH_BASE_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.graph_base_url),
            default_network: lookup("DEFAULT_NETWORK")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.default_network),
        }
    }
}
