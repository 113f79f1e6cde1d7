use serde::{Deserialize, Serialize};

/// Protocols the adapter subgraph knows about.
///
/// A `None` protocol on an adapter means a generic passthrough adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    Uniswap,
    Balancer,
    Curve,
    Compound,
    #[serde(rename = "yEarn")]
    YEarn,
    Aave,
}

impl Protocol {
    /// The tag used by the subgraph and echoed in `includeProtocol`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Uniswap => "Uniswap",
            Protocol::Balancer => "Balancer",
            Protocol::Curve => "Curve",
            Protocol::Compound => "Compound",
            Protocol::YEarn => "yEarn",
            Protocol::Aave => "Aave",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds a consumer can match against `includeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Erc777,
    Erc20,
    Eth,
}

/// A user-facing action and the adapters that perform it.
///
/// The `include*`/`excludeTag` fields are eligibility predicates evaluated by
/// the consumer; absent fields place no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_type: Option<Vec<TokenType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_protocol: Option<Vec<Option<Protocol>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_underlying: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory: Option<Factory>,
    pub adapters: Vec<ActionAdapter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionAdapter {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_wrapper: Option<String>,
    pub name: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_underlying: Option<Vec<String>>,
}

/// A DeFi777 wrapper token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperToken {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub underlying: String,
    pub protocol: Option<Protocol>,
    pub yield_wrappers: Vec<YieldWrapperEntry>,
    pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldWrapperEntry {
    pub address: String,
    pub underlying_address: String,
    pub underlying_name: String,
    pub underlying_symbol: String,
    pub yield_adapter: String,
}

/// The plain token a wrapper holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderlyingToken {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

/// Both halves of the token catalog, in the `tokens.json` response shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCatalog {
    #[serde(rename = "erc777s")]
    pub wrapper_tokens: Vec<WrapperToken>,
    #[serde(rename = "erc20s")]
    pub underlying_tokens: Vec<UnderlyingToken>,
}
