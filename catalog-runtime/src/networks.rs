//! Supported networks and their per-network constants.

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    pub name: &'static str,
    pub chain_id: u64,
    /// Canonical wrapped-native token (WETH), when one is deployed.
    pub wrapped_native: Option<&'static str>,
}

const NETWORKS: &[Network] = &[
    Network {
        name: "mainnet",
        chain_id: 1,
        wrapped_native: Some("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
    },
    Network {
        name: "rinkeby",
        chain_id: 4,
        wrapped_native: None,
    },
    Network {
        name: "goerli",
        chain_id: 5,
        wrapped_native: None,
    },
    Network {
        name: "kovan",
        chain_id: 42,
        wrapped_native: Some("0xd0A1E359811322d97991E03f863a0C30C2cF029C"),
    },
];

impl Network {
    /// Look up a network by its subgraph name.
    pub fn resolve(name: &str) -> Result<&'static Network, CatalogError> {
        NETWORKS
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| CatalogError::UnknownNetwork(name.to_string()))
    }
}

/// Chain ID for a network name.
pub fn chain_id(network: &str) -> Result<u64, CatalogError> {
    Network::resolve(network).map(|n| n.chain_id)
}
