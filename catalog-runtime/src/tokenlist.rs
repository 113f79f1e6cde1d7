//! Shapes a [`TokenCatalog`] into the flat token-list document consumed by
//! wallets and DEX frontends.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{Protocol, TokenCatalog};

pub const LIST_NAME: &str = "DeFi777";
pub const LOGO_URI: &str =
    "https://raw.githubusercontent.com/Synthetixio/synthetix-assets/v2.0.3/snx/SNX.svg";
pub const KEYWORDS: &[&str] = &["defi", "defi777", "wrapper"];

const TAG_ERC777: &str = "erc777";
const TAG_ERC20: &str = "erc20";
const TAG_UNI: &str = "uni";
const TAG_UNI777: &str = "uni777";
const TAG_FARMER: &str = "farmer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenList {
    pub name: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    pub keywords: Vec<String>,
    pub timestamp: String,
    pub tags: BTreeMap<String, TagDefinition>,
    pub version: Version,
    pub tokens: Vec<ListedToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDefinition {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedToken {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    pub tags: Vec<String>,
}

fn tag_definitions() -> BTreeMap<String, TagDefinition> {
    [
        (TAG_ERC777, "ERC777", "Token that implements the ERC777 standard."),
        (
            TAG_ERC20,
            "ERC20",
            "Token that implements the ERC20 standard and does not implement the ERC777 standard.",
        ),
        (TAG_UNI, "Uniswap LP Token", "Liquidity Provider token for Uniswap V2."),
        (TAG_UNI777, "Uniswap LP Wrapper", "DeFi777 wrapper on a Uniswap LP token."),
        (TAG_FARMER, "Farmer token", "A wrapper token that farms other tokens."),
    ]
    .into_iter()
    .map(|(key, name, description)| {
        (
            key.to_string(),
            TagDefinition {
                name: name.to_string(),
                description: description.to_string(),
            },
        )
    })
    .collect()
}

/// Build the token-list document. `timestamp` is stamped verbatim.
///
/// Wrapper tokens come first, then underlying tokens. The format requires
/// unique `(chainId, address)` pairs, so repeated underlyings keep only
/// their first entry.
pub fn build_token_list(catalog: &TokenCatalog, timestamp: &str) -> TokenList {
    let mut seen = HashSet::new();
    let mut tokens = Vec::with_capacity(catalog.wrapper_tokens.len() * 2);

    for wrapper in &catalog.wrapper_tokens {
        let mut tags = vec![TAG_ERC777.to_string()];
        if wrapper.protocol == Some(Protocol::Uniswap) {
            tags.push(TAG_UNI777.to_string());
        }
        if !wrapper.yield_wrappers.is_empty() {
            tags.push(TAG_FARMER.to_string());
        }
        if seen.insert((wrapper.chain_id, wrapper.address.clone())) {
            tokens.push(ListedToken {
                chain_id: wrapper.chain_id,
                address: wrapper.address.clone(),
                symbol: wrapper.symbol.clone(),
                name: wrapper.name.clone(),
                decimals: wrapper.decimals,
                logo_uri: LOGO_URI.to_string(),
                tags,
            });
        }
    }

    // underlying_tokens[i] is the asset held by wrapper_tokens[i]
    for (wrapper, underlying) in catalog
        .wrapper_tokens
        .iter()
        .zip(&catalog.underlying_tokens)
    {
        if !seen.insert((underlying.chain_id, underlying.address.clone())) {
            continue;
        }
        let mut tags = vec![TAG_ERC20.to_string()];
        if wrapper.protocol == Some(Protocol::Uniswap) {
            tags.push(TAG_UNI.to_string());
        }
        tokens.push(ListedToken {
            chain_id: underlying.chain_id,
            address: underlying.address.clone(),
            symbol: underlying.symbol.clone(),
            name: underlying.name.clone(),
            decimals: underlying.decimals,
            logo_uri: LOGO_URI.to_string(),
            tags,
        });
    }

    TokenList {
        name: LIST_NAME.to_string(),
        logo_uri: LOGO_URI.to_string(),
        keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
        timestamp: timestamp.to_string(),
        tags: tag_definitions(),
        version: Version {
            major: 0,
            minor: 0,
            patch: 0,
        },
        tokens,
    }
}
