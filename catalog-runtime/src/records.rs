//! Adapter and wrapper records as the subgraph returns them, and the
//! validated forms the builders work on.
//!
//! The raw structs mirror the GraphQL response one-to-one. Conversion into
//! [`Adapter`] / [`Wrapper`] decides the wrapper shape once (pool vs single
//! asset), zips the index-aligned pool and yield sequences, and rejects
//! records whose parallel sequences disagree in length.

use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::Protocol;

/// Substituted for missing underlying names and symbols.
pub const UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, Deserialize)]
pub struct EntityRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWrapper {
    pub id: String,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    #[serde(default)]
    pub underlying_name: Option<String>,
    #[serde(default)]
    pub underlying_symbol: Option<String>,
    #[serde(default)]
    pub underlying_address: Option<String>,
    #[serde(default)]
    pub underlying_decimals: Option<u8>,
    #[serde(default)]
    pub pool_token_addresses: Option<Vec<String>>,
    #[serde(default)]
    pub pool_token_names: Option<Vec<String>>,
    #[serde(default)]
    pub pool_token_symbols: Option<Vec<String>>,
    #[serde(default)]
    pub yield_wrappers: Option<Vec<RawYieldWrapper>>,
    #[serde(default)]
    pub yield_adapters: Option<Vec<EntityRef>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawYieldWrapper {
    pub id: String,
    #[serde(default)]
    pub underlying_address: Option<String>,
    #[serde(default)]
    pub underlying_name: Option<String>,
    #[serde(default)]
    pub underlying_symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSupportedWrapper {
    pub underlying_address: String,
    #[serde(default)]
    pub protocol: Option<Protocol>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdapter {
    pub id: String,
    #[serde(default)]
    pub protocol: Option<Protocol>,
    #[serde(default)]
    pub output_wrapper: Option<RawWrapper>,
    #[serde(default)]
    pub supported_wrappers: Option<Vec<RawSupportedWrapper>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolToken {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperShape {
    SingleAsset,
    /// Liquidity-pool share; tokens are in subgraph order.
    Pool(Vec<PoolToken>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldWrapper {
    pub id: String,
    pub underlying_address: String,
    pub underlying_name: String,
    pub underlying_symbol: String,
    pub adapter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub id: String,
    pub protocol: Option<Protocol>,
    pub underlying_name: String,
    pub underlying_symbol: String,
    pub underlying_address: Option<String>,
    pub underlying_decimals: Option<u8>,
    pub shape: WrapperShape,
    pub yield_wrappers: Vec<YieldWrapper>,
}

impl Wrapper {
    pub fn pool_tokens(&self) -> Option<&[PoolToken]> {
        match &self.shape {
            WrapperShape::Pool(tokens) => Some(tokens),
            WrapperShape::SingleAsset => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedWrapper {
    pub underlying_address: String,
    pub protocol: Option<Protocol>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    pub id: String,
    pub protocol: Option<Protocol>,
    pub output_wrapper: Option<Wrapper>,
    pub supported_wrappers: Vec<SupportedWrapper>,
}

fn display_or_unknown(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => UNKNOWN.to_string(),
    }
}

fn parse_shape(raw: &mut RawWrapper) -> Result<WrapperShape, CatalogError> {
    let addresses = raw.pool_token_addresses.take();
    let names = raw.pool_token_names.take();
    let symbols = raw.pool_token_symbols.take();

    match (addresses, names, symbols) {
        (None, None, None) => Ok(WrapperShape::SingleAsset),
        (Some(addresses), Some(names), Some(symbols)) => {
            if addresses.len() != names.len() || addresses.len() != symbols.len() {
                return Err(CatalogError::MalformedRecord(format!(
                    "wrapper {}: pool token sequences differ in length ({} addresses, {} names, {} symbols)",
                    raw.id,
                    addresses.len(),
                    names.len(),
                    symbols.len()
                )));
            }
            let tokens = addresses
                .into_iter()
                .zip(names)
                .zip(symbols)
                .map(|((address, name), symbol)| PoolToken {
                    address,
                    name,
                    symbol,
                })
                .collect();
            Ok(WrapperShape::Pool(tokens))
        }
        _ => Err(CatalogError::MalformedRecord(format!(
            "wrapper {}: pool token fields must be all present or all absent",
            raw.id
        ))),
    }
}

fn parse_yield_wrappers(raw: &mut RawWrapper) -> Result<Vec<YieldWrapper>, CatalogError> {
    let wrappers = raw.yield_wrappers.take().unwrap_or_default();
    let adapters = raw.yield_adapters.take().unwrap_or_default();

    if wrappers.len() != adapters.len() {
        return Err(CatalogError::MalformedRecord(format!(
            "wrapper {}: {} yield wrappers but {} yield adapters",
            raw.id,
            wrappers.len(),
            adapters.len()
        )));
    }

    wrappers
        .into_iter()
        .zip(adapters)
        .map(|(wrapper, adapter)| -> Result<YieldWrapper, CatalogError> {
            let underlying_address = wrapper.underlying_address.ok_or_else(|| {
                CatalogError::MalformedRecord(format!(
                    "yield wrapper {} has no underlying address",
                    wrapper.id
                ))
            })?;
            Ok(YieldWrapper {
                id: wrapper.id,
                underlying_address,
                underlying_name: display_or_unknown(wrapper.underlying_name),
                underlying_symbol: display_or_unknown(wrapper.underlying_symbol),
                adapter: adapter.id,
            })
        })
        .collect()
}

impl TryFrom<RawWrapper> for Wrapper {
    type Error = CatalogError;

    fn try_from(mut raw: RawWrapper) -> Result<Self, Self::Error> {
        let shape = parse_shape(&mut raw)?;
        let yield_wrappers = parse_yield_wrappers(&mut raw)?;

        Ok(Wrapper {
            id: raw.id,
            protocol: raw.protocol,
            underlying_name: display_or_unknown(raw.underlying_name),
            underlying_symbol: display_or_unknown(raw.underlying_symbol),
            underlying_address: raw.underlying_address,
            underlying_decimals: raw.underlying_decimals,
            shape,
            yield_wrappers,
        })
    }
}

impl TryFrom<RawAdapter> for Adapter {
    type Error = CatalogError;

    fn try_from(raw: RawAdapter) -> Result<Self, Self::Error> {
        let output_wrapper = raw.output_wrapper.map(Wrapper::try_from).transpose()?;
        let supported_wrappers = raw
            .supported_wrappers
            .unwrap_or_default()
            .into_iter()
            .map(|w| SupportedWrapper {
                underlying_address: w.underlying_address,
                protocol: w.protocol,
            })
            .collect();

        Ok(Adapter {
            id: raw.id,
            protocol: raw.protocol,
            output_wrapper,
            supported_wrappers,
        })
    }
}

/// Validate a whole adapter response; the first malformed record fails it.
pub fn parse_adapters(raw: Vec<RawAdapter>) -> Result<Vec<Adapter>, CatalogError> {
    raw.into_iter().map(Adapter::try_from).collect()
}

/// Validate a whole wrapper response; the first malformed record fails it.
pub fn parse_wrappers(raw: Vec<RawWrapper>) -> Result<Vec<Wrapper>, CatalogError> {
    raw.into_iter().map(Wrapper::try_from).collect()
}
