//! Token catalog builder.
//!
//! One wrapper token and one underlying token per wrapper record. Underlying
//! tokens are not de-duplicated here: two wrappers over the same asset yield
//! two identical underlying entries, mirroring the subgraph records.

use crate::address;
use crate::error::CatalogError;
use crate::networks::Network;
use crate::protocols;
use crate::records::{Wrapper, WrapperShape};
use crate::types::{TokenCatalog, UnderlyingToken, WrapperToken, YieldWrapperEntry};

/// Wrapper contracts always expose 18 decimals.
pub const WRAPPER_DECIMALS: u8 = 18;
/// Used when the subgraph does not report the underlying token's decimals.
pub const DEFAULT_UNDERLYING_DECIMALS: u8 = 18;

pub fn build_tokens(network: &Network, wrappers: &[Wrapper]) -> Result<TokenCatalog, CatalogError> {
    let mut catalog = TokenCatalog {
        wrapper_tokens: Vec::with_capacity(wrappers.len()),
        underlying_tokens: Vec::with_capacity(wrappers.len()),
    };

    for wrapper in wrappers {
        let underlying = wrapper.underlying_address.as_deref().ok_or_else(|| {
            CatalogError::MalformedRecord(format!("wrapper {} has no underlying address", wrapper.id))
        })?;
        let underlying = address::checksum(underlying)?;
        let (name, symbol) = wrapper_display(wrapper);

        catalog.wrapper_tokens.push(WrapperToken {
            chain_id: network.chain_id,
            address: address::checksum(&wrapper.id)?,
            symbol,
            name,
            underlying: underlying.clone(),
            protocol: wrapper.protocol,
            yield_wrappers: yield_entries(wrapper)?,
            decimals: WRAPPER_DECIMALS,
        });

        catalog.underlying_tokens.push(UnderlyingToken {
            chain_id: network.chain_id,
            address: underlying,
            symbol: wrapper.underlying_symbol.clone(),
            name: wrapper.underlying_name.clone(),
            decimals: wrapper
                .underlying_decimals
                .unwrap_or(DEFAULT_UNDERLYING_DECIMALS),
        });
    }

    tracing::debug!(
        network = network.name,
        wrappers = catalog.wrapper_tokens.len(),
        "built token catalog"
    );
    Ok(catalog)
}

/// Name and symbol for a wrapper token.
///
/// LP wrappers of protocols with an LP prefix read `"Uniswap DAI/WETH LP"` /
/// `"UNI-DAI-WETH777"`; everything else is `"<name>-777"` / `"<symbol>777"`.
pub fn wrapper_display(wrapper: &Wrapper) -> (String, String) {
    let lp_profile = wrapper
        .protocol
        .map(protocols::profile)
        .and_then(|p| p.lp_symbol_prefix.map(|prefix| (p, prefix)));
    match (lp_profile, &wrapper.shape) {
        (Some((profile, prefix)), WrapperShape::Pool(tokens)) => {
            let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
            let symbols: Vec<&str> = tokens.iter().map(|t| t.symbol.as_str()).collect();
            (
                format!("{} {} LP", profile.display_name, names.join("/")),
                format!("{prefix}-{}777", symbols.join("-")),
            )
        }
        _ => (
            format!("{}-777", wrapper.underlying_name),
            format!("{}777", wrapper.underlying_symbol),
        ),
    }
}

fn yield_entries(wrapper: &Wrapper) -> Result<Vec<YieldWrapperEntry>, CatalogError> {
    wrapper
        .yield_wrappers
        .iter()
        .map(|y| -> Result<YieldWrapperEntry, CatalogError> {
            Ok(YieldWrapperEntry {
                address: address::checksum(&y.id)?,
                underlying_address: address::checksum(&y.underlying_address)?,
                underlying_name: y.underlying_name.clone(),
                underlying_symbol: y.underlying_symbol.clone(),
                yield_adapter: address::checksum(&y.adapter)?,
            })
        })
        .collect()
}
