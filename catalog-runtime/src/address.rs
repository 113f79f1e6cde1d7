//! Address normalization.
//!
//! Every address leaving the catalog goes through [`checksum`] exactly once,
//! so raw subgraph hex (always lowercase) never reaches a response.

use alloy_primitives::Address;

use crate::error::CatalogError;

/// Reserved for the network's native asset.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Canonicalize a hex address into its EIP-55 mixed-case form.
pub fn checksum(address: &str) -> Result<String, CatalogError> {
    let parsed: Address = address
        .parse()
        .map_err(|e| CatalogError::InvalidAddress {
            address: address.to_string(),
            reason: format!("{e}"),
        })?;
    Ok(parsed.to_checksum(None))
}

/// Checksum every address in `addresses`, preserving order.
pub fn checksum_all<'a, I>(addresses: I) -> Result<Vec<String>, CatalogError>
where
    I: IntoIterator<Item = &'a String>,
{
    addresses.into_iter().map(|a| checksum(a)).collect()
}
