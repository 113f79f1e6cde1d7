//! Protocol table and the classification helpers shared by the action and
//! token builders.
//!
//! Each protocol is described once by a [`ProtocolProfile`]; the builders
//! never branch on a protocol directly.

use std::collections::HashSet;

use crate::address::{self, ZERO_ADDRESS};
use crate::error::CatalogError;
use crate::records::{Adapter, PoolToken, Wrapper, WrapperShape};
use crate::types::Protocol;

/// Direction of an adapter relative to the position it manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Produces a position from an underlying asset.
    Entry,
    /// Redeems a position back to its underlying asset.
    Exit,
}

/// How a protocol's adapters reveal their [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSignal {
    /// Every adapter is an entry adapter.
    AlwaysEntry,
    /// Entry adapters output a wrapper tagged with a protocol (a re-wrap of
    /// the pool position); exit adapters output an untagged wrapper.
    OutputWrapperProtocol,
    /// One contract serves every underlying in both directions, listing
    /// them in `supportedWrappers`.
    Aggregator,
}

#[derive(Debug)]
pub struct ProtocolProfile {
    pub protocol: Protocol,
    pub display_name: &'static str,
    pub role_signal: RoleSignal,
    /// Symbol prefix for LP wrapper tokens, for protocols whose pool
    /// wrappers get LP-style names.
    pub lp_symbol_prefix: Option<&'static str>,
}

impl ProtocolProfile {
    /// Aggregators are addressed through `supportedWrappers`; everyone else
    /// must expose an output wrapper.
    pub fn requires_output_wrapper(&self) -> bool {
        self.role_signal != RoleSignal::Aggregator
    }
}

static UNISWAP: ProtocolProfile = ProtocolProfile {
    protocol: Protocol::Uniswap,
    display_name: "Uniswap",
    role_signal: RoleSignal::AlwaysEntry,
    lp_symbol_prefix: Some("UNI"),
};

static BALANCER: ProtocolProfile = ProtocolProfile {
    protocol: Protocol::Balancer,
    display_name: "Balancer",
    role_signal: RoleSignal::OutputWrapperProtocol,
    lp_symbol_prefix: Some("BPT"),
};

static CURVE: ProtocolProfile = ProtocolProfile {
    protocol: Protocol::Curve,
    display_name: "Curve",
    role_signal: RoleSignal::OutputWrapperProtocol,
    lp_symbol_prefix: None,
};

static COMPOUND: ProtocolProfile = ProtocolProfile {
    protocol: Protocol::Compound,
    display_name: "Compound",
    role_signal: RoleSignal::Aggregator,
    lp_symbol_prefix: None,
};

static YEARN: ProtocolProfile = ProtocolProfile {
    protocol: Protocol::YEarn,
    display_name: "yEarn",
    role_signal: RoleSignal::Aggregator,
    lp_symbol_prefix: None,
};

static AAVE: ProtocolProfile = ProtocolProfile {
    protocol: Protocol::Aave,
    display_name: "Aave",
    role_signal: RoleSignal::Aggregator,
    lp_symbol_prefix: None,
};

pub fn profile(protocol: Protocol) -> &'static ProtocolProfile {
    match protocol {
        Protocol::Uniswap => &UNISWAP,
        Protocol::Balancer => &BALANCER,
        Protocol::Curve => &CURVE,
        Protocol::Compound => &COMPOUND,
        Protocol::YEarn => &YEARN,
        Protocol::Aave => &AAVE,
    }
}

/// Adapters hidden from the catalog because the deployed contract is broken
/// or unsupported. Matched on the output wrapper's underlying symbol.
#[derive(Debug, Clone, Copy)]
pub struct DenyRule {
    pub protocol: Protocol,
    pub role: Role,
    pub underlying_symbol: &'static str,
}

pub const HIDDEN_ADAPTERS: &[DenyRule] = &[
    // 3pool adapter reverts on deposit
    DenyRule {
        protocol: Protocol::Curve,
        role: Role::Entry,
        underlying_symbol: "3Crv",
    },
];

pub fn is_hidden(adapter: &Adapter, role: Role) -> bool {
    let Some(wrapper) = &adapter.output_wrapper else {
        return false;
    };
    HIDDEN_ADAPTERS.iter().any(|rule| {
        Some(rule.protocol) == adapter.protocol
            && rule.role == role
            && rule.underlying_symbol == wrapper.underlying_symbol
    })
}

pub fn is_pool_wrapper(wrapper: &Wrapper) -> bool {
    matches!(wrapper.shape, WrapperShape::Pool(_))
}

fn role_of(adapter: &Adapter) -> Option<Role> {
    let protocol = adapter.protocol?;
    match profile(protocol).role_signal {
        RoleSignal::AlwaysEntry | RoleSignal::Aggregator => Some(Role::Entry),
        RoleSignal::OutputWrapperProtocol => {
            let wrapper = adapter.output_wrapper.as_ref()?;
            Some(if wrapper.protocol.is_some() {
                Role::Entry
            } else {
                Role::Exit
            })
        }
    }
}

pub fn is_entry_adapter(adapter: &Adapter) -> bool {
    role_of(adapter) == Some(Role::Entry)
}

/// Aggregator contracts redeem through the same address they deposit
/// through, so they count as both entry and exit adapters.
pub fn is_exit_adapter(adapter: &Adapter) -> bool {
    match adapter.protocol.map(|p| profile(p).role_signal) {
        Some(RoleSignal::Aggregator) => true,
        _ => role_of(adapter) == Some(Role::Exit),
    }
}

/// Swap a wrapped-native address for the zero address so consumers treat
/// WETH and ETH alike. `address` must already be checksummed.
pub fn native_or_self(address: String, wrapped_native: Option<&str>) -> Result<String, CatalogError> {
    if let Some(weth) = wrapped_native {
        if address::checksum(weth)? == address {
            return Ok(ZERO_ADDRESS.to_string());
        }
    }
    Ok(address)
}

/// Checksummed union of every pool token across `adapters`, first
/// occurrence wins the position.
pub fn collect_pool_underlyings<'a, I>(adapters: I) -> Result<Vec<String>, CatalogError>
where
    I: IntoIterator<Item = &'a Adapter>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for adapter in adapters {
        let Some(tokens) = adapter.output_wrapper.as_ref().and_then(|w| w.pool_tokens()) else {
            continue;
        };
        for token in tokens {
            let address = address::checksum(&token.address)?;
            if seen.insert(address.clone()) {
                out.push(address);
            }
        }
    }
    Ok(out)
}

/// Checksummed union of `supportedWrappers` underlyings across `adapters`.
/// With `skip_rewrapped`, entries that are themselves another protocol's
/// position are left out.
pub fn collect_supported_underlyings<'a, I>(
    adapters: I,
    skip_rewrapped: bool,
) -> Result<Vec<String>, CatalogError>
where
    I: IntoIterator<Item = &'a Adapter>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for adapter in adapters {
        for supported in &adapter.supported_wrappers {
            if skip_rewrapped && supported.protocol.is_some() {
                continue;
            }
            let address = address::checksum(&supported.underlying_address)?;
            if seen.insert(address.clone()) {
                out.push(address);
            }
        }
    }
    Ok(out)
}

pub fn display_name(name: &str) -> String {
    name.replacen("Wrapped Ether", "Ether", 1)
}

pub fn display_symbol(symbol: &str) -> String {
    symbol.replacen("WETH", "ETH", 1)
}

/// `"<Protocol> <names joined by '-'> Pool"` with display substitution.
pub fn pool_adapter_name(profile: &ProtocolProfile, tokens: &[PoolToken]) -> String {
    let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
    display_name(&format!("{} {} Pool", profile.display_name, names.join("-")))
}

/// Pool symbols joined by `-` with display substitution.
pub fn pool_adapter_symbol(tokens: &[PoolToken]) -> String {
    let symbols: Vec<&str> = tokens.iter().map(|t| t.symbol.as_str()).collect();
    display_symbol(&symbols.join("-"))
}
