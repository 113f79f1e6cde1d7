//! Action catalog builder.
//!
//! Every action except Unwrap comes from a row of [`ACTION_TEMPLATES`]. A row
//! says which adapters of one protocol it draws on, how to name them, and
//! which eligibility filters to publish. Rows run in canonical order. A row
//! whose adapter selection is empty is skipped, so the catalog only lists
//! protocols the subgraph has adapters for.

use crate::address::{self, ZERO_ADDRESS};
use crate::error::CatalogError;
use crate::networks::Network;
use crate::protocols::{self, ProtocolProfile, Role};
use crate::records::{Adapter, WrapperShape};
use crate::types::{Action, ActionAdapter, Factory, Protocol, TokenType};

pub const UNISWAP_FACTORY: &str = "0x8CD1a9Be80cB1827458AF6bB9ca5B0dAAAE36C1f";
/// Swaps ETH in and out of Uniswap wrappers.
pub const UNISWAP_NATIVE_ADAPTER: &str = "0x2677a1c1e6BFaE4822AF9aA877E9549B664484fa";
/// Exits a Balancer pool straight to ETH.
pub const BALANCER_NATIVE_EXIT_ADAPTER: &str = "0xC2576315CAd071Ed6A50e5e191f10D26f27B0AbE";
pub const UNWRAP_ADAPTER: &str = "0x6199F21467853Bea01187C5f093e37B0A578157f";

const ERC777_OR_ETH: &[TokenType] = &[TokenType::Erc777, TokenType::Eth];
const ERC777_ONLY: &[TokenType] = &[TokenType::Erc777];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeFilter {
    Any,
    SingleAsset,
    Pool,
}

#[derive(Debug, Clone, Copy)]
enum Selection {
    Entries(ShapeFilter),
    Exits,
    /// The protocol's aggregator contract; only the first one is listed.
    Aggregator,
}

#[derive(Debug, Clone, Copy)]
enum Naming {
    /// Pool wrappers get a synthesized pool name, single-asset wrappers keep
    /// their underlying name.
    PoolOrUnderlying,
    Underlying,
    /// Named after the protocol itself.
    Protocol,
}

#[derive(Debug, Clone, Copy)]
enum UnderlyingFilter {
    None,
    PoolTokens { native_first: bool },
    Supported { native_first: bool, skip_rewrapped: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdapterUnderlyings {
    None,
    PoolTokens,
    /// Pool tokens with the wrapped-native token reported as the zero address.
    PoolTokensNativeAsZero,
}

struct ActionTemplate {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    protocol: Protocol,
    selection: Selection,
    naming: Naming,
    include_type: Option<&'static [TokenType]>,
    include_protocol: Option<&'static [Option<Protocol>]>,
    include_underlying: UnderlyingFilter,
    adapter_underlyings: AdapterUnderlyings,
    /// Fixed adapter for the native asset, listed before graph adapters.
    native_adapter: Option<&'static str>,
    factory: Option<&'static str>,
}

const ACTION_TEMPLATES: &[ActionTemplate] = &[
    ActionTemplate {
        id: "uniswap",
        name: "Uniswap",
        description: "Swap for other tokens",
        protocol: Protocol::Uniswap,
        selection: Selection::Entries(ShapeFilter::SingleAsset),
        naming: Naming::Underlying,
        include_type: Some(ERC777_OR_ETH),
        include_protocol: Some(&[None, Some(Protocol::Uniswap)]),
        include_underlying: UnderlyingFilter::None,
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: Some(UNISWAP_NATIVE_ADAPTER),
        factory: Some(UNISWAP_FACTORY),
    },
    ActionTemplate {
        id: "uniswap-pool",
        name: "Uniswap Pools",
        description: "Provide liquidity & earn trading fees",
        protocol: Protocol::Uniswap,
        selection: Selection::Entries(ShapeFilter::Pool),
        naming: Naming::PoolOrUnderlying,
        include_type: Some(ERC777_OR_ETH),
        include_protocol: Some(&[None]),
        include_underlying: UnderlyingFilter::None,
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "balancer",
        name: "Balancer Pools",
        description: "Provide liquidity & earn trading fees",
        protocol: Protocol::Balancer,
        selection: Selection::Entries(ShapeFilter::Any),
        naming: Naming::PoolOrUnderlying,
        include_type: Some(ERC777_OR_ETH),
        include_protocol: None,
        include_underlying: UnderlyingFilter::PoolTokens { native_first: true },
        adapter_underlyings: AdapterUnderlyings::PoolTokensNativeAsZero,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "balancer-exit",
        name: "Balancer Exit",
        description: "Remove liquidity from Balancer pools",
        protocol: Protocol::Balancer,
        selection: Selection::Exits,
        naming: Naming::Underlying,
        include_type: None,
        include_protocol: Some(&[Some(Protocol::Balancer)]),
        include_underlying: UnderlyingFilter::None,
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: Some(BALANCER_NATIVE_EXIT_ADAPTER),
        factory: None,
    },
    ActionTemplate {
        id: "curve",
        name: "Curve",
        description: "Earn trading fees for stable-pair assets",
        protocol: Protocol::Curve,
        selection: Selection::Entries(ShapeFilter::Any),
        naming: Naming::Underlying,
        include_type: Some(ERC777_ONLY),
        include_protocol: None,
        include_underlying: UnderlyingFilter::PoolTokens { native_first: false },
        adapter_underlyings: AdapterUnderlyings::PoolTokens,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "curve-exit",
        name: "Curve Withdrawal",
        description: "Remove your tokens from Curve pools",
        protocol: Protocol::Curve,
        selection: Selection::Exits,
        naming: Naming::Underlying,
        include_type: None,
        include_protocol: Some(&[Some(Protocol::Curve)]),
        include_underlying: UnderlyingFilter::None,
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "compound",
        name: "Compound",
        description: "Lend your tokens and earn interest",
        protocol: Protocol::Compound,
        selection: Selection::Aggregator,
        naming: Naming::Protocol,
        include_type: Some(ERC777_OR_ETH),
        include_protocol: None,
        include_underlying: UnderlyingFilter::Supported {
            native_first: true,
            skip_rewrapped: false,
        },
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "yearn",
        name: "yEarn Vaults",
        description: "Deposit tokens in yield-optimizing vaults",
        protocol: Protocol::YEarn,
        selection: Selection::Aggregator,
        naming: Naming::Protocol,
        include_type: None,
        include_protocol: None,
        include_underlying: UnderlyingFilter::Supported {
            native_first: false,
            skip_rewrapped: true,
        },
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "yearn-exit",
        name: "yEarn Withdrawal",
        description: "Withdraw tokens from yEarn vaults",
        protocol: Protocol::YEarn,
        selection: Selection::Aggregator,
        naming: Naming::Protocol,
        include_type: None,
        include_protocol: Some(&[Some(Protocol::YEarn)]),
        include_underlying: UnderlyingFilter::None,
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: None,
        factory: None,
    },
    ActionTemplate {
        id: "aave",
        name: "Aave Lending",
        description: "Lend your tokens and earn interest",
        protocol: Protocol::Aave,
        selection: Selection::Aggregator,
        naming: Naming::Protocol,
        include_type: Some(ERC777_OR_ETH),
        include_protocol: None,
        include_underlying: UnderlyingFilter::Supported {
            native_first: true,
            skip_rewrapped: false,
        },
        adapter_underlyings: AdapterUnderlyings::None,
        native_adapter: None,
        factory: None,
    },
];

/// Build the action catalog for `network` from the subgraph's adapters.
///
/// Fails only on malformed records or unparseable addresses; a partial
/// catalog is never returned.
pub fn build_actions(network: &Network, adapters: &[Adapter]) -> Result<Vec<Action>, CatalogError> {
    check_output_wrappers(adapters)?;

    let mut actions = Vec::with_capacity(ACTION_TEMPLATES.len() + 1);
    for template in ACTION_TEMPLATES {
        let selected = select(template, adapters);
        if selected.is_empty() {
            tracing::debug!(action = template.id, "no adapters, skipping action");
            continue;
        }
        actions.push(synthesize(template, network, &selected)?);
    }
    actions.push(unwrap_action()?);

    tracing::debug!(
        network = network.name,
        adapters = adapters.len(),
        actions = actions.len(),
        "built action catalog"
    );
    Ok(actions)
}

fn check_output_wrappers(adapters: &[Adapter]) -> Result<(), CatalogError> {
    for adapter in adapters {
        let Some(protocol) = adapter.protocol else {
            continue;
        };
        if protocols::profile(protocol).requires_output_wrapper() && adapter.output_wrapper.is_none() {
            return Err(CatalogError::MalformedRecord(format!(
                "{protocol} adapter {} has no output wrapper",
                adapter.id
            )));
        }
    }
    Ok(())
}

fn matches_shape(adapter: &Adapter, filter: ShapeFilter) -> bool {
    let is_pool = adapter
        .output_wrapper
        .as_ref()
        .is_some_and(protocols::is_pool_wrapper);
    match filter {
        ShapeFilter::Any => true,
        ShapeFilter::SingleAsset => !is_pool,
        ShapeFilter::Pool => is_pool,
    }
}

fn select<'a>(template: &ActionTemplate, adapters: &'a [Adapter]) -> Vec<&'a Adapter> {
    let bucket = adapters
        .iter()
        .filter(|a| a.protocol == Some(template.protocol));

    let (role, selected): (Role, Vec<&Adapter>) = match template.selection {
        Selection::Entries(shape) => (
            Role::Entry,
            bucket
                .filter(|a| protocols::is_entry_adapter(a) && matches_shape(a, shape))
                .collect(),
        ),
        Selection::Exits => (
            Role::Exit,
            bucket.filter(|a| protocols::is_exit_adapter(a)).collect(),
        ),
        Selection::Aggregator => (Role::Entry, bucket.collect()),
    };

    selected
        .into_iter()
        .filter(|a| {
            let hidden = protocols::is_hidden(a, role);
            if hidden {
                tracing::warn!(action = template.id, adapter = %a.id, "hiding deny-listed adapter");
            }
            !hidden
        })
        .collect()
}

fn synthesize(
    template: &ActionTemplate,
    network: &Network,
    selected: &[&Adapter],
) -> Result<Action, CatalogError> {
    let profile = protocols::profile(template.protocol);

    let listed: &[&Adapter] = match template.selection {
        Selection::Aggregator => &selected[..1],
        _ => selected,
    };

    let mut entries = Vec::with_capacity(listed.len() + 1);
    if let Some(native) = template.native_adapter {
        entries.push(native_entry(native)?);
    }
    for adapter in listed {
        entries.push(adapter_entry(template, profile, network, adapter)?);
    }

    let include_underlying = match template.include_underlying {
        UnderlyingFilter::None => None,
        UnderlyingFilter::PoolTokens { native_first } => Some(with_native(
            native_first,
            protocols::collect_pool_underlyings(selected.iter().copied())?,
        )),
        UnderlyingFilter::Supported {
            native_first,
            skip_rewrapped,
        } => Some(with_native(
            native_first,
            protocols::collect_supported_underlyings(selected.iter().copied(), skip_rewrapped)?,
        )),
    };

    let factory = template
        .factory
        .map(|f| address::checksum(f).map(|address| Factory { address }))
        .transpose()?;

    Ok(Action {
        id: template.id.to_string(),
        name: template.name.to_string(),
        description: template.description.to_string(),
        include_type: template.include_type.map(<[TokenType]>::to_vec),
        include_protocol: template.include_protocol.map(<[Option<Protocol>]>::to_vec),
        include_underlying,
        include_tag: None,
        exclude_tag: None,
        factory,
        adapters: entries,
    })
}

/// Prefix the zero address unless the union already carries it.
fn with_native(native_first: bool, underlyings: Vec<String>) -> Vec<String> {
    if !native_first {
        return underlyings;
    }
    let mut out = Vec::with_capacity(underlyings.len() + 1);
    out.push(ZERO_ADDRESS.to_string());
    out.extend(underlyings.into_iter().filter(|a| a != ZERO_ADDRESS));
    out
}

fn native_entry(adapter: &str) -> Result<ActionAdapter, CatalogError> {
    Ok(ActionAdapter {
        address: address::checksum(adapter)?,
        output_wrapper: Some(ZERO_ADDRESS.to_string()),
        name: "Ether".into(),
        symbol: "ETH".into(),
        include_underlying: None,
    })
}

fn adapter_entry(
    template: &ActionTemplate,
    profile: &ProtocolProfile,
    network: &Network,
    adapter: &Adapter,
) -> Result<ActionAdapter, CatalogError> {
    let wrapper = adapter.output_wrapper.as_ref();

    let (name, symbol) = match (template.naming, wrapper) {
        (Naming::Protocol, _) | (_, None) => (
            profile.display_name.to_string(),
            profile.display_name.to_string(),
        ),
        (Naming::PoolOrUnderlying, Some(w)) => match &w.shape {
            WrapperShape::Pool(tokens) => (
                protocols::pool_adapter_name(profile, tokens),
                protocols::pool_adapter_symbol(tokens),
            ),
            WrapperShape::SingleAsset => (w.underlying_name.clone(), w.underlying_symbol.clone()),
        },
        (Naming::Underlying, Some(w)) => (w.underlying_name.clone(), w.underlying_symbol.clone()),
    };

    let output_wrapper = match (template.selection, wrapper) {
        (Selection::Aggregator, _) | (_, None) => None,
        (_, Some(w)) => Some(address::checksum(&w.id)?),
    };

    let pool_tokens = wrapper.and_then(|w| w.pool_tokens());
    let include_underlying = match (template.adapter_underlyings, pool_tokens) {
        (AdapterUnderlyings::None, _) | (_, None) => None,
        (rule, Some(tokens)) => {
            let wrapped_native = match rule {
                AdapterUnderlyings::PoolTokensNativeAsZero => network.wrapped_native,
                _ => None,
            };
            let addresses = address::checksum_all(tokens.iter().map(|t| &t.address))?
                .into_iter()
                .map(|a| protocols::native_or_self(a, wrapped_native))
                .collect::<Result<Vec<_>, _>>()?;
            Some(addresses)
        }
    };

    Ok(ActionAdapter {
        address: address::checksum(&adapter.id)?,
        output_wrapper,
        name,
        symbol,
        include_underlying,
    })
}

fn unwrap_action() -> Result<Action, CatalogError> {
    Ok(Action {
        id: "unwrap".into(),
        name: "Unwrap".into(),
        description: "Convert DeFi777 tokens back to ERC20 tokens".into(),
        include_type: Some(ERC777_ONLY.to_vec()),
        include_protocol: None,
        include_underlying: None,
        include_tag: None,
        exclude_tag: None,
        factory: None,
        adapters: vec![ActionAdapter {
            address: address::checksum(UNWRAP_ADAPTER)?,
            output_wrapper: None,
            name: "Unwrap".into(),
            symbol: "Unwrap".into(),
            include_underlying: None,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{PoolToken, SupportedWrapper, Wrapper};

    const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";
    const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
    const WETH: &str = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2";

    fn mainnet() -> &'static Network {
        Network::resolve("mainnet").unwrap()
    }

    fn addr(n: u8) -> String {
        format!("0x{:040x}", n)
    }

    fn single(id: &str, name: &str, symbol: &str, protocol: Option<Protocol>) -> Wrapper {
        Wrapper {
            id: id.into(),
            protocol,
            underlying_name: name.into(),
            underlying_symbol: symbol.into(),
            underlying_address: None,
            underlying_decimals: None,
            shape: WrapperShape::SingleAsset,
            yield_wrappers: vec![],
        }
    }

    fn pool(id: &str, symbol: &str, protocol: Option<Protocol>, tokens: &[(&str, &str, &str)]) -> Wrapper {
        Wrapper {
            shape: WrapperShape::Pool(
                tokens
                    .iter()
                    .map(|(address, name, symbol)| PoolToken {
                        address: address.to_string(),
                        name: name.to_string(),
                        symbol: symbol.to_string(),
                    })
                    .collect(),
            ),
            ..single(id, symbol, symbol, protocol)
        }
    }

    fn adapter(id: String, protocol: Protocol, wrapper: Option<Wrapper>) -> Adapter {
        Adapter {
            id,
            protocol: Some(protocol),
            output_wrapper: wrapper,
            supported_wrappers: vec![],
        }
    }

    fn find<'a>(actions: &'a [Action], id: &str) -> Option<&'a Action> {
        actions.iter().find(|a| a.id == id)
    }

    #[test]
    fn test_empty_input_yields_only_unwrap() {
        let actions = build_actions(mainnet(), &[]).unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].id, "unwrap");
        assert_eq!(actions[0].adapters[0].address, UNWRAP_ADAPTER);
        assert_eq!(actions[0].include_type, Some(vec![TokenType::Erc777]));
    }

    #[test]
    fn test_uniswap_single_asset_adapter() {
        let adapters = vec![adapter(
            addr(0xab),
            Protocol::Uniswap,
            Some(single(&addr(0xde), "Dai", "DAI", None)),
        )];
        let actions = build_actions(mainnet(), &adapters).unwrap();

        let uniswap = find(&actions, "uniswap").unwrap();
        assert_eq!(
            uniswap.include_type,
            Some(vec![TokenType::Erc777, TokenType::Eth])
        );
        assert_eq!(
            uniswap.include_protocol,
            Some(vec![None, Some(Protocol::Uniswap)])
        );
        assert_eq!(uniswap.factory.as_ref().unwrap().address, UNISWAP_FACTORY);

        assert_eq!(uniswap.adapters.len(), 2);
        let native = &uniswap.adapters[0];
        assert_eq!(native.address, UNISWAP_NATIVE_ADAPTER);
        assert_eq!(native.output_wrapper.as_deref(), Some(ZERO_ADDRESS));
        assert_eq!(native.symbol, "ETH");

        let dai = &uniswap.adapters[1];
        assert_eq!(dai.address, address::checksum(&addr(0xab)).unwrap());
        assert_eq!(
            dai.output_wrapper.as_deref(),
            Some(address::checksum(&addr(0xde)).unwrap().as_str())
        );
        assert_eq!(dai.name, "Dai");
        assert_eq!(dai.symbol, "DAI");

        // no pool adapters, no pool action
        assert!(find(&actions, "uniswap-pool").is_none());
    }

    #[test]
    fn test_uniswap_pool_names() {
        let adapters = vec![adapter(
            addr(1),
            Protocol::Uniswap,
            Some(pool(
                &addr(2),
                "UNI-V2",
                None,
                &[(DAI, "Dai Stablecoin", "DAI"), (WETH, "Wrapped Ether", "WETH")],
            )),
        )];
        let actions = build_actions(mainnet(), &adapters).unwrap();

        assert!(find(&actions, "uniswap").is_none());
        let pools = find(&actions, "uniswap-pool").unwrap();
        assert_eq!(pools.include_protocol, Some(vec![None]));
        assert_eq!(pools.adapters.len(), 1);
        assert_eq!(pools.adapters[0].name, "Uniswap Dai Stablecoin-Ether Pool");
        assert_eq!(pools.adapters[0].symbol, "DAI-ETH");
        assert!(pools.adapters[0].include_underlying.is_none());
    }

    #[test]
    fn test_balancer_entry_and_exit() {
        let adapters = vec![
            adapter(
                addr(1),
                Protocol::Balancer,
                Some(pool(
                    &addr(2),
                    "BPT",
                    Some(Protocol::Balancer),
                    &[(WETH, "Wrapped Ether", "WETH"), (USDC, "USD Coin", "USDC")],
                )),
            ),
            adapter(
                addr(3),
                Protocol::Balancer,
                Some(single(&addr(4), "USD Coin", "USDC", None)),
            ),
        ];
        let actions = build_actions(mainnet(), &adapters).unwrap();

        let entry = find(&actions, "balancer").unwrap();
        let underlying = entry.include_underlying.as_ref().unwrap();
        assert_eq!(underlying[0], ZERO_ADDRESS);
        assert_eq!(entry.adapters.len(), 1);
        assert_eq!(entry.adapters[0].name, "Balancer Ether-USD Coin Pool");
        assert_eq!(entry.adapters[0].symbol, "ETH-USDC");
        assert_eq!(
            entry.adapters[0].include_underlying,
            Some(vec![
                ZERO_ADDRESS.to_string(),
                "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
            ])
        );

        let exit = find(&actions, "balancer-exit").unwrap();
        assert_eq!(exit.include_protocol, Some(vec![Some(Protocol::Balancer)]));
        assert_eq!(exit.adapters.len(), 2);
        assert_eq!(exit.adapters[0].address, BALANCER_NATIVE_EXIT_ADAPTER);
        assert_eq!(exit.adapters[1].name, "USD Coin");
    }

    #[test]
    fn test_wrapped_native_kept_on_networks_without_weth() {
        let goerli = Network::resolve("goerli").unwrap();
        let adapters = vec![adapter(
            addr(1),
            Protocol::Balancer,
            Some(pool(
                &addr(2),
                "BPT",
                Some(Protocol::Balancer),
                &[(WETH, "Wrapped Ether", "WETH")],
            )),
        )];
        let actions = build_actions(goerli, &adapters).unwrap();
        let entry = find(&actions, "balancer").unwrap();
        assert_eq!(
            entry.adapters[0].include_underlying,
            Some(vec!["0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".to_string()])
        );
    }

    #[test]
    fn test_curve_hides_3pool_and_uses_underlying_names() {
        let adapters = vec![
            adapter(
                addr(1),
                Protocol::Curve,
                Some(pool(
                    &addr(2),
                    "3Crv",
                    Some(Protocol::Curve),
                    &[(DAI, "Dai", "DAI"), (USDC, "USD Coin", "USDC")],
                )),
            ),
            adapter(
                addr(3),
                Protocol::Curve,
                Some(pool(
                    &addr(4),
                    "yCRV",
                    Some(Protocol::Curve),
                    &[(USDC, "USD Coin", "USDC")],
                )),
            ),
        ];
        let actions = build_actions(mainnet(), &adapters).unwrap();

        let curve = find(&actions, "curve").unwrap();
        assert_eq!(curve.include_type, Some(vec![TokenType::Erc777]));
        assert_eq!(curve.adapters.len(), 1);
        assert_eq!(curve.adapters[0].name, "yCRV");
        assert_eq!(
            curve.include_underlying,
            Some(vec!["0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string()])
        );
        assert!(find(&actions, "curve-exit").is_none());
    }

    #[test]
    fn test_curve_with_only_hidden_adapter_is_dropped() {
        let adapters = vec![adapter(
            addr(1),
            Protocol::Curve,
            Some(pool(&addr(2), "3Crv", Some(Protocol::Curve), &[(DAI, "Dai", "DAI")])),
        )];
        let actions = build_actions(mainnet(), &adapters).unwrap();
        assert!(find(&actions, "curve").is_none());
    }

    #[test]
    fn test_compound_include_underlying() {
        let mut compound = adapter(addr(0xc0), Protocol::Compound, None);
        compound.supported_wrappers = vec![
            SupportedWrapper {
                underlying_address: addr(0x11),
                protocol: None,
            },
            SupportedWrapper {
                underlying_address: addr(0x22),
                protocol: None,
            },
        ];
        let actions = build_actions(mainnet(), &[compound]).unwrap();

        let action = find(&actions, "compound").unwrap();
        assert_eq!(
            action.include_underlying,
            Some(vec![
                ZERO_ADDRESS.to_string(),
                address::checksum(&addr(0x11)).unwrap(),
                address::checksum(&addr(0x22)).unwrap(),
            ])
        );
        assert_eq!(action.adapters.len(), 1);
        assert_eq!(action.adapters[0].name, "Compound");
        assert!(action.adapters[0].output_wrapper.is_none());
    }

    #[test]
    fn test_yearn_entry_and_exit_share_adapter() {
        let mut yearn = adapter(addr(0x77), Protocol::YEarn, None);
        yearn.supported_wrappers = vec![
            SupportedWrapper {
                underlying_address: DAI.into(),
                protocol: None,
            },
            SupportedWrapper {
                underlying_address: USDC.into(),
                protocol: Some(Protocol::Curve),
            },
        ];
        let actions = build_actions(mainnet(), &[yearn]).unwrap();

        let vaults = find(&actions, "yearn").unwrap();
        assert_eq!(
            vaults.include_underlying,
            Some(vec!["0x6B175474E89094C44Da98b954EedeAC495271d0F".to_string()])
        );
        let exit = find(&actions, "yearn-exit").unwrap();
        assert_eq!(exit.include_protocol, Some(vec![Some(Protocol::YEarn)]));
        assert_eq!(exit.adapters[0].address, vaults.adapters[0].address);
    }

    #[test]
    fn test_canonical_order_regardless_of_input_order() {
        let mut aave = adapter(addr(0xaa), Protocol::Aave, None);
        aave.supported_wrappers = vec![SupportedWrapper {
            underlying_address: DAI.into(),
            protocol: None,
        }];
        let adapters = vec![
            aave,
            adapter(
                addr(1),
                Protocol::Curve,
                Some(single(&addr(2), "Dai", "DAI", None)),
            ),
            adapter(
                addr(3),
                Protocol::Uniswap,
                Some(single(&addr(4), "Dai", "DAI", None)),
            ),
        ];
        let actions = build_actions(mainnet(), &adapters).unwrap();
        let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["uniswap", "curve-exit", "aave", "unwrap"]);
    }

    #[test]
    fn test_passthrough_adapters_are_not_emitted() {
        let passthrough = Adapter {
            id: addr(9),
            protocol: None,
            output_wrapper: None,
            supported_wrappers: vec![],
        };
        let actions = build_actions(mainnet(), &[passthrough]).unwrap();
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_missing_output_wrapper_fails_build() {
        let broken = adapter(addr(1), Protocol::Balancer, None);
        let err = build_actions(mainnet(), &[broken]).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord(_)));
    }

    #[test]
    fn test_invalid_address_fails_build() {
        let adapters = vec![adapter(
            "0x123".into(),
            Protocol::Uniswap,
            Some(single(&addr(4), "Dai", "DAI", None)),
        )];
        let err = build_actions(mainnet(), &adapters).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidAddress { .. }));
    }
}
