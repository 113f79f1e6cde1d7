//! Fixed GraphQL documents sent to the adapter subgraph, and the `data`
//! shapes they return.

use serde::Deserialize;

use crate::records::{RawAdapter, RawWrapper};

pub const ADAPTERS_QUERY: &str = r#"
query {
  adapters {
    id
    protocol
    outputWrapper {
      id
      protocol
      underlyingName
      underlyingSymbol
      underlyingAddress
      poolTokenAddresses
      poolTokenNames
      poolTokenSymbols
    }
    supportedWrappers {
      underlyingAddress
      protocol
    }
  }
}
"#;

pub const WRAPPERS_QUERY: &str = r#"
query {
  wrapped777S {
    id
    underlyingAddress
    underlyingName
    underlyingSymbol
    underlyingDecimals
    protocol
    poolTokenAddresses
    poolTokenNames
    poolTokenSymbols
    yieldWrappers {
      id
      underlyingAddress
      underlyingName
      underlyingSymbol
    }
    yieldAdapters {
      id
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
pub struct AdaptersData {
    #[serde(default)]
    pub adapters: Vec<RawAdapter>,
}

#[derive(Debug, Deserialize)]
pub struct WrappersData {
    #[serde(rename = "wrapped777S", default)]
    pub wrappers: Vec<RawWrapper>,
}
