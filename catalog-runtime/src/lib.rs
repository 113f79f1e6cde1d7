pub mod error;
pub mod types;
pub mod records;
pub mod address;
pub mod networks;
pub mod protocols;
pub mod queries;
pub mod graph_client;
pub mod actions;
pub mod tokens;
pub mod tokenlist;

pub use error::CatalogError;
pub use types::*;
pub use networks::Network;
pub use graph_client::GraphClient;
pub use actions::build_actions;
pub use tokens::build_tokens;
pub use tokenlist::{TokenList, build_token_list};
