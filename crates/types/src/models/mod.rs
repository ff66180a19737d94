//! Shared domain models

pub mod account;
pub mod asset;
pub mod network;
pub mod secret_string;

pub use account::AccountId;
pub use asset::Token;
pub use network::{
	CoinType, Network, BASE_MAINNET_CHAIN_ID, BITCOIN_MAINNET_CHAIN_ID,
	ETHEREUM_MAINNET_CHAIN_ID, POLYGON_MAINNET_CHAIN_ID, SOLANA_MAINNET_CHAIN_ID,
	ZCASH_MAINNET_CHAIN_ID,
};
pub use secret_string::SecretString;
