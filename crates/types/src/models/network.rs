//! Networks, coin families and well-known chain identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::asset::Token;

pub const ETHEREUM_MAINNET_CHAIN_ID: &str = "0x1";
pub const POLYGON_MAINNET_CHAIN_ID: &str = "0x89";
pub const BASE_MAINNET_CHAIN_ID: &str = "0x2105";
pub const SOLANA_MAINNET_CHAIN_ID: &str = "0x65";
pub const BITCOIN_MAINNET_CHAIN_ID: &str = "bitcoin_mainnet";
pub const ZCASH_MAINNET_CHAIN_ID: &str = "zcash_mainnet";

/// Coin family; decides which send primitive a payload goes through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CoinType {
	Eth,
	Sol,
	Btc,
	Zec,
}

impl CoinType {
	/// UTXO-based coins have no token contracts and no allowance concept
	pub fn is_utxo(&self) -> bool {
		matches!(self, CoinType::Btc | CoinType::Zec)
	}
}

impl FromStr for CoinType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"eth" | "evm" => Ok(CoinType::Eth),
			"sol" | "solana" => Ok(CoinType::Sol),
			"btc" | "bitcoin" => Ok(CoinType::Btc),
			"zec" | "zcash" => Ok(CoinType::Zec),
			_ => Err(format!("unknown coin type '{}'", s)),
		}
	}
}

impl fmt::Display for CoinType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			CoinType::Eth => "eth",
			CoinType::Sol => "sol",
			CoinType::Btc => "btc",
			CoinType::Zec => "zec",
		};
		f.write_str(name)
	}
}

/// A chain and its native asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
	pub coin: CoinType,
	pub chain_id: String,
	pub name: String,
	/// Native asset symbol
	pub symbol: String,
	/// Native asset decimals; network fees are descaled with these
	pub decimals: u8,
}

impl Network {
	pub fn new(
		coin: CoinType,
		chain_id: impl Into<String>,
		name: impl Into<String>,
		symbol: impl Into<String>,
		decimals: u8,
	) -> Self {
		Self {
			coin,
			chain_id: chain_id.into(),
			name: name.into(),
			symbol: symbol.into(),
			decimals,
		}
	}

	pub fn native_token(&self) -> Token {
		Token::native(self.coin, self.chain_id.clone(), self.symbol.clone(), self.decimals)
	}

	pub fn ethereum() -> Self {
		Self::new(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, "Ethereum Mainnet", "ETH", 18)
	}

	pub fn solana() -> Self {
		Self::new(CoinType::Sol, SOLANA_MAINNET_CHAIN_ID, "Solana Mainnet", "SOL", 9)
	}

	pub fn bitcoin() -> Self {
		Self::new(CoinType::Btc, BITCOIN_MAINNET_CHAIN_ID, "Bitcoin Mainnet", "BTC", 8)
	}

	/// Native asset defaults of a coin family, named after the chain id
	pub fn for_coin(coin: CoinType, chain_id: impl Into<String>) -> Self {
		let chain_id = chain_id.into();
		let (symbol, decimals) = match coin {
			CoinType::Eth => ("ETH", 18),
			CoinType::Sol => ("SOL", 9),
			CoinType::Btc => ("BTC", 8),
			CoinType::Zec => ("ZEC", 8),
		};
		Self::new(coin, chain_id.clone(), chain_id, symbol, decimals)
	}
}
