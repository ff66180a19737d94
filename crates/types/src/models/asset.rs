//! Token model shared by quotes, balances and allowance checks

use serde::{Deserialize, Serialize};

use super::network::CoinType;

/// A swappable asset on a specific chain
///
/// Native assets carry an empty `contract_address`. For Solana tokens the
/// contract address is the mint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Token {
	pub coin: CoinType,
	pub chain_id: String,
	#[serde(default)]
	pub contract_address: String,
	pub symbol: String,
	pub decimals: u8,
}

impl Token {
	pub fn new(
		coin: CoinType,
		chain_id: impl Into<String>,
		contract_address: impl Into<String>,
		symbol: impl Into<String>,
		decimals: u8,
	) -> Self {
		Self {
			coin,
			chain_id: chain_id.into(),
			contract_address: contract_address.into(),
			symbol: symbol.into(),
			decimals,
		}
	}

	/// Native asset of a chain
	pub fn native(
		coin: CoinType,
		chain_id: impl Into<String>,
		symbol: impl Into<String>,
		decimals: u8,
	) -> Self {
		Self::new(coin, chain_id, "", symbol, decimals)
	}

	pub fn is_native(&self) -> bool {
		self.contract_address.is_empty()
	}

	/// EVM fungible tokens must grant a spend allowance before a contract can move them
	pub fn requires_approval(&self) -> bool {
		self.coin == CoinType::Eth && !self.is_native()
	}

	/// Same chain and contract, ignoring address case
	pub fn same_asset(&self, other: &Token) -> bool {
		self.coin == other.coin
			&& self.chain_id == other.chain_id
			&& self
				.contract_address
				.eq_ignore_ascii_case(&other.contract_address)
	}
}
