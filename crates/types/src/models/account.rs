//! Wallet account identifiers

use serde::{Deserialize, Serialize};

use super::network::CoinType;

/// Account reference handed in by the wallet layer
///
/// Some account kinds (UTXO wallets) only learn their receive address
/// asynchronously, so `address` may be absent until resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AccountId {
	pub coin: CoinType,
	pub unique_key: String,
	pub address: Option<String>,
}

impl AccountId {
	pub fn new(coin: CoinType, address: impl Into<String>) -> Self {
		let address = address.into();
		Self {
			coin,
			unique_key: address.clone(),
			address: Some(address),
		}
	}

	/// Account whose address must be resolved before quoting
	pub fn unresolved(coin: CoinType, unique_key: impl Into<String>) -> Self {
		Self {
			coin,
			unique_key: unique_key.into(),
			address: None,
		}
	}

	pub fn address(&self) -> Option<&str> {
		self.address.as_deref().filter(|address| !address.is_empty())
	}

	pub fn with_address(mut self, address: impl Into<String>) -> Self {
		self.address = Some(address.into());
		self
	}
}
