//! Wallet fake: fixed balances, Ethereum network metadata, address lookup

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use swap_types::{
	AccountId, AdapterError, AdapterResult, Amount, CoinType, Network, Token, WalletProvider,
	ETHEREUM_MAINNET_CHAIN_ID, POLYGON_MAINNET_CHAIN_ID,
};

use super::backend::CallTracker;

#[derive(Default)]
pub struct FakeWallet {
	/// Display-unit balances keyed by contract address; native is `""`
	balances: Mutex<HashMap<String, Amount>>,
	addresses: Mutex<HashMap<String, String>>,
	pub balance_calls: CallTracker,
	pub resolve_calls: CallTracker,
}

impl FakeWallet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_balance(self, token: &Token, amount: &str) -> Self {
		self.balances
			.lock()
			.unwrap()
			.insert(token.contract_address.to_lowercase(), Amount::new(amount));
		self
	}

	/// Address returned for an unresolved account's unique key
	pub fn with_address(self, unique_key: &str, address: &str) -> Self {
		self.addresses
			.lock()
			.unwrap()
			.insert(unique_key.to_string(), address.to_string());
		self
	}
}

#[async_trait]
impl WalletProvider for FakeWallet {
	async fn resolve_address(&self, account: &AccountId) -> AdapterResult<String> {
		self.resolve_calls.record_call();
		self.addresses
			.lock()
			.unwrap()
			.get(&account.unique_key)
			.cloned()
			.ok_or_else(|| AdapterError::InvalidResponse {
				reason: format!("unknown account {}", account.unique_key),
			})
	}

	async fn balance(&self, _account: &AccountId, token: &Token) -> AdapterResult<Amount> {
		self.balance_calls.record_call();
		Ok(self
			.balances
			.lock()
			.unwrap()
			.get(&token.contract_address.to_lowercase())
			.cloned()
			.unwrap_or_else(Amount::zero))
	}

	fn network(&self, coin: CoinType, chain_id: &str) -> Option<Network> {
		match (coin, chain_id) {
			(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID) => Some(Network::ethereum()),
			(CoinType::Eth, POLYGON_MAINNET_CHAIN_ID) => Some(Network::new(
				CoinType::Eth,
				POLYGON_MAINNET_CHAIN_ID,
				"Polygon",
				"POL",
				18,
			)),
			_ => None,
		}
	}
}
