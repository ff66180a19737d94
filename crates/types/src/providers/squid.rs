//! Cross-chain aggregator payloads

use serde::{Deserialize, Serialize};

use crate::transactions::EvmTransactionParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SquidQuote {
	pub from_amount: String,
	pub to_amount: String,
	pub to_amount_min: String,
	pub from_token: SquidToken,
	pub to_token: SquidToken,
	pub actions: Vec<SquidAction>,
	pub aggregate_price_impact: Option<String>,
	pub aggregate_slippage: String,
	pub estimated_route_duration: u64,
	pub exchange_rate: String,
	pub from_amount_usd: Option<String>,
	pub to_amount_usd: Option<String>,
	pub gas_costs: Vec<SquidCost>,
	pub fee_costs: Vec<SquidCost>,
	pub allowance_target: String,
	pub is_boost_eligible: bool,
}

impl SquidQuote {
	pub fn spender(&self) -> Option<&str> {
		Some(self.allowance_target.trim()).filter(|target| !target.is_empty())
	}

	pub fn is_cross_chain(&self) -> bool {
		self.from_token.chain_id != self.to_token.chain_id
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SquidToken {
	pub address: String,
	pub chain_id: String,
	pub symbol: String,
	pub decimals: u8,
	pub usd_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SquidAction {
	#[serde(rename = "type")]
	pub action_type: String,
	pub description: String,
	pub provider: String,
	pub from_chain: String,
	pub to_chain: String,
	pub from_token: SquidToken,
	pub to_token: SquidToken,
	pub from_amount: String,
	pub to_amount: String,
	pub to_amount_min: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SquidCost {
	pub name: String,
	pub description: String,
	/// Base units of `token`
	pub amount: String,
	pub amount_usd: Option<String>,
	pub token: SquidToken,
}

pub const SQUID_INSUFFICIENT_LIQUIDITY: &str = "INSUFFICIENT_LIQUIDITY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SquidError {
	pub message: String,
	#[serde(rename = "type")]
	pub error_type: String,
	pub is_insufficient_liquidity: bool,
}

impl SquidError {
	pub fn is_insufficient_liquidity(&self) -> bool {
		self.is_insufficient_liquidity || self.error_type == SQUID_INSUFFICIENT_LIQUIDITY
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SquidTransaction {
	pub evm_transaction: EvmTransactionParams,
}
