//! Provider-agnostic normalized quote

use serde::{Deserialize, Serialize};

use super::SwapProvider;
use crate::models::Token;
use crate::Amount;

/// How liquidity is combined
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Routing {
	/// One hop, input split across sources; proportions sum to one
	Split,
	/// Sequential hops
	Flow,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSource {
	pub name: String,
	pub proportion: Amount,
}

/// One execution hop of a multi-step route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteStep {
	pub tool: String,
	pub from_chain_id: String,
	pub from_symbol: String,
	pub from_amount: Amount,
	pub to_chain_id: String,
	pub to_symbol: String,
	pub to_amount: Amount,
}

/// Comparable quote built from any provider's payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOption {
	/// Route id for multi-route providers, otherwise the option index
	pub id: String,
	pub provider: SwapProvider,
	pub from_token: Token,
	pub to_token: Token,
	pub from_amount: Amount,
	pub to_amount: Amount,
	pub minimum_to_amount: Option<Amount>,
	/// `to_amount / from_amount`
	pub rate: Amount,
	pub price_impact_percent: Amount,
	/// Native asset of the source network
	pub network_fee: Amount,
	pub network_fee_fiat: Amount,
	pub routing: Routing,
	pub sources: Vec<QuoteSource>,
	pub steps: Vec<QuoteStep>,
	pub execution_duration_secs: Option<u64>,
}

impl QuoteOption {
	/// Sum of source proportions
	pub fn total_proportion(&self) -> Amount {
		self.sources
			.iter()
			.map(|source| source.proportion.clone())
			.sum()
	}

	/// Rate expressed per unit of the destination token
	pub fn inverse_rate(&self) -> Amount {
		self.from_amount.checked_div(&self.to_amount)
	}
}
