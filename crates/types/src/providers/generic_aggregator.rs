//! Generic multi-chain aggregator payloads
//!
//! Routes may embed a ready transaction payload, or declare that a firm
//! route must be fetched before anything can be signed.

use serde::{Deserialize, Serialize};

use crate::{models::Token, quotes::SwapQuoteParams, transactions::TransactionPayload};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenericAggregatorQuote {
	pub routes: Vec<GenericRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenericRoute {
	pub id: String,
	/// Venue that fills the route
	pub provider: String,
	pub source_token: Token,
	pub source_amount: String,
	pub destination_token: Token,
	pub destination_amount: String,
	#[serde(default)]
	pub destination_amount_min: Option<String>,
	#[serde(default)]
	pub steps: Vec<GenericRouteStep>,
	#[serde(default)]
	pub network_fee: Option<GenericNetworkFee>,
	#[serde(default)]
	pub price_impact: Option<String>,
	#[serde(default)]
	pub requires_token_allowance: bool,
	#[serde(default)]
	pub requires_firm_route: bool,
	#[serde(default)]
	pub allowance_target: Option<String>,
	#[serde(default)]
	pub deposit_address: Option<String>,
	#[serde(default)]
	pub transaction_params: Option<TransactionPayload>,
	#[serde(default)]
	pub estimated_time_secs: Option<u64>,
	#[serde(default)]
	pub slippage_percentage: String,
}

impl GenericRoute {
	pub fn spender(&self) -> Option<&str> {
		if !self.requires_token_allowance {
			return None;
		}
		self.allowance_target
			.as_deref()
			.map(str::trim)
			.filter(|target| !target.is_empty())
	}

	pub fn is_cross_chain(&self) -> bool {
		self.source_token.chain_id != self.destination_token.chain_id
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenericRouteStep {
	pub source_token: Token,
	pub source_amount: String,
	pub destination_token: Token,
	pub destination_amount: String,
	pub tool: GenericTool,
	/// Share of the route's input, `0..=100`; absent for sequential hops
	#[serde(default)]
	pub percent: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenericTool {
	pub name: String,
	pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenericNetworkFee {
	/// Base units of the source network's native asset
	pub amount: String,
	pub decimals: u8,
	pub symbol: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum GenericErrorKind {
	#[default]
	Unknown,
	InsufficientLiquidity,
	AmountTooLow,
	UnsupportedTokens,
	UnsupportedNetwork,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenericAggregatorError {
	pub message: String,
	pub kind: GenericErrorKind,
}

/// Firm route request, keyed by the indicative route id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenericAggregatorTransactionParams {
	pub route_id: String,
	pub quote_params: SwapQuoteParams,
}
