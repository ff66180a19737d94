//! 0x-style single-hop aggregator payloads

use serde::{Deserialize, Serialize};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Indicative quote; liquidity is split across sources within a single hop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ZeroExQuote {
	pub price: String,
	pub guaranteed_price: Option<String>,
	pub to: String,
	pub data: String,
	pub value: String,
	pub gas: String,
	pub estimated_gas: String,
	pub gas_price: String,
	pub sell_token_address: String,
	pub buy_token_address: String,
	pub sell_amount: String,
	pub buy_amount: String,
	pub min_buy_amount: Option<String>,
	pub allowance_target: String,
	pub estimated_price_impact: Option<String>,
	pub sources: Vec<ZeroExSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ZeroExSource {
	pub name: String,
	/// Fraction of the fill in `[0, 1]`
	pub proportion: String,
}

impl ZeroExQuote {
	/// Spender that must hold an allowance; the zero address means none is needed
	pub fn spender(&self) -> Option<&str> {
		let target = self.allowance_target.trim();
		if target.is_empty() || target.eq_ignore_ascii_case(ZERO_ADDRESS) {
			None
		} else {
			Some(target)
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ZeroExError {
	pub code: i64,
	pub reason: String,
	pub validation_errors: Vec<ZeroExValidationError>,
	pub is_insufficient_liquidity: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ZeroExValidationError {
	pub field: String,
	pub code: i64,
	pub reason: String,
}
