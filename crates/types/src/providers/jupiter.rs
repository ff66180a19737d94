//! Solana-native aggregator payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JupiterQuote {
	pub input_mint: String,
	pub in_amount: String,
	pub output_mint: String,
	pub out_amount: String,
	/// Minimum output after slippage
	pub other_amount_threshold: String,
	pub swap_mode: String,
	pub slippage_bps: i32,
	/// Already expressed in percent
	pub price_impact_pct: String,
	pub route_plan: Vec<JupiterRouteStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JupiterRouteStep {
	/// Share of the input routed through this step, `0..=100`
	pub percent: u32,
	pub swap_info: JupiterSwapInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JupiterSwapInfo {
	pub amm_key: String,
	pub label: String,
	pub input_mint: String,
	pub output_mint: String,
	pub in_amount: String,
	pub out_amount: String,
	pub fee_amount: String,
	pub fee_mint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JupiterError {
	pub status_code: String,
	pub error: String,
	pub message: String,
	pub is_insufficient_liquidity: bool,
}

/// Request body for building the serialized swap transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JupiterTransactionParams {
	pub quote: JupiterQuote,
	pub chain_id: String,
	pub user_public_key: String,
}

/// Base64 encoded versioned transaction ready for signing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JupiterTransaction {
	pub swap_transaction: String,
}
