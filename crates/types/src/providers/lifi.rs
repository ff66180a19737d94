//! Routed multi-step aggregator payloads
//!
//! A quote carries several alternative routes; each route is an ordered list
//! of steps, and each step may itself bundle included sub-steps.

use serde::{Deserialize, Serialize};

use crate::transactions::EvmTransactionParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiQuote {
	pub routes: Vec<LifiRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiRoute {
	pub id: String,
	pub from_token: LifiToken,
	pub from_amount: String,
	pub from_amount_usd: Option<String>,
	pub from_address: String,
	pub to_token: LifiToken,
	pub to_amount: String,
	pub to_amount_min: String,
	pub to_amount_usd: Option<String>,
	pub to_address: String,
	pub steps: Vec<LifiStep>,
	pub tags: Vec<String>,
}

impl LifiRoute {
	/// Approval is scoped to the first step of a route
	pub fn approval_address(&self) -> Option<&str> {
		self.steps
			.first()
			.map(|step| step.estimate.approval_address.trim())
			.filter(|address| !address.is_empty())
	}

	pub fn is_cross_chain(&self) -> bool {
		self.from_token.chain_id != self.to_token.chain_id
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiToken {
	pub address: String,
	pub chain_id: String,
	pub symbol: String,
	pub decimals: u8,
	pub name: String,
	pub price_usd: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum LifiStepType {
	#[default]
	Swap,
	Cross,
	Lifi,
	Protocol,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiStep {
	pub id: String,
	#[serde(rename = "type")]
	pub step_type: LifiStepType,
	pub tool: String,
	pub tool_details: LifiToolDetails,
	pub action: LifiAction,
	pub estimate: LifiEstimate,
	pub included_steps: Vec<LifiStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiToolDetails {
	pub key: String,
	pub name: String,
	pub logo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiAction {
	pub from_token: LifiToken,
	pub from_amount: String,
	pub to_token: LifiToken,
	pub from_chain_id: String,
	pub to_chain_id: String,
	pub slippage: String,
	pub from_address: String,
	pub to_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiEstimate {
	pub tool: String,
	pub from_amount: String,
	pub to_amount: String,
	pub to_amount_min: String,
	pub approval_address: String,
	pub fee_costs: Vec<LifiFeeCost>,
	pub gas_costs: Vec<LifiGasCost>,
	pub execution_duration: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiFeeCost {
	pub name: String,
	pub percentage: String,
	pub token: LifiToken,
	pub amount: String,
	pub amount_usd: Option<String>,
	pub included: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LifiGasCost {
	#[serde(rename = "type")]
	pub cost_type: String,
	pub estimate: String,
	pub limit: String,
	/// Native asset base units
	pub amount: String,
	pub amount_usd: Option<String>,
	pub token: LifiToken,
}

/// Error codes reported by the routing backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "u32", into = "u32")]
pub enum LifiErrorCode {
	Default,
	FailedToBuildTransaction,
	NoQuote,
	NotFound,
	NotProcessable,
	RateLimit,
	Server,
	Slippage,
	ThirdParty,
	Timeout,
	Unauthorized,
	Validation,
	Other(u32),
}

impl From<u32> for LifiErrorCode {
	fn from(code: u32) -> Self {
		match code {
			1000 => Self::Default,
			1001 => Self::FailedToBuildTransaction,
			1002 => Self::NoQuote,
			1003 => Self::NotFound,
			1004 => Self::NotProcessable,
			1005 => Self::RateLimit,
			1006 => Self::Server,
			1007 => Self::Slippage,
			1008 => Self::ThirdParty,
			1009 => Self::Timeout,
			1010 => Self::Unauthorized,
			1011 => Self::Validation,
			other => Self::Other(other),
		}
	}
}

impl From<LifiErrorCode> for u32 {
	fn from(code: LifiErrorCode) -> Self {
		match code {
			LifiErrorCode::Default => 1000,
			LifiErrorCode::FailedToBuildTransaction => 1001,
			LifiErrorCode::NoQuote => 1002,
			LifiErrorCode::NotFound => 1003,
			LifiErrorCode::NotProcessable => 1004,
			LifiErrorCode::RateLimit => 1005,
			LifiErrorCode::Server => 1006,
			LifiErrorCode::Slippage => 1007,
			LifiErrorCode::ThirdParty => 1008,
			LifiErrorCode::Timeout => 1009,
			LifiErrorCode::Unauthorized => 1010,
			LifiErrorCode::Validation => 1011,
			LifiErrorCode::Other(other) => other,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LifiError {
	pub code: LifiErrorCode,
	#[serde(default)]
	pub message: String,
}

impl LifiError {
	/// The backend reports "no route found" with the not-found code
	pub fn is_insufficient_liquidity(&self) -> bool {
		self.code == LifiErrorCode::NotFound
	}
}

/// Executable transaction built for a single step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LifiTransaction {
	EvmTransaction(EvmTransactionParams),
	/// Base64 serialized Solana transaction
	SolanaTransaction(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_code_round_trips_through_wire_integer() {
		let error: LifiError =
			serde_json::from_str(r#"{"code":1003,"message":"No available quotes"}"#).unwrap();
		assert!(error.is_insufficient_liquidity());

		let unknown: LifiError = serde_json::from_str(r#"{"code":4242}"#).unwrap();
		assert_eq!(unknown.code, LifiErrorCode::Other(4242));
		assert!(!unknown.is_insufficient_liquidity());
	}

	#[test]
	fn test_approval_address_comes_from_first_step() {
		let step = |approval: &str| LifiStep {
			estimate: LifiEstimate {
				approval_address: approval.to_string(),
				..Default::default()
			},
			..Default::default()
		};
		let route = LifiRoute {
			steps: vec![step("0xfirst"), step("0xsecond")],
			..Default::default()
		};
		assert_eq!(route.approval_address(), Some("0xfirst"));

		let no_approval = LifiRoute {
			steps: vec![step(""), step("0xsecond")],
			..Default::default()
		};
		assert_eq!(no_approval.approval_address(), None);
	}
}
