//! Spend allowance bookkeeping for value-approval tokens

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Largest representable allowance; approvals always grant this
pub const MAX_UINT256_HEX: &str =
	"0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

/// Identity of an allowance: who lets whom spend which token where
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceKey {
	pub owner: String,
	pub spender: String,
	pub token_contract: String,
	pub chain_id: String,
}

impl AllowanceKey {
	pub fn new(
		owner: impl Into<String>,
		spender: impl Into<String>,
		token_contract: impl Into<String>,
		chain_id: impl Into<String>,
	) -> Self {
		// EVM addresses compare case-insensitively
		Self {
			owner: owner.into().to_ascii_lowercase(),
			spender: spender.into().to_ascii_lowercase(),
			token_contract: token_contract.into().to_ascii_lowercase(),
			chain_id: chain_id.into(),
		}
	}
}

/// What a route needs approved before it can execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowanceRequirement {
	pub key: AllowanceKey,
	/// Base units
	pub required: Amount,
}

/// Current allowance versus what the selected route needs, both in base units
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceState {
	pub key: AllowanceKey,
	pub current_allowance: Amount,
	pub required_allowance: Amount,
	pub has_sufficient_allowance: bool,
}

impl AllowanceState {
	pub fn new(key: AllowanceKey, current_allowance: Amount, required_allowance: Amount) -> Self {
		let has_sufficient_allowance = current_allowance >= required_allowance;
		Self {
			key,
			current_allowance,
			required_allowance,
			has_sufficient_allowance,
		}
	}
}
