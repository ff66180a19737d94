//! User swap intent and the unified quote request

use serde::{Deserialize, Serialize};

use super::SwapProvider;
use crate::models::{AccountId, Token};
use crate::Amount;

pub const DEFAULT_SLIPPAGE_PERCENT: &str = "0.5";

/// Which amount drives the quote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum EditingSide {
	#[default]
	From,
	To,
}

/// Which token slot a selection applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TokenSide {
	From,
	To,
}

/// What the user wants to swap
///
/// Only the amount on `editing_side` is authoritative; the other one is
/// derived from the latest quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
	pub from_account: Option<AccountId>,
	pub from_token: Option<Token>,
	pub from_amount: String,
	pub to_account_id: Option<AccountId>,
	pub to_token: Option<Token>,
	pub to_amount: String,
	pub slippage_tolerance_percent: String,
	pub selected_provider: SwapProvider,
	pub editing_side: EditingSide,
}

impl Default for SwapRequest {
	fn default() -> Self {
		Self {
			from_account: None,
			from_token: None,
			from_amount: String::new(),
			to_account_id: None,
			to_token: None,
			to_amount: String::new(),
			slippage_tolerance_percent: DEFAULT_SLIPPAGE_PERCENT.to_string(),
			selected_provider: SwapProvider::Auto,
			editing_side: EditingSide::From,
		}
	}
}

impl SwapRequest {
	/// Authoritative display amount
	pub fn authoritative_amount(&self) -> &str {
		match self.editing_side {
			EditingSide::From => &self.from_amount,
			EditingSide::To => &self.to_amount,
		}
	}

	pub fn is_cross_chain(&self) -> bool {
		match (&self.from_token, &self.to_token) {
			(Some(from), Some(to)) => from.chain_id != to.chain_id,
			_ => false,
		}
	}

	pub fn from_amount_value(&self) -> Amount {
		Amount::new(&self.from_amount)
	}

	pub fn to_amount_value(&self) -> Amount {
		Amount::new(&self.to_amount)
	}
}

/// Route ordering hint passed to providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum RoutePriority {
	#[default]
	Cheapest,
	Fastest,
}

/// Unified parameters of `generate_quote`
///
/// Exactly one of `from_amount`/`to_amount` holds a base-unit integer; the
/// other is empty so the backend computes it. Native assets use an empty
/// token address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapQuoteParams {
	pub from_account_id: AccountId,
	pub from_chain_id: String,
	pub from_token: String,
	pub from_amount: String,
	pub to_account_id: AccountId,
	pub to_chain_id: String,
	pub to_token: String,
	pub to_amount: String,
	pub slippage_percentage: String,
	pub route_priority: RoutePriority,
	pub provider: SwapProvider,
}

impl SwapQuoteParams {
	pub fn editing_side(&self) -> EditingSide {
		if self.from_amount.is_empty() {
			EditingSide::To
		} else {
			EditingSide::From
		}
	}
}
