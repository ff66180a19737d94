//! Inputs and outputs of provider adapter execution

use serde::{Deserialize, Serialize};

use super::SwapError;
use crate::{
	models::{AccountId, Token},
	quotes::{ProviderQuote, QuoteOption, SwapProvider, SwapQuoteParams},
	status::SwapStatusParams,
	Amount,
};

/// Everything an adapter needs to act on the selected route
///
/// Captured when `submit` is invoked so later quote cycles cannot change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
	pub quote: ProviderQuote,
	pub option: QuoteOption,
	pub params: SwapQuoteParams,
	pub from_account: AccountId,
	pub from_token: Token,
}

impl RouteContext {
	pub fn route_id(&self) -> &str {
		&self.option.id
	}

	pub fn owner_address(&self) -> Result<&str, SwapError> {
		self.from_account
			.address()
			.ok_or_else(|| SwapError::Precondition {
				reason: "from account address is not resolved".to_string(),
			})
	}

	/// From amount of the selected option in base units
	pub fn required_base_units(&self) -> Amount {
		match self.option.from_amount.to_base_units(self.from_token.decimals) {
			Some(raw) => Amount::from_integer_str(&raw),
			None => Amount::undefined(),
		}
	}

	/// Both amounts must be present and non-zero before anything is sent
	pub fn validate_amounts(&self) -> Result<(), SwapError> {
		if self.option.from_amount.is_zero_or_undefined()
			|| self.option.to_amount.is_zero_or_undefined()
		{
			return Err(SwapError::InvalidAmounts);
		}
		Ok(())
	}
}

/// Receipt of a successfully submitted swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedSwap {
	pub provider: SwapProvider,
	pub route_id: String,
	pub tx_hash: String,
	pub from_chain_id: String,
	pub to_chain_id: String,
	pub tool: Option<String>,
}

impl SubmittedSwap {
	/// Bridge settlements are tracked until the destination chain confirms
	pub fn is_cross_chain(&self) -> bool {
		self.from_chain_id != self.to_chain_id
	}

	pub fn status_params(&self) -> SwapStatusParams {
		SwapStatusParams {
			provider: self.provider,
			route_id: self.route_id.clone(),
			tx_hash: self.tx_hash.clone(),
			from_chain_id: self.from_chain_id.clone(),
			to_chain_id: self.to_chain_id.clone(),
			tool: self.tool.clone(),
		}
	}
}
