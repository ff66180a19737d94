//! Submit-affordance classification
//!
//! A pure function of client-known state. It is recomputed on every state
//! change and never needs a network round trip. The first failing check
//! wins, in this order: provider support, decimal overflow on either side,
//! balance, gas, provider-reported errors, allowance.

use serde::{Deserialize, Serialize};
use swap_types::{
	AllowanceState, Amount, ProviderError, QuoteOption, SwapProvider, SwapRequest,
	SwapValidationError,
};

/// Balances of the from account, in display units
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
	pub from_token: Amount,
	/// Native asset of the from network
	pub from_native: Amount,
}

/// Everything the classifier looks at
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
	pub request: &'a SwapRequest,
	/// Whether the explicitly selected provider is registered
	pub provider_enabled: bool,
	pub selected_option: Option<&'a QuoteOption>,
	pub quote_error: Option<&'a ProviderError>,
	pub balances: &'a Balances,
	/// Whether the selected route needs a token allowance at all
	pub allowance_required: bool,
	pub allowance: Option<&'a AllowanceState>,
}

pub fn classify(input: &ValidationInput<'_>) -> Option<SwapValidationError> {
	let request = input.request;

	if provider_not_supported(input) {
		return Some(SwapValidationError::ProviderNotSupported);
	}

	if let Some(token) = &request.from_token {
		if request.from_amount_value().exceeds_decimals(token.decimals) {
			return Some(SwapValidationError::FromAmountDecimalsOverflow);
		}
	}
	if let Some(token) = &request.to_token {
		if request.to_amount_value().exceeds_decimals(token.decimals) {
			return Some(SwapValidationError::ToAmountDecimalsOverflow);
		}
	}

	let from_amount = request.from_amount_value();
	let balance = &input.balances.from_token;
	if from_amount.is_positive() && !balance.is_undefined() && &from_amount > balance {
		return Some(SwapValidationError::InsufficientBalance);
	}

	if insufficient_funds_for_gas(input, &from_amount) {
		return Some(SwapValidationError::InsufficientFundsForGas);
	}

	if let Some(error) = input.quote_error {
		return Some(if error.is_insufficient_liquidity() {
			SwapValidationError::InsufficientLiquidity
		} else {
			SwapValidationError::UnknownError
		});
	}

	let allowance_short = input
		.allowance
		.map(|state| !state.has_sufficient_allowance)
		.unwrap_or(false);
	if input.allowance_required && allowance_short {
		return Some(SwapValidationError::InsufficientAllowance);
	}

	None
}

fn provider_not_supported(input: &ValidationInput<'_>) -> bool {
	let provider = input.request.selected_provider;
	if provider == SwapProvider::Auto {
		return false;
	}
	if !input.provider_enabled {
		return true;
	}
	match (&input.request.from_token, &input.request.to_token) {
		(Some(from), Some(to)) => !provider.supports(from, to),
		_ => false,
	}
}

/// The native balance must cover the fee, plus the amount when the native
/// asset is what is being sold
fn insufficient_funds_for_gas(input: &ValidationInput<'_>, from_amount: &Amount) -> bool {
	let fee = match input.selected_option {
		Some(option) if !option.network_fee.is_undefined() => &option.network_fee,
		_ => return false,
	};
	let native_balance = &input.balances.from_native;
	if native_balance.is_undefined() {
		return false;
	}

	let selling_native = input
		.request
		.from_token
		.as_ref()
		.map(|token| token.is_native())
		.unwrap_or(false);
	let needed = if selling_native && !from_amount.is_undefined() {
		fee + from_amount
	} else {
		fee.clone()
	};

	native_balance < &needed
}
