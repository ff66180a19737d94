//! Submit-affordance validation taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the swap cannot be submitted as-is
///
/// Derived from state on every change; never persisted.
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SwapValidationError {
	#[error("Provider does not support this token pair")]
	ProviderNotSupported,

	#[error("From amount has more decimals than the token supports")]
	FromAmountDecimalsOverflow,

	#[error("To amount has more decimals than the token supports")]
	ToAmountDecimalsOverflow,

	#[error("Insufficient balance")]
	InsufficientBalance,

	#[error("Insufficient funds for gas")]
	InsufficientFundsForGas,

	#[error("Token allowance must be approved")]
	InsufficientAllowance,

	#[error("Insufficient liquidity")]
	InsufficientLiquidity,

	#[error("Unknown error")]
	UnknownError,
}

impl SwapValidationError {
	/// Whether the submit affordance is disabled.
	///
	/// An insufficient allowance keeps it enabled; submitting then approves.
	pub fn disables_submit(&self) -> bool {
		!matches!(self, SwapValidationError::InsufficientAllowance)
	}
}
