//! Provider-tagged quote results and errors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{SwapFees, SwapProvider};
use crate::providers::{
	GenericAggregatorError, GenericAggregatorQuote, GenericErrorKind, JupiterError,
	JupiterQuote, LifiError, LifiQuote, SquidError, SquidQuote, ZeroExError, ZeroExQuote,
};

/// Raw quote from exactly one provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProviderQuote {
	ZeroEx(ZeroExQuote),
	Jupiter(JupiterQuote),
	Lifi(LifiQuote),
	Squid(SquidQuote),
	GenericAggregator(GenericAggregatorQuote),
}

impl ProviderQuote {
	pub fn provider(&self) -> SwapProvider {
		match self {
			ProviderQuote::ZeroEx(_) => SwapProvider::ZeroEx,
			ProviderQuote::Jupiter(_) => SwapProvider::Jupiter,
			ProviderQuote::Lifi(_) => SwapProvider::Lifi,
			ProviderQuote::Squid(_) => SwapProvider::Squid,
			ProviderQuote::GenericAggregator(_) => SwapProvider::GenericAggregator,
		}
	}
}

/// Error reported by exactly one provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProviderError {
	ZeroEx(ZeroExError),
	Jupiter(JupiterError),
	Lifi(LifiError),
	Squid(SquidError),
	GenericAggregator(GenericAggregatorError),
}

impl ProviderError {
	pub fn provider(&self) -> SwapProvider {
		match self {
			ProviderError::ZeroEx(_) => SwapProvider::ZeroEx,
			ProviderError::Jupiter(_) => SwapProvider::Jupiter,
			ProviderError::Lifi(_) => SwapProvider::Lifi,
			ProviderError::Squid(_) => SwapProvider::Squid,
			ProviderError::GenericAggregator(_) => SwapProvider::GenericAggregator,
		}
	}

	/// The only provider-specific detail interpreted locally
	pub fn is_insufficient_liquidity(&self) -> bool {
		match self {
			ProviderError::ZeroEx(error) => error.is_insufficient_liquidity,
			ProviderError::Jupiter(error) => error.is_insufficient_liquidity,
			ProviderError::Lifi(error) => error.is_insufficient_liquidity(),
			ProviderError::Squid(error) => error.is_insufficient_liquidity(),
			ProviderError::GenericAggregator(error) => {
				error.kind == GenericErrorKind::InsufficientLiquidity
			},
		}
	}

	pub fn message(&self) -> &str {
		match self {
			ProviderError::ZeroEx(error) => &error.reason,
			ProviderError::Jupiter(error) => {
				if error.message.is_empty() {
					&error.error
				} else {
					&error.message
				}
			},
			ProviderError::Lifi(error) => &error.message,
			ProviderError::Squid(error) => &error.message,
			ProviderError::GenericAggregator(error) => &error.message,
		}
	}
}

impl fmt::Display for ProviderError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.provider(), self.message())
	}
}

/// Wire envelope of `generate_quote`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	#[serde(default)]
	pub response: Option<ProviderQuote>,
	#[serde(default)]
	pub error: Option<ProviderError>,
	#[serde(default)]
	pub error_string: Option<String>,
	#[serde(default)]
	pub fees: Option<SwapFees>,
}

/// Exactly one arm of a quote response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOutcome {
	Quote(ProviderQuote),
	Error(ProviderError),
	/// Neither arm populated (aborted or transport-level failure text)
	Empty(Option<String>),
}

impl QuoteResponse {
	pub fn quote(quote: ProviderQuote) -> Self {
		Self {
			response: Some(quote),
			..Default::default()
		}
	}

	pub fn error(error: ProviderError) -> Self {
		Self {
			error: Some(error),
			..Default::default()
		}
	}

	pub fn with_fees(mut self, fees: SwapFees) -> Self {
		self.fees = Some(fees);
		self
	}

	/// Split into the single populated arm and the fee breakdown.
	///
	/// A malformed envelope carrying both arms resolves to the error.
	pub fn into_outcome(self) -> (QuoteOutcome, Option<SwapFees>) {
		let outcome = match (self.response, self.error) {
			(_, Some(error)) => QuoteOutcome::Error(error),
			(Some(quote), None) => QuoteOutcome::Quote(quote),
			(None, None) => QuoteOutcome::Empty(self.error_string),
		};
		(outcome, self.fees)
	}
}
