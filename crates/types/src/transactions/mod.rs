//! Transaction generation requests/responses and chain payloads

pub mod payloads;

use serde::{Deserialize, Serialize};

use crate::{
	providers::{
		GenericAggregatorTransactionParams, GenericRoute, JupiterTransaction,
		JupiterTransactionParams, LifiStep, LifiTransaction, SquidTransaction,
	},
	quotes::{ProviderError, SwapProvider, SwapQuoteParams},
};

pub use payloads::{
	EvmTransactionParams, NativeTransfer, SerializedTransaction, SolanaSendOptions,
	SolanaTransactionParams, TokenTransfer, TransactionPayload, UtxoTransactionParams,
};

/// Provider-specific input of `generate_transaction`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransactionParams {
	ZeroEx(SwapQuoteParams),
	Jupiter(JupiterTransactionParams),
	Lifi(LifiStep),
	Squid(SwapQuoteParams),
	GenericAggregator(GenericAggregatorTransactionParams),
}

impl TransactionParams {
	pub fn provider(&self) -> SwapProvider {
		match self {
			TransactionParams::ZeroEx(_) => SwapProvider::ZeroEx,
			TransactionParams::Jupiter(_) => SwapProvider::Jupiter,
			TransactionParams::Lifi(_) => SwapProvider::Lifi,
			TransactionParams::Squid(_) => SwapProvider::Squid,
			TransactionParams::GenericAggregator(_) => SwapProvider::GenericAggregator,
		}
	}
}

/// Provider-specific output of `generate_transaction`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProviderTransaction {
	ZeroEx(EvmTransactionParams),
	Jupiter(JupiterTransaction),
	Lifi(LifiTransaction),
	Squid(SquidTransaction),
	/// Firm route with its payload populated
	GenericAggregator(GenericRoute),
}

impl ProviderTransaction {
	pub fn provider(&self) -> SwapProvider {
		match self {
			ProviderTransaction::ZeroEx(_) => SwapProvider::ZeroEx,
			ProviderTransaction::Jupiter(_) => SwapProvider::Jupiter,
			ProviderTransaction::Lifi(_) => SwapProvider::Lifi,
			ProviderTransaction::Squid(_) => SwapProvider::Squid,
			ProviderTransaction::GenericAggregator(_) => SwapProvider::GenericAggregator,
		}
	}
}

/// Wire envelope of `generate_transaction`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
	#[serde(default)]
	pub response: Option<ProviderTransaction>,
	#[serde(default)]
	pub error: Option<ProviderError>,
	#[serde(default)]
	pub error_string: Option<String>,
}

/// Exactly one arm of a transaction response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionOutcome {
	Transaction(ProviderTransaction),
	Error(ProviderError),
	/// Nothing usable; carries the backend's error string when present
	Empty(Option<String>),
}

impl TransactionResponse {
	/// Collapse the envelope; a reported error wins over a response
	pub fn into_outcome(self) -> TransactionOutcome {
		match (self.response, self.error) {
			(_, Some(error)) => TransactionOutcome::Error(error),
			(Some(transaction), None) => TransactionOutcome::Transaction(transaction),
			(None, None) => TransactionOutcome::Empty(self.error_string),
		}
	}
}
