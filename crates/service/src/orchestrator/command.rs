//! Messages into the coordinator task

use swap_adapters::SpotPrices;
use swap_types::{
	AccountId, AdapterError, AllowanceState, Amount, QuoteResponse, SubmittedSwap, SwapError,
	SwapProvider, SwapQuoteParams, SwapStatus, SwapValidationError, Token, TokenSide,
};
use tokio::sync::oneshot;

use crate::validation::Balances;

/// Result of one `submit()` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The allowance approval went out; submit again to swap
	Approved { tx_hash: String },
	Swapped(SubmittedSwap),
	Failed(SwapError),
	/// Nothing was sent
	Skipped(SubmitSkipped),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitSkipped {
	AlreadySubmitting,
	NoQuote,
	Blocked(SwapValidationError),
}

#[derive(Debug)]
pub(crate) enum Command {
	SetFromAmount(String),
	SetToAmount(String),
	SelectToken {
		side: TokenSide,
		token: Token,
		account: Option<AccountId>,
	},
	ChangeProvider(SwapProvider),
	ChangeSlippage(String),
	SelectQuoteOption(String),
	FlipTokens,
	SetAmountByPercent(Amount),
	SetSpotPrices(SpotPrices),
	Submit(oneshot::Sender<SubmitOutcome>),
	Shutdown,

	QuoteResolved {
		generation: u64,
		params: SwapQuoteParams,
		result: Result<QuoteResponse, AdapterError>,
	},
	AddressResolved {
		unique_key: String,
		result: Result<String, AdapterError>,
	},
	BalancesLoaded {
		token: Token,
		balances: Balances,
	},
	AllowanceChecked {
		generation: u64,
		result: Result<Option<AllowanceState>, SwapError>,
	},
	SubmitFinished {
		outcome: SubmitOutcome,
		reply: oneshot::Sender<SubmitOutcome>,
	},
	BridgeStatus {
		tx_hash: String,
		status: SwapStatus,
	},
}
