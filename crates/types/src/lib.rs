//! Swap Types
//!
//! Domain model shared by the swap aggregation crates: decimal amounts,
//! tokens and accounts, normalized quote options, provider payload unions,
//! transaction payloads, allowance state and the collaborator traits.

pub mod adapters;
pub mod allowance;
pub mod amount;
pub mod models;
pub mod providers;
pub mod quotes;
pub mod status;
pub mod transactions;
pub mod validation;

pub use adapters::{
	AdapterError, AdapterResult, AllowanceRpc, ProviderAdapter, RouteContext, SendError,
	SubmittedSwap, SwapBackend, SwapError, TransactionSender, WalletProvider,
};
#[cfg(any(test, feature = "test-util"))]
pub use adapters::{MockAllowanceRpc, MockSwapBackend, MockTransactionSender, MockWalletProvider};
pub use allowance::{AllowanceKey, AllowanceRequirement, AllowanceState, MAX_UINT256_HEX};
pub use amount::{Amount, AmountError};
pub use models::{
	AccountId, CoinType, Network, SecretString, Token, BASE_MAINNET_CHAIN_ID,
	BITCOIN_MAINNET_CHAIN_ID, ETHEREUM_MAINNET_CHAIN_ID, POLYGON_MAINNET_CHAIN_ID,
	SOLANA_MAINNET_CHAIN_ID, ZCASH_MAINNET_CHAIN_ID,
};
pub use quotes::{
	DiscountCode, EditingSide, FeeDisplay, ProviderError, ProviderQuote, QuoteOption,
	QuoteOutcome, QuoteResponse, QuoteSource, QuoteStep, RoutePriority, Routing, SwapFees,
	SwapProvider, SwapQuoteParams, SwapRequest, TokenSide, DEFAULT_SLIPPAGE_PERCENT,
};
pub use status::{SwapStatus, SwapStatusCode, SwapStatusParams};
pub use transactions::{
	EvmTransactionParams, NativeTransfer, ProviderTransaction, SerializedTransaction,
	SolanaSendOptions, SolanaTransactionParams, TokenTransfer, TransactionOutcome,
	TransactionParams, TransactionPayload, TransactionResponse, UtxoTransactionParams,
};
pub use validation::SwapValidationError;
