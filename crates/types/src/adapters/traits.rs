//! Collaborator traits at the edges of the swap core

use async_trait::async_trait;
use std::fmt::Debug;

use super::{AdapterResult, RouteContext, SendError, SubmittedSwap, SwapError};
use crate::{
	allowance::{AllowanceRequirement, AllowanceState},
	models::{AccountId, CoinType, Network, Token},
	quotes::{QuoteResponse, SwapProvider, SwapQuoteParams},
	status::{SwapStatus, SwapStatusParams},
	transactions::{
		EvmTransactionParams, NativeTransfer, SerializedTransaction, TokenTransfer,
		TransactionParams, TransactionResponse, UtxoTransactionParams,
	},
	Amount,
};

/// Remote swap backend: quotes, firm transactions and settlement status
///
/// The wire format belongs to the backend; implementations only need to
/// return the provider-tagged envelopes.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait SwapBackend: Send + Sync {
	async fn generate_quote(&self, params: &SwapQuoteParams) -> AdapterResult<QuoteResponse>;

	async fn generate_transaction(
		&self,
		params: &TransactionParams,
	) -> AdapterResult<TransactionResponse>;

	async fn get_swap_status(&self, params: &SwapStatusParams) -> AdapterResult<SwapStatus>;
}

/// Wallet send primitives; signing happens behind this boundary.
///
/// Each call returns the transaction hash.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait TransactionSender: Send + Sync {
	async fn send_evm_transaction(
		&self,
		from: &AccountId,
		transaction: &EvmTransactionParams,
	) -> Result<String, SendError>;

	async fn send_native_transfer(
		&self,
		from: &AccountId,
		transfer: &NativeTransfer,
	) -> Result<String, SendError>;

	async fn send_token_transfer(
		&self,
		from: &AccountId,
		transfer: &TokenTransfer,
	) -> Result<String, SendError>;

	async fn send_pre_serialized_transaction(
		&self,
		from: &AccountId,
		transaction: &SerializedTransaction,
	) -> Result<String, SendError>;

	async fn send_utxo_transaction(
		&self,
		from: &AccountId,
		transfer: &UtxoTransactionParams,
	) -> Result<String, SendError>;
}

/// ERC-20 style allowance reads and approvals
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait AllowanceRpc: Send + Sync {
	/// Current allowance in base units
	async fn check_token_allowance(
		&self,
		owner: &str,
		spender: &str,
		token_contract: &str,
		chain_id: &str,
	) -> AdapterResult<Amount>;

	/// Submit an approval transaction; `amount` is a `0x` hex base-unit value
	async fn approve_token_allowance(
		&self,
		owner: &AccountId,
		spender: &str,
		token_contract: &str,
		chain_id: &str,
		amount: &str,
	) -> Result<String, SendError>;
}

/// Read-only wallet services the orchestrator depends on
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
	/// Resolve an account whose address is not known yet
	async fn resolve_address(&self, account: &AccountId) -> AdapterResult<String>;

	/// Balance in display units
	async fn balance(&self, account: &AccountId, token: &Token) -> AdapterResult<Amount>;

	fn network(&self, coin: CoinType, chain_id: &str) -> Option<Network>;
}

/// Provider-specific execution path for a selected route
#[async_trait]
pub trait ProviderAdapter: Send + Sync + Debug {
	fn provider(&self) -> SwapProvider;

	/// Allowance the route needs; `Ok(None)` when no approval concept applies
	fn allowance_requirement(
		&self,
		route: &RouteContext,
	) -> Result<Option<AllowanceRequirement>, SwapError>;

	/// Read the allowance from chain and refresh this adapter's cache
	async fn check_allowance(
		&self,
		route: &RouteContext,
	) -> Result<Option<AllowanceState>, SwapError>;

	/// Cached allowance for the route, without a network call
	fn cached_allowance(&self, route: &RouteContext) -> Option<AllowanceState>;

	/// Approve the maximum allowance for the route's spender
	async fn approve(&self, route: &RouteContext) -> Result<String, SwapError>;

	/// Build and submit the swap transaction.
	///
	/// `allowance` is the state captured when submit started; value-approval
	/// routes refuse to proceed unless it is sufficient.
	async fn exchange(
		&self,
		route: &RouteContext,
		allowance: Option<&AllowanceState>,
	) -> Result<SubmittedSwap, SwapError>;
}
