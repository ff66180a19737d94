//! Provider adapters
//!
//! One adapter per provider family. Each knows where its route's spender
//! lives, how to obtain an executable transaction from the backend and which
//! wallet primitive sends it.

pub mod generic_aggregator;
pub mod jupiter;
pub mod lifi;
pub mod squid;
pub mod zeroex;

pub use generic_aggregator::GenericAggregatorAdapter;
pub use jupiter::JupiterAdapter;
pub use lifi::LifiAdapter;
pub use squid::SquidAdapter;
pub use zeroex::ZeroExAdapter;

use std::sync::Arc;
use swap_types::{
	AllowanceRequirement, AllowanceRpc, AllowanceState, ProviderTransaction, RouteContext,
	SubmittedSwap, SwapBackend, SwapError, SwapProvider, TransactionOutcome, TransactionParams,
	TransactionSender,
};
use tracing::{debug, warn};

use crate::allowance::AllowanceGate;

const TRACING_TARGET: &str = "swap_adapters::providers";

/// Collaborators shared by every adapter
#[derive(Clone)]
pub struct AdapterDeps {
	pub backend: Arc<dyn SwapBackend>,
	pub sender: Arc<dyn TransactionSender>,
	pub allowance: AllowanceGate,
}

impl AdapterDeps {
	pub fn new(
		backend: Arc<dyn SwapBackend>,
		sender: Arc<dyn TransactionSender>,
		allowance_rpc: Arc<dyn AllowanceRpc>,
	) -> Self {
		Self {
			backend,
			sender,
			allowance: AllowanceGate::new(allowance_rpc),
		}
	}

	pub(crate) async fn check_allowance(
		&self,
		requirement: Option<AllowanceRequirement>,
	) -> Result<Option<AllowanceState>, SwapError> {
		match requirement {
			Some(requirement) => self.allowance.check(&requirement).await.map(Some),
			None => Ok(None),
		}
	}

	pub(crate) fn cached_allowance(
		&self,
		requirement: Option<AllowanceRequirement>,
	) -> Option<AllowanceState> {
		requirement.and_then(|requirement| self.allowance.cached(&requirement))
	}

	pub(crate) async fn approve(
		&self,
		route: &RouteContext,
		requirement: Option<AllowanceRequirement>,
	) -> Result<String, SwapError> {
		let requirement = requirement.ok_or_else(|| SwapError::Precondition {
			reason: "route does not require an allowance".to_string(),
		})?;
		self.allowance.approve(&route.from_account, &requirement).await
	}

	/// Ask the backend for an executable transaction
	pub(crate) async fn firm_transaction(
		&self,
		params: &TransactionParams,
	) -> Result<ProviderTransaction, SwapError> {
		debug!(
			target: TRACING_TARGET,
			provider = %params.provider(),
			"Requesting executable transaction"
		);

		match self.backend.generate_transaction(params).await?.into_outcome() {
			TransactionOutcome::Transaction(transaction) => {
				if transaction.provider() != params.provider() {
					return Err(SwapError::ProviderMismatch {
						expected: params.provider(),
						actual: transaction.provider(),
					});
				}
				Ok(transaction)
			},
			TransactionOutcome::Error(error) => {
				warn!(
					target: TRACING_TARGET,
					provider = %params.provider(),
					error = %error,
					"Provider refused to build transaction"
				);
				Err(SwapError::Provider(error))
			},
			TransactionOutcome::Empty(reason) => {
				if let Some(reason) = reason {
					warn!(target: TRACING_TARGET, reason = %reason, "Empty transaction response");
				}
				Err(SwapError::MissingTransaction)
			},
		}
	}

	/// Bookkeeping after a swap went out
	pub(crate) fn finish(
		&self,
		route: &RouteContext,
		requirement: Option<&AllowanceRequirement>,
		tx_hash: String,
		tool: Option<String>,
	) -> SubmittedSwap {
		if let Some(requirement) = requirement {
			self.allowance.invalidate(&requirement.key);
		}

		let submitted = SubmittedSwap {
			provider: route.option.provider,
			route_id: route.route_id().to_string(),
			tx_hash,
			from_chain_id: route.params.from_chain_id.clone(),
			to_chain_id: route.params.to_chain_id.clone(),
			tool,
		};

		debug!(
			target: TRACING_TARGET,
			provider = %submitted.provider,
			route_id = %submitted.route_id,
			tx_hash = %submitted.tx_hash,
			"Swap transaction submitted"
		);
		submitted
	}
}

/// Fail fast when a route from one provider reaches another's adapter
pub(crate) fn mismatch(expected: SwapProvider, route: &RouteContext) -> SwapError {
	SwapError::ProviderMismatch {
		expected,
		actual: route.quote.provider(),
	}
}

#[cfg(test)]
pub(crate) mod test_support {
	use std::sync::Arc;
	use swap_types::{
		AccountId, Amount, CoinType, MockAllowanceRpc, MockSwapBackend, MockTransactionSender,
		ProviderQuote, QuoteOption, RoutePriority, Routing, RouteContext, SwapProvider,
		SwapQuoteParams, Token, ETHEREUM_MAINNET_CHAIN_ID,
	};

	use super::AdapterDeps;

	pub const OWNER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
	pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

	pub fn deps(
		backend: MockSwapBackend,
		sender: MockTransactionSender,
		rpc: MockAllowanceRpc,
	) -> AdapterDeps {
		AdapterDeps::new(Arc::new(backend), Arc::new(sender), Arc::new(rpc))
	}

	pub fn usdc() -> Token {
		Token::new(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, USDC, "USDC", 6)
	}

	pub fn eth() -> Token {
		Token::native(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, "ETH", 18)
	}

	pub fn params(provider: SwapProvider, from_token: &Token, to_chain_id: &str) -> SwapQuoteParams {
		let account = AccountId::new(CoinType::Eth, OWNER);
		SwapQuoteParams {
			from_account_id: account.clone(),
			from_chain_id: from_token.chain_id.clone(),
			from_token: from_token.contract_address.clone(),
			from_amount: "100".to_string(),
			to_account_id: account,
			to_chain_id: to_chain_id.to_string(),
			to_token: String::new(),
			to_amount: String::new(),
			slippage_percentage: "0.5".to_string(),
			route_priority: RoutePriority::Cheapest,
			provider,
		}
	}

	/// Route context selling 100 `from_token` for 0.05 of the native asset
	pub fn route(quote: ProviderQuote, id: &str, from_token: Token, to_chain_id: &str) -> RouteContext {
		let provider = quote.provider();
		let option = QuoteOption {
			id: id.to_string(),
			provider,
			from_token: from_token.clone(),
			to_token: eth(),
			from_amount: Amount::from(100),
			to_amount: Amount::new("0.05"),
			minimum_to_amount: None,
			rate: Amount::new("0.0005"),
			price_impact_percent: Amount::undefined(),
			network_fee: Amount::zero(),
			network_fee_fiat: Amount::undefined(),
			routing: Routing::Flow,
			sources: vec![],
			steps: vec![],
			execution_duration_secs: None,
		};
		RouteContext {
			quote,
			option,
			params: params(provider, &from_token, to_chain_id),
			from_account: AccountId::new(from_token.coin, OWNER),
			from_token,
		}
	}
}
