//! Generic multi-chain aggregator adapter
//!
//! Routes either embed a transaction payload or are flagged as needing a
//! firm route; in the latter case the backend is asked again for the same
//! route id and the firm route's payload is executed instead.

use async_trait::async_trait;
use std::fmt;
use swap_types::{
	providers::{GenericAggregatorTransactionParams, GenericRoute},
	AllowanceRequirement, AllowanceState, ProviderAdapter, ProviderQuote, ProviderTransaction,
	RouteContext, SubmittedSwap, SwapError, SwapProvider, TransactionParams, TransactionPayload,
};
use tracing::debug;

use super::{mismatch, AdapterDeps};
use crate::{allowance::AllowanceGate, dispatch::send_payload};

const TRACING_TARGET: &str = "swap_adapters::providers::generic_aggregator";

pub struct GenericAggregatorAdapter {
	deps: AdapterDeps,
}

impl fmt::Debug for GenericAggregatorAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GenericAggregatorAdapter")
			.finish_non_exhaustive()
	}
}

impl GenericAggregatorAdapter {
	pub fn new(deps: AdapterDeps) -> Self {
		Self { deps }
	}

	fn selected_route<'a>(&self, route: &'a RouteContext) -> Result<&'a GenericRoute, SwapError> {
		let quote = match &route.quote {
			ProviderQuote::GenericAggregator(quote) => quote,
			_ => return Err(mismatch(SwapProvider::GenericAggregator, route)),
		};
		quote
			.routes
			.iter()
			.find(|candidate| candidate.id == route.route_id())
			.ok_or_else(|| SwapError::RouteNotFound {
				route_id: route.route_id().to_string(),
			})
	}

	async fn payload(
		&self,
		route: &RouteContext,
		selected: &GenericRoute,
	) -> Result<TransactionPayload, SwapError> {
		if !selected.requires_firm_route {
			return selected
				.transaction_params
				.clone()
				.ok_or(SwapError::MissingTransaction);
		}

		debug!(
			target: TRACING_TARGET,
			route_id = %selected.id,
			"Fetching firm route before execution"
		);
		let params = TransactionParams::GenericAggregator(GenericAggregatorTransactionParams {
			route_id: selected.id.clone(),
			quote_params: route.params.clone(),
		});
		match self.deps.firm_transaction(&params).await? {
			ProviderTransaction::GenericAggregator(firm) => firm
				.transaction_params
				.ok_or(SwapError::MissingTransaction),
			other => Err(SwapError::ProviderMismatch {
				expected: SwapProvider::GenericAggregator,
				actual: other.provider(),
			}),
		}
	}
}

#[async_trait]
impl ProviderAdapter for GenericAggregatorAdapter {
	fn provider(&self) -> SwapProvider {
		SwapProvider::GenericAggregator
	}

	fn allowance_requirement(
		&self,
		route: &RouteContext,
	) -> Result<Option<AllowanceRequirement>, SwapError> {
		AllowanceGate::requirement(route, self.selected_route(route)?.spender())
	}

	async fn check_allowance(
		&self,
		route: &RouteContext,
	) -> Result<Option<AllowanceState>, SwapError> {
		let requirement = self.allowance_requirement(route)?;
		self.deps.check_allowance(requirement).await
	}

	fn cached_allowance(&self, route: &RouteContext) -> Option<AllowanceState> {
		let requirement = self.allowance_requirement(route).ok()?;
		self.deps.cached_allowance(requirement)
	}

	async fn approve(&self, route: &RouteContext) -> Result<String, SwapError> {
		let requirement = self.allowance_requirement(route)?;
		self.deps.approve(route, requirement).await
	}

	async fn exchange(
		&self,
		route: &RouteContext,
		allowance: Option<&AllowanceState>,
	) -> Result<SubmittedSwap, SwapError> {
		route.validate_amounts()?;
		let selected = self.selected_route(route)?;
		let requirement = self.allowance_requirement(route)?;
		if let Some(requirement) = &requirement {
			AllowanceGate::ensure_sufficient(requirement, allowance)?;
		}

		let payload = self.payload(route, selected).await?;
		if payload.coin() != route.from_token.coin {
			return Err(SwapError::InvalidPayload {
				reason: format!(
					"{} payload cannot spend a {} token",
					payload.coin(),
					route.from_token.coin
				),
			});
		}

		let tx_hash = send_payload(self.deps.sender.as_ref(), &route.from_account, &payload).await?;
		let tool = selected
			.steps
			.first()
			.map(|step| step.tool.name.clone())
			.or_else(|| Some(selected.provider.clone()));

		Ok(self.deps.finish(route, requirement.as_ref(), tx_hash, tool))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::providers::test_support::{deps, route};
	use swap_types::{
		providers::GenericAggregatorQuote, AccountId, CoinType, MockAllowanceRpc,
		MockSwapBackend, MockTransactionSender, Token, TransactionResponse,
		UtxoTransactionParams, BITCOIN_MAINNET_CHAIN_ID, ETHEREUM_MAINNET_CHAIN_ID,
	};

	fn btc() -> Token {
		Token::native(CoinType::Btc, BITCOIN_MAINNET_CHAIN_ID, "BTC", 8)
	}

	fn deposit(address: &str) -> TransactionPayload {
		TransactionPayload::Bitcoin(UtxoTransactionParams {
			chain_id: BITCOIN_MAINNET_CHAIN_ID.to_string(),
			from: "bc1qsender".to_string(),
			to: address.to_string(),
			amount: "10000000".to_string(),
		})
	}

	fn generic_route(id: &str, firm: bool, payload: Option<TransactionPayload>) -> GenericRoute {
		GenericRoute {
			id: id.to_string(),
			provider: "NEAR Intents".to_string(),
			source_token: btc(),
			source_amount: "10000000".to_string(),
			destination_token: Token::native(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, "ETH", 18),
			destination_amount: "2950000000000000000".to_string(),
			destination_amount_min: None,
			steps: vec![],
			network_fee: None,
			price_impact: None,
			requires_token_allowance: false,
			requires_firm_route: firm,
			allowance_target: None,
			deposit_address: None,
			transaction_params: payload,
			estimated_time_secs: Some(900),
			slippage_percentage: "0.5".to_string(),
		}
	}

	fn context(selected: GenericRoute) -> RouteContext {
		let quote = ProviderQuote::GenericAggregator(GenericAggregatorQuote {
			routes: vec![selected.clone()],
		});
		let mut context = route(quote, &selected.id, btc(), ETHEREUM_MAINNET_CHAIN_ID);
		context.from_account = AccountId::new(CoinType::Btc, "bc1qsender");
		context
	}

	#[tokio::test]
	async fn test_indicative_route_uses_embedded_payload() {
		let mut backend = MockSwapBackend::new();
		backend.expect_generate_transaction().never();
		let mut sender = MockTransactionSender::new();
		sender
			.expect_send_utxo_transaction()
			.withf(|_, transfer| transfer.to == "bc1qembedded")
			.times(1)
			.returning(|_, _| Ok("btc-tx".to_string()));
		let adapter = GenericAggregatorAdapter::new(deps(backend, sender, MockAllowanceRpc::new()));

		let route = context(generic_route("r1", false, Some(deposit("bc1qembedded"))));
		let submitted = adapter.exchange(&route, None).await.unwrap();
		assert_eq!(submitted.tx_hash, "btc-tx");
		assert_eq!(submitted.tool.as_deref(), Some("NEAR Intents"));
	}

	#[tokio::test]
	async fn test_firm_route_payload_replaces_indicative_one() {
		let mut backend = MockSwapBackend::new();
		backend
			.expect_generate_transaction()
			.withf(|params| {
				matches!(params, TransactionParams::GenericAggregator(p) if p.route_id == "r1")
			})
			.times(1)
			.returning(|_| {
				Ok(TransactionResponse {
					response: Some(ProviderTransaction::GenericAggregator(generic_route(
						"r1",
						false,
						Some(deposit("bc1qfirm")),
					))),
					..Default::default()
				})
			});
		let mut sender = MockTransactionSender::new();
		sender
			.expect_send_utxo_transaction()
			.withf(|_, transfer| transfer.to == "bc1qfirm")
			.times(1)
			.returning(|_, _| Ok("btc-firm".to_string()));
		let adapter = GenericAggregatorAdapter::new(deps(backend, sender, MockAllowanceRpc::new()));

		let route = context(generic_route("r1", true, Some(deposit("bc1qindicative"))));
		let submitted = adapter.exchange(&route, None).await.unwrap();
		assert_eq!(submitted.tx_hash, "btc-firm");
		assert!(submitted.is_cross_chain());
	}

	#[tokio::test]
	async fn test_missing_payload() {
		let adapter = GenericAggregatorAdapter::new(deps(
			MockSwapBackend::new(),
			MockTransactionSender::new(),
			MockAllowanceRpc::new(),
		));

		let route = context(generic_route("r1", false, None));
		let error = adapter.exchange(&route, None).await.unwrap_err();
		assert_eq!(error, SwapError::MissingTransaction);
	}
}
