//! Single-chain EVM aggregator adapter
//!
//! Quotes are indicative; execution always fetches a firm transaction for
//! the same parameters and sends it through the EVM primitive.

use async_trait::async_trait;
use std::fmt;
use swap_types::{
	providers::ZeroExQuote, AllowanceRequirement, AllowanceState, ProviderAdapter,
	ProviderQuote, ProviderTransaction, RouteContext, SubmittedSwap, SwapError, SwapProvider,
	TransactionParams,
};

use super::{mismatch, AdapterDeps};
use crate::allowance::AllowanceGate;

pub struct ZeroExAdapter {
	deps: AdapterDeps,
}

impl fmt::Debug for ZeroExAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ZeroExAdapter").finish_non_exhaustive()
	}
}

impl ZeroExAdapter {
	pub fn new(deps: AdapterDeps) -> Self {
		Self { deps }
	}

	fn quote<'a>(&self, route: &'a RouteContext) -> Result<&'a ZeroExQuote, SwapError> {
		match &route.quote {
			ProviderQuote::ZeroEx(quote) => Ok(quote),
			_ => Err(mismatch(SwapProvider::ZeroEx, route)),
		}
	}
}

#[async_trait]
impl ProviderAdapter for ZeroExAdapter {
	fn provider(&self) -> SwapProvider {
		SwapProvider::ZeroEx
	}

	fn allowance_requirement(
		&self,
		route: &RouteContext,
	) -> Result<Option<AllowanceRequirement>, SwapError> {
		AllowanceGate::requirement(route, self.quote(route)?.spender())
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
		let requirement = self.allowance_requirement(route)?;
		if let Some(requirement) = &requirement {
			AllowanceGate::ensure_sufficient(requirement, allowance)?;
		}

		let params = TransactionParams::ZeroEx(route.params.clone());
		let mut transaction = match self.deps.firm_transaction(&params).await? {
			ProviderTransaction::ZeroEx(transaction) => transaction,
			other => {
				return Err(SwapError::ProviderMismatch {
					expected: SwapProvider::ZeroEx,
					actual: other.provider(),
				})
			},
		};
		if transaction.from.is_empty() {
			transaction.from = route.owner_address()?.to_string();
		}
		if transaction.chain_id.is_empty() {
			transaction.chain_id = route.params.from_chain_id.clone();
		}

		let tx_hash = self
			.deps
			.sender
			.send_evm_transaction(&route.from_account, &transaction)
			.await?;

		Ok(self.deps.finish(route, requirement.as_ref(), tx_hash, None))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::providers::test_support::{deps, route, usdc, OWNER, USDC};
	use swap_types::{
		AllowanceKey, Amount, EvmTransactionParams, MockAllowanceRpc, MockSwapBackend,
		MockTransactionSender, SendError, TransactionResponse, ETHEREUM_MAINNET_CHAIN_ID,
	};

	const SPENDER: &str = "0xdef1c0ded9bec7f1a1670819833240f027b25eff";

	fn zeroex_route() -> RouteContext {
		let quote = ZeroExQuote {
			allowance_target: SPENDER.to_string(),
			..Default::default()
		};
		route(ProviderQuote::ZeroEx(quote), "0", usdc(), ETHEREUM_MAINNET_CHAIN_ID)
	}

	fn sufficient() -> AllowanceState {
		AllowanceState::new(
			AllowanceKey::new(OWNER, SPENDER, USDC, ETHEREUM_MAINNET_CHAIN_ID),
			Amount::from(100_000_000),
			Amount::from(100_000_000),
		)
	}

	fn firm_transaction() -> TransactionResponse {
		TransactionResponse {
			response: Some(ProviderTransaction::ZeroEx(EvmTransactionParams {
				to: SPENDER.to_string(),
				data: "0xd9627aa4".to_string(),
				value: "0".to_string(),
				..Default::default()
			})),
			..Default::default()
		}
	}

	#[test]
	fn test_requirement_uses_allowance_target_and_base_units() {
		let adapter = ZeroExAdapter::new(deps(
			MockSwapBackend::new(),
			MockTransactionSender::new(),
			MockAllowanceRpc::new(),
		));

		let requirement = adapter
			.allowance_requirement(&zeroex_route())
			.unwrap()
			.unwrap();
		assert_eq!(requirement.key.spender, SPENDER);
		assert_eq!(requirement.required, Amount::from(100_000_000));
	}

	#[tokio::test]
	async fn test_exchange_refuses_without_sufficient_snapshot() {
		let mut backend = MockSwapBackend::new();
		backend.expect_generate_transaction().never();
		let adapter = ZeroExAdapter::new(deps(
			backend,
			MockTransactionSender::new(),
			MockAllowanceRpc::new(),
		));

		let error = adapter.exchange(&zeroex_route(), None).await.unwrap_err();
		assert!(matches!(error, SwapError::AllowanceRequired { .. }));
	}

	#[tokio::test]
	async fn test_exchange_sends_firm_transaction() {
		let mut backend = MockSwapBackend::new();
		backend
			.expect_generate_transaction()
			.withf(|params| matches!(params, TransactionParams::ZeroEx(_)))
			.times(1)
			.returning(|_| Ok(firm_transaction()));
		let mut sender = MockTransactionSender::new();
		sender
			.expect_send_evm_transaction()
			.withf(|_, transaction| transaction.from == OWNER && transaction.chain_id == "0x1")
			.times(1)
			.returning(|_, _| Ok("0xswap".to_string()));
		let adapter = ZeroExAdapter::new(deps(backend, sender, MockAllowanceRpc::new()));

		let submitted = adapter
			.exchange(&zeroex_route(), Some(&sufficient()))
			.await
			.unwrap();
		assert_eq!(submitted.tx_hash, "0xswap");
		assert_eq!(submitted.provider, SwapProvider::ZeroEx);
		assert!(!submitted.is_cross_chain());
	}

	#[tokio::test]
	async fn test_rejected_send_is_reported() {
		let mut backend = MockSwapBackend::new();
		backend
			.expect_generate_transaction()
			.returning(|_| Ok(firm_transaction()));
		let mut sender = MockTransactionSender::new();
		sender
			.expect_send_evm_transaction()
			.returning(|_, _| Err(SendError::Rejected));
		let adapter = ZeroExAdapter::new(deps(backend, sender, MockAllowanceRpc::new()));

		let error = adapter
			.exchange(&zeroex_route(), Some(&sufficient()))
			.await
			.unwrap_err();
		assert_eq!(error, SwapError::Send(SendError::Rejected));
	}

	#[tokio::test]
	async fn test_provider_mismatch_is_rejected() {
		let adapter = ZeroExAdapter::new(deps(
			MockSwapBackend::new(),
			MockTransactionSender::new(),
			MockAllowanceRpc::new(),
		));
		let jupiter_route = route(
			ProviderQuote::Jupiter(Default::default()),
			"0",
			usdc(),
			ETHEREUM_MAINNET_CHAIN_ID,
		);

		let error = adapter.exchange(&jupiter_route, None).await.unwrap_err();
		assert_eq!(
			error,
			SwapError::ProviderMismatch {
				expected: SwapProvider::ZeroEx,
				actual: SwapProvider::Jupiter,
			}
		);
	}
}
