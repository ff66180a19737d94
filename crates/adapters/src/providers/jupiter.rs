//! Solana aggregator adapter
//!
//! SPL tokens have no approval step. The backend returns a base64
//! versioned transaction which the wallet signs and sends as-is.

use async_trait::async_trait;
use std::fmt;
use swap_types::{
	providers::{JupiterQuote, JupiterTransactionParams},
	AllowanceRequirement, AllowanceState, ProviderAdapter, ProviderQuote, ProviderTransaction,
	RouteContext, SerializedTransaction, SubmittedSwap, SwapError, SwapProvider,
	TransactionParams,
};

use super::{mismatch, AdapterDeps};
use crate::dispatch::{ensure_base64, jupiter_send_options};

pub struct JupiterAdapter {
	deps: AdapterDeps,
}

impl fmt::Debug for JupiterAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("JupiterAdapter").finish_non_exhaustive()
	}
}

impl JupiterAdapter {
	pub fn new(deps: AdapterDeps) -> Self {
		Self { deps }
	}

	fn quote<'a>(&self, route: &'a RouteContext) -> Result<&'a JupiterQuote, SwapError> {
		match &route.quote {
			ProviderQuote::Jupiter(quote) => Ok(quote),
			_ => Err(mismatch(SwapProvider::Jupiter, route)),
		}
	}
}

#[async_trait]
impl ProviderAdapter for JupiterAdapter {
	fn provider(&self) -> SwapProvider {
		SwapProvider::Jupiter
	}

	fn allowance_requirement(
		&self,
		_route: &RouteContext,
	) -> Result<Option<AllowanceRequirement>, SwapError> {
		Ok(None)
	}

	async fn check_allowance(
		&self,
		_route: &RouteContext,
	) -> Result<Option<AllowanceState>, SwapError> {
		Ok(None)
	}

	fn cached_allowance(&self, _route: &RouteContext) -> Option<AllowanceState> {
		None
	}

	async fn approve(&self, _route: &RouteContext) -> Result<String, SwapError> {
		Err(SwapError::Precondition {
			reason: "Solana swaps do not use token allowances".to_string(),
		})
	}

	async fn exchange(
		&self,
		route: &RouteContext,
		_allowance: Option<&AllowanceState>,
	) -> Result<SubmittedSwap, SwapError> {
		route.validate_amounts()?;
		let quote = self.quote(route)?;

		let params = TransactionParams::Jupiter(JupiterTransactionParams {
			quote: quote.clone(),
			chain_id: route.params.from_chain_id.clone(),
			user_public_key: route.owner_address()?.to_string(),
		});
		let encoded = match self.deps.firm_transaction(&params).await? {
			ProviderTransaction::Jupiter(transaction) => transaction.swap_transaction,
			other => {
				return Err(SwapError::ProviderMismatch {
					expected: SwapProvider::Jupiter,
					actual: other.provider(),
				})
			},
		};
		ensure_base64(&encoded)?;

		let transaction = SerializedTransaction {
			chain_id: route.params.from_chain_id.clone(),
			encoded_transaction: encoded.trim().to_string(),
			send_options: Some(jupiter_send_options()),
		};
		let tx_hash = self
			.deps
			.sender
			.send_pre_serialized_transaction(&route.from_account, &transaction)
			.await?;

		Ok(self.deps.finish(route, None, tx_hash, None))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::providers::test_support::{deps, route};
	use swap_types::{
		providers::JupiterTransaction, CoinType, MockAllowanceRpc, MockSwapBackend,
		MockTransactionSender, Token, TransactionResponse, SOLANA_MAINNET_CHAIN_ID,
	};

	fn sol_route() -> RouteContext {
		let quote = JupiterQuote {
			input_mint: "So11111111111111111111111111111111111111112".to_string(),
			in_amount: "100000000000".to_string(),
			..Default::default()
		};
		let sol = Token::native(CoinType::Sol, SOLANA_MAINNET_CHAIN_ID, "SOL", 9);
		let mut route = route(ProviderQuote::Jupiter(quote), "0", sol, SOLANA_MAINNET_CHAIN_ID);
		route.from_account = swap_types::AccountId::new(
			CoinType::Sol,
			"7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
		);
		route
	}

	fn backend_returning(encoded: &'static str) -> MockSwapBackend {
		let mut backend = MockSwapBackend::new();
		backend
			.expect_generate_transaction()
			.withf(|params| {
				matches!(params, TransactionParams::Jupiter(p)
					if p.user_public_key == "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")
			})
			.times(1)
			.returning(move |_| {
				Ok(TransactionResponse {
					response: Some(ProviderTransaction::Jupiter(JupiterTransaction {
						swap_transaction: encoded.to_string(),
					})),
					..Default::default()
				})
			});
		backend
	}

	#[tokio::test]
	async fn test_exchange_sends_pre_serialized_with_send_options() {
		let mut sender = MockTransactionSender::new();
		sender
			.expect_send_pre_serialized_transaction()
			.withf(|_, transaction| {
				transaction.encoded_transaction == "AQIDBA=="
					&& transaction.send_options == Some(jupiter_send_options())
			})
			.times(1)
			.returning(|_, _| Ok("5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnb".to_string()));
		let adapter = JupiterAdapter::new(deps(
			backend_returning("AQIDBA=="),
			sender,
			MockAllowanceRpc::new(),
		));

		let submitted = adapter.exchange(&sol_route(), None).await.unwrap();
		assert_eq!(submitted.provider, SwapProvider::Jupiter);
		assert!(adapter.allowance_requirement(&sol_route()).unwrap().is_none());
	}

	#[tokio::test]
	async fn test_invalid_base64_never_reaches_wallet() {
		let mut sender = MockTransactionSender::new();
		sender.expect_send_pre_serialized_transaction().never();
		let adapter = JupiterAdapter::new(deps(
			backend_returning("%%%not-base64%%%"),
			sender,
			MockAllowanceRpc::new(),
		));

		let error = adapter.exchange(&sol_route(), None).await.unwrap_err();
		assert!(matches!(error, SwapError::InvalidPayload { .. }));
	}
}
