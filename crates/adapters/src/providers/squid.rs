//! Cross-chain EVM aggregator adapter

use async_trait::async_trait;
use std::fmt;
use swap_types::{
	providers::SquidQuote, AllowanceRequirement, AllowanceState, ProviderAdapter,
	ProviderQuote, ProviderTransaction, RouteContext, SubmittedSwap, SwapError, SwapProvider,
	TransactionParams,
};

use super::{mismatch, AdapterDeps};
use crate::allowance::AllowanceGate;

pub struct SquidAdapter {
	deps: AdapterDeps,
}

impl fmt::Debug for SquidAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SquidAdapter").finish_non_exhaustive()
	}
}

impl SquidAdapter {
	pub fn new(deps: AdapterDeps) -> Self {
		Self { deps }
	}

	fn quote<'a>(&self, route: &'a RouteContext) -> Result<&'a SquidQuote, SwapError> {
		match &route.quote {
			ProviderQuote::Squid(quote) => Ok(quote),
			_ => Err(mismatch(SwapProvider::Squid, route)),
		}
	}
}

#[async_trait]
impl ProviderAdapter for SquidAdapter {
	fn provider(&self) -> SwapProvider {
		SwapProvider::Squid
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
		let quote = self.quote(route)?;
		let requirement = self.allowance_requirement(route)?;
		if let Some(requirement) = &requirement {
			AllowanceGate::ensure_sufficient(requirement, allowance)?;
		}

		let params = TransactionParams::Squid(route.params.clone());
		let transaction = match self.deps.firm_transaction(&params).await? {
			ProviderTransaction::Squid(transaction) => transaction.evm_transaction,
			other => {
				return Err(SwapError::ProviderMismatch {
					expected: SwapProvider::Squid,
					actual: other.provider(),
				})
			},
		};

		let tx_hash = self
			.deps
			.sender
			.send_evm_transaction(&route.from_account, &transaction)
			.await?;

		// Status tracking is keyed by the bridging leg
		let tool = quote
			.actions
			.iter()
			.find(|action| action.from_chain != action.to_chain)
			.or_else(|| quote.actions.first())
			.map(|action| action.provider.clone());

		Ok(self.deps.finish(route, requirement.as_ref(), tx_hash, tool))
	}
}
