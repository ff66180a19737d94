//! Routed multi-step aggregator adapter
//!
//! A quote carries several routes; the selected option id names one of
//! them. Approval is scoped to the route's first step, and execution asks
//! the backend to build that first step.

use async_trait::async_trait;
use std::fmt;
use swap_types::{
	providers::{LifiRoute, LifiTransaction},
	AllowanceRequirement, AllowanceState, ProviderAdapter, ProviderQuote, ProviderTransaction,
	RouteContext, SerializedTransaction, SubmittedSwap, SwapError, SwapProvider,
	TransactionParams,
};

use super::{mismatch, AdapterDeps};
use crate::{allowance::AllowanceGate, dispatch::ensure_base64};

pub struct LifiAdapter {
	deps: AdapterDeps,
}

impl fmt::Debug for LifiAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LifiAdapter").finish_non_exhaustive()
	}
}

impl LifiAdapter {
	pub fn new(deps: AdapterDeps) -> Self {
		Self { deps }
	}

	fn selected_route<'a>(&self, route: &'a RouteContext) -> Result<&'a LifiRoute, SwapError> {
		let quote = match &route.quote {
			ProviderQuote::Lifi(quote) => quote,
			_ => return Err(mismatch(SwapProvider::Lifi, route)),
		};
		quote
			.routes
			.iter()
			.find(|candidate| candidate.id == route.route_id())
			.ok_or_else(|| SwapError::RouteNotFound {
				route_id: route.route_id().to_string(),
			})
	}
}

#[async_trait]
impl ProviderAdapter for LifiAdapter {
	fn provider(&self) -> SwapProvider {
		SwapProvider::Lifi
	}

	fn allowance_requirement(
		&self,
		route: &RouteContext,
	) -> Result<Option<AllowanceRequirement>, SwapError> {
		AllowanceGate::requirement(route, self.selected_route(route)?.approval_address())
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

		let first_step = selected
			.steps
			.first()
			.ok_or(SwapError::MissingTransaction)?;
		let params = TransactionParams::Lifi(first_step.clone());

		let transaction = match self.deps.firm_transaction(&params).await? {
			ProviderTransaction::Lifi(transaction) => transaction,
			other => {
				return Err(SwapError::ProviderMismatch {
					expected: SwapProvider::Lifi,
					actual: other.provider(),
				})
			},
		};

		let tx_hash = match transaction {
			LifiTransaction::EvmTransaction(transaction) => {
				self.deps
					.sender
					.send_evm_transaction(&route.from_account, &transaction)
					.await?
			},
			LifiTransaction::SolanaTransaction(encoded) => {
				ensure_base64(&encoded)?;
				let transaction = SerializedTransaction {
					chain_id: route.params.from_chain_id.clone(),
					encoded_transaction: encoded.trim().to_string(),
					send_options: None,
				};
				self.deps
					.sender
					.send_pre_serialized_transaction(&route.from_account, &transaction)
					.await?
			},
		};

		Ok(self.deps.finish(
			route,
			requirement.as_ref(),
			tx_hash,
			Some(first_step.tool.clone()),
		))
	}
}
