//! Allowance checks and approvals for value-approval tokens
//!
//! The gate keeps the last allowance read per (owner, spender, token, chain)
//! so a route can be re-selected without a chain round trip. Approvals and
//! successful swaps invalidate the entry; the next check reads from chain.

use dashmap::DashMap;
use std::{fmt, sync::Arc};
use swap_types::{
	AccountId, AllowanceKey, AllowanceRequirement, AllowanceRpc, AllowanceState, Amount,
	RouteContext, SwapError, MAX_UINT256_HEX,
};
use tracing::{debug, info};

const TRACING_TARGET: &str = "swap_adapters::allowance";

#[derive(Clone)]
pub struct AllowanceGate {
	rpc: Arc<dyn AllowanceRpc>,
	cache: Arc<DashMap<AllowanceKey, Amount>>,
}

impl fmt::Debug for AllowanceGate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AllowanceGate")
			.field("cached_entries", &self.cache.len())
			.finish()
	}
}

impl AllowanceGate {
	pub fn new(rpc: Arc<dyn AllowanceRpc>) -> Self {
		Self {
			rpc,
			cache: Arc::new(DashMap::new()),
		}
	}

	/// Allowance a route needs for `spender`.
	///
	/// Only EVM fungible tokens have an approval concept; native assets and
	/// other coin families always yield `None`, as does a missing spender.
	pub fn requirement(
		route: &RouteContext,
		spender: Option<&str>,
	) -> Result<Option<AllowanceRequirement>, SwapError> {
		let spender = match spender {
			Some(spender) if route.from_token.requires_approval() => spender,
			_ => return Ok(None),
		};
		let owner = route.owner_address()?;

		Ok(Some(AllowanceRequirement {
			key: AllowanceKey::new(
				owner,
				spender,
				route.from_token.contract_address.as_str(),
				route.from_token.chain_id.as_str(),
			),
			required: route.required_base_units(),
		}))
	}

	/// Read the current allowance from chain and cache it
	pub async fn check(
		&self,
		requirement: &AllowanceRequirement,
	) -> Result<AllowanceState, SwapError> {
		let key = &requirement.key;
		let current = self
			.rpc
			.check_token_allowance(&key.owner, &key.spender, &key.token_contract, &key.chain_id)
			.await?;

		debug!(
			target: TRACING_TARGET,
			spender = %key.spender,
			token = %key.token_contract,
			current = %current,
			required = %requirement.required,
			"Allowance read from chain"
		);

		self.cache.insert(key.clone(), current.clone());
		Ok(AllowanceState::new(key.clone(), current, requirement.required.clone()))
	}

	pub fn cached(&self, requirement: &AllowanceRequirement) -> Option<AllowanceState> {
		self.cache.get(&requirement.key).map(|entry| {
			AllowanceState::new(
				requirement.key.clone(),
				entry.value().clone(),
				requirement.required.clone(),
			)
		})
	}

	/// Approve the maximum allowance and drop the cached value
	pub async fn approve(
		&self,
		owner: &AccountId,
		requirement: &AllowanceRequirement,
	) -> Result<String, SwapError> {
		let key = &requirement.key;
		let tx_hash = self
			.rpc
			.approve_token_allowance(
				owner,
				&key.spender,
				&key.token_contract,
				&key.chain_id,
				MAX_UINT256_HEX,
			)
			.await?;

		info!(
			target: TRACING_TARGET,
			spender = %key.spender,
			token = %key.token_contract,
			tx_hash = %tx_hash,
			"Token allowance approved"
		);

		self.invalidate(key);
		Ok(tx_hash)
	}

	pub fn invalidate(&self, key: &AllowanceKey) {
		self.cache.remove(key);
	}

	/// Refuse to proceed unless the snapshot covers the requirement
	pub fn ensure_sufficient(
		requirement: &AllowanceRequirement,
		snapshot: Option<&AllowanceState>,
	) -> Result<(), SwapError> {
		let covered = snapshot
			.filter(|state| state.key == requirement.key)
			.map(|state| state.current_allowance >= requirement.required)
			.unwrap_or(false);

		if covered {
			Ok(())
		} else {
			Err(SwapError::AllowanceRequired {
				spender: requirement.key.spender.clone(),
			})
		}
	}
}
