//! Registry of provider adapters keyed by provider

use std::{collections::HashMap, sync::Arc};
use swap_types::{ProviderAdapter, SwapProvider};
use tracing::debug;

use crate::providers::{
	AdapterDeps, GenericAggregatorAdapter, JupiterAdapter, LifiAdapter, SquidAdapter,
	ZeroExAdapter,
};

#[derive(Debug, Default, Clone)]
pub struct AdapterRegistry {
	adapters: HashMap<SwapProvider, Arc<dyn ProviderAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Every concrete provider, sharing one set of collaborators
	pub fn with_defaults(deps: AdapterDeps) -> Self {
		Self::with_providers(deps, &SwapProvider::ALL)
	}

	/// Only the listed providers; `Auto` is ignored
	pub fn with_providers(deps: AdapterDeps, providers: &[SwapProvider]) -> Self {
		let mut registry = Self::new();
		for provider in providers {
			let adapter: Arc<dyn ProviderAdapter> = match provider {
				SwapProvider::Auto => continue,
				SwapProvider::ZeroEx => Arc::new(ZeroExAdapter::new(deps.clone())),
				SwapProvider::Jupiter => Arc::new(JupiterAdapter::new(deps.clone())),
				SwapProvider::Lifi => Arc::new(LifiAdapter::new(deps.clone())),
				SwapProvider::Squid => Arc::new(SquidAdapter::new(deps.clone())),
				SwapProvider::GenericAggregator => {
					Arc::new(GenericAggregatorAdapter::new(deps.clone()))
				},
			};
			registry.register(adapter);
		}
		registry
	}

	pub fn register(&mut self, adapter: Arc<dyn ProviderAdapter>) {
		debug!(provider = %adapter.provider(), "Registering provider adapter");
		self.adapters.insert(adapter.provider(), adapter);
	}

	pub fn get(&self, provider: SwapProvider) -> Option<Arc<dyn ProviderAdapter>> {
		self.adapters.get(&provider).cloned()
	}

	pub fn is_enabled(&self, provider: SwapProvider) -> bool {
		self.adapters.contains_key(&provider)
	}

	pub fn providers(&self) -> Vec<SwapProvider> {
		let mut providers: Vec<SwapProvider> = self.adapters.keys().copied().collect();
		providers.sort_by_key(|provider| provider.as_str());
		providers
	}
}
