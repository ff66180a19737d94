//! Swap Adapters
//!
//! Quote normalizers, provider-specific execution adapters, allowance
//! handling and the HTTP swap backend.

pub mod allowance;
pub mod client_cache;
pub mod dispatch;
pub mod http_backend;
pub mod normalizers;
pub mod providers;
pub mod registry;

pub use allowance::AllowanceGate;
pub use client_cache::{global_client_cache, ClientCache, ClientConfig};
pub use http_backend::{HttpBackendConfig, HttpSwapBackend};
pub use normalizers::{normalize_quote, NormalizeContext, SpotPrices};
pub use providers::{
	AdapterDeps, GenericAggregatorAdapter, JupiterAdapter, LifiAdapter, SquidAdapter,
	ZeroExAdapter,
};
pub use registry::AdapterRegistry;
pub use swap_types::{AdapterError, AdapterResult, ProviderAdapter};
