//! HTTP client cache for the swap backend
//!
//! Keeps one pooled client per backend configuration so quote refreshes
//! reuse keep-alive connections instead of reconnecting every cycle.

use dashmap::{mapref::entry::Entry, DashMap};
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client, ClientBuilder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swap_types::{AdapterError, AdapterResult, SecretString};
use tracing::{debug, warn};

/// Header carrying the backend API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Connection settings that identify a cached client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	pub base_url: String,
	pub max_idle_per_host: usize,
	pub keep_alive_timeout_ms: u64,
	pub timeout_ms: u64,
	/// Default headers, including the API key when one is configured
	pub headers: Vec<(String, String)>,
}

impl ClientConfig {
	pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
		Self {
			base_url: base_url.into(),
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			timeout_ms,
			headers: vec![
				("User-Agent".to_string(), "swap-aggregator/0.1".to_string()),
				("Content-Type".to_string(), "application/json".to_string()),
				("Accept".to_string(), "application/json".to_string()),
			],
		}
	}

	pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((key.into(), value.into()));
		self
	}

	pub fn with_api_key(self, api_key: Option<&SecretString>) -> Self {
		match api_key {
			Some(key) if !key.is_empty() => self.with_header(API_KEY_HEADER, key.expose_secret()),
			_ => self,
		}
	}
}

#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

impl CachedClient {
	fn new(client: Client) -> Self {
		Self {
			client: Arc::new(client),
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Thread-safe client cache with TTL
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	/// Cache with a 30 minute TTL
	pub fn new() -> Self {
		Self::with_ttl(Duration::from_secs(30 * 60))
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	pub fn get_client(&self, config: &ClientConfig) -> AdapterResult<Arc<Client>> {
		self.clients.remove_if(config, |_, cached| {
			let expired = cached.is_expired(self.ttl);
			if expired {
				warn!(
					"Client cache expired for {} (age: {:?}), will create new client",
					config.base_url,
					cached.created_at.elapsed()
				);
			}
			expired
		});

		if let Some(cached) = self.clients.get(config) {
			debug!(
				"Reusing cached client for {} (age: {:?})",
				config.base_url,
				cached.created_at.elapsed()
			);
			return Ok(cached.client.clone());
		}

		debug!("Creating new client for {}", config.base_url);
		let cached = CachedClient::new(Self::build_client(config)?);
		let client = cached.client.clone();

		match self.clients.entry(config.clone()) {
			Entry::Occupied(entry) => Ok(entry.get().client.clone()),
			Entry::Vacant(entry) => {
				entry.insert(cached);
				Ok(client)
			},
		}
	}

	fn build_client(config: &ClientConfig) -> AdapterResult<Client> {
		let mut header_map = HeaderMap::new();
		for (key, value) in &config.headers {
			if let (Ok(name), Ok(value)) = (
				HeaderName::from_bytes(key.as_bytes()),
				HeaderValue::from_str(value),
			) {
				header_map.insert(name, value);
			}
		}

		ClientBuilder::new()
			.pool_max_idle_per_host(config.max_idle_per_host)
			.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
			.tcp_keepalive(Duration::from_secs(60))
			.timeout(Duration::from_millis(config.timeout_ms))
			.default_headers(header_map)
			.build()
			.map_err(AdapterError::HttpError)
	}

	/// Drop expired clients, returning how many were removed
	pub fn cleanup_expired(&self) -> usize {
		let mut removed = 0;
		self.clients.retain(|_, cached| {
			let expired = cached.is_expired(self.ttl);
			if expired {
				removed += 1;
			}
			!expired
		});
		if removed > 0 {
			debug!("Cleaned up {} expired clients from cache", removed);
		}
		removed
	}

	pub fn clear(&self) {
		self.clients.clear();
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

lazy_static::lazy_static! {
	static ref GLOBAL_CLIENT_CACHE: ClientCache = ClientCache::new();
}

/// Process-wide cache shared by every backend instance
pub fn global_client_cache() -> ClientCache {
	GLOBAL_CLIENT_CACHE.clone()
}
