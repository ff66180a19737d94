//! HTTP implementation of the swap backend
//!
//! Three JSON POST endpoints under the configured base URL. Responses are
//! the provider-tagged envelopes; provider errors travel inside a 2xx body
//! and only transport failures become [`AdapterError`]s.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::HashMap, fmt};
use swap_types::{
	AdapterError, AdapterResult, QuoteResponse, SecretString, SwapBackend, SwapQuoteParams,
	SwapStatus, SwapStatusParams, TransactionParams, TransactionResponse,
};
use tracing::{debug, warn};
use url::Url;

use crate::client_cache::{global_client_cache, ClientCache, ClientConfig};

const TRACING_TARGET: &str = "swap_adapters::http_backend";

const QUOTE_PATH: &str = "swap/v1/quote";
const TRANSACTION_PATH: &str = "swap/v1/transaction";
const STATUS_PATH: &str = "swap/v1/status";

#[derive(Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
	pub base_url: String,
	pub timeout_ms: u64,
	pub headers: HashMap<String, String>,
	pub api_key: Option<SecretString>,
}

impl fmt::Debug for HttpBackendConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpBackendConfig")
			.field("base_url", &self.base_url)
			.field("timeout_ms", &self.timeout_ms)
			.field("headers", &self.headers.keys().collect::<Vec<_>>())
			.field("api_key", &self.api_key)
			.finish()
	}
}

impl HttpBackendConfig {
	pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
		Self {
			base_url: base_url.into(),
			timeout_ms,
			headers: HashMap::new(),
			api_key: None,
		}
	}

	fn client_config(&self) -> ClientConfig {
		let mut headers: Vec<_> = self.headers.iter().collect();
		headers.sort();
		headers
			.into_iter()
			.fold(ClientConfig::new(&self.base_url, self.timeout_ms), |config, (key, value)| {
				config.with_header(key.as_str(), value.as_str())
			})
			.with_api_key(self.api_key.as_ref())
	}
}

#[derive(Debug, Clone)]
pub struct HttpSwapBackend {
	config: HttpBackendConfig,
	cache: ClientCache,
}

impl HttpSwapBackend {
	pub fn new(config: HttpBackendConfig) -> AdapterResult<Self> {
		Self::with_cache(config, global_client_cache())
	}

	pub fn with_cache(config: HttpBackendConfig, cache: ClientCache) -> AdapterResult<Self> {
		// Fail on a bad base URL at construction rather than on the first quote
		build_url(&config.base_url, QUOTE_PATH)?;
		Ok(Self { config, cache })
	}

	async fn post<B, R>(&self, path: &str, body: &B) -> AdapterResult<R>
	where
		B: Serialize + Sync,
		R: DeserializeOwned,
	{
		let url = build_url(&self.config.base_url, path)?;
		let client = self.cache.get_client(&self.config.client_config())?;

		debug!(target: TRACING_TARGET, url = %url, "POST swap backend");

		let response = client.post(url).json(body).send().await.map_err(|e| {
			if e.is_timeout() {
				AdapterError::Timeout {
					timeout_ms: self.config.timeout_ms,
				}
			} else {
				AdapterError::HttpError(e)
			}
		})?;

		let status = response.status();
		if !status.is_success() {
			warn!(
				target: TRACING_TARGET,
				path = path,
				status = status.as_u16(),
				"Swap backend returned non-success status"
			);
			return Err(AdapterError::from_http_failure(status.as_u16()));
		}

		let body = response.text().await.map_err(AdapterError::HttpError)?;
		debug!(
			target: TRACING_TARGET,
			path = path,
			bytes = body.len(),
			"Swap backend responded"
		);

		serde_json::from_str(&body).map_err(|e| AdapterError::InvalidResponse {
			reason: format!("Failed to parse {} response: {}", path, e),
		})
	}
}

#[async_trait]
impl SwapBackend for HttpSwapBackend {
	async fn generate_quote(&self, params: &SwapQuoteParams) -> AdapterResult<QuoteResponse> {
		self.post(QUOTE_PATH, params).await
	}

	async fn generate_transaction(
		&self,
		params: &TransactionParams,
	) -> AdapterResult<TransactionResponse> {
		self.post(TRANSACTION_PATH, params).await
	}

	async fn get_swap_status(&self, params: &SwapStatusParams) -> AdapterResult<SwapStatus> {
		self.post(STATUS_PATH, params).await
	}
}

/// Join `path` onto `base_url`, treating the base as a directory
fn build_url(base_url: &str, path: &str) -> AdapterResult<Url> {
	let mut base = Url::parse(base_url).map_err(|e| AdapterError::ConfigError {
		reason: format!("Invalid base URL '{}': {}", base_url, e),
	})?;
	if !base.path().ends_with('/') {
		base.set_path(&format!("{}/", base.path()));
	}
	base.join(path).map_err(|e| AdapterError::ConfigError {
		reason: format!("Failed to join '{}' to '{}': {}", path, base_url, e),
	})
}
