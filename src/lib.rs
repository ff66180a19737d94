//! Swap Aggregator Library
//!
//! Multi-provider swap quote aggregation and execution core: quotes from
//! several swap and bridge backends normalized into one comparable model,
//! and the selected route driven through its provider-specific execution
//! path.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

// Core domain types
pub use swap_types::{
	AccountId, AdapterError, AdapterResult, AllowanceRpc, AllowanceState, Amount, CoinType,
	Network, ProviderError, ProviderQuote, QuoteOption, QuoteResponse, RoutePriority, SwapError,
	SwapFees, SwapProvider, SwapQuoteParams, SwapRequest, SwapValidationError, Token,
	TransactionSender, WalletProvider,
};
pub use swap_types::{QuoteOutcome, SwapBackend};

// Adapters
pub use swap_adapters::{
	normalize_quote, AdapterDeps, AdapterRegistry, HttpBackendConfig, HttpSwapBackend,
	NormalizeContext, SpotPrices,
};

// Service layer
pub use swap_service::{
	MonitoringConfig, OrchestratorConfig, OrchestratorDeps, OrchestratorError, SubmitOutcome,
	SubmitSkipped, SwapOrchestrator, SwapPhase, SwapSnapshot,
};

// Config
pub use swap_config::{load_config, load_config_from, log_service_info, Settings};

pub mod models {
	pub use swap_types::*;
}

pub mod adapters {
	pub use swap_adapters::*;
}

pub mod service {
	pub use swap_service::*;
}

pub mod config {
	pub use swap_config::*;
}

#[derive(Error, Debug)]
pub enum BuildError {
	#[error("Missing collaborator: {0}")]
	MissingCollaborator(&'static str),

	#[error("Failed to resolve backend API key: {0}")]
	ApiKey(#[from] swap_config::ConfigurableValueError),

	#[error("Failed to create swap backend: {0}")]
	Backend(#[from] AdapterError),
}

/// Backend connection derived from settings
pub fn http_backend_config(settings: &Settings) -> Result<HttpBackendConfig, BuildError> {
	let mut config =
		HttpBackendConfig::new(settings.backend.endpoint.clone(), settings.backend.timeout_ms);
	config.headers = settings.backend.headers.clone();
	config.api_key = settings.backend_api_key()?;
	Ok(config)
}

/// Orchestrator timing derived from settings
pub fn orchestrator_config(settings: &Settings) -> OrchestratorConfig {
	let orchestrator = &settings.orchestrator;
	OrchestratorConfig {
		quote_debounce: Duration::from_millis(orchestrator.quote_debounce_ms),
		quote_refresh_secs: orchestrator.quote_refresh_secs,
		countdown_tick: Duration::from_millis(orchestrator.countdown_tick_ms),
		status: MonitoringConfig {
			poll_interval: Duration::from_millis(orchestrator.status_poll_ms),
			max_attempts: orchestrator.status_max_attempts,
		},
		route_priority: RoutePriority::default(),
	}
}

/// Initialize tracing with configuration-based settings
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing_from_settings(
	settings: &Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	use swap_config::LogFormat;

	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);

	Ok(())
}

/// Normalized result of a single quote request
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
	pub options: Vec<QuoteOption>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<ProviderError>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub fees: Option<SwapFees>,
}

impl QuoteReport {
	pub fn from_response(response: QuoteResponse, ctx: &NormalizeContext) -> Self {
		let (outcome, fees) = response.into_outcome();
		let mut report = QuoteReport {
			fees,
			..Default::default()
		};
		match outcome {
			QuoteOutcome::Quote(quote) => report.options = normalize_quote(&quote, ctx),
			QuoteOutcome::Error(error) => report.error = Some(error),
			QuoteOutcome::Empty(_) => {},
		}
		report
	}
}

/// Ask the backend once and normalize whatever came back
pub async fn fetch_quote(
	backend: &dyn SwapBackend,
	params: &SwapQuoteParams,
	ctx: &NormalizeContext,
) -> AdapterResult<QuoteReport> {
	let response = backend.generate_quote(params).await?;
	Ok(QuoteReport::from_response(response, ctx))
}

/// Builder wiring settings and the external collaborators into orchestrators
#[derive(Default)]
pub struct SwapAggregatorBuilder {
	settings: Option<Settings>,
	backend: Option<Arc<dyn SwapBackend>>,
	wallet: Option<Arc<dyn WalletProvider>>,
	sender: Option<Arc<dyn TransactionSender>>,
	allowance_rpc: Option<Arc<dyn AllowanceRpc>>,
}

impl SwapAggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use this backend instead of the HTTP one built from settings
	pub fn with_backend(mut self, backend: Arc<dyn SwapBackend>) -> Self {
		self.backend = Some(backend);
		self
	}

	pub fn with_wallet(mut self, wallet: Arc<dyn WalletProvider>) -> Self {
		self.wallet = Some(wallet);
		self
	}

	pub fn with_sender(mut self, sender: Arc<dyn TransactionSender>) -> Self {
		self.sender = Some(sender);
		self
	}

	pub fn with_allowance_rpc(mut self, allowance_rpc: Arc<dyn AllowanceRpc>) -> Self {
		self.allowance_rpc = Some(allowance_rpc);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	pub fn build(self) -> Result<SwapAggregator, BuildError> {
		let settings = self.settings.unwrap_or_default();
		let backend = match self.backend {
			Some(backend) => backend,
			None => Arc::new(HttpSwapBackend::new(http_backend_config(&settings)?)?),
		};
		let wallet = self.wallet.ok_or(BuildError::MissingCollaborator("wallet"))?;
		let sender = self.sender.ok_or(BuildError::MissingCollaborator("sender"))?;
		let allowance_rpc = self
			.allowance_rpc
			.ok_or(BuildError::MissingCollaborator("allowance_rpc"))?;

		let deps = AdapterDeps::new(backend.clone(), sender, allowance_rpc);
		let registry = AdapterRegistry::with_providers(deps, &settings.enabled_providers());
		info!(providers = ?registry.providers(), "Provider adapters registered");

		Ok(SwapAggregator {
			settings,
			deps: OrchestratorDeps {
				backend,
				wallet,
				registry: Arc::new(registry),
			},
		})
	}
}

/// Wired collaborators; every swap screen gets its own orchestrator
#[derive(Debug, Clone)]
pub struct SwapAggregator {
	settings: Settings,
	deps: OrchestratorDeps,
}

impl SwapAggregator {
	pub fn builder() -> SwapAggregatorBuilder {
		SwapAggregatorBuilder::new()
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn registry(&self) -> &AdapterRegistry {
		&self.deps.registry
	}

	pub fn backend(&self) -> Arc<dyn SwapBackend> {
		self.deps.backend.clone()
	}

	/// Empty intent carrying the configured slippage and provider
	pub fn default_request(&self) -> SwapRequest {
		SwapRequest {
			slippage_tolerance_percent: self.settings.orchestrator.default_slippage_percent.clone(),
			selected_provider: self.settings.orchestrator.default_provider,
			..Default::default()
		}
	}

	/// Start an orchestrator on the current tokio runtime
	pub fn start_swap(&self, request: SwapRequest) -> SwapOrchestrator {
		SwapOrchestrator::spawn(self.deps.clone(), orchestrator_config(&self.settings), request)
	}
}
