//! Configuration settings structures

use crate::{configurable_value::ConfigurableValue, ConfigurableValueError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use swap_types::{Amount, SecretString, SwapProvider, DEFAULT_SLIPPAGE_PERCENT};
use thiserror::Error;
use url::Url;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
	pub backend: BackendSettings,
	pub orchestrator: OrchestratorSettings,
	pub providers: ProviderSettings,
	pub logging: LoggingSettings,
}

/// Swap backend connection
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BackendSettings {
	pub endpoint: String,
	pub timeout_ms: u64,
	pub headers: HashMap<String, String>,
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "SWAP_API_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "your-key-here"}`
	pub api_key: Option<ConfigurableValue>,
}

impl Default for BackendSettings {
	fn default() -> Self {
		Self {
			endpoint: "http://localhost:8080".to_string(),
			timeout_ms: 10_000,
			headers: HashMap::new(),
			api_key: None,
		}
	}
}

/// Quote lifecycle timing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OrchestratorSettings {
	pub quote_debounce_ms: u64,
	pub quote_refresh_secs: u32,
	pub countdown_tick_ms: u64,
	pub status_poll_ms: u64,
	pub status_max_attempts: Option<u32>,
	pub default_slippage_percent: String,
	pub default_provider: SwapProvider,
}

impl Default for OrchestratorSettings {
	fn default() -> Self {
		Self {
			quote_debounce_ms: 700,
			quote_refresh_secs: 30,
			countdown_tick_ms: 1_000,
			status_poll_ms: 3_000,
			status_max_attempts: None,
			default_slippage_percent: DEFAULT_SLIPPAGE_PERCENT.to_string(),
			default_provider: SwapProvider::Auto,
		}
	}
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderSettings {
	pub enabled: Vec<SwapProvider>,
}

impl Default for ProviderSettings {
	fn default() -> Self {
		Self {
			enabled: SwapProvider::ALL.to_vec(),
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("Backend endpoint must not be empty")]
	EmptyEndpoint,

	#[error("Invalid backend endpoint '{endpoint}': {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },

	#[error("{field} must be greater than zero")]
	ZeroInterval { field: &'static str },

	#[error("Slippage must be between 0 and 100 percent, got '{value}'")]
	InvalidSlippage { value: String },

	#[error("At least one provider must be enabled")]
	NoProvidersEnabled,
}

impl Settings {
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let endpoint = self.backend.endpoint.trim();
		if endpoint.is_empty() {
			return Err(ConfigValidationError::EmptyEndpoint);
		}
		Url::parse(endpoint).map_err(|e| ConfigValidationError::InvalidEndpoint {
			endpoint: endpoint.to_string(),
			reason: e.to_string(),
		})?;

		let intervals = [
			("backend.timeout_ms", self.backend.timeout_ms),
			("orchestrator.quote_debounce_ms", self.orchestrator.quote_debounce_ms),
			("orchestrator.quote_refresh_secs", u64::from(self.orchestrator.quote_refresh_secs)),
			("orchestrator.countdown_tick_ms", self.orchestrator.countdown_tick_ms),
			("orchestrator.status_poll_ms", self.orchestrator.status_poll_ms),
		];
		if let Some((field, _)) = intervals.iter().find(|(_, value)| *value == 0) {
			return Err(ConfigValidationError::ZeroInterval { field });
		}

		let slippage = Amount::new(&self.orchestrator.default_slippage_percent);
		if !slippage.is_positive() || slippage >= Amount::from(100u64) {
			return Err(ConfigValidationError::InvalidSlippage {
				value: self.orchestrator.default_slippage_percent.clone(),
			});
		}

		if self.enabled_providers().is_empty() {
			return Err(ConfigValidationError::NoProvidersEnabled);
		}
		Ok(())
	}

	/// Enabled concrete providers; `auto` entries are ignored
	pub fn enabled_providers(&self) -> Vec<SwapProvider> {
		let mut providers: Vec<SwapProvider> = Vec::new();
		for provider in &self.providers.enabled {
			if *provider != SwapProvider::Auto && !providers.contains(provider) {
				providers.push(*provider);
			}
		}
		providers
	}

	/// Resolve the backend API key, if one is configured
	pub fn backend_api_key(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		self.backend
			.api_key
			.as_ref()
			.map(ConfigurableValue::resolve_secret)
			.transpose()
	}
}
