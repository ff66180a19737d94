//! Error types for backend calls, wallet sends and swap execution

use thiserror::Error;

use crate::quotes::{ProviderError, SwapProvider};

/// Transport and protocol errors from backend or RPC calls
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("HTTP request failed: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("HTTP {status_code}: {reason}")]
	HttpStatusError { status_code: u16, reason: String },

	#[error("Configuration error: {reason}")]
	ConfigError { reason: String },

	#[error("Unsupported operation: {operation} for provider {provider}")]
	UnsupportedOperation {
		operation: String,
		provider: SwapProvider,
	},

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Network error: {0}")]
	Network(String),
}

impl AdapterError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			AdapterError::HttpStatusError { status_code, .. } => Some(*status_code),
			AdapterError::HttpError(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}

	/// Create an HTTP failure error with the given status code and reason
	pub fn http_failure(status_code: u16, reason: impl Into<String>) -> Self {
		Self::HttpStatusError {
			status_code,
			reason: reason.into(),
		}
	}

	/// Create an HTTP failure error from response status with default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			408 => "Request Timeout".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatusError {
			status_code,
			reason,
		}
	}
}

/// Failures of the wallet's chain-specific send primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
	#[error("Transaction rejected by user")]
	Rejected,

	#[error("Transaction failed: {reason}")]
	Failed { reason: String },

	#[error("Unsupported transaction: {reason}")]
	Unsupported { reason: String },
}

/// Why an approval or exchange did not go through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
	#[error("Provider error: {0}")]
	Provider(ProviderError),

	#[error("Swap amounts must be non-empty and non-zero")]
	InvalidAmounts,

	#[error("Allowance for spender {spender} is insufficient")]
	AllowanceRequired { spender: String },

	#[error("Route {route_id} not found in quote")]
	RouteNotFound { route_id: String },

	#[error("{expected} adapter cannot execute a {actual} quote")]
	ProviderMismatch {
		expected: SwapProvider,
		actual: SwapProvider,
	},

	#[error("Provider returned no executable transaction")]
	MissingTransaction,

	#[error("Invalid transaction payload: {reason}")]
	InvalidPayload { reason: String },

	#[error("Missing precondition: {reason}")]
	Precondition { reason: String },

	#[error("Send failed: {0}")]
	Send(#[from] SendError),

	#[error("Backend request failed: {reason}")]
	Transport { reason: String },
}

impl SwapError {
	/// Transport/programmer failures, as opposed to a provider-reported error
	pub fn is_transport(&self) -> bool {
		matches!(self, SwapError::Transport { .. })
	}
}

impl From<AdapterError> for SwapError {
	fn from(error: AdapterError) -> Self {
		SwapError::Transport {
			reason: error.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_adapter_error_status_code_extraction() {
		let error = AdapterError::HttpStatusError {
			status_code: 404,
			reason: "Not Found".to_string(),
		};
		assert_eq!(error.status_code(), Some(404));

		let error = AdapterError::http_failure(500, "Internal Server Error");
		assert_eq!(error.status_code(), Some(500));

		let error = AdapterError::from_http_failure(429);
		assert_eq!(error.status_code(), Some(429));
		assert!(error.to_string().contains("Too Many Requests"));

		let error = AdapterError::InvalidResponse {
			reason: "Bad response".to_string(),
		};
		assert_eq!(error.status_code(), None);
	}

	#[test]
	fn test_transport_errors_are_distinguished() {
		let transport: SwapError = AdapterError::Network("connection reset".to_string()).into();
		assert!(transport.is_transport());
		assert!(!SwapError::InvalidAmounts.is_transport());
	}
}
