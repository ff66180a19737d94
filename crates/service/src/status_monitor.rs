//! Cross-chain settlement monitoring
//!
//! After a bridge route is submitted the destination leg settles some time
//! later. The monitor polls the backend status endpoint at a fixed interval
//! until the status is final or the optional attempt cap is hit.

use std::sync::Arc;
use std::time::Duration;

use swap_types::{SwapBackend, SwapStatus, SwapStatusParams};

/// Tracing target for structured logging
const TRACING_TARGET: &str = "swap_service::status_monitor";

/// Configuration for settlement monitoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoringConfig {
	/// Delay between status polls
	pub poll_interval: Duration,
	/// Maximum number of polls before giving up
	pub max_attempts: Option<u32>,
}

impl Default for MonitoringConfig {
	fn default() -> Self {
		Self {
			poll_interval: Duration::from_secs(3),
			max_attempts: None, // No limit by default
		}
	}
}

/// Result of a single status check, or of a whole monitoring run
#[derive(Debug, Clone, PartialEq)]
pub enum MonitoringResult {
	/// Settlement reached a final status, stop monitoring
	Completed(SwapStatus),
	/// Still settling, poll again
	ContinueMonitoring { next_attempt: u32, status: SwapStatus },
	/// The status call failed, poll again
	RetryLater { next_attempt: u32 },
	/// Maximum attempts reached, stop monitoring
	MaxAttemptsReached,
	/// Nobody is listening for updates anymore
	Abandoned,
}

#[derive(Clone)]
pub struct StatusMonitor {
	backend: Arc<dyn SwapBackend>,
	config: MonitoringConfig,
}

impl std::fmt::Debug for StatusMonitor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StatusMonitor")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

impl StatusMonitor {
	pub fn new(backend: Arc<dyn SwapBackend>, config: MonitoringConfig) -> Self {
		Self { backend, config }
	}

	pub fn config(&self) -> &MonitoringConfig {
		&self.config
	}

	/// Check if maximum attempts have been reached
	pub fn is_max_attempts_reached(&self, attempt: u32) -> bool {
		self.config
			.max_attempts
			.map(|max| attempt >= max)
			.unwrap_or(false)
	}

	/// Poll the status once and return the next action to take
	pub async fn check_status(&self, params: &SwapStatusParams, attempt: u32) -> MonitoringResult {
		tracing::debug!(
			target: TRACING_TARGET,
			route_id = %params.route_id,
			tx_hash = %params.tx_hash,
			attempt = attempt,
			"Checking swap status"
		);

		match self.backend.get_swap_status(params).await {
			Ok(status) if status.is_final() => {
				tracing::info!(
					target: TRACING_TARGET,
					route_id = %params.route_id,
					status = ?status.status,
					destination_tx_hash = ?status.destination_tx_hash,
					"Swap settled"
				);
				MonitoringResult::Completed(status)
			},
			Ok(status) => MonitoringResult::ContinueMonitoring {
				next_attempt: attempt + 1,
				status,
			},
			Err(e) => {
				tracing::warn!(
					target: TRACING_TARGET,
					route_id = %params.route_id,
					attempt = attempt,
					error = %e,
					"Failed to fetch swap status"
				);
				MonitoringResult::RetryLater {
					next_attempt: attempt + 1,
				}
			},
		}
	}

	/// Poll until settlement, reporting every status seen to `on_update`.
	///
	/// The first poll happens one interval after the call. Returning `false`
	/// from `on_update` stops the run.
	pub async fn watch<F>(&self, params: SwapStatusParams, mut on_update: F) -> MonitoringResult
	where
		F: FnMut(SwapStatus) -> bool + Send,
	{
		let mut attempt = 0;
		loop {
			if self.is_max_attempts_reached(attempt) {
				tracing::warn!(
					target: TRACING_TARGET,
					route_id = %params.route_id,
					attempts = attempt,
					"Maximum status attempts reached, stopping monitoring"
				);
				return MonitoringResult::MaxAttemptsReached;
			}

			tokio::time::sleep(self.config.poll_interval).await;

			match self.check_status(&params, attempt).await {
				MonitoringResult::Completed(status) => {
					on_update(status.clone());
					return MonitoringResult::Completed(status);
				},
				MonitoringResult::ContinueMonitoring {
					next_attempt,
					status,
				} => {
					if !on_update(status) {
						return MonitoringResult::Abandoned;
					}
					attempt = next_attempt;
				},
				MonitoringResult::RetryLater { next_attempt } => attempt = next_attempt,
				other => return other,
			}
		}
	}
}
