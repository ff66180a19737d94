//! Swap orchestrator
//!
//! Owns the swap intent, the quote lifecycle and execution sequencing. All
//! state lives in one coordinator task; the [`SwapOrchestrator`] handle turns
//! every mutating operation into a message, and readers observe the state
//! through a `watch` channel of [`SwapSnapshot`]s.

mod command;
mod coordinator;
mod snapshot;
mod submit;

pub use command::{SubmitOutcome, SubmitSkipped};
pub use snapshot::{SwapPhase, SwapSnapshot};

use std::sync::Arc;
use std::time::Duration;

use swap_adapters::{AdapterRegistry, SpotPrices};
use swap_types::{
	AccountId, Amount, RoutePriority, SwapBackend, SwapProvider, SwapRequest, Token, TokenSide,
	WalletProvider,
};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::status_monitor::MonitoringConfig;
use command::Command;
use coordinator::Coordinator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorError {
	#[error("Orchestrator has shut down")]
	Closed,

	#[error("Coordinator task failed: {reason}")]
	TaskFailed { reason: String },
}

/// Timing and routing knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrchestratorConfig {
	/// Coalescing window for amount edits
	pub quote_debounce: Duration,
	/// Countdown armed after every quote response
	pub quote_refresh_secs: u32,
	pub countdown_tick: Duration,
	pub status: MonitoringConfig,
	pub route_priority: RoutePriority,
}

impl Default for OrchestratorConfig {
	fn default() -> Self {
		Self {
			quote_debounce: Duration::from_millis(700),
			quote_refresh_secs: 30,
			countdown_tick: Duration::from_secs(1),
			status: MonitoringConfig::default(),
			route_priority: RoutePriority::Cheapest,
		}
	}
}

/// External collaborators the orchestrator drives
#[derive(Clone)]
pub struct OrchestratorDeps {
	pub backend: Arc<dyn SwapBackend>,
	pub wallet: Arc<dyn WalletProvider>,
	pub registry: Arc<AdapterRegistry>,
}

impl std::fmt::Debug for OrchestratorDeps {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OrchestratorDeps")
			.field("registry", &self.registry)
			.finish_non_exhaustive()
	}
}

/// Handle to a running orchestrator
#[derive(Debug)]
pub struct SwapOrchestrator {
	commands: mpsc::UnboundedSender<Command>,
	snapshots: watch::Receiver<SwapSnapshot>,
	task: JoinHandle<()>,
}

impl SwapOrchestrator {
	/// Start the coordinator task on the current runtime
	pub fn spawn(deps: OrchestratorDeps, config: OrchestratorConfig, request: SwapRequest) -> Self {
		let (commands, receiver) = mpsc::unbounded_channel();
		let (coordinator, snapshots) =
			Coordinator::new(deps, config, request, commands.downgrade(), receiver);
		let task = tokio::spawn(coordinator.run());

		Self {
			commands,
			snapshots,
			task,
		}
	}

	fn send(&self, command: Command) -> Result<(), OrchestratorError> {
		self.commands
			.send(command)
			.map_err(|_| OrchestratorError::Closed)
	}

	/// Set the sell amount; the quote refresh is debounced
	pub fn set_from_amount(&self, value: impl Into<String>) -> Result<(), OrchestratorError> {
		self.send(Command::SetFromAmount(value.into()))
	}

	/// Set the buy amount; the quote refresh is debounced
	pub fn set_to_amount(&self, value: impl Into<String>) -> Result<(), OrchestratorError> {
		self.send(Command::SetToAmount(value.into()))
	}

	pub fn select_token(
		&self,
		side: TokenSide,
		token: Token,
		account: Option<AccountId>,
	) -> Result<(), OrchestratorError> {
		self.send(Command::SelectToken {
			side,
			token,
			account,
		})
	}

	pub fn change_provider(&self, provider: SwapProvider) -> Result<(), OrchestratorError> {
		self.send(Command::ChangeProvider(provider))
	}

	pub fn change_slippage(&self, percent: impl Into<String>) -> Result<(), OrchestratorError> {
		self.send(Command::ChangeSlippage(percent.into()))
	}

	pub fn select_quote_option(&self, id: impl Into<String>) -> Result<(), OrchestratorError> {
		self.send(Command::SelectQuoteOption(id.into()))
	}

	pub fn flip_tokens(&self) -> Result<(), OrchestratorError> {
		self.send(Command::FlipTokens)
	}

	/// `fraction` of the from-token balance, e.g. `0.5` for half
	pub fn set_amount_by_percent(&self, fraction: Amount) -> Result<(), OrchestratorError> {
		self.send(Command::SetAmountByPercent(fraction))
	}

	pub fn set_spot_prices(&self, prices: SpotPrices) -> Result<(), OrchestratorError> {
		self.send(Command::SetSpotPrices(prices))
	}

	/// Run one step of the allowance and execution state machine
	pub async fn submit(&self) -> Result<SubmitOutcome, OrchestratorError> {
		let (reply, outcome) = oneshot::channel();
		self.send(Command::Submit(reply))?;
		outcome.await.map_err(|_| OrchestratorError::Closed)
	}

	pub fn snapshot(&self) -> SwapSnapshot {
		self.snapshots.borrow().clone()
	}

	pub fn subscribe(&self) -> watch::Receiver<SwapSnapshot> {
		self.snapshots.clone()
	}

	/// Stop the coordinator and wait for it to exit
	pub async fn shutdown(self) -> Result<(), OrchestratorError> {
		self.send(Command::Shutdown)?;
		self.task.await.map_err(|e| OrchestratorError::TaskFailed {
			reason: e.to_string(),
		})
	}
}
