//! Swap Service
//!
//! The orchestrator that owns a swap from intent to settlement, the
//! submit-affordance classifier and the bridge status monitor.

pub mod orchestrator;
pub mod status_monitor;
pub mod validation;

pub use orchestrator::{
	OrchestratorConfig, OrchestratorDeps, OrchestratorError, SubmitOutcome, SubmitSkipped,
	SwapOrchestrator, SwapPhase, SwapSnapshot,
};
pub use status_monitor::{MonitoringConfig, MonitoringResult, StatusMonitor};
pub use validation::{classify, Balances, ValidationInput};
