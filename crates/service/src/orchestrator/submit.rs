//! Allowance and execution state machine
//!
//! `submit()` takes one step: approve when the selected route's allowance
//! is not known to cover it, exchange otherwise. The allowance used for that
//! decision is snapshotted when the call arrives and handed to the adapter,
//! so a quote cycle running meanwhile cannot change what the swap relies on.

use swap_adapters::AllowanceGate;
use swap_types::SubmittedSwap;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::command::{Command, SubmitOutcome, SubmitSkipped};
use super::coordinator::{Coordinator, TRACING_TARGET};
use super::snapshot::SwapPhase;
use crate::status_monitor::StatusMonitor;

impl Coordinator {
	pub(super) fn submit(&mut self, reply: oneshot::Sender<SubmitOutcome>) {
		if self.state.is_submitting {
			debug!(target: TRACING_TARGET, "Submission already in progress");
			respond(reply, SubmitOutcome::Skipped(SubmitSkipped::AlreadySubmitting));
			return;
		}
		self.state.is_submitting = true;

		let (adapter, route) = match self.route_context() {
			Some(context) => context,
			None => {
				self.state.is_submitting = false;
				respond(reply, SubmitOutcome::Skipped(SubmitSkipped::NoQuote));
				return;
			},
		};

		if let Some(error) = self.state.validation_error.filter(|e| e.disables_submit()) {
			debug!(target: TRACING_TARGET, error = %error, "Submit blocked by validation");
			self.state.is_submitting = false;
			respond(reply, SubmitOutcome::Skipped(SubmitSkipped::Blocked(error)));
			return;
		}

		let requirement = match adapter.allowance_requirement(&route) {
			Ok(requirement) => requirement,
			Err(error) => {
				warn!(target: TRACING_TARGET, error = %error, "Cannot derive allowance requirement");
				self.state.is_submitting = false;
				self.state.submit_error = Some(error.clone());
				self.outcome = Some(SwapPhase::Failed);
				respond(reply, SubmitOutcome::Failed(error));
				return;
			},
		};

		let allowance = self.state.allowance.clone();
		let approve = requirement
			.as_ref()
			.map(|requirement| {
				AllowanceGate::ensure_sufficient(requirement, allowance.as_ref()).is_err()
			})
			.unwrap_or(false);

		self.clear_outcome();
		info!(
			target: TRACING_TARGET,
			provider = %adapter.provider(),
			route_id = %route.route_id(),
			approve = approve,
			"Submitting"
		);

		self.spawn_reply(async move {
			let outcome = if approve {
				match adapter.approve(&route).await {
					Ok(tx_hash) => SubmitOutcome::Approved { tx_hash },
					Err(error) => SubmitOutcome::Failed(error),
				}
			} else {
				match adapter.exchange(&route, allowance.as_ref()).await {
					Ok(swap) => SubmitOutcome::Swapped(swap),
					Err(error) => SubmitOutcome::Failed(error),
				}
			};
			Command::SubmitFinished { outcome, reply }
		});
	}

	pub(super) fn on_submit_finished(
		&mut self,
		outcome: SubmitOutcome,
		reply: oneshot::Sender<SubmitOutcome>,
	) {
		self.state.is_submitting = false;

		match &outcome {
			SubmitOutcome::Approved { tx_hash } => {
				info!(target: TRACING_TARGET, tx_hash = %tx_hash, "Allowance approved");
				self.update_allowance(true);
			},
			SubmitOutcome::Swapped(swap) => {
				info!(
					target: TRACING_TARGET,
					provider = %swap.provider,
					tx_hash = %swap.tx_hash,
					cross_chain = swap.is_cross_chain(),
					"Swap submitted"
				);
				self.complete_swap(swap.clone());
			},
			SubmitOutcome::Failed(error) => {
				warn!(target: TRACING_TARGET, error = %error, "Submit failed");
				self.state.submit_error = Some(error.clone());
				self.outcome = Some(SwapPhase::Failed);
				if self.state.countdown_secs.is_none() && !self.state.options.is_empty() {
					self.state.countdown_secs = Some(self.config.quote_refresh_secs);
				}
			},
			SubmitOutcome::Skipped(_) => {},
		}

		respond(reply, outcome);
	}

	/// A swap went out: start over with a fresh intent
	fn complete_swap(&mut self, swap: SubmittedSwap) {
		let request = &mut self.state.request;
		request.from_amount.clear();
		request.to_amount.clear();
		self.reset_quote();

		self.outcome = Some(SwapPhase::Success);
		self.state.submit_error = None;
		self.state.bridge_status = None;
		self.state.last_submission = Some(swap.clone());
		self.load_balances();

		if swap.is_cross_chain() {
			self.monitor_settlement(swap);
		}
	}

	fn monitor_settlement(&self, swap: SubmittedSwap) {
		let monitor = StatusMonitor::new(self.deps.backend.clone(), self.config.status.clone());
		let commands = self.commands.clone();
		let tx_hash = swap.tx_hash.clone();

		tokio::spawn(async move {
			let result = monitor
				.watch(swap.status_params(), |status| {
					commands
						.upgrade()
						.map(|sender| {
							sender
								.send(Command::BridgeStatus {
									tx_hash: tx_hash.clone(),
									status,
								})
								.is_ok()
						})
						.unwrap_or(false)
				})
				.await;
			debug!(
				target: TRACING_TARGET,
				tx_hash = %swap.tx_hash,
				result = ?result,
				"Settlement monitoring finished"
			);
		});
	}
}

fn respond(reply: oneshot::Sender<SubmitOutcome>, outcome: SubmitOutcome) {
	if reply.send(outcome).is_err() {
		debug!(target: TRACING_TARGET, "Submit caller went away before the outcome");
	}
}
