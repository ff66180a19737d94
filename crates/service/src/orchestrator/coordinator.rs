//! Coordinator task
//!
//! Single owner of the orchestrator state. User operations, timer events and
//! the replies of spawned network calls all arrive as [`Command`]s and are
//! applied one at a time, so no request state is ever shared across tasks.
//!
//! Quote requests carry a generation number. Only the response whose
//! generation matches the request currently in flight is applied; anything
//! else arrived late and is dropped without touching state.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use swap_adapters::{normalize_quote, NormalizeContext, SpotPrices};
use swap_types::{
	AccountId, AdapterError, AdapterResult, AllowanceState, Amount, EditingSide,
	Network, ProviderAdapter, QuoteOutcome, QuoteResponse, RouteContext, SwapError,
	SwapProvider, SwapQuoteParams, SwapRequest, Token, TokenSide,
};
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::command::Command;
use super::snapshot::{SwapPhase, SwapSnapshot};
use super::{OrchestratorConfig, OrchestratorDeps};
use crate::validation::{classify, Balances, ValidationInput};

pub(super) const TRACING_TARGET: &str = "swap_service::orchestrator";

/// Digits kept when the amount is a fraction of the balance
const PERCENT_AMOUNT_DECIMALS: u8 = 6;

/// The quote request currently awaiting a response
#[derive(Debug, Clone)]
struct InFlight {
	generation: u64,
	/// Route to keep selected if the new quote still offers it
	keep_selection: Option<String>,
}

pub(super) struct Coordinator {
	pub(super) deps: OrchestratorDeps,
	pub(super) config: OrchestratorConfig,
	pub(super) state: SwapSnapshot,
	pub(super) commands: mpsc::WeakUnboundedSender<Command>,
	receiver: mpsc::UnboundedReceiver<Command>,
	snapshots: watch::Sender<SwapSnapshot>,
	generation: u64,
	in_flight: Option<InFlight>,
	debounce_deadline: Option<Instant>,
	/// A refresh waiting on address resolution
	pending_refresh: Option<Option<String>>,
	resolving: HashSet<String>,
	/// Parameters of the request that produced the current quote
	pub(super) quoted_params: Option<SwapQuoteParams>,
	allowance_generation: u64,
	/// Phase reached by the last submit, shown until the user edits
	pub(super) outcome: Option<SwapPhase>,
}

impl Coordinator {
	pub(super) fn new(
		deps: OrchestratorDeps,
		config: OrchestratorConfig,
		request: SwapRequest,
		commands: mpsc::WeakUnboundedSender<Command>,
		receiver: mpsc::UnboundedReceiver<Command>,
	) -> (Self, watch::Receiver<SwapSnapshot>) {
		let state = SwapSnapshot {
			request,
			..Default::default()
		};
		let (snapshots, snapshot_receiver) = watch::channel(state.clone());

		let coordinator = Self {
			deps,
			config,
			state,
			commands,
			receiver,
			snapshots,
			generation: 0,
			in_flight: None,
			debounce_deadline: None,
			pending_refresh: None,
			resolving: HashSet::new(),
			quoted_params: None,
			allowance_generation: 0,
			outcome: None,
		};
		(coordinator, snapshot_receiver)
	}

	pub(super) async fn run(mut self) {
		info!(target: TRACING_TARGET, "Orchestrator started");
		self.ensure_addresses();
		self.load_balances();
		if !self.state.request.authoritative_amount().is_empty() {
			self.refresh_quote(None);
		}
		self.publish();

		let mut ticker = tokio::time::interval(self.config.countdown_tick);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

		loop {
			let deadline = self.debounce_deadline;
			tokio::select! {
				command = self.receiver.recv() => match command {
					Some(Command::Shutdown) | None => break,
					Some(command) => self.handle(command),
				},
				_ = ticker.tick() => self.tick(),
				_ = debounce(deadline) => {
					debug!(target: TRACING_TARGET, "Debounce window elapsed");
					self.refresh_quote(None);
				},
			}
			self.publish();
		}

		info!(target: TRACING_TARGET, "Orchestrator stopped");
	}

	fn handle(&mut self, command: Command) {
		match command {
			Command::SetFromAmount(value) => self.set_amount(EditingSide::From, value),
			Command::SetToAmount(value) => self.set_amount(EditingSide::To, value),
			Command::SelectToken {
				side,
				token,
				account,
			} => self.select_token(side, token, account),
			Command::ChangeProvider(provider) => {
				info!(target: TRACING_TARGET, provider = %provider, "Provider changed");
				self.state.request.selected_provider = provider;
				self.clear_outcome();
				self.reset_quote();
				self.refresh_quote(None);
			},
			Command::ChangeSlippage(percent) => {
				debug!(target: TRACING_TARGET, slippage = %percent, "Slippage changed");
				self.state.request.slippage_tolerance_percent = percent;
				self.clear_outcome();
				self.reset_quote();
				self.refresh_quote(None);
			},
			Command::SelectQuoteOption(id) => self.select_quote_option(id),
			Command::FlipTokens => self.flip_tokens(),
			Command::SetAmountByPercent(fraction) => self.set_amount_by_percent(&fraction),
			Command::SetSpotPrices(prices) => self.set_spot_prices(prices),
			Command::Submit(reply) => self.submit(reply),
			Command::Shutdown => {},
			Command::QuoteResolved {
				generation,
				params,
				result,
			} => self.on_quote_resolved(generation, params, result),
			Command::AddressResolved { unique_key, result } => {
				self.on_address_resolved(unique_key, result)
			},
			Command::BalancesLoaded { token, balances } => {
				let current = self.state.request.from_token.as_ref();
				if current.map(|current| current.same_asset(&token)).unwrap_or(false) {
					self.state.balances = balances;
				}
			},
			Command::AllowanceChecked { generation, result } => {
				self.on_allowance_checked(generation, result)
			},
			Command::SubmitFinished { outcome, reply } => self.on_submit_finished(outcome, reply),
			Command::BridgeStatus { tx_hash, status } => {
				let current = self.state.last_submission.as_ref();
				if current.map(|swap| swap.tx_hash == tx_hash).unwrap_or(false) {
					debug!(
						target: TRACING_TARGET,
						tx_hash = %tx_hash,
						status = ?status.status,
						"Bridge status updated"
					);
					self.state.bridge_status = Some(status);
				}
			},
		}
	}

	/// Run `task` and feed its result back into the command queue
	pub(super) fn spawn_reply<F>(&self, task: F)
	where
		F: Future<Output = Command> + Send + 'static,
	{
		let commands = self.commands.clone();
		tokio::spawn(async move {
			let command = task.await;
			let delivered = commands
				.upgrade()
				.map(|sender| sender.send(command).is_ok())
				.unwrap_or(false);
			if !delivered {
				debug!(target: TRACING_TARGET, "Orchestrator gone, dropping task result");
			}
		});
	}

	/// Recompute derived fields and notify subscribers when anything changed
	pub(super) fn publish(&mut self) {
		let provider = self.state.request.selected_provider;
		let provider_enabled =
			provider == SwapProvider::Auto || self.deps.registry.is_enabled(provider);

		let validation_error = classify(&ValidationInput {
			request: &self.state.request,
			provider_enabled,
			selected_option: self.state.selected_option(),
			quote_error: self.state.quote_error.as_ref(),
			balances: &self.state.balances,
			allowance_required: self.state.allowance_required,
			allowance: self.state.allowance.as_ref(),
		});
		self.state.validation_error = validation_error;
		self.state.phase = self.derive_phase();

		let next = self.state.clone();
		self.snapshots.send_if_modified(|current| {
			if *current == next {
				false
			} else {
				*current = next;
				true
			}
		});
	}

	fn derive_phase(&self) -> SwapPhase {
		if self.state.is_submitting {
			return SwapPhase::Submitting;
		}
		if let Some(outcome) = self.outcome {
			return outcome;
		}
		if self.state.selected_option().is_none() {
			return SwapPhase::NoQuote;
		}
		if !self.state.allowance_required {
			return SwapPhase::AllowanceSufficient;
		}
		match &self.state.allowance {
			None => SwapPhase::QuoteReady,
			Some(state) if state.has_sufficient_allowance => SwapPhase::AllowanceSufficient,
			Some(_) => SwapPhase::AllowanceInsufficient,
		}
	}

	pub(super) fn clear_outcome(&mut self) {
		self.outcome = None;
		self.state.submit_error = None;
	}

	/// Drop the quote, its selection and allowance, and cancel any request in flight
	pub(super) fn reset_quote(&mut self) {
		if let Some(in_flight) = self.in_flight.take() {
			debug!(
				target: TRACING_TARGET,
				generation = in_flight.generation,
				"Cancelling in-flight quote request"
			);
		}
		self.pending_refresh = None;
		self.quoted_params = None;
		self.allowance_generation += 1;

		let state = &mut self.state;
		state.options.clear();
		state.selected_option_id = None;
		state.quote = None;
		state.quote_error = None;
		state.error_string = None;
		state.fees = None;
		state.quoted_at = None;
		state.allowance_required = false;
		state.allowance = None;
		state.is_fetching = false;
		state.countdown_secs = None;
	}

	fn set_amount(&mut self, side: EditingSide, value: String) {
		let request = &mut self.state.request;
		match side {
			EditingSide::From => {
				request.from_amount = value;
				request.to_amount.clear();
			},
			EditingSide::To => {
				request.to_amount = value;
				request.from_amount.clear();
			},
		}
		request.editing_side = side;

		self.clear_outcome();
		self.reset_quote();
		self.debounce_deadline = Some(Instant::now() + self.config.quote_debounce);
	}

	fn select_token(&mut self, side: TokenSide, token: Token, account: Option<AccountId>) {
		self.clear_outcome();
		self.reset_quote();

		let request = &mut self.state.request;
		request.from_amount.clear();
		request.to_amount.clear();

		match side {
			TokenSide::From => {
				let same_chain = matches!(
					(&request.from_token, &request.to_token),
					(Some(from), Some(to)) if from.chain_id == to.chain_id
				);
				let leaves_to_chain = request
					.to_token
					.as_ref()
					.map(|to| to.chain_id != token.chain_id)
					.unwrap_or(false);
				if same_chain && leaves_to_chain {
					debug!(
						target: TRACING_TARGET,
						chain_id = %token.chain_id,
						"From token moved chain, clearing to token"
					);
					request.to_token = None;
				}
				request.from_token = Some(token);
				if let Some(account) = account {
					request.from_account = Some(account);
				}
			},
			TokenSide::To => {
				request.to_token = Some(token);
				if let Some(account) = account {
					request.to_account_id = Some(account);
				}
			},
		}

		if side == TokenSide::From {
			self.load_balances();
		}
		self.ensure_addresses();
		self.refresh_quote(None);
	}

	fn select_quote_option(&mut self, id: String) {
		if !self.state.options.iter().any(|option| option.id == id) {
			warn!(target: TRACING_TARGET, route_id = %id, "Ignoring unknown quote option");
			return;
		}

		debug!(target: TRACING_TARGET, route_id = %id, "Quote option selected");
		self.clear_outcome();
		self.state.selected_option_id = Some(id);
		self.apply_selected_amount();
		self.update_allowance(false);
	}

	fn flip_tokens(&mut self) {
		self.clear_outcome();
		self.reset_quote();

		let request = &mut self.state.request;
		std::mem::swap(&mut request.from_token, &mut request.to_token);
		std::mem::swap(&mut request.from_account, &mut request.to_account_id);
		request.from_amount = std::mem::take(&mut request.to_amount);
		request.editing_side = EditingSide::From;
		let has_amount = !request.from_amount.is_empty();

		self.load_balances();
		if has_amount {
			self.refresh_quote(None);
		}
	}

	fn set_amount_by_percent(&mut self, fraction: &Amount) {
		let decimals = match &self.state.request.from_token {
			Some(token) => token.decimals,
			None => return,
		};
		let balance = &self.state.balances.from_token;
		if balance.is_undefined() || !fraction.is_positive() {
			debug!(target: TRACING_TARGET, "Balance unknown, ignoring percent amount");
			return;
		}

		let amount = if *fraction >= Amount::from(1u64) {
			balance.round_down(decimals)
		} else {
			(balance * fraction).round_down(PERCENT_AMOUNT_DECIMALS)
		};
		self.set_amount(EditingSide::From, amount.to_string());
	}

	fn set_spot_prices(&mut self, prices: SpotPrices) {
		self.state.spot_prices = prices;
		if self.state.quote.is_some() {
			self.renormalize();
		}
	}

	fn tick(&mut self) {
		let remaining = match self.state.countdown_secs {
			Some(remaining) => remaining.saturating_sub(1),
			None => return,
		};
		if remaining > 0 {
			self.state.countdown_secs = Some(remaining);
			return;
		}

		self.state.countdown_secs = None;
		if self.in_flight.is_some() || self.state.is_submitting {
			debug!(target: TRACING_TARGET, "Quote expired while busy, skipping refresh");
			return;
		}
		debug!(target: TRACING_TARGET, "Quote expired, refreshing");
		let keep_selection = self.state.selected_option_id.clone();
		self.refresh_quote(keep_selection);
	}

	/// Issue a quote request for the current intent, superseding any other
	pub(super) fn refresh_quote(&mut self, keep_selection: Option<String>) {
		self.debounce_deadline = None;
		let request = self.state.request.clone();

		let (from_token, to_token) = match (&request.from_token, &request.to_token) {
			(Some(from), Some(to)) => (from.clone(), to.clone()),
			_ => {
				self.reset_quote();
				return;
			},
		};

		let (side_token, amount) = match request.editing_side {
			EditingSide::From => (&from_token, request.from_amount_value()),
			EditingSide::To => (&to_token, request.to_amount_value()),
		};
		if !amount.is_positive() {
			self.reset_quote();
			return;
		}
		if amount.exceeds_decimals(side_token.decimals) {
			debug!(
				target: TRACING_TARGET,
				amount = %amount,
				decimals = side_token.decimals,
				"Amount has too many decimals, not quoting"
			);
			self.reset_quote();
			return;
		}
		let base_units = match amount.to_base_units(side_token.decimals) {
			Some(base_units) => base_units,
			None => {
				self.reset_quote();
				return;
			},
		};

		let (from_account, to_account) = match (&request.from_account, &request.to_account_id) {
			(Some(from), Some(to)) => (from.clone(), to.clone()),
			_ => {
				self.reset_quote();
				return;
			},
		};
		if from_account.address().is_none() || to_account.address().is_none() {
			debug!(target: TRACING_TARGET, "Waiting for account address before quoting");
			self.reset_quote();
			self.pending_refresh = Some(keep_selection);
			self.ensure_addresses();
			return;
		}

		let (from_amount, to_amount) = match request.editing_side {
			EditingSide::From => (base_units, String::new()),
			EditingSide::To => (String::new(), base_units),
		};
		let params = SwapQuoteParams {
			from_account_id: from_account,
			from_chain_id: from_token.chain_id.clone(),
			from_token: from_token.contract_address.clone(),
			from_amount,
			to_account_id: to_account,
			to_chain_id: to_token.chain_id.clone(),
			to_token: to_token.contract_address.clone(),
			to_amount,
			slippage_percentage: request.slippage_tolerance_percent.clone(),
			route_priority: self.config.route_priority,
			provider: request.selected_provider,
		};

		self.generation += 1;
		let generation = self.generation;
		let superseded = self.in_flight.replace(InFlight {
			generation,
			keep_selection,
		});
		if let Some(superseded) = superseded {
			debug!(
				target: TRACING_TARGET,
				superseded = superseded.generation,
				"Superseding in-flight quote request"
			);
		}
		self.pending_refresh = None;
		self.state.quote_error = None;
		self.state.error_string = None;
		self.state.is_fetching = true;
		self.state.countdown_secs = None;

		info!(
			target: TRACING_TARGET,
			request_id = %Uuid::new_v4(),
			generation = generation,
			provider = %params.provider,
			from_chain_id = %params.from_chain_id,
			to_chain_id = %params.to_chain_id,
			editing_side = ?request.editing_side,
			"Requesting quote"
		);

		let backend = self.deps.backend.clone();
		self.spawn_reply(async move {
			let result = backend.generate_quote(&params).await;
			Command::QuoteResolved {
				generation,
				params,
				result,
			}
		});
	}

	fn on_quote_resolved(
		&mut self,
		generation: u64,
		params: SwapQuoteParams,
		result: Result<QuoteResponse, AdapterError>,
	) {
		let in_flight = match self.in_flight.take() {
			Some(in_flight) if in_flight.generation == generation => in_flight,
			other => {
				self.in_flight = other;
				debug!(
					target: TRACING_TARGET,
					generation = generation,
					"Discarding stale quote response"
				);
				return;
			},
		};

		self.state.is_fetching = false;
		self.quoted_params = Some(params);

		match result {
			Ok(response) => {
				let (outcome, fees) = response.into_outcome();
				self.state.fees = fees;
				match outcome {
					QuoteOutcome::Quote(quote) => {
						self.state.quote = Some(quote);
						self.state.quote_error = None;
						self.state.error_string = None;
					},
					QuoteOutcome::Error(error) => {
						info!(
							target: TRACING_TARGET,
							provider = %error.provider(),
							insufficient_liquidity = error.is_insufficient_liquidity(),
							message = %error.message(),
							"Provider reported a quote error"
						);
						self.state.quote = None;
						self.state.quote_error = Some(error);
					},
					QuoteOutcome::Empty(reason) => {
						debug!(target: TRACING_TARGET, reason = ?reason, "Empty quote response");
						self.state.quote = None;
						self.state.error_string = reason;
					},
				}
			},
			Err(e) => {
				warn!(target: TRACING_TARGET, error = %e, "Quote request failed");
				self.state.quote = None;
				self.state.quote_error = None;
				self.state.fees = None;
				self.state.error_string = Some(e.to_string());
			},
		}

		self.renormalize();
		let keep = in_flight
			.keep_selection
			.filter(|id| self.state.options.iter().any(|option| &option.id == id));
		let selected = keep.or_else(|| self.state.options.first().map(|option| option.id.clone()));
		self.state.selected_option_id = selected;
		self.apply_selected_amount();

		debug!(
			target: TRACING_TARGET,
			generation = generation,
			options = self.state.options.len(),
			selected = ?self.state.selected_option_id,
			"Quote applied"
		);

		self.state.quoted_at = Some(Utc::now());
		self.state.countdown_secs = Some(self.config.quote_refresh_secs);
		self.update_allowance(true);
	}

	fn renormalize(&mut self) {
		let options = match (&self.state.quote, self.normalize_context()) {
			(Some(quote), Some(ctx)) => normalize_quote(quote, &ctx),
			_ => Vec::new(),
		};
		self.state.options = options;
	}

	fn normalize_context(&self) -> Option<NormalizeContext> {
		let from_token = self.state.request.from_token.clone()?;
		let to_token = self.state.request.to_token.clone()?;
		let network = self.from_network(&from_token);
		Some(
			NormalizeContext::new(from_token, to_token, network)
				.with_prices(self.state.spot_prices.clone()),
		)
	}

	fn from_network(&self, token: &Token) -> Network {
		self.deps
			.wallet
			.network(token.coin, &token.chain_id)
			.unwrap_or_else(|| Network::for_coin(token.coin, token.chain_id.clone()))
	}

	/// Mirror the selected route onto the non-authoritative amount
	fn apply_selected_amount(&mut self) {
		let option = match self.state.selected_option() {
			Some(option) => option.clone(),
			None => return,
		};
		let request = &mut self.state.request;
		match request.editing_side {
			EditingSide::From => request.to_amount = option.to_amount.to_string(),
			EditingSide::To => request.from_amount = option.from_amount.to_string(),
		}
	}

	/// The selected route, ready for its adapter
	pub(super) fn route_context(&self) -> Option<(Arc<dyn ProviderAdapter>, RouteContext)> {
		let quote = self.state.quote.clone()?;
		let option = self.state.selected_option()?.clone();
		let params = self.quoted_params.clone()?;
		let from_account = self.state.request.from_account.clone()?;
		let from_token = self.state.request.from_token.clone()?;

		let adapter = match self.deps.registry.get(quote.provider()) {
			Some(adapter) => adapter,
			None => {
				debug!(
					target: TRACING_TARGET,
					provider = %quote.provider(),
					"No adapter registered for quoted provider"
				);
				return None;
			},
		};

		Some((
			adapter,
			RouteContext {
				quote,
				option,
				params,
				from_account,
				from_token,
			},
		))
	}

	/// Re-derive the allowance for the selected route.
	///
	/// A cached value is shown straight away; the chain is read when there
	/// is none or when `force_check` is set.
	pub(super) fn update_allowance(&mut self, force_check: bool) {
		self.allowance_generation += 1;
		self.state.allowance_required = false;
		self.state.allowance = None;

		let (adapter, route) = match self.route_context() {
			Some(context) => context,
			None => return,
		};
		match adapter.allowance_requirement(&route) {
			Ok(Some(_)) => {},
			Ok(None) => return,
			Err(e) => {
				warn!(target: TRACING_TARGET, error = %e, "Cannot derive allowance requirement");
				return;
			},
		}

		self.state.allowance_required = true;
		self.state.allowance = adapter.cached_allowance(&route);
		if !force_check && self.state.allowance.is_some() {
			return;
		}

		let generation = self.allowance_generation;
		self.spawn_reply(async move {
			let result = adapter.check_allowance(&route).await;
			Command::AllowanceChecked { generation, result }
		});
	}

	fn on_allowance_checked(
		&mut self,
		generation: u64,
		result: Result<Option<AllowanceState>, SwapError>,
	) {
		if generation != self.allowance_generation {
			debug!(target: TRACING_TARGET, "Discarding stale allowance check");
			return;
		}
		match result {
			Ok(state) => {
				if let Some(state) = &state {
					debug!(
						target: TRACING_TARGET,
						spender = %state.key.spender,
						sufficient = state.has_sufficient_allowance,
						"Allowance checked"
					);
				}
				self.state.allowance = state;
			},
			Err(e) => warn!(target: TRACING_TARGET, error = %e, "Allowance check failed"),
		}
	}

	/// Fetch the from-token and native balances of the from account
	pub(super) fn load_balances(&mut self) {
		self.state.balances = Balances::default();
		let (account, token) = match (&self.state.request.from_account, &self.state.request.from_token) {
			(Some(account), Some(token)) if account.address().is_some() => {
				(account.clone(), token.clone())
			},
			_ => return,
		};
		let native = self.from_network(&token).native_token();
		let wallet = self.deps.wallet.clone();

		self.spawn_reply(async move {
			let (token_balance, native_balance) = futures::join!(
				wallet.balance(&account, &token),
				wallet.balance(&account, &native)
			);
			Command::BalancesLoaded {
				balances: Balances {
					from_token: balance_or_undefined(token_balance, &token),
					from_native: balance_or_undefined(native_balance, &native),
				},
				token,
			}
		});
	}

	fn ensure_addresses(&mut self) {
		let unresolved: Vec<AccountId> = [
			&self.state.request.from_account,
			&self.state.request.to_account_id,
		]
		.into_iter()
		.flatten()
		.filter(|account| account.address().is_none())
		.cloned()
		.collect();

		for account in unresolved {
			if !self.resolving.insert(account.unique_key.clone()) {
				continue;
			}
			debug!(
				target: TRACING_TARGET,
				coin = %account.coin,
				unique_key = %account.unique_key,
				"Resolving account address"
			);
			let wallet = self.deps.wallet.clone();
			self.spawn_reply(async move {
				let result = wallet.resolve_address(&account).await;
				Command::AddressResolved {
					unique_key: account.unique_key,
					result,
				}
			});
		}
	}

	fn on_address_resolved(&mut self, unique_key: String, result: AdapterResult<String>) {
		self.resolving.remove(&unique_key);
		let address = match result {
			Ok(address) => address,
			Err(e) => {
				warn!(
					target: TRACING_TARGET,
					unique_key = %unique_key,
					error = %e,
					"Failed to resolve account address"
				);
				return;
			},
		};

		let request = &mut self.state.request;
		let from_resolved = fill_address(&mut request.from_account, &unique_key, &address);
		fill_address(&mut request.to_account_id, &unique_key, &address);

		if from_resolved {
			self.load_balances();
		}
		if let Some(keep_selection) = self.pending_refresh.take() {
			self.refresh_quote(keep_selection);
		}
	}
}

async fn debounce(deadline: Option<Instant>) {
	match deadline {
		Some(deadline) => tokio::time::sleep_until(deadline).await,
		None => std::future::pending().await,
	}
}

fn fill_address(slot: &mut Option<AccountId>, unique_key: &str, address: &str) -> bool {
	match slot {
		Some(account) if account.unique_key == unique_key && account.address().is_none() => {
			account.address = Some(address.to_string());
			true
		},
		_ => false,
	}
}

fn balance_or_undefined(result: AdapterResult<Amount>, token: &Token) -> Amount {
	result.unwrap_or_else(|e| {
		warn!(
			target: TRACING_TARGET,
			symbol = %token.symbol,
			error = %e,
			"Failed to fetch balance"
		);
		Amount::undefined()
	})
}
