//! Scripted swap backend with per-call delays

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use swap_types::{
	AdapterError, AdapterResult, QuoteResponse, SwapBackend, SwapQuoteParams, SwapStatus,
	SwapStatusParams, TransactionParams, TransactionResponse,
};

/// Call tracking for verifying which backend endpoints were hit
#[derive(Debug, Clone, Default)]
pub struct CallTracker {
	calls: Arc<AtomicUsize>,
}

impl CallTracker {
	pub fn record_call(&self) {
		self.calls.fetch_add(1, Ordering::SeqCst);
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

/// Backend answering from queued responses.
///
/// Queued quotes are consumed in order; once the queue is empty the
/// fallback quote is returned immediately. Statuses behave the same way,
/// repeating the last one.
#[derive(Default)]
pub struct ScriptedBackend {
	quotes: Mutex<VecDeque<(Duration, QuoteResponse)>>,
	fallback_quote: Mutex<Option<QuoteResponse>>,
	transactions: Mutex<VecDeque<TransactionResponse>>,
	statuses: Mutex<VecDeque<SwapStatus>>,
	last_status: Mutex<Option<SwapStatus>>,
	quote_params: Mutex<Vec<SwapQuoteParams>>,
	transaction_params: Mutex<Vec<TransactionParams>>,
	pub quote_calls: CallTracker,
	pub transaction_calls: CallTracker,
	pub status_calls: CallTracker,
}

impl ScriptedBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// Response used whenever nothing is queued
	pub fn with_quote(self, response: QuoteResponse) -> Self {
		*self.fallback_quote.lock().unwrap() = Some(response);
		self
	}

	/// Queue one response delivered after `delay`
	pub fn then_quote(self, delay: Duration, response: QuoteResponse) -> Self {
		self.quotes.lock().unwrap().push_back((delay, response));
		self
	}

	pub fn then_transaction(self, response: TransactionResponse) -> Self {
		self.transactions.lock().unwrap().push_back(response);
		self
	}

	pub fn then_status(self, status: SwapStatus) -> Self {
		self.statuses.lock().unwrap().push_back(status);
		self
	}

	pub fn quote_params(&self) -> Vec<SwapQuoteParams> {
		self.quote_params.lock().unwrap().clone()
	}

	pub fn transaction_params(&self) -> Vec<TransactionParams> {
		self.transaction_params.lock().unwrap().clone()
	}
}

#[async_trait]
impl SwapBackend for ScriptedBackend {
	async fn generate_quote(&self, params: &SwapQuoteParams) -> AdapterResult<QuoteResponse> {
		self.quote_calls.record_call();
		self.quote_params.lock().unwrap().push(params.clone());

		let scripted = self.quotes.lock().unwrap().pop_front();
		let (delay, response) = match scripted {
			Some(scripted) => scripted,
			None => {
				let fallback = self.fallback_quote.lock().unwrap().clone();
				let response = fallback.ok_or_else(|| AdapterError::InvalidResponse {
					reason: "no scripted quote".to_string(),
				})?;
				(Duration::ZERO, response)
			},
		};
		if !delay.is_zero() {
			tokio::time::sleep(delay).await;
		}
		Ok(response)
	}

	async fn generate_transaction(
		&self,
		params: &TransactionParams,
	) -> AdapterResult<TransactionResponse> {
		self.transaction_calls.record_call();
		self.transaction_params.lock().unwrap().push(params.clone());
		Ok(self
			.transactions
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_default())
	}

	async fn get_swap_status(&self, _params: &SwapStatusParams) -> AdapterResult<SwapStatus> {
		self.status_calls.record_call();
		let next = self.statuses.lock().unwrap().pop_front();
		let mut last = self.last_status.lock().unwrap();
		if let Some(status) = next {
			*last = Some(status);
		}
		Ok(last.clone().unwrap_or_else(SwapStatus::pending))
	}
}
