//! Fake send primitives and allowance RPC

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use swap_types::{
	AccountId, AdapterResult, AllowanceRpc, Amount, EvmTransactionParams, NativeTransfer,
	SendError, SerializedTransaction, TokenTransfer, TransactionSender, UtxoTransactionParams,
	MAX_UINT256_HEX,
};

use super::backend::CallTracker;

/// Records every send; optionally slow or failing
#[derive(Default)]
pub struct RecordingSender {
	delay: Duration,
	failure: Mutex<Option<SendError>>,
	sent: Mutex<Vec<String>>,
	pub calls: CallTracker,
}

impl RecordingSender {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// The next send fails with `error`
	pub fn fail_next(&self, error: SendError) {
		*self.failure.lock().unwrap() = Some(error);
	}

	/// Kinds of the transactions sent so far, e.g. `evm:0xrouter`
	pub fn sent(&self) -> Vec<String> {
		self.sent.lock().unwrap().clone()
	}

	async fn record(&self, kind: String) -> Result<String, SendError> {
		self.calls.record_call();
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}
		if let Some(error) = self.failure.lock().unwrap().take() {
			return Err(error);
		}
		let mut sent = self.sent.lock().unwrap();
		sent.push(kind);
		Ok(format!("0xhash{}", sent.len()))
	}
}

#[async_trait]
impl TransactionSender for RecordingSender {
	async fn send_evm_transaction(
		&self,
		_from: &AccountId,
		transaction: &EvmTransactionParams,
	) -> Result<String, SendError> {
		self.record(format!("evm:{}", transaction.to)).await
	}

	async fn send_native_transfer(
		&self,
		_from: &AccountId,
		transfer: &NativeTransfer,
	) -> Result<String, SendError> {
		self.record(format!("native:{}", transfer.to)).await
	}

	async fn send_token_transfer(
		&self,
		_from: &AccountId,
		transfer: &TokenTransfer,
	) -> Result<String, SendError> {
		self.record(format!("token:{}", transfer.to)).await
	}

	async fn send_pre_serialized_transaction(
		&self,
		_from: &AccountId,
		transaction: &SerializedTransaction,
	) -> Result<String, SendError> {
		self.record(format!("serialized:{}", transaction.chain_id)).await
	}

	async fn send_utxo_transaction(
		&self,
		_from: &AccountId,
		transfer: &UtxoTransactionParams,
	) -> Result<String, SendError> {
		self.record(format!("utxo:{}", transfer.to)).await
	}
}

/// Allowance RPC backed by a single stored allowance
#[derive(Clone)]
pub struct FakeAllowanceRpc {
	current: Arc<Mutex<Amount>>,
	approvals: Arc<Mutex<Vec<String>>>,
	pub checks: CallTracker,
}

impl FakeAllowanceRpc {
	/// Current allowance in base units
	pub fn new(current: &str) -> Self {
		Self {
			current: Arc::new(Mutex::new(Amount::from_integer_str(current))),
			approvals: Arc::new(Mutex::new(Vec::new())),
			checks: CallTracker::default(),
		}
	}

	/// Spenders approved so far
	pub fn approvals(&self) -> Vec<String> {
		self.approvals.lock().unwrap().clone()
	}
}

#[async_trait]
impl AllowanceRpc for FakeAllowanceRpc {
	async fn check_token_allowance(
		&self,
		_owner: &str,
		_spender: &str,
		_token_contract: &str,
		_chain_id: &str,
	) -> AdapterResult<Amount> {
		self.checks.record_call();
		Ok(self.current.lock().unwrap().clone())
	}

	async fn approve_token_allowance(
		&self,
		_owner: &AccountId,
		spender: &str,
		_token_contract: &str,
		_chain_id: &str,
		amount: &str,
	) -> Result<String, SendError> {
		assert_eq!(amount, MAX_UINT256_HEX);
		*self.current.lock().unwrap() = Amount::from_integer_str(amount);
		let mut approvals = self.approvals.lock().unwrap();
		approvals.push(spender.to_string());
		Ok(format!("0xapprove{}", approvals.len()))
	}
}
