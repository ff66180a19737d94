//! Chain-specific transaction payloads and send-primitive inputs

use serde::{Deserialize, Serialize};

use crate::models::CoinType;

/// EVM call: target, calldata, value and gas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EvmTransactionParams {
	pub chain_id: String,
	pub from: String,
	pub to: String,
	/// Wei, decimal or `0x` hex
	pub value: String,
	/// `0x` prefixed calldata
	pub data: String,
	pub gas_limit: Option<String>,
	pub gas_price: Option<String>,
}

/// Solana route parameters
///
/// Which send primitive is used depends on the populated fields: a
/// pre-built `versioned_transaction` wins, then an SPL transfer when a mint
/// is present, otherwise a plain lamport transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SolanaTransactionParams {
	pub chain_id: String,
	pub from: String,
	pub to: String,
	pub lamports: String,
	pub spl_token_mint: Option<String>,
	pub spl_token_amount: Option<String>,
	pub decimals: Option<u8>,
	/// Base64 encoded versioned transaction
	pub versioned_transaction: Option<String>,
}

/// UTXO transfer to a deposit address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UtxoTransactionParams {
	pub chain_id: String,
	pub from: String,
	pub to: String,
	/// Smallest unit (satoshi / zatoshi)
	pub amount: String,
}

/// Discriminated transaction payload carried by generic aggregator routes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransactionPayload {
	Evm(EvmTransactionParams),
	Solana(SolanaTransactionParams),
	Bitcoin(UtxoTransactionParams),
	Zcash(UtxoTransactionParams),
}

impl TransactionPayload {
	pub fn coin(&self) -> CoinType {
		match self {
			TransactionPayload::Evm(_) => CoinType::Eth,
			TransactionPayload::Solana(_) => CoinType::Sol,
			TransactionPayload::Bitcoin(_) => CoinType::Btc,
			TransactionPayload::Zcash(_) => CoinType::Zec,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransfer {
	pub chain_id: String,
	pub to: String,
	/// Base units
	pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
	pub chain_id: String,
	pub to: String,
	pub token_address: String,
	/// Base units
	pub amount: String,
	pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SolanaSendOptions {
	pub max_retries: Option<u64>,
	pub preflight_commitment: Option<String>,
	pub skip_preflight: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SerializedTransaction {
	pub chain_id: String,
	/// Base64 encoded transaction bytes
	pub encoded_transaction: String,
	pub send_options: Option<SolanaSendOptions>,
}
