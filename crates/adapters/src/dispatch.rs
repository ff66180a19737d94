//! Route a chain payload to the matching wallet send primitive

use base64::{engine::general_purpose::STANDARD, Engine};
use swap_types::{
	AccountId, NativeTransfer, SerializedTransaction, SolanaSendOptions, SolanaTransactionParams,
	SwapError, TokenTransfer, TransactionPayload, TransactionSender,
};
use tracing::debug;

const TRACING_TARGET: &str = "swap_adapters::dispatch";

/// Send options used for provider-built Solana swap transactions
pub fn jupiter_send_options() -> SolanaSendOptions {
	SolanaSendOptions {
		max_retries: Some(3),
		preflight_commitment: Some("processed".to_string()),
		skip_preflight: Some(true),
	}
}

/// Reject anything that is not standard base64 before it reaches the wallet
pub fn ensure_base64(encoded: &str) -> Result<(), SwapError> {
	if encoded.trim().is_empty() {
		return Err(SwapError::InvalidPayload {
			reason: "serialized transaction is empty".to_string(),
		});
	}
	STANDARD
		.decode(encoded.trim())
		.map(|_| ())
		.map_err(|e| SwapError::InvalidPayload {
			reason: format!("serialized transaction is not base64: {}", e),
		})
}

/// Send a discriminated payload and return the transaction hash
pub async fn send_payload(
	sender: &dyn TransactionSender,
	from: &AccountId,
	payload: &TransactionPayload,
) -> Result<String, SwapError> {
	debug!(
		target: TRACING_TARGET,
		coin = %payload.coin(),
		"Dispatching transaction payload"
	);

	let tx_hash = match payload {
		TransactionPayload::Evm(transaction) => {
			sender.send_evm_transaction(from, transaction).await?
		},
		TransactionPayload::Solana(params) => send_solana(sender, from, params).await?,
		TransactionPayload::Bitcoin(transfer) | TransactionPayload::Zcash(transfer) => {
			sender.send_utxo_transaction(from, transfer).await?
		},
	};
	Ok(tx_hash)
}

/// Pre-serialized transaction first, then SPL transfer, then lamports
async fn send_solana(
	sender: &dyn TransactionSender,
	from: &AccountId,
	params: &SolanaTransactionParams,
) -> Result<String, SwapError> {
	if let Some(encoded) = params.versioned_transaction.as_deref() {
		ensure_base64(encoded)?;
		let transaction = SerializedTransaction {
			chain_id: params.chain_id.clone(),
			encoded_transaction: encoded.trim().to_string(),
			send_options: None,
		};
		return Ok(sender
			.send_pre_serialized_transaction(from, &transaction)
			.await?);
	}

	if let Some(mint) = params.spl_token_mint.as_deref() {
		let amount = params
			.spl_token_amount
			.clone()
			.ok_or_else(|| SwapError::InvalidPayload {
				reason: "SPL transfer without an amount".to_string(),
			})?;
		let transfer = TokenTransfer {
			chain_id: params.chain_id.clone(),
			to: params.to.clone(),
			token_address: mint.to_string(),
			amount,
			decimals: params.decimals,
		};
		return Ok(sender.send_token_transfer(from, &transfer).await?);
	}

	let transfer = NativeTransfer {
		chain_id: params.chain_id.clone(),
		to: params.to.clone(),
		amount: params.lamports.clone(),
	};
	Ok(sender.send_native_transfer(from, &transfer).await?)
}
