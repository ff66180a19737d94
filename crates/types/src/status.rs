//! Cross-chain settlement status

use serde::{Deserialize, Serialize};

use crate::quotes::SwapProvider;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapStatusParams {
	pub provider: SwapProvider,
	pub route_id: String,
	pub tx_hash: String,
	pub from_chain_id: String,
	pub to_chain_id: String,
	pub tool: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SwapStatusCode {
	NotFound,
	#[default]
	Pending,
	Success,
	Failed,
	Refunded,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapStatus {
	pub status: SwapStatusCode,
	pub substatus: Option<String>,
	pub message: Option<String>,
	pub destination_tx_hash: Option<String>,
	pub explorer_link: Option<String>,
}

impl SwapStatus {
	pub fn pending() -> Self {
		Self::default()
	}

	pub fn with_status(status: SwapStatusCode) -> Self {
		Self {
			status,
			..Default::default()
		}
	}

	/// No further polling needed
	pub fn is_final(&self) -> bool {
		matches!(
			self.status,
			SwapStatusCode::Success | SwapStatusCode::Failed | SwapStatusCode::Refunded
		)
	}
}
