//! Read model published to the UI collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swap_adapters::SpotPrices;
use swap_types::{
	AllowanceState, ProviderError, ProviderQuote, QuoteOption, SubmittedSwap, SwapError,
	SwapFees, SwapRequest, SwapStatus, SwapValidationError,
};

use crate::validation::Balances;

/// Where the swap sits in the allowance and execution lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SwapPhase {
	#[default]
	NoQuote,
	/// A route is selected but its allowance is not known yet
	QuoteReady,
	AllowanceSufficient,
	AllowanceInsufficient,
	Submitting,
	Success,
	Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwapSnapshot {
	pub request: SwapRequest,
	pub options: Vec<QuoteOption>,
	pub selected_option_id: Option<String>,
	pub quote: Option<ProviderQuote>,
	pub quote_error: Option<ProviderError>,
	pub error_string: Option<String>,
	pub fees: Option<SwapFees>,
	pub quoted_at: Option<DateTime<Utc>>,
	/// Whether the selected route needs a token allowance
	pub allowance_required: bool,
	pub allowance: Option<AllowanceState>,
	pub balances: Balances,
	pub spot_prices: SpotPrices,
	pub is_fetching: bool,
	pub is_submitting: bool,
	/// Seconds until the quote is refreshed automatically
	pub countdown_secs: Option<u32>,
	pub phase: SwapPhase,
	pub submit_error: Option<SwapError>,
	pub validation_error: Option<SwapValidationError>,
	pub last_submission: Option<SubmittedSwap>,
	pub bridge_status: Option<SwapStatus>,
}

impl SwapSnapshot {
	pub fn selected_option(&self) -> Option<&QuoteOption> {
		let id = self.selected_option_id.as_deref()?;
		self.options.iter().find(|option| option.id == id)
	}

	/// Whether the submit affordance is enabled
	pub fn can_submit(&self) -> bool {
		let blocked = self
			.validation_error
			.map(|error| error.disables_submit())
			.unwrap_or(false);
		self.selected_option().is_some() && !self.is_submitting && !blocked
	}
}
