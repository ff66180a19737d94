//! Platform fee breakdown returned alongside quotes

use serde::{Deserialize, Serialize};

use crate::Amount;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum DiscountCode {
	#[default]
	None,
	UnusedOffer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapFees {
	pub fee_param: String,
	pub fee_pct: String,
	pub discount_pct: String,
	pub effective_fee_pct: String,
	pub discount_code: DiscountCode,
	pub has_platform_fee: bool,
}

/// How the fee line should read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeDisplay {
	Standard { percent: String },
	Discounted { original: String, effective: String },
	/// Fee fully discounted away
	Waived { original: String },
}

impl SwapFees {
	pub fn display_fee(&self) -> Option<FeeDisplay> {
		if !self.has_platform_fee {
			return None;
		}

		let effective = Amount::new(&self.effective_fee_pct);
		let discount = Amount::new(&self.discount_pct);
		if effective.is_zero() {
			return Some(FeeDisplay::Waived {
				original: self.fee_pct.clone(),
			});
		}
		if self.discount_code != DiscountCode::None && discount.is_positive() {
			return Some(FeeDisplay::Discounted {
				original: self.fee_pct.clone(),
				effective: effective.to_string(),
			});
		}
		Some(FeeDisplay::Standard {
			percent: effective.to_string(),
		})
	}
}
