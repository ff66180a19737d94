//! Swap provider identifiers and their pair support

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{CoinType, Token};

/// Backend that fills a swap; `Auto` lets the backend pick
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum SwapProvider {
	#[default]
	Auto,
	ZeroEx,
	Jupiter,
	Lifi,
	Squid,
	GenericAggregator,
}

impl SwapProvider {
	/// Every concrete provider, in registry order
	pub const ALL: [SwapProvider; 5] = [
		SwapProvider::ZeroEx,
		SwapProvider::Jupiter,
		SwapProvider::Lifi,
		SwapProvider::Squid,
		SwapProvider::GenericAggregator,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			SwapProvider::Auto => "auto",
			SwapProvider::ZeroEx => "zeroEx",
			SwapProvider::Jupiter => "jupiter",
			SwapProvider::Lifi => "lifi",
			SwapProvider::Squid => "squid",
			SwapProvider::GenericAggregator => "genericAggregator",
		}
	}

	/// Whether this provider can quote `from` → `to`
	pub fn supports(&self, from: &Token, to: &Token) -> bool {
		let same_chain = from.chain_id == to.chain_id;
		match self {
			SwapProvider::Auto | SwapProvider::GenericAggregator => true,
			SwapProvider::ZeroEx => {
				from.coin == CoinType::Eth && to.coin == CoinType::Eth && same_chain
			},
			SwapProvider::Jupiter => {
				from.coin == CoinType::Sol && to.coin == CoinType::Sol && same_chain
			},
			SwapProvider::Lifi => {
				matches!(from.coin, CoinType::Eth | CoinType::Sol)
					&& matches!(to.coin, CoinType::Eth | CoinType::Sol)
			},
			SwapProvider::Squid => from.coin == CoinType::Eth && to.coin == CoinType::Eth,
		}
	}
}

impl fmt::Display for SwapProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SwapProvider {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
			"auto" => Ok(SwapProvider::Auto),
			"zeroex" | "0x" => Ok(SwapProvider::ZeroEx),
			"jupiter" => Ok(SwapProvider::Jupiter),
			"lifi" => Ok(SwapProvider::Lifi),
			"squid" => Ok(SwapProvider::Squid),
			"genericaggregator" | "generic" => Ok(SwapProvider::GenericAggregator),
			_ => Err(format!("unknown swap provider '{}'", s)),
		}
	}
}
