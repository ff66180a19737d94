//! Quote normalizers
//!
//! Pure functions turning each provider's raw quote into [`QuoteOption`]s.
//! Multi-route providers yield one option per route; single-route providers
//! yield exactly one. All arithmetic goes through [`Amount`], so a zero
//! divisor produces an undefined value rather than a panic.

pub mod generic_aggregator;
pub mod jupiter;
pub mod lifi;
pub mod squid;
pub mod zeroex;

use serde::{Deserialize, Serialize};
use swap_types::{Amount, Network, ProviderQuote, QuoteOption, QuoteSource, Routing, Token};

/// Tolerance when checking that split proportions add up to one
const PROPORTION_EPSILON: &str = "0.000001";

/// Fiat spot prices supplied by the UI collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotPrices {
	pub from_token: Amount,
	pub to_token: Amount,
	/// Native asset of the source network
	pub from_native: Amount,
}

/// Token, network and price context a raw quote is interpreted against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeContext {
	pub from_token: Token,
	pub to_token: Token,
	/// Network fees are descaled with this network's native decimals
	pub from_network: Network,
	pub prices: SpotPrices,
}

impl NormalizeContext {
	pub fn new(from_token: Token, to_token: Token, from_network: Network) -> Self {
		Self {
			from_token,
			to_token,
			from_network,
			prices: SpotPrices::default(),
		}
	}

	pub fn with_prices(mut self, prices: SpotPrices) -> Self {
		self.prices = prices;
		self
	}

	/// Fiat value of a native-asset network fee
	pub(crate) fn fee_fiat(&self, network_fee: &Amount) -> Amount {
		network_fee * &self.prices.from_native
	}

	/// Price impact from the fiat delta between both legs, in percent
	pub(crate) fn derived_price_impact(&self, from_amount: &Amount, to_amount: &Amount) -> Amount {
		let from_fiat = from_amount * &self.prices.from_token;
		let to_fiat = to_amount * &self.prices.to_token;
		fiat_price_impact(&from_fiat, &to_fiat)
	}
}

/// Normalize whichever arm of the union is populated
pub fn normalize_quote(quote: &ProviderQuote, ctx: &NormalizeContext) -> Vec<QuoteOption> {
	match quote {
		ProviderQuote::ZeroEx(quote) => vec![zeroex::normalize(quote, ctx)],
		ProviderQuote::Jupiter(quote) => vec![jupiter::normalize(quote, ctx)],
		ProviderQuote::Lifi(quote) => lifi::normalize(quote, ctx),
		ProviderQuote::Squid(quote) => vec![squid::normalize(quote, ctx)],
		ProviderQuote::GenericAggregator(quote) => generic_aggregator::normalize(quote, ctx),
	}
}

/// `(from - to) / from * 100`; undefined when the from leg has no value
pub(crate) fn fiat_price_impact(from_fiat: &Amount, to_fiat: &Amount) -> Amount {
	let delta = from_fiat - to_fiat;
	&delta.checked_div(from_fiat) * &Amount::from(100)
}

/// Provider-declared impact when present, otherwise `fallback`
pub(crate) fn declared_or(declared: Option<&str>, fallback: impl FnOnce() -> Amount) -> Amount {
	match declared.map(|raw| Amount::parse_signed(raw).unwrap_or_default()) {
		Some(amount) if !amount.is_undefined() => amount,
		_ => fallback(),
	}
}

/// Split only when the sources account for the whole fill
pub(crate) fn routing_for(sources: &[QuoteSource]) -> Routing {
	if sources.is_empty() {
		return Routing::Flow;
	}
	let total: Amount = sources.iter().map(|source| source.proportion.clone()).sum();
	let deviation = (&total - &Amount::from(1)).abs();
	if deviation <= Amount::new(PROPORTION_EPSILON) {
		Routing::Split
	} else {
		Routing::Flow
	}
}

/// Sum raw base-unit integers and descale them once
pub(crate) fn sum_base_units<'a>(raw: impl Iterator<Item = &'a str>, decimals: u8) -> Amount {
	raw.map(Amount::from_integer_str)
		.sum::<Amount>()
		.descale(decimals)
}

/// Sum optional fiat strings; undefined when any entry is missing
pub(crate) fn sum_fiat<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Amount {
	values
		.map(|value| value.map(Amount::new).unwrap_or_default())
		.sum()
}

#[cfg(test)]
pub(crate) mod test_support {
	use super::*;
	use swap_types::{CoinType, ETHEREUM_MAINNET_CHAIN_ID};

	pub fn eth_usdc_context() -> NormalizeContext {
		NormalizeContext::new(
			Token::native(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, "ETH", 18),
			Token::new(
				CoinType::Eth,
				ETHEREUM_MAINNET_CHAIN_ID,
				"0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
				"USDC",
				6,
			),
			Network::ethereum(),
		)
	}

	/// `to_amount == from_amount * rate` up to division precision
	pub fn assert_rate_consistent(option: &QuoteOption) {
		let recomputed = &option.from_amount * &option.rate;
		let deviation = (&recomputed - &option.to_amount).abs();
		assert!(
			deviation <= Amount::new("0.000000000000000001"),
			"rate inconsistent: {} * {} != {}",
			option.from_amount,
			option.rate,
			option.to_amount
		);
	}
}
