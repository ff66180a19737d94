//! 0x-style quote normalization

use swap_types::{providers::ZeroExQuote, Amount, QuoteOption, QuoteSource, SwapProvider};

use super::{declared_or, routing_for, NormalizeContext};

pub fn normalize(quote: &ZeroExQuote, ctx: &NormalizeContext) -> QuoteOption {
	let from_amount = Amount::from_base_units(&quote.sell_amount, ctx.from_token.decimals);
	let to_amount = Amount::from_base_units(&quote.buy_amount, ctx.to_token.decimals);
	let minimum_to_amount = quote
		.min_buy_amount
		.as_deref()
		.map(|raw| Amount::from_base_units(raw, ctx.to_token.decimals));

	let gas_used = if quote.estimated_gas.is_empty() {
		&quote.gas
	} else {
		&quote.estimated_gas
	};
	let network_fee = (&Amount::from_integer_str(&quote.gas_price)
		* &Amount::from_integer_str(gas_used))
		.descale(ctx.from_network.decimals);

	let price_impact_percent = declared_or(quote.estimated_price_impact.as_deref(), || {
		ctx.derived_price_impact(&from_amount, &to_amount)
	});

	let sources: Vec<QuoteSource> = quote
		.sources
		.iter()
		.map(|source| QuoteSource {
			name: source.name.clone(),
			proportion: Amount::new(&source.proportion),
		})
		.filter(|source| source.proportion.is_positive())
		.collect();

	QuoteOption {
		id: "0".to_string(),
		provider: SwapProvider::ZeroEx,
		from_token: ctx.from_token.clone(),
		to_token: ctx.to_token.clone(),
		rate: to_amount.checked_div(&from_amount),
		network_fee_fiat: ctx.fee_fiat(&network_fee),
		routing: routing_for(&sources),
		from_amount,
		to_amount,
		minimum_to_amount,
		price_impact_percent,
		network_fee,
		sources,
		steps: Vec::new(),
		execution_duration_secs: None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::normalizers::test_support::{assert_rate_consistent, eth_usdc_context};
	use crate::normalizers::SpotPrices;
	use swap_types::{providers::ZeroExSource, Routing};

	fn quote() -> ZeroExQuote {
		ZeroExQuote {
			sell_amount: "1000000000000000000".to_string(),
			buy_amount: "1800500000".to_string(),
			min_buy_amount: Some("1791497500".to_string()),
			gas_price: "20000000000".to_string(),
			estimated_gas: "150000".to_string(),
			gas: "200000".to_string(),
			sources: vec![
				ZeroExSource {
					name: "Uniswap_V3".to_string(),
					proportion: "0.7".to_string(),
				},
				ZeroExSource {
					name: "Curve".to_string(),
					proportion: "0.3".to_string(),
				},
				ZeroExSource {
					name: "Balancer".to_string(),
					proportion: "0".to_string(),
				},
			],
			..Default::default()
		}
	}

	#[test]
	fn test_normalize_amounts_and_rate() {
		let option = normalize(&quote(), &eth_usdc_context());

		assert_eq!(option.from_amount.to_string(), "1");
		assert_eq!(option.to_amount.to_string(), "1800.5");
		assert_eq!(
			option.minimum_to_amount.clone().unwrap().to_string(),
			"1791.4975"
		);
		assert_eq!(option.rate.to_string(), "1800.5");
		assert_rate_consistent(&option);
	}

	#[test]
	fn test_network_fee_uses_native_decimals() {
		let option = normalize(&quote(), &eth_usdc_context());
		// 20 gwei * 150k gas
		assert_eq!(option.network_fee.to_string(), "0.003");
		assert!(option.network_fee_fiat.is_undefined());

		let priced = eth_usdc_context().with_prices(SpotPrices {
			from_token: Amount::new("1800"),
			to_token: Amount::new("1"),
			from_native: Amount::new("1800"),
		});
		let option = normalize(&quote(), &priced);
		assert_eq!(option.network_fee_fiat.to_string(), "5.4");
	}

	#[test]
	fn test_split_sources_sum_to_one() {
		let option = normalize(&quote(), &eth_usdc_context());
		assert_eq!(option.routing, Routing::Split);
		assert_eq!(option.sources.len(), 2);
		assert_eq!(option.total_proportion().to_string(), "1");
	}

	#[test]
	fn test_price_impact_declared_or_derived() {
		let mut declared = quote();
		declared.estimated_price_impact = Some("0.12".to_string());
		let option = normalize(&declared, &eth_usdc_context());
		assert_eq!(option.price_impact_percent.to_string(), "0.12");

		let priced = eth_usdc_context().with_prices(SpotPrices {
			from_token: Amount::new("1810"),
			to_token: Amount::new("1"),
			from_native: Amount::new("1810"),
		});
		let option = normalize(&quote(), &priced);
		// (1810 - 1800.5) / 1810 * 100
		assert!(option.price_impact_percent > Amount::new("0.52"));
		assert!(option.price_impact_percent < Amount::new("0.53"));
	}

	#[test]
	fn test_zero_sell_amount_yields_undefined_rate() {
		let mut empty = quote();
		empty.sell_amount = "0".to_string();
		let option = normalize(&empty, &eth_usdc_context());
		assert!(option.rate.is_undefined());
	}
}
