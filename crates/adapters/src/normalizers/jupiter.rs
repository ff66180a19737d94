//! Solana aggregator quote normalization

use swap_types::{providers::JupiterQuote, Amount, QuoteOption, QuoteSource, SwapProvider};

use super::{declared_or, routing_for, NormalizeContext};

/// Base signature fee; Solana has no gas market to quote from
pub const SOLANA_BASE_FEE_LAMPORTS: &str = "5000";

pub fn normalize(quote: &JupiterQuote, ctx: &NormalizeContext) -> QuoteOption {
	let from_amount = Amount::from_base_units(&quote.in_amount, ctx.from_token.decimals);
	let to_amount = Amount::from_base_units(&quote.out_amount, ctx.to_token.decimals);
	let minimum_to_amount = Some(&quote.other_amount_threshold)
		.filter(|raw| !raw.is_empty())
		.map(|raw| Amount::from_base_units(raw, ctx.to_token.decimals));

	let network_fee =
		Amount::from_base_units(SOLANA_BASE_FEE_LAMPORTS, ctx.from_network.decimals);

	let price_impact_percent = declared_or(Some(quote.price_impact_pct.as_str()), || {
		ctx.derived_price_impact(&from_amount, &to_amount)
	});

	let sources: Vec<QuoteSource> = quote
		.route_plan
		.iter()
		.map(|step| QuoteSource {
			name: step.swap_info.label.clone(),
			proportion: Amount::from_base_units(&step.percent.to_string(), 2),
		})
		.collect();

	QuoteOption {
		id: "0".to_string(),
		provider: SwapProvider::Jupiter,
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
