//! Cross-chain aggregator quote normalization

use swap_types::{
	providers::{SquidAction, SquidQuote},
	Amount, QuoteOption, QuoteSource, QuoteStep, Routing, SwapProvider,
};

use super::{declared_or, fiat_price_impact, sum_base_units, sum_fiat, NormalizeContext};

pub fn normalize(quote: &SquidQuote, ctx: &NormalizeContext) -> QuoteOption {
	let from_amount = Amount::from_base_units(&quote.from_amount, quote.from_token.decimals);
	let to_amount = Amount::from_base_units(&quote.to_amount, quote.to_token.decimals);
	let minimum_to_amount = Some(&quote.to_amount_min)
		.filter(|raw| !raw.is_empty())
		.map(|raw| Amount::from_base_units(raw, quote.to_token.decimals));

	let network_fee = sum_base_units(
		quote.gas_costs.iter().map(|cost| cost.amount.as_str()),
		ctx.from_network.decimals,
	);
	let network_fee_fiat = sum_fiat(quote.gas_costs.iter().map(|cost| cost.amount_usd.as_deref()))
		.or_else(|| ctx.fee_fiat(&network_fee));

	let price_impact_percent = declared_or(quote.aggregate_price_impact.as_deref(), || {
		let quoted = match (&quote.from_amount_usd, &quote.to_amount_usd) {
			(Some(from_usd), Some(to_usd)) => {
				fiat_price_impact(&Amount::new(from_usd), &Amount::new(to_usd))
			},
			_ => Amount::undefined(),
		};
		quoted.or_else(|| ctx.derived_price_impact(&from_amount, &to_amount))
	});

	let mut sources: Vec<QuoteSource> = Vec::new();
	for action in &quote.actions {
		if !sources.iter().any(|source| source.name == action.provider) {
			sources.push(QuoteSource {
				name: action.provider.clone(),
				proportion: Amount::from(1),
			});
		}
	}

	QuoteOption {
		id: "0".to_string(),
		provider: SwapProvider::Squid,
		from_token: ctx.from_token.clone(),
		to_token: ctx.to_token.clone(),
		rate: to_amount.checked_div(&from_amount),
		routing: Routing::Flow,
		steps: quote.actions.iter().map(normalize_action).collect(),
		execution_duration_secs: Some(quote.estimated_route_duration),
		from_amount,
		to_amount,
		minimum_to_amount,
		price_impact_percent,
		network_fee,
		network_fee_fiat,
		sources,
	}
}

fn normalize_action(action: &SquidAction) -> QuoteStep {
	QuoteStep {
		tool: action.provider.clone(),
		from_chain_id: action.from_chain.clone(),
		from_symbol: action.from_token.symbol.clone(),
		from_amount: Amount::from_base_units(&action.from_amount, action.from_token.decimals),
		to_chain_id: action.to_chain.clone(),
		to_symbol: action.to_token.symbol.clone(),
		to_amount: Amount::from_base_units(&action.to_amount, action.to_token.decimals),
	}
}
