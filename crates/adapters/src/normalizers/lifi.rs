//! Routed multi-step quote normalization; one option per route

use swap_types::{
	providers::{LifiGasCost, LifiQuote, LifiRoute, LifiStep},
	Amount, QuoteOption, QuoteSource, QuoteStep, Routing, SwapProvider,
};

use super::{fiat_price_impact, sum_base_units, sum_fiat, NormalizeContext};

pub fn normalize(quote: &LifiQuote, ctx: &NormalizeContext) -> Vec<QuoteOption> {
	quote
		.routes
		.iter()
		.map(|route| normalize_route(route, ctx))
		.collect()
}

fn normalize_route(route: &LifiRoute, ctx: &NormalizeContext) -> QuoteOption {
	let from_amount = Amount::from_base_units(&route.from_amount, route.from_token.decimals);
	let to_amount = Amount::from_base_units(&route.to_amount, route.to_token.decimals);
	let minimum_to_amount = Some(&route.to_amount_min)
		.filter(|raw| !raw.is_empty())
		.map(|raw| Amount::from_base_units(raw, route.to_token.decimals));

	let gas_costs: Vec<&LifiGasCost> = route
		.steps
		.iter()
		.flat_map(|step| step.estimate.gas_costs.iter())
		.collect();
	let network_fee = sum_base_units(
		gas_costs.iter().map(|cost| cost.amount.as_str()),
		ctx.from_network.decimals,
	);
	let network_fee_fiat = sum_fiat(gas_costs.iter().map(|cost| cost.amount_usd.as_deref()))
		.or_else(|| ctx.fee_fiat(&network_fee));

	let price_impact_percent = match (&route.from_amount_usd, &route.to_amount_usd) {
		(Some(from_usd), Some(to_usd)) => {
			fiat_price_impact(&Amount::new(from_usd), &Amount::new(to_usd))
		},
		_ => Amount::undefined(),
	}
	.or_else(|| ctx.derived_price_impact(&from_amount, &to_amount));

	let sources = route
		.steps
		.iter()
		.map(|step| QuoteSource {
			name: tool_name(step),
			proportion: Amount::from(1),
		})
		.collect();

	QuoteOption {
		id: route.id.clone(),
		provider: SwapProvider::Lifi,
		from_token: ctx.from_token.clone(),
		to_token: ctx.to_token.clone(),
		rate: to_amount.checked_div(&from_amount),
		routing: Routing::Flow,
		steps: route.steps.iter().map(normalize_step).collect(),
		execution_duration_secs: Some(
			route
				.steps
				.iter()
				.map(|step| step.estimate.execution_duration)
				.sum(),
		),
		from_amount,
		to_amount,
		minimum_to_amount,
		price_impact_percent,
		network_fee,
		network_fee_fiat,
		sources,
	}
}

fn tool_name(step: &LifiStep) -> String {
	if step.tool_details.name.is_empty() {
		step.tool.clone()
	} else {
		step.tool_details.name.clone()
	}
}

fn normalize_step(step: &LifiStep) -> QuoteStep {
	let action = &step.action;
	QuoteStep {
		tool: tool_name(step),
		from_chain_id: action.from_chain_id.clone(),
		from_symbol: action.from_token.symbol.clone(),
		from_amount: Amount::from_base_units(
			&step.estimate.from_amount,
			action.from_token.decimals,
		),
		to_chain_id: action.to_chain_id.clone(),
		to_symbol: action.to_token.symbol.clone(),
		to_amount: Amount::from_base_units(&step.estimate.to_amount, action.to_token.decimals),
	}
}
