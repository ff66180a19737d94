//! Generic multi-chain aggregator normalization; one option per route

use swap_types::{
	providers::{GenericAggregatorQuote, GenericRoute, GenericRouteStep},
	Amount, QuoteOption, QuoteSource, QuoteStep, Routing, SwapProvider,
};

use super::{declared_or, routing_for, NormalizeContext};

pub fn normalize(quote: &GenericAggregatorQuote, ctx: &NormalizeContext) -> Vec<QuoteOption> {
	quote
		.routes
		.iter()
		.map(|route| normalize_route(route, ctx))
		.collect()
}

fn normalize_route(route: &GenericRoute, ctx: &NormalizeContext) -> QuoteOption {
	let from_amount = Amount::from_base_units(&route.source_amount, route.source_token.decimals);
	let to_amount =
		Amount::from_base_units(&route.destination_amount, route.destination_token.decimals);
	let minimum_to_amount = route
		.destination_amount_min
		.as_deref()
		.map(|raw| Amount::from_base_units(raw, route.destination_token.decimals));

	let network_fee = route
		.network_fee
		.as_ref()
		.map(|fee| Amount::from_base_units(&fee.amount, ctx.from_network.decimals))
		.unwrap_or_else(Amount::zero);

	let price_impact_percent = declared_or(route.price_impact.as_deref(), || {
		ctx.derived_price_impact(&from_amount, &to_amount)
	});

	let (sources, routing) = sources_for(route);

	QuoteOption {
		id: route.id.clone(),
		provider: SwapProvider::GenericAggregator,
		from_token: ctx.from_token.clone(),
		to_token: ctx.to_token.clone(),
		rate: to_amount.checked_div(&from_amount),
		network_fee_fiat: ctx.fee_fiat(&network_fee),
		steps: route.steps.iter().map(normalize_step).collect(),
		execution_duration_secs: route.estimated_time_secs,
		from_amount,
		to_amount,
		minimum_to_amount,
		price_impact_percent,
		network_fee,
		routing,
		sources,
	}
}

/// Percent-annotated steps are parallel legs; otherwise the steps are hops
fn sources_for(route: &GenericRoute) -> (Vec<QuoteSource>, Routing) {
	if route.steps.is_empty() {
		let sources = vec![QuoteSource {
			name: route.provider.clone(),
			proportion: Amount::from(1),
		}];
		return (sources, Routing::Split);
	}

	if route.steps.iter().all(|step| step.percent.is_some()) {
		let sources: Vec<QuoteSource> = route
			.steps
			.iter()
			.map(|step| QuoteSource {
				name: step.tool.name.clone(),
				proportion: Amount::from_base_units(
					&step.percent.unwrap_or_default().to_string(),
					2,
				),
			})
			.collect();
		let routing = routing_for(&sources);
		return (sources, routing);
	}

	let sources = route
		.steps
		.iter()
		.map(|step| QuoteSource {
			name: step.tool.name.clone(),
			proportion: Amount::from(1),
		})
		.collect();
	(sources, Routing::Flow)
}

fn normalize_step(step: &GenericRouteStep) -> QuoteStep {
	QuoteStep {
		tool: step.tool.name.clone(),
		from_chain_id: step.source_token.chain_id.clone(),
		from_symbol: step.source_token.symbol.clone(),
		from_amount: Amount::from_base_units(&step.source_amount, step.source_token.decimals),
		to_chain_id: step.destination_token.chain_id.clone(),
		to_symbol: step.destination_token.symbol.clone(),
		to_amount: Amount::from_base_units(
			&step.destination_amount,
			step.destination_token.decimals,
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::normalizers::test_support::assert_rate_consistent;
	use crate::normalizers::NormalizeContext;
	use swap_types::{
		providers::{GenericNetworkFee, GenericTool},
		CoinType, Network, Token, BITCOIN_MAINNET_CHAIN_ID, ETHEREUM_MAINNET_CHAIN_ID,
	};

	fn btc() -> Token {
		Token::native(CoinType::Btc, BITCOIN_MAINNET_CHAIN_ID, "BTC", 8)
	}

	fn eth() -> Token {
		Token::native(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, "ETH", 18)
	}

	fn route(id: &str, steps: Vec<GenericRouteStep>) -> GenericRoute {
		GenericRoute {
			id: id.to_string(),
			provider: "NEAR Intents".to_string(),
			source_token: btc(),
			source_amount: "10000000".to_string(),
			destination_token: eth(),
			destination_amount: "2950000000000000000".to_string(),
			destination_amount_min: Some("2935250000000000000".to_string()),
			steps,
			network_fee: Some(GenericNetworkFee {
				amount: "2500".to_string(),
				decimals: 8,
				symbol: "BTC".to_string(),
			}),
			price_impact: None,
			requires_token_allowance: false,
			requires_firm_route: true,
			allowance_target: None,
			deposit_address: None,
			transaction_params: None,
			estimated_time_secs: Some(900),
			slippage_percentage: "0.5".to_string(),
		}
	}

	fn step(tool: &str, percent: Option<u32>) -> GenericRouteStep {
		GenericRouteStep {
			source_token: btc(),
			source_amount: "10000000".to_string(),
			destination_token: eth(),
			destination_amount: "2950000000000000000".to_string(),
			tool: GenericTool {
				name: tool.to_string(),
				logo: String::new(),
			},
			percent,
		}
	}

	fn context() -> NormalizeContext {
		NormalizeContext::new(btc(), eth(), Network::bitcoin())
	}

	#[test]
	fn test_fee_descaled_with_source_network_decimals() {
		let options = normalize(
			&GenericAggregatorQuote {
				routes: vec![route("r0", vec![])],
			},
			&context(),
		);
		assert_eq!(options.len(), 1);
		assert_eq!(options[0].from_amount.to_string(), "0.1");
		assert_eq!(options[0].to_amount.to_string(), "2.95");
		assert_eq!(options[0].network_fee.to_string(), "0.000025");
		assert_eq!(options[0].routing, Routing::Split);
		assert_eq!(options[0].sources[0].name, "NEAR Intents");
		assert_rate_consistent(&options[0]);
	}

	#[test]
	fn test_percent_steps_form_split_routing() {
		let options = normalize(
			&GenericAggregatorQuote {
				routes: vec![
					route("split", vec![step("A", Some(50)), step("B", Some(50))]),
					route("hops", vec![step("A", None), step("B", None)]),
				],
			},
			&context(),
		);
		assert_eq!(options[0].routing, Routing::Split);
		assert_eq!(options[0].total_proportion().to_string(), "1");
		assert_eq!(options[1].routing, Routing::Flow);
		assert_eq!(options[1].steps.len(), 2);
	}
}
