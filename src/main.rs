//! Swap Aggregator CLI
//!
//! Requests one quote from the configured backend and prints the normalized
//! options as JSON.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use swap_aggregator::{
	fetch_quote, http_backend_config, init_tracing_from_settings, load_config_from,
	log_service_info, AccountId, Amount, CoinType, HttpSwapBackend, Network, NormalizeContext,
	RoutePriority, SwapProvider, SwapQuoteParams, Token,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
	/// Configuration file; `config/config.*` when omitted
	#[arg(long, env = "SWAP_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Fetch and normalize a single quote
	Quote(QuoteArgs),
}

#[derive(Args, Debug)]
struct QuoteArgs {
	#[arg(long, default_value = "eth")]
	from_coin: CoinType,
	#[arg(long)]
	from_chain: String,
	/// Token contract; empty for the native asset
	#[arg(long, default_value = "")]
	from_token: String,
	#[arg(long, default_value = "FROM")]
	from_symbol: String,
	#[arg(long)]
	from_decimals: u8,

	#[arg(long, default_value = "eth")]
	to_coin: CoinType,
	#[arg(long)]
	to_chain: String,
	#[arg(long, default_value = "")]
	to_token: String,
	#[arg(long, default_value = "TO")]
	to_symbol: String,
	#[arg(long)]
	to_decimals: u8,

	/// Amount in display units
	#[arg(long)]
	amount: String,
	/// Quote by the buy side instead of the sell side
	#[arg(long)]
	buy: bool,

	/// Sender address
	#[arg(long)]
	account: String,
	/// Recipient address; defaults to the sender
	#[arg(long)]
	to_account: Option<String>,

	#[arg(long)]
	provider: Option<SwapProvider>,
	#[arg(long)]
	slippage: Option<String>,
	#[arg(long)]
	fastest: bool,
}

fn token(coin: CoinType, chain: &str, contract: &str, symbol: &str, decimals: u8) -> Token {
	if contract.is_empty() {
		Token::native(coin, chain, symbol, decimals)
	} else {
		Token::new(coin, chain, contract, symbol, decimals)
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let cli = Cli::parse();
	let settings = load_config_from(cli.config.as_deref())?;
	init_tracing_from_settings(&settings)?;
	log_service_info();

	let Command::Quote(args) = cli.command;

	let from_token = token(
		args.from_coin,
		&args.from_chain,
		&args.from_token,
		&args.from_symbol,
		args.from_decimals,
	);
	let to_token = token(
		args.to_coin,
		&args.to_chain,
		&args.to_token,
		&args.to_symbol,
		args.to_decimals,
	);

	let side_decimals = if args.buy {
		to_token.decimals
	} else {
		from_token.decimals
	};
	let amount = Amount::new(&args.amount);
	if !amount.is_positive() || amount.exceeds_decimals(side_decimals) {
		return Err(format!("Invalid amount '{}'", args.amount).into());
	}
	let base_units = amount
		.to_base_units(side_decimals)
		.ok_or_else(|| format!("Invalid amount '{}'", args.amount))?;
	let (from_amount, to_amount) = if args.buy {
		(String::new(), base_units)
	} else {
		(base_units, String::new())
	};

	let to_address = args.to_account.unwrap_or_else(|| args.account.clone());
	let params = SwapQuoteParams {
		from_account_id: AccountId::new(args.from_coin, args.account),
		from_chain_id: from_token.chain_id.clone(),
		from_token: from_token.contract_address.clone(),
		from_amount,
		to_account_id: AccountId::new(args.to_coin, to_address),
		to_chain_id: to_token.chain_id.clone(),
		to_token: to_token.contract_address.clone(),
		to_amount,
		slippage_percentage: args
			.slippage
			.unwrap_or_else(|| settings.orchestrator.default_slippage_percent.clone()),
		route_priority: if args.fastest {
			RoutePriority::Fastest
		} else {
			RoutePriority::Cheapest
		},
		provider: args
			.provider
			.unwrap_or(settings.orchestrator.default_provider),
	};

	let backend = HttpSwapBackend::new(http_backend_config(&settings)?)?;
	let network = Network::for_coin(from_token.coin, from_token.chain_id.clone());
	let ctx = NormalizeContext::new(from_token, to_token, network);

	info!(provider = %params.provider, "Requesting quote");
	let report = fetch_quote(&backend, &params, &ctx).await?;
	info!(options = report.options.len(), "Quote received");

	println!("{}", serde_json::to_string_pretty(&report)?);
	Ok(())
}
