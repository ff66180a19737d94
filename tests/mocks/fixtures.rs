//! Tokens, routes and wiring shared by the integration tests

use std::sync::Arc;

use swap_aggregator::{AdapterDeps, AdapterRegistry, OrchestratorDeps};
use swap_types::{
	providers::{
		GenericAggregatorError, GenericAggregatorQuote, GenericErrorKind, GenericNetworkFee,
		GenericRoute,
	},
	AccountId, CoinType, EvmTransactionParams, ProviderError, ProviderQuote, QuoteResponse,
	SwapRequest, Token, TransactionPayload, ETHEREUM_MAINNET_CHAIN_ID, POLYGON_MAINNET_CHAIN_ID,
};

use super::{FakeAllowanceRpc, FakeWallet, RecordingSender, ScriptedBackend};

pub const OWNER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const POLYGON_USDC: &str = "0x3c499c542cef5e3811e1192ce70d8cc03d5c3359";
pub const ROUTER: &str = "0xdef1c0ded9bec7f1a1670819833240f027b25eff";
pub const SPENDER: &str = "0x1231deb6f5749ef6ce6943a275a1d3e7486f4eae";

pub fn usdc() -> Token {
	Token::new(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, USDC, "USDC", 6)
}

pub fn eth() -> Token {
	Token::native(CoinType::Eth, ETHEREUM_MAINNET_CHAIN_ID, "ETH", 18)
}

pub fn polygon_usdc() -> Token {
	Token::new(CoinType::Eth, POLYGON_MAINNET_CHAIN_ID, POLYGON_USDC, "USDC", 6)
}

pub fn owner() -> AccountId {
	AccountId::new(CoinType::Eth, OWNER)
}

pub fn request(from: Token, to: Token) -> SwapRequest {
	SwapRequest {
		from_account: Some(owner()),
		from_token: Some(from),
		to_account_id: Some(owner()),
		to_token: Some(to),
		..Default::default()
	}
}

fn evm_payload(chain_id: &str) -> TransactionPayload {
	TransactionPayload::Evm(EvmTransactionParams {
		chain_id: chain_id.to_string(),
		from: OWNER.to_string(),
		to: ROUTER.to_string(),
		value: "0".to_string(),
		data: "0xd9627aa4".to_string(),
		gas_limit: Some("210000".to_string()),
		gas_price: None,
	})
}

/// Route with an embedded EVM payload and no allowance requirement
pub fn route(id: &str, from: &Token, from_base: &str, to: &Token, to_base: &str) -> GenericRoute {
	GenericRoute {
		id: id.to_string(),
		provider: "venue".to_string(),
		source_token: from.clone(),
		source_amount: from_base.to_string(),
		destination_token: to.clone(),
		destination_amount: to_base.to_string(),
		destination_amount_min: None,
		steps: Vec::new(),
		network_fee: None,
		price_impact: None,
		requires_token_allowance: false,
		requires_firm_route: false,
		allowance_target: None,
		deposit_address: None,
		transaction_params: Some(evm_payload(&from.chain_id)),
		estimated_time_secs: None,
		slippage_percentage: "0.5".to_string(),
	}
}

pub fn with_allowance(mut route: GenericRoute, spender: &str) -> GenericRoute {
	route.requires_token_allowance = true;
	route.allowance_target = Some(spender.to_string());
	route
}

/// Fee in base units of the source network's native asset
pub fn with_network_fee(mut route: GenericRoute, amount: &str) -> GenericRoute {
	route.network_fee = Some(GenericNetworkFee {
		amount: amount.to_string(),
		decimals: 18,
		symbol: "ETH".to_string(),
	});
	route
}

pub fn quote(routes: Vec<GenericRoute>) -> QuoteResponse {
	QuoteResponse::quote(ProviderQuote::GenericAggregator(GenericAggregatorQuote { routes }))
}

pub fn liquidity_error() -> QuoteResponse {
	QuoteResponse::error(ProviderError::GenericAggregator(GenericAggregatorError {
		message: "Not enough liquidity".to_string(),
		kind: GenericErrorKind::InsufficientLiquidity,
	}))
}

/// Collaborators around one orchestrator, kept for assertions
pub struct Harness {
	pub backend: Arc<ScriptedBackend>,
	pub wallet: Arc<FakeWallet>,
	pub sender: Arc<RecordingSender>,
	pub allowance: FakeAllowanceRpc,
}

impl Harness {
	pub fn new(backend: ScriptedBackend, wallet: FakeWallet) -> Self {
		Self::with_chain(backend, wallet, RecordingSender::new(), FakeAllowanceRpc::new("0"))
	}

	pub fn with_chain(
		backend: ScriptedBackend,
		wallet: FakeWallet,
		sender: RecordingSender,
		allowance: FakeAllowanceRpc,
	) -> Self {
		Self {
			backend: Arc::new(backend),
			wallet: Arc::new(wallet),
			sender: Arc::new(sender),
			allowance,
		}
	}

	pub fn deps(&self) -> OrchestratorDeps {
		let adapter_deps = AdapterDeps::new(
			self.backend.clone(),
			self.sender.clone(),
			Arc::new(self.allowance.clone()),
		);
		OrchestratorDeps {
			backend: self.backend.clone(),
			wallet: self.wallet.clone(),
			registry: Arc::new(AdapterRegistry::with_defaults(adapter_deps)),
		}
	}
}
