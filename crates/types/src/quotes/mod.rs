//! Swap intent, normalized quote options and provider result unions

pub mod fees;
pub mod option;
pub mod provider;
pub mod request;
pub mod response;

pub use fees::{DiscountCode, FeeDisplay, SwapFees};
pub use option::{QuoteOption, QuoteSource, QuoteStep, Routing};
pub use provider::SwapProvider;
pub use request::{
	EditingSide, RoutePriority, SwapQuoteParams, SwapRequest, TokenSide, DEFAULT_SLIPPAGE_PERCENT,
};
pub use response::{ProviderError, ProviderQuote, QuoteOutcome, QuoteResponse};
