//! Raw payloads of each supported swap provider

pub mod generic_aggregator;
pub mod jupiter;
pub mod lifi;
pub mod squid;
pub mod zeroex;

pub use generic_aggregator::{
	GenericAggregatorError, GenericAggregatorQuote, GenericAggregatorTransactionParams,
	GenericErrorKind, GenericNetworkFee, GenericRoute, GenericRouteStep, GenericTool,
};
pub use jupiter::{
	JupiterError, JupiterQuote, JupiterRouteStep, JupiterSwapInfo, JupiterTransaction,
	JupiterTransactionParams,
};
pub use lifi::{
	LifiAction, LifiError, LifiErrorCode, LifiEstimate, LifiFeeCost, LifiGasCost, LifiQuote,
	LifiRoute, LifiStep, LifiStepType, LifiToken, LifiToolDetails, LifiTransaction,
};
pub use squid::{SquidAction, SquidCost, SquidError, SquidQuote, SquidToken, SquidTransaction};
pub use zeroex::{ZeroExError, ZeroExQuote, ZeroExSource, ZeroExValidationError};
