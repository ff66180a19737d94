//! Adapter-facing errors, execution models and collaborator traits

pub mod errors;
pub mod models;
pub mod traits;

pub use errors::{AdapterError, SendError, SwapError};
pub use models::{RouteContext, SubmittedSwap};
pub use traits::{AllowanceRpc, ProviderAdapter, SwapBackend, TransactionSender, WalletProvider};

#[cfg(any(test, feature = "test-util"))]
pub use traits::{MockAllowanceRpc, MockSwapBackend, MockTransactionSender, MockWalletProvider};

/// Result type for backend and RPC operations
pub type AdapterResult<T> = Result<T, AdapterError>;
