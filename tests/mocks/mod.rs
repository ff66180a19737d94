//! Centralized fakes and fixtures for integration tests
//!
//! The fakes implement the collaborator traits with scripted behaviour and
//! call tracking so tests can assert on what the orchestrator actually did.

#![allow(dead_code)]

pub mod backend;
pub mod chain;
pub mod fixtures;
pub mod wallet;

#[allow(unused_imports)]
pub use backend::{CallTracker, ScriptedBackend};
#[allow(unused_imports)]
pub use chain::{FakeAllowanceRpc, RecordingSender};
#[allow(unused_imports)]
pub use wallet::FakeWallet;
