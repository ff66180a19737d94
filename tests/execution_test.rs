//! Allowance approval and swap execution through the orchestrator

mod mocks;

use std::time::Duration;

use mocks::fixtures::{
	eth, polygon_usdc, quote, request, route, usdc, with_allowance, with_network_fee, Harness,
	ROUTER, SPENDER,
};
use mocks::{FakeAllowanceRpc, FakeWallet, RecordingSender, ScriptedBackend};
use swap_aggregator::{
	OrchestratorConfig, SubmitOutcome, SubmitSkipped, SwapOrchestrator, SwapPhase,
};
use swap_types::{
	SendError, SwapError, SwapProvider, SwapStatus, SwapStatusCode, SwapValidationError,
};
use tokio::time::sleep;

fn funded_wallet() -> FakeWallet {
	FakeWallet::new()
		.with_balance(&usdc(), "100")
		.with_balance(&eth(), "1")
}

fn sell_eth(harness: &Harness) -> SwapOrchestrator {
	let mut initial = request(eth(), usdc());
	initial.from_amount = "0.5".to_string();
	SwapOrchestrator::spawn(harness.deps(), OrchestratorConfig::default(), initial)
}

fn eth_to_usdc_backend() -> ScriptedBackend {
	ScriptedBackend::new().with_quote(quote(vec![route(
		"r1",
		&eth(),
		"500000000000000000",
		&usdc(),
		"1250000000",
	)]))
}

#[tokio::test(start_paused = true)]
async fn test_approval_precedes_exchange() {
	let backend = ScriptedBackend::new().with_quote(quote(vec![with_allowance(
		route("r1", &usdc(), "10000000", &eth(), "4000000000000000"),
		SPENDER,
	)]));
	let harness = Harness::with_chain(
		backend,
		funded_wallet(),
		RecordingSender::new(),
		FakeAllowanceRpc::new("0"),
	);
	let mut initial = request(usdc(), eth());
	initial.from_amount = "10".to_string();
	let orchestrator =
		SwapOrchestrator::spawn(harness.deps(), OrchestratorConfig::default(), initial);

	sleep(Duration::from_millis(10)).await;
	let snapshot = orchestrator.snapshot();
	assert!(snapshot.allowance_required);
	assert_eq!(snapshot.phase, SwapPhase::AllowanceInsufficient);
	assert_eq!(
		snapshot.validation_error,
		Some(SwapValidationError::InsufficientAllowance)
	);
	assert!(snapshot.can_submit());

	let outcome = orchestrator.submit().await.unwrap();
	assert!(matches!(outcome, SubmitOutcome::Approved { ref tx_hash } if tx_hash == "0xapprove1"));
	assert_eq!(harness.allowance.approvals(), vec![SPENDER.to_string()]);
	assert!(harness.sender.sent().is_empty());

	sleep(Duration::from_millis(10)).await;
	let snapshot = orchestrator.snapshot();
	assert_eq!(snapshot.phase, SwapPhase::AllowanceSufficient);
	assert_eq!(snapshot.validation_error, None);

	let outcome = orchestrator.submit().await.unwrap();
	let swap = match outcome {
		SubmitOutcome::Swapped(swap) => swap,
		other => panic!("expected a swap, got {:?}", other),
	};
	assert_eq!(swap.provider, SwapProvider::GenericAggregator);
	assert_eq!(swap.route_id, "r1");
	assert_eq!(swap.tx_hash, "0xhash1");
	assert_eq!(harness.sender.sent(), vec![format!("evm:{}", ROUTER)]);

	let snapshot = orchestrator.snapshot();
	assert_eq!(snapshot.phase, SwapPhase::Success);
	assert_eq!(snapshot.request.from_amount, "");
	assert_eq!(snapshot.request.to_amount, "");
	assert!(snapshot.options.is_empty());
	assert!(snapshot.quote.is_none());
	assert_eq!(snapshot.last_submission, Some(swap));
	orchestrator.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_failed_exchange_keeps_quote_for_retry() {
	let harness = Harness::new(eth_to_usdc_backend(), funded_wallet());
	harness.sender.fail_next(SendError::Failed {
		reason: "nonce too low".to_string(),
	});
	let orchestrator = sell_eth(&harness);
	sleep(Duration::from_millis(10)).await;
	assert_eq!(orchestrator.snapshot().phase, SwapPhase::AllowanceSufficient);

	let outcome = orchestrator.submit().await.unwrap();
	assert!(matches!(
		outcome,
		SubmitOutcome::Failed(SwapError::Send(SendError::Failed { .. }))
	));

	let snapshot = orchestrator.snapshot();
	assert_eq!(snapshot.phase, SwapPhase::Failed);
	assert!(snapshot.submit_error.is_some());
	assert_eq!(snapshot.options.len(), 1);
	assert_eq!(snapshot.request.from_amount, "0.5");
	assert_eq!(snapshot.request.to_amount, "1250");
	assert!(snapshot.countdown_secs.is_some());

	let retry = orchestrator.submit().await.unwrap();
	assert!(matches!(retry, SubmitOutcome::Swapped(_)));
	assert_eq!(orchestrator.snapshot().phase, SwapPhase::Success);
	assert_eq!(harness.backend.quote_calls.call_count(), 1);
	orchestrator.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_submits_send_once() {
	let harness = Harness::with_chain(
		eth_to_usdc_backend(),
		funded_wallet(),
		RecordingSender::new().with_delay(Duration::from_secs(1)),
		FakeAllowanceRpc::new("0"),
	);
	let orchestrator = sell_eth(&harness);
	sleep(Duration::from_millis(10)).await;

	let (first, second) = tokio::join!(orchestrator.submit(), orchestrator.submit());
	assert!(matches!(first.unwrap(), SubmitOutcome::Swapped(_)));
	assert_eq!(
		second.unwrap(),
		SubmitOutcome::Skipped(SubmitSkipped::AlreadySubmitting)
	);
	assert_eq!(harness.sender.calls.call_count(), 1);
	orchestrator.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_submit_without_quote_is_skipped() {
	let harness = Harness::new(eth_to_usdc_backend(), funded_wallet());
	let orchestrator = SwapOrchestrator::spawn(
		harness.deps(),
		OrchestratorConfig::default(),
		request(eth(), usdc()),
	);

	let outcome = orchestrator.submit().await.unwrap();
	assert_eq!(outcome, SubmitOutcome::Skipped(SubmitSkipped::NoQuote));
	assert_eq!(harness.sender.calls.call_count(), 0);
	orchestrator.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_blocking_validation_prevents_send() {
	let backend = ScriptedBackend::new().with_quote(quote(vec![with_network_fee(
		route("r1", &eth(), "500000000000000000", &usdc(), "1250000000"),
		"600000000000000000",
	)]));
	let harness = Harness::new(backend, funded_wallet());
	let orchestrator = sell_eth(&harness);
	sleep(Duration::from_millis(10)).await;

	let outcome = orchestrator.submit().await.unwrap();
	assert_eq!(
		outcome,
		SubmitOutcome::Skipped(SubmitSkipped::Blocked(
			SwapValidationError::InsufficientFundsForGas
		))
	);
	assert_eq!(harness.sender.calls.call_count(), 0);
	orchestrator.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_cross_chain_swap_is_polled_until_final() {
	let backend = ScriptedBackend::new()
		.with_quote(quote(vec![route(
			"bridge-1",
			&usdc(),
			"10000000",
			&polygon_usdc(),
			"9950000",
		)]))
		.then_status(SwapStatus::pending())
		.then_status(SwapStatus::pending())
		.then_status(SwapStatus::with_status(SwapStatusCode::Success));
	let harness = Harness::new(backend, funded_wallet());
	let mut initial = request(usdc(), polygon_usdc());
	initial.from_amount = "10".to_string();
	let orchestrator =
		SwapOrchestrator::spawn(harness.deps(), OrchestratorConfig::default(), initial);
	sleep(Duration::from_millis(10)).await;
	assert_eq!(orchestrator.snapshot().request.to_amount, "9.95");

	let outcome = orchestrator.submit().await.unwrap();
	let swap = match outcome {
		SubmitOutcome::Swapped(swap) => swap,
		other => panic!("expected a swap, got {:?}", other),
	};
	assert!(swap.is_cross_chain());

	sleep(Duration::from_secs(4)).await;
	let snapshot = orchestrator.snapshot();
	assert_eq!(
		snapshot.bridge_status.map(|status| status.status),
		Some(SwapStatusCode::Pending)
	);

	sleep(Duration::from_secs(6)).await;
	assert_eq!(harness.backend.status_calls.call_count(), 3);
	let snapshot = orchestrator.snapshot();
	assert_eq!(
		snapshot.bridge_status.map(|status| status.status),
		Some(SwapStatusCode::Success)
	);

	sleep(Duration::from_secs(10)).await;
	assert_eq!(harness.backend.status_calls.call_count(), 3);
	orchestrator.shutdown().await.unwrap();
}
