//! Service startup logging for the swap aggregator

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "swap-aggregator";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Swap Aggregator Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the effective configuration; secrets are only described, never printed
pub fn log_settings(settings: &Settings) {
	info!("🌐 Backend: {} (timeout {}ms)", settings.backend.endpoint, settings.backend.timeout_ms);
	if let Some(api_key) = &settings.backend.api_key {
		info!("🔑 API key from {}", api_key.description());
	}

	let providers: Vec<&str> = settings
		.enabled_providers()
		.iter()
		.map(|provider| provider.as_str())
		.collect();
	info!("🔌 Providers: {}", providers.join(", "));
	info!(
		"⏱️ Quote debounce {}ms, refresh every {}s",
		settings.orchestrator.quote_debounce_ms, settings.orchestrator.quote_refresh_secs
	);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Swap Aggregator Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
