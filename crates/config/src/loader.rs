//! Configuration loading utilities

use crate::{ConfigValidationError, Settings};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "config/config";
const ENV_PREFIX: &str = "SWAP";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from `config/config.*` and `SWAP__*` environment variables
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(None)
}

/// Same as [`load_config`] with an explicit file path in place of the default one
pub fn load_config_from(path: Option<&Path>) -> Result<Settings, ConfigLoadError> {
	dotenvy::dotenv().ok();

	let file = match path {
		Some(path) => File::from(path).required(true),
		None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
	};
	build(Config::builder().add_source(file))
}

fn build(
	builder: ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigLoadError> {
	let settings: Settings = builder
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true)
				.list_separator(",")
				.with_list_parse_key("providers.enabled"),
		)
		.build()?
		.try_deserialize()?;

	settings.validate()?;
	Ok(settings)
}
