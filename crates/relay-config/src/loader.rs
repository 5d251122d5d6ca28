//! Configuration loading from files and environment.

use crate::types::{ConfigError, RelayConfig};
use alloy_primitives::Address;
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader: file, then environment overrides, then validation.
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from a TOML file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RelayConfig, ConfigError> {
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: format!("{:?}", path),
			reason: e.to_string(),
		})?;

		let mut config = Self::from_toml(&contents)?;
		Self::apply_env_overrides(&mut config);
		Self::validate(&config)?;
		Ok(config)
	}

	/// Load from a TOML string.
	pub fn from_toml(contents: &str) -> Result<RelayConfig, ConfigError> {
		toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
	}

	/// Apply environment variable overrides for credentials and endpoint.
	fn apply_env_overrides(config: &mut RelayConfig) {
		if let Ok(url) = std::env::var("RELAY_RPC_URL") {
			debug!("Overriding RPC URL from environment");
			config.rpc.url = url;
		}
		if let Ok(key) = std::env::var("RELAY_OPERATOR_KEY") {
			debug!("Overriding operator key from environment");
			config.operator.private_key = key;
		}
		if let Ok(key) = std::env::var("RELAY_PAYER_KEY") {
			debug!("Overriding payer key from environment");
			config.payer.private_key = key;
		}
	}

	/// Validate the assembled configuration.
	fn validate(config: &RelayConfig) -> Result<(), ConfigError> {
		if !config.rpc.url.starts_with("http://") && !config.rpc.url.starts_with("https://") {
			return Err(ConfigError::Invalid {
				field: "rpc.url",
				reason: "must start with http:// or https://".to_string(),
			});
		}

		Self::validate_key("operator.private_key", &config.operator.private_key)?;
		Self::validate_key("payer.private_key", &config.payer.private_key)?;

		if config.contract.address == Address::ZERO {
			return Err(ConfigError::Invalid {
				field: "contract.address",
				reason: "must not be the zero address".to_string(),
			});
		}
		if config.transfer.recipient == Address::ZERO {
			return Err(ConfigError::Invalid {
				field: "transfer.recipient",
				reason: "must not be the zero address".to_string(),
			});
		}
		if config.transfer.refund_destination == Address::ZERO {
			return Err(ConfigError::Invalid {
				field: "transfer.refund_destination",
				reason: "must not be the zero address".to_string(),
			});
		}

		Ok(())
	}

	fn validate_key(field: &'static str, key: &str) -> Result<(), ConfigError> {
		let without_prefix = key.strip_prefix("0x").ok_or(ConfigError::Invalid {
			field,
			reason: "must start with 0x".to_string(),
		})?;

		if without_prefix.len() != 64 {
			return Err(ConfigError::Invalid {
				field,
				reason: "must be 64 hex characters (32 bytes)".to_string(),
			});
		}
		if !without_prefix.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(ConfigError::Invalid {
				field,
				reason: "must be valid hexadecimal".to_string(),
			});
		}

		Ok(())
	}
}
