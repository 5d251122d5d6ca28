//! Top-level error rollup for the relay flows.

use relay_account::AccountError;
use relay_config::ConfigError;
use relay_delivery::DeliveryError;
use relay_quote::QuoteError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Debug, Error)]
pub enum RelayError {
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),

	#[error("Signing error: {0}")]
	Signing(#[from] AccountError),

	#[error("Quote error: {0}")]
	Quote(#[from] QuoteError),

	#[error("Submission error: {0}")]
	Submission(#[from] DeliveryError),

	#[error("Invalid submission transition: {from} -> {to}")]
	InvalidTransition {
		from: &'static str,
		to: &'static str,
	},
}
