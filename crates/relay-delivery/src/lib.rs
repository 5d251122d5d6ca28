//! Ledger client: balance and chain reads, gas estimation with a fixed
//! safety margin, one-shot submission, and confirmation waiting.

use thiserror::Error;

pub mod calldata;
pub mod implementations;

pub use implementations::evm::EvmLedger;

#[derive(Debug, Error)]
pub enum DeliveryError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Chain id mismatch: expected {expected}, got {actual}")]
	ChainIdMismatch { expected: u64, actual: u64 },
	#[error("Submission failed: {0}")]
	Submission(String),
	#[error("Timeout waiting for {confirmations} confirmations after {waited_secs} seconds")]
	ConfirmationTimeout {
		confirmations: u64,
		waited_secs: u64,
	},
}
