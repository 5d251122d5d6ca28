//! Configuration types for the relay.
//!
//! The configuration is an explicit immutable object passed into each
//! component at construction; nothing reads the environment ambiently.
//! Identity fields (addresses, keys) have no defaults; only demo amounts do.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Failed to read config file {path}: {reason}")]
	Io { path: String, reason: String },
	#[error("Failed to parse config: {0}")]
	Parse(String),
	#[error("Missing required configuration: {0}")]
	Missing(&'static str),
	#[error("Invalid configuration value for {field}: {reason}")]
	Invalid { field: &'static str, reason: String },
}

/// Complete relay configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
	/// Ledger endpoint settings.
	pub rpc: RpcConfig,
	/// The Transfers contract this relay submits to.
	pub contract: ContractConfig,
	/// Operator signing identity.
	pub operator: KeyConfig,
	/// Payer identity funding the submissions.
	pub payer: KeyConfig,
	/// Payment parties and native/wrapped flow amounts.
	pub transfer: TransferConfig,
	/// Token addresses shared by the wrapped and swap flows.
	#[serde(default)]
	pub tokens: TokenConfig,
	/// Swap-flow settings; absent unless the swap flow is used.
	pub swap: Option<SwapConfig>,
}

/// Ledger endpoint settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcConfig {
	/// HTTP JSON-RPC endpoint URL.
	pub url: String,
	/// Expected chain id; checked against the node when set.
	pub chain_id: Option<u64>,
	/// Block confirmations to await after submission.
	#[serde(default = "default_confirmations")]
	pub confirmations: u64,
}

/// The verifying contract.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContractConfig {
	pub address: Address,
}

/// A hex-encoded private key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyConfig {
	pub private_key: String,
}

/// Payment parties and the native/wrapped flow amounts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferConfig {
	/// Receiver of the payment.
	pub recipient: Address,
	/// Receiver of any unused funds.
	pub refund_destination: Address,
	/// Recipient amount in wei for the native and wrapped flows.
	#[serde(default = "default_recipient_amount_wei")]
	pub recipient_amount: U256,
	/// Fee amount in wei for the native and wrapped flows.
	#[serde(default = "default_fee_amount_wei")]
	pub fee_amount: U256,
	/// Intent validity window, applied relative to submission time.
	#[serde(default = "default_deadline_secs")]
	pub deadline_secs: u64,
}

/// Token addresses used by the wrapped and swap flows.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TokenConfig {
	/// Wrapped-native token; required by the wrapped and swap flows.
	pub wrapped_native: Option<Address>,
	/// Settlement token the swap flow delivers; required by the swap flow.
	pub settlement: Option<Address>,
}

/// Swap-flow settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwapConfig {
	/// Liquidity pool factory.
	pub factory: Address,
	/// Exact-output price quoter.
	pub quoter: Address,
	/// Pool fee tier in hundredths of a bip.
	#[serde(default = "default_fee_tier")]
	pub fee_tier: u32,
	/// Reserved wei never spent on the swap input.
	#[serde(default = "default_cushion_wei")]
	pub cushion_wei: U256,
	/// Desired recipient output in settlement-token units.
	#[serde(default = "default_swap_recipient_amount")]
	pub recipient_amount: U256,
	/// Desired fee output in settlement-token units.
	#[serde(default = "default_swap_fee_amount")]
	pub fee_amount: U256,
}

fn default_confirmations() -> u64 {
	1
}

fn default_deadline_secs() -> u64 {
	3600
}

fn default_recipient_amount_wei() -> U256 {
	// 0.001 ether
	U256::from(1_000_000_000_000_000u64)
}

fn default_fee_amount_wei() -> U256 {
	// 0.0001 ether
	U256::from(100_000_000_000_000u64)
}

fn default_fee_tier() -> u32 {
	3000
}

fn default_cushion_wei() -> U256 {
	// 0.001 ether
	U256::from(1_000_000_000_000_000u64)
}

fn default_swap_recipient_amount() -> U256 {
	// 5 units of a 6-decimal settlement token
	U256::from(5_000_000u64)
}

fn default_swap_fee_amount() -> U256 {
	U256::ZERO
}

impl RelayConfig {
	/// Swap settings, required when running the swap flow.
	pub fn swap(&self) -> Result<&SwapConfig, ConfigError> {
		self.swap.as_ref().ok_or(ConfigError::Missing("[swap]"))
	}

	/// Wrapped-native token, required by the wrapped and swap flows.
	pub fn wrapped_native(&self) -> Result<Address, ConfigError> {
		self.tokens
			.wrapped_native
			.ok_or(ConfigError::Missing("tokens.wrapped_native"))
	}

	/// Settlement token, required by the swap flow.
	pub fn settlement_token(&self) -> Result<Address, ConfigError> {
		self.tokens
			.settlement
			.ok_or(ConfigError::Missing("tokens.settlement"))
	}
}
