//! Alloy-based EVM ledger implementation.
//!
//! Wraps an HTTP provider with the payer wallet for submission. The chain id
//! is read from the node at construction and checked against the configured
//! expectation to prevent signing against the wrong network.

use crate::DeliveryError;
use alloy_network::EthereumWallet;
use alloy_primitives::{Address, FixedBytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::{TransactionInput, TransactionRequest};
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::Http;
use relay_types::{TransactionHash, TransactionReceipt};
use std::sync::Arc;
use tracing::{debug, info};

/// Fixed proportional safety margin applied to gas estimates.
pub fn apply_gas_margin(estimate: u64) -> u64 {
	estimate * 12 / 10
}

/// Utility function to truncate a transaction hash for display.
fn truncate_hash(hash: &TransactionHash) -> String {
	let hash_str = hash.to_hex();
	if hash_str.len() <= 8 {
		hash_str
	} else {
		format!("{}..", &hash_str[..8])
	}
}

/// EVM ledger client bound to one endpoint and one payer wallet.
pub struct EvmLedger {
	/// The Alloy provider for blockchain interaction.
	provider: Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>,
	chain_id: u64,
	sender: Address,
}

impl EvmLedger {
	/// Connects to the endpoint and validates the chain id.
	///
	/// The payer signer funds and signs the submissions; intent authorization
	/// is separate and handled by the operator signer.
	pub async fn connect(
		rpc_url: &str,
		expected_chain_id: Option<u64>,
		payer: PrivateKeySigner,
	) -> Result<Self, DeliveryError> {
		let url = rpc_url
			.parse()
			.map_err(|e| DeliveryError::Network(format!("Invalid RPC URL: {}", e)))?;

		let sender = payer.address();
		let wallet = EthereumWallet::from(payer);

		let provider = ProviderBuilder::new()
			.with_recommended_fillers()
			.wallet(wallet)
			.on_http(url);

		let chain_id = provider
			.get_chain_id()
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get chain id: {}", e)))?;

		if let Some(expected) = expected_chain_id {
			if expected != chain_id {
				return Err(DeliveryError::ChainIdMismatch {
					expected,
					actual: chain_id,
				});
			}
		}

		info!(chain_id, sender = %sender, "Connected ledger client");
		Ok(Self {
			provider: Arc::new(provider),
			chain_id,
			sender,
		})
	}

	/// Chain id reported by the node.
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	/// The payer address submissions originate from.
	pub fn sender(&self) -> Address {
		self.sender
	}

	/// Native balance of an account.
	pub async fn get_balance(&self, address: Address) -> Result<U256, DeliveryError> {
		self.provider
			.get_balance(address)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get balance: {}", e)))
	}

	/// Estimates execution cost, applies the +20% margin, and submits.
	///
	/// One-shot by design: a failure here surfaces to the caller and is never
	/// retried, since a resubmission could double-fund the same intent id.
	pub async fn submit_transfer(
		&self,
		contract: Address,
		calldata: Vec<u8>,
		value: U256,
	) -> Result<TransactionHash, DeliveryError> {
		let mut request = TransactionRequest {
			from: Some(self.sender),
			to: Some(contract.into()),
			value: Some(value),
			input: TransactionInput {
				input: Some(calldata.into()),
				data: None,
			},
			chain_id: Some(self.chain_id),
			..Default::default()
		};

		let estimate = self
			.provider
			.estimate_gas(&request)
			.await
			.map_err(|e| DeliveryError::Submission(format!("Gas estimation failed: {}", e)))?;
		let gas_limit = apply_gas_margin(estimate);
		request.gas = Some(gas_limit);
		debug!(estimate, gas_limit, %value, "Estimated execution cost");

		let pending_tx = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| DeliveryError::Submission(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = TransactionHash(pending_tx.tx_hash().0.to_vec());
		info!(tx_hash = %truncate_hash(&tx_hash), "Submitted transfer");
		Ok(tx_hash)
	}

	/// Polls for a receipt until the transaction has `confirmations`
	/// confirmations or the timeout budget is exhausted.
	pub async fn wait_for_confirmation(
		&self,
		hash: &TransactionHash,
		confirmations: u64,
	) -> Result<TransactionReceipt, DeliveryError> {
		let tx_hash = FixedBytes::<32>::from_slice(&hash.0);

		let poll_interval = tokio::time::Duration::from_secs(10);
		// Allow ~20 seconds per confirmation, capped at an hour.
		let seconds_per_confirmation = 20;
		let timeout_seconds = (confirmations * seconds_per_confirmation)
			.max(seconds_per_confirmation)
			.min(3600);
		let max_wait_time = tokio::time::Duration::from_secs(timeout_seconds);
		let start_time = tokio::time::Instant::now();

		info!(
			tx_hash = %truncate_hash(hash),
			"Waiting for {} confirmations (timeout: {}s)",
			confirmations,
			timeout_seconds
		);

		loop {
			if start_time.elapsed() > max_wait_time {
				return Err(DeliveryError::ConfirmationTimeout {
					confirmations,
					waited_secs: max_wait_time.as_secs(),
				});
			}

			let receipt = match self.provider.get_transaction_receipt(tx_hash).await {
				Ok(Some(receipt)) => receipt,
				Ok(None) => {
					// Not yet mined.
					tokio::time::sleep(poll_interval).await;
					continue;
				}
				Err(e) => {
					return Err(DeliveryError::Network(format!(
						"Failed to get receipt: {}",
						e
					)));
				}
			};

			let current_block = self.provider.get_block_number().await.map_err(|e| {
				DeliveryError::Network(format!("Failed to get block number: {}", e))
			})?;

			let tx_block = receipt.block_number.unwrap_or(0);
			let current_confirmations = current_block.saturating_sub(tx_block);

			if current_confirmations >= confirmations {
				return Ok(TransactionReceipt {
					hash: TransactionHash(receipt.transaction_hash.0.to_vec()),
					block_number: tx_block,
					success: receipt.status(),
				});
			}

			debug!(
				"Waiting for {} more confirmations...",
				confirmations.saturating_sub(current_confirmations)
			);

			tokio::time::sleep(poll_interval).await;
		}
	}
}
