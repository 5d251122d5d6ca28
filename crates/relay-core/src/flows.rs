//! The three relay flows.
//!
//! Each flow is a single-shot pipeline: build the intent with a fresh id,
//! sign the canonical digest with the operator key, broadcast once through
//! the payer wallet, and await confirmations. The swap flow resolves the
//! pool and fits the quote to the payer's budget before the intent exists.

use crate::outcome::{SwapOutcome, TransferOutcome};
use crate::{RelayError, Submission};
use alloy_primitives::{Address, U256};
use alloy_signer_local::PrivateKeySigner;
use relay_account::{AccountError, LocalWallet, OperatorService};
use relay_config::RelayConfig;
use relay_delivery::{calldata, EvmLedger};
use relay_quote::{budget_from_balance, fit_to_budget, PoolResolver, RpcClient, UniswapV3Quoter};
use relay_types::{
	fresh_intent_id, IntentContext, TransactionReceipt, TransferIntent,
};
use tracing::{info, warn};

/// Connected relay: operator signer plus payer-funded ledger client.
pub struct Relay {
	config: RelayConfig,
	operator: OperatorService,
	ledger: EvmLedger,
}

impl Relay {
	/// Builds the signer and ledger client from configuration.
	pub async fn connect(config: RelayConfig) -> Result<Self, RelayError> {
		let operator = OperatorService::new(Box::new(LocalWallet::new(
			&config.operator.private_key,
		)?));

		let payer = config
			.payer
			.private_key
			.parse::<PrivateKeySigner>()
			.map_err(|e| AccountError::InvalidKey(format!("Invalid payer key: {}", e)))?;

		let ledger = EvmLedger::connect(&config.rpc.url, config.rpc.chain_id, payer).await?;

		Ok(Self {
			config,
			operator,
			ledger,
		})
	}

	/// Transfers the native asset: intent currency is the zero-address
	/// sentinel, attached value covers recipient plus fee.
	pub async fn transfer_native(&self) -> Result<TransferOutcome, RelayError> {
		let intent = self.build_intent(
			self.config.transfer.recipient_amount,
			self.config.transfer.fee_amount,
			Address::ZERO,
		);
		let value = intent.total_output();

		let receipt = self
			.sign_and_submit(intent, value, calldata::transfer_native)
			.await?;
		Ok(transfer_outcome(receipt, value))
	}

	/// Transfers the wrapped-native token funded with native value; the
	/// contract wraps before crediting.
	pub async fn wrap_and_transfer(&self) -> Result<TransferOutcome, RelayError> {
		let wrapped = self.config.wrapped_native()?;
		let intent = self.build_intent(
			self.config.transfer.recipient_amount,
			self.config.transfer.fee_amount,
			wrapped,
		);
		let value = intent.total_output();

		let receipt = self
			.sign_and_submit(intent, value, calldata::wrap_and_transfer)
			.await?;
		Ok(transfer_outcome(receipt, value))
	}

	/// Swaps native value into the settlement token and transfers the fitted
	/// output, spending at most the computed budget.
	pub async fn swap_and_transfer(&self) -> Result<SwapOutcome, RelayError> {
		let swap = self.config.swap()?.clone();
		let wrapped = self.config.wrapped_native()?;
		let settlement = self.config.settlement_token()?;

		// Pool existence is checked before any balance or quote logic runs.
		let rpc = RpcClient::new(self.config.rpc.url.clone());
		let resolver = PoolResolver::new(rpc.clone(), swap.factory);
		let pool = resolver.resolve(wrapped, settlement, swap.fee_tier).await?;
		info!(%pool, fee_tier = swap.fee_tier, "Using liquidity pool");

		let balance = self.ledger.get_balance(self.ledger.sender()).await?;
		let budget = budget_from_balance(balance, swap.cushion_wei)?;

		let quoter = UniswapV3Quoter::new(rpc, swap.quoter, wrapped, settlement, swap.fee_tier);
		let fit = fit_to_budget(
			&quoter,
			swap.recipient_amount,
			swap.fee_amount,
			budget.available,
		)
		.await?;

		let intent = self.build_intent(fit.recipient_amount, fit.fee_amount, settlement);
		let receipt = self
			.sign_and_submit(intent, fit.input_required, |signed| {
				calldata::swap_and_transfer(signed, swap.fee_tier)
			})
			.await?;

		Ok(SwapOutcome {
			tx_hash: receipt.hash.to_hex(),
			block_number: receipt.block_number,
			attached_value: fit.input_required.to_string(),
			spent_input: fit.input_required.to_string(),
			budget: budget.available.to_string(),
			cushion: budget.cushion.to_string(),
			recipient_amount: fit.recipient_amount.to_string(),
			fee_amount: fit.fee_amount.to_string(),
			fee_tier: swap.fee_tier,
		})
	}

	/// Assembles an unsigned intent with a fresh id and a deadline relative
	/// to submission time.
	fn build_intent(
		&self,
		recipient_amount: U256,
		fee_amount: U256,
		currency: Address,
	) -> TransferIntent {
		TransferIntent::new(
			recipient_amount,
			deadline_from_now(self.config.transfer.deadline_secs),
			self.config.transfer.recipient,
			currency,
			self.config.transfer.refund_destination,
			fee_amount,
			fresh_intent_id(),
			self.operator.address(),
		)
	}

	/// Signs the intent and drives the one-shot submission state machine.
	async fn sign_and_submit(
		&self,
		intent: TransferIntent,
		value: U256,
		build_calldata: impl FnOnce(&TransferIntent) -> Vec<u8>,
	) -> Result<TransactionReceipt, RelayError> {
		let mut submission = Submission::new();
		let contract = self.config.contract.address;

		let ctx = IntentContext {
			chain_id: self.ledger.chain_id(),
			sender: self.ledger.sender(),
			contract,
		};
		let digest = intent.digest(&ctx);
		let signature = self.operator.sign_digest(&digest).await?;
		let intent = intent.with_signature(signature);
		submission.mark_signed()?;
		info!(id = %intent.id, deadline = intent.deadline, "Signed transfer intent");

		let calldata = build_calldata(&intent);
		let hash = match self.ledger.submit_transfer(contract, calldata, value).await {
			Ok(hash) => hash,
			Err(e) => {
				submission.mark_failed()?;
				return Err(e.into());
			}
		};
		submission.mark_submitted()?;

		// A confirmation failure is surfaced verbatim; the broadcast is never
		// repeated, since the intent id must fund at most once.
		let receipt = match self
			.ledger
			.wait_for_confirmation(&hash, self.config.rpc.confirmations)
			.await
		{
			Ok(receipt) => receipt,
			Err(e) => {
				warn!(tx_hash = %hash.to_hex(), "Confirmation did not complete: {}", e);
				submission.mark_failed()?;
				return Err(e.into());
			}
		};
		submission.mark_confirmed()?;

		Ok(receipt)
	}
}

fn transfer_outcome(receipt: TransactionReceipt, value: U256) -> TransferOutcome {
	TransferOutcome {
		tx_hash: receipt.hash.to_hex(),
		block_number: receipt.block_number,
		attached_value: value.to_string(),
	}
}

fn deadline_from_now(window_secs: u64) -> u64 {
	std::time::SystemTime::now()
		.duration_since(std::time::UNIX_EPOCH)
		.unwrap()
		.as_secs() + window_secs
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deadline_is_in_the_future() {
		let now = std::time::SystemTime::now()
			.duration_since(std::time::UNIX_EPOCH)
			.unwrap()
			.as_secs();
		let deadline = deadline_from_now(3600);
		assert!(deadline >= now + 3600);
		assert!(deadline <= now + 3601);
	}
}
