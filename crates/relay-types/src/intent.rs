//! The transfer-intent data model and its canonical digest.
//!
//! A [`TransferIntent`] is the authorization object an operator signs off-chain
//! and the Transfers contract executes exactly once. The digest binds every
//! intent field (except the signature itself) together with the execution
//! context — chain id, submitting sender, and contract address — so a
//! signature is meaningless for any other chain, payer, or deployment.

use alloy_primitives::{keccak256, Address, Bytes, FixedBytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::account::Signature;

/// Random 128-bit intent identifier.
///
/// The contract enforces one execution per id; the relay's only obligation is
/// enough entropy that collisions are negligible.
pub type IntentId = FixedBytes<16>;

/// Generates a fresh random intent id.
pub fn fresh_intent_id() -> IntentId {
	IntentId::from(uuid::Uuid::new_v4().into_bytes())
}

/// An operator-authorized payment the contract is permitted to execute once.
///
/// Field order matches the ten-element tuple the contract entry points accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferIntent {
	/// Amount credited to the recipient, in the settlement currency.
	pub recipient_amount: U256,
	/// Unix timestamp after which the intent is invalid.
	pub deadline: u64,
	/// Receiver of the payment.
	pub recipient: Address,
	/// Settlement token; the all-zero address denotes the native asset.
	pub currency: Address,
	/// Receiver of any unused funds.
	pub refund_destination: Address,
	/// Amount retained as a fee.
	pub fee_amount: U256,
	/// Replay-prevention nonce, unique per intent.
	pub id: IntentId,
	/// The authority whose signature authorizes this intent.
	pub operator: Address,
	/// Operator authorization over the canonical digest; empty until signed.
	pub signature: Bytes,
	/// Opaque payload forwarded to the contract.
	pub data: Bytes,
}

/// Execution context bound into the intent digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentContext {
	/// Chain the intent is valid on.
	pub chain_id: u64,
	/// The payer account that will submit the call.
	pub sender: Address,
	/// The Transfers contract that will verify the signature.
	pub contract: Address,
}

/// Length of the packed digest pre-image:
/// two amount words, deadline word, three addresses, fee word, 16-byte id,
/// operator, chain-id word, sender, contract.
pub const PACKED_INTENT_LEN: usize = 32 + 32 + 20 + 20 + 20 + 32 + 16 + 20 + 32 + 20 + 20;

impl TransferIntent {
	/// Constructs an unsigned intent. `signature` and `data` start empty.
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		recipient_amount: U256,
		deadline: u64,
		recipient: Address,
		currency: Address,
		refund_destination: Address,
		fee_amount: U256,
		id: IntentId,
		operator: Address,
	) -> Self {
		Self {
			recipient_amount,
			deadline,
			recipient,
			currency,
			refund_destination,
			fee_amount,
			id,
			operator,
			signature: Bytes::new(),
			data: Bytes::new(),
		}
	}

	/// Total amount the payer must fund: recipient credit plus fee.
	pub fn total_output(&self) -> U256 {
		self.recipient_amount + self.fee_amount
	}

	/// Attaches the operator signature.
	pub fn with_signature(mut self, signature: Signature) -> Self {
		self.signature = Bytes::from(signature.0);
		self
	}

	/// Tightly packs the signed fields and context in canonical order.
	///
	/// Integers are big-endian 32-byte words, addresses 20 bytes, the id its
	/// raw 16 bytes. The first word is the total output amount. Any deviation
	/// in order or width produces a digest the contract rejects.
	pub fn encode_packed(&self, ctx: &IntentContext) -> Vec<u8> {
		let mut packed = Vec::with_capacity(PACKED_INTENT_LEN);
		packed.extend_from_slice(&self.total_output().to_be_bytes::<32>());
		packed.extend_from_slice(&U256::from(self.deadline).to_be_bytes::<32>());
		packed.extend_from_slice(self.recipient.as_slice());
		packed.extend_from_slice(self.currency.as_slice());
		packed.extend_from_slice(self.refund_destination.as_slice());
		packed.extend_from_slice(&self.fee_amount.to_be_bytes::<32>());
		packed.extend_from_slice(self.id.as_slice());
		packed.extend_from_slice(self.operator.as_slice());
		packed.extend_from_slice(&U256::from(ctx.chain_id).to_be_bytes::<32>());
		packed.extend_from_slice(ctx.sender.as_slice());
		packed.extend_from_slice(ctx.contract.as_slice());
		packed
	}

	/// Canonical digest the operator signs and the contract re-derives.
	pub fn digest(&self, ctx: &IntentContext) -> B256 {
		keccak256(self.encode_packed(ctx))
	}
}
