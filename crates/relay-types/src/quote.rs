//! Value types produced by the budget and quote-fitting logic.
//!
//! Both are ephemeral: computed per submission, never persisted.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Spendable input budget for a swap, derived from the payer's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBudget {
	/// Maximum input amount the relay will commit to the swap.
	pub available: U256,
	/// Reserved amount never spent; covers execution cost.
	pub cushion: U256,
}

/// Result of fitting a desired output to the budget.
///
/// Guarantees `input_required <= budget.available` and
/// `recipient_amount + fee_amount` equal to the (possibly rescaled) total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteFit {
	/// Input the oracle says the accepted output costs.
	pub input_required: U256,
	/// Fitted recipient output; at most the requested amount.
	pub recipient_amount: U256,
	/// Fitted fee output; at most the requested amount.
	pub fee_amount: U256,
}

impl QuoteFit {
	/// Total output the swap must produce.
	pub fn total_output(&self) -> U256 {
		self.recipient_amount + self.fee_amount
	}
}
