//! Structured success records printed by the service.
//!
//! Amounts are rendered as decimal strings so they survive JSON consumers
//! that cannot hold 256-bit integers.

use serde::Serialize;

/// Outcome of the native and wrapped transfer flows.
#[derive(Debug, Clone, Serialize)]
pub struct TransferOutcome {
	/// Confirmation identifier of the submission.
	pub tx_hash: String,
	/// Block the transaction was included in.
	pub block_number: u64,
	/// Wei attached to the call.
	pub attached_value: String,
}

/// Outcome of the swap flow.
#[derive(Debug, Clone, Serialize)]
pub struct SwapOutcome {
	/// Confirmation identifier of the submission.
	pub tx_hash: String,
	/// Block the transaction was included in.
	pub block_number: u64,
	/// Wei attached to the call; equals the spent input.
	pub attached_value: String,
	/// Input the quote said the output costs.
	pub spent_input: String,
	/// Budget the fit was constrained by.
	pub budget: String,
	/// Reserved execution-cost cushion.
	pub cushion: String,
	/// Fitted recipient output in settlement-token units.
	pub recipient_amount: String,
	/// Fitted fee output in settlement-token units.
	pub fee_amount: String,
	/// Pool fee tier used for quoting and execution.
	pub fee_tier: u32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn swap_outcome_serializes_expected_fields() {
		let outcome = SwapOutcome {
			tx_hash: "ab".repeat(32),
			block_number: 123,
			attached_value: "2000000000000000".to_string(),
			spent_input: "2000000000000000".to_string(),
			budget: "4000000000000000".to_string(),
			cushion: "1000000000000000".to_string(),
			recipient_amount: "5000000".to_string(),
			fee_amount: "0".to_string(),
			fee_tier: 3000,
		};

		let json: serde_json::Value =
			serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();
		assert_eq!(json["spent_input"], "2000000000000000");
		assert_eq!(json["fee_tier"], 3000);
		assert_eq!(json["block_number"], 123);
		assert!(json.get("tx_hash").is_some());
	}
}
