//! Budget-constrained quote fitting.
//!
//! Resizes a desired swap output so the required input fits a hard budget,
//! using only the opaque exact-output oracle. The algorithm performs at most
//! one rescale-and-retry: the oracle's price can move between calls, and an
//! unbounded retry loop risks non-termination under volatile pricing.

use crate::{ExactOutputQuoter, QuoteError};
use alloy_primitives::{U256, U512};
use relay_types::QuoteFit;
use tracing::{debug, info};

/// Fits the desired `(want_recipient, want_fee)` output to `budget`.
///
/// If the first quote fits, the request is accepted unchanged. Otherwise the
/// total output is rescaled by the integer ratio `budget / input`, split to
/// preserve the original fee-to-recipient ratio, and re-quoted exactly once.
/// Every success satisfies `input_required <= budget`.
pub async fn fit_to_budget(
	oracle: &dyn ExactOutputQuoter,
	want_recipient: U256,
	want_fee: U256,
	budget: U256,
) -> Result<QuoteFit, QuoteError> {
	let total = want_recipient + want_fee;
	let input_required = oracle.quote_exact_output(total).await?;

	if input_required <= budget {
		return Ok(QuoteFit {
			input_required,
			recipient_amount: want_recipient,
			fee_amount: want_fee,
		});
	}

	// One linear rescale toward the budget. Floored integer arithmetic: the
	// accepted amounts come from the re-quote, so the scale only has to land
	// close, never exactly on the boundary.
	let scaled_total = mul_div_floor(total, budget, input_required);
	if scaled_total.is_zero() {
		return Err(QuoteError::BudgetTooLow {
			budget,
			input_required,
		});
	}

	let (recipient_amount, fee_amount) = split_output(scaled_total, want_recipient, total);
	debug!(
		%total, %scaled_total, %recipient_amount, %fee_amount,
		"Rescaled output to fit budget"
	);

	let input_required = oracle.quote_exact_output(scaled_total).await?;
	if input_required > budget {
		return Err(QuoteError::ReQuoteExceedsBudget {
			input_required,
			budget,
		});
	}

	info!(%input_required, %budget, %scaled_total, "Fitted quote within budget");
	Ok(QuoteFit {
		input_required,
		recipient_amount,
		fee_amount,
	})
}

/// Splits `scaled_total` into recipient and fee parts preserving the original
/// `want_fee / want_recipient` ratio.
///
/// When the requested recipient amount was zero the ratio degenerates to
/// zero and the whole rescaled total lands in the recipient slot.
fn split_output(scaled_total: U256, want_recipient: U256, total: U256) -> (U256, U256) {
	if want_recipient.is_zero() {
		return (scaled_total, U256::ZERO);
	}
	let recipient = mul_div_floor(scaled_total, want_recipient, total);
	(recipient, scaled_total - recipient)
}

/// `a * b / d`, floored, with a 512-bit intermediate product.
fn mul_div_floor(a: U256, b: U256, d: U256) -> U256 {
	let product = widen(a) * widen(b);
	narrow(product / widen(d))
}

fn widen(value: U256) -> U512 {
	U512::from_be_slice(&value.to_be_bytes::<32>())
}

fn narrow(value: U512) -> U256 {
	U256::from_be_slice(&value.to_be_bytes::<64>()[32..])
}
