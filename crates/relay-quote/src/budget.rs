//! Spendable-budget computation for the swap flow.

use crate::QuoteError;
use alloy_primitives::U256;
use relay_types::QuoteBudget;
use tracing::debug;

/// Derives the swap budget from the payer's balance.
///
/// Half the balance is considered committable; the cushion is then reserved
/// to cover execution cost and is never spent on the swap input. Fails with
/// [`QuoteError::LowBalance`] before any oracle interaction when half the
/// balance does not exceed the cushion.
pub fn budget_from_balance(balance: U256, cushion: U256) -> Result<QuoteBudget, QuoteError> {
	let half = balance / U256::from(2u64);
	if half <= cushion {
		return Err(QuoteError::LowBalance { balance, cushion });
	}

	let available = half - cushion;
	debug!(%balance, %cushion, %available, "Computed swap budget");
	Ok(QuoteBudget { available, cushion })
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reserves_cushion_from_half_balance() {
		let budget = budget_from_balance(
			U256::from(10_000_000_000_000_000u64),
			U256::from(1_000_000_000_000_000u64),
		)
		.unwrap();
		assert_eq!(budget.available, U256::from(4_000_000_000_000_000u64));
		assert_eq!(budget.cushion, U256::from(1_000_000_000_000_000u64));
	}

	#[test]
	fn balance_below_cushion_fails() {
		// Half the balance is smaller than the cushion.
		let err = budget_from_balance(
			U256::from(1_000_000_000_000_000u64),
			U256::from(1_000_000_000_000_000u64),
		)
		.unwrap_err();
		assert!(matches!(err, QuoteError::LowBalance { .. }));
	}

	#[test]
	fn half_balance_equal_to_cushion_fails() {
		let err =
			budget_from_balance(U256::from(2_000u64), U256::from(1_000u64)).unwrap_err();
		assert!(matches!(err, QuoteError::LowBalance { .. }));
	}

	#[test]
	fn zero_balance_fails() {
		assert!(matches!(
			budget_from_balance(U256::ZERO, U256::from(1u64)),
			Err(QuoteError::LowBalance { .. })
		));
	}
}
