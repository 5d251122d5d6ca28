//! Pool resolution, exact-output quoting, and budget-constrained quote
//! fitting for the swap flow.

use alloy_primitives::{Address, U256};
use thiserror::Error;

pub mod budget;
pub mod fitter;
pub mod pool;
pub mod quoter;
pub mod rpc;

pub use budget::budget_from_balance;
pub use fitter::fit_to_budget;
pub use pool::PoolResolver;
pub use quoter::{ExactOutputQuoter, UniswapV3Quoter};
pub use rpc::RpcClient;

#[derive(Debug, Error)]
pub enum QuoteError {
	#[error("No pool for pair {token_a}/{token_b} at fee tier {fee_tier}")]
	NoPool {
		token_a: Address,
		token_b: Address,
		fee_tier: u32,
	},
	#[error("Low balance: half of {balance} does not exceed the {cushion} cushion")]
	LowBalance { balance: U256, cushion: U256 },
	#[error("Budget too low: {budget} cannot buy any output (quote was {input_required})")]
	BudgetTooLow { budget: U256, input_required: U256 },
	#[error("Re-quote exceeds budget: needs {input_required}, budget {budget}")]
	ReQuoteExceedsBudget { input_required: U256, budget: U256 },
	#[error("Call reverted (code {code}): {message}")]
	Reverted { code: i64, message: String },
	#[error("Network error: {0}")]
	Network(String),
	#[error("Malformed response: {0}")]
	Decode(String),
}
