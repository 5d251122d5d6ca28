//! Exact-output price quoting with interface-version fallback.
//!
//! The quoter contract answers "how much input buys this much output" for a
//! fixed pool. Two call shapes exist in the wild: a structured-argument form
//! and an older positional form. The structured form is attempted first; an
//! execution-level failure (revert or an undersized return) triggers exactly
//! one attempt of the positional form. Transport failures propagate without
//! fallback.

use crate::{QuoteError, RpcClient};
use alloy_primitives::{Address, Uint, U256};
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use tracing::debug;

sol! {
	interface IQuoterV2 {
		struct QuoteExactOutputSingleParams {
			address tokenIn;
			address tokenOut;
			uint24 fee;
			uint256 amountOut;
			uint160 sqrtPriceLimitX96;
		}

		function quoteExactOutputSingle(
			QuoteExactOutputSingleParams memory params
		) external returns (uint256 amountIn);
	}

	interface IQuoterV1 {
		function quoteExactOutputSingle(
			address tokenIn,
			address tokenOut,
			uint256 amountOut,
			uint24 fee,
			uint160 sqrtPriceLimitX96
		) external returns (uint256 amountIn);
	}
}

/// Monotone exact-output price oracle.
///
/// `quote_exact_output(total)` is non-decreasing in `total`; everything else
/// about the pricing is opaque to callers.
#[async_trait]
pub trait ExactOutputQuoter: Send + Sync {
	async fn quote_exact_output(&self, output_total: U256) -> Result<U256, QuoteError>;
}

/// Quoter-contract client for a fixed input/output pair and fee tier.
pub struct UniswapV3Quoter {
	rpc: RpcClient,
	quoter: Address,
	token_in: Address,
	token_out: Address,
	fee_tier: u32,
}

impl UniswapV3Quoter {
	pub fn new(
		rpc: RpcClient,
		quoter: Address,
		token_in: Address,
		token_out: Address,
		fee_tier: u32,
	) -> Self {
		Self {
			rpc,
			quoter,
			token_in,
			token_out,
			fee_tier,
		}
	}

	async fn quote_structured(&self, output_total: U256) -> Result<U256, QuoteError> {
		let params = IQuoterV2::QuoteExactOutputSingleParams {
			tokenIn: self.token_in,
			tokenOut: self.token_out,
			fee: Uint::<24, 1>::from(self.fee_tier),
			amountOut: output_total,
			sqrtPriceLimitX96: Uint::<160, 3>::ZERO,
		};
		let call = IQuoterV2::quoteExactOutputSingleCall { params };

		let result = self.rpc.eth_call(self.quoter, &call.abi_encode()).await?;
		decode_amount_word(&result)
	}

	async fn quote_positional(&self, output_total: U256) -> Result<U256, QuoteError> {
		let call = IQuoterV1::quoteExactOutputSingleCall {
			tokenIn: self.token_in,
			tokenOut: self.token_out,
			amountOut: output_total,
			fee: Uint::<24, 1>::from(self.fee_tier),
			sqrtPriceLimitX96: Uint::<160, 3>::ZERO,
		};

		let result = self.rpc.eth_call(self.quoter, &call.abi_encode()).await?;
		decode_amount_word(&result)
	}
}

#[async_trait]
impl ExactOutputQuoter for UniswapV3Quoter {
	async fn quote_exact_output(&self, output_total: U256) -> Result<U256, QuoteError> {
		match self.quote_structured(output_total).await {
			Ok(amount_in) => Ok(amount_in),
			// Capability negotiation: the deployed quoter may predate the
			// structured interface. Only execution-level failures fall back.
			Err(QuoteError::Reverted { code, message }) => {
				debug!(code, %message, "Structured quote unsupported, falling back to positional form");
				self.quote_positional(output_total).await
			}
			Err(QuoteError::Decode(reason)) => {
				debug!(%reason, "Structured quote returned malformed data, falling back to positional form");
				self.quote_positional(output_total).await
			}
			Err(other) => Err(other),
		}
	}
}

/// Decodes the leading `uint256` return word (`amountIn`).
fn decode_amount_word(result: &[u8]) -> Result<U256, QuoteError> {
	if result.len() < 32 {
		return Err(QuoteError::Decode(format!(
			"Expected 32-byte amount word, got {} bytes",
			result.len()
		)));
	}
	Ok(U256::from_be_slice(&result[0..32]))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn addr(byte: u8) -> Address {
		Address::from([byte; 20])
	}

	#[test]
	fn structured_calldata_roundtrips() {
		let params = IQuoterV2::QuoteExactOutputSingleParams {
			tokenIn: addr(0x01),
			tokenOut: addr(0x02),
			fee: Uint::<24, 1>::from(3000u32),
			amountOut: U256::from(5_000_000u64),
			sqrtPriceLimitX96: Uint::<160, 3>::ZERO,
		};
		let encoded = IQuoterV2::quoteExactOutputSingleCall { params }.abi_encode();
		let decoded = IQuoterV2::quoteExactOutputSingleCall::abi_decode(&encoded, true).unwrap();
		assert_eq!(decoded.params.tokenIn, addr(0x01));
		assert_eq!(decoded.params.amountOut, U256::from(5_000_000u64));
	}

	#[test]
	fn call_shapes_have_distinct_selectors() {
		let structured = IQuoterV2::quoteExactOutputSingleCall {
			params: IQuoterV2::QuoteExactOutputSingleParams {
				tokenIn: addr(0x01),
				tokenOut: addr(0x02),
				fee: Uint::<24, 1>::from(3000u32),
				amountOut: U256::from(1u64),
				sqrtPriceLimitX96: Uint::<160, 3>::ZERO,
			},
		}
		.abi_encode();
		let positional = IQuoterV1::quoteExactOutputSingleCall {
			tokenIn: addr(0x01),
			tokenOut: addr(0x02),
			amountOut: U256::from(1u64),
			fee: Uint::<24, 1>::from(3000u32),
			sqrtPriceLimitX96: Uint::<160, 3>::ZERO,
		}
		.abi_encode();

		assert_ne!(structured[..4], positional[..4]);
	}

	#[test]
	fn amount_word_decodes_big_endian() {
		let mut word = [0u8; 32];
		word[24..].copy_from_slice(&2_000_000_000_000_000u64.to_be_bytes());
		assert_eq!(
			decode_amount_word(&word).unwrap(),
			U256::from(2_000_000_000_000_000u64)
		);

		assert!(matches!(
			decode_amount_word(&[0u8; 4]),
			Err(QuoteError::Decode(_))
		));
	}
}
