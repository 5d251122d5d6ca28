//! Liquidity pool resolution against the factory.

use crate::{QuoteError, RpcClient};
use alloy_primitives::{Address, Uint};
use alloy_sol_types::{sol, SolCall};
use tracing::debug;

sol! {
	interface IUniswapV3Factory {
		function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool);
	}
}

/// Resolves the liquidity pool used for quoting a token pair.
pub struct PoolResolver {
	rpc: RpcClient,
	factory: Address,
}

/// Canonicalizes a token pair into the ascending order the factory requires.
pub fn order_pair(token_a: Address, token_b: Address) -> (Address, Address) {
	if token_a <= token_b {
		(token_a, token_b)
	} else {
		(token_b, token_a)
	}
}

impl PoolResolver {
	pub fn new(rpc: RpcClient, factory: Address) -> Self {
		Self { rpc, factory }
	}

	/// Looks up the pool for the pair at the given fee tier.
	///
	/// Fails with [`QuoteError::NoPool`] when the factory returns the zero
	/// address.
	pub async fn resolve(
		&self,
		token_a: Address,
		token_b: Address,
		fee_tier: u32,
	) -> Result<Address, QuoteError> {
		let (first, second) = order_pair(token_a, token_b);

		let call = IUniswapV3Factory::getPoolCall {
			tokenA: first,
			tokenB: second,
			fee: Uint::<24, 1>::from(fee_tier),
		};

		let result = self.rpc.eth_call(self.factory, &call.abi_encode()).await?;
		let pool = decode_address_word(&result)?;

		debug!(%first, %second, fee_tier, %pool, "Resolved pool");
		ensure_pool(pool, token_a, token_b, fee_tier)
	}
}

/// Decodes a single ABI-encoded address return word.
fn decode_address_word(result: &[u8]) -> Result<Address, QuoteError> {
	if result.len() < 32 {
		return Err(QuoteError::Decode(format!(
			"Expected 32-byte address word, got {} bytes",
			result.len()
		)));
	}
	Ok(Address::from_slice(&result[12..32]))
}

/// Rejects the factory's zero-address "no such pool" sentinel.
fn ensure_pool(
	pool: Address,
	token_a: Address,
	token_b: Address,
	fee_tier: u32,
) -> Result<Address, QuoteError> {
	if pool == Address::ZERO {
		return Err(QuoteError::NoPool {
			token_a,
			token_b,
			fee_tier,
		});
	}
	Ok(pool)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn addr(byte: u8) -> Address {
		Address::from([byte; 20])
	}

	#[test]
	fn pair_is_ordered_by_numeric_value() {
		assert_eq!(order_pair(addr(0x02), addr(0x01)), (addr(0x01), addr(0x02)));
		assert_eq!(order_pair(addr(0x01), addr(0x02)), (addr(0x01), addr(0x02)));
		assert_eq!(order_pair(addr(0x01), addr(0x01)), (addr(0x01), addr(0x01)));
	}

	#[test]
	fn zero_address_means_no_pool() {
		let err = ensure_pool(Address::ZERO, addr(0x01), addr(0x02), 3000).unwrap_err();
		assert!(matches!(err, QuoteError::NoPool { fee_tier: 3000, .. }));
	}

	#[test]
	fn nonzero_pool_passes_through() {
		let pool = addr(0xAA);
		assert_eq!(
			ensure_pool(pool, addr(0x01), addr(0x02), 500).unwrap(),
			pool
		);
	}

	#[test]
	fn address_word_decodes_from_abi_padding() {
		let mut word = [0u8; 32];
		word[12..].copy_from_slice(addr(0xBB).as_slice());
		assert_eq!(decode_address_word(&word).unwrap(), addr(0xBB));

		assert!(matches!(
			decode_address_word(&[0u8; 16]),
			Err(QuoteError::Decode(_))
		));
	}

	#[test]
	fn get_pool_calldata_roundtrips() {
		let call = IUniswapV3Factory::getPoolCall {
			tokenA: addr(0x01),
			tokenB: addr(0x02),
			fee: Uint::<24, 1>::from(3000u32),
		};
		let encoded = call.abi_encode();
		let decoded = IUniswapV3Factory::getPoolCall::abi_decode(&encoded, true).unwrap();
		assert_eq!(decoded.tokenA, addr(0x01));
		assert_eq!(decoded.tokenB, addr(0x02));
		assert_eq!(decoded.fee, Uint::<24, 1>::from(3000u32));
	}
}
