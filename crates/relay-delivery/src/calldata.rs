//! Calldata builders for the Transfers contract entry points.
//!
//! The on-chain ABI takes the ten-field intent tuple; the swap entry point
//! additionally takes the pool fee tier. Field order here must match
//! [`relay_types::TransferIntent`] exactly.

use alloy_primitives::Uint;
use alloy_sol_types::{sol, SolCall};
use relay_types::TransferIntent;

sol! {
	interface ITransfers {
		struct IntentTuple {
			uint256 recipientAmount;
			uint256 deadline;
			address recipient;
			address currency;
			address refundDestination;
			uint256 feeAmount;
			bytes16 id;
			address operator;
			bytes signature;
			bytes data;
		}

		function transferNative(IntentTuple calldata intent) external payable;
		function wrapAndTransfer(IntentTuple calldata intent) external payable;
		function swapAndTransferUniswapV3Native(IntentTuple calldata intent, uint24 poolFeeTier) external payable;
	}
}

fn to_tuple(intent: &TransferIntent) -> ITransfers::IntentTuple {
	ITransfers::IntentTuple {
		recipientAmount: intent.recipient_amount,
		deadline: alloy_primitives::U256::from(intent.deadline),
		recipient: intent.recipient,
		currency: intent.currency,
		refundDestination: intent.refund_destination,
		feeAmount: intent.fee_amount,
		id: intent.id,
		operator: intent.operator,
		signature: intent.signature.clone(),
		data: intent.data.clone(),
	}
}

/// Calldata for `transferNative(intent)`.
pub fn transfer_native(intent: &TransferIntent) -> Vec<u8> {
	ITransfers::transferNativeCall {
		intent: to_tuple(intent),
	}
	.abi_encode()
}

/// Calldata for `wrapAndTransfer(intent)`.
pub fn wrap_and_transfer(intent: &TransferIntent) -> Vec<u8> {
	ITransfers::wrapAndTransferCall {
		intent: to_tuple(intent),
	}
	.abi_encode()
}

/// Calldata for `swapAndTransferUniswapV3Native(intent, poolFeeTier)`.
pub fn swap_and_transfer(intent: &TransferIntent, fee_tier: u32) -> Vec<u8> {
	ITransfers::swapAndTransferUniswapV3NativeCall {
		intent: to_tuple(intent),
		poolFeeTier: Uint::<24, 1>::from(fee_tier),
	}
	.abi_encode()
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{Address, Bytes, FixedBytes, U256};
	use relay_types::Signature;

	fn signed_intent() -> TransferIntent {
		TransferIntent::new(
			U256::from(5_000_000u64),
			1_700_000_000,
			Address::from([0x11; 20]),
			Address::from([0x22; 20]),
			Address::from([0x33; 20]),
			U256::from(1_000u64),
			FixedBytes::from([0x44u8; 16]),
			Address::from([0x55; 20]),
		)
		.with_signature(Signature(vec![0xAB; 65]))
	}

	#[test]
	fn native_calldata_roundtrips() {
		let intent = signed_intent();
		let encoded = transfer_native(&intent);
		let decoded = ITransfers::transferNativeCall::abi_decode(&encoded, true).unwrap();

		assert_eq!(decoded.intent.recipientAmount, U256::from(5_000_000u64));
		assert_eq!(decoded.intent.deadline, U256::from(1_700_000_000u64));
		assert_eq!(decoded.intent.recipient, Address::from([0x11; 20]));
		assert_eq!(decoded.intent.currency, Address::from([0x22; 20]));
		assert_eq!(decoded.intent.refundDestination, Address::from([0x33; 20]));
		assert_eq!(decoded.intent.feeAmount, U256::from(1_000u64));
		assert_eq!(decoded.intent.id, FixedBytes::from([0x44u8; 16]));
		assert_eq!(decoded.intent.operator, Address::from([0x55; 20]));
		assert_eq!(decoded.intent.signature, Bytes::from(vec![0xAB; 65]));
		assert_eq!(decoded.intent.data, Bytes::new());
	}

	#[test]
	fn swap_calldata_carries_fee_tier() {
		let intent = signed_intent();
		let encoded = swap_and_transfer(&intent, 3000);
		let decoded =
			ITransfers::swapAndTransferUniswapV3NativeCall::abi_decode(&encoded, true).unwrap();

		assert_eq!(decoded.poolFeeTier, Uint::<24, 1>::from(3000u32));
		assert_eq!(decoded.intent.recipientAmount, U256::from(5_000_000u64));
	}

	#[test]
	fn entry_points_have_distinct_selectors() {
		let intent = signed_intent();
		let native = transfer_native(&intent);
		let wrap = wrap_and_transfer(&intent);
		let swap = swap_and_transfer(&intent, 3000);

		assert_ne!(native[..4], wrap[..4]);
		assert_ne!(native[..4], swap[..4]);
		assert_ne!(wrap[..4], swap[..4]);
	}
}
