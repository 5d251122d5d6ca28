//! Signature types shared between the signer and the intent model.

use alloy_primitives::PrimitiveSignature;

/// Cryptographic signature in the standard Ethereum format (r, s, v).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub Vec<u8>);

impl From<PrimitiveSignature> for Signature {
	fn from(sig: PrimitiveSignature) -> Self {
		let mut bytes = Vec::with_capacity(65);
		bytes.extend_from_slice(&sig.r().to_be_bytes::<32>());
		bytes.extend_from_slice(&sig.s().to_be_bytes::<32>());
		// Recovery byte in the pre-EIP-155 form the contract's ecrecover path
		// expects: 27 + y_parity.
		let v = if sig.v() { 28 } else { 27 };
		bytes.push(v);
		Signature(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::U256;

	#[test]
	fn signature_is_sixty_five_bytes_r_s_v() {
		let sig = PrimitiveSignature::new(U256::from(1u64), U256::from(2u64), true);
		let converted = Signature::from(sig);
		assert_eq!(converted.0.len(), 65);
		assert_eq!(U256::from_be_slice(&converted.0[..32]), U256::from(1u64));
		assert_eq!(U256::from_be_slice(&converted.0[32..64]), U256::from(2u64));
		assert_eq!(converted.0[64], 28);
	}
}
