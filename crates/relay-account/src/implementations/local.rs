//! Operator signer implementations.
//!
//! Currently a single implementation backed by a local private key via the
//! Alloy signer. Suitable for development and for operators that manage raw
//! key material themselves.

use crate::{AccountError, SignerInterface};
use alloy_primitives::{Address, B256};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use relay_types::Signature;
use tracing::debug;

/// Local wallet implementation using Alloy's signer.
pub struct LocalWallet {
	/// The underlying Alloy signer that handles cryptographic operations.
	signer: PrivateKeySigner,
}

impl LocalWallet {
	/// Creates a new LocalWallet from a hex-encoded private key
	/// (with or without 0x prefix).
	pub fn new(private_key_hex: &str) -> Result<Self, AccountError> {
		let signer = private_key_hex
			.parse::<PrivateKeySigner>()
			.map_err(|e| AccountError::InvalidKey(format!("Invalid private key: {}", e)))?;

		Ok(Self { signer })
	}
}

#[async_trait]
impl SignerInterface for LocalWallet {
	fn address(&self) -> Address {
		self.signer.address()
	}

	async fn sign_digest(&self, digest: &B256) -> Result<Signature, AccountError> {
		// sign_message applies the EIP-191 prefix over the raw 32 bytes,
		// matching the contract-side personal-message recovery.
		let signature = self
			.signer
			.sign_message(digest.as_slice())
			.await
			.map_err(|e| AccountError::SigningFailed(format!("Failed to sign digest: {}", e)))?;

		debug!(operator = %self.signer.address(), "Signed intent digest");
		Ok(signature.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::PrimitiveSignature;

	// Well-known test key; address 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266.
	const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

	#[test]
	fn rejects_malformed_keys() {
		assert!(matches!(
			LocalWallet::new("0x1234"),
			Err(AccountError::InvalidKey(_))
		));
	}

	#[test]
	fn derives_expected_address() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		assert_eq!(
			wallet.address(),
			"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
				.parse::<Address>()
				.unwrap()
		);
	}

	#[tokio::test]
	async fn signature_recovers_to_operator() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		let digest = B256::from([0x42u8; 32]);

		let signature = wallet.sign_digest(&digest).await.unwrap();
		assert_eq!(signature.0.len(), 65);

		let parsed = PrimitiveSignature::try_from(signature.0.as_slice()).unwrap();
		let recovered = parsed.recover_address_from_msg(digest.as_slice()).unwrap();
		assert_eq!(recovered, wallet.address());
	}

	#[tokio::test]
	async fn signature_does_not_verify_for_other_digest() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		let digest = B256::from([0x42u8; 32]);
		let tampered = B256::from([0x43u8; 32]);

		let signature = wallet.sign_digest(&digest).await.unwrap();
		let parsed = PrimitiveSignature::try_from(signature.0.as_slice()).unwrap();

		// Recovery against a different digest must not yield the operator.
		let recovered = parsed.recover_address_from_msg(tampered.as_slice()).unwrap();
		assert_ne!(recovered, wallet.address());
	}
}
