use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use relay_types::Signature;
use thiserror::Error;

pub mod implementations;

pub use implementations::local::LocalWallet;

#[derive(Debug, Error)]
pub enum AccountError {
	#[error("Signing failed: {0}")]
	SigningFailed(String),
	#[error("Invalid key: {0}")]
	InvalidKey(String),
}

/// Signing capability of the operator identity.
///
/// An implementation holds whatever key material it needs; callers only see
/// the operator address and a digest-signing operation.
#[async_trait]
pub trait SignerInterface: Send + Sync {
	/// Address the produced signatures recover to.
	fn address(&self) -> Address;
	/// Signs a 32-byte intent digest under the chain's message-signing
	/// convention (EIP-191 prefix applied before the curve operation).
	async fn sign_digest(&self, digest: &B256) -> Result<Signature, AccountError>;
}

/// Operator signing service over a boxed provider.
pub struct OperatorService {
	provider: Box<dyn SignerInterface>,
}

impl OperatorService {
	pub fn new(provider: Box<dyn SignerInterface>) -> Self {
		Self { provider }
	}

	pub fn address(&self) -> Address {
		self.provider.address()
	}

	pub async fn sign_digest(&self, digest: &B256) -> Result<Signature, AccountError> {
		self.provider.sign_digest(digest).await
	}
}
