//! Ledger submission types.

use serde::{Deserialize, Serialize};

/// Transaction hash as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHash(pub Vec<u8>);

impl TransactionHash {
	/// Lowercase hex rendering, without 0x prefix.
	pub fn to_hex(&self) -> String {
		self.0.iter().map(|b| format!("{:02x}", b)).collect()
	}
}

/// Receipt for a confirmed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_renders_as_hex() {
		let hash = TransactionHash(vec![0xde, 0xad, 0x00, 0x0f]);
		assert_eq!(hash.to_hex(), "dead000f");
	}
}
