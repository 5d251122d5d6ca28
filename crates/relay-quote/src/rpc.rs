//! Minimal JSON-RPC plumbing for read-only contract queries.
//!
//! Pool lookup and quoting only need `eth_call`, so this client speaks raw
//! JSON-RPC instead of pulling in a full provider stack. Transport failures
//! and execution failures are kept distinct: the quoter's interface fallback
//! keys on the latter only.

use crate::QuoteError;
use alloy_primitives::Address;

/// Read-only JSON-RPC client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
	url: String,
	http: reqwest::Client,
}

impl RpcClient {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			http: reqwest::Client::new(),
		}
	}

	/// Executes `eth_call` against `to` and returns the raw return data.
	///
	/// A JSON-RPC error object becomes [`QuoteError::Reverted`]; transport
	/// and decoding problems become [`QuoteError::Network`] /
	/// [`QuoteError::Decode`].
	pub async fn eth_call(&self, to: Address, calldata: &[u8]) -> Result<Vec<u8>, QuoteError> {
		let response = self
			.http
			.post(&self.url)
			.json(&serde_json::json!({
				"jsonrpc": "2.0",
				"id": 1,
				"method": "eth_call",
				"params": [{
					"to": format!("{:?}", to),
					"data": format!("0x{}", hex::encode(calldata))
				}, "latest"]
			}))
			.send()
			.await
			.map_err(|e| QuoteError::Network(format!("RPC call failed: {}", e)))?;

		let json: serde_json::Value = response
			.json()
			.await
			.map_err(|e| QuoteError::Network(format!("Failed to parse RPC response: {}", e)))?;

		if let Some(error) = json.get("error") {
			let message = error
				.get("message")
				.and_then(|m| m.as_str())
				.unwrap_or("unknown")
				.to_string();
			let code = error.get("code").and_then(|c| c.as_i64()).unwrap_or(-1);
			return Err(QuoteError::Reverted { code, message });
		}

		let result_hex = json
			.get("result")
			.and_then(|r| r.as_str())
			.ok_or_else(|| QuoteError::Decode("No result in RPC response".to_string()))?;

		hex::decode(result_hex.trim_start_matches("0x"))
			.map_err(|e| QuoteError::Decode(format!("Invalid hex result: {}", e)))
	}
}
