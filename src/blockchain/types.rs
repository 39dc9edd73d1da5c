//! Ledger RPC types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to a ledger node.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The request never produced an HTTP response (DNS, refused, reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The node answered with a non-success HTTP status.
    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The node returned a JSON-RPC error object.
    #[error("node error {code}: {message}")]
    Remote { code: i64, message: String },

    /// The response could not be decoded or lacked required fields.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The endpoint did not answer within its share of the deadline.
    #[error("no answer after {after_ms} ms")]
    Timeout { after_ms: u64 },
}

impl RpcError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RpcError::Timeout { .. })
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RpcError::Decode(e.to_string())
        } else {
            RpcError::Transport(e.to_string())
        }
    }
}

/// Result type for ledger RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Chain metadata returned by the liveness query.
///
/// Only the fields the connector logs are named; everything else the node
/// reports is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_block_id: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Parameters of a `createAssets` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    pub issuer: String,
    pub asset_code: String,
    pub recipient: String,
    pub amount: u64,
    pub fee: u64,
    pub data: String,
}

/// Result of a `createAssets` call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetReceipt {
    pub tx_hash: String,
}
