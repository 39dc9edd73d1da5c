//! Connector types and error definitions.

use serde::Serialize;
use thiserror::Error;

/// Block reference reported when confirmation is not tracked.
pub const BLOCK_NOT_TRACKED: u64 = 0;

/// Errors surfaced by a connector.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The connector could not be built from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The node was unreachable or rejected the liveness query.
    #[error("Connector {connector} could not reach ledger: {message}")]
    Connectivity { connector: String, message: String },

    /// The node rejected or failed to process a transaction.
    #[error("Connector {connector} submission failed: {message}")]
    Submission { connector: String, message: String },

    /// A bounded operation did not complete in time.
    #[error("Timeout waiting for {operation} after {after_ms} ms")]
    Timeout { operation: String, after_ms: u64 },

    /// A host message carried nothing to submit.
    #[error("Message has no encoded payload")]
    MissingPayload,
}

impl ConnectorError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ConnectorError::Timeout { .. })
    }

    /// Check if error is retryable
    ///
    /// Rejected submissions are not: the node may already hold the transaction.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ConnectorError::Connectivity { .. } | ConnectorError::Timeout { .. }
        )
    }
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Lifecycle state of a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorState {
    /// Liveness has not been checked yet.
    Uninitialized,
    /// The last liveness check succeeded.
    Ready,
    /// The last liveness check failed or timed out. Not fatal.
    Degraded,
}

impl ConnectorState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorState::Uninitialized => "uninitialized",
            ConnectorState::Ready => "ready",
            ConnectorState::Degraded => "degraded",
        }
    }
}

impl std::fmt::Display for ConnectorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    /// Identifier assigned by the node.
    pub tx_id: String,
    /// Always `BLOCK_NOT_TRACKED`; submission does not wait for inclusion.
    pub block_ref: u64,
}

impl SubmissionResult {
    pub fn unconfirmed(tx_id: impl Into<String>) -> Self {
        Self {
            tx_id: tx_id.into(),
            block_ref: BLOCK_NOT_TRACKED,
        }
    }
}
