//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap ledger calls with a deadline
//! - Report expiry as `ConnectorError::Timeout`, distinct from rejections
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - The wrapped future is dropped on expiry; a request already on the wire
//!   may still be processed by the node

use std::future::Future;
use std::time::Duration;

use crate::connector::types::{ConnectorError, ConnectorResult};

/// Run `fut`, failing with `ConnectorError::Timeout` once `deadline` elapses.
pub async fn with_deadline<F, T>(operation: &str, deadline: Duration, fut: F) -> ConnectorResult<T>
where
    F: Future<Output = ConnectorResult<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(ConnectorError::Timeout {
            operation: operation.to_string(),
            after_ms: deadline.as_millis() as u64,
        }),
    }
}
