//! Payload submission.
//!
//! # Responsibilities
//! - Wrap a payload into a self-addressed asset transaction
//! - Submit it with a deadline and return the node's transaction id
//! - Deliver every outcome to the caller exactly once
//!
//! # Design Decisions
//! - No readiness pre-check: a degraded connector fails through the client
//! - No confirmation wait; the block reference is always `BLOCK_NOT_TRACKED`
//! - No deduplication; each call creates a new transaction

use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

use crate::connector::lifecycle::Connector;
use crate::connector::message::OutboundMessage;
use crate::connector::types::{ConnectorError, ConnectorResult, SubmissionResult};
use crate::observability::metrics;
use crate::resilience::with_deadline;

impl Connector {
    /// Submit an encoded payload.
    ///
    /// Rejections are returned as `ConnectorError::Submission` and an
    /// expired deadline as `ConnectorError::Timeout`.
    pub async fn submit(&self, payload: &str) -> ConnectorResult<SubmissionResult> {
        let request = self.tx_builder.build(payload);

        tracing::info!(
            connector = %self.name,
            asset_code = %request.asset_code,
            payload_len = payload.len(),
            "Submitting payload"
        );

        let started = Instant::now();
        let submission = async {
            self.client
                .create_assets(&request)
                .await
                .map(|receipt| SubmissionResult::unconfirmed(receipt.tx_hash))
                .map_err(|e| ConnectorError::Submission {
                    connector: self.name.clone(),
                    message: e.to_string(),
                })
        };

        let result = with_deadline("asset submission", self.submit_timeout, submission).await;
        metrics::record_submission(&self.name, &result, started.elapsed());

        match &result {
            Ok(submitted) => tracing::info!(
                connector = %self.name,
                tx_id = %submitted.tx_id,
                "Payload submitted"
            ),
            Err(e) => tracing::warn!(
                connector = %self.name,
                error = %e,
                "Payload was not processed"
            ),
        }

        result
    }

    /// Submit the encoded payload of a host message.
    pub async fn send_message(&self, message: &OutboundMessage) -> ConnectorResult<SubmissionResult> {
        let payload = message.encoded_payload().inspect_err(|e| {
            tracing::warn!(connector = %self.name, error = %e, "Message not sent");
        })?;
        self.submit(payload).await
    }

    /// Submit in the background and hand the outcome to `callback`.
    ///
    /// The callback runs exactly once, with either the submission result or
    /// the error. Dropping the returned handle does not cancel the submission.
    pub fn submit_with_callback<F>(self: &Arc<Self>, payload: impl Into<String>, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(ConnectorResult<SubmissionResult>) + Send + 'static,
    {
        let connector = Arc::clone(self);
        let payload = payload.into();

        tokio::spawn(async move {
            let result = connector.submit(&payload).await;
            callback(result);
        })
    }
}
