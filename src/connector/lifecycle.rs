//! Connector construction and liveness.
//!
//! # State Transitions
//! ```text
//! Uninitialized → Ready:    chain info answered within the liveness timeout
//! Uninitialized → Degraded: chain info rejected, unreachable or timed out
//! Ready/Degraded → either:  initialize() re-runs the same check
//! ```
//!
//! A degraded connector stays usable as a value; submissions simply fail
//! through the client until the node answers again.

use std::time::Duration;
use tokio::sync::watch;

use crate::blockchain::client::{BifrostClient, LedgerClient};
use crate::blockchain::identity::Identity;
use crate::blockchain::transaction::TxBuilder;
use crate::blockchain::types::ChainInfo;
use crate::config::LedgerConfig;
use crate::connector::types::{ConnectorError, ConnectorResult, ConnectorState};
use crate::observability::metrics;
use crate::resilience::with_deadline;

/// A connector bound to one ledger node.
///
/// Everything a connector needs lives on the instance, so several
/// connectors (one per ledger) can run side by side.
pub struct Connector {
    pub(super) name: String,
    pub(super) client: Box<dyn LedgerClient>,
    pub(super) tx_builder: TxBuilder,
    pub(super) liveness_timeout: Duration,
    pub(super) submit_timeout: Duration,
    state: watch::Sender<ConnectorState>,
    chain_info: watch::Sender<Option<ChainInfo>>,
}

impl Connector {
    /// Build a connector talking JSON-RPC to the configured Bifrost node.
    ///
    /// No network traffic happens until `initialize`.
    pub fn new(config: &LedgerConfig) -> ConnectorResult<Self> {
        let client = BifrostClient::new(config)?;
        Self::with_client(config, client)
    }

    /// Build a connector over any ledger client.
    pub fn with_client(
        config: &LedgerConfig,
        client: impl LedgerClient + 'static,
    ) -> ConnectorResult<Self> {
        if config.name.trim().is_empty() {
            return Err(ConnectorError::Config("connector name must not be empty".to_string()));
        }

        let identity = Identity::parse(&config.account)?;
        let (state, _) = watch::channel(ConnectorState::Uninitialized);
        let (chain_info, _) = watch::channel(None);

        Ok(Self {
            name: config.name.clone(),
            client: Box::new(client),
            tx_builder: TxBuilder::new(identity, config.asset_code.clone()),
            liveness_timeout: config.liveness_timeout(),
            submit_timeout: config.submit_timeout(),
            state,
            chain_info,
        })
    }

    /// Check that the node is alive.
    ///
    /// On success the connector becomes `Ready` and its name is returned.
    /// On failure it becomes `Degraded`, a warning is logged and the error is
    /// returned for the host to inspect; nothing panics and the host decides
    /// whether to call `initialize` again.
    pub async fn initialize(&self) -> ConnectorResult<&str> {
        let liveness = async {
            self.client
                .chain_info()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        ConnectorError::Timeout {
                            operation: "chain info".to_string(),
                            after_ms: self.liveness_timeout.as_millis() as u64,
                        }
                    } else {
                        ConnectorError::Connectivity {
                            connector: self.name.clone(),
                            message: e.to_string(),
                        }
                    }
                })
        };

        match with_deadline("chain info", self.liveness_timeout, liveness).await {
            Ok(info) => {
                tracing::info!(
                    connector = %self.name,
                    endpoint = %self.client.endpoint(),
                    height = ?info.height,
                    chain_info = %serde_json::to_string(&info).unwrap_or_default(),
                    "Connected to ledger"
                );
                self.chain_info.send_replace(Some(info));
                self.state.send_replace(ConnectorState::Ready);
                metrics::record_init(&self.name, true);
                Ok(self.name.as_str())
            }
            Err(e) => {
                tracing::warn!(
                    connector = %self.name,
                    endpoint = %self.client.endpoint(),
                    error = %e,
                    "Could not connect to ledger"
                );
                self.state.send_replace(ConnectorState::Degraded);
                metrics::record_init(&self.name, false);
                Err(e)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> &Identity {
        self.tx_builder.identity()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConnectorState {
        *self.state.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.state() == ConnectorState::Ready
    }

    /// Observe lifecycle changes.
    pub fn subscribe_state(&self) -> watch::Receiver<ConnectorState> {
        self.state.subscribe()
    }

    /// Chain metadata from the last successful liveness check.
    pub fn chain_info(&self) -> Option<ChainInfo> {
        self.chain_info.borrow().clone()
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("name", &self.name)
            .field("endpoint", &self.client.endpoint())
            .field("state", &self.state())
            .finish()
    }
}
