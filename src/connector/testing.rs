//! In-memory ledger used by unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::blockchain::client::LedgerClient;
use crate::blockchain::types::{AssetReceipt, AssetRequest, ChainInfo, RpcError, RpcResult};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Behavior {
    Respond,
    RespondAfter(Duration),
    Hang,
    Reject(&'static str),
}

pub(crate) struct MockLedger {
    chain: Behavior,
    assets: Behavior,
    issued: AtomicU64,
    pub(crate) requests: Arc<Mutex<Vec<AssetRequest>>>,
}

impl MockLedger {
    pub(crate) fn new(chain: Behavior, assets: Behavior) -> Self {
        Self {
            chain,
            assets,
            issued: AtomicU64::new(0),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn healthy() -> Self {
        Self::new(Behavior::Respond, Behavior::Respond)
    }

    async fn behave(behavior: Behavior) -> RpcResult<()> {
        match behavior {
            Behavior::Respond => Ok(()),
            Behavior::RespondAfter(delay) => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
            Behavior::Hang => std::future::pending().await,
            Behavior::Reject(message) => Err(RpcError::Remote {
                code: -32000,
                message: message.to_string(),
            }),
        }
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    fn endpoint(&self) -> String {
        "mock://ledger/".to_string()
    }

    async fn chain_info(&self) -> RpcResult<ChainInfo> {
        Self::behave(self.chain).await?;
        Ok(ChainInfo {
            height: Some(4210),
            best_block_id: Some("29tZmock".to_string()),
            ..ChainInfo::default()
        })
    }

    async fn create_assets(&self, request: &AssetRequest) -> RpcResult<AssetReceipt> {
        self.requests.lock().unwrap().push(request.clone());
        Self::behave(self.assets).await?;
        let n = self.issued.fetch_add(1, Ordering::SeqCst);
        Ok(AssetReceipt {
            tx_hash: format!("tx-{}", n),
        })
    }
}
