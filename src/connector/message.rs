//! Host messages handed to the connector.
//!
//! The messaging host serializes its messages with a `MetaHeader` section; the
//! connector only ever reads the already-encoded payload from it.

use serde::{Deserialize, Serialize};

use crate::connector::types::{ConnectorError, ConnectorResult};

/// A message queued for transmission by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutboundMessage {
    #[serde(default)]
    pub meta_header: MetaHeader,

    /// Header and body sections the connector passes over.
    #[serde(flatten)]
    pub sections: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaHeader {
    /// Name of the blockchain the host routed this message to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain: Option<String>,

    /// Fully encoded message, carried verbatim as transaction data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_message: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OutboundMessage {
    /// Wrap an already encoded payload.
    pub fn encoded(payload: impl Into<String>) -> Self {
        Self {
            meta_header: MetaHeader {
                encoded_message: Some(payload.into()),
                ..MetaHeader::default()
            },
            ..Self::default()
        }
    }

    /// The encoded payload, if there is a non-empty one.
    pub fn encoded_payload(&self) -> ConnectorResult<&str> {
        match self.meta_header.encoded_message.as_deref() {
            Some(payload) if !payload.is_empty() => Ok(payload),
            _ => Err(ConnectorError::MissingPayload),
        }
    }
}
