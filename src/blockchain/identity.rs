//! Ledger account identity.
//!
//! The connector never signs anything itself; the node holds the keys. The
//! identity is only the base58 account named as issuer and recipient of
//! every payload-carrying transaction.

use std::fmt;

use crate::connector::types::{ConnectorError, ConnectorResult};

/// Fixed account used as both parties of every submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// Parse a base58 account string.
    pub fn parse(account: &str) -> ConnectorResult<Self> {
        let account = account.trim();
        if account.is_empty() {
            return Err(ConnectorError::Config("account must not be empty".to_string()));
        }

        bs58::decode(account)
            .into_vec()
            .map_err(|e| ConnectorError::Config(format!("Invalid account '{}': {}", account, e)))?;

        Ok(Self(account.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
