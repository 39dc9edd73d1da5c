//! Construction of payload-carrying transactions.
//!
//! A message rides in the `data` field of a self-addressed asset transfer:
//! one unit of a fixed asset, zero fee, issuer and recipient both set to the
//! connector's identity.

use crate::blockchain::identity::Identity;
use crate::blockchain::types::AssetRequest;

/// Units transferred by every submission.
pub const CARRIER_AMOUNT: u64 = 1;

/// Fee offered by every submission.
pub const CARRIER_FEE: u64 = 0;

/// Builds `createAssets` requests for one identity and asset code.
#[derive(Debug, Clone)]
pub struct TxBuilder {
    identity: Identity,
    asset_code: String,
}

impl TxBuilder {
    pub fn new(identity: Identity, asset_code: impl Into<String>) -> Self {
        Self {
            identity,
            asset_code: asset_code.into(),
        }
    }

    /// Build a fresh request carrying `payload`.
    ///
    /// The payload is copied verbatim; it is neither encoded nor inspected.
    pub fn build(&self, payload: &str) -> AssetRequest {
        AssetRequest {
            issuer: self.identity.to_string(),
            asset_code: self.asset_code.clone(),
            recipient: self.identity.to_string(),
            amount: CARRIER_AMOUNT,
            fee: CARRIER_FEE,
            data: payload.to_string(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}
