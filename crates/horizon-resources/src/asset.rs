//! The asset triple embedded in operation and effect payloads.

use serde::{Deserialize, Serialize};

/// An asset reference as Horizon serializes it inline: a type tag plus
/// optional code and issuer (absent for the native asset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// `native`, `credit_alphanum4`, `credit_alphanum12`, or
    /// `liquidity_pool_shares`.
    pub asset_type: String,
    /// Asset code, absent for the native asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_code: Option<String>,
    /// Issuing account, absent for the native asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_issuer: Option<String>,
}

impl Asset {
    /// The native asset of the network.
    pub fn native() -> Self {
        Self {
            asset_type: "native".to_string(),
            asset_code: None,
            asset_issuer: None,
        }
    }

    /// Whether this is the native asset.
    pub fn is_native(&self) -> bool {
        self.asset_type == "native"
    }
}

/// An asset paired with an amount, as used in liquidity pool reserves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    /// Canonical asset string (`native` or `CODE:ISSUER`).
    pub asset: String,
    /// Decimal amount string.
    pub amount: String,
}
