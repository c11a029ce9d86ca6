//! Account resource model.

use std::collections::HashMap;

use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::asset::Asset;

/// Data entry key an account sets to opt into memo-required payments.
const MEMO_REQUIRED_KEY: &str = "config.memo_required";

/// An account resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Resource id (equal to the account id for accounts).
    pub id: String,
    /// The account's public key.
    pub account_id: String,
    /// Cursor value for paging through account collections.
    #[serde(default)]
    pub paging_token: String,
    /// Current sequence number, as a decimal string.
    pub sequence: String,
    /// Number of subentries (trustlines, offers, data entries, signers).
    #[serde(default)]
    pub subentry_count: u32,
    /// Home domain, if set.
    #[serde(default)]
    pub home_domain: Option<String>,
    /// Balances held by the account, native first.
    #[serde(default)]
    pub balances: Vec<Balance>,
    /// Signers that can authorize transactions for this account.
    #[serde(default)]
    pub signers: Vec<Signer>,
    /// Operation authorization thresholds.
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
    /// Authorization flags.
    #[serde(default)]
    pub flags: Option<AccountFlags>,
    /// Arbitrary data entries; values are base64-encoded.
    #[serde(default)]
    pub data: HashMap<String, String>,
}

impl Account {
    /// Whether this account opts into memo-required payments.
    ///
    /// The flag is the `config.memo_required` data entry whose base64
    /// value decodes to `1`.
    pub fn requires_memo(&self) -> bool {
        self.data.get(MEMO_REQUIRED_KEY).is_some_and(|value| {
            base64::engine::general_purpose::STANDARD
                .decode(value)
                .is_ok_and(|raw| raw == b"1")
        })
    }
}

/// One balance line of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Decimal amount string.
    pub balance: String,
    /// The asset this balance is denominated in.
    #[serde(flatten)]
    pub asset: Asset,
    /// Trustline limit, absent for the native balance.
    #[serde(default)]
    pub limit: Option<String>,
    /// Liquidity pool id for pool share balances.
    #[serde(default)]
    pub liquidity_pool_id: Option<String>,
}

/// A signer entry of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signer {
    /// The signer key.
    pub key: String,
    /// Signature weight.
    pub weight: u8,
    /// Key type (`ed25519_public_key`, `sha256_hash`, `preauth_tx`).
    #[serde(rename = "type")]
    pub key_type: String,
}

/// Operation authorization thresholds of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Threshold for low-security operations.
    pub low_threshold: u8,
    /// Threshold for medium-security operations.
    pub med_threshold: u8,
    /// Threshold for high-security operations.
    pub high_threshold: u8,
}

/// Authorization flags of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccountFlags {
    /// Trustlines require issuer authorization.
    #[serde(default)]
    pub auth_required: bool,
    /// The issuer can revoke authorization.
    #[serde(default)]
    pub auth_revocable: bool,
    /// The flags above can never be changed again.
    #[serde(default)]
    pub auth_immutable: bool,
    /// The issuer can claw back balances.
    #[serde(default)]
    pub auth_clawback_enabled: bool,
}
