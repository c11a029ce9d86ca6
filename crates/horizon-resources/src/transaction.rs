//! Transaction resource model.

use serde::{Deserialize, Serialize};

/// A transaction resource, as returned by transaction endpoints and by
/// synchronous submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Resource id (equal to the transaction hash).
    pub id: String,
    /// Hex-encoded transaction hash.
    pub hash: String,
    /// Cursor value for paging through transaction collections.
    #[serde(default)]
    pub paging_token: String,
    /// Whether the transaction was applied successfully.
    #[serde(default)]
    pub successful: bool,
    /// Sequence number of the ledger that included the transaction.
    pub ledger: u32,
    /// Account that sourced the transaction.
    pub source_account: String,
    /// Fee actually charged, in stroops (decimal string).
    #[serde(default)]
    pub fee_charged: Option<String>,
    /// Maximum fee the source account was willing to pay.
    #[serde(default)]
    pub max_fee: Option<String>,
    /// Number of operations applied.
    pub operation_count: u32,
    /// Base64 XDR of the submitted envelope.
    #[serde(default)]
    pub envelope_xdr: Option<String>,
    /// Base64 XDR of the transaction result, carrying the per-operation
    /// results.
    #[serde(default)]
    pub result_xdr: Option<String>,
    /// Base64 XDR of the result meta.
    #[serde(default)]
    pub result_meta_xdr: Option<String>,
    /// Memo type (`none`, `text`, `id`, `hash`, `return`).
    #[serde(default)]
    pub memo_type: Option<String>,
    /// Memo value, when the memo type carries one.
    #[serde(default)]
    pub memo: Option<String>,
    /// Ledger close time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Inner transaction hash, present on fee-bump results.
    #[serde(default)]
    pub inner_transaction: Option<InnerTransaction>,
    /// Fee-bump details, present when this transaction was fee-bumped.
    #[serde(default)]
    pub fee_bump_transaction: Option<FeeBumpTransaction>,
}

/// The inner transaction of a fee-bump result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InnerTransaction {
    /// Hash of the inner transaction.
    pub hash: String,
    /// Maximum fee declared by the inner transaction.
    #[serde(default)]
    pub max_fee: Option<String>,
    /// Signatures of the inner transaction.
    #[serde(default)]
    pub signatures: Vec<String>,
}

/// The outer envelope of a fee-bump result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeBumpTransaction {
    /// Hash of the fee-bump envelope.
    pub hash: String,
    /// Signatures of the fee-bump envelope.
    #[serde(default)]
    pub signatures: Vec<String>,
}
