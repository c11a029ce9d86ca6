//! Operation resources: the polymorphic family discriminated by
//! `type_i`, one variant per operation kind the ledger supports.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::asset::Asset;
use crate::decode;
use crate::error::DecodeError;

/// Fields shared by every operation resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationBase {
    /// Unique operation id.
    pub id: String,
    /// Cursor value for paging through operation collections.
    pub paging_token: String,
    /// Hash of the transaction this operation belongs to.
    #[serde(default)]
    pub transaction_hash: Option<String>,
    /// Account that sourced the operation.
    #[serde(default)]
    pub source_account: Option<String>,
    /// Ledger close time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the enclosing transaction succeeded.
    #[serde(default)]
    pub transaction_successful: Option<bool>,
    /// Integer discriminator selecting the concrete variant.
    pub type_i: i64,
    /// String discriminator (the kind's canonical name).
    #[serde(rename = "type")]
    pub type_name: String,
}

/// The discriminator registry for operation resources.
///
/// Adding a new kind is a data addition: a new variant here, a row in
/// [`OperationKind::ALL`], and an arm in the two lookup tables. The
/// dispatch in [`Operation`] follows from exhaustive matches over this
/// enum, so a new kind cannot silently fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Creates and funds a new account.
    CreateAccount,
    /// Sends an amount of an asset to a destination account.
    Payment,
    /// Cross-asset payment fixing the received amount.
    PathPaymentStrictReceive,
    /// Creates, updates, or deletes a sell offer.
    ManageSellOffer,
    /// Creates a passive sell offer.
    CreatePassiveSellOffer,
    /// Sets account options (thresholds, flags, signers, home domain).
    SetOptions,
    /// Creates, updates, or deletes a trustline.
    ChangeTrust,
    /// Legacy trustline authorization toggle.
    AllowTrust,
    /// Merges an account into a destination account.
    AccountMerge,
    /// Legacy inflation run.
    Inflation,
    /// Sets, modifies, or deletes a data entry.
    ManageData,
    /// Bumps the account sequence number.
    BumpSequence,
    /// Creates, updates, or deletes a buy offer.
    ManageBuyOffer,
    /// Cross-asset payment fixing the sent amount.
    PathPaymentStrictSend,
    /// Creates a claimable balance.
    CreateClaimableBalance,
    /// Claims a claimable balance.
    ClaimClaimableBalance,
    /// Starts sponsoring another account's reserves.
    BeginSponsoringFutureReserves,
    /// Ends a sponsoring relationship.
    EndSponsoringFutureReserves,
    /// Revokes sponsorship of a ledger entry.
    RevokeSponsorship,
    /// Claws back an amount of an asset from an account.
    Clawback,
    /// Claws back a claimable balance.
    ClawbackClaimableBalance,
    /// Sets trustline authorization flags.
    SetTrustLineFlags,
    /// Deposits into a liquidity pool.
    LiquidityPoolDeposit,
    /// Withdraws from a liquidity pool.
    LiquidityPoolWithdraw,
    /// Invokes a smart contract host function.
    InvokeHostFunction,
    /// Extends the time-to-live of a contract footprint.
    ExtendFootprintTtl,
    /// Restores an archived contract footprint.
    RestoreFootprint,
}

impl OperationKind {
    /// Every registered operation kind, in discriminator order.
    pub const ALL: &'static [OperationKind] = &[
        OperationKind::CreateAccount,
        OperationKind::Payment,
        OperationKind::PathPaymentStrictReceive,
        OperationKind::ManageSellOffer,
        OperationKind::CreatePassiveSellOffer,
        OperationKind::SetOptions,
        OperationKind::ChangeTrust,
        OperationKind::AllowTrust,
        OperationKind::AccountMerge,
        OperationKind::Inflation,
        OperationKind::ManageData,
        OperationKind::BumpSequence,
        OperationKind::ManageBuyOffer,
        OperationKind::PathPaymentStrictSend,
        OperationKind::CreateClaimableBalance,
        OperationKind::ClaimClaimableBalance,
        OperationKind::BeginSponsoringFutureReserves,
        OperationKind::EndSponsoringFutureReserves,
        OperationKind::RevokeSponsorship,
        OperationKind::Clawback,
        OperationKind::ClawbackClaimableBalance,
        OperationKind::SetTrustLineFlags,
        OperationKind::LiquidityPoolDeposit,
        OperationKind::LiquidityPoolWithdraw,
        OperationKind::InvokeHostFunction,
        OperationKind::ExtendFootprintTtl,
        OperationKind::RestoreFootprint,
    ];

    /// The integer discriminator of this kind.
    pub fn type_i(self) -> i64 {
        match self {
            OperationKind::CreateAccount => 0,
            OperationKind::Payment => 1,
            OperationKind::PathPaymentStrictReceive => 2,
            OperationKind::ManageSellOffer => 3,
            OperationKind::CreatePassiveSellOffer => 4,
            OperationKind::SetOptions => 5,
            OperationKind::ChangeTrust => 6,
            OperationKind::AllowTrust => 7,
            OperationKind::AccountMerge => 8,
            OperationKind::Inflation => 9,
            OperationKind::ManageData => 10,
            OperationKind::BumpSequence => 11,
            OperationKind::ManageBuyOffer => 12,
            OperationKind::PathPaymentStrictSend => 13,
            OperationKind::CreateClaimableBalance => 14,
            OperationKind::ClaimClaimableBalance => 15,
            OperationKind::BeginSponsoringFutureReserves => 16,
            OperationKind::EndSponsoringFutureReserves => 17,
            OperationKind::RevokeSponsorship => 18,
            OperationKind::Clawback => 19,
            OperationKind::ClawbackClaimableBalance => 20,
            OperationKind::SetTrustLineFlags => 21,
            OperationKind::LiquidityPoolDeposit => 22,
            OperationKind::LiquidityPoolWithdraw => 23,
            OperationKind::InvokeHostFunction => 24,
            OperationKind::ExtendFootprintTtl => 25,
            OperationKind::RestoreFootprint => 26,
        }
    }

    /// Look up a kind by its integer discriminator.
    pub fn from_type_i(code: i64) -> Option<Self> {
        OperationKind::ALL.iter().copied().find(|k| k.type_i() == code)
    }

    /// The canonical string name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::CreateAccount => "create_account",
            OperationKind::Payment => "payment",
            OperationKind::PathPaymentStrictReceive => "path_payment_strict_receive",
            OperationKind::ManageSellOffer => "manage_sell_offer",
            OperationKind::CreatePassiveSellOffer => "create_passive_sell_offer",
            OperationKind::SetOptions => "set_options",
            OperationKind::ChangeTrust => "change_trust",
            OperationKind::AllowTrust => "allow_trust",
            OperationKind::AccountMerge => "account_merge",
            OperationKind::Inflation => "inflation",
            OperationKind::ManageData => "manage_data",
            OperationKind::BumpSequence => "bump_sequence",
            OperationKind::ManageBuyOffer => "manage_buy_offer",
            OperationKind::PathPaymentStrictSend => "path_payment_strict_send",
            OperationKind::CreateClaimableBalance => "create_claimable_balance",
            OperationKind::ClaimClaimableBalance => "claim_claimable_balance",
            OperationKind::BeginSponsoringFutureReserves => "begin_sponsoring_future_reserves",
            OperationKind::EndSponsoringFutureReserves => "end_sponsoring_future_reserves",
            OperationKind::RevokeSponsorship => "revoke_sponsorship",
            OperationKind::Clawback => "clawback",
            OperationKind::ClawbackClaimableBalance => "clawback_claimable_balance",
            OperationKind::SetTrustLineFlags => "set_trust_line_flags",
            OperationKind::LiquidityPoolDeposit => "liquidity_pool_deposit",
            OperationKind::LiquidityPoolWithdraw => "liquidity_pool_withdraw",
            OperationKind::InvokeHostFunction => "invoke_host_function",
            OperationKind::ExtendFootprintTtl => "extend_footprint_ttl",
            OperationKind::RestoreFootprint => "restore_footprint",
        }
    }

    /// Look up a kind by its canonical string name.
    pub fn from_name(name: &str) -> Option<Self> {
        OperationKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// A decoded operation resource.
///
/// Deserializing through serde is tolerant: a discriminator with no
/// registered variant becomes [`Operation::Unsupported`], carrying only
/// the base fields, so pages and streams from newer servers keep
/// decoding. Use [`decode_operation`] for the strict form that rejects
/// unknown discriminators.
#[derive(Debug, Clone)]
pub enum Operation {
    /// `create_account` (0).
    CreateAccount(CreateAccountOperation),
    /// `payment` (1).
    Payment(PaymentOperation),
    /// `path_payment_strict_receive` (2).
    PathPaymentStrictReceive(PathPaymentOperation),
    /// `manage_sell_offer` (3).
    ManageSellOffer(ManageOfferOperation),
    /// `create_passive_sell_offer` (4).
    CreatePassiveSellOffer(PassiveSellOfferOperation),
    /// `set_options` (5).
    SetOptions(SetOptionsOperation),
    /// `change_trust` (6).
    ChangeTrust(ChangeTrustOperation),
    /// `allow_trust` (7).
    AllowTrust(AllowTrustOperation),
    /// `account_merge` (8).
    AccountMerge(AccountMergeOperation),
    /// `inflation` (9).
    Inflation(BasicOperation),
    /// `manage_data` (10).
    ManageData(ManageDataOperation),
    /// `bump_sequence` (11).
    BumpSequence(BumpSequenceOperation),
    /// `manage_buy_offer` (12).
    ManageBuyOffer(ManageOfferOperation),
    /// `path_payment_strict_send` (13).
    PathPaymentStrictSend(PathPaymentOperation),
    /// `create_claimable_balance` (14).
    CreateClaimableBalance(CreateClaimableBalanceOperation),
    /// `claim_claimable_balance` (15).
    ClaimClaimableBalance(ClaimClaimableBalanceOperation),
    /// `begin_sponsoring_future_reserves` (16).
    BeginSponsoringFutureReserves(BeginSponsoringOperation),
    /// `end_sponsoring_future_reserves` (17).
    EndSponsoringFutureReserves(EndSponsoringOperation),
    /// `revoke_sponsorship` (18).
    RevokeSponsorship(RevokeSponsorshipOperation),
    /// `clawback` (19).
    Clawback(ClawbackOperation),
    /// `clawback_claimable_balance` (20).
    ClawbackClaimableBalance(ClawbackClaimableBalanceOperation),
    /// `set_trust_line_flags` (21).
    SetTrustLineFlags(SetTrustLineFlagsOperation),
    /// `liquidity_pool_deposit` (22).
    LiquidityPoolDeposit(LiquidityPoolDepositOperation),
    /// `liquidity_pool_withdraw` (23).
    LiquidityPoolWithdraw(LiquidityPoolWithdrawOperation),
    /// `invoke_host_function` (24).
    InvokeHostFunction(InvokeHostFunctionOperation),
    /// `extend_footprint_ttl` (25).
    ExtendFootprintTtl(ExtendFootprintTtlOperation),
    /// `restore_footprint` (26).
    RestoreFootprint(BasicOperation),
    /// An operation whose discriminator has no registered variant; only
    /// the base fields are retained.
    Unsupported(BasicOperation),
}

impl Operation {
    /// The registered kind of this operation, or `None` for
    /// [`Operation::Unsupported`].
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            Operation::CreateAccount(_) => Some(OperationKind::CreateAccount),
            Operation::Payment(_) => Some(OperationKind::Payment),
            Operation::PathPaymentStrictReceive(_) => Some(OperationKind::PathPaymentStrictReceive),
            Operation::ManageSellOffer(_) => Some(OperationKind::ManageSellOffer),
            Operation::CreatePassiveSellOffer(_) => Some(OperationKind::CreatePassiveSellOffer),
            Operation::SetOptions(_) => Some(OperationKind::SetOptions),
            Operation::ChangeTrust(_) => Some(OperationKind::ChangeTrust),
            Operation::AllowTrust(_) => Some(OperationKind::AllowTrust),
            Operation::AccountMerge(_) => Some(OperationKind::AccountMerge),
            Operation::Inflation(_) => Some(OperationKind::Inflation),
            Operation::ManageData(_) => Some(OperationKind::ManageData),
            Operation::BumpSequence(_) => Some(OperationKind::BumpSequence),
            Operation::ManageBuyOffer(_) => Some(OperationKind::ManageBuyOffer),
            Operation::PathPaymentStrictSend(_) => Some(OperationKind::PathPaymentStrictSend),
            Operation::CreateClaimableBalance(_) => Some(OperationKind::CreateClaimableBalance),
            Operation::ClaimClaimableBalance(_) => Some(OperationKind::ClaimClaimableBalance),
            Operation::BeginSponsoringFutureReserves(_) => {
                Some(OperationKind::BeginSponsoringFutureReserves)
            }
            Operation::EndSponsoringFutureReserves(_) => {
                Some(OperationKind::EndSponsoringFutureReserves)
            }
            Operation::RevokeSponsorship(_) => Some(OperationKind::RevokeSponsorship),
            Operation::Clawback(_) => Some(OperationKind::Clawback),
            Operation::ClawbackClaimableBalance(_) => Some(OperationKind::ClawbackClaimableBalance),
            Operation::SetTrustLineFlags(_) => Some(OperationKind::SetTrustLineFlags),
            Operation::LiquidityPoolDeposit(_) => Some(OperationKind::LiquidityPoolDeposit),
            Operation::LiquidityPoolWithdraw(_) => Some(OperationKind::LiquidityPoolWithdraw),
            Operation::InvokeHostFunction(_) => Some(OperationKind::InvokeHostFunction),
            Operation::ExtendFootprintTtl(_) => Some(OperationKind::ExtendFootprintTtl),
            Operation::RestoreFootprint(_) => Some(OperationKind::RestoreFootprint),
            Operation::Unsupported(_) => None,
        }
    }

    /// The base fields shared by every operation.
    pub fn base(&self) -> &OperationBase {
        match self {
            Operation::CreateAccount(op) => &op.base,
            Operation::Payment(op) => &op.base,
            Operation::PathPaymentStrictReceive(op) => &op.base,
            Operation::ManageSellOffer(op) => &op.base,
            Operation::CreatePassiveSellOffer(op) => &op.base,
            Operation::SetOptions(op) => &op.base,
            Operation::ChangeTrust(op) => &op.base,
            Operation::AllowTrust(op) => &op.base,
            Operation::AccountMerge(op) => &op.base,
            Operation::Inflation(op) => &op.base,
            Operation::ManageData(op) => &op.base,
            Operation::BumpSequence(op) => &op.base,
            Operation::ManageBuyOffer(op) => &op.base,
            Operation::PathPaymentStrictSend(op) => &op.base,
            Operation::CreateClaimableBalance(op) => &op.base,
            Operation::ClaimClaimableBalance(op) => &op.base,
            Operation::BeginSponsoringFutureReserves(op) => &op.base,
            Operation::EndSponsoringFutureReserves(op) => &op.base,
            Operation::RevokeSponsorship(op) => &op.base,
            Operation::Clawback(op) => &op.base,
            Operation::ClawbackClaimableBalance(op) => &op.base,
            Operation::SetTrustLineFlags(op) => &op.base,
            Operation::LiquidityPoolDeposit(op) => &op.base,
            Operation::LiquidityPoolWithdraw(op) => &op.base,
            Operation::InvokeHostFunction(op) => &op.base,
            Operation::ExtendFootprintTtl(op) => &op.base,
            Operation::RestoreFootprint(op) => &op.base,
            Operation::Unsupported(op) => &op.base,
        }
    }

    /// The operation id.
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// The cursor value of this operation.
    pub fn paging_token(&self) -> &str {
        &self.base().paging_token
    }

    /// Decode an operation from a raw JSON value, selecting the variant
    /// by the embedded discriminator. Unknown discriminators yield
    /// [`DecodeError::UnknownVariant`].
    pub fn from_json_value(mut value: Value) -> Result<Self, DecodeError> {
        let code = decode::discriminator(&value, |name| {
            OperationKind::from_name(name).map(OperationKind::type_i)
        })?;
        decode::normalize(&mut value, code);
        match OperationKind::from_type_i(code) {
            Some(kind) => Self::decode_variant(kind, value),
            None => Err(DecodeError::UnknownVariant { code }),
        }
    }

    fn decode_variant(kind: OperationKind, value: Value) -> Result<Self, DecodeError> {
        let op = match kind {
            OperationKind::CreateAccount => {
                Operation::CreateAccount(serde_json::from_value(value)?)
            }
            OperationKind::Payment => Operation::Payment(serde_json::from_value(value)?),
            OperationKind::PathPaymentStrictReceive => {
                Operation::PathPaymentStrictReceive(serde_json::from_value(value)?)
            }
            OperationKind::ManageSellOffer => {
                Operation::ManageSellOffer(serde_json::from_value(value)?)
            }
            OperationKind::CreatePassiveSellOffer => {
                Operation::CreatePassiveSellOffer(serde_json::from_value(value)?)
            }
            OperationKind::SetOptions => Operation::SetOptions(serde_json::from_value(value)?),
            OperationKind::ChangeTrust => Operation::ChangeTrust(serde_json::from_value(value)?),
            OperationKind::AllowTrust => Operation::AllowTrust(serde_json::from_value(value)?),
            OperationKind::AccountMerge => Operation::AccountMerge(serde_json::from_value(value)?),
            OperationKind::Inflation => Operation::Inflation(serde_json::from_value(value)?),
            OperationKind::ManageData => Operation::ManageData(serde_json::from_value(value)?),
            OperationKind::BumpSequence => Operation::BumpSequence(serde_json::from_value(value)?),
            OperationKind::ManageBuyOffer => {
                Operation::ManageBuyOffer(serde_json::from_value(value)?)
            }
            OperationKind::PathPaymentStrictSend => {
                Operation::PathPaymentStrictSend(serde_json::from_value(value)?)
            }
            OperationKind::CreateClaimableBalance => {
                Operation::CreateClaimableBalance(serde_json::from_value(value)?)
            }
            OperationKind::ClaimClaimableBalance => {
                Operation::ClaimClaimableBalance(serde_json::from_value(value)?)
            }
            OperationKind::BeginSponsoringFutureReserves => {
                Operation::BeginSponsoringFutureReserves(serde_json::from_value(value)?)
            }
            OperationKind::EndSponsoringFutureReserves => {
                Operation::EndSponsoringFutureReserves(serde_json::from_value(value)?)
            }
            OperationKind::RevokeSponsorship => {
                Operation::RevokeSponsorship(serde_json::from_value(value)?)
            }
            OperationKind::Clawback => Operation::Clawback(serde_json::from_value(value)?),
            OperationKind::ClawbackClaimableBalance => {
                Operation::ClawbackClaimableBalance(serde_json::from_value(value)?)
            }
            OperationKind::SetTrustLineFlags => {
                Operation::SetTrustLineFlags(serde_json::from_value(value)?)
            }
            OperationKind::LiquidityPoolDeposit => {
                Operation::LiquidityPoolDeposit(serde_json::from_value(value)?)
            }
            OperationKind::LiquidityPoolWithdraw => {
                Operation::LiquidityPoolWithdraw(serde_json::from_value(value)?)
            }
            OperationKind::InvokeHostFunction => {
                Operation::InvokeHostFunction(serde_json::from_value(value)?)
            }
            OperationKind::ExtendFootprintTtl => {
                Operation::ExtendFootprintTtl(serde_json::from_value(value)?)
            }
            OperationKind::RestoreFootprint => {
                Operation::RestoreFootprint(serde_json::from_value(value)?)
            }
        };
        Ok(op)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        let code = decode::discriminator(&value, |name| {
            OperationKind::from_name(name).map(OperationKind::type_i)
        })
        .map_err(serde::de::Error::custom)?;
        decode::normalize(&mut value, code);
        match OperationKind::from_type_i(code) {
            Some(kind) => {
                Operation::decode_variant(kind, value).map_err(serde::de::Error::custom)
            }
            None => Ok(Operation::Unsupported(
                serde_json::from_value(value).map_err(serde::de::Error::custom)?,
            )),
        }
    }
}

/// Strict decode of one operation resource from raw bytes.
pub fn decode_operation(bytes: &[u8]) -> Result<Operation, DecodeError> {
    Operation::from_json_value(serde_json::from_slice(bytes)?)
}

/// An operation carrying no fields beyond the shared base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
}

/// `create_account` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// The account that was created.
    pub account: String,
    /// The account that funded the new account.
    #[serde(default)]
    pub funder: Option<String>,
    /// Initial native balance.
    pub starting_balance: String,
}

/// `payment` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Sending account.
    pub from: String,
    /// Receiving account.
    pub to: String,
    /// Amount sent.
    pub amount: String,
    /// Asset sent.
    #[serde(flatten)]
    pub asset: Asset,
}

/// Payload shared by both path payment kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathPaymentOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Sending account.
    pub from: String,
    /// Receiving account.
    pub to: String,
    /// Amount received by the destination.
    pub amount: String,
    /// Destination asset.
    #[serde(flatten)]
    pub asset: Asset,
    /// Amount spent by the source.
    #[serde(default)]
    pub source_amount: Option<String>,
    /// Maximum the source was willing to spend (strict receive only).
    #[serde(default)]
    pub source_max: Option<String>,
    /// Minimum the destination had to receive (strict send only).
    #[serde(default)]
    pub destination_min: Option<String>,
    /// Source asset type.
    #[serde(default)]
    pub source_asset_type: Option<String>,
    /// Source asset code.
    #[serde(default)]
    pub source_asset_code: Option<String>,
    /// Source asset issuer.
    #[serde(default)]
    pub source_asset_issuer: Option<String>,
    /// Intermediate assets on the payment path.
    #[serde(default)]
    pub path: Vec<Asset>,
}

/// Payload shared by `manage_sell_offer` and `manage_buy_offer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManageOfferOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Id of the offer being managed; `0` creates a new offer.
    #[serde(default)]
    pub offer_id: Option<String>,
    /// Amount being sold or bought.
    pub amount: String,
    /// Price as a decimal string.
    pub price: String,
    /// Asset type being bought.
    #[serde(default)]
    pub buying_asset_type: Option<String>,
    /// Asset code being bought.
    #[serde(default)]
    pub buying_asset_code: Option<String>,
    /// Asset issuer being bought.
    #[serde(default)]
    pub buying_asset_issuer: Option<String>,
    /// Asset type being sold.
    #[serde(default)]
    pub selling_asset_type: Option<String>,
    /// Asset code being sold.
    #[serde(default)]
    pub selling_asset_code: Option<String>,
    /// Asset issuer being sold.
    #[serde(default)]
    pub selling_asset_issuer: Option<String>,
}

/// `create_passive_sell_offer` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassiveSellOfferOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Amount being sold.
    pub amount: String,
    /// Price as a decimal string.
    pub price: String,
    /// Asset type being bought.
    #[serde(default)]
    pub buying_asset_type: Option<String>,
    /// Asset code being bought.
    #[serde(default)]
    pub buying_asset_code: Option<String>,
    /// Asset issuer being bought.
    #[serde(default)]
    pub buying_asset_issuer: Option<String>,
    /// Asset type being sold.
    #[serde(default)]
    pub selling_asset_type: Option<String>,
    /// Asset code being sold.
    #[serde(default)]
    pub selling_asset_code: Option<String>,
    /// Asset issuer being sold.
    #[serde(default)]
    pub selling_asset_issuer: Option<String>,
}

/// `set_options` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetOptionsOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// New home domain.
    #[serde(default)]
    pub home_domain: Option<String>,
    /// New inflation destination.
    #[serde(default)]
    pub inflation_dest: Option<String>,
    /// New master key weight.
    #[serde(default)]
    pub master_key_weight: Option<u8>,
    /// New low threshold.
    #[serde(default)]
    pub low_threshold: Option<u8>,
    /// New medium threshold.
    #[serde(default)]
    pub med_threshold: Option<u8>,
    /// New high threshold.
    #[serde(default)]
    pub high_threshold: Option<u8>,
    /// Signer key being added or modified.
    #[serde(default)]
    pub signer_key: Option<String>,
    /// Weight of the signer being added or modified.
    #[serde(default)]
    pub signer_weight: Option<u8>,
    /// Names of flags that were set.
    #[serde(default)]
    pub set_flags_s: Vec<String>,
    /// Names of flags that were cleared.
    #[serde(default)]
    pub clear_flags_s: Vec<String>,
}

/// `change_trust` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeTrustOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Account whose trustline changed.
    pub trustor: String,
    /// Issuer of the trusted asset.
    #[serde(default)]
    pub trustee: Option<String>,
    /// New trustline limit; `0` deletes the trustline.
    pub limit: String,
    /// The trusted asset.
    #[serde(flatten)]
    pub asset: Asset,
    /// Pool id for liquidity pool share trustlines.
    #[serde(default)]
    pub liquidity_pool_id: Option<String>,
}

/// `allow_trust` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllowTrustOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Account whose trustline was authorized or deauthorized.
    pub trustor: String,
    /// Issuer performing the authorization.
    pub trustee: String,
    /// Whether the trustline is now authorized.
    pub authorize: bool,
    /// The trusted asset.
    #[serde(flatten)]
    pub asset: Asset,
}

/// `account_merge` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountMergeOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// The account that was merged away.
    pub account: String,
    /// The account that received the balance.
    pub into: String,
}

/// `manage_data` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManageDataOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Data entry name.
    pub name: String,
    /// Base64 data entry value; absent when the entry was deleted.
    #[serde(default)]
    pub value: Option<String>,
}

/// `bump_sequence` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BumpSequenceOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Sequence number the account was bumped to.
    pub bump_to: String,
}

/// `create_claimable_balance` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClaimableBalanceOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Canonical asset string of the balance.
    pub asset: String,
    /// Amount locked into the balance.
    pub amount: String,
}

/// `claim_claimable_balance` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimClaimableBalanceOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Id of the claimed balance.
    pub balance_id: String,
    /// Account that claimed the balance.
    pub claimant: String,
}

/// `begin_sponsoring_future_reserves` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeginSponsoringOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Account whose reserves are now sponsored.
    pub sponsored_id: String,
}

/// `end_sponsoring_future_reserves` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndSponsoringOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Account that was sponsoring the reserves.
    #[serde(default)]
    pub begin_sponsor: Option<String>,
}

/// `revoke_sponsorship` payload; exactly one of the entry references is
/// present depending on what was revoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeSponsorshipOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Revoked account sponsorship.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Revoked claimable balance sponsorship.
    #[serde(default)]
    pub claimable_balance_id: Option<String>,
    /// Account owning the revoked data entry.
    #[serde(default)]
    pub data_account_id: Option<String>,
    /// Name of the revoked data entry.
    #[serde(default)]
    pub data_name: Option<String>,
    /// Revoked offer id.
    #[serde(default)]
    pub offer_id: Option<String>,
    /// Account owning the revoked trustline.
    #[serde(default)]
    pub trustline_account_id: Option<String>,
    /// Asset of the revoked trustline.
    #[serde(default)]
    pub trustline_asset: Option<String>,
    /// Account owning the revoked signer.
    #[serde(default)]
    pub signer_account_id: Option<String>,
    /// The revoked signer key.
    #[serde(default)]
    pub signer_key: Option<String>,
}

/// `clawback` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClawbackOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Account the asset was clawed back from.
    pub from: String,
    /// Amount clawed back.
    pub amount: String,
    /// Asset clawed back.
    #[serde(flatten)]
    pub asset: Asset,
}

/// `clawback_claimable_balance` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClawbackClaimableBalanceOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Id of the clawed-back balance.
    pub balance_id: String,
}

/// `set_trust_line_flags` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTrustLineFlagsOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Account whose trustline flags changed.
    pub trustor: String,
    /// The trustline asset.
    #[serde(flatten)]
    pub asset: Asset,
    /// Names of flags that were set.
    #[serde(default)]
    pub set_flags_s: Vec<String>,
    /// Names of flags that were cleared.
    #[serde(default)]
    pub clear_flags_s: Vec<String>,
}

/// `liquidity_pool_deposit` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPoolDepositOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Pool that was deposited into.
    pub liquidity_pool_id: String,
    /// Pool shares received for the deposit.
    #[serde(default)]
    pub shares_received: Option<String>,
}

/// `liquidity_pool_withdraw` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPoolWithdrawOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Pool that was withdrawn from.
    pub liquidity_pool_id: String,
    /// Pool shares redeemed by the withdrawal.
    #[serde(default)]
    pub shares: Option<String>,
}

/// `invoke_host_function` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeHostFunctionOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Host function that was invoked.
    #[serde(default)]
    pub function: Option<String>,
    /// Contract address the invocation targeted.
    #[serde(default)]
    pub address: Option<String>,
}

/// `extend_footprint_ttl` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendFootprintTtlOperation {
    /// Shared operation fields.
    #[serde(flatten)]
    pub base: OperationBase,
    /// Ledger sequence the footprint lives until.
    #[serde(default)]
    pub extend_to: Option<u32>,
}
