//! Effect resources: the polymorphic family describing what an applied
//! operation changed, discriminated by `type_i`.
//!
//! Several effect kinds share an identical wire shape; those reuse one
//! payload struct (for example all `*_sponsorship_created` effects carry
//! a `sponsor` plus an entity reference).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::asset::{Asset, AssetAmount};
use crate::decode;
use crate::error::DecodeError;

/// Fields shared by every effect resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectBase {
    /// Unique effect id.
    pub id: String,
    /// Cursor value for paging through effect collections.
    pub paging_token: String,
    /// Account the effect applies to.
    #[serde(default)]
    pub account: Option<String>,
    /// Ledger close time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Integer discriminator selecting the concrete variant.
    pub type_i: i64,
    /// String discriminator (the kind's canonical name).
    #[serde(rename = "type")]
    pub type_name: String,
}

/// The discriminator registry for effect resources.
///
/// As with operations, adding a kind is a pure data addition: a new
/// variant, a row in [`EffectKind::ALL`], and arms in the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// A new account was created (0).
    AccountCreated,
    /// An account was merged away (1).
    AccountRemoved,
    /// An account received an amount (2).
    AccountCredited,
    /// An account sent an amount (3).
    AccountDebited,
    /// Account thresholds changed (4).
    AccountThresholdsUpdated,
    /// Account home domain changed (5).
    AccountHomeDomainUpdated,
    /// Account flags changed (6).
    AccountFlagsUpdated,
    /// Account inflation destination changed (7).
    AccountInflationDestinationUpdated,
    /// A signer was added (10).
    SignerCreated,
    /// A signer was removed (11).
    SignerRemoved,
    /// A signer's weight changed (12).
    SignerUpdated,
    /// A trustline was created (20).
    TrustlineCreated,
    /// A trustline was removed (21).
    TrustlineRemoved,
    /// A trustline's limit changed (22).
    TrustlineUpdated,
    /// A trustline was authorized (23, legacy).
    TrustlineAuthorized,
    /// A trustline was deauthorized (24, legacy).
    TrustlineDeauthorized,
    /// A trustline was authorized to maintain liabilities (25, legacy).
    TrustlineAuthorizedToMaintainLiabilities,
    /// Trustline flags changed (26).
    TrustlineFlagsUpdated,
    /// An offer was created (30).
    OfferCreated,
    /// An offer was removed (31).
    OfferRemoved,
    /// An offer was updated (32).
    OfferUpdated,
    /// A trade was executed (33).
    Trade,
    /// A data entry was created (40).
    DataCreated,
    /// A data entry was removed (41).
    DataRemoved,
    /// A data entry was updated (42).
    DataUpdated,
    /// The account sequence was bumped (43).
    SequenceBumped,
    /// A claimable balance was created (50).
    ClaimableBalanceCreated,
    /// A claimant was attached to a claimable balance (51).
    ClaimableBalanceClaimantCreated,
    /// A claimable balance was claimed (52).
    ClaimableBalanceClaimed,
    /// Account reserves became sponsored (60).
    AccountSponsorshipCreated,
    /// Account sponsorship moved to a new sponsor (61).
    AccountSponsorshipUpdated,
    /// Account sponsorship ended (62).
    AccountSponsorshipRemoved,
    /// Trustline reserves became sponsored (63).
    TrustlineSponsorshipCreated,
    /// Trustline sponsorship moved to a new sponsor (64).
    TrustlineSponsorshipUpdated,
    /// Trustline sponsorship ended (65).
    TrustlineSponsorshipRemoved,
    /// Data entry reserves became sponsored (66).
    DataSponsorshipCreated,
    /// Data entry sponsorship moved to a new sponsor (67).
    DataSponsorshipUpdated,
    /// Data entry sponsorship ended (68).
    DataSponsorshipRemoved,
    /// Claimable balance reserves became sponsored (69).
    ClaimableBalanceSponsorshipCreated,
    /// Claimable balance sponsorship moved to a new sponsor (70).
    ClaimableBalanceSponsorshipUpdated,
    /// Claimable balance sponsorship ended (71).
    ClaimableBalanceSponsorshipRemoved,
    /// Signer reserves became sponsored (72).
    SignerSponsorshipCreated,
    /// Signer sponsorship moved to a new sponsor (73).
    SignerSponsorshipUpdated,
    /// Signer sponsorship ended (74).
    SignerSponsorshipRemoved,
    /// A claimable balance was clawed back (80).
    ClaimableBalanceClawedBack,
    /// A deposit into a liquidity pool (90).
    LiquidityPoolDeposited,
    /// A withdrawal from a liquidity pool (91).
    LiquidityPoolWithdrew,
    /// A trade against a liquidity pool (92).
    LiquidityPoolTrade,
    /// A liquidity pool was created (93).
    LiquidityPoolCreated,
    /// A liquidity pool was removed (94).
    LiquidityPoolRemoved,
    /// A liquidity pool trustline was revoked (95).
    LiquidityPoolRevoked,
    /// A contract balance was credited (96).
    ContractCredited,
    /// A contract balance was debited (97).
    ContractDebited,
}

impl EffectKind {
    /// Every registered effect kind, in discriminator order.
    pub const ALL: &'static [EffectKind] = &[
        EffectKind::AccountCreated,
        EffectKind::AccountRemoved,
        EffectKind::AccountCredited,
        EffectKind::AccountDebited,
        EffectKind::AccountThresholdsUpdated,
        EffectKind::AccountHomeDomainUpdated,
        EffectKind::AccountFlagsUpdated,
        EffectKind::AccountInflationDestinationUpdated,
        EffectKind::SignerCreated,
        EffectKind::SignerRemoved,
        EffectKind::SignerUpdated,
        EffectKind::TrustlineCreated,
        EffectKind::TrustlineRemoved,
        EffectKind::TrustlineUpdated,
        EffectKind::TrustlineAuthorized,
        EffectKind::TrustlineDeauthorized,
        EffectKind::TrustlineAuthorizedToMaintainLiabilities,
        EffectKind::TrustlineFlagsUpdated,
        EffectKind::OfferCreated,
        EffectKind::OfferRemoved,
        EffectKind::OfferUpdated,
        EffectKind::Trade,
        EffectKind::DataCreated,
        EffectKind::DataRemoved,
        EffectKind::DataUpdated,
        EffectKind::SequenceBumped,
        EffectKind::ClaimableBalanceCreated,
        EffectKind::ClaimableBalanceClaimantCreated,
        EffectKind::ClaimableBalanceClaimed,
        EffectKind::AccountSponsorshipCreated,
        EffectKind::AccountSponsorshipUpdated,
        EffectKind::AccountSponsorshipRemoved,
        EffectKind::TrustlineSponsorshipCreated,
        EffectKind::TrustlineSponsorshipUpdated,
        EffectKind::TrustlineSponsorshipRemoved,
        EffectKind::DataSponsorshipCreated,
        EffectKind::DataSponsorshipUpdated,
        EffectKind::DataSponsorshipRemoved,
        EffectKind::ClaimableBalanceSponsorshipCreated,
        EffectKind::ClaimableBalanceSponsorshipUpdated,
        EffectKind::ClaimableBalanceSponsorshipRemoved,
        EffectKind::SignerSponsorshipCreated,
        EffectKind::SignerSponsorshipUpdated,
        EffectKind::SignerSponsorshipRemoved,
        EffectKind::ClaimableBalanceClawedBack,
        EffectKind::LiquidityPoolDeposited,
        EffectKind::LiquidityPoolWithdrew,
        EffectKind::LiquidityPoolTrade,
        EffectKind::LiquidityPoolCreated,
        EffectKind::LiquidityPoolRemoved,
        EffectKind::LiquidityPoolRevoked,
        EffectKind::ContractCredited,
        EffectKind::ContractDebited,
    ];

    /// The integer discriminator of this kind.
    pub fn type_i(self) -> i64 {
        match self {
            EffectKind::AccountCreated => 0,
            EffectKind::AccountRemoved => 1,
            EffectKind::AccountCredited => 2,
            EffectKind::AccountDebited => 3,
            EffectKind::AccountThresholdsUpdated => 4,
            EffectKind::AccountHomeDomainUpdated => 5,
            EffectKind::AccountFlagsUpdated => 6,
            EffectKind::AccountInflationDestinationUpdated => 7,
            EffectKind::SignerCreated => 10,
            EffectKind::SignerRemoved => 11,
            EffectKind::SignerUpdated => 12,
            EffectKind::TrustlineCreated => 20,
            EffectKind::TrustlineRemoved => 21,
            EffectKind::TrustlineUpdated => 22,
            EffectKind::TrustlineAuthorized => 23,
            EffectKind::TrustlineDeauthorized => 24,
            EffectKind::TrustlineAuthorizedToMaintainLiabilities => 25,
            EffectKind::TrustlineFlagsUpdated => 26,
            EffectKind::OfferCreated => 30,
            EffectKind::OfferRemoved => 31,
            EffectKind::OfferUpdated => 32,
            EffectKind::Trade => 33,
            EffectKind::DataCreated => 40,
            EffectKind::DataRemoved => 41,
            EffectKind::DataUpdated => 42,
            EffectKind::SequenceBumped => 43,
            EffectKind::ClaimableBalanceCreated => 50,
            EffectKind::ClaimableBalanceClaimantCreated => 51,
            EffectKind::ClaimableBalanceClaimed => 52,
            EffectKind::AccountSponsorshipCreated => 60,
            EffectKind::AccountSponsorshipUpdated => 61,
            EffectKind::AccountSponsorshipRemoved => 62,
            EffectKind::TrustlineSponsorshipCreated => 63,
            EffectKind::TrustlineSponsorshipUpdated => 64,
            EffectKind::TrustlineSponsorshipRemoved => 65,
            EffectKind::DataSponsorshipCreated => 66,
            EffectKind::DataSponsorshipUpdated => 67,
            EffectKind::DataSponsorshipRemoved => 68,
            EffectKind::ClaimableBalanceSponsorshipCreated => 69,
            EffectKind::ClaimableBalanceSponsorshipUpdated => 70,
            EffectKind::ClaimableBalanceSponsorshipRemoved => 71,
            EffectKind::SignerSponsorshipCreated => 72,
            EffectKind::SignerSponsorshipUpdated => 73,
            EffectKind::SignerSponsorshipRemoved => 74,
            EffectKind::ClaimableBalanceClawedBack => 80,
            EffectKind::LiquidityPoolDeposited => 90,
            EffectKind::LiquidityPoolWithdrew => 91,
            EffectKind::LiquidityPoolTrade => 92,
            EffectKind::LiquidityPoolCreated => 93,
            EffectKind::LiquidityPoolRemoved => 94,
            EffectKind::LiquidityPoolRevoked => 95,
            EffectKind::ContractCredited => 96,
            EffectKind::ContractDebited => 97,
        }
    }

    /// Look up a kind by its integer discriminator.
    pub fn from_type_i(code: i64) -> Option<Self> {
        EffectKind::ALL.iter().copied().find(|k| k.type_i() == code)
    }

    /// The canonical string name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            EffectKind::AccountCreated => "account_created",
            EffectKind::AccountRemoved => "account_removed",
            EffectKind::AccountCredited => "account_credited",
            EffectKind::AccountDebited => "account_debited",
            EffectKind::AccountThresholdsUpdated => "account_thresholds_updated",
            EffectKind::AccountHomeDomainUpdated => "account_home_domain_updated",
            EffectKind::AccountFlagsUpdated => "account_flags_updated",
            EffectKind::AccountInflationDestinationUpdated => {
                "account_inflation_destination_updated"
            }
            EffectKind::SignerCreated => "signer_created",
            EffectKind::SignerRemoved => "signer_removed",
            EffectKind::SignerUpdated => "signer_updated",
            EffectKind::TrustlineCreated => "trustline_created",
            EffectKind::TrustlineRemoved => "trustline_removed",
            EffectKind::TrustlineUpdated => "trustline_updated",
            EffectKind::TrustlineAuthorized => "trustline_authorized",
            EffectKind::TrustlineDeauthorized => "trustline_deauthorized",
            EffectKind::TrustlineAuthorizedToMaintainLiabilities => {
                "trustline_authorized_to_maintain_liabilities"
            }
            EffectKind::TrustlineFlagsUpdated => "trustline_flags_updated",
            EffectKind::OfferCreated => "offer_created",
            EffectKind::OfferRemoved => "offer_removed",
            EffectKind::OfferUpdated => "offer_updated",
            EffectKind::Trade => "trade",
            EffectKind::DataCreated => "data_created",
            EffectKind::DataRemoved => "data_removed",
            EffectKind::DataUpdated => "data_updated",
            EffectKind::SequenceBumped => "sequence_bumped",
            EffectKind::ClaimableBalanceCreated => "claimable_balance_created",
            EffectKind::ClaimableBalanceClaimantCreated => "claimable_balance_claimant_created",
            EffectKind::ClaimableBalanceClaimed => "claimable_balance_claimed",
            EffectKind::AccountSponsorshipCreated => "account_sponsorship_created",
            EffectKind::AccountSponsorshipUpdated => "account_sponsorship_updated",
            EffectKind::AccountSponsorshipRemoved => "account_sponsorship_removed",
            EffectKind::TrustlineSponsorshipCreated => "trustline_sponsorship_created",
            EffectKind::TrustlineSponsorshipUpdated => "trustline_sponsorship_updated",
            EffectKind::TrustlineSponsorshipRemoved => "trustline_sponsorship_removed",
            EffectKind::DataSponsorshipCreated => "data_sponsorship_created",
            EffectKind::DataSponsorshipUpdated => "data_sponsorship_updated",
            EffectKind::DataSponsorshipRemoved => "data_sponsorship_removed",
            EffectKind::ClaimableBalanceSponsorshipCreated => {
                "claimable_balance_sponsorship_created"
            }
            EffectKind::ClaimableBalanceSponsorshipUpdated => {
                "claimable_balance_sponsorship_updated"
            }
            EffectKind::ClaimableBalanceSponsorshipRemoved => {
                "claimable_balance_sponsorship_removed"
            }
            EffectKind::SignerSponsorshipCreated => "signer_sponsorship_created",
            EffectKind::SignerSponsorshipUpdated => "signer_sponsorship_updated",
            EffectKind::SignerSponsorshipRemoved => "signer_sponsorship_removed",
            EffectKind::ClaimableBalanceClawedBack => "claimable_balance_clawed_back",
            EffectKind::LiquidityPoolDeposited => "liquidity_pool_deposited",
            EffectKind::LiquidityPoolWithdrew => "liquidity_pool_withdrew",
            EffectKind::LiquidityPoolTrade => "liquidity_pool_trade",
            EffectKind::LiquidityPoolCreated => "liquidity_pool_created",
            EffectKind::LiquidityPoolRemoved => "liquidity_pool_removed",
            EffectKind::LiquidityPoolRevoked => "liquidity_pool_revoked",
            EffectKind::ContractCredited => "contract_credited",
            EffectKind::ContractDebited => "contract_debited",
        }
    }

    /// Look up a kind by its canonical string name.
    pub fn from_name(name: &str) -> Option<Self> {
        EffectKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

/// A decoded effect resource.
///
/// The serde impl is tolerant (unknown discriminators become
/// [`Effect::Unsupported`]); [`decode_effect`] is the strict form.
#[derive(Debug, Clone)]
pub enum Effect {
    /// `account_created` (0).
    AccountCreated(AccountCreatedEffect),
    /// `account_removed` (1).
    AccountRemoved(BasicEffect),
    /// `account_credited` (2).
    AccountCredited(BalanceChangeEffect),
    /// `account_debited` (3).
    AccountDebited(BalanceChangeEffect),
    /// `account_thresholds_updated` (4).
    AccountThresholdsUpdated(ThresholdsUpdatedEffect),
    /// `account_home_domain_updated` (5).
    AccountHomeDomainUpdated(HomeDomainUpdatedEffect),
    /// `account_flags_updated` (6).
    AccountFlagsUpdated(FlagsUpdatedEffect),
    /// `account_inflation_destination_updated` (7).
    AccountInflationDestinationUpdated(BasicEffect),
    /// `signer_created` (10).
    SignerCreated(SignerEffect),
    /// `signer_removed` (11).
    SignerRemoved(SignerEffect),
    /// `signer_updated` (12).
    SignerUpdated(SignerEffect),
    /// `trustline_created` (20).
    TrustlineCreated(TrustlineEffect),
    /// `trustline_removed` (21).
    TrustlineRemoved(TrustlineEffect),
    /// `trustline_updated` (22).
    TrustlineUpdated(TrustlineEffect),
    /// `trustline_authorized` (23).
    TrustlineAuthorized(TrustlineAuthorizationEffect),
    /// `trustline_deauthorized` (24).
    TrustlineDeauthorized(TrustlineAuthorizationEffect),
    /// `trustline_authorized_to_maintain_liabilities` (25).
    TrustlineAuthorizedToMaintainLiabilities(TrustlineAuthorizationEffect),
    /// `trustline_flags_updated` (26).
    TrustlineFlagsUpdated(TrustlineFlagsUpdatedEffect),
    /// `offer_created` (30).
    OfferCreated(BasicEffect),
    /// `offer_removed` (31).
    OfferRemoved(BasicEffect),
    /// `offer_updated` (32).
    OfferUpdated(BasicEffect),
    /// `trade` (33).
    Trade(TradeEffect),
    /// `data_created` (40).
    DataCreated(DataEffect),
    /// `data_removed` (41).
    DataRemoved(DataEffect),
    /// `data_updated` (42).
    DataUpdated(DataEffect),
    /// `sequence_bumped` (43).
    SequenceBumped(SequenceBumpedEffect),
    /// `claimable_balance_created` (50).
    ClaimableBalanceCreated(ClaimableBalanceEffect),
    /// `claimable_balance_claimant_created` (51).
    ClaimableBalanceClaimantCreated(ClaimableBalanceEffect),
    /// `claimable_balance_claimed` (52).
    ClaimableBalanceClaimed(ClaimableBalanceEffect),
    /// `account_sponsorship_created` (60).
    AccountSponsorshipCreated(SponsorshipCreatedEffect),
    /// `account_sponsorship_updated` (61).
    AccountSponsorshipUpdated(SponsorshipUpdatedEffect),
    /// `account_sponsorship_removed` (62).
    AccountSponsorshipRemoved(SponsorshipRemovedEffect),
    /// `trustline_sponsorship_created` (63).
    TrustlineSponsorshipCreated(SponsorshipCreatedEffect),
    /// `trustline_sponsorship_updated` (64).
    TrustlineSponsorshipUpdated(SponsorshipUpdatedEffect),
    /// `trustline_sponsorship_removed` (65).
    TrustlineSponsorshipRemoved(SponsorshipRemovedEffect),
    /// `data_sponsorship_created` (66).
    DataSponsorshipCreated(SponsorshipCreatedEffect),
    /// `data_sponsorship_updated` (67).
    DataSponsorshipUpdated(SponsorshipUpdatedEffect),
    /// `data_sponsorship_removed` (68).
    DataSponsorshipRemoved(SponsorshipRemovedEffect),
    /// `claimable_balance_sponsorship_created` (69).
    ClaimableBalanceSponsorshipCreated(SponsorshipCreatedEffect),
    /// `claimable_balance_sponsorship_updated` (70).
    ClaimableBalanceSponsorshipUpdated(SponsorshipUpdatedEffect),
    /// `claimable_balance_sponsorship_removed` (71).
    ClaimableBalanceSponsorshipRemoved(SponsorshipRemovedEffect),
    /// `signer_sponsorship_created` (72).
    SignerSponsorshipCreated(SponsorshipCreatedEffect),
    /// `signer_sponsorship_updated` (73).
    SignerSponsorshipUpdated(SponsorshipUpdatedEffect),
    /// `signer_sponsorship_removed` (74).
    SignerSponsorshipRemoved(SponsorshipRemovedEffect),
    /// `claimable_balance_clawed_back` (80).
    ClaimableBalanceClawedBack(ClaimableBalanceEffect),
    /// `liquidity_pool_deposited` (90).
    LiquidityPoolDeposited(LiquidityPoolEffect),
    /// `liquidity_pool_withdrew` (91).
    LiquidityPoolWithdrew(LiquidityPoolEffect),
    /// `liquidity_pool_trade` (92).
    LiquidityPoolTrade(LiquidityPoolTradeEffect),
    /// `liquidity_pool_created` (93).
    LiquidityPoolCreated(LiquidityPoolEffect),
    /// `liquidity_pool_removed` (94).
    LiquidityPoolRemoved(LiquidityPoolEffect),
    /// `liquidity_pool_revoked` (95).
    LiquidityPoolRevoked(LiquidityPoolEffect),
    /// `contract_credited` (96).
    ContractCredited(BalanceChangeEffect),
    /// `contract_debited` (97).
    ContractDebited(BalanceChangeEffect),
    /// An effect whose discriminator has no registered variant; only
    /// the base fields are retained.
    Unsupported(BasicEffect),
}

impl Effect {
    /// The registered kind of this effect, or `None` for
    /// [`Effect::Unsupported`].
    pub fn kind(&self) -> Option<EffectKind> {
        match self {
            Effect::AccountCreated(_) => Some(EffectKind::AccountCreated),
            Effect::AccountRemoved(_) => Some(EffectKind::AccountRemoved),
            Effect::AccountCredited(_) => Some(EffectKind::AccountCredited),
            Effect::AccountDebited(_) => Some(EffectKind::AccountDebited),
            Effect::AccountThresholdsUpdated(_) => Some(EffectKind::AccountThresholdsUpdated),
            Effect::AccountHomeDomainUpdated(_) => Some(EffectKind::AccountHomeDomainUpdated),
            Effect::AccountFlagsUpdated(_) => Some(EffectKind::AccountFlagsUpdated),
            Effect::AccountInflationDestinationUpdated(_) => {
                Some(EffectKind::AccountInflationDestinationUpdated)
            }
            Effect::SignerCreated(_) => Some(EffectKind::SignerCreated),
            Effect::SignerRemoved(_) => Some(EffectKind::SignerRemoved),
            Effect::SignerUpdated(_) => Some(EffectKind::SignerUpdated),
            Effect::TrustlineCreated(_) => Some(EffectKind::TrustlineCreated),
            Effect::TrustlineRemoved(_) => Some(EffectKind::TrustlineRemoved),
            Effect::TrustlineUpdated(_) => Some(EffectKind::TrustlineUpdated),
            Effect::TrustlineAuthorized(_) => Some(EffectKind::TrustlineAuthorized),
            Effect::TrustlineDeauthorized(_) => Some(EffectKind::TrustlineDeauthorized),
            Effect::TrustlineAuthorizedToMaintainLiabilities(_) => {
                Some(EffectKind::TrustlineAuthorizedToMaintainLiabilities)
            }
            Effect::TrustlineFlagsUpdated(_) => Some(EffectKind::TrustlineFlagsUpdated),
            Effect::OfferCreated(_) => Some(EffectKind::OfferCreated),
            Effect::OfferRemoved(_) => Some(EffectKind::OfferRemoved),
            Effect::OfferUpdated(_) => Some(EffectKind::OfferUpdated),
            Effect::Trade(_) => Some(EffectKind::Trade),
            Effect::DataCreated(_) => Some(EffectKind::DataCreated),
            Effect::DataRemoved(_) => Some(EffectKind::DataRemoved),
            Effect::DataUpdated(_) => Some(EffectKind::DataUpdated),
            Effect::SequenceBumped(_) => Some(EffectKind::SequenceBumped),
            Effect::ClaimableBalanceCreated(_) => Some(EffectKind::ClaimableBalanceCreated),
            Effect::ClaimableBalanceClaimantCreated(_) => {
                Some(EffectKind::ClaimableBalanceClaimantCreated)
            }
            Effect::ClaimableBalanceClaimed(_) => Some(EffectKind::ClaimableBalanceClaimed),
            Effect::AccountSponsorshipCreated(_) => Some(EffectKind::AccountSponsorshipCreated),
            Effect::AccountSponsorshipUpdated(_) => Some(EffectKind::AccountSponsorshipUpdated),
            Effect::AccountSponsorshipRemoved(_) => Some(EffectKind::AccountSponsorshipRemoved),
            Effect::TrustlineSponsorshipCreated(_) => {
                Some(EffectKind::TrustlineSponsorshipCreated)
            }
            Effect::TrustlineSponsorshipUpdated(_) => {
                Some(EffectKind::TrustlineSponsorshipUpdated)
            }
            Effect::TrustlineSponsorshipRemoved(_) => {
                Some(EffectKind::TrustlineSponsorshipRemoved)
            }
            Effect::DataSponsorshipCreated(_) => Some(EffectKind::DataSponsorshipCreated),
            Effect::DataSponsorshipUpdated(_) => Some(EffectKind::DataSponsorshipUpdated),
            Effect::DataSponsorshipRemoved(_) => Some(EffectKind::DataSponsorshipRemoved),
            Effect::ClaimableBalanceSponsorshipCreated(_) => {
                Some(EffectKind::ClaimableBalanceSponsorshipCreated)
            }
            Effect::ClaimableBalanceSponsorshipUpdated(_) => {
                Some(EffectKind::ClaimableBalanceSponsorshipUpdated)
            }
            Effect::ClaimableBalanceSponsorshipRemoved(_) => {
                Some(EffectKind::ClaimableBalanceSponsorshipRemoved)
            }
            Effect::SignerSponsorshipCreated(_) => Some(EffectKind::SignerSponsorshipCreated),
            Effect::SignerSponsorshipUpdated(_) => Some(EffectKind::SignerSponsorshipUpdated),
            Effect::SignerSponsorshipRemoved(_) => Some(EffectKind::SignerSponsorshipRemoved),
            Effect::ClaimableBalanceClawedBack(_) => Some(EffectKind::ClaimableBalanceClawedBack),
            Effect::LiquidityPoolDeposited(_) => Some(EffectKind::LiquidityPoolDeposited),
            Effect::LiquidityPoolWithdrew(_) => Some(EffectKind::LiquidityPoolWithdrew),
            Effect::LiquidityPoolTrade(_) => Some(EffectKind::LiquidityPoolTrade),
            Effect::LiquidityPoolCreated(_) => Some(EffectKind::LiquidityPoolCreated),
            Effect::LiquidityPoolRemoved(_) => Some(EffectKind::LiquidityPoolRemoved),
            Effect::LiquidityPoolRevoked(_) => Some(EffectKind::LiquidityPoolRevoked),
            Effect::ContractCredited(_) => Some(EffectKind::ContractCredited),
            Effect::ContractDebited(_) => Some(EffectKind::ContractDebited),
            Effect::Unsupported(_) => None,
        }
    }

    /// The base fields shared by every effect.
    pub fn base(&self) -> &EffectBase {
        match self {
            Effect::AccountCreated(e) => &e.base,
            Effect::AccountRemoved(e) => &e.base,
            Effect::AccountCredited(e) => &e.base,
            Effect::AccountDebited(e) => &e.base,
            Effect::AccountThresholdsUpdated(e) => &e.base,
            Effect::AccountHomeDomainUpdated(e) => &e.base,
            Effect::AccountFlagsUpdated(e) => &e.base,
            Effect::AccountInflationDestinationUpdated(e) => &e.base,
            Effect::SignerCreated(e) => &e.base,
            Effect::SignerRemoved(e) => &e.base,
            Effect::SignerUpdated(e) => &e.base,
            Effect::TrustlineCreated(e) => &e.base,
            Effect::TrustlineRemoved(e) => &e.base,
            Effect::TrustlineUpdated(e) => &e.base,
            Effect::TrustlineAuthorized(e) => &e.base,
            Effect::TrustlineDeauthorized(e) => &e.base,
            Effect::TrustlineAuthorizedToMaintainLiabilities(e) => &e.base,
            Effect::TrustlineFlagsUpdated(e) => &e.base,
            Effect::OfferCreated(e) => &e.base,
            Effect::OfferRemoved(e) => &e.base,
            Effect::OfferUpdated(e) => &e.base,
            Effect::Trade(e) => &e.base,
            Effect::DataCreated(e) => &e.base,
            Effect::DataRemoved(e) => &e.base,
            Effect::DataUpdated(e) => &e.base,
            Effect::SequenceBumped(e) => &e.base,
            Effect::ClaimableBalanceCreated(e) => &e.base,
            Effect::ClaimableBalanceClaimantCreated(e) => &e.base,
            Effect::ClaimableBalanceClaimed(e) => &e.base,
            Effect::AccountSponsorshipCreated(e) => &e.base,
            Effect::AccountSponsorshipUpdated(e) => &e.base,
            Effect::AccountSponsorshipRemoved(e) => &e.base,
            Effect::TrustlineSponsorshipCreated(e) => &e.base,
            Effect::TrustlineSponsorshipUpdated(e) => &e.base,
            Effect::TrustlineSponsorshipRemoved(e) => &e.base,
            Effect::DataSponsorshipCreated(e) => &e.base,
            Effect::DataSponsorshipUpdated(e) => &e.base,
            Effect::DataSponsorshipRemoved(e) => &e.base,
            Effect::ClaimableBalanceSponsorshipCreated(e) => &e.base,
            Effect::ClaimableBalanceSponsorshipUpdated(e) => &e.base,
            Effect::ClaimableBalanceSponsorshipRemoved(e) => &e.base,
            Effect::SignerSponsorshipCreated(e) => &e.base,
            Effect::SignerSponsorshipUpdated(e) => &e.base,
            Effect::SignerSponsorshipRemoved(e) => &e.base,
            Effect::ClaimableBalanceClawedBack(e) => &e.base,
            Effect::LiquidityPoolDeposited(e) => &e.base,
            Effect::LiquidityPoolWithdrew(e) => &e.base,
            Effect::LiquidityPoolTrade(e) => &e.base,
            Effect::LiquidityPoolCreated(e) => &e.base,
            Effect::LiquidityPoolRemoved(e) => &e.base,
            Effect::LiquidityPoolRevoked(e) => &e.base,
            Effect::ContractCredited(e) => &e.base,
            Effect::ContractDebited(e) => &e.base,
            Effect::Unsupported(e) => &e.base,
        }
    }

    /// The effect id.
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// The cursor value of this effect.
    pub fn paging_token(&self) -> &str {
        &self.base().paging_token
    }

    /// Decode an effect from a raw JSON value, selecting the variant by
    /// the embedded discriminator. Unknown discriminators yield
    /// [`DecodeError::UnknownVariant`].
    pub fn from_json_value(mut value: Value) -> Result<Self, DecodeError> {
        let code = decode::discriminator(&value, |name| {
            EffectKind::from_name(name).map(EffectKind::type_i)
        })?;
        decode::normalize(&mut value, code);
        match EffectKind::from_type_i(code) {
            Some(kind) => Self::decode_variant(kind, value),
            None => Err(DecodeError::UnknownVariant { code }),
        }
    }

    fn decode_variant(kind: EffectKind, value: Value) -> Result<Self, DecodeError> {
        use EffectKind as K;
        let effect = match kind {
            K::AccountCreated => Effect::AccountCreated(serde_json::from_value(value)?),
            K::AccountRemoved => Effect::AccountRemoved(serde_json::from_value(value)?),
            K::AccountCredited => Effect::AccountCredited(serde_json::from_value(value)?),
            K::AccountDebited => Effect::AccountDebited(serde_json::from_value(value)?),
            K::AccountThresholdsUpdated => {
                Effect::AccountThresholdsUpdated(serde_json::from_value(value)?)
            }
            K::AccountHomeDomainUpdated => {
                Effect::AccountHomeDomainUpdated(serde_json::from_value(value)?)
            }
            K::AccountFlagsUpdated => Effect::AccountFlagsUpdated(serde_json::from_value(value)?),
            K::AccountInflationDestinationUpdated => {
                Effect::AccountInflationDestinationUpdated(serde_json::from_value(value)?)
            }
            K::SignerCreated => Effect::SignerCreated(serde_json::from_value(value)?),
            K::SignerRemoved => Effect::SignerRemoved(serde_json::from_value(value)?),
            K::SignerUpdated => Effect::SignerUpdated(serde_json::from_value(value)?),
            K::TrustlineCreated => Effect::TrustlineCreated(serde_json::from_value(value)?),
            K::TrustlineRemoved => Effect::TrustlineRemoved(serde_json::from_value(value)?),
            K::TrustlineUpdated => Effect::TrustlineUpdated(serde_json::from_value(value)?),
            K::TrustlineAuthorized => Effect::TrustlineAuthorized(serde_json::from_value(value)?),
            K::TrustlineDeauthorized => {
                Effect::TrustlineDeauthorized(serde_json::from_value(value)?)
            }
            K::TrustlineAuthorizedToMaintainLiabilities => {
                Effect::TrustlineAuthorizedToMaintainLiabilities(serde_json::from_value(value)?)
            }
            K::TrustlineFlagsUpdated => {
                Effect::TrustlineFlagsUpdated(serde_json::from_value(value)?)
            }
            K::OfferCreated => Effect::OfferCreated(serde_json::from_value(value)?),
            K::OfferRemoved => Effect::OfferRemoved(serde_json::from_value(value)?),
            K::OfferUpdated => Effect::OfferUpdated(serde_json::from_value(value)?),
            K::Trade => Effect::Trade(serde_json::from_value(value)?),
            K::DataCreated => Effect::DataCreated(serde_json::from_value(value)?),
            K::DataRemoved => Effect::DataRemoved(serde_json::from_value(value)?),
            K::DataUpdated => Effect::DataUpdated(serde_json::from_value(value)?),
            K::SequenceBumped => Effect::SequenceBumped(serde_json::from_value(value)?),
            K::ClaimableBalanceCreated => {
                Effect::ClaimableBalanceCreated(serde_json::from_value(value)?)
            }
            K::ClaimableBalanceClaimantCreated => {
                Effect::ClaimableBalanceClaimantCreated(serde_json::from_value(value)?)
            }
            K::ClaimableBalanceClaimed => {
                Effect::ClaimableBalanceClaimed(serde_json::from_value(value)?)
            }
            K::AccountSponsorshipCreated => {
                Effect::AccountSponsorshipCreated(serde_json::from_value(value)?)
            }
            K::AccountSponsorshipUpdated => {
                Effect::AccountSponsorshipUpdated(serde_json::from_value(value)?)
            }
            K::AccountSponsorshipRemoved => {
                Effect::AccountSponsorshipRemoved(serde_json::from_value(value)?)
            }
            K::TrustlineSponsorshipCreated => {
                Effect::TrustlineSponsorshipCreated(serde_json::from_value(value)?)
            }
            K::TrustlineSponsorshipUpdated => {
                Effect::TrustlineSponsorshipUpdated(serde_json::from_value(value)?)
            }
            K::TrustlineSponsorshipRemoved => {
                Effect::TrustlineSponsorshipRemoved(serde_json::from_value(value)?)
            }
            K::DataSponsorshipCreated => {
                Effect::DataSponsorshipCreated(serde_json::from_value(value)?)
            }
            K::DataSponsorshipUpdated => {
                Effect::DataSponsorshipUpdated(serde_json::from_value(value)?)
            }
            K::DataSponsorshipRemoved => {
                Effect::DataSponsorshipRemoved(serde_json::from_value(value)?)
            }
            K::ClaimableBalanceSponsorshipCreated => {
                Effect::ClaimableBalanceSponsorshipCreated(serde_json::from_value(value)?)
            }
            K::ClaimableBalanceSponsorshipUpdated => {
                Effect::ClaimableBalanceSponsorshipUpdated(serde_json::from_value(value)?)
            }
            K::ClaimableBalanceSponsorshipRemoved => {
                Effect::ClaimableBalanceSponsorshipRemoved(serde_json::from_value(value)?)
            }
            K::SignerSponsorshipCreated => {
                Effect::SignerSponsorshipCreated(serde_json::from_value(value)?)
            }
            K::SignerSponsorshipUpdated => {
                Effect::SignerSponsorshipUpdated(serde_json::from_value(value)?)
            }
            K::SignerSponsorshipRemoved => {
                Effect::SignerSponsorshipRemoved(serde_json::from_value(value)?)
            }
            K::ClaimableBalanceClawedBack => {
                Effect::ClaimableBalanceClawedBack(serde_json::from_value(value)?)
            }
            K::LiquidityPoolDeposited => {
                Effect::LiquidityPoolDeposited(serde_json::from_value(value)?)
            }
            K::LiquidityPoolWithdrew => {
                Effect::LiquidityPoolWithdrew(serde_json::from_value(value)?)
            }
            K::LiquidityPoolTrade => Effect::LiquidityPoolTrade(serde_json::from_value(value)?),
            K::LiquidityPoolCreated => Effect::LiquidityPoolCreated(serde_json::from_value(value)?),
            K::LiquidityPoolRemoved => Effect::LiquidityPoolRemoved(serde_json::from_value(value)?),
            K::LiquidityPoolRevoked => Effect::LiquidityPoolRevoked(serde_json::from_value(value)?),
            K::ContractCredited => Effect::ContractCredited(serde_json::from_value(value)?),
            K::ContractDebited => Effect::ContractDebited(serde_json::from_value(value)?),
        };
        Ok(effect)
    }
}

impl<'de> Deserialize<'de> for Effect {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = Value::deserialize(deserializer)?;
        let code = decode::discriminator(&value, |name| {
            EffectKind::from_name(name).map(EffectKind::type_i)
        })
        .map_err(serde::de::Error::custom)?;
        decode::normalize(&mut value, code);
        match EffectKind::from_type_i(code) {
            Some(kind) => Effect::decode_variant(kind, value).map_err(serde::de::Error::custom),
            None => Ok(Effect::Unsupported(
                serde_json::from_value(value).map_err(serde::de::Error::custom)?,
            )),
        }
    }
}

/// Strict decode of one effect resource from raw bytes.
pub fn decode_effect(bytes: &[u8]) -> Result<Effect, DecodeError> {
    Effect::from_json_value(serde_json::from_slice(bytes)?)
}

/// An effect carrying no fields beyond the shared base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
}

/// `account_created` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// Initial native balance of the new account.
    pub starting_balance: String,
}

/// Payload shared by credit/debit effects, for accounts and contracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceChangeEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// Amount credited or debited.
    pub amount: String,
    /// Asset of the movement.
    #[serde(flatten)]
    pub asset: Asset,
    /// Contract address, for contract credit/debit effects.
    #[serde(default)]
    pub contract: Option<String>,
}

/// `account_thresholds_updated` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsUpdatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// New low threshold.
    pub low_threshold: u8,
    /// New medium threshold.
    pub med_threshold: u8,
    /// New high threshold.
    pub high_threshold: u8,
}

/// `account_home_domain_updated` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeDomainUpdatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The new home domain.
    #[serde(default)]
    pub home_domain: Option<String>,
}

/// `account_flags_updated` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagsUpdatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// New `auth_required` flag value, when it changed.
    #[serde(default)]
    pub auth_required_flag: Option<bool>,
    /// New `auth_revocable` flag value, when it changed.
    #[serde(default, alias = "auth_revokable_flag")]
    pub auth_revocable_flag: Option<bool>,
}

/// Payload shared by the signer created/removed/updated effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignerEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The signer's public key.
    pub public_key: String,
    /// The signer's new weight (0 when removed).
    #[serde(default)]
    pub weight: Option<u8>,
    /// The signer key in strkey form, when distinct from `public_key`.
    #[serde(default)]
    pub key: Option<String>,
}

/// Payload shared by the trustline created/removed/updated effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustlineEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The trusted asset.
    #[serde(flatten)]
    pub asset: Asset,
    /// The trustline limit.
    #[serde(default)]
    pub limit: Option<String>,
    /// Pool id for liquidity pool share trustlines.
    #[serde(default)]
    pub liquidity_pool_id: Option<String>,
}

/// Payload shared by the legacy trustline authorization effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustlineAuthorizationEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// Account whose trustline authorization changed.
    pub trustor: String,
    /// Asset type of the trustline.
    pub asset_type: String,
    /// Asset code of the trustline.
    #[serde(default)]
    pub asset_code: Option<String>,
}

/// `trustline_flags_updated` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustlineFlagsUpdatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// Account whose trustline flags changed.
    pub trustor: String,
    /// The trustline asset.
    #[serde(flatten)]
    pub asset: Asset,
    /// New `authorized` flag value, when it changed.
    #[serde(default)]
    pub authorized_flag: Option<bool>,
    /// New `authorized_to_maintain_liabilities` flag value, when it
    /// changed.
    #[serde(default)]
    pub authorized_to_maintain_liabilites_flag: Option<bool>,
    /// New `clawback_enabled` flag value, when it changed.
    #[serde(default)]
    pub clawback_enabled_flag: Option<bool>,
}

/// `trade` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The counterparty of the trade.
    pub seller: String,
    /// Id of the offer that was crossed.
    #[serde(default)]
    pub offer_id: Option<String>,
    /// Amount the account sold.
    pub sold_amount: String,
    /// Asset type the account sold.
    #[serde(default)]
    pub sold_asset_type: Option<String>,
    /// Asset code the account sold.
    #[serde(default)]
    pub sold_asset_code: Option<String>,
    /// Asset issuer the account sold.
    #[serde(default)]
    pub sold_asset_issuer: Option<String>,
    /// Amount the account bought.
    pub bought_amount: String,
    /// Asset type the account bought.
    #[serde(default)]
    pub bought_asset_type: Option<String>,
    /// Asset code the account bought.
    #[serde(default)]
    pub bought_asset_code: Option<String>,
    /// Asset issuer the account bought.
    #[serde(default)]
    pub bought_asset_issuer: Option<String>,
}

/// Payload shared by the data entry effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// Data entry name.
    #[serde(default)]
    pub name: Option<String>,
    /// Base64 data entry value.
    #[serde(default)]
    pub value: Option<String>,
}

/// `sequence_bumped` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceBumpedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The sequence number the account was bumped to.
    pub new_seq: String,
}

/// Payload shared by the claimable balance effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimableBalanceEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// Id of the claimable balance.
    pub balance_id: String,
    /// Canonical asset string of the balance.
    #[serde(default)]
    pub asset: Option<String>,
    /// Amount held by the balance.
    #[serde(default)]
    pub amount: Option<String>,
    /// The claimant, for claimant-created effects.
    #[serde(default)]
    pub claimant: Option<String>,
}

/// Payload shared by every `*_sponsorship_created` effect; the entity
/// reference fields are populated per kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipCreatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The sponsoring account.
    pub sponsor: String,
    /// Sponsored signer key, for signer sponsorships.
    #[serde(default)]
    pub signer: Option<String>,
    /// Sponsored trustline asset, for trustline sponsorships.
    #[serde(default)]
    pub asset: Option<String>,
    /// Sponsored data entry name, for data sponsorships.
    #[serde(default)]
    pub data_name: Option<String>,
    /// Sponsored balance id, for claimable balance sponsorships.
    #[serde(default)]
    pub balance_id: Option<String>,
}

/// Payload shared by every `*_sponsorship_updated` effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipUpdatedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The account now sponsoring the entry.
    pub new_sponsor: String,
    /// The account that was sponsoring the entry.
    pub former_sponsor: String,
    /// Sponsored signer key, for signer sponsorships.
    #[serde(default)]
    pub signer: Option<String>,
    /// Sponsored trustline asset, for trustline sponsorships.
    #[serde(default)]
    pub asset: Option<String>,
    /// Sponsored data entry name, for data sponsorships.
    #[serde(default)]
    pub data_name: Option<String>,
    /// Sponsored balance id, for claimable balance sponsorships.
    #[serde(default)]
    pub balance_id: Option<String>,
}

/// Payload shared by every `*_sponsorship_removed` effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorshipRemovedEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The account that was sponsoring the entry.
    pub former_sponsor: String,
    /// Sponsored signer key, for signer sponsorships.
    #[serde(default)]
    pub signer: Option<String>,
    /// Sponsored trustline asset, for trustline sponsorships.
    #[serde(default)]
    pub asset: Option<String>,
    /// Sponsored data entry name, for data sponsorships.
    #[serde(default)]
    pub data_name: Option<String>,
    /// Sponsored balance id, for claimable balance sponsorships.
    #[serde(default)]
    pub balance_id: Option<String>,
}

/// A liquidity pool as embedded in pool effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPool {
    /// Pool id.
    pub id: String,
    /// Fee in basis points.
    #[serde(default)]
    pub fee_bp: Option<u32>,
    /// Number of trustlines into the pool.
    #[serde(default)]
    pub total_trustlines: Option<String>,
    /// Total pool shares outstanding.
    #[serde(default)]
    pub total_shares: Option<String>,
    /// Current pool reserves.
    #[serde(default)]
    pub reserves: Vec<AssetAmount>,
}

/// Payload shared by the non-trade liquidity pool effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPoolEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The pool after the change.
    pub liquidity_pool: LiquidityPool,
    /// Reserves paid into the pool, for deposits.
    #[serde(default)]
    pub reserves_deposited: Vec<AssetAmount>,
    /// Reserves paid out of the pool, for withdrawals.
    #[serde(default)]
    pub reserves_received: Vec<AssetAmount>,
    /// Reserves revoked from the pool, for revocations.
    #[serde(default)]
    pub reserves_revoked: Vec<AssetAmount>,
    /// Pool shares received, for deposits.
    #[serde(default)]
    pub shares_received: Option<String>,
    /// Pool shares redeemed, for withdrawals.
    #[serde(default)]
    pub shares_redeemed: Option<String>,
    /// Pool shares revoked, for revocations.
    #[serde(default)]
    pub shares_revoked: Option<String>,
}

/// `liquidity_pool_trade` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidityPoolTradeEffect {
    /// Shared effect fields.
    #[serde(flatten)]
    pub base: EffectBase,
    /// The pool after the trade.
    pub liquidity_pool: LiquidityPool,
    /// What the pool sold.
    #[serde(default)]
    pub sold: Option<AssetAmount>,
    /// What the pool bought.
    #[serde(default)]
    pub bought: Option<AssetAmount>,
}
