//! Tests for resource decoding and the discriminator registries.

use serde_json::{json, Value};

use crate::account::Account;
use crate::effect::{decode_effect, Effect, EffectKind};
use crate::error::DecodeError;
use crate::link::Link;
use crate::operation::{decode_operation, Operation, OperationKind};

const SOURCE: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
const DEST: &str = "GBVFTZL5HIPT4PFQVTZVIWR77V7LWYCXU4CLYWWHHOEXB64XPG5LDMTU";

fn merge(mut base: Value, extra: Value) -> Value {
    let extra = extra.as_object().cloned().unwrap_or_default();
    let obj = base.as_object_mut().unwrap();
    for (key, value) in extra {
        obj.insert(key, value);
    }
    base
}

/// A minimal well-formed payload for one operation kind: the shared
/// base plus the kind's required fields.
fn operation_fixture(kind: OperationKind) -> Value {
    let base = json!({
        "id": "120192344791343105",
        "paging_token": "120192344791343105",
        "transaction_hash": "7e2def20d5a21a56be2a457b648f702ee1af889d3df65790e92a05081e9fabf1",
        "source_account": SOURCE,
        "created_at": "2024-02-06T17:32:26Z",
        "transaction_successful": true,
        "type_i": kind.type_i(),
        "type": kind.name(),
    });
    let extra = match kind {
        OperationKind::CreateAccount => json!({
            "account": DEST,
            "funder": SOURCE,
            "starting_balance": "25.0"
        }),
        OperationKind::Payment | OperationKind::PathPaymentStrictReceive
        | OperationKind::PathPaymentStrictSend => json!({
            "from": SOURCE,
            "to": DEST,
            "amount": "100.0",
            "asset_type": "native"
        }),
        OperationKind::ManageSellOffer
        | OperationKind::ManageBuyOffer => json!({
            "offer_id": "8",
            "amount": "50.0",
            "price": "1.2",
            "buying_asset_type": "native",
            "selling_asset_type": "credit_alphanum4",
            "selling_asset_code": "USD",
            "selling_asset_issuer": SOURCE
        }),
        OperationKind::CreatePassiveSellOffer => json!({
            "amount": "50.0",
            "price": "1.2",
            "buying_asset_type": "native",
            "selling_asset_type": "native"
        }),
        OperationKind::SetOptions => json!({
            "home_domain": "example.com",
            "set_flags_s": ["auth_required_flag"]
        }),
        OperationKind::ChangeTrust => json!({
            "trustor": SOURCE,
            "trustee": DEST,
            "limit": "922337203685.4775807",
            "asset_type": "credit_alphanum4",
            "asset_code": "USD",
            "asset_issuer": DEST
        }),
        OperationKind::AllowTrust => json!({
            "trustor": DEST,
            "trustee": SOURCE,
            "authorize": true,
            "asset_type": "credit_alphanum4",
            "asset_code": "USD",
            "asset_issuer": SOURCE
        }),
        OperationKind::AccountMerge => json!({
            "account": SOURCE,
            "into": DEST
        }),
        OperationKind::Inflation | OperationKind::RestoreFootprint => json!({}),
        OperationKind::ManageData => json!({
            "name": "config.memo_required",
            "value": "MQ=="
        }),
        OperationKind::BumpSequence => json!({
            "bump_to": "120192344968520085"
        }),
        OperationKind::CreateClaimableBalance => json!({
            "asset": "USD:GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7",
            "amount": "10.0"
        }),
        OperationKind::ClaimClaimableBalance => json!({
            "balance_id": "00000000178826fbfe339e1f5c53417c6fedfe2c05e8bec9c8d48b011071a3b7",
            "claimant": DEST
        }),
        OperationKind::BeginSponsoringFutureReserves => json!({
            "sponsored_id": DEST
        }),
        OperationKind::EndSponsoringFutureReserves => json!({
            "begin_sponsor": SOURCE
        }),
        OperationKind::RevokeSponsorship => json!({
            "account_id": DEST
        }),
        OperationKind::Clawback => json!({
            "from": DEST,
            "amount": "5.0",
            "asset_type": "credit_alphanum4",
            "asset_code": "USD",
            "asset_issuer": SOURCE
        }),
        OperationKind::ClawbackClaimableBalance => json!({
            "balance_id": "00000000178826fbfe339e1f5c53417c6fedfe2c05e8bec9c8d48b011071a3b7"
        }),
        OperationKind::SetTrustLineFlags => json!({
            "trustor": DEST,
            "asset_type": "credit_alphanum4",
            "asset_code": "USD",
            "asset_issuer": SOURCE,
            "clear_flags_s": ["authorized"]
        }),
        OperationKind::LiquidityPoolDeposit => json!({
            "liquidity_pool_id": "67260c4c1807b262ff851b0a3fe141194936bb0215b2f77447f1df11998eabb9",
            "shares_received": "1000.0"
        }),
        OperationKind::LiquidityPoolWithdraw => json!({
            "liquidity_pool_id": "67260c4c1807b262ff851b0a3fe141194936bb0215b2f77447f1df11998eabb9",
            "shares": "500.0"
        }),
        OperationKind::InvokeHostFunction => json!({
            "function": "HostFunctionTypeHostFunctionTypeInvokeContract"
        }),
        OperationKind::ExtendFootprintTtl => json!({
            "extend_to": 1234567
        }),
    };
    merge(base, extra)
}

/// A minimal well-formed payload for one effect kind.
fn effect_fixture(kind: EffectKind) -> Value {
    let base = json!({
        "id": "0120192344791343105-0000000001",
        "paging_token": "120192344791343105-1",
        "account": SOURCE,
        "created_at": "2024-02-06T17:32:26Z",
        "type_i": kind.type_i(),
        "type": kind.name(),
    });
    let extra = match kind {
        EffectKind::AccountCreated => json!({"starting_balance": "25.0"}),
        EffectKind::AccountCredited
        | EffectKind::AccountDebited => json!({
            "amount": "100.0",
            "asset_type": "native"
        }),
        EffectKind::ContractCredited
        | EffectKind::ContractDebited => json!({
            "amount": "100.0",
            "asset_type": "native",
            "contract": "CDLZFC3SYJYDZT7K67VZ75HPJVIEUVNIXF47ZG2FB2RMQQVU2HHGCYSC"
        }),
        EffectKind::AccountThresholdsUpdated => json!({
            "low_threshold": 1,
            "med_threshold": 2,
            "high_threshold": 3
        }),
        EffectKind::AccountHomeDomainUpdated => json!({"home_domain": "example.com"}),
        EffectKind::AccountFlagsUpdated => json!({"auth_required_flag": true}),
        EffectKind::AccountRemoved
        | EffectKind::AccountInflationDestinationUpdated
        | EffectKind::OfferCreated
        | EffectKind::OfferRemoved
        | EffectKind::OfferUpdated => json!({}),
        EffectKind::SignerCreated
        | EffectKind::SignerRemoved
        | EffectKind::SignerUpdated => json!({
            "public_key": DEST,
            "weight": 1
        }),
        EffectKind::TrustlineCreated
        | EffectKind::TrustlineRemoved
        | EffectKind::TrustlineUpdated => json!({
            "asset_type": "credit_alphanum4",
            "asset_code": "USD",
            "asset_issuer": DEST,
            "limit": "1000.0"
        }),
        EffectKind::TrustlineAuthorized
        | EffectKind::TrustlineDeauthorized
        | EffectKind::TrustlineAuthorizedToMaintainLiabilities => json!({
            "trustor": DEST,
            "asset_type": "credit_alphanum4",
            "asset_code": "USD"
        }),
        EffectKind::TrustlineFlagsUpdated => json!({
            "trustor": DEST,
            "asset_type": "credit_alphanum4",
            "asset_code": "USD",
            "asset_issuer": SOURCE,
            "authorized_flag": true
        }),
        EffectKind::Trade => json!({
            "seller": DEST,
            "offer_id": "8",
            "sold_amount": "10.0",
            "sold_asset_type": "native",
            "bought_amount": "12.0",
            "bought_asset_type": "credit_alphanum4",
            "bought_asset_code": "USD",
            "bought_asset_issuer": SOURCE
        }),
        EffectKind::DataCreated
        | EffectKind::DataRemoved
        | EffectKind::DataUpdated => json!({"name": "welcome"}),
        EffectKind::SequenceBumped => json!({"new_seq": "120192344968520085"}),
        EffectKind::ClaimableBalanceCreated
        | EffectKind::ClaimableBalanceClaimantCreated
        | EffectKind::ClaimableBalanceClaimed
        | EffectKind::ClaimableBalanceClawedBack => json!({
            "balance_id": "00000000178826fbfe339e1f5c53417c6fedfe2c05e8bec9c8d48b011071a3b7",
            "asset": "USD:GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7",
            "amount": "10.0"
        }),
        EffectKind::AccountSponsorshipCreated
        | EffectKind::TrustlineSponsorshipCreated
        | EffectKind::DataSponsorshipCreated
        | EffectKind::ClaimableBalanceSponsorshipCreated
        | EffectKind::SignerSponsorshipCreated => json!({"sponsor": DEST}),
        EffectKind::AccountSponsorshipUpdated
        | EffectKind::TrustlineSponsorshipUpdated
        | EffectKind::DataSponsorshipUpdated
        | EffectKind::ClaimableBalanceSponsorshipUpdated
        | EffectKind::SignerSponsorshipUpdated => json!({
            "new_sponsor": DEST,
            "former_sponsor": SOURCE
        }),
        EffectKind::AccountSponsorshipRemoved
        | EffectKind::TrustlineSponsorshipRemoved
        | EffectKind::DataSponsorshipRemoved
        | EffectKind::ClaimableBalanceSponsorshipRemoved
        | EffectKind::SignerSponsorshipRemoved => json!({"former_sponsor": SOURCE}),
        EffectKind::LiquidityPoolDeposited
        | EffectKind::LiquidityPoolWithdrew
        | EffectKind::LiquidityPoolCreated
        | EffectKind::LiquidityPoolRemoved
        | EffectKind::LiquidityPoolRevoked => json!({
            "liquidity_pool": {
                "id": "67260c4c1807b262ff851b0a3fe141194936bb0215b2f77447f1df11998eabb9",
                "fee_bp": 30,
                "total_shares": "5000.0",
                "reserves": [
                    {"asset": "native", "amount": "1000.0"}
                ]
            }
        }),
        EffectKind::LiquidityPoolTrade => json!({
            "liquidity_pool": {
                "id": "67260c4c1807b262ff851b0a3fe141194936bb0215b2f77447f1df11998eabb9"
            },
            "sold": {"asset": "native", "amount": "10.0"},
            "bought": {
                "asset": "USD:GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7",
                "amount": "12.0"
            }
        }),
    };
    merge(base, extra)
}

#[test]
fn every_registered_operation_kind_decodes_to_itself() {
    for &kind in OperationKind::ALL {
        let raw = serde_json::to_vec(&operation_fixture(kind)).unwrap();
        let op = decode_operation(&raw)
            .unwrap_or_else(|e| panic!("kind {:?} failed to decode: {e}", kind));
        assert_eq!(op.kind(), Some(kind), "kind mismatch for {:?}", kind);
        assert_eq!(op.base().type_i, kind.type_i());
        assert_eq!(op.base().type_name, kind.name());
        assert!(!op.paging_token().is_empty());
    }
}

#[test]
fn every_registered_effect_kind_decodes_to_itself() {
    for &kind in EffectKind::ALL {
        let raw = serde_json::to_vec(&effect_fixture(kind)).unwrap();
        let effect = decode_effect(&raw)
            .unwrap_or_else(|e| panic!("kind {:?} failed to decode: {e}", kind));
        assert_eq!(effect.kind(), Some(kind), "kind mismatch for {:?}", kind);
        assert_eq!(effect.base().type_i, kind.type_i());
        assert_eq!(effect.base().type_name, kind.name());
        assert!(!effect.paging_token().is_empty());
    }
}

#[test]
fn operation_registry_is_a_bijection() {
    assert_eq!(OperationKind::ALL.len(), 27);
    for &kind in OperationKind::ALL {
        assert_eq!(OperationKind::from_type_i(kind.type_i()), Some(kind));
        assert_eq!(OperationKind::from_name(kind.name()), Some(kind));
    }
    // Discriminators are unique and listed in order.
    let codes: Vec<i64> = OperationKind::ALL.iter().map(|k| k.type_i()).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

#[test]
fn effect_registry_is_a_bijection() {
    assert_eq!(EffectKind::ALL.len(), 53);
    for &kind in EffectKind::ALL {
        assert_eq!(EffectKind::from_type_i(kind.type_i()), Some(kind));
        assert_eq!(EffectKind::from_name(kind.name()), Some(kind));
    }
    let codes: Vec<i64> = EffectKind::ALL.iter().map(|k| k.type_i()).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

#[test]
fn unknown_operation_discriminator_is_reported_not_thrown() {
    let raw = serde_json::to_vec(&json!({
        "id": "1",
        "paging_token": "1",
        "type_i": 999,
        "type": "quantum_payment"
    }))
    .unwrap();

    // Strict decode reports the code.
    match decode_operation(&raw) {
        Err(DecodeError::UnknownVariant { code }) => assert_eq!(code, 999),
        other => panic!("expected UnknownVariant, got {other:?}"),
    }

    // The tolerant serde path keeps the base fields.
    let op: Operation = serde_json::from_slice(&raw).unwrap();
    match op {
        Operation::Unsupported(inner) => {
            assert_eq!(inner.base.type_i, 999);
            assert_eq!(inner.base.paging_token, "1");
        }
        other => panic!("expected Unsupported, got {other:?}"),
    }
    assert_eq!(serde_json::from_slice::<Operation>(&raw).unwrap().kind(), None);
}

#[test]
fn unknown_effect_discriminator_is_reported_not_thrown() {
    let raw = serde_json::to_vec(&json!({
        "id": "1-1",
        "paging_token": "1-1",
        "type_i": 998,
        "type": "account_teleported"
    }))
    .unwrap();

    match decode_effect(&raw) {
        Err(DecodeError::UnknownVariant { code }) => assert_eq!(code, 998),
        other => panic!("expected UnknownVariant, got {other:?}"),
    }

    let effect: Effect = serde_json::from_slice(&raw).unwrap();
    assert!(matches!(effect, Effect::Unsupported(_)));
}

#[test]
fn malformed_bytes_fail_as_malformed() {
    assert!(matches!(
        decode_operation(b"{not json"),
        Err(DecodeError::Malformed(_))
    ));
    // Valid JSON but no discriminator at all.
    assert!(matches!(
        decode_operation(br#"{"id": "1", "paging_token": "1"}"#),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn string_discriminator_alone_resolves_through_the_registry() {
    let raw = serde_json::to_vec(&json!({
        "id": "1",
        "paging_token": "1",
        "type": "payment",
        "from": SOURCE,
        "to": DEST,
        "amount": "1.0",
        "asset_type": "native"
    }))
    .unwrap();
    let op = decode_operation(&raw).unwrap();
    assert_eq!(op.kind(), Some(OperationKind::Payment));
    assert_eq!(op.base().type_i, OperationKind::Payment.type_i());
}

#[test]
fn payment_fields_round_through() {
    let raw = serde_json::to_vec(&operation_fixture(OperationKind::Payment)).unwrap();
    let Operation::Payment(payment) = decode_operation(&raw).unwrap() else {
        panic!("expected payment");
    };
    assert_eq!(payment.from, SOURCE);
    assert_eq!(payment.to, DEST);
    assert_eq!(payment.amount, "100.0");
    assert!(payment.asset.is_native());
}

#[test]
fn trade_effect_fields_round_through() {
    let raw = serde_json::to_vec(&effect_fixture(EffectKind::Trade)).unwrap();
    let Effect::Trade(trade) = decode_effect(&raw).unwrap() else {
        panic!("expected trade");
    };
    assert_eq!(trade.seller, DEST);
    assert_eq!(trade.sold_amount, "10.0");
    assert_eq!(trade.bought_asset_code.as_deref(), Some("USD"));
}

#[test]
fn memo_required_sentinel_is_detected() {
    let mut account: Account = serde_json::from_value(json!({
        "id": SOURCE,
        "account_id": SOURCE,
        "paging_token": "",
        "sequence": "120192344791343104",
        "data": {"config.memo_required": "MQ=="}
    }))
    .unwrap();
    assert!(account.requires_memo());

    // Base64 of "0" does not count, nor does garbage.
    account
        .data
        .insert("config.memo_required".to_string(), "MA==".to_string());
    assert!(!account.requires_memo());
    account
        .data
        .insert("config.memo_required".to_string(), "!!!".to_string());
    assert!(!account.requires_memo());
    account.data.clear();
    assert!(!account.requires_memo());
}

#[test]
fn templated_links_are_flagged() {
    let link: Link = serde_json::from_value(json!({
        "href": "https://horizon.example.org/accounts/{account_id}/payments{?cursor,limit,order}",
        "templated": true
    }))
    .unwrap();
    assert!(!link.is_dereferenceable());

    let plain: Link =
        serde_json::from_value(json!({"href": "https://horizon.example.org/payments"})).unwrap();
    assert!(plain.is_dereferenceable());
}
