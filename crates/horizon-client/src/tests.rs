//! Tests for the Horizon client and pagination engine.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use horizon_resources::Operation;

use crate::client::HorizonClient;
use crate::error::{HorizonError, HttpErrorKind, Problem};
use crate::types::{HorizonConfig, ListParams, Order};

const ACCOUNT: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";

fn test_client(base_url: &str) -> HorizonClient {
    HorizonClient::new(HorizonConfig {
        base_url: base_url.to_string(),
        auth_token: None,
    })
}

fn payment_record(id: u64) -> Value {
    json!({
        "id": id.to_string(),
        "paging_token": id.to_string(),
        "type_i": 1,
        "type": "payment",
        "from": ACCOUNT,
        "to": "GBVFTZL5HIPT4PFQVTZVIWR77V7LWYCXU4CLYWWHHOEXB64XPG5LDMTU",
        "amount": "1.0",
        "asset_type": "native"
    })
}

fn envelope(records: Vec<Value>, next: Option<&str>, prev: Option<&str>) -> Value {
    let mut links = json!({
        "self": {"href": "unused"}
    });
    if let Some(href) = next {
        links["next"] = json!({"href": href});
    }
    if let Some(href) = prev {
        links["prev"] = json!({"href": href});
    }
    json!({
        "_links": links,
        "_embedded": {"records": records}
    })
}

#[tokio::test]
async fn account_detail_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/accounts/{ACCOUNT}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": ACCOUNT,
            "account_id": ACCOUNT,
            "paging_token": "",
            "sequence": "120192344791343104",
            "subentry_count": 2,
            "balances": [
                {"balance": "100.5", "asset_type": "native"}
            ],
            "data": {}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let account = client.account(ACCOUNT).await.unwrap();

    assert_eq!(account.account_id, ACCOUNT);
    assert_eq!(account.sequence, "120192344791343104");
    assert_eq!(account.balances.len(), 1);
    assert!(account.balances[0].asset.is_native());
    assert!(!account.requires_memo());
}

#[tokio::test]
async fn account_not_found_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/GMISSING"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "https://stellar.org/horizon-errors/not_found",
            "title": "Resource Missing",
            "status": 404
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.account("GMISSING").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_params_are_encoded_into_the_initial_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "12345"))
        .and(query_param("order", "desc"))
        .and(query_param("limit", "7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(vec![], None, None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let params = ListParams::new().cursor("12345").order(Order::Desc).limit(7);
    let page = client.operations(&params).await.unwrap();
    assert!(page.records().is_empty());
}

#[tokio::test]
async fn pagination_round_trip_returns_the_original_records() {
    let server = MockServer::start().await;
    let base = server.uri();

    // First page: records 101..=104 ascending.
    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "100"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            (101..=104).map(payment_record).collect(),
            Some(&format!("{base}/operations?cursor=104&order=asc&limit=4")),
            Some(&format!("{base}/operations?cursor=101&order=desc&limit=4")),
        )))
        .mount(&server)
        .await;

    // Second page, reached through the next link.
    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "104"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            (105..=108).map(payment_record).collect(),
            Some(&format!("{base}/operations?cursor=108&order=asc&limit=4")),
            Some(&format!("{base}/operations?cursor=105&order=desc&limit=4")),
        )))
        .mount(&server)
        .await;

    // Walking back from the second page flips the order to descending,
    // so the server returns the first page's records newest-first.
    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "105"))
        .and(query_param("order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            (101..=104).rev().map(payment_record).collect(),
            None,
            None,
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let first: crate::Page<Operation> = client
        .operations(&ListParams::new().cursor("100").order(Order::Asc).limit(4))
        .await
        .unwrap();
    assert_eq!(first.records().len(), 4);
    assert_eq!(first.records()[0].id(), "101");

    let second = first.next().await.unwrap();
    assert_eq!(second.records()[0].id(), "105");

    let back = second.prev().await.unwrap();
    assert_eq!(back.records().len(), 4);
    // Direction flipped: same records, newest-first, so the last one is
    // the first page's first record.
    assert_eq!(back.records()[0].id(), "104");
    assert_eq!(back.records()[3].id(), first.records()[0].id());
}

#[tokio::test]
async fn next_without_a_link_is_no_such_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/operations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            vec![payment_record(1)],
            None,
            None,
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page: crate::Page<Operation> = client.operations(&ListParams::new()).await.unwrap();

    assert!(matches!(page.next().await, Err(HorizonError::NoSuchPage)));
    assert!(matches!(page.prev().await, Err(HorizonError::NoSuchPage)));
}

#[tokio::test]
async fn templated_links_are_never_dereferenced() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/operations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_links": {
                "self": {"href": format!("{base}/operations")},
                "next": {
                    "href": format!("{base}/operations{{?cursor,limit,order}}"),
                    "templated": true
                }
            },
            "_embedded": {"records": [payment_record(1)]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page: crate::Page<Operation> = client.operations(&ListParams::new()).await.unwrap();

    // The templated next link must not produce a request.
    assert!(matches!(page.next().await, Err(HorizonError::NoSuchPage)));
}

#[tokio::test]
async fn one_malformed_record_fails_the_whole_page() {
    let server = MockServer::start().await;

    let mut bad = payment_record(2);
    bad.as_object_mut().unwrap().remove("paging_token");

    Mock::given(method("GET"))
        .and(path("/operations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            vec![payment_record(1), bad, payment_record(3)],
            None,
            None,
        )))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result: Result<crate::Page<Operation>, _> = client.operations(&ListParams::new()).await;
    assert!(matches!(result, Err(HorizonError::Decode(_))));
}

#[tokio::test]
async fn rate_limiting_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/operations"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "type": "https://stellar.org/horizon-errors/rate_limit_exceeded",
            "title": "Rate Limit Exceeded",
            "status": 429
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.operations(&ListParams::new()).await.unwrap_err();
    match err {
        HorizonError::Http { kind, status, .. } => {
            assert_eq!(kind, HttpErrorKind::RateLimited);
            assert_eq!(status, 429);
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[test]
fn status_classification_table() {
    let stale: Problem = serde_json::from_value(json!({
        "type": "https://stellar.org/horizon-errors/stale_history",
        "title": "Historical DB Is Too Stale",
        "status": 503
    }))
    .unwrap();

    assert_eq!(HttpErrorKind::classify(404, None), HttpErrorKind::NotFound);
    assert_eq!(HttpErrorKind::classify(400, None), HttpErrorKind::BadRequest);
    assert_eq!(HttpErrorKind::classify(406, None), HttpErrorKind::BadRequest);
    assert_eq!(HttpErrorKind::classify(409, None), HttpErrorKind::Duplicate);
    assert_eq!(HttpErrorKind::classify(429, None), HttpErrorKind::RateLimited);
    assert_eq!(
        HttpErrorKind::classify(503, Some(&stale)),
        HttpErrorKind::StaleHistory
    );
    assert_eq!(HttpErrorKind::classify(503, None), HttpErrorKind::Internal);
    assert_eq!(HttpErrorKind::classify(500, None), HttpErrorKind::Internal);
}

#[test]
fn submission_problem_extras_survive_decoding() {
    let problem: Problem = serde_json::from_value(json!({
        "type": "https://stellar.org/horizon-errors/transaction_failed",
        "title": "Transaction Failed",
        "status": 400,
        "extras": {
            "result_codes": {"transaction": "tx_bad_seq"},
            "result_xdr": "AAAAAAAAAGT////6AAAAAA=="
        }
    }))
    .unwrap();

    let extras = problem.extras.unwrap();
    assert_eq!(
        extras["result_codes"]["transaction"],
        json!("tx_bad_seq")
    );
}
