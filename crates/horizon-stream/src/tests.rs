//! Tests for SSE framing and the streaming state machine.

use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use horizon_client::{HorizonClient, HorizonConfig};
use horizon_resources::Operation;

use crate::error::StreamError;
use crate::sse::SseParser;
use crate::stream::{StreamEvent, StreamItem, StreamOptions, StreamRequest};

fn test_client(base_url: &str) -> HorizonClient {
    HorizonClient::new(HorizonConfig {
        base_url: base_url.to_string(),
        auth_token: None,
    })
}

fn fast_options() -> StreamOptions {
    StreamOptions {
        reconnect_delay: Duration::from_millis(25),
    }
}

fn payment_json(id: u64) -> Value {
    json!({
        "id": id.to_string(),
        "paging_token": id.to_string(),
        "type_i": 1,
        "type": "payment",
        "from": "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7",
        "to": "GBVFTZL5HIPT4PFQVTZVIWR77V7LWYCXU4CLYWWHHOEXB64XPG5LDMTU",
        "amount": "1.0",
        "asset_type": "native"
    })
}

/// An SSE body with the `"hello"` open signal followed by one frame per
/// (id, payload) pair.
fn sse_body(events: &[(u64, Value)]) -> String {
    let mut body = String::from("data: \"hello\"\n\n");
    for (id, payload) in events {
        body.push_str(&format!("id: {id}\ndata: {payload}\n\n"));
    }
    body
}

fn sse_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "text/event-stream")
}

async fn expect_resource(stream: &mut StreamItem<Operation>) -> Operation {
    loop {
        match stream.recv().await.expect("stream ended unexpectedly") {
            StreamEvent::Resource(op) => return op,
            StreamEvent::Open | StreamEvent::Error(StreamError::Transport(_)) => continue,
            StreamEvent::Error(e) => panic!("unexpected stream error: {e}"),
        }
    }
}

// --- parser ---

#[test]
fn parser_handles_arbitrary_chunk_boundaries() {
    let body = b"id: 7\ndata: {\"a\": 1}\n\nid: 8\ndata: {\"b\": 2}\n\n";
    let mut parser = SseParser::new();

    let mut frames = Vec::new();
    // Feed one byte at a time.
    for byte in body.iter() {
        frames.extend(parser.push(std::slice::from_ref(byte)));
    }

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].id.as_deref(), Some("7"));
    assert_eq!(frames[0].data, "{\"a\": 1}");
    assert_eq!(frames[1].id.as_deref(), Some("8"));
}

#[test]
fn parser_handles_crlf_and_comments() {
    let body = b": heartbeat\r\nid: 12\r\ndata: {\"x\": true}\r\n\r\n";
    let mut parser = SseParser::new();
    let frames = parser.push(body);

    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].id.as_deref(), Some("12"));
    assert_eq!(frames[0].data, "{\"x\": true}");
}

#[test]
fn parser_joins_multiple_data_lines() {
    let mut parser = SseParser::new();
    let frames = parser.push(b"data: {\"a\":\ndata: 1}\n\n");
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].data, "{\"a\":\n1}");
}

#[test]
fn control_payloads_are_recognized() {
    let mut parser = SseParser::new();
    let frames = parser.push(b"data: \"hello\"\n\ndata: byebye\n\ndata: {\"ok\": 1}\n\n");
    assert_eq!(frames.len(), 3);
    assert!(frames[0].is_control());
    assert!(frames[1].is_control());
    assert!(!frames[2].is_control());
}

// --- streaming ---

#[tokio::test]
async fn stream_emits_open_then_resources_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "now"))
        .respond_with(sse_response(sse_body(&[
            (101, payment_json(101)),
            (102, payment_json(102)),
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // Reconnects after the body ends land here and stay quiet.
    Mock::given(method("GET"))
        .and(path("/operations"))
        .respond_with(sse_response(String::new()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut stream: StreamItem<Operation> =
        StreamItem::open(client, StreamRequest::new("operations"), fast_options());

    assert!(matches!(stream.recv().await, Some(StreamEvent::Open)));
    assert_eq!(expect_resource(&mut stream).await.id(), "101");
    assert_eq!(expect_resource(&mut stream).await.id(), "102");

    stream.close().await;
}

#[tokio::test]
async fn one_malformed_frame_does_not_block_the_next() {
    let server = MockServer::start().await;

    let body = format!(
        "data: \"hello\"\n\nid: 1\ndata: {}\n\nid: 2\ndata: {{this is not json\n\nid: 3\ndata: {}\n\n",
        payment_json(1),
        payment_json(3)
    );

    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "now"))
        .respond_with(sse_response(body))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations"))
        .respond_with(sse_response(String::new()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut stream: StreamItem<Operation> =
        StreamItem::open(client, StreamRequest::new("operations"), fast_options());

    assert!(matches!(stream.recv().await, Some(StreamEvent::Open)));
    assert_eq!(expect_resource(&mut stream).await.id(), "1");

    // The malformed frame surfaces as a non-fatal decode error...
    match stream.recv().await {
        Some(StreamEvent::Error(StreamError::Decode(_))) => {}
        other => panic!("expected decode error, got {other:?}"),
    }

    // ...and the following well-formed frame still arrives.
    assert_eq!(expect_resource(&mut stream).await.id(), "3");

    stream.close().await;
}

#[tokio::test]
async fn reconnect_resumes_from_the_last_event_id_not_now() {
    let server = MockServer::start().await;

    // Initial connection delivers events 5..=7, then the body ends.
    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "now"))
        .respond_with(sse_response(sse_body(&[
            (5, payment_json(5)),
            (6, payment_json(6)),
            (7, payment_json(7)),
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // The reconnect must carry cursor=7; the server then continues
    // strictly after it.
    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "7"))
        .respond_with(sse_response(sse_body(&[(8, payment_json(8))])))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/operations"))
        .and(query_param("cursor", "8"))
        .respond_with(sse_response(String::new()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut stream: StreamItem<Operation> =
        StreamItem::open(client, StreamRequest::new("operations"), fast_options());

    let mut seen = Vec::new();
    let mut opens = 0;
    while seen.len() < 4 {
        match stream.recv().await.expect("stream ended unexpectedly") {
            StreamEvent::Open => opens += 1,
            StreamEvent::Resource(op) => seen.push(op.id().to_string()),
            StreamEvent::Error(StreamError::Transport(_)) => {}
            StreamEvent::Error(e) => panic!("unexpected stream error: {e}"),
        }
    }

    // Forward-only: nothing at or before id 7 is re-delivered, and the
    // open notification fired exactly once across the reconnect.
    assert_eq!(seen, vec!["5", "6", "7", "8"]);
    assert_eq!(opens, 1);

    stream.close().await;
}

#[tokio::test]
async fn explicit_cursor_is_used_for_the_first_connection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/effects"))
        .and(query_param("cursor", "12345-1"))
        .respond_with(sse_response(String::new()))
        .expect(1..)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let stream: StreamItem<Operation> = StreamItem::open(
        client,
        StreamRequest::new("effects").cursor("12345-1"),
        fast_options(),
    );

    // Give the task time to connect at least once.
    tokio::time::sleep(Duration::from_millis(150)).await;
    stream.close().await;
}

#[tokio::test]
async fn close_during_reconnect_does_not_race() {
    // Nothing listens here, so every connect attempt fails and the task
    // lives in its reconnect cycle.
    let client = test_client("http://127.0.0.1:1");
    let mut stream: StreamItem<Operation> = StreamItem::open(
        client,
        StreamRequest::new("operations"),
        StreamOptions {
            reconnect_delay: Duration::from_secs(30),
        },
    );

    // At least one failed attempt has been reported.
    match stream.recv().await {
        Some(StreamEvent::Error(StreamError::Transport(_))) => {}
        other => panic!("expected transport error, got {other:?}"),
    }

    // Closing while the task sleeps toward its next reconnect must
    // return promptly and tear the task down for good.
    tokio::time::timeout(Duration::from_secs(5), stream.close())
        .await
        .expect("close did not complete");
}
