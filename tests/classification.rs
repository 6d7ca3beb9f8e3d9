//! Classification matrix over raw attempt outcomes.

use chat_relay::transport::StatusCode;
use chat_relay::{classify, ErrorKind, RawOutcome};

fn response(status: u16, body: &str) -> RawOutcome {
    RawOutcome::Response {
        status: StatusCode::from_u16(status).expect("valid status"),
        body: body.to_string(),
    }
}

#[test]
fn test_local_deadline_is_client_timeout() {
    let err = classify(RawOutcome::TimedOut).expect_err("timeout is a failure");
    assert_eq!(err.kind, ErrorKind::ClientTimeout);
}

#[test]
fn test_connection_failure_is_network_failure() {
    let err = classify(RawOutcome::ConnectionFailed {
        detail: "connection refused".to_string(),
    })
    .expect_err("connect failure is a failure");
    assert_eq!(err.kind, ErrorKind::NetworkFailure);
    assert_eq!(err.detail.as_deref(), Some("connection refused"));
}

#[test]
fn test_504_is_gateway_timeout_regardless_of_body() {
    // Status-derived kinds take precedence over body content.
    for body in ["", "not json", r#"{"error":"upstream timeout"}"#] {
        let err = classify(response(504, body)).expect_err("504 is a failure");
        assert_eq!(err.kind, ErrorKind::GatewayTimeout);
    }
}

#[test]
fn test_non_2xx_is_http_error_with_extracted_detail() {
    let cases = [
        (500, r#"{"error":"backend exploded"}"#, "backend exploded"),
        (403, r#"{"message":"not allowed"}"#, "not allowed"),
        (404, "plain text not found", "plain text not found"),
        (400, "", "Request failed with status 400"),
        (502, r#"{"unrelated":true}"#, "Request failed with status 502"),
    ];

    for (status, body, expected_detail) in cases {
        let err = classify(response(status, body)).expect_err("non-2xx is a failure");
        assert_eq!(err.kind, ErrorKind::HttpError, "status {status}");
        assert_eq!(err.detail.as_deref(), Some(expected_detail), "status {status}");
    }
}

#[test]
fn test_2xx_unparseable_body_is_malformed() {
    let err = classify(response(200, "<html></html>")).expect_err("bad JSON is a failure");
    assert_eq!(err.kind, ErrorKind::MalformedBody);
}

#[test]
fn test_2xx_without_usable_response_is_empty() {
    for body in [
        r#"{}"#,
        r#"{"response":null}"#,
        r#"{"response":""}"#,
        r#"{"response":{}}"#,
    ] {
        let err = classify(response(200, body)).expect_err("unusable response field");
        assert_eq!(err.kind, ErrorKind::EmptyResponse, "body {body}");
    }
}

#[test]
fn test_clean_success_passes_payload_through() {
    let payload = classify(response(200, r#"{"response":"hello","source":"menu-bot"}"#))
        .expect("clean success");
    assert_eq!(payload["response"], "hello");
    assert_eq!(payload["source"], "menu-bot");
}

#[test]
fn test_201_counts_as_success() {
    let payload = classify(response(201, r#"{"response":"created"}"#)).expect("2xx success");
    assert_eq!(payload["response"], "created");
}
