//! Inbound webhook scenario tests.

use crate::fixtures;
use crate::webhooks;
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;

#[test]
fn test_post_with_update_body_decodes() {
    let update =
        webhooks::parse_update(&Method::POST, fixtures::UPDATE_WITH_MESSAGE.as_bytes()).unwrap();

    assert_eq!(update.update_id, 1001);
    let message = update.effective_message().unwrap();
    assert_eq!(message.chat.id, 1234);
    assert_eq!(message.text.as_deref(), Some("hi"));
}

#[test]
fn test_get_request_yields_400_and_error_body() {
    let err = webhooks::parse_update(&Method::GET, &[]).unwrap_err();
    let (status, body) = webhooks::error_response(&err);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        r#"{"error":"Webhook error: wrong HTTP method required POST"}"#
    );
}

#[test]
fn test_decode_failure_yields_structured_error_body() {
    let err = webhooks::parse_update(&Method::POST, b"{ truncated").unwrap_err();
    let (status, body) = webhooks::error_response(&err);

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(parsed["error"].as_str().unwrap().contains("Invalid payload"));
}
