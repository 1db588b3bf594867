//! Service scenario tests over the mock transport.

use crate::client::TelegramClientImpl;
use crate::config::TelegramConfigBuilder;
use crate::errors::TelegramError;
use crate::files::InputFile;
use crate::fixtures;
use crate::media::{InputMedia, InputMediaPhoto};
use crate::mocks::{MockHttpTransport, MockResponse, RequestKind};
use crate::services::bot::BotServiceTrait;
use crate::services::media::{MediaServiceTrait, SendMediaGroupRequest, SendPhotoRequest};
use crate::services::messages::{MessagesServiceTrait, SendMessageRequest};
use std::sync::Arc;

fn client_over(transport: Arc<MockHttpTransport>) -> TelegramClientImpl {
    let config = TelegramConfigBuilder::new()
        .token("123456:test-token")
        .unwrap()
        .build_unchecked();
    TelegramClientImpl::with_transport(config, transport)
}

#[tokio::test]
async fn test_send_message_returns_typed_result() {
    let transport =
        Arc::new(MockHttpTransport::new().add_response(MockResponse::ok(fixtures::SEND_MESSAGE_OK)));
    let client = client_over(transport.clone());

    let message = client
        .messages()
        .send_message(SendMessageRequest::new(1234, "hi"))
        .await
        .unwrap();

    assert_eq!(message.message_id, 7);
    assert_eq!(message.text.as_deref(), Some("hi"));

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.endpoint, "sendMessage");
    assert_eq!(recorded.kind, RequestKind::Form);
    assert_eq!(recorded.params.get("chat_id"), Some("1234"));
    assert_eq!(recorded.params.get("text"), Some("hi"));
}

#[tokio::test]
async fn test_remote_failure_surfaces_code_and_description() {
    let transport =
        Arc::new(MockHttpTransport::new().add_response(MockResponse::ok(fixtures::CHAT_NOT_FOUND)));
    let client = client_over(transport);

    let err = client
        .messages()
        .send_message(SendMessageRequest::new(1234, "hi"))
        .await
        .unwrap_err();

    match err {
        TelegramError::Api {
            code, description, ..
        } => {
            assert_eq!(code, 400);
            assert!(description.contains("chat not found"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_retry_hint_reaches_the_caller() {
    let transport = Arc::new(
        MockHttpTransport::new().add_response(MockResponse::ok(fixtures::TOO_MANY_REQUESTS)),
    );
    let client = client_over(transport);

    let err = client.bot().get_me().await.unwrap_err();
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(7)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_send_photo_url_stays_url_encoded() {
    let transport =
        Arc::new(MockHttpTransport::new().add_response(MockResponse::ok(fixtures::SEND_MESSAGE_OK)));
    let client = client_over(transport.clone());

    client
        .media()
        .send_photo(SendPhotoRequest::new(
            1234,
            InputFile::url("https://example.com/a.png"),
        ))
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.kind, RequestKind::Form);
    assert_eq!(recorded.params.get("photo"), Some("https://example.com/a.png"));
    assert!(recorded.files.is_empty());
}

#[tokio::test]
async fn test_send_photo_upload_switches_to_multipart() {
    let transport =
        Arc::new(MockHttpTransport::new().add_response(MockResponse::ok(fixtures::SEND_MESSAGE_OK)));
    let client = client_over(transport.clone());

    client
        .media()
        .send_photo(SendPhotoRequest::new(
            1234,
            InputFile::memory("a.png", &b"png bytes"[..]),
        ))
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.kind, RequestKind::Multipart);
    assert!(!recorded.params.contains_key("photo"));
    assert_eq!(recorded.files.len(), 1);
    assert_eq!(recorded.files[0].field_name, "photo");
    assert!(recorded.files[0].file.needs_upload());
}

#[tokio::test]
async fn test_media_group_correlates_placeholders_and_parts() {
    let transport = Arc::new(
        MockHttpTransport::new().add_response(MockResponse::ok(r#"{"ok":true,"result":[]}"#)),
    );
    let client = client_over(transport.clone());

    client
        .media()
        .send_media_group(SendMediaGroupRequest::new(
            1234,
            vec![
                InputMedia::Photo(InputMediaPhoto::new(InputFile::file_id("existing"))),
                InputMedia::Photo(InputMediaPhoto::new(InputFile::memory(
                    "b.png",
                    &b"png"[..],
                ))),
            ],
        ))
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.kind, RequestKind::Multipart);

    let media_json = recorded.params.get("media").unwrap();
    assert!(media_json.contains(r#""media":"existing""#));
    assert!(media_json.contains(r#""media":"attach://file-1""#));

    assert_eq!(recorded.files.len(), 1);
    assert_eq!(recorded.files[0].field_name, "file-1");
}

#[tokio::test]
async fn test_validation_fails_before_any_request() {
    let transport = Arc::new(MockHttpTransport::new());
    let client = client_over(transport.clone());

    let err = client
        .messages()
        .send_message(SendMessageRequest::new(1234, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, TelegramError::Validation(_)));
    assert!(transport.recorded_requests().is_empty());
}
