//! End-to-end tests over a wiremock server and the real transport.

use crate::client::TelegramClientImpl;
use crate::config::TelegramConfigBuilder;
use crate::errors::TelegramError;
use crate::files::InputFile;
use crate::fixtures;
use crate::services::media::{MediaServiceTrait, SendPhotoRequest};
use crate::services::messages::{MessagesServiceTrait, SendMessageRequest};
use crate::services::updates::{GetUpdatesRequest, UpdatesServiceTrait};
use crate::transport::SECRET_TOKEN_HEADER;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> TelegramClientImpl {
    let config = TelegramConfigBuilder::new()
        .token("123456:test-token")
        .unwrap()
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap();
    TelegramClientImpl::new(config).unwrap()
}

#[tokio::test]
async fn test_send_message_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123456:test-token/sendMessage"))
        .and(body_string_contains("chat_id=1234"))
        .and(body_string_contains("text=hi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(fixtures::SEND_MESSAGE_OK, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client
        .messages()
        .send_message(SendMessageRequest::new(1234, "hi"))
        .await
        .unwrap();

    assert_eq!(message.message_id, 7);
}

#[tokio::test]
async fn test_envelope_failure_wins_over_http_status() {
    let server = MockServer::start().await;

    // The envelope is authoritative even under a non-200 status.
    Mock::given(method("POST"))
        .and(path("/bot123456:test-token/sendMessage"))
        .respond_with(
            ResponseTemplate::new(400).set_body_raw(fixtures::CHAT_NOT_FOUND, "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
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
async fn test_secret_token_header_sent_when_configured() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123456:test-token/getMe"))
        .and(header(SECRET_TOKEN_HEADER, "s3cret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(fixtures::GET_ME_OK, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = TelegramConfigBuilder::new()
        .token("123456:test-token")
        .unwrap()
        .base_url(&server.uri())
        .unwrap()
        .secret_token("s3cret")
        .build()
        .unwrap();
    let client = TelegramClientImpl::new(config).unwrap();

    use crate::services::bot::BotServiceTrait;
    let me = client.bot().get_me().await.unwrap();
    assert!(me.is_bot);
    assert_eq!(me.username.as_deref(), Some("testbot"));
}

#[tokio::test]
async fn test_photo_upload_is_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123456:test-token/sendPhoto"))
        .and(body_string_contains(r#"name="photo"; filename="a.png""#))
        .and(body_string_contains(r#"name="chat_id""#))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(fixtures::SEND_MESSAGE_OK, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client
        .media()
        .send_photo(SendPhotoRequest::new(
            1234,
            InputFile::memory("a.png", &b"png bytes"[..]),
        ))
        .await
        .unwrap();

    assert_eq!(message.message_id, 7);
}

#[tokio::test]
async fn test_get_updates_carries_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bot123456:test-token/getUpdates"))
        .and(body_string_contains("offset=1002"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(fixtures::updates_envelope(&[1002, 1003]), "application/json"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let updates = client
        .updates()
        .get_updates(GetUpdatesRequest::new().offset(1002).limit(100))
        .await
        .unwrap();

    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].update_id, 1002);
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Point at a server that is not there.
    let config = TelegramConfigBuilder::new()
        .token("123456:test-token")
        .unwrap()
        .base_url("http://127.0.0.1:1")
        .unwrap()
        .build()
        .unwrap();
    let client = TelegramClientImpl::new(config).unwrap();

    use crate::services::bot::BotServiceTrait;
    let err = client.bot().get_me().await.unwrap_err();
    assert!(matches!(err, TelegramError::Network(_)));
}
