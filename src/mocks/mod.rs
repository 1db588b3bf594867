//! Mock implementations for testing.
//!
//! Provides a recording mock transport so service and pump behavior can
//! be verified without a network.

use crate::errors::{NetworkError, ResponseError, TelegramResult};
use crate::files::NamedFile;
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::ApiResponse;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Canned response configuration
#[derive(Debug, Clone)]
pub struct MockResponse {
    body: String,
    transport_error: Option<String>,
}

impl MockResponse {
    /// A raw envelope body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            transport_error: None,
        }
    }

    /// A successful envelope wrapping the given result payload
    pub fn result<T: Serialize>(data: &T) -> Self {
        let result = serde_json::to_value(data).expect("serializable mock payload");
        Self::ok(
            serde_json::json!({ "ok": true, "result": result }).to_string(),
        )
    }

    /// A failed envelope with the given remote code and description
    pub fn api_error(code: i32, description: &str) -> Self {
        Self::ok(
            serde_json::json!({
                "ok": false,
                "error_code": code,
                "description": description,
            })
            .to_string(),
        )
    }

    /// A transport-level failure; no envelope is produced
    pub fn network_error(message: impl Into<String>) -> Self {
        Self {
            body: String::new(),
            transport_error: Some(message.into()),
        }
    }
}

/// How a request reached the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Url-encoded POST
    Form,
    /// Multipart POST
    Multipart,
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Endpoint name
    pub endpoint: String,
    /// Wire shape used
    pub kind: RequestKind,
    /// Parameters sent
    pub params: Params,
    /// Files sent, for multipart requests
    pub files: Vec<NamedFile>,
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Queue a response
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Queue a successful envelope wrapping the given payload
    pub fn add_result<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::result(data))
    }

    /// Serve this response whenever the queue is empty
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Remaining queued responses
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn record(&self, endpoint: &str, kind: RequestKind, params: &Params, files: &[NamedFile]) {
        self.requests.lock().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            kind,
            params: params.clone(),
            files: files.to_vec(),
        });
    }

    fn serve(&self) -> TelegramResult<ApiResponse> {
        let response = {
            let mut queue = self.responses.lock();
            queue.pop_front().or_else(|| self.default_response.clone())
        }
        .ok_or_else(|| ResponseError::DeserializationError {
            message: "No mock response configured".to_string(),
        })?;

        if let Some(message) = response.transport_error {
            return Err(NetworkError::ConnectionFailed { message }.into());
        }

        let envelope: ApiResponse =
            serde_json::from_str(&response.body).map_err(ResponseError::from)?;
        envelope.ensure_ok()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_form(&self, endpoint: &str, params: Params) -> TelegramResult<ApiResponse> {
        self.record(endpoint, RequestKind::Form, &params, &[]);
        self.serve()
    }

    async fn send_multipart(
        &self,
        endpoint: &str,
        params: Params,
        files: Vec<NamedFile>,
    ) -> TelegramResult<ApiResponse> {
        self.record(endpoint, RequestKind::Multipart, &params, &files);
        self.serve()
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TelegramError;

    #[tokio::test]
    async fn test_mock_serves_and_records() {
        let transport =
            MockHttpTransport::new().add_response(MockResponse::ok(r#"{"ok":true,"result":true}"#));

        let mut params = Params::new();
        params.add("chat_id", "1234");

        let envelope = transport.send_form("deleteMessage", params).await.unwrap();
        assert!(envelope.ok);

        let recorded = transport.recorded_requests();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].endpoint, "deleteMessage");
        assert_eq!(recorded[0].kind, RequestKind::Form);
        assert_eq!(recorded[0].params.get("chat_id"), Some("1234"));
    }

    #[tokio::test]
    async fn test_mock_translates_api_errors() {
        let transport = MockHttpTransport::new()
            .add_response(MockResponse::api_error(400, "Bad Request: chat not found"));

        let err = transport
            .send_form("sendMessage", Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TelegramError::Api { code: 400, .. }));
    }

    #[tokio::test]
    async fn test_mock_network_error() {
        let transport = MockHttpTransport::new()
            .add_response(MockResponse::network_error("connection refused"));

        let err = transport
            .send_form("getMe", Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TelegramError::Network(_)));
    }

    #[tokio::test]
    async fn test_mock_unconfigured_is_error() {
        let transport = MockHttpTransport::new();
        assert!(transport.send_form("getMe", Params::new()).await.is_err());
    }
}
