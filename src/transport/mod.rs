//! HTTP transport layer for the Telegram client.
//!
//! Provides low-level HTTP communication with the Bot API, including
//! client construction from configuration, url-encoded and multipart
//! request building, envelope decoding, and error translation.

use crate::config::TelegramConfig;
use crate::errors::{ConfigurationError, NetworkError, ResponseError, TelegramResult};
use crate::files::NamedFile;
use crate::params::Params;
use crate::types::ApiResponse;
use async_trait::async_trait;
use http::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use secrecy::ExposeSecret;
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, instrument};

/// Header carrying the configured secret token
pub const SECRET_TOKEN_HEADER: &str = "X-Telegram-Bot-Api-Secret-Token";

/// HTTP transport trait for making Bot API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a url-encoded request to an endpoint
    async fn send_form(&self, endpoint: &str, params: Params) -> TelegramResult<ApiResponse>;

    /// Send a multipart request carrying files to an endpoint
    async fn send_multipart(
        &self,
        endpoint: &str,
        params: Params,
        files: Vec<NamedFile>,
    ) -> TelegramResult<ApiResponse>;
}

/// Build an outbound HTTP client from the configuration.
///
/// TLS verification stays on unless the configuration explicitly opts
/// out.
pub fn build_http_client(config: &TelegramConfig) -> TelegramResult<Client> {
    let mut builder = Client::builder()
        .timeout(config.timeout)
        .pool_max_idle_per_host(10);

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url.as_str())
            .map_err(|e| ConfigurationError::InvalidProxyUrl(e.to_string()))?;
        builder = builder.proxy(proxy);
    }

    if config.force_ipv4 {
        builder = builder.local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    if config.accept_invalid_certs {
        builder = builder.danger_accept_invalid_certs(true);
    }

    if config.http2_prior_knowledge {
        builder = builder.http2_prior_knowledge();
    }

    builder
        .build()
        .map_err(|e| NetworkError::Http(e.to_string()).into())
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    config: TelegramConfig,
}

impl ReqwestTransport {
    /// Create a new transport from the configuration
    pub fn new(config: TelegramConfig) -> TelegramResult<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, config: TelegramConfig) -> Self {
        Self { client, config }
    }

    fn headers(&self) -> TelegramResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(secret) = self.config.secret_token() {
            let value = HeaderValue::from_str(secret.expose_secret()).map_err(|_| {
                ConfigurationError::InvalidConfiguration {
                    message: "Secret token contains non-header characters".to_string(),
                }
            })?;
            headers.insert(SECRET_TOKEN_HEADER, value);
        }
        Ok(headers)
    }

    /// Decode the response envelope and translate remote failures.
    ///
    /// With debug off the body is decoded incrementally; with debug on
    /// the body is fully buffered first so the raw bytes can be logged.
    async fn read_envelope(&self, response: reqwest::Response) -> TelegramResult<ApiResponse> {
        let envelope = if self.config.debug {
            let body = response.text().await.map_err(NetworkError::from)?;
            debug!(response_body = %body, "raw api response");
            serde_json::from_str::<ApiResponse>(&body).map_err(ResponseError::from)?
        } else {
            response
                .json::<ApiResponse>()
                .await
                .map_err(|e| -> crate::errors::TelegramError {
                    if e.is_decode() {
                        ResponseError::DeserializationError {
                            message: e.to_string(),
                        }
                        .into()
                    } else {
                        NetworkError::from(e).into()
                    }
                })?
        };

        envelope.ensure_ok()
    }
}

/// Assemble a multipart form from params and named files.
///
/// Every param becomes a text field. Upload-needed files become
/// streamed parts, so memory stays bounded regardless of file size;
/// other references collapse to text fields carrying their string form.
async fn build_multipart_form(params: Params, files: Vec<NamedFile>) -> TelegramResult<Form> {
    let mut form = Form::new();

    for (key, value) in params {
        form = form.text(key, value);
    }

    for named in files {
        if named.file.needs_upload() {
            let payload = named.file.open().await?;
            let file_name = named.file_name.unwrap_or(payload.file_name);
            let mime = mime_guess::from_path(&file_name).first_or_octet_stream();
            let part = Part::stream(payload.body)
                .file_name(file_name)
                .mime_str(mime.as_ref())
                .map_err(|e| NetworkError::Http(e.to_string()))?;
            form = form.part(named.field_name, part);
        } else {
            form = form.text(named.field_name, named.file.send_data()?);
        }
    }

    Ok(form)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, params), fields(endpoint = %endpoint))]
    async fn send_form(&self, endpoint: &str, params: Params) -> TelegramResult<ApiResponse> {
        let url = self.config.api_url(endpoint);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .form(&params)
            .send()
            .await
            .map_err(NetworkError::from)?;

        self.read_envelope(response).await
    }

    #[instrument(skip(self, params, files), fields(endpoint = %endpoint, file_count = files.len()))]
    async fn send_multipart(
        &self,
        endpoint: &str,
        params: Params,
        files: Vec<NamedFile>,
    ) -> TelegramResult<ApiResponse> {
        let url = self.config.api_url(endpoint);
        let form = build_multipart_form(params, files).await?;

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .multipart(form)
            .send()
            .await
            .map_err(NetworkError::from)?;

        self.read_envelope(response).await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelegramConfigBuilder;
    use crate::errors::TelegramError;
    use crate::files::InputFile;

    fn test_config() -> TelegramConfig {
        TelegramConfigBuilder::new()
            .token("123456:test-token")
            .unwrap()
            .build_unchecked()
    }

    fn response_from(body: &str) -> reqwest::Response {
        http::Response::builder()
            .status(200)
            .body(body.to_string())
            .unwrap()
            .into()
    }

    #[test]
    fn test_build_http_client_defaults() {
        assert!(build_http_client(&test_config()).is_ok());
    }

    #[test]
    fn test_build_http_client_with_options() {
        let config = TelegramConfigBuilder::new()
            .token("123456:test-token")
            .unwrap()
            .proxy("http://127.0.0.1:8080")
            .unwrap()
            .force_ipv4(true)
            .build_unchecked();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_secret_token_header_attached() {
        let config = TelegramConfigBuilder::new()
            .token("123456:test-token")
            .unwrap()
            .secret_token("s3cret")
            .build_unchecked();
        let transport = ReqwestTransport::new(config).unwrap();

        let headers = transport.headers().unwrap();
        assert_eq!(
            headers.get(SECRET_TOKEN_HEADER).unwrap().to_str().unwrap(),
            "s3cret"
        );
    }

    #[test]
    fn test_no_secret_token_no_header() {
        let transport = ReqwestTransport::new(test_config()).unwrap();
        assert!(transport.headers().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_envelope_success() {
        let transport = ReqwestTransport::new(test_config()).unwrap();
        let envelope = transport
            .read_envelope(response_from(r#"{"ok":true,"result":{"message_id":7}}"#))
            .await
            .unwrap();
        assert!(envelope.ok);
    }

    #[tokio::test]
    async fn test_read_envelope_api_error() {
        let transport = ReqwestTransport::new(test_config()).unwrap();
        let err = transport
            .read_envelope(response_from(
                r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
            ))
            .await
            .unwrap_err();

        match err {
            TelegramError::Api { code, description, .. } => {
                assert_eq!(code, 400);
                assert!(description.contains("chat not found"));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_read_envelope_decode_error() {
        let transport = ReqwestTransport::new(test_config()).unwrap();
        let err = transport
            .read_envelope(response_from("not json at all"))
            .await
            .unwrap_err();
        assert!(matches!(err, TelegramError::Response(_)));
    }

    #[tokio::test]
    async fn test_read_envelope_debug_buffers_and_decodes() {
        let config = TelegramConfigBuilder::new()
            .token("123456:test-token")
            .unwrap()
            .debug(true)
            .build_unchecked();
        let transport = ReqwestTransport::new(config).unwrap();

        let envelope = transport
            .read_envelope(response_from(r#"{"ok":true,"result":[]}"#))
            .await
            .unwrap();
        assert!(envelope.ok);
    }

    #[tokio::test]
    async fn test_multipart_form_branches() {
        let mut params = Params::new();
        params.add("chat_id", "1234");

        let files = vec![
            NamedFile::new("photo", InputFile::memory("a.png", &b"png"[..])),
            NamedFile::new("thumbnail", InputFile::file_id("abc123")),
        ];

        // Upload reference becomes a part, plain reference a text field;
        // assembling must not error.
        assert!(build_multipart_form(params, files).await.is_ok());
    }

    #[tokio::test]
    async fn test_multipart_form_propagates_open_failure() {
        let files = vec![NamedFile::new(
            "document",
            InputFile::path("/definitely/not/here.bin"),
        )];
        let err = build_multipart_form(Params::new(), files).await.unwrap_err();
        assert!(matches!(err, TelegramError::File(_)));
    }
}
