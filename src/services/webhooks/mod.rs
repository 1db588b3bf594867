//! Webhook management service for the Bot API.
//!
//! Registering, clearing and inspecting the push-delivery webhook.
//! Decoding inbound webhook requests lives in [`crate::webhooks`].

use crate::errors::{TelegramResult, ValidationError};
use crate::files::{InputFile, NamedFile};
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::WebhookInfo;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Request to register a webhook
#[derive(Debug, Clone)]
pub struct SetWebhookRequest {
    /// HTTPS URL updates are pushed to
    pub url: String,
    /// Self-signed certificate to upload
    pub certificate: Option<InputFile>,
    /// Fixed IP to use instead of resolving the URL
    pub ip_address: Option<String>,
    /// Maximum allowed concurrent deliveries, 1-100
    pub max_connections: Option<i64>,
    /// Update kinds to receive
    pub allowed_updates: Option<Vec<String>>,
    /// Drop the pending update backlog
    pub drop_pending_updates: bool,
    /// Secret expected back in the
    /// `X-Telegram-Bot-Api-Secret-Token` header of every push
    pub secret_token: Option<String>,
}

impl SetWebhookRequest {
    /// Create a new webhook registration request
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            certificate: None,
            ip_address: None,
            max_connections: None,
            allowed_updates: None,
            drop_pending_updates: false,
            secret_token: None,
        }
    }

    /// Upload a self-signed certificate
    pub fn certificate(mut self, certificate: InputFile) -> Self {
        self.certificate = Some(certificate);
        self
    }

    /// Restrict the update kinds to receive
    pub fn allowed_updates(mut self, kinds: Vec<String>) -> Self {
        self.allowed_updates = Some(kinds);
        self
    }

    /// Set the push secret
    pub fn secret_token(mut self, secret: impl Into<String>) -> Self {
        self.secret_token = Some(secret.into());
        self
    }

    fn to_params(&self) -> TelegramResult<Params> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingField { field: "url" }.into());
        }

        let mut params = Params::new();
        params.add("url", self.url.clone());
        if let Some(ip) = &self.ip_address {
            params.add_non_empty("ip_address", ip);
        }
        params.add_opt_int("max_connections", self.max_connections);
        params.add_json("allowed_updates", self.allowed_updates.as_ref())?;
        params.add_bool("drop_pending_updates", self.drop_pending_updates);
        if let Some(secret) = &self.secret_token {
            params.add_non_empty("secret_token", secret);
        }
        Ok(params)
    }
}

/// Trait for webhook management operations
#[async_trait]
pub trait WebhooksServiceTrait: Send + Sync {
    /// Register a webhook URL
    async fn set_webhook(&self, request: SetWebhookRequest) -> TelegramResult<bool>;

    /// Remove the webhook and return to long polling
    async fn delete_webhook(&self, drop_pending_updates: bool) -> TelegramResult<bool>;

    /// Get the current webhook status
    async fn get_webhook_info(&self) -> TelegramResult<WebhookInfo>;
}

/// Webhook management service implementation
#[derive(Clone)]
pub struct WebhooksService {
    transport: Arc<dyn HttpTransport>,
}

impl WebhooksService {
    /// Create a new webhook management service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl WebhooksServiceTrait for WebhooksService {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn set_webhook(&self, request: SetWebhookRequest) -> TelegramResult<bool> {
        let params = request.to_params()?;

        match &request.certificate {
            Some(certificate) if certificate.needs_upload() => {
                let files = vec![NamedFile::new("certificate", certificate.clone())];
                self.transport
                    .send_multipart("setWebhook", params, files)
                    .await?
                    .decode()
            }
            _ => {
                self.transport
                    .send_form("setWebhook", params)
                    .await?
                    .decode()
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete_webhook(&self, drop_pending_updates: bool) -> TelegramResult<bool> {
        let mut params = Params::new();
        params.add_bool("drop_pending_updates", drop_pending_updates);
        self.transport
            .send_form("deleteWebhook", params)
            .await?
            .decode()
    }

    #[instrument(skip(self))]
    async fn get_webhook_info(&self) -> TelegramResult<WebhookInfo> {
        self.transport
            .send_form("getWebhookInfo", Params::new())
            .await?
            .decode()
    }
}

impl std::fmt::Debug for WebhooksService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhooksService").finish()
    }
}
