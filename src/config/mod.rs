//! Configuration management for the Telegram client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, TelegramResult};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Secure wrapper for the bot token
#[derive(Clone)]
pub struct BotToken {
    token: SecretString,
}

impl BotToken {
    /// Create a new token
    ///
    /// Tokens issued by the platform look like `123456:ABC-DEF…`; the
    /// check here is deliberately loose and only rejects values that
    /// cannot possibly be a token.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigurationError> {
        let token_str = token.into();
        if token_str.is_empty() {
            return Err(ConfigurationError::MissingToken);
        }
        if !token_str.contains(':') {
            return Err(ConfigurationError::InvalidToken(
                "Token must have the form <bot-id>:<secret>".to_string(),
            ));
        }
        Ok(Self {
            token: SecretString::new(token_str),
        })
    }

    /// Expose the token for use in request URLs
    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for BotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BotToken([REDACTED])")
    }
}

/// Configuration for the Telegram client
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token used in every request URL
    pub(crate) token: Option<BotToken>,
    /// Secret token sent as `X-Telegram-Bot-Api-Secret-Token` and
    /// expected on inbound webhook requests
    pub(crate) secret_token: Option<SecretString>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Log raw response bodies at debug level (buffers each response)
    pub debug: bool,
    /// Proxy for all outbound requests
    pub proxy: Option<Url>,
    /// Restrict outbound dials to IPv4
    pub force_ipv4: bool,
    /// Skip TLS certificate verification. Verification is on unless this
    /// is explicitly enabled.
    pub accept_invalid_certs: bool,
    /// Speak HTTP/2 without protocol negotiation
    pub http2_prior_knowledge: bool,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &self.token.is_some())
            .field("secret_token", &self.secret_token.is_some())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .field("proxy", &self.proxy)
            .field("force_ipv4", &self.force_ipv4)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("http2_prior_knowledge", &self.http2_prior_knowledge)
            .finish()
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            secret_token: None,
            base_url: Url::parse(crate::DEFAULT_BASE_URL).unwrap(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            debug: false,
            proxy: None,
            force_ipv4: false,
            accept_invalid_certs: false,
            http2_prior_knowledge: false,
        }
    }
}

impl TelegramConfig {
    /// Create a new configuration builder
    pub fn builder() -> TelegramConfigBuilder {
        TelegramConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> TelegramResult<Self> {
        let mut builder = TelegramConfigBuilder::new();

        if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
            builder = builder.token(&token)?;
        }

        if let Ok(url) = std::env::var("TELEGRAM_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("TELEGRAM_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        if let Ok(secret) = std::env::var("TELEGRAM_SECRET_TOKEN") {
            builder = builder.secret_token(&secret);
        }

        if let Ok(proxy) = std::env::var("TELEGRAM_PROXY") {
            builder = builder.proxy(&proxy)?;
        }

        builder.build()
    }

    /// Get the bot token if available
    pub fn token(&self) -> Option<&BotToken> {
        self.token.as_ref()
    }

    /// Get the secret token if available
    pub fn secret_token(&self) -> Option<&SecretString> {
        self.secret_token.as_ref()
    }

    /// Build the full URL for a Bot API endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let token = self.token.as_ref().map(|t| t.expose()).unwrap_or("");
        format!("{}/bot{}/{}", base, token, endpoint)
    }

    /// Build the download URL for a file path returned by `getFile`
    pub fn file_url(&self, file_path: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let token = self.token.as_ref().map(|t| t.expose()).unwrap_or("");
        format!("{}/file/bot{}/{}", base, token, file_path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> TelegramResult<()> {
        if self.token.is_none() {
            return Err(ConfigurationError::MissingToken.into());
        }
        Ok(())
    }
}

/// Builder for TelegramConfig
#[derive(Default)]
pub struct TelegramConfigBuilder {
    config: TelegramConfig,
}

impl TelegramConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: TelegramConfig::default(),
        }
    }

    /// Set the bot token
    pub fn token(mut self, token: &str) -> Result<Self, ConfigurationError> {
        self.config.token = Some(BotToken::new(token)?);
        Ok(self)
    }

    /// Set the secret token for webhook validation
    pub fn secret_token(mut self, secret: &str) -> Self {
        self.config.secret_token = Some(SecretString::new(secret.to_string()));
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url =
            Url::parse(url).map_err(|e| ConfigurationError::InvalidBaseUrl(e.to_string()))?;
        Ok(self)
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Enable raw response logging
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Route all requests through a proxy
    pub fn proxy(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.proxy =
            Some(Url::parse(url).map_err(|e| ConfigurationError::InvalidProxyUrl(e.to_string()))?);
        Ok(self)
    }

    /// Restrict outbound dials to IPv4
    pub fn force_ipv4(mut self, force: bool) -> Self {
        self.config.force_ipv4 = force;
        self
    }

    /// Disable TLS certificate verification
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Speak HTTP/2 without protocol negotiation
    pub fn http2_prior_knowledge(mut self, enabled: bool) -> Self {
        self.config.http2_prior_knowledge = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TelegramResult<TelegramConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> TelegramConfig {
        self.config
    }
}
