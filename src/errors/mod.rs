//! Error types for the Telegram client.
//!
//! Provides an error hierarchy mapping transport, decoding and remote
//! Bot API failures to semantic error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for Telegram operations
pub type TelegramResult<T> = Result<T, TelegramError>;

/// Root error type for the Telegram integration
#[derive(Error, Debug)]
pub enum TelegramError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Request validation error raised before any network activity
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// File reference error
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Webhook error
    #[error("Webhook error: {0}")]
    Webhook(#[from] WebhookError),

    /// Remote API error: the envelope decoded with `ok == false`
    #[error("API error {code}: {description}")]
    Api {
        /// Remote error code
        code: i32,
        /// Human-readable description from the remote service
        description: String,
        /// Optional retry/migration hint
        parameters: Option<crate::types::ResponseParameters>,
    },
}

impl TelegramError {
    /// Check if this error is worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(NetworkError::Timeout) => true,
            Self::Network(NetworkError::ConnectionFailed { .. }) => true,
            Self::Api { code, .. } => *code == 429 || *code >= 500,
            _ => false,
        }
    }

    /// Retry-after hint from the remote, if the envelope carried one
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Api {
                parameters: Some(p),
                ..
            } => p.retry_after.map(|secs| Duration::from_secs(secs as u64)),
            _ => None,
        }
    }

    /// Chat-migration hint from the remote, if the envelope carried one
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        match self {
            Self::Api {
                parameters: Some(p),
                ..
            } => p.migrate_to_chat_id,
            _ => None,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing bot token
    #[error("Bot token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Invalid proxy URL
    #[error("Invalid proxy URL: {0}")]
    InvalidProxyUrl(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Validation errors raised by catalog operations before sending
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is empty or absent
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A field holds a value outside its allowed range
    #[error("{field} is out of range: {message}")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Error message
        message: String,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Other HTTP-level error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// The envelope signalled success but carried no result
    #[error("Envelope is ok but carries no result")]
    MissingResult,
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

/// File reference errors
#[derive(Error, Debug)]
pub enum FileError {
    /// The reference does not carry uploadable data
    #[error("File reference is not uploadable")]
    NotUploadable,

    /// The reference does not serialize to a string value
    #[error("File reference is not sendable as a string")]
    NotSendable,

    /// A one-shot stream source was consumed twice
    #[error("Stream source already consumed")]
    StreamConsumed,

    /// Opening a local file failed
    #[error("Failed to open {path}: {source}")]
    Open {
        /// Path that failed to open
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Webhook errors
#[derive(Error, Debug)]
pub enum WebhookError {
    /// Request used a method other than POST
    #[error("wrong HTTP method required POST")]
    WrongHttpMethod,

    /// Secret token header missing or mismatched
    #[error("Invalid secret token")]
    InvalidSecretToken,

    /// Update payload failed to decode
    #[error("Invalid payload: {message}")]
    InvalidPayload {
        /// Error message
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponseParameters;

    #[test]
    fn test_error_is_retryable() {
        assert!(TelegramError::Network(NetworkError::Timeout).is_retryable());
        assert!(TelegramError::Api {
            code: 429,
            description: "Too Many Requests".to_string(),
            parameters: None,
        }
        .is_retryable());

        assert!(!TelegramError::Api {
            code: 400,
            description: "Bad Request".to_string(),
            parameters: None,
        }
        .is_retryable());
        assert!(!TelegramError::Validation(ValidationError::MissingField { field: "text" })
            .is_retryable());
    }

    #[test]
    fn test_retry_after_hint() {
        let err = TelegramError::Api {
            code: 429,
            description: "Too Many Requests: retry after 7".to_string(),
            parameters: Some(ResponseParameters {
                retry_after: Some(7),
                migrate_to_chat_id: None,
            }),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
        assert_eq!(err.migrate_to_chat_id(), None);

        assert_eq!(TelegramError::Network(NetworkError::Timeout).retry_after(), None);
    }

    #[test]
    fn test_migration_hint() {
        let err = TelegramError::Api {
            code: 400,
            description: "Bad Request: group chat was upgraded to a supergroup chat".to_string(),
            parameters: Some(ResponseParameters {
                retry_after: None,
                migrate_to_chat_id: Some(-1001234567890),
            }),
        };
        assert_eq!(err.migrate_to_chat_id(), Some(-1001234567890));
    }

    #[test]
    fn test_wrong_method_message() {
        let err = WebhookError::WrongHttpMethod;
        assert_eq!(err.to_string(), "wrong HTTP method required POST");
    }
}
