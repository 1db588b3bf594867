//! Inbound webhook decoding.
//!
//! Framework-agnostic helpers over `http` primitives: hosts hand in the
//! request method, headers and body and get back a typed update or an
//! error body to write. Nothing here performs I/O.

use crate::errors::{TelegramError, TelegramResult, WebhookError};
use constant_time_eq::constant_time_eq;
use http::header::HeaderMap;
use http::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, warn};

use crate::transport::SECRET_TOKEN_HEADER;
use crate::types::Update;

/// Status written for every rejected webhook request
pub const ERROR_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Content type of the error body
pub const ERROR_CONTENT_TYPE: &str = "application/json";

/// Decode one update from an inbound webhook request.
///
/// Only POST is accepted; the body must hold exactly one JSON update.
pub fn parse_update(method: &Method, body: &[u8]) -> TelegramResult<Update> {
    if method != Method::POST {
        warn!(method = %method, "rejecting webhook request");
        return Err(WebhookError::WrongHttpMethod.into());
    }

    let update: Update = serde_json::from_slice(body).map_err(|e| WebhookError::InvalidPayload {
        message: e.to_string(),
    })?;

    debug!(update_id = update.update_id, "decoded webhook update");
    Ok(update)
}

/// Verify the secret token header on an inbound request.
///
/// Compares in constant time; a missing header fails like a mismatched
/// one.
pub fn verify_secret(headers: &HeaderMap, expected: &SecretString) -> TelegramResult<()> {
    let presented = headers
        .get(SECRET_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if !constant_time_eq(presented.as_bytes(), expected.expose_secret().as_bytes()) {
        warn!("webhook secret token mismatch");
        return Err(WebhookError::InvalidSecretToken.into());
    }

    Ok(())
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Build the JSON error body for a rejected request.
///
/// Serialization failures propagate to the caller instead of being
/// swallowed.
pub fn error_body(err: &TelegramError) -> TelegramResult<String> {
    let message = err.to_string();
    serde_json::to_string(&ErrorBody { error: &message })
        .map_err(|e| crate::errors::ResponseError::from(e).into())
}

/// Status and body to write for a rejected request
pub fn error_response(err: &TelegramError) -> (StatusCode, String) {
    let body = error_body(err)
        .unwrap_or_else(|_| r#"{"error":"failed to encode error"}"#.to_string());
    (ERROR_STATUS, body)
}
