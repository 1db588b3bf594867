//! User, file and bot-metadata types for the Telegram Bot API.

use serde::{Deserialize, Serialize};

/// A user or bot account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: i64,
    /// Whether this account is a bot
    pub is_bot: bool,
    /// First name
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Username without the leading `@`
    #[serde(default)]
    pub username: Option<String>,
    /// IETF language tag of the user's client
    #[serde(default)]
    pub language_code: Option<String>,
    /// Whether the bot can be invited to groups; `getMe` only
    #[serde(default)]
    pub can_join_groups: Option<bool>,
    /// Whether privacy mode is disabled; `getMe` only
    #[serde(default)]
    pub can_read_all_group_messages: Option<bool>,
    /// Whether the bot supports inline queries; `getMe` only
    #[serde(default)]
    pub supports_inline_queries: Option<bool>,
}

impl User {
    /// Display name: first name plus last name when present
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

/// A file stored on the remote service, ready for download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
    /// Path component for the download URL; valid for at least an hour
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Current webhook status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Webhook URL; empty when no webhook is set
    pub url: String,
    /// Whether a custom certificate was provided
    pub has_custom_certificate: bool,
    /// Number of updates awaiting delivery
    pub pending_update_count: i32,
    /// Unix time of the most recent delivery error
    #[serde(default)]
    pub last_error_date: Option<i64>,
    /// Description of the most recent delivery error
    #[serde(default)]
    pub last_error_message: Option<String>,
    /// Maximum allowed concurrent deliveries
    #[serde(default)]
    pub max_connections: Option<i32>,
    /// Update kinds the webhook subscribes to
    #[serde(default)]
    pub allowed_updates: Vec<String>,
}

impl WebhookInfo {
    /// Whether a webhook is currently set
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}

/// One command the bot advertises to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotCommand {
    /// Command name, 1-32 chars, without the leading `/`
    pub command: String,
    /// Short description, 1-256 chars
    pub description: String,
}
