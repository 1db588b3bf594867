//! Common types for the Telegram Bot API.
//!
//! Defines the response envelope and the shared data structures used
//! across services.

use crate::errors::{ResponseError, TelegramError, TelegramResult};
use crate::params::ensure_at_prefix;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod chat;
pub mod message;
pub mod update;
pub mod user;

pub use chat::*;
pub use message::*;
pub use update::*;
pub use user::*;

/// The JSON envelope every Bot API response uses.
///
/// Exactly one of `result` or (`error_code`, `description`) is populated,
/// gated by `ok`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Raw result payload, present iff `ok`
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Remote error code, present iff `!ok`
    #[serde(default)]
    pub error_code: Option<i32>,
    /// Remote error description, present iff `!ok`
    #[serde(default)]
    pub description: Option<String>,
    /// Optional retry/migration hint
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

impl ApiResponse {
    /// Turn a failed envelope into its error value
    pub(crate) fn into_error(self) -> TelegramError {
        TelegramError::Api {
            code: self.error_code.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            parameters: self.parameters,
        }
    }

    /// Fail when the envelope signals an error
    pub fn ensure_ok(self) -> TelegramResult<Self> {
        if self.ok {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }

    /// Extract the raw result payload
    pub fn into_result(self) -> TelegramResult<serde_json::Value> {
        let checked = self.ensure_ok()?;
        checked
            .result
            .ok_or_else(|| ResponseError::MissingResult.into())
    }

    /// Decode the result payload into a typed value
    pub fn decode<T: DeserializeOwned>(self) -> TelegramResult<T> {
        let value = self.into_result()?;
        serde_json::from_value(value).map_err(|e| ResponseError::from(e).into())
    }
}

/// Retry/migration hint attached to some failed envelopes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// Seconds to wait before retrying
    #[serde(default)]
    pub retry_after: Option<i32>,
    /// The group chat migrated to this supergroup id
    #[serde(default)]
    pub migrate_to_chat_id: Option<i64>,
}

/// Target chat: a numeric id or a public `@username`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChatId {
    /// Numeric chat id
    Id(i64),
    /// Public channel or group username; serialized with a leading `@`
    Username(String),
}

impl ChatId {
    /// Wire representation of the target
    pub fn as_wire(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Username(name) => ensure_at_prefix(name),
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(name: &str) -> Self {
        Self::Username(name.to_string())
    }
}

impl From<String> for ChatId {
    fn from(name: String) -> Self {
        Self::Username(name)
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_wire())
    }
}

impl Serialize for ChatId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => serializer.serialize_i64(*id),
            Self::Username(name) => serializer.serialize_str(&ensure_at_prefix(name)),
        }
    }
}

/// Text formatting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    /// MarkdownV2-style formatting
    MarkdownV2,
    /// Legacy Markdown formatting
    Markdown,
    /// HTML formatting
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    /// Wire name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarkdownV2 => "MarkdownV2",
            Self::Markdown => "Markdown",
            Self::Html => "HTML",
        }
    }
}

/// Chat action shown to users while the bot prepares a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    /// Typing a text message
    Typing,
    /// Uploading a photo
    UploadPhoto,
    /// Recording a video
    RecordVideo,
    /// Uploading a video
    UploadVideo,
    /// Recording a voice note
    RecordVoice,
    /// Uploading a voice note
    UploadVoice,
    /// Uploading a document
    UploadDocument,
    /// Picking a sticker
    ChooseSticker,
    /// Looking up a location
    FindLocation,
    /// Recording a video note
    RecordVideoNote,
    /// Uploading a video note
    UploadVideoNote,
}

impl ChatAction {
    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordVoice => "record_voice",
            Self::UploadVoice => "upload_voice",
            Self::UploadDocument => "upload_document",
            Self::ChooseSticker => "choose_sticker",
            Self::FindLocation => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}

/// Additional interface options attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    /// Inline keyboard shown under the message
    InlineKeyboard(InlineKeyboardMarkup),
    /// Remove the current custom keyboard
    KeyboardRemove(ReplyKeyboardRemove),
    /// Force the client into reply mode
    ForceReply(ForceReply),
}

/// Inline keyboard attached to a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    /// Button rows
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Create a keyboard from button rows
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }
}

/// One button of an inline keyboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    /// Button label
    pub text: String,
    /// URL opened on press
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Data sent back in a callback query on press
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
}

impl InlineKeyboardButton {
    /// A button opening a URL
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            callback_data: None,
        }
    }

    /// A button producing a callback query
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(data.into()),
        }
    }
}

/// Request to remove the current custom keyboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always true on the wire
    pub remove_keyboard: bool,
    /// Remove only for specific users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }
}

/// Force the client to reply to this message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always true on the wire
    pub force_reply: bool,
    /// Placeholder shown in the input field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_field_placeholder: Option<String>,
    /// Force only for specific users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self {
            force_reply: true,
            input_field_placeholder: None,
            selective: None,
        }
    }
}
