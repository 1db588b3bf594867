//! Message-related types for the Telegram Bot API.

use super::chat::Chat;
use super::user::User;
use super::InlineKeyboardMarkup;
use serde::{Deserialize, Serialize};

/// A message delivered by the remote service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message id within the chat
    pub message_id: i64,
    /// Sender; absent for channel posts
    #[serde(default)]
    pub from: Option<User>,
    /// Chat the message belongs to
    pub chat: Chat,
    /// Unix send time
    pub date: i64,
    /// Message text
    #[serde(default)]
    pub text: Option<String>,
    /// Entities in the text (mentions, links, formatting)
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    /// Caption for media messages
    #[serde(default)]
    pub caption: Option<String>,
    /// Entities in the caption
    #[serde(default)]
    pub caption_entities: Vec<MessageEntity>,
    /// Available photo sizes
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    /// Audio attachment
    #[serde(default)]
    pub audio: Option<Audio>,
    /// Document attachment
    #[serde(default)]
    pub document: Option<Document>,
    /// Video attachment
    #[serde(default)]
    pub video: Option<Video>,
    /// Animation attachment
    #[serde(default)]
    pub animation: Option<Animation>,
    /// Voice note attachment
    #[serde(default)]
    pub voice: Option<Voice>,
    /// Shared location
    #[serde(default)]
    pub location: Option<Location>,
    /// Shared contact
    #[serde(default)]
    pub contact: Option<Contact>,
    /// The message this one replies to
    #[serde(default)]
    pub reply_to_message: Option<Box<Message>>,
    /// Original sender for forwards
    #[serde(default)]
    pub forward_from: Option<User>,
    /// Unix time of the original message for forwards
    #[serde(default)]
    pub forward_date: Option<i64>,
    /// Unix edit time
    #[serde(default)]
    pub edit_date: Option<i64>,
    /// Grouping id for albums
    #[serde(default)]
    pub media_group_id: Option<String>,
    /// Inline keyboard attached to the message
    #[serde(default)]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

/// Bare message id, returned by `copyMessage`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageId {
    /// The id
    pub message_id: i64,
}

/// One entity inside message text or a caption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEntity {
    /// Entity kind (`mention`, `bot_command`, `url`, `bold`, …)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Offset in UTF-16 code units
    pub offset: i64,
    /// Length in UTF-16 code units
    pub length: i64,
    /// URL for `text_link` entities
    #[serde(default)]
    pub url: Option<String>,
    /// User for `text_mention` entities
    #[serde(default)]
    pub user: Option<User>,
    /// Language for `pre` entities
    #[serde(default)]
    pub language: Option<String>,
}

/// One size of a photo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// An audio file treated as music
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audio {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Duration in seconds
    pub duration: i32,
    /// Performer tag
    #[serde(default)]
    pub performer: Option<String>,
    /// Title tag
    #[serde(default)]
    pub title: Option<String>,
    /// Original filename
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// A general file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Thumbnail
    #[serde(default)]
    pub thumbnail: Option<PhotoSize>,
    /// Original filename
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// A video file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Duration in seconds
    pub duration: i32,
    /// Thumbnail
    #[serde(default)]
    pub thumbnail: Option<PhotoSize>,
    /// Original filename
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// A soundless short video (GIF-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Duration in seconds
    pub duration: i32,
    /// Thumbnail
    #[serde(default)]
    pub thumbnail: Option<PhotoSize>,
    /// Original filename
    #[serde(default)]
    pub file_name: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// A voice note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    /// Identifier for downloading or re-sending
    pub file_id: String,
    /// Stable identifier across bots
    pub file_unique_id: String,
    /// Duration in seconds
    pub duration: i32,
    /// MIME type
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<i64>,
}

/// A point on the map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Longitude
    pub longitude: f64,
    /// Latitude
    pub latitude: f64,
    /// Radius of uncertainty in meters
    #[serde(default)]
    pub horizontal_accuracy: Option<f64>,
}

/// A shared phone contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Phone number
    pub phone_number: String,
    /// First name
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// User id if the contact is registered
    #[serde(default)]
    pub user_id: Option<i64>,
}
