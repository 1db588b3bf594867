//! Request types for the media service.

use crate::errors::{TelegramResult, ValidationError};
use crate::files::InputFile;
use crate::media::InputMedia;
use crate::params::Params;
use crate::types::{ChatId, ParseMode, ReplyMarkup};

/// Options shared by every single-file send operation
#[derive(Debug, Clone, Default)]
pub struct MediaOptions {
    /// Caption
    pub caption: Option<String>,
    /// Caption formatting mode
    pub parse_mode: Option<ParseMode>,
    /// Deliver silently
    pub disable_notification: bool,
    /// Protect from forwarding and saving
    pub protect_content: bool,
    /// Message to reply to
    pub reply_to_message_id: Option<i64>,
    /// Additional interface options
    pub reply_markup: Option<ReplyMarkup>,
}

impl MediaOptions {
    fn write_params(&self, params: &mut Params) -> TelegramResult<()> {
        if let Some(caption) = &self.caption {
            params.add_non_empty("caption", caption);
        }
        if let Some(mode) = self.parse_mode {
            params.add("parse_mode", mode.as_str());
        }
        params.add_bool("disable_notification", self.disable_notification);
        params.add_bool("protect_content", self.protect_content);
        params.add_opt_int("reply_to_message_id", self.reply_to_message_id);
        params.add_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(())
    }
}

macro_rules! media_option_setters {
    () => {
        /// Set the caption
        pub fn caption(mut self, caption: impl Into<String>) -> Self {
            self.options.caption = Some(caption.into());
            self
        }

        /// Set the caption formatting mode
        pub fn parse_mode(mut self, mode: ParseMode) -> Self {
            self.options.parse_mode = Some(mode);
            self
        }

        /// Deliver silently
        pub fn disable_notification(mut self, disable: bool) -> Self {
            self.options.disable_notification = disable;
            self
        }

        /// Reply to a message
        pub fn reply_to(mut self, message_id: i64) -> Self {
            self.options.reply_to_message_id = Some(message_id);
            self
        }

        /// Attach reply markup
        pub fn reply_markup(mut self, markup: ReplyMarkup) -> Self {
            self.options.reply_markup = Some(markup);
            self
        }
    };
}

/// Request to send a photo
#[derive(Debug, Clone)]
pub struct SendPhotoRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Photo reference
    pub photo: InputFile,
    /// Shared send options
    pub options: MediaOptions,
}

impl SendPhotoRequest {
    /// Create a new photo request
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo,
            options: MediaOptions::default(),
        }
    }

    media_option_setters!();

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        self.options.write_params(&mut params)?;
        Ok(params)
    }
}

/// Request to send an audio file
#[derive(Debug, Clone)]
pub struct SendAudioRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Audio reference
    pub audio: InputFile,
    /// Thumbnail reference
    pub thumbnail: Option<InputFile>,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Performer tag
    pub performer: Option<String>,
    /// Title tag
    pub title: Option<String>,
    /// Shared send options
    pub options: MediaOptions,
}

impl SendAudioRequest {
    /// Create a new audio request
    pub fn new(chat_id: impl Into<ChatId>, audio: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio,
            thumbnail: None,
            duration: None,
            performer: None,
            title: None,
            options: MediaOptions::default(),
        }
    }

    /// Set the thumbnail
    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    media_option_setters!();

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add_opt_int("duration", self.duration);
        if let Some(performer) = &self.performer {
            params.add_non_empty("performer", performer);
        }
        if let Some(title) = &self.title {
            params.add_non_empty("title", title);
        }
        self.options.write_params(&mut params)?;
        Ok(params)
    }
}

/// Request to send a general file
#[derive(Debug, Clone)]
pub struct SendDocumentRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Document reference
    pub document: InputFile,
    /// Thumbnail reference
    pub thumbnail: Option<InputFile>,
    /// Skip server-side content type detection
    pub disable_content_type_detection: bool,
    /// Shared send options
    pub options: MediaOptions,
}

impl SendDocumentRequest {
    /// Create a new document request
    pub fn new(chat_id: impl Into<ChatId>, document: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            document,
            thumbnail: None,
            disable_content_type_detection: false,
            options: MediaOptions::default(),
        }
    }

    /// Set the thumbnail
    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    media_option_setters!();

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add_bool(
            "disable_content_type_detection",
            self.disable_content_type_detection,
        );
        self.options.write_params(&mut params)?;
        Ok(params)
    }
}

/// Request to send a video
#[derive(Debug, Clone)]
pub struct SendVideoRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Video reference
    pub video: InputFile,
    /// Thumbnail reference
    pub thumbnail: Option<InputFile>,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Width
    pub width: Option<i64>,
    /// Height
    pub height: Option<i64>,
    /// Whether the video is suitable for streaming
    pub supports_streaming: bool,
    /// Shared send options
    pub options: MediaOptions,
}

impl SendVideoRequest {
    /// Create a new video request
    pub fn new(chat_id: impl Into<ChatId>, video: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            video,
            thumbnail: None,
            duration: None,
            width: None,
            height: None,
            supports_streaming: false,
            options: MediaOptions::default(),
        }
    }

    /// Set the thumbnail
    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    media_option_setters!();

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add_opt_int("duration", self.duration);
        params.add_opt_int("width", self.width);
        params.add_opt_int("height", self.height);
        params.add_bool("supports_streaming", self.supports_streaming);
        self.options.write_params(&mut params)?;
        Ok(params)
    }
}

/// Request to send an animation
#[derive(Debug, Clone)]
pub struct SendAnimationRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Animation reference
    pub animation: InputFile,
    /// Thumbnail reference
    pub thumbnail: Option<InputFile>,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Shared send options
    pub options: MediaOptions,
}

impl SendAnimationRequest {
    /// Create a new animation request
    pub fn new(chat_id: impl Into<ChatId>, animation: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            animation,
            thumbnail: None,
            duration: None,
            options: MediaOptions::default(),
        }
    }

    media_option_setters!();

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add_opt_int("duration", self.duration);
        self.options.write_params(&mut params)?;
        Ok(params)
    }
}

/// Request to send a voice note
#[derive(Debug, Clone)]
pub struct SendVoiceRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Voice note reference
    pub voice: InputFile,
    /// Duration in seconds
    pub duration: Option<i64>,
    /// Shared send options
    pub options: MediaOptions,
}

impl SendVoiceRequest {
    /// Create a new voice request
    pub fn new(chat_id: impl Into<ChatId>, voice: InputFile) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice,
            duration: None,
            options: MediaOptions::default(),
        }
    }

    media_option_setters!();

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add_opt_int("duration", self.duration);
        self.options.write_params(&mut params)?;
        Ok(params)
    }
}

/// Request to send a media group (album)
#[derive(Debug, Clone)]
pub struct SendMediaGroupRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Items, 2-10 descriptors
    pub media: Vec<InputMedia>,
    /// Deliver silently
    pub disable_notification: bool,
    /// Protect from forwarding and saving
    pub protect_content: bool,
    /// Message to reply to
    pub reply_to_message_id: Option<i64>,
}

impl SendMediaGroupRequest {
    /// Create a new media group request
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media,
            disable_notification: false,
            protect_content: false,
            reply_to_message_id: None,
        }
    }

    /// Deliver silently
    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = disable;
        self
    }

    /// Reply to a message
    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }

    pub(crate) fn validate(&self) -> TelegramResult<()> {
        if !(2..=10).contains(&self.media.len()) {
            return Err(ValidationError::OutOfRange {
                field: "media",
                message: format!("must hold 2-10 items, got {}", self.media.len()),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_params_exclude_file_field() {
        let params = SendPhotoRequest::new(1234, InputFile::url("https://example.com/a.png"))
            .caption("look")
            .to_params()
            .unwrap();

        assert_eq!(params.get("chat_id"), Some("1234"));
        assert_eq!(params.get("caption"), Some("look"));
        // The file reference itself is placed by the service dispatch.
        assert!(!params.contains_key("photo"));
    }

    #[test]
    fn test_media_group_size_bounds() {
        let one = SendMediaGroupRequest::new(
            1234,
            vec![InputMedia::Photo(crate::media::InputMediaPhoto::new(
                InputFile::file_id("a"),
            ))],
        );
        assert!(one.validate().is_err());

        let two = SendMediaGroupRequest::new(
            1234,
            vec![
                InputMedia::Photo(crate::media::InputMediaPhoto::new(InputFile::file_id("a"))),
                InputMedia::Photo(crate::media::InputMediaPhoto::new(InputFile::file_id("b"))),
            ],
        );
        assert!(two.validate().is_ok());
    }
}
