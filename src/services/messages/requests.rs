//! Request types for the messages service.

use crate::errors::{TelegramResult, ValidationError};
use crate::params::Params;
use crate::types::{ChatAction, ChatId, MessageEntity, ParseMode, ReplyMarkup};

/// Request to send a text message
#[derive(Debug, Clone)]
pub struct SendMessageRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Message text, 1-4096 characters
    pub text: String,
    /// Text formatting mode
    pub parse_mode: Option<ParseMode>,
    /// Explicit entities instead of parse mode
    pub entities: Option<Vec<MessageEntity>>,
    /// Disable link previews
    pub disable_web_page_preview: bool,
    /// Deliver silently
    pub disable_notification: bool,
    /// Protect from forwarding and saving
    pub protect_content: bool,
    /// Message to reply to
    pub reply_to_message_id: Option<i64>,
    /// Send even when the replied-to message is gone
    pub allow_sending_without_reply: bool,
    /// Additional interface options
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendMessageRequest {
    /// Create a new message request
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: false,
            disable_notification: false,
            protect_content: false,
            reply_to_message_id: None,
            allow_sending_without_reply: false,
            reply_markup: None,
        }
    }

    /// Set the formatting mode
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    /// Set explicit entities
    pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    /// Disable link previews
    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = disable;
        self
    }

    /// Deliver silently
    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = disable;
        self
    }

    /// Protect from forwarding and saving
    pub fn protect_content(mut self, protect: bool) -> Self {
        self.protect_content = protect;
        self
    }

    /// Reply to a message
    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = Some(message_id);
        self
    }

    /// Attach reply markup
    pub fn reply_markup(mut self, markup: ReplyMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        if self.text.is_empty() {
            return Err(ValidationError::MissingField { field: "text" }.into());
        }

        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add("text", self.text.clone());
        if let Some(mode) = self.parse_mode {
            params.add("parse_mode", mode.as_str());
        }
        params.add_json("entities", self.entities.as_ref())?;
        params.add_bool("disable_web_page_preview", self.disable_web_page_preview);
        params.add_bool("disable_notification", self.disable_notification);
        params.add_bool("protect_content", self.protect_content);
        params.add_opt_int("reply_to_message_id", self.reply_to_message_id);
        params.add_bool(
            "allow_sending_without_reply",
            self.allow_sending_without_reply,
        );
        params.add_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(params)
    }
}

/// Request to forward a message
#[derive(Debug, Clone)]
pub struct ForwardMessageRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Chat the message originates from
    pub from_chat_id: ChatId,
    /// Message to forward
    pub message_id: i64,
    /// Deliver silently
    pub disable_notification: bool,
    /// Protect from forwarding and saving
    pub protect_content: bool,
}

impl ForwardMessageRequest {
    /// Create a new forward request
    pub fn new(
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: false,
            protect_content: false,
        }
    }

    /// Deliver silently
    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = disable;
        self
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add("from_chat_id", self.from_chat_id.as_wire());
        params.add("message_id", self.message_id.to_string());
        params.add_bool("disable_notification", self.disable_notification);
        params.add_bool("protect_content", self.protect_content);
        Ok(params)
    }
}

/// Request to copy a message without a forward header
#[derive(Debug, Clone)]
pub struct CopyMessageRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Chat the message originates from
    pub from_chat_id: ChatId,
    /// Message to copy
    pub message_id: i64,
    /// Replacement caption for media messages
    pub caption: Option<String>,
    /// Caption formatting mode
    pub parse_mode: Option<ParseMode>,
    /// Deliver silently
    pub disable_notification: bool,
    /// Message to reply to
    pub reply_to_message_id: Option<i64>,
    /// Additional interface options
    pub reply_markup: Option<ReplyMarkup>,
}

impl CopyMessageRequest {
    /// Create a new copy request
    pub fn new(
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i64,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            caption: None,
            parse_mode: None,
            disable_notification: false,
            reply_to_message_id: None,
            reply_markup: None,
        }
    }

    /// Replace the caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add("from_chat_id", self.from_chat_id.as_wire());
        params.add("message_id", self.message_id.to_string());
        if let Some(caption) = &self.caption {
            params.add_non_empty("caption", caption);
        }
        if let Some(mode) = self.parse_mode {
            params.add("parse_mode", mode.as_str());
        }
        params.add_bool("disable_notification", self.disable_notification);
        params.add_opt_int("reply_to_message_id", self.reply_to_message_id);
        params.add_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(params)
    }
}

/// Request to edit the text of an existing message.
///
/// Addresses either a chat message (`chat_id` + `message_id`) or an
/// inline-mode message (`inline_message_id`).
#[derive(Debug, Clone)]
pub struct EditMessageTextRequest {
    /// Target chat, for chat messages
    pub chat_id: Option<ChatId>,
    /// Message id, for chat messages
    pub message_id: Option<i64>,
    /// Inline message id, for inline-mode messages
    pub inline_message_id: Option<String>,
    /// New text
    pub text: String,
    /// Text formatting mode
    pub parse_mode: Option<ParseMode>,
    /// Disable link previews
    pub disable_web_page_preview: bool,
    /// Replacement inline keyboard
    pub reply_markup: Option<ReplyMarkup>,
}

impl EditMessageTextRequest {
    /// Edit a chat message
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            reply_markup: None,
        }
    }

    /// Edit an inline-mode message
    pub fn inline(inline_message_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: None,
            message_id: None,
            inline_message_id: Some(inline_message_id.into()),
            text: text.into(),
            parse_mode: None,
            disable_web_page_preview: false,
            reply_markup: None,
        }
    }

    /// Set the formatting mode
    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        if self.text.is_empty() {
            return Err(ValidationError::MissingField { field: "text" }.into());
        }
        if self.inline_message_id.is_none() && (self.chat_id.is_none() || self.message_id.is_none())
        {
            return Err(ValidationError::MissingField {
                field: "chat_id and message_id, or inline_message_id",
            }
            .into());
        }

        let mut params = Params::new();
        if let Some(chat_id) = &self.chat_id {
            params.add("chat_id", chat_id.as_wire());
        }
        params.add_opt_int("message_id", self.message_id);
        if let Some(inline_id) = &self.inline_message_id {
            params.add_non_empty("inline_message_id", inline_id);
        }
        params.add("text", self.text.clone());
        if let Some(mode) = self.parse_mode {
            params.add("parse_mode", mode.as_str());
        }
        params.add_bool("disable_web_page_preview", self.disable_web_page_preview);
        params.add_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(params)
    }
}

/// Request to edit the caption of an existing message
#[derive(Debug, Clone)]
pub struct EditMessageCaptionRequest {
    /// Target chat, for chat messages
    pub chat_id: Option<ChatId>,
    /// Message id, for chat messages
    pub message_id: Option<i64>,
    /// Inline message id, for inline-mode messages
    pub inline_message_id: Option<String>,
    /// New caption; empty removes the caption
    pub caption: String,
    /// Caption formatting mode
    pub parse_mode: Option<ParseMode>,
    /// Replacement inline keyboard
    pub reply_markup: Option<ReplyMarkup>,
}

impl EditMessageCaptionRequest {
    /// Edit a chat message caption
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64, caption: impl Into<String>) -> Self {
        Self {
            chat_id: Some(chat_id.into()),
            message_id: Some(message_id),
            inline_message_id: None,
            caption: caption.into(),
            parse_mode: None,
            reply_markup: None,
        }
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        if self.inline_message_id.is_none() && (self.chat_id.is_none() || self.message_id.is_none())
        {
            return Err(ValidationError::MissingField {
                field: "chat_id and message_id, or inline_message_id",
            }
            .into());
        }

        let mut params = Params::new();
        if let Some(chat_id) = &self.chat_id {
            params.add("chat_id", chat_id.as_wire());
        }
        params.add_opt_int("message_id", self.message_id);
        if let Some(inline_id) = &self.inline_message_id {
            params.add_non_empty("inline_message_id", inline_id);
        }
        params.add("caption", self.caption.clone());
        if let Some(mode) = self.parse_mode {
            params.add("parse_mode", mode.as_str());
        }
        params.add_json("reply_markup", self.reply_markup.as_ref())?;
        Ok(params)
    }
}

/// Request to delete a message
#[derive(Debug, Clone)]
pub struct DeleteMessageRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// Message to delete
    pub message_id: i64,
}

impl DeleteMessageRequest {
    /// Create a new delete request
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add("message_id", self.message_id.to_string());
        Ok(params)
    }
}

/// Request to broadcast a chat action
#[derive(Debug, Clone)]
pub struct SendChatActionRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// The action to show
    pub action: ChatAction,
}

impl SendChatActionRequest {
    /// Create a new chat action request
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self {
            chat_id: chat_id.into(),
            action,
        }
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add("action", self.action.as_str());
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InlineKeyboardButton, InlineKeyboardMarkup};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_send_message_params() {
        let params = SendMessageRequest::new(1234, "hi")
            .parse_mode(ParseMode::Html)
            .disable_notification(true)
            .reply_to(0)
            .to_params()
            .unwrap();

        assert_eq!(params.get("chat_id"), Some("1234"));
        assert_eq!(params.get("text"), Some("hi"));
        assert_eq!(params.get("parse_mode"), Some("HTML"));
        assert_eq!(params.get("disable_notification"), Some("true"));
        // Explicit zero survives: reply targets use optional fields.
        assert_eq!(params.get("reply_to_message_id"), Some("0"));
        assert!(!params.contains_key("protect_content"));
    }

    #[test]
    fn test_send_message_username_target() {
        let params = SendMessageRequest::new("channelname", "hi")
            .to_params()
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("@channelname"));
    }

    #[test]
    fn test_send_message_requires_text() {
        let result = SendMessageRequest::new(1234, "").to_params();
        assert!(result.is_err());
    }

    #[test]
    fn test_send_message_markup_json() {
        let markup = ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(vec![vec![
            InlineKeyboardButton::callback("Yes", "yes"),
        ]]));
        let params = SendMessageRequest::new(1234, "hi")
            .reply_markup(markup)
            .to_params()
            .unwrap();

        let encoded = params.get("reply_markup").unwrap();
        assert!(encoded.contains(r#""callback_data":"yes""#));
    }

    #[test]
    fn test_forward_message_params() {
        let params = ForwardMessageRequest::new(1234, "@source", 42)
            .to_params()
            .unwrap();
        assert_eq!(params.get("chat_id"), Some("1234"));
        assert_eq!(params.get("from_chat_id"), Some("@source"));
        assert_eq!(params.get("message_id"), Some("42"));
    }

    #[test]
    fn test_edit_text_requires_target() {
        let request = EditMessageTextRequest {
            chat_id: None,
            message_id: None,
            inline_message_id: None,
            text: "new".to_string(),
            parse_mode: None,
            disable_web_page_preview: false,
            reply_markup: None,
        };
        assert!(request.to_params().is_err());

        let inline = EditMessageTextRequest::inline("abc", "new");
        let params = inline.to_params().unwrap();
        assert_eq!(params.get("inline_message_id"), Some("abc"));
        assert!(!params.contains_key("chat_id"));
    }

    #[test]
    fn test_chat_action_params() {
        let params = SendChatActionRequest::new(1234, ChatAction::UploadPhoto)
            .to_params()
            .unwrap();
        assert_eq!(params.get("action"), Some("upload_photo"));
    }
}
