//! Update types delivered via long polling or webhook push.

use super::chat::{Chat, ChatMember};
use super::message::Message;
use super::user::User;
use serde::{Deserialize, Serialize};

/// One event delivered by the remote service.
///
/// At most one of the optional payloads is populated per update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    /// Monotonically increasing identifier; the long-poll cursor
    pub update_id: i64,
    /// New incoming message
    #[serde(default)]
    pub message: Option<Message>,
    /// New version of an edited message
    #[serde(default)]
    pub edited_message: Option<Message>,
    /// New channel post
    #[serde(default)]
    pub channel_post: Option<Message>,
    /// New version of an edited channel post
    #[serde(default)]
    pub edited_channel_post: Option<Message>,
    /// New incoming callback query
    #[serde(default)]
    pub callback_query: Option<CallbackQuery>,
    /// New incoming inline query
    #[serde(default)]
    pub inline_query: Option<InlineQuery>,
    /// Inline result chosen by a user
    #[serde(default)]
    pub chosen_inline_result: Option<ChosenInlineResult>,
    /// New poll state
    #[serde(default)]
    pub poll: Option<Poll>,
    /// A user changed their answer in a non-anonymous poll
    #[serde(default)]
    pub poll_answer: Option<PollAnswer>,
    /// The bot's own membership changed
    #[serde(default)]
    pub my_chat_member: Option<ChatMemberUpdated>,
    /// A member's status changed in a chat the bot administrates
    #[serde(default)]
    pub chat_member: Option<ChatMemberUpdated>,
    /// A join request was sent to a chat the bot administrates
    #[serde(default)]
    pub chat_join_request: Option<ChatJoinRequest>,
}

impl Update {
    /// The message payload regardless of which message-bearing field
    /// carried it
    pub fn effective_message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

/// A callback query from an inline keyboard button
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Unique query id
    pub id: String,
    /// The user who pressed the button
    pub from: User,
    /// The message the button was attached to
    #[serde(default)]
    pub message: Option<Message>,
    /// Identifier of the inline-mode message, if any
    #[serde(default)]
    pub inline_message_id: Option<String>,
    /// Global identifier for the chat the query came from
    #[serde(default)]
    pub chat_instance: Option<String>,
    /// Data from the pressed button
    #[serde(default)]
    pub data: Option<String>,
}

/// An incoming inline query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineQuery {
    /// Unique query id
    pub id: String,
    /// The querying user
    pub from: User,
    /// Query text, up to 256 characters
    pub query: String,
    /// Pagination offset controlled by the bot
    pub offset: String,
}

/// An inline result a user picked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    /// Id of the chosen result
    pub result_id: String,
    /// The choosing user
    pub from: User,
    /// The query that produced the result
    pub query: String,
    /// Identifier of the sent inline message, if any
    #[serde(default)]
    pub inline_message_id: Option<String>,
}

/// A native poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    /// Unique poll id
    pub id: String,
    /// Poll question
    pub question: String,
    /// Answer options
    pub options: Vec<PollOption>,
    /// Total vote count
    pub total_voter_count: i32,
    /// Whether the poll is closed
    pub is_closed: bool,
    /// Whether votes are anonymous
    pub is_anonymous: bool,
}

/// One answer option of a poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    /// Option text
    pub text: String,
    /// Votes for this option
    pub voter_count: i32,
}

/// A vote change in a non-anonymous poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollAnswer {
    /// The poll the answer belongs to
    pub poll_id: String,
    /// The answering user
    pub user: User,
    /// Chosen option indexes; empty on retraction
    #[serde(default)]
    pub option_ids: Vec<i32>,
}

/// A membership status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    /// The chat the change happened in
    pub chat: Chat,
    /// The user who triggered the change
    pub from: User,
    /// Unix time of the change
    pub date: i64,
    /// Previous membership
    pub old_chat_member: ChatMember,
    /// New membership
    pub new_chat_member: ChatMember,
}

/// A pending request to join a chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatJoinRequest {
    /// The chat the request targets
    pub chat: Chat,
    /// The requesting user
    pub from: User,
    /// Unix time of the request
    pub date: i64,
    /// Bio of the requesting user
    #[serde(default)]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_update_decodes_message_payload() {
        let update: Update = serde_json::from_str(fixtures::UPDATE_WITH_MESSAGE).unwrap();
        assert_eq!(update.update_id, 1001);

        let message = update.effective_message().expect("message payload");
        assert_eq!(message.text.as_deref(), Some("hi"));
        assert!(update.callback_query.is_none());
    }

    #[test]
    fn test_update_decodes_callback_query() {
        let update: Update = serde_json::from_str(fixtures::UPDATE_WITH_CALLBACK).unwrap();
        assert!(update.message.is_none());

        let query = update.callback_query.expect("callback payload");
        assert_eq!(query.data.as_deref(), Some("yes"));
    }
}
