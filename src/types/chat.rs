//! Chat-related types for the Telegram Bot API.

use super::user::User;
use serde::{Deserialize, Serialize};

/// A conversation the bot takes part in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    /// Unique chat id
    pub id: i64,
    /// Chat kind (`private`, `group`, `supergroup`, `channel`)
    #[serde(rename = "type")]
    pub chat_type: String,
    /// Title for groups, supergroups and channels
    #[serde(default)]
    pub title: Option<String>,
    /// Username for private chats and public channels
    #[serde(default)]
    pub username: Option<String>,
    /// First name for private chats
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name for private chats
    #[serde(default)]
    pub last_name: Option<String>,
    /// Chat description, returned by `getChat` only
    #[serde(default)]
    pub description: Option<String>,
    /// Primary invite link, returned by `getChat` only
    #[serde(default)]
    pub invite_link: Option<String>,
}

impl Chat {
    /// Whether this is a one-on-one conversation
    pub fn is_private(&self) -> bool {
        self.chat_type == "private"
    }

    /// Whether this is a group or supergroup
    pub fn is_group(&self) -> bool {
        self.chat_type == "group" || self.chat_type == "supergroup"
    }

    /// Whether this is a channel
    pub fn is_channel(&self) -> bool {
        self.chat_type == "channel"
    }
}

/// Membership information about one user in one chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMember {
    /// Membership status (`creator`, `administrator`, `member`,
    /// `restricted`, `left`, `kicked`)
    pub status: String,
    /// The member
    pub user: User,
    /// Unix time restrictions or the ban expire, for restricted/kicked
    #[serde(default)]
    pub until_date: Option<i64>,
    /// Custom admin title
    #[serde(default)]
    pub custom_title: Option<String>,
}

impl ChatMember {
    /// Whether the member has left or was removed
    pub fn is_gone(&self) -> bool {
        self.status == "left" || self.status == "kicked"
    }

    /// Whether the member administrates the chat
    pub fn is_admin(&self) -> bool {
        self.status == "creator" || self.status == "administrator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_kind_helpers() {
        let chat: Chat =
            serde_json::from_str(r#"{"id":1234,"type":"private","first_name":"Bob"}"#).unwrap();
        assert!(chat.is_private());
        assert!(!chat.is_group());
        assert!(!chat.is_channel());
    }

    #[test]
    fn test_chat_member_status_helpers() {
        let member: ChatMember = serde_json::from_str(
            r#"{"status":"kicked","user":{"id":7,"is_bot":false,"first_name":"Eve"},"until_date":0}"#,
        )
        .unwrap();
        assert!(member.is_gone());
        assert!(!member.is_admin());
    }
}
