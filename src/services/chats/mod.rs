//! Chats service for the Bot API.
//!
//! Chat lookup, membership management and chat administration.

use crate::errors::{TelegramResult, ValidationError};
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::{Chat, ChatId, ChatMember};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Request to ban a member
#[derive(Debug, Clone)]
pub struct BanChatMemberRequest {
    /// Target chat
    pub chat_id: ChatId,
    /// User to ban
    pub user_id: i64,
    /// Unix time the ban expires; permanent when unset
    pub until_date: Option<i64>,
    /// Also delete the member's messages
    pub revoke_messages: bool,
}

impl BanChatMemberRequest {
    /// Create a new ban request
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
            revoke_messages: false,
        }
    }

    /// Expire the ban at the given unix time
    pub fn until(mut self, date: i64) -> Self {
        self.until_date = Some(date);
        self
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.add("chat_id", self.chat_id.as_wire());
        params.add("user_id", self.user_id.to_string());
        params.add_opt_int("until_date", self.until_date);
        params.add_bool("revoke_messages", self.revoke_messages);
        params
    }
}

/// Trait for chats service operations
#[async_trait]
pub trait ChatsServiceTrait: Send + Sync {
    /// Get up-to-date information about a chat
    async fn get_chat(&self, chat_id: ChatId) -> TelegramResult<Chat>;

    /// Leave a group, supergroup or channel
    async fn leave_chat(&self, chat_id: ChatId) -> TelegramResult<bool>;

    /// Get membership information about one user
    async fn get_chat_member(&self, chat_id: ChatId, user_id: i64) -> TelegramResult<ChatMember>;

    /// Count chat members
    async fn get_chat_member_count(&self, chat_id: ChatId) -> TelegramResult<i64>;

    /// Ban a member
    async fn ban_chat_member(&self, request: BanChatMemberRequest) -> TelegramResult<bool>;

    /// Lift a ban
    async fn unban_chat_member(
        &self,
        chat_id: ChatId,
        user_id: i64,
        only_if_banned: bool,
    ) -> TelegramResult<bool>;

    /// Change the chat title
    async fn set_chat_title(&self, chat_id: ChatId, title: &str) -> TelegramResult<bool>;
}

/// Chats service implementation
#[derive(Clone)]
pub struct ChatsService {
    transport: Arc<dyn HttpTransport>,
}

impl ChatsService {
    /// Create a new chats service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    fn chat_params(chat_id: &ChatId) -> Params {
        let mut params = Params::new();
        params.add("chat_id", chat_id.as_wire());
        params
    }
}

#[async_trait]
impl ChatsServiceTrait for ChatsService {
    #[instrument(skip(self), fields(chat_id = %chat_id))]
    async fn get_chat(&self, chat_id: ChatId) -> TelegramResult<Chat> {
        self.transport
            .send_form("getChat", Self::chat_params(&chat_id))
            .await?
            .decode()
    }

    #[instrument(skip(self), fields(chat_id = %chat_id))]
    async fn leave_chat(&self, chat_id: ChatId) -> TelegramResult<bool> {
        self.transport
            .send_form("leaveChat", Self::chat_params(&chat_id))
            .await?
            .decode()
    }

    #[instrument(skip(self), fields(chat_id = %chat_id, user_id = user_id))]
    async fn get_chat_member(&self, chat_id: ChatId, user_id: i64) -> TelegramResult<ChatMember> {
        let mut params = Self::chat_params(&chat_id);
        params.add("user_id", user_id.to_string());
        self.transport
            .send_form("getChatMember", params)
            .await?
            .decode()
    }

    #[instrument(skip(self), fields(chat_id = %chat_id))]
    async fn get_chat_member_count(&self, chat_id: ChatId) -> TelegramResult<i64> {
        self.transport
            .send_form("getChatMemberCount", Self::chat_params(&chat_id))
            .await?
            .decode()
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, user_id = request.user_id))]
    async fn ban_chat_member(&self, request: BanChatMemberRequest) -> TelegramResult<bool> {
        self.transport
            .send_form("banChatMember", request.to_params())
            .await?
            .decode()
    }

    #[instrument(skip(self), fields(chat_id = %chat_id, user_id = user_id))]
    async fn unban_chat_member(
        &self,
        chat_id: ChatId,
        user_id: i64,
        only_if_banned: bool,
    ) -> TelegramResult<bool> {
        let mut params = Self::chat_params(&chat_id);
        params.add("user_id", user_id.to_string());
        params.add_bool("only_if_banned", only_if_banned);
        self.transport
            .send_form("unbanChatMember", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, title), fields(chat_id = %chat_id))]
    async fn set_chat_title(&self, chat_id: ChatId, title: &str) -> TelegramResult<bool> {
        if title.is_empty() {
            return Err(ValidationError::MissingField { field: "title" }.into());
        }
        let mut params = Self::chat_params(&chat_id);
        params.add("title", title);
        self.transport
            .send_form("setChatTitle", params)
            .await?
            .decode()
    }
}

impl std::fmt::Debug for ChatsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatsService").finish()
    }
}
