//! Messages service implementation.

use super::*;
use crate::errors::TelegramResult;
use crate::transport::HttpTransport;
use crate::types::{Message, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for messages service operations
#[async_trait]
pub trait MessagesServiceTrait: Send + Sync {
    /// Send a text message
    async fn send_message(&self, request: SendMessageRequest) -> TelegramResult<Message>;

    /// Forward a message
    async fn forward_message(&self, request: ForwardMessageRequest) -> TelegramResult<Message>;

    /// Copy a message without a forward header
    async fn copy_message(&self, request: CopyMessageRequest) -> TelegramResult<MessageId>;

    /// Edit the text of an existing message
    async fn edit_message_text(&self, request: EditMessageTextRequest) -> TelegramResult<Message>;

    /// Edit the caption of an existing message
    async fn edit_message_caption(
        &self,
        request: EditMessageCaptionRequest,
    ) -> TelegramResult<Message>;

    /// Delete a message
    async fn delete_message(&self, request: DeleteMessageRequest) -> TelegramResult<bool>;

    /// Broadcast a chat action while preparing a response
    async fn send_chat_action(&self, request: SendChatActionRequest) -> TelegramResult<bool>;
}

/// Messages service implementation
#[derive(Clone)]
pub struct MessagesService {
    transport: Arc<dyn HttpTransport>,
}

impl MessagesService {
    /// Create a new messages service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl MessagesServiceTrait for MessagesService {
    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_message(&self, request: SendMessageRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.transport
            .send_form("sendMessage", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, message_id = request.message_id))]
    async fn forward_message(&self, request: ForwardMessageRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.transport
            .send_form("forwardMessage", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, message_id = request.message_id))]
    async fn copy_message(&self, request: CopyMessageRequest) -> TelegramResult<MessageId> {
        let params = request.to_params()?;
        self.transport
            .send_form("copyMessage", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, request))]
    async fn edit_message_text(&self, request: EditMessageTextRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.transport
            .send_form("editMessageText", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, request))]
    async fn edit_message_caption(
        &self,
        request: EditMessageCaptionRequest,
    ) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.transport
            .send_form("editMessageCaption", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, message_id = request.message_id))]
    async fn delete_message(&self, request: DeleteMessageRequest) -> TelegramResult<bool> {
        let params = request.to_params()?;
        self.transport
            .send_form("deleteMessage", params)
            .await?
            .decode()
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_chat_action(&self, request: SendChatActionRequest) -> TelegramResult<bool> {
        let params = request.to_params()?;
        self.transport
            .send_form("sendChatAction", params)
            .await?
            .decode()
    }
}

impl std::fmt::Debug for MessagesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagesService").finish()
    }
}
