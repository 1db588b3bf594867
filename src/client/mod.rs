//! Telegram client implementation.
//!
//! The main entry point for interacting with the Bot API. A client is an
//! explicitly owned value: hosts construct as many as they need and pass
//! them around; there is no process-wide session.

use crate::config::TelegramConfig;
use crate::errors::TelegramResult;
use crate::polling::{PollingOptions, UpdatesPump};
use crate::services::{
    BotService, ChatsService, FilesService, MediaService, MessagesService, UpdatesService,
    WebhooksService,
};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::Update;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Trait defining the Telegram client interface
pub trait TelegramClient: Send + Sync {
    /// Get the configuration
    fn config(&self) -> &TelegramConfig;

    /// Get the bot identity service
    fn bot(&self) -> &dyn crate::services::bot::BotServiceTrait;

    /// Get the messages service
    fn messages(&self) -> &dyn crate::services::messages::MessagesServiceTrait;

    /// Get the media service
    fn media(&self) -> &dyn crate::services::media::MediaServiceTrait;

    /// Get the updates service
    fn updates(&self) -> &dyn crate::services::updates::UpdatesServiceTrait;

    /// Get the webhook management service
    fn webhooks(&self) -> &dyn crate::services::webhooks::WebhooksServiceTrait;

    /// Get the chats service
    fn chats(&self) -> &dyn crate::services::chats::ChatsServiceTrait;

    /// Get the files service
    fn files(&self) -> &dyn crate::services::files::FilesServiceTrait;
}

/// Main Telegram client implementation
#[derive(Clone)]
pub struct TelegramClientImpl {
    config: Arc<TelegramConfig>,
    transport: Arc<dyn HttpTransport>,
    bot_service: BotService,
    messages_service: MessagesService,
    media_service: MediaService,
    updates_service: UpdatesService,
    webhooks_service: WebhooksService,
    chats_service: ChatsService,
    files_service: FilesService,
}

impl TelegramClientImpl {
    /// Create a new client with the given configuration
    pub fn new(config: TelegramConfig) -> TelegramResult<Self> {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new(config.clone())?);
        Ok(Self::build(config, transport))
    }

    /// Create a new client with a custom transport
    pub fn with_transport(config: TelegramConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::build(config, transport)
    }

    fn build(config: TelegramConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            config: Arc::new(config),
            bot_service: BotService::new(transport.clone()),
            messages_service: MessagesService::new(transport.clone()),
            media_service: MediaService::new(transport.clone()),
            updates_service: UpdatesService::new(transport.clone()),
            webhooks_service: WebhooksService::new(transport.clone()),
            chats_service: ChatsService::new(transport.clone()),
            files_service: FilesService::new(transport.clone()),
            transport,
        }
    }

    /// Get a reference to the HTTP transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Build the download URL for a file path returned by `getFile`
    pub fn file_download_url(&self, file_path: &str) -> String {
        self.config.file_url(file_path)
    }

    /// Start a long-polling pump feeding updates into a bounded channel.
    ///
    /// The returned handle owns the background task; stop it with
    /// [`UpdatesPump::stop`].
    pub fn start_polling(
        &self,
        options: PollingOptions,
    ) -> (UpdatesPump, mpsc::Receiver<Update>) {
        UpdatesPump::start(self.updates_service.clone(), options)
    }

    /// Get the bot identity service
    pub fn bot(&self) -> &BotService {
        &self.bot_service
    }

    /// Get the messages service
    pub fn messages(&self) -> &MessagesService {
        &self.messages_service
    }

    /// Get the media service
    pub fn media(&self) -> &MediaService {
        &self.media_service
    }

    /// Get the updates service
    pub fn updates(&self) -> &UpdatesService {
        &self.updates_service
    }

    /// Get the webhook management service
    pub fn webhooks(&self) -> &WebhooksService {
        &self.webhooks_service
    }

    /// Get the chats service
    pub fn chats(&self) -> &ChatsService {
        &self.chats_service
    }

    /// Get the files service
    pub fn files(&self) -> &FilesService {
        &self.files_service
    }
}

impl TelegramClient for TelegramClientImpl {
    fn config(&self) -> &TelegramConfig {
        &self.config
    }

    fn bot(&self) -> &dyn crate::services::bot::BotServiceTrait {
        &self.bot_service
    }

    fn messages(&self) -> &dyn crate::services::messages::MessagesServiceTrait {
        &self.messages_service
    }

    fn media(&self) -> &dyn crate::services::media::MediaServiceTrait {
        &self.media_service
    }

    fn updates(&self) -> &dyn crate::services::updates::UpdatesServiceTrait {
        &self.updates_service
    }

    fn webhooks(&self) -> &dyn crate::services::webhooks::WebhooksServiceTrait {
        &self.webhooks_service
    }

    fn chats(&self) -> &dyn crate::services::chats::ChatsServiceTrait {
        &self.chats_service
    }

    fn files(&self) -> &dyn crate::services::files::FilesServiceTrait {
        &self.files_service
    }
}

impl std::fmt::Debug for TelegramClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClientImpl")
            .field("config", &self.config)
            .finish()
    }
}
