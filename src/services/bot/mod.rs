//! Bot identity service.

use crate::errors::TelegramResult;
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::User;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for bot identity operations
#[async_trait]
pub trait BotServiceTrait: Send + Sync {
    /// Get basic information about the bot account
    async fn get_me(&self) -> TelegramResult<User>;

    /// Log out from the cloud API server before moving to a local one
    async fn log_out(&self) -> TelegramResult<bool>;

    /// Close the bot instance before moving it between servers
    async fn close(&self) -> TelegramResult<bool>;
}

/// Bot identity service implementation
#[derive(Clone)]
pub struct BotService {
    transport: Arc<dyn HttpTransport>,
}

impl BotService {
    /// Create a new bot service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl BotServiceTrait for BotService {
    #[instrument(skip(self))]
    async fn get_me(&self) -> TelegramResult<User> {
        self.transport
            .send_form("getMe", Params::new())
            .await?
            .decode()
    }

    #[instrument(skip(self))]
    async fn log_out(&self) -> TelegramResult<bool> {
        self.transport
            .send_form("logOut", Params::new())
            .await?
            .decode()
    }

    #[instrument(skip(self))]
    async fn close(&self) -> TelegramResult<bool> {
        self.transport
            .send_form("close", Params::new())
            .await?
            .decode()
    }
}

impl std::fmt::Debug for BotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotService").finish()
    }
}
