//! Telegram Bot API Client
//!
//! Production-ready Telegram Bot API client with:
//! - Typed request/response catalog (messages, media, chats, files)
//! - Url-encoded and streamed multipart transport
//! - Long-polling update pump with configurable retry policy
//! - Webhook management and inbound webhook decoding
//! - Structured observability via `tracing`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use telegram_client::services::messages::{MessagesServiceTrait, SendMessageRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client from the environment
//!     let client = telegram_client::create_client_from_env()?;
//!
//!     // Send a message
//!     let message = client
//!         .messages()
//!         .send_message(SendMessageRequest::new(123456789, "Hello!"))
//!         .await?;
//!
//!     println!("Sent message {}", message.message_id);
//!     Ok(())
//! }
//! ```
//!
//! # Receiving updates
//!
//! Either start the long-polling pump:
//!
//! ```rust,no_run
//! # async fn demo(client: telegram_client::TelegramClientImpl) {
//! use telegram_client::polling::PollingOptions;
//!
//! let (pump, mut updates) = client.start_polling(PollingOptions::default());
//! while let Some(update) = updates.recv().await {
//!     println!("update {}", update.update_id);
//! }
//! pump.stop().await;
//! # }
//! ```
//!
//! or decode webhook pushes with [`webhooks::parse_update`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod errors;
pub mod files;
pub mod media;
pub mod params;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Update delivery
pub mod polling;
pub mod webhooks;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{TelegramClient, TelegramClientImpl};
pub use config::{TelegramConfig, TelegramConfigBuilder};
pub use errors::{TelegramError, TelegramResult};
pub use files::InputFile;

/// Default base URL for the Bot API
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Create a Telegram client with the given configuration
pub fn create_client(config: TelegramConfig) -> TelegramResult<TelegramClientImpl> {
    TelegramClientImpl::new(config)
}

/// Create a Telegram client from environment variables
///
/// Reads:
/// - `TELEGRAM_BOT_TOKEN` - bot token (required)
/// - `TELEGRAM_BASE_URL` - alternative API server
/// - `TELEGRAM_TIMEOUT_SECS` - request timeout
/// - `TELEGRAM_SECRET_TOKEN` - webhook secret token
/// - `TELEGRAM_PROXY` - proxy URL
pub fn create_client_from_env() -> TelegramResult<TelegramClientImpl> {
    let config = TelegramConfig::from_env()?;
    create_client(config)
}
