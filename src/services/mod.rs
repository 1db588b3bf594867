//! Service implementations for Bot API endpoints.
//!
//! Each service module provides methods for one category of endpoints.
//! Every operation follows the same shape: validate the request, flatten
//! it into wire parameters, send through the shared transport, and
//! decode the envelope result.

pub mod bot;
pub mod chats;
pub mod files;
pub mod media;
pub mod messages;
pub mod updates;
pub mod webhooks;

pub use bot::BotService;
pub use chats::ChatsService;
pub use files::FilesService;
pub use media::MediaService;
pub use messages::MessagesService;
pub use updates::UpdatesService;
pub use webhooks::WebhooksService;
