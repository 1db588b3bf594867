//! Media service for the Bot API.
//!
//! Sending photos, audio, documents, video, animations, voice notes and
//! media groups. Each operation picks its wire shape per file reference:
//! plain string references go out url-encoded, upload-bearing references
//! switch the request to multipart.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
