//! Messages service for the Bot API.
//!
//! Sending, forwarding, copying, editing and deleting text messages,
//! plus chat actions.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
