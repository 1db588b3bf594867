//! Tests for the Telegram Bot API client.

#[cfg(test)]
mod integration_tests;

#[cfg(test)]
mod services_tests;

#[cfg(test)]
mod webhook_tests;
