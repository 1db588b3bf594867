//! Updates service: the long-poll fetch operation.

use crate::errors::{TelegramResult, ValidationError};
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::Update;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Request to fetch pending updates
#[derive(Debug, Clone, Default)]
pub struct GetUpdatesRequest {
    /// Identifier of the first update to return; zero means "from the
    /// earliest unconfirmed", negative values index from the end
    pub offset: i64,
    /// Page size, 1-100; zero falls back to the server default
    pub limit: i64,
    /// Long-poll wait in seconds; zero means short polling
    pub timeout: i64,
    /// Update kinds to receive
    pub allowed_updates: Option<Vec<String>>,
}

impl GetUpdatesRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset cursor
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the page size
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the long-poll wait
    pub fn timeout(mut self, timeout: i64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Restrict the update kinds to receive
    pub fn allowed_updates(mut self, kinds: Vec<String>) -> Self {
        self.allowed_updates = Some(kinds);
        self
    }

    fn validate(&self) -> TelegramResult<()> {
        if !(0..=100).contains(&self.limit) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                message: format!("must be 1-100, got {}", self.limit),
            }
            .into());
        }
        Ok(())
    }

    pub(crate) fn to_params(&self) -> TelegramResult<Params> {
        self.validate()?;
        let mut params = Params::new();
        params.add_non_zero_int("offset", self.offset);
        params.add_non_zero_int("limit", self.limit);
        params.add_non_zero_int("timeout", self.timeout);
        params.add_json("allowed_updates", self.allowed_updates.as_ref())?;
        Ok(params)
    }
}

/// Trait for update fetching
#[async_trait]
pub trait UpdatesServiceTrait: Send + Sync {
    /// Fetch pending updates via long polling
    async fn get_updates(&self, request: GetUpdatesRequest) -> TelegramResult<Vec<Update>>;
}

/// Updates service implementation
#[derive(Clone)]
pub struct UpdatesService {
    transport: Arc<dyn HttpTransport>,
}

impl UpdatesService {
    /// Create a new updates service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl UpdatesServiceTrait for UpdatesService {
    #[instrument(skip(self), fields(offset = request.offset, limit = request.limit))]
    async fn get_updates(&self, request: GetUpdatesRequest) -> TelegramResult<Vec<Update>> {
        let params = request.to_params()?;
        self.transport
            .send_form("getUpdates", params)
            .await?
            .decode()
    }
}

impl std::fmt::Debug for UpdatesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdatesService").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_skip_zero_values() {
        let params = GetUpdatesRequest::new().to_params().unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_params_carry_cursor() {
        let params = GetUpdatesRequest::new()
            .offset(1002)
            .limit(50)
            .timeout(30)
            .to_params()
            .unwrap();

        assert_eq!(params.get("offset"), Some("1002"));
        assert_eq!(params.get("limit"), Some("50"));
        assert_eq!(params.get("timeout"), Some("30"));
    }

    #[test]
    fn test_limit_out_of_range_rejected() {
        let result = GetUpdatesRequest::new().limit(250).to_params();
        assert!(result.is_err());
    }

    #[test]
    fn test_allowed_updates_json_encoded() {
        let params = GetUpdatesRequest::new()
            .allowed_updates(vec!["message".to_string(), "callback_query".to_string()])
            .to_params()
            .unwrap();
        assert_eq!(
            params.get("allowed_updates"),
            Some(r#"["message","callback_query"]"#)
        );
    }
}
