//! Files service for the Bot API.
//!
//! Resolves file ids into download paths.

use crate::errors::{TelegramResult, ValidationError};
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::File;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for files service operations
#[async_trait]
pub trait FilesServiceTrait: Send + Sync {
    /// Get file metadata, including the download path
    async fn get_file(&self, file_id: &str) -> TelegramResult<File>;
}

/// Files service implementation
#[derive(Clone)]
pub struct FilesService {
    transport: Arc<dyn HttpTransport>,
}

impl FilesService {
    /// Create a new files service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl FilesServiceTrait for FilesService {
    #[instrument(skip(self))]
    async fn get_file(&self, file_id: &str) -> TelegramResult<File> {
        if file_id.is_empty() {
            return Err(ValidationError::MissingField { field: "file_id" }.into());
        }
        let mut params = Params::new();
        params.add("file_id", file_id);
        self.transport.send_form("getFile", params).await?.decode()
    }
}

impl std::fmt::Debug for FilesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilesService").finish()
    }
}
