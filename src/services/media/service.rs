//! Media service implementation.

use super::*;
use crate::errors::TelegramResult;
use crate::files::{InputFile, NamedFile};
use crate::media::prepare_media_group;
use crate::params::Params;
use crate::transport::HttpTransport;
use crate::types::Message;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for media service operations
#[async_trait]
pub trait MediaServiceTrait: Send + Sync {
    /// Send a photo
    async fn send_photo(&self, request: SendPhotoRequest) -> TelegramResult<Message>;

    /// Send an audio file
    async fn send_audio(&self, request: SendAudioRequest) -> TelegramResult<Message>;

    /// Send a general file
    async fn send_document(&self, request: SendDocumentRequest) -> TelegramResult<Message>;

    /// Send a video
    async fn send_video(&self, request: SendVideoRequest) -> TelegramResult<Message>;

    /// Send an animation
    async fn send_animation(&self, request: SendAnimationRequest) -> TelegramResult<Message>;

    /// Send a voice note
    async fn send_voice(&self, request: SendVoiceRequest) -> TelegramResult<Message>;

    /// Send a media group, 2-10 items delivered as an album
    async fn send_media_group(
        &self,
        request: SendMediaGroupRequest,
    ) -> TelegramResult<Vec<Message>>;
}

/// Media service implementation
#[derive(Clone)]
pub struct MediaService {
    transport: Arc<dyn HttpTransport>,
}

impl MediaService {
    /// Create a new media service
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Dispatch a single-file operation.
    ///
    /// String references stay in the url-encoded form; upload-bearing
    /// references switch the request to multipart, with the operation's
    /// own field name for the primary file and `thumbnail` for the
    /// optional thumbnail.
    async fn send_with_file(
        &self,
        endpoint: &str,
        field: &str,
        file: &InputFile,
        thumbnail: Option<&InputFile>,
        mut params: Params,
    ) -> TelegramResult<Message> {
        let mut files = Vec::new();

        if file.needs_upload() {
            files.push(NamedFile::new(field, file.clone()));
        } else {
            params.add(field, file.send_data()?);
        }

        if let Some(thumb) = thumbnail {
            if thumb.needs_upload() {
                files.push(NamedFile::new("thumbnail", thumb.clone()));
            } else {
                params.add("thumbnail", thumb.send_data()?);
            }
        }

        if files.is_empty() {
            self.transport.send_form(endpoint, params).await?.decode()
        } else {
            self.transport
                .send_multipart(endpoint, params, files)
                .await?
                .decode()
        }
    }
}

#[async_trait]
impl MediaServiceTrait for MediaService {
    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_photo(&self, request: SendPhotoRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.send_with_file("sendPhoto", "photo", &request.photo, None, params)
            .await
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_audio(&self, request: SendAudioRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.send_with_file(
            "sendAudio",
            "audio",
            &request.audio,
            request.thumbnail.as_ref(),
            params,
        )
        .await
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_document(&self, request: SendDocumentRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.send_with_file(
            "sendDocument",
            "document",
            &request.document,
            request.thumbnail.as_ref(),
            params,
        )
        .await
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_video(&self, request: SendVideoRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.send_with_file(
            "sendVideo",
            "video",
            &request.video,
            request.thumbnail.as_ref(),
            params,
        )
        .await
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_animation(&self, request: SendAnimationRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.send_with_file(
            "sendAnimation",
            "animation",
            &request.animation,
            request.thumbnail.as_ref(),
            params,
        )
        .await
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    async fn send_voice(&self, request: SendVoiceRequest) -> TelegramResult<Message> {
        let params = request.to_params()?;
        self.send_with_file("sendVoice", "voice", &request.voice, None, params)
            .await
    }

    #[instrument(skip(self, request), fields(chat_id = %request.chat_id, items = request.media.len()))]
    async fn send_media_group(
        &self,
        request: SendMediaGroupRequest,
    ) -> TelegramResult<Vec<Message>> {
        request.validate()?;

        let (rewritten, files) = prepare_media_group(&request.media);

        let mut params = Params::new();
        params.add("chat_id", request.chat_id.as_wire());
        params.add_json("media", Some(&rewritten))?;
        params.add_bool("disable_notification", request.disable_notification);
        params.add_bool("protect_content", request.protect_content);
        params.add_opt_int("reply_to_message_id", request.reply_to_message_id);

        if files.is_empty() {
            self.transport
                .send_form("sendMediaGroup", params)
                .await?
                .decode()
        } else {
            self.transport
                .send_multipart("sendMediaGroup", params, files)
                .await?
                .decode()
        }
    }
}

impl std::fmt::Debug for MediaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaService").finish()
    }
}
