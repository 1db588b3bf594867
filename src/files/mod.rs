//! File references for upload-bearing Bot API requests.
//!
//! An [`InputFile`] is either uploadable binary content (in-memory bytes,
//! a one-shot async reader, a local path opened lazily at send time) or a
//! plain string reference the remote service resolves itself (an HTTP
//! URL, a file id from a previous upload, or an internally-synthesized
//! `attach://` placeholder).

use crate::errors::{FileError, TelegramResult};
use bytes::Bytes;
use parking_lot::Mutex;
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// A boxed one-shot async reader
pub type BoxReader = Pin<Box<dyn AsyncRead + Send + 'static>>;

/// A reference to file content for a request
#[derive(Debug, Clone, PartialEq)]
pub enum InputFile {
    /// Raw bytes held in memory
    Memory {
        /// Filename reported to the remote service
        file_name: String,
        /// File content
        data: Bytes,
    },
    /// A caller-owned reader, consumed exactly once at send time
    Stream(StreamSource),
    /// A local file opened lazily when the request is sent
    Path(PathBuf),
    /// An HTTP(S) URL the remote service fetches itself
    Url(String),
    /// A file id from a previous upload
    FileId(String),
    /// An `attach://<token>` placeholder correlating a media descriptor
    /// with a multipart part. Synthesized by the media resolver; not a
    /// way to introduce fresh uploads.
    Attach(String),
}

impl InputFile {
    /// Raw bytes with an explicit filename
    pub fn memory(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self::Memory {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// A one-shot async reader with an explicit filename
    pub fn stream(file_name: impl Into<String>, reader: impl AsyncRead + Send + 'static) -> Self {
        Self::Stream(StreamSource {
            file_name: file_name.into(),
            reader: Arc::new(Mutex::new(Some(Box::pin(reader)))),
        })
    }

    /// A local file path
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// A remote URL
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url(url.into())
    }

    /// A file id issued by the remote service
    pub fn file_id(id: impl Into<String>) -> Self {
        Self::FileId(id.into())
    }

    pub(crate) fn attach(token: impl Into<String>) -> Self {
        Self::Attach(token.into())
    }

    /// Whether this reference must be carried as a multipart file part
    pub fn needs_upload(&self) -> bool {
        matches!(
            self,
            Self::Memory { .. } | Self::Stream(_) | Self::Path(_)
        )
    }

    /// Produce the upload payload for a multipart part.
    ///
    /// `Path` opens the file here; open failures propagate and leave no
    /// handle behind. `Stream` yields its reader exactly once. Non-upload
    /// variants fail with [`FileError::NotUploadable`].
    pub async fn open(&self) -> TelegramResult<UploadPayload> {
        match self {
            Self::Memory { file_name, data } => Ok(UploadPayload {
                file_name: file_name.clone(),
                body: reqwest::Body::from(data.clone()),
            }),
            Self::Stream(source) => {
                let reader = source
                    .reader
                    .lock()
                    .take()
                    .ok_or(FileError::StreamConsumed)?;
                Ok(UploadPayload {
                    file_name: source.file_name.clone(),
                    body: reqwest::Body::wrap_stream(ReaderStream::new(reader)),
                })
            }
            Self::Path(path) => {
                let file = tokio::fs::File::open(path).await.map_err(|source| {
                    FileError::Open {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "file".to_string());
                Ok(UploadPayload {
                    file_name,
                    body: reqwest::Body::wrap_stream(ReaderStream::new(file)),
                })
            }
            Self::Url(_) | Self::FileId(_) | Self::Attach(_) => {
                Err(FileError::NotUploadable.into())
            }
        }
    }

    /// Serialize this reference to its wire string.
    ///
    /// Upload-bearing variants have no string form and fail with
    /// [`FileError::NotSendable`].
    pub fn send_data(&self) -> TelegramResult<String> {
        match self {
            Self::Url(url) => Ok(url.clone()),
            Self::FileId(id) => Ok(id.clone()),
            Self::Attach(token) => Ok(format!("attach://{}", token)),
            Self::Memory { .. } | Self::Stream(_) | Self::Path(_) => {
                Err(FileError::NotSendable.into())
            }
        }
    }
}

impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.send_data() {
            Ok(value) => serializer.serialize_str(&value),
            Err(_) => Err(serde::ser::Error::custom(
                "file reference requires upload and must be resolved to an attach:// placeholder",
            )),
        }
    }
}

/// A one-shot reader source behind an [`InputFile::Stream`]
#[derive(Clone)]
pub struct StreamSource {
    file_name: String,
    reader: Arc<Mutex<Option<BoxReader>>>,
}

impl StreamSource {
    /// Filename reported to the remote service
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl std::fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamSource")
            .field("file_name", &self.file_name)
            .field("consumed", &self.reader.lock().is_none())
            .finish()
    }
}

impl PartialEq for StreamSource {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name && Arc::ptr_eq(&self.reader, &other.reader)
    }
}

/// Upload payload handed to the multipart assembler
pub struct UploadPayload {
    /// Filename for the multipart part
    pub file_name: String,
    /// Streaming request body
    pub body: reqwest::Body,
}

impl std::fmt::Debug for UploadPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadPayload")
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// A file destined for one multipart field
#[derive(Debug, Clone, PartialEq)]
pub struct NamedFile {
    /// Multipart field name
    pub field_name: String,
    /// Override for the part filename
    pub file_name: Option<String>,
    /// The file reference itself
    pub file: InputFile,
}

impl NamedFile {
    /// Create a named file for the given field
    pub fn new(field_name: impl Into<String>, file: InputFile) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: None,
            file,
        }
    }

    /// Override the filename reported to the remote service
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}
