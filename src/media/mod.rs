//! Media descriptors and the batch attachment resolver.
//!
//! A media-group request carries an ordered list of heterogeneous
//! [`InputMedia`] descriptors inside one JSON parameter. Descriptors
//! whose file references require upload cannot be serialized directly;
//! [`prepare_media_group`] rewrites them to `attach://` placeholders and
//! produces the matching multipart file list.

use crate::files::{InputFile, NamedFile};
use serde::Serialize;

/// One item of a media group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputMedia {
    /// A photo
    Photo(InputMediaPhoto),
    /// A video
    Video(InputMediaVideo),
    /// An animation
    Animation(InputMediaAnimation),
    /// An audio file
    Audio(InputMediaAudio),
    /// A general file
    Document(InputMediaDocument),
}

impl InputMedia {
    /// The primary file reference
    pub fn media(&self) -> &InputFile {
        match self {
            Self::Photo(m) => &m.media,
            Self::Video(m) => &m.media,
            Self::Animation(m) => &m.media,
            Self::Audio(m) => &m.media,
            Self::Document(m) => &m.media,
        }
    }

    /// The thumbnail reference, for kinds that carry one
    pub fn thumbnail(&self) -> Option<&InputFile> {
        match self {
            Self::Photo(_) => None,
            Self::Video(m) => m.thumbnail.as_ref(),
            Self::Animation(m) => m.thumbnail.as_ref(),
            Self::Audio(m) => m.thumbnail.as_ref(),
            Self::Document(m) => m.thumbnail.as_ref(),
        }
    }

    fn with_media(&self, media: InputFile) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            Self::Photo(m) => m.media = media,
            Self::Video(m) => m.media = media,
            Self::Animation(m) => m.media = media,
            Self::Audio(m) => m.media = media,
            Self::Document(m) => m.media = media,
        }
        copy
    }

    fn set_thumbnail(&mut self, thumbnail: InputFile) {
        match self {
            Self::Photo(_) => {}
            Self::Video(m) => m.thumbnail = Some(thumbnail),
            Self::Animation(m) => m.thumbnail = Some(thumbnail),
            Self::Audio(m) => m.thumbnail = Some(thumbnail),
            Self::Document(m) => m.thumbnail = Some(thumbnail),
        }
    }
}

/// A photo descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaPhoto {
    /// File reference
    pub media: InputFile,
    /// Caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption formatting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<crate::types::ParseMode>,
}

impl InputMediaPhoto {
    /// Create a photo descriptor
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            caption: None,
            parse_mode: None,
        }
    }

    /// Set the caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// A video descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaVideo {
    /// File reference
    pub media: InputFile,
    /// Thumbnail reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    /// Caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption formatting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<crate::types::ParseMode>,
    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Whether the video is suitable for streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
}

impl InputMediaVideo {
    /// Create a video descriptor
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        }
    }

    /// Set the thumbnail
    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Set the caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// An animation descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaAnimation {
    /// File reference
    pub media: InputFile,
    /// Thumbnail reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    /// Caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption formatting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<crate::types::ParseMode>,
}

impl InputMediaAnimation {
    /// Create an animation descriptor
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
        }
    }
}

/// An audio descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaAudio {
    /// File reference
    pub media: InputFile,
    /// Thumbnail reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    /// Caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption formatting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<crate::types::ParseMode>,
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    /// Performer tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    /// Title tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl InputMediaAudio {
    /// Create an audio descriptor
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

/// A document descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputMediaDocument {
    /// File reference
    pub media: InputFile,
    /// Thumbnail reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<InputFile>,
    /// Caption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Caption formatting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<crate::types::ParseMode>,
}

impl InputMediaDocument {
    /// Create a document descriptor
    pub fn new(media: InputFile) -> Self {
        Self {
            media,
            thumbnail: None,
            caption: None,
            parse_mode: None,
        }
    }

    /// Set the thumbnail
    pub fn thumbnail(mut self, thumbnail: InputFile) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }
}

/// Rewrite a media group for transport.
///
/// Upload-needed primaries become `attach://file-<index>` with a
/// matching multipart field `file-<index>`; upload-needed thumbnails
/// become `attach://file-<index>-thumb` with field `file-<index>-thumb`.
/// References that do not need upload pass through unchanged. The input
/// is never mutated; every placeholder in the returned descriptors has
/// exactly one named file with the same field name.
pub fn prepare_media_group(items: &[InputMedia]) -> (Vec<InputMedia>, Vec<NamedFile>) {
    let mut rewritten = Vec::with_capacity(items.len());
    let mut files = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let mut copy = if item.media().needs_upload() {
            let token = format!("file-{}", index);
            files.push(NamedFile::new(token.clone(), item.media().clone()));
            item.with_media(InputFile::attach(token))
        } else {
            item.clone()
        };

        if let Some(thumbnail) = item.thumbnail() {
            if thumbnail.needs_upload() {
                let token = format!("file-{}-thumb", index);
                files.push(NamedFile::new(token.clone(), thumbnail.clone()));
                copy.set_thumbnail(InputFile::attach(token));
            }
        }

        rewritten.push(copy);
    }

    (rewritten, files)
}
