//! Typed content parts for multimodal requests and responses.

use serde::{Deserialize, Serialize};

/// One piece of multimodal content.
///
/// Requests carry an ordered list of parts; part order is semantically
/// meaningful to the model and is preserved end to end.
///
/// # Examples
///
/// ```
/// use poseboard_core::Part;
///
/// let text = Part::Text("Describe this image".to_string());
/// let photo = Part::inline("image/jpeg", vec![0xFF, 0xD8, 0xFF]);
/// assert_eq!(photo.mime(), Some("image/jpeg"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Part {
    /// Plain text.
    Text(String),

    /// Inline binary data with its MIME type.
    Inline {
        /// MIME type, e.g. "image/jpeg" or "audio/wav"
        mime: String,
        /// Raw binary payload
        data: Vec<u8>,
    },
}

impl Part {
    /// Construct an inline binary part.
    pub fn inline(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self::Inline {
            mime: mime.into(),
            data,
        }
    }

    /// MIME type of an inline part, `None` for text.
    pub fn mime(&self) -> Option<&str> {
        match self {
            Part::Text(_) => None,
            Part::Inline { mime, .. } => Some(mime.as_str()),
        }
    }

    /// Whether this part is of the requested kind.
    pub fn is_kind(&self, kind: PartKind) -> bool {
        match (self, kind) {
            (Part::Text(_), PartKind::Text) => true,
            (Part::Inline { mime, .. }, PartKind::Image) => mime.starts_with("image/"),
            (Part::Inline { mime, .. }, PartKind::Audio) => mime.starts_with("audio/"),
            _ => false,
        }
    }
}

/// The kind of content a caller wants to extract from a part list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PartKind {
    /// Plain text parts
    #[display("text")]
    Text,
    /// Inline parts with an `image/*` MIME type
    #[display("image")]
    Image,
    /// Inline parts with an `audio/*` MIME type
    #[display("audio")]
    Audio,
}
