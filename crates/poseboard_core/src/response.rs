//! Response types and the shared part-extraction helper.

use crate::{Part, PartKind};
use poseboard_error::{GenerationError, GenerationErrorKind, PoseboardResult};
use serde::{Deserialize, Serialize};

/// The unified response object: an ordered list of content parts.
///
/// # Examples
///
/// ```
/// use poseboard_core::{GenerateResponse, Part, PartKind};
///
/// let response = GenerateResponse {
///     parts: vec![Part::Text("Once upon a time".to_string())],
/// };
/// assert_eq!(response.first_text().unwrap(), "Once upon a time");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// The parts the model returned, in response order
    pub parts: Vec<Part>,
}

impl GenerateResponse {
    /// Return the first part of the requested kind.
    ///
    /// Responses may interleave text commentary with inline payloads; every
    /// gateway operation takes the first matching part and ignores the rest
    /// (first match wins). A response with no matching part is a typed
    /// generation error, never a silent empty result.
    pub fn first_part(&self, kind: PartKind) -> PoseboardResult<&Part> {
        self.parts.iter().find(|p| p.is_kind(kind)).ok_or_else(|| {
            let missing = match kind {
                PartKind::Text => GenerationErrorKind::NoText,
                PartKind::Image => GenerationErrorKind::NoImage,
                PartKind::Audio => GenerationErrorKind::NoAudio,
            };
            GenerationError::new(missing).into()
        })
    }

    /// First text part, as a string slice.
    pub fn first_text(&self) -> PoseboardResult<&str> {
        match self.first_part(PartKind::Text)? {
            Part::Text(text) => Ok(text.as_str()),
            // first_part only returns Text for PartKind::Text
            Part::Inline { .. } => unreachable!(),
        }
    }

    /// Raw bytes of the first inline part of the requested kind.
    pub fn first_inline(&self, kind: PartKind) -> PoseboardResult<&[u8]> {
        match self.first_part(kind)? {
            Part::Inline { data, .. } => Ok(data.as_slice()),
            Part::Text(_) => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poseboard_error::PoseboardErrorKind;

    fn image(data: &[u8]) -> Part {
        Part::inline("image/jpeg", data.to_vec())
    }

    #[test]
    fn first_match_wins_with_multiple_images() {
        let response = GenerateResponse {
            parts: vec![
                Part::Text("here you go".to_string()),
                image(&[1, 2, 3]),
                image(&[4, 5, 6]),
            ],
        };
        assert_eq!(response.first_inline(PartKind::Image).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn missing_image_is_a_typed_error() {
        let response = GenerateResponse {
            parts: vec![Part::Text("no picture today".to_string())],
        };
        let err = response.first_inline(PartKind::Image).unwrap_err();
        match err.kind() {
            PoseboardErrorKind::Generation(g) => {
                assert_eq!(g.kind, poseboard_error::GenerationErrorKind::NoImage)
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn audio_does_not_match_image_kind() {
        let response = GenerateResponse {
            parts: vec![Part::inline("audio/wav", vec![9])],
        };
        assert!(response.first_part(PartKind::Image).is_err());
        assert_eq!(response.first_inline(PartKind::Audio).unwrap(), &[9]);
    }
}
