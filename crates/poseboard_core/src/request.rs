//! Request types for model generation.

use crate::{Part, ResponseModality};
use serde::{Deserialize, Serialize};

/// Configuration block selecting the desired response shape.
///
/// # Examples
///
/// ```
/// use poseboard_core::{GenerationConfig, ResponseModality};
///
/// let config = GenerationConfig::for_modality(ResponseModality::Image);
/// assert_eq!(config.response_modalities, vec![ResponseModality::Image]);
/// assert!(config.response_schema.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerationConfig {
    /// Modalities the model should respond with
    pub response_modalities: Vec<ResponseModality>,
    /// JSON schema the response text must conform to (implies a JSON
    /// response MIME type)
    pub response_schema: Option<serde_json::Value>,
    /// Prebuilt voice name for audio responses
    pub voice: Option<String>,
}

impl GenerationConfig {
    /// Configuration requesting a single response modality.
    pub fn for_modality(modality: ResponseModality) -> Self {
        Self {
            response_modalities: vec![modality],
            ..Default::default()
        }
    }

    /// Configuration requesting structured JSON conforming to `schema`.
    pub fn for_schema(schema: serde_json::Value) -> Self {
        Self {
            response_modalities: vec![ResponseModality::Text],
            response_schema: Some(schema),
            voice: None,
        }
    }

    /// Configuration requesting audio with the given voice preset.
    pub fn for_voice(voice: impl Into<String>) -> Self {
        Self {
            response_modalities: vec![ResponseModality::Audio],
            response_schema: None,
            voice: Some(voice.into()),
        }
    }
}

/// A single generation request: a model identifier, an ordered list of
/// content parts, and the response configuration.
///
/// # Examples
///
/// ```
/// use poseboard_core::{GenerateRequest, GenerationConfig, Part, ResponseModality};
///
/// let request = GenerateRequest {
///     model: "gemini-2.5-flash-image".to_string(),
///     parts: vec![Part::Text("A lighthouse at dusk".to_string())],
///     config: GenerationConfig::for_modality(ResponseModality::Image),
/// };
///
/// assert_eq!(request.parts.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenerateRequest {
    /// Model identifier to use
    pub model: String,
    /// Ordered content parts (order is meaningful to the model)
    pub parts: Vec<Part>,
    /// Response configuration
    pub config: GenerationConfig,
}

impl GenerateRequest {
    /// Construct a request for the given model and parts.
    pub fn new(model: impl Into<String>, parts: Vec<Part>, config: GenerationConfig) -> Self {
        Self {
            model: model.into(),
            parts,
            config,
        }
    }
}
