//! Gemini `generateContent` data transfer objects.
//!
//! Field names follow the wire format (camelCase); inline binary data is
//! base64-encoded strings on the wire.

use serde::{Deserialize, Serialize};

/// One content part: exactly one of `text` or `inline_data` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiPart {
    /// Text content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<ApiInlineData>,
}

/// Inline binary data with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiInlineData {
    /// MIME type, e.g. "image/jpeg"
    pub mime_type: String,
    /// Base64-encoded payload
    pub data: String,
}

/// An ordered list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiContent {
    /// Content parts in request/response order
    #[serde(default)]
    pub parts: Vec<ApiPart>,
}

/// Voice selection for audio responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpeechConfig {
    /// Voice configuration wrapper
    pub voice_config: ApiVoiceConfig,
}

/// Wrapper around the prebuilt voice selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVoiceConfig {
    /// Prebuilt voice selection
    pub prebuilt_voice_config: ApiPrebuiltVoiceConfig,
}

/// A named prebuilt voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPrebuiltVoiceConfig {
    /// Voice name, e.g. "Kore"
    pub voice_name: String,
}

/// Generation configuration block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiGenerationConfig {
    /// Requested response modalities ("TEXT", "IMAGE", "AUDIO")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    /// Response MIME type (e.g. "application/json" for structured output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// JSON schema the response must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Voice selection for audio responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<ApiSpeechConfig>,
}

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// Request contents (a single turn for every Poseboard call)
    pub contents: Vec<ApiContent>,
    /// Generation configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<ApiGenerationConfig>,
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiCandidate {
    /// Candidate content; may be absent on safety blocks
    #[serde(default)]
    pub content: Option<ApiContent>,
}

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Response candidates; the first one carries the result
    #[serde(default)]
    pub candidates: Vec<ApiCandidate>,
}
