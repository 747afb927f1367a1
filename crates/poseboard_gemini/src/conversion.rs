//! Type conversions between Poseboard core types and the Gemini wire format.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use poseboard_core::{GenerateRequest, GenerateResponse, Part};
use poseboard_error::{GeminiError, GeminiErrorKind, PoseboardResult};

use super::dto::{
    ApiContent, ApiGenerationConfig, ApiInlineData, ApiPart, ApiPrebuiltVoiceConfig, ApiRequest,
    ApiResponse, ApiSpeechConfig, ApiVoiceConfig,
};

/// Convert a core request into the wire request body.
///
/// Part order is preserved exactly: the storyboard pipeline depends on the
/// model seeing [style, character, actor, prompt] in that order for beat
/// synthesis.
pub fn to_api_request(request: &GenerateRequest) -> ApiRequest {
    let parts = request.parts.iter().map(to_api_part).collect();

    let config = &request.config;
    let has_config = !config.response_modalities.is_empty()
        || config.response_schema.is_some()
        || config.voice.is_some();

    let generation_config = has_config.then(|| ApiGenerationConfig {
        response_modalities: (!config.response_modalities.is_empty())
            .then(|| config.response_modalities.iter().map(|m| m.to_string()).collect()),
        response_mime_type: config
            .response_schema
            .is_some()
            .then(|| "application/json".to_string()),
        response_schema: config.response_schema.clone(),
        speech_config: config.voice.clone().map(|voice_name| ApiSpeechConfig {
            voice_config: ApiVoiceConfig {
                prebuilt_voice_config: ApiPrebuiltVoiceConfig { voice_name },
            },
        }),
    });

    ApiRequest {
        contents: vec![ApiContent { parts }],
        generation_config,
    }
}

fn to_api_part(part: &Part) -> ApiPart {
    match part {
        Part::Text(text) => ApiPart {
            text: Some(text.clone()),
            inline_data: None,
        },
        Part::Inline { mime, data } => ApiPart {
            text: None,
            inline_data: Some(ApiInlineData {
                mime_type: mime.clone(),
                data: BASE64.encode(data),
            }),
        },
    }
}

/// Convert a wire response into a core response.
///
/// Only the first candidate is considered. Parts carrying neither text nor
/// inline data are dropped; base64 decode failures are transport errors.
pub fn from_api_response(response: ApiResponse) -> PoseboardResult<GenerateResponse> {
    let api_parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts)
        .unwrap_or_default();

    let mut parts = Vec::with_capacity(api_parts.len());
    for api_part in api_parts {
        if let Some(inline) = api_part.inline_data {
            let data = BASE64.decode(inline.data.as_bytes()).map_err(|e| {
                GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string()))
            })?;
            parts.push(Part::Inline {
                mime: inline.mime_type,
                data,
            });
        } else if let Some(text) = api_part.text {
            parts.push(Part::Text(text));
        }
    }

    Ok(GenerateResponse { parts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use poseboard_core::{GenerationConfig, ResponseModality};

    #[test]
    fn request_preserves_part_order_and_encodes_inline_data() {
        let request = GenerateRequest::new(
            "gemini-2.5-flash-image",
            vec![
                Part::inline("image/jpeg", vec![0xFF, 0xD8]),
                Part::Text("transform the person".to_string()),
            ],
            GenerationConfig::for_modality(ResponseModality::Image),
        );

        let body = serde_json::to_value(to_api_request(&request)).unwrap();
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], BASE64.encode([0xFF, 0xD8]));
        assert_eq!(parts[1]["text"], "transform the person");
        assert_eq!(body["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn schema_request_selects_json_mime_type() {
        let schema = serde_json::json!({"type": "ARRAY"});
        let request = GenerateRequest::new(
            "gemini-2.5-flash",
            vec![Part::Text("write a script".to_string())],
            GenerationConfig::for_schema(schema.clone()),
        );

        let body = serde_json::to_value(to_api_request(&request)).unwrap();
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"], schema);
    }

    #[test]
    fn voice_request_carries_speech_config() {
        let request = GenerateRequest::new(
            "gemini-2.5-flash-preview-tts",
            vec![Part::Text("read this aloud".to_string())],
            GenerationConfig::for_voice("Kore"),
        );

        let body = serde_json::to_value(to_api_request(&request)).unwrap();
        assert_eq!(
            body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
                ["voiceName"],
            "Kore"
        );
    }

    #[test]
    fn response_decodes_inline_parts() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "here is your image"},
                        {"inlineData": {"mimeType": "image/png", "data": BASE64.encode([1, 2, 3])}}
                    ]
                }
            }]
        });
        let api: ApiResponse = serde_json::from_value(raw).unwrap();
        let response = from_api_response(api).unwrap();
        assert_eq!(response.parts.len(), 2);
        assert_eq!(
            response.parts[1],
            Part::inline("image/png", vec![1, 2, 3])
        );
    }

    #[test]
    fn empty_candidates_yield_empty_parts() {
        let api: ApiResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        let response = from_api_response(api).unwrap();
        assert!(response.parts.is_empty());
    }

    #[test]
    fn invalid_base64_is_a_transport_error() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "@@@"}}]}
            }]
        });
        let api: ApiResponse = serde_json::from_value(raw).unwrap();
        assert!(from_api_response(api).is_err());
    }
}
