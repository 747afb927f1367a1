//! The generation gateway: five independent operations against a model
//! backend.
//!
//! Each operation issues exactly one request through the injected
//! [`GenerationDriver`] and extracts its result with the shared
//! first-matching-part helper. Nothing here retries; failed calls surface
//! typed errors and the orchestrator decides what to do.

use crate::model::StoryStructure;
use crate::prompts;
use poseboard_core::{
    GenerateRequest, GenerationConfig, GenerationDriver, Part, PartKind, ResponseModality,
};
use poseboard_error::{GenerationError, GenerationErrorKind, PoseboardResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const JPEG_MIME: &str = "image/jpeg";

/// Model and voice selection for the gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model used for character, style, and beat image synthesis
    pub image_model: String,
    /// Model used for script synthesis
    pub script_model: String,
    /// Model used for narration audio
    pub tts_model: String,
    /// Prebuilt narration voice preset
    pub voice: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            image_model: "gemini-2.5-flash-image".to_string(),
            script_model: "gemini-2.5-flash".to_string(),
            tts_model: "gemini-2.5-flash-preview-tts".to_string(),
            voice: "Kore".to_string(),
        }
    }
}

/// The five-operation generation gateway.
pub struct StoryGateway<D: GenerationDriver> {
    driver: D,
    models: ModelConfig,
}

impl<D: GenerationDriver> StoryGateway<D> {
    /// Create a gateway over `driver` with default model selection.
    pub fn new(driver: D) -> Self {
        Self::with_models(driver, ModelConfig::default())
    }

    /// Create a gateway with explicit model selection.
    pub fn with_models(driver: D, models: ModelConfig) -> Self {
        Self { driver, models }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Synthesize the character reference image: the actor photo edited
    /// into the described character, pose and expression preserved.
    #[instrument(skip(self, actor_photo), fields(provider = self.driver.provider_name()))]
    pub async fn synthesize_character_image(
        &self,
        description: &str,
        actor_photo: &[u8],
    ) -> PoseboardResult<Vec<u8>> {
        let request = GenerateRequest::new(
            &self.models.image_model,
            vec![
                Part::inline(JPEG_MIME, actor_photo.to_vec()),
                Part::Text(prompts::character_image(description)),
            ],
            GenerationConfig::for_modality(ResponseModality::Image),
        );
        let response = self.driver.generate(&request).await?;
        Ok(response.first_inline(PartKind::Image)?.to_vec())
    }

    /// Synthesize the style reference image from the theme alone.
    #[instrument(skip(self), fields(provider = self.driver.provider_name()))]
    pub async fn synthesize_style_image(&self, theme: &str) -> PoseboardResult<Vec<u8>> {
        let request = GenerateRequest::new(
            &self.models.image_model,
            vec![Part::Text(prompts::style_image(theme))],
            GenerationConfig::for_modality(ResponseModality::Image),
        );
        let response = self.driver.generate(&request).await?;
        Ok(response.first_inline(PartKind::Image)?.to_vec())
    }

    /// Synthesize the per-scene script.
    ///
    /// The response must be a JSON array of field-complete scene objects
    /// with exactly `beat_count` entries; anything else is a parse failure,
    /// never a partial result.
    #[instrument(skip(self), fields(provider = self.driver.provider_name(), beat_count))]
    pub async fn synthesize_script(
        &self,
        theme: &str,
        beat_count: usize,
        character_description: &str,
    ) -> PoseboardResult<Vec<StoryStructure>> {
        let request = GenerateRequest::new(
            &self.models.script_model,
            vec![Part::Text(prompts::script(
                theme,
                beat_count,
                character_description,
            ))],
            GenerationConfig::for_schema(prompts::script_schema()),
        );
        let response = self.driver.generate(&request).await?;
        let text = response.first_text()?;

        let value: serde_json::Value = serde_json::from_str(text.trim()).map_err(|e| {
            GenerationError::new(GenerationErrorKind::ParseFailure(e.to_string()))
        })?;
        if !value.is_array() {
            return Err(GenerationError::new(GenerationErrorKind::ParseFailure(
                "script payload is not a JSON array".to_string(),
            ))
            .into());
        }

        let structures: Vec<StoryStructure> = serde_json::from_value(value).map_err(|e| {
            GenerationError::new(GenerationErrorKind::ParseFailure(e.to_string()))
        })?;

        if structures.len() != beat_count {
            return Err(GenerationError::new(GenerationErrorKind::BeatCount {
                expected: beat_count,
                actual: structures.len(),
            })
            .into());
        }
        if let Some(index) = structures.iter().position(|s| !s.is_complete()) {
            return Err(GenerationError::new(GenerationErrorKind::ParseFailure(
                format!("scene {index} has an empty field"),
            ))
            .into());
        }

        debug!(scenes = structures.len(), "Script synthesized");
        Ok(structures)
    }

    /// Synthesize one beat's composite image.
    ///
    /// Parts go in the fixed order [style, character, actor photo, prompt];
    /// the script's image prompts address the inputs by that position, so
    /// the order is part of the contract.
    #[instrument(
        skip(self, image_prompt, actor_photo, style_image, character_image),
        fields(provider = self.driver.provider_name())
    )]
    pub async fn synthesize_beat_image(
        &self,
        image_prompt: &str,
        actor_photo: &[u8],
        style_image: &[u8],
        character_image: &[u8],
    ) -> PoseboardResult<Vec<u8>> {
        let request = GenerateRequest::new(
            &self.models.image_model,
            vec![
                Part::inline(JPEG_MIME, style_image.to_vec()),
                Part::inline(JPEG_MIME, character_image.to_vec()),
                Part::inline(JPEG_MIME, actor_photo.to_vec()),
                Part::Text(image_prompt.to_string()),
            ],
            GenerationConfig::for_modality(ResponseModality::Image),
        );
        let response = self.driver.generate(&request).await?;
        Ok(response.first_inline(PartKind::Image)?.to_vec())
    }

    /// Synthesize narration audio for a scene's story text.
    #[instrument(skip(self, text), fields(provider = self.driver.provider_name()))]
    pub async fn synthesize_narration(&self, text: &str) -> PoseboardResult<Vec<u8>> {
        let request = GenerateRequest::new(
            &self.models.tts_model,
            vec![Part::Text(prompts::narration(text))],
            GenerationConfig::for_voice(self.models.voice.clone()),
        );
        let response = self.driver.generate(&request).await?;
        Ok(response.first_inline(PartKind::Audio)?.to_vec())
    }
}
