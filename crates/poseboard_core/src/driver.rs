//! Trait definition for model backends.

use crate::{GenerateRequest, GenerateResponse};
use async_trait::async_trait;
use poseboard_error::PoseboardResult;

/// Core trait every generation backend implements.
///
/// A driver performs exactly one blocking request per call: no internal
/// retry, no queueing. Failures surface to the caller as typed errors and
/// the caller decides whether to re-issue the call.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate model output for a multimodal request.
    async fn generate(&self, req: &GenerateRequest) -> PoseboardResult<GenerateResponse>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier, for logging and display. Individual
    /// requests select their own model.
    fn model_name(&self) -> &str;
}
