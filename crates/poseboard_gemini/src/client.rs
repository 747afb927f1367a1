//! Gemini REST client.

use async_trait::async_trait;
use poseboard_core::{GenerateRequest, GenerateResponse, GenerationDriver};
use poseboard_error::{
    GeminiError, GeminiErrorKind, GenerationError, GenerationErrorKind, PoseboardResult,
};
use reqwest::Client;
use std::env;
use tracing::{debug, instrument};

use crate::conversion::{from_api_response, to_api_request};
use crate::dto::ApiResponse;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini `generateContent` API.
///
/// Each call issues exactly one HTTP request. The orchestrator owns all
/// retry decisions, so the client never retries on its own.
///
/// # Example
///
/// ```no_run
/// use poseboard_gemini::GeminiClient;
/// use poseboard_core::{GenerateRequest, GenerationConfig, GenerationDriver, Part, ResponseModality};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// let request = GenerateRequest::new(
///     "gemini-2.5-flash-image",
///     vec![Part::Text("Concept art of a moonlit harbor".to_string())],
///     GenerationConfig::for_modality(ResponseModality::Image),
/// );
/// let response = client.generate(&request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client reading the API key from the `GEMINI_API_KEY`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] if the variable is unset.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> PoseboardResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the base URL (local proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model))]
    async fn generate(&self, req: &GenerateRequest) -> PoseboardResult<GenerateResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, req.model);
        let body = to_api_request(req);
        debug!(url = %url, parts = req.parts.len(), "Sending Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Request(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code,
                message,
            })
            .into());
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(e.to_string()))
        })?;

        from_api_response(api_response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        DEFAULT_MODEL
    }
}
