//! Workspace configuration.
//!
//! Loaded from an optional `poseboard.toml` in the working directory; every
//! field has a default so the file is never required. The Gemini API key is
//! deliberately not configurable here — it comes from the `GEMINI_API_KEY`
//! environment variable only.

use config::{Config, File, FileFormat};
use poseboard_capture::DEFAULT_JPEG_QUALITY;
use poseboard_error::{ConfigError, PoseboardResult};
use poseboard_story::ModelConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Capture settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// JPEG quality for captured stills (1-100)
    pub jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Top-level configuration.
///
/// # Example `poseboard.toml`
///
/// ```toml
/// library_dir = "./stories"
///
/// [models]
/// image_model = "gemini-2.5-flash-image"
/// voice = "Kore"
///
/// [capture]
/// jpeg_quality = 90
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseboardConfig {
    /// Model and voice selection for the gateway
    pub models: ModelConfig,
    /// Capture settings
    pub capture: CaptureConfig,
    /// Directory the story library lives in
    pub library_dir: PathBuf,
}

impl Default for PoseboardConfig {
    fn default() -> Self {
        Self {
            models: ModelConfig::default(),
            capture: CaptureConfig::default(),
            library_dir: PathBuf::from("./stories"),
        }
    }
}

impl PoseboardConfig {
    /// Load configuration, merging `poseboard.toml` over the defaults if
    /// the file exists.
    pub fn load() -> PoseboardResult<Self> {
        let settings = Config::builder()
            .add_source(File::new("poseboard", FileFormat::Toml).required(false))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {e}")))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {e}")))?;
        config.validate()?;
        debug!(library_dir = %config.library_dir.display(), "Loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> PoseboardResult<()> {
        if self.capture.jpeg_quality == 0 || self.capture.jpeg_quality > 100 {
            return Err(ConfigError::new(format!(
                "capture.jpeg_quality must be between 1 and 100, got {}",
                self.capture.jpeg_quality
            ))
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PoseboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.capture.jpeg_quality, 90);
        assert_eq!(config.models.voice, "Kore");
    }

    #[test]
    fn toml_overrides_merge_over_defaults() {
        let toml = r#"
            library_dir = "/tmp/poseboard-stories"

            [models]
            voice = "Puck"

            [capture]
            jpeg_quality = 80
        "#;
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        let config: PoseboardConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.library_dir, PathBuf::from("/tmp/poseboard-stories"));
        assert_eq!(config.models.voice, "Puck");
        // Untouched fields keep their defaults.
        assert_eq!(config.models.script_model, "gemini-2.5-flash");
        assert_eq!(config.capture.jpeg_quality, 80);
    }

    #[test]
    fn quality_bounds_are_enforced() {
        let mut config = PoseboardConfig::default();
        config.capture.jpeg_quality = 0;
        assert!(config.validate().is_err());
        config.capture.jpeg_quality = 101;
        assert!(config.validate().is_err());
    }
}
