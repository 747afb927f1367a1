//! Poseboard: an interactive storyboard generator.
//!
//! A user poses for a photo, describes a character, and picks a theme; the
//! pipeline synthesizes a character sheet, a per-scene script, per-scene
//! composite images, and narration audio, then persists the finished
//! storyboard. This facade crate re-exports the public surface of the
//! workspace and ships the `poseboard` CLI binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod settings;

pub use settings::{CaptureConfig, PoseboardConfig};

pub use poseboard_capture::{
    CaptureDevice, CaptureSession, DEFAULT_JPEG_QUALITY, ImageFolderDevice, RawFrame,
    TestPatternDevice,
};
pub use poseboard_core::{
    GenerateRequest, GenerateResponse, GenerationConfig, GenerationDriver, Part, PartKind,
    ResponseModality,
};
pub use poseboard_error::{
    ConfigError, DeviceError, DeviceErrorKind, GeminiError, GeminiErrorKind, GenerationError,
    GenerationErrorKind, JsonError, LibraryError, LibraryErrorKind, PoseboardError,
    PoseboardErrorKind, PoseboardResult, SessionError, SessionErrorKind,
};
pub use poseboard_gemini::GeminiClient;
pub use poseboard_story::{
    AppState, BeatArtifacts, BeatStatus, DebugSnapshot, FileSystemLibrary, InMemoryLibrary,
    ModelConfig, ProcessedBeat, SavedStory, SessionEvent, StoryGateway, StoryLibrary,
    StorySession, StoryStructure, transition,
};
