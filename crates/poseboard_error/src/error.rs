//! Top-level error wrapper types.

use crate::{
    ConfigError, DeviceError, GeminiError, GenerationError, JsonError, LibraryError, SessionError,
};

/// The foundation error enum. Every subsystem error folds into one of these
/// variants via `From`.
///
/// # Examples
///
/// ```
/// use poseboard_error::{PoseboardError, JsonError};
///
/// let json_err = JsonError::new("unexpected trailing data");
/// let err: PoseboardError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PoseboardErrorKind {
    /// Camera device error
    #[from(DeviceError)]
    Device(DeviceError),
    /// Generation gateway error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Gemini transport error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Orchestrator session error
    #[from(SessionError)]
    Session(SessionError),
    /// Story library error
    #[from(LibraryError)]
    Library(LibraryError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Poseboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use poseboard_error::{PoseboardResult, ConfigError};
///
/// fn might_fail() -> PoseboardResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Poseboard Error: {}", _0)]
pub struct PoseboardError(Box<PoseboardErrorKind>);

impl PoseboardError {
    /// Create a new error from a kind.
    pub fn new(kind: PoseboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PoseboardErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PoseboardErrorKind
impl<T> From<T> for PoseboardError
where
    T: Into<PoseboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Poseboard operations.
///
/// # Examples
///
/// ```
/// use poseboard_error::{PoseboardResult, JsonError};
///
/// fn parse_payload() -> PoseboardResult<String> {
///     Err(JsonError::new("expected an array"))?
/// }
/// ```
pub type PoseboardResult<T> = std::result::Result<T, PoseboardError>;
