//! Generation gateway error types.

/// Specific error conditions for gateway operations.
///
/// Every gateway call is a single request with no internal retry; these
/// kinds describe the ways its response can fail to yield a usable result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The response carried no inline image part
    #[display("no image returned")]
    NoImage,
    /// The response carried no inline audio part
    #[display("no audio returned")]
    NoAudio,
    /// The response carried no text part
    #[display("no text returned")]
    NoText,
    /// The response body did not have the expected shape
    #[display("malformed response: {}", _0)]
    MalformedResponse(String),
    /// A structured payload failed to parse or validate
    #[display("parse failure: {}", _0)]
    ParseFailure(String),
    /// The script contained the wrong number of scenes
    #[display("script has {} scenes, expected {}", actual, expected)]
    BeatCount {
        /// Number of scenes requested
        expected: usize,
        /// Number of scenes the model returned
        actual: usize,
    },
}

/// Generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use poseboard_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::ParseFailure(
///     "expected a JSON array".to_string(),
/// ));
/// assert!(format!("{}", err).contains("parse failure"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
