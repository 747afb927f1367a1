//! Orchestrator session error types.

/// Specific error conditions for the story orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// The requested event is not defined for the current state
    #[display("event '{}' is not valid in state '{}'", event, state)]
    InvalidTransition {
        /// Name of the current application state
        state: String,
        /// Name of the rejected event
        event: String,
    },
    /// An operation required an in-progress story but none exists
    #[display("no story in progress")]
    NoActiveStory,
    /// Retry was requested for a beat that is not in the error state
    #[display("beat {} is not in the error state", _0)]
    BeatNotFailed(usize),
    /// A beat index was out of range
    #[display("beat index {} out of range", _0)]
    BeatIndex(usize),
    /// A cached asset required for the operation is missing
    #[display("missing cached asset: {}", _0)]
    MissingAsset(String),
}

/// Session error with source location tracking.
///
/// # Examples
///
/// ```
/// use poseboard_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::NoActiveStory);
/// assert!(format!("{}", err).contains("no story"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The kind of error that occurred
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
