//! Story library error types.

/// Kinds of story library errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LibraryErrorKind {
    /// Failed to create the library directory
    #[display("Failed to create library directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a story file
    #[display("Failed to write story: {}", _0)]
    FileWrite(String),
    /// Failed to read a story file
    #[display("Failed to read story: {}", _0)]
    FileRead(String),
    /// No story with the given identity exists
    #[display("Story not found: {}", _0)]
    NotFound(String),
}

/// Story library error with source location tracking.
///
/// # Examples
///
/// ```
/// use poseboard_error::{LibraryError, LibraryErrorKind};
///
/// let err = LibraryError::new(LibraryErrorKind::NotFound("abc123".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Library Error: {} at line {} in {}", kind, line, file)]
pub struct LibraryError {
    /// The kind of error that occurred
    pub kind: LibraryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LibraryError {
    /// Create a new library error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LibraryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
