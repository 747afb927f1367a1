//! Camera device error types.

/// Specific error conditions for camera capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DeviceErrorKind {
    /// No capture device is available
    #[display("No capture device available: {}", _0)]
    NotFound(String),
    /// Permission to access the device was denied
    #[display("Camera permission denied: {}", _0)]
    PermissionDenied(String),
    /// The device stream was closed or lost mid-session
    #[display("Capture stream closed: {}", _0)]
    StreamClosed(String),
    /// Frame encoding failed
    #[display("Frame encoding failed: {}", _0)]
    Encode(String),
}

/// Camera device error with source location tracking.
///
/// Device errors are terminal for the capture screen that raised them: the
/// caller surfaces the message and tears the session down, it never retries.
///
/// # Examples
///
/// ```
/// use poseboard_error::{DeviceError, DeviceErrorKind};
///
/// let err = DeviceError::new(DeviceErrorKind::PermissionDenied("/dev/video0".into()));
/// assert!(format!("{}", err).contains("permission denied"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Device Error: {} at line {} in {}", kind, line, file)]
pub struct DeviceError {
    /// The kind of error that occurred
    pub kind: DeviceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DeviceError {
    /// Create a new device error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeviceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
