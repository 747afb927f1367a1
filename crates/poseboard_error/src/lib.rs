//! Error types for the Poseboard workspace.
//!
//! This crate provides the foundation error types used throughout Poseboard.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use poseboard_error::{PoseboardResult, GenerationError, GenerationErrorKind};
//!
//! fn extract_image() -> PoseboardResult<Vec<u8>> {
//!     Err(GenerationError::new(GenerationErrorKind::NoImage))?
//! }
//!
//! match extract_image() {
//!     Ok(data) => println!("Got {} bytes", data.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod device;
mod error;
mod gemini;
mod generation;
mod json;
mod library;
mod session;

pub use config::ConfigError;
pub use device::{DeviceError, DeviceErrorKind};
pub use error::{PoseboardError, PoseboardErrorKind, PoseboardResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use json::JsonError;
pub use library::{LibraryError, LibraryErrorKind};
pub use session::{SessionError, SessionErrorKind};
