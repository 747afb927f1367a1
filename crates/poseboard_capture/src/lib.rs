//! Camera capture adapter.
//!
//! A [`CaptureDevice`] yields raw RGB frames from some source (a platform
//! camera, a folder of stills, a synthetic pattern). A [`CaptureSession`]
//! owns an acquired device for its lifetime, releases it unconditionally on
//! drop, and turns frames into mirrored JPEG stills.
//!
//! Mirroring is a correctness contract, not cosmetics: live previews show
//! the user a mirror image, so the encoded still must be flipped
//! horizontally to match what the user saw when they posed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod device;
mod folder;
mod pattern;
mod session;

pub use device::{CaptureDevice, RawFrame};
pub use folder::ImageFolderDevice;
pub use pattern::TestPatternDevice;
pub use session::{CaptureSession, DEFAULT_JPEG_QUALITY};
