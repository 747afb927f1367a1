//! Capture device trait and raw frame type.

use poseboard_error::PoseboardResult;

/// One uncompressed frame from a capture source.
///
/// Pixels are tightly packed RGB8, row-major, top-left origin, in the
/// sensor's natural (unmirrored) orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Packed RGB8 pixel data, `width * height * 3` bytes
    pub pixels: Vec<u8>,
}

impl RawFrame {
    /// Horizontally mirrored copy of this frame (left/right swapped).
    ///
    /// # Examples
    ///
    /// ```
    /// use poseboard_capture::RawFrame;
    ///
    /// let frame = RawFrame {
    ///     width: 2,
    ///     height: 1,
    ///     pixels: vec![10, 20, 30, 40, 50, 60],
    /// };
    /// let mirrored = frame.mirrored();
    /// assert_eq!(mirrored.pixels, vec![40, 50, 60, 10, 20, 30]);
    /// ```
    pub fn mirrored(&self) -> RawFrame {
        let width = self.width as usize;
        let row_bytes = width * 3;
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks_exact(row_bytes) {
            for x in (0..width).rev() {
                pixels.extend_from_slice(&row[x * 3..x * 3 + 3]);
            }
        }
        RawFrame {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

/// A source of live frames.
///
/// Implementations hold the underlying device resource between `acquire`
/// and `release`. Callers go through [`crate::CaptureSession`], which
/// guarantees `release` runs even on early exit.
pub trait CaptureDevice: Send {
    /// Acquire the device.
    ///
    /// Fails with a [`poseboard_error::DeviceError`] if no device is
    /// present or access is denied.
    fn acquire(&mut self) -> PoseboardResult<()>;

    /// Read the next frame from the acquired stream.
    fn frame(&mut self) -> PoseboardResult<RawFrame>;

    /// Release the device. Must be idempotent.
    fn release(&mut self);
}

impl<T: CaptureDevice + ?Sized> CaptureDevice for Box<T> {
    fn acquire(&mut self) -> PoseboardResult<()> {
        (**self).acquire()
    }

    fn frame(&mut self) -> PoseboardResult<RawFrame> {
        (**self).frame()
    }

    fn release(&mut self) {
        (**self).release()
    }
}
