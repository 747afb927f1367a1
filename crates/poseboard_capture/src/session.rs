//! Scoped capture sessions.

use crate::{CaptureDevice, RawFrame};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use poseboard_error::{DeviceError, DeviceErrorKind, PoseboardResult};
use std::io::Cursor;
use tracing::{debug, instrument};

/// JPEG quality used for captured stills.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Owns an acquired capture device for the lifetime of a capture screen.
///
/// The device is acquired on construction and released unconditionally when
/// the session drops, so a panicking caller or an early return can never
/// leak the camera.
///
/// # Examples
///
/// ```
/// use poseboard_capture::{CaptureSession, TestPatternDevice};
///
/// let mut session = CaptureSession::open(TestPatternDevice::new(64, 48)).unwrap();
/// let jpeg = session.capture_jpeg().unwrap();
/// assert_eq!(&jpeg[..2], &[0xFF, 0xD8]); // JPEG SOI marker
/// ```
pub struct CaptureSession<D: CaptureDevice> {
    device: D,
    quality: u8,
}

impl<D: CaptureDevice> CaptureSession<D> {
    /// Acquire `device` and open a session at the default quality.
    pub fn open(device: D) -> PoseboardResult<Self> {
        Self::open_with_quality(device, DEFAULT_JPEG_QUALITY)
    }

    /// Acquire `device` and open a session at a specific JPEG quality.
    #[instrument(skip(device))]
    pub fn open_with_quality(mut device: D, quality: u8) -> PoseboardResult<Self> {
        device.acquire()?;
        debug!(quality, "Capture session opened");
        Ok(Self { device, quality })
    }

    /// Capture one still: grab a frame, mirror it to match the on-screen
    /// preview orientation, and encode it as JPEG.
    pub fn capture_jpeg(&mut self) -> PoseboardResult<Vec<u8>> {
        let frame = self.device.frame()?;
        encode_jpeg(&frame.mirrored(), self.quality)
    }

    /// Capture one raw, unmirrored sensor frame.
    pub fn capture_raw(&mut self) -> PoseboardResult<RawFrame> {
        self.device.frame()
    }

    /// JPEG quality of this session.
    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl<D: CaptureDevice> Drop for CaptureSession<D> {
    fn drop(&mut self) {
        self.device.release();
        debug!("Capture session released device");
    }
}

/// Encode an RGB frame as JPEG at the given quality.
fn encode_jpeg(frame: &RawFrame, quality: u8) -> PoseboardResult<Vec<u8>> {
    let image = RgbImage::from_raw(frame.width, frame.height, frame.pixels.clone())
        .ok_or_else(|| {
            DeviceError::new(DeviceErrorKind::Encode(format!(
                "frame buffer size {} does not match {}x{}",
                frame.pixels.len(),
                frame.width,
                frame.height
            )))
        })?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| DeviceError::new(DeviceErrorKind::Encode(e.to_string())))?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestPatternDevice;

    #[test]
    fn session_releases_device_on_drop() {
        let device = TestPatternDevice::new(8, 8);
        let acquired = device.acquired_flag();

        let session = CaptureSession::open(device).unwrap();
        assert!(acquired.load(std::sync::atomic::Ordering::SeqCst));
        drop(session);
        assert!(!acquired.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[test]
    fn captured_still_is_mirrored_relative_to_sensor_frame() {
        // The test pattern is asymmetric: left half dark, right half light.
        let mut session = CaptureSession::open(TestPatternDevice::new(32, 16)).unwrap();
        let raw = session.capture_raw().unwrap();
        let jpeg = session.capture_jpeg().unwrap();

        let decoded = image::load_from_memory(&jpeg).unwrap().to_rgb8();
        assert_eq!(decoded.width(), raw.width);
        assert_eq!(decoded.height(), raw.height);

        // Left edge of the sensor frame is dark; after mirroring, the
        // encoded still must be light on the left and dark on the right.
        let sensor_left = raw.pixels[0];
        let sensor_right = raw.pixels[(raw.width as usize - 1) * 3];
        assert!(sensor_left < sensor_right);

        let still_left = decoded.get_pixel(0, 0)[0];
        let still_right = decoded.get_pixel(decoded.width() - 1, 0)[0];
        assert!(still_left > still_right);
    }

    #[test]
    fn encode_rejects_mismatched_buffer() {
        let bad = RawFrame {
            width: 4,
            height: 4,
            pixels: vec![0; 5],
        };
        assert!(encode_jpeg(&bad, DEFAULT_JPEG_QUALITY).is_err());
    }
}
