//! Synthetic test-pattern device.

use crate::{CaptureDevice, RawFrame};
use poseboard_error::{DeviceError, DeviceErrorKind, PoseboardResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A capture device that renders a deterministic, horizontally asymmetric
/// pattern: dark on the left half, light on the right.
///
/// The asymmetry makes mirroring observable, which is exactly what the
/// capture tests need. The acquired flag is shared so tests can observe
/// release-on-drop from outside a session.
#[derive(Debug, Clone)]
pub struct TestPatternDevice {
    width: u32,
    height: u32,
    acquired: Arc<AtomicBool>,
}

impl TestPatternDevice {
    /// Create a pattern device with the given frame dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            acquired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle to the acquired flag, observable after the device moves into
    /// a session.
    pub fn acquired_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.acquired)
    }
}

impl CaptureDevice for TestPatternDevice {
    fn acquire(&mut self) -> PoseboardResult<()> {
        self.acquired.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn frame(&mut self) -> PoseboardResult<RawFrame> {
        if !self.acquired.load(Ordering::SeqCst) {
            return Err(DeviceError::new(DeviceErrorKind::StreamClosed(
                "test pattern device not acquired".to_string(),
            ))
            .into());
        }

        let mut pixels = Vec::with_capacity((self.width * self.height * 3) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let luma = if x < self.width / 2 { 20 } else { 230 };
                let green = (y % 256) as u8;
                pixels.extend_from_slice(&[luma, green, luma]);
            }
        }
        Ok(RawFrame {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    fn release(&mut self) {
        self.acquired.store(false, Ordering::SeqCst);
    }
}
