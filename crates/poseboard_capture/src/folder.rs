//! Image-folder capture device.

use crate::{CaptureDevice, RawFrame};
use poseboard_error::{DeviceError, DeviceErrorKind, PoseboardResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A capture device that serves stills from a directory of image files.
///
/// Lets the whole pipeline run without camera hardware: each `frame` call
/// yields the next image in filename order, cycling when the folder is
/// exhausted. Acquisition fails like a missing camera would if the
/// directory has no readable images.
#[derive(Debug, Clone)]
pub struct ImageFolderDevice {
    dir: PathBuf,
    files: Vec<PathBuf>,
    cursor: usize,
    acquired: bool,
}

impl ImageFolderDevice {
    /// Create a device over the given directory. The directory is scanned
    /// on `acquire`, not here.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            files: Vec::new(),
            cursor: 0,
            acquired: false,
        }
    }

    fn is_image_file(path: &Path) -> bool {
        matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("jpg" | "jpeg" | "png")
        )
    }
}

impl CaptureDevice for ImageFolderDevice {
    fn acquire(&mut self) -> PoseboardResult<()> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            DeviceError::new(DeviceErrorKind::NotFound(format!(
                "{}: {}",
                self.dir.display(),
                e
            )))
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| Self::is_image_file(path))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(DeviceError::new(DeviceErrorKind::NotFound(format!(
                "no image files in {}",
                self.dir.display()
            )))
            .into());
        }

        debug!(dir = %self.dir.display(), count = files.len(), "Image folder device acquired");
        self.files = files;
        self.cursor = 0;
        self.acquired = true;
        Ok(())
    }

    fn frame(&mut self) -> PoseboardResult<RawFrame> {
        if !self.acquired {
            return Err(DeviceError::new(DeviceErrorKind::StreamClosed(
                "image folder device not acquired".to_string(),
            ))
            .into());
        }

        let path = &self.files[self.cursor % self.files.len()];
        self.cursor += 1;

        let image = image::open(path)
            .map_err(|e| {
                DeviceError::new(DeviceErrorKind::StreamClosed(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?
            .to_rgb8();

        Ok(RawFrame {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
        })
    }

    fn release(&mut self) {
        self.acquired = false;
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_fails_like_a_missing_camera() {
        let dir = std::env::temp_dir().join("poseboard_empty_folder_test");
        std::fs::create_dir_all(&dir).unwrap();

        let mut device = ImageFolderDevice::new(&dir);
        assert!(device.acquire().is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn cycles_through_folder_images() {
        let dir = std::env::temp_dir().join("poseboard_folder_cycle_test");
        std::fs::create_dir_all(&dir).unwrap();
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]));
        img.save(dir.join("a.png")).unwrap();

        let mut device = ImageFolderDevice::new(&dir);
        device.acquire().unwrap();
        let first = device.frame().unwrap();
        let second = device.frame().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.width, 4);

        std::fs::remove_dir_all(&dir).ok();
    }
}
