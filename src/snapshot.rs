//! Simulated security camera snapshot
//!
//! The "camera" is a static image file on disk. Capturing decodes it and
//! resizes it with bilinear filtering to the configured size (200x150 by
//! default), producing raw RGBA pixels the GUI can show directly.

use crate::config::CameraSettings;
use crate::error::{Result, SmartHomeError};
use image::ImageReader;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Decoded, resized snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes
    pub rgba: Vec<u8>,
}

/// Camera that "captures" by loading a fixed image file
#[derive(Debug, Clone)]
pub struct SnapshotCamera {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl SnapshotCamera {
    /// Camera reading `path` and resizing to `width` x `height`
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }

    /// Camera described by the configuration file
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(&settings.snapshot_path, settings.width, settings.height)
    }

    /// Image file this camera reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and resize the snapshot image
    ///
    /// Reads synchronously; a missing or undecodable file is returned as
    /// `SmartHomeError::SnapshotUnavailable`.
    pub fn capture(&self) -> Result<Snapshot> {
        debug!("Capturing snapshot from {}", self.path.display());

        let unavailable = |source| SmartHomeError::SnapshotUnavailable {
            path: self.path.clone(),
            source,
        };

        let img = ImageReader::open(&self.path)
            .map_err(|e| unavailable(image::ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| unavailable(image::ImageError::IoError(e)))?
            .decode()
            .map_err(unavailable)?;

        // Triangle is the bilinear filter
        let resized = img.resize_exact(self.width, self.height, FilterType::Triangle);
        let rgba = resized.to_rgba8().into_raw();

        info!(
            "Captured {}x{} snapshot from {}",
            self.width,
            self.height,
            self.path.display()
        );

        Ok(Snapshot {
            width: self.width,
            height: self.height,
            rgba,
        })
    }
}

impl Default for SnapshotCamera {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}
