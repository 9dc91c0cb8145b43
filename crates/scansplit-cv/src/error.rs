//! Error types for scansplit-cv

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for sheet splitting operations
pub type Result<T> = std::result::Result<T, CropError>;

#[derive(Error, Debug)]
pub enum CropError {
    /// Source sheet could not be opened or decoded
    #[error("Failed to load image {path:?}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A cropped image could not be encoded or written
    #[error("Failed to write crop {path:?}")]
    CropWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// EXIF date could not be stamped into a crop
    #[error("Failed to stamp metadata on {path:?}: {message}")]
    Metadata { path: PathBuf, message: String },

    #[error("I/O error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Region does not overlap the source image
    #[error("Region {x},{y} {width}x{height} lies outside a {image_width}x{image_height} image")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("Invalid source path {path:?}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },
}

impl CropError {
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Metadata failures leave a usable crop behind; everything else loses the file.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CropError::Metadata { .. })
    }
}
