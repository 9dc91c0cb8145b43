//! Output file naming for generated crops

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Substring that marks a file as a generated crop.
pub const CROP_MARKER: &str = "-Crop-";

/// Name parts of a source sheet, used to derive its crop file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropName {
    /// File stem of the source, e.g. `scan01` for `scan01.jpg`.
    pub base: String,
    /// Extension including the leading dot, or empty.
    pub extension: String,
}

impl CropName {
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    /// Split a source path into stem and dotted extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let base = path
            .file_stem()
            .with_context(|| format!("Path has no file name: {:?}", path))?
            .to_str()
            .with_context(|| format!("File name is not valid UTF-8: {:?}", path))?;

        let extension = match path.extension() {
            Some(ext) => format!(
                ".{}",
                ext.to_str()
                    .with_context(|| format!("Extension is not valid UTF-8: {:?}", path))?
            ),
            None => String::new(),
        };

        Ok(Self::new(base, extension))
    }

    /// `{base}-Crop-{index}{extension}`
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{}{}{}", self.base, CROP_MARKER, index, self.extension)
    }

    pub fn path_in(&self, dir: &Path, index: usize) -> PathBuf {
        dir.join(self.file_name(index))
    }
}

/// True if the file name carries the crop marker.
pub fn is_generated_crop(file_name: &str) -> bool {
    file_name.contains(CROP_MARKER)
}
