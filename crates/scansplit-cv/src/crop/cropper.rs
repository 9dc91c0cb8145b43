//! Region cropping and crop file output

use crate::error::{CropError, Result};
use crate::utils::ImageUtils;
use image::{DynamicImage, GenericImageView};
use log::debug;
use scansplit_core::{CropName, Region};
use std::path::{Path, PathBuf};

/// Cuts accepted regions out of a sheet and writes them next to it.
#[derive(Debug, Clone)]
pub struct Cropper {
    jpeg_quality: u8,
}

impl Cropper {
    pub fn new(jpeg_quality: u8) -> Self {
        Self { jpeg_quality }
    }

    /// Copy of the pixels inside `region`, clipped to the image.
    pub fn crop(image: &DynamicImage, region: &Region) -> Result<DynamicImage> {
        let (width, height) = image.dimensions();
        let clipped = region
            .clamp_to(width, height)
            .ok_or(CropError::RegionOutOfBounds {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                image_width: width,
                image_height: height,
            })?;

        Ok(image.crop_imm(clipped.x, clipped.y, clipped.width, clipped.height))
    }

    /// Write crop number `index` of `name` into `dir`, returning its path.
    pub fn write_crop(
        &self,
        image: &DynamicImage,
        region: &Region,
        name: &CropName,
        dir: &Path,
        index: usize,
    ) -> Result<PathBuf> {
        let cropped = Self::crop(image, region)?;
        let path = name.path_in(dir, index);

        ImageUtils::save(&cropped, &path, self.jpeg_quality)?;
        debug!(
            "Wrote {:?} ({}x{} at {},{})",
            path, region.width, region.height, region.x, region.y
        );

        Ok(path)
    }
}

impl Default for Cropper {
    fn default() -> Self {
        Self::new(crate::detection::config::DEFAULT_JPEG_QUALITY)
    }
}
